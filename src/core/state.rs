//! # Application State
//!
//! Everything the controller needs to decide what a key or a completed effect
//! means. No store handle and no terminal types live here.
//!
//! ```text
//! App
//! ├── tabs: Vec<Tab>                 // [Account] → [Account, Items, NewItem]
//! ├── active_tab: usize              // index into tabs
//! ├── account: Option<String>        // set once, on the first AccountOpened
//! ├── account_input: TextField       // tab 0, 12 chars
//! ├── description_input: TextField   // tab 2, 100 chars
//! └── items: ItemsView               // tab 1
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `tabs` and `active_tab` are private so the tab set can only grow and the
//! active index always stays in range.

use crate::core::widgets::{ItemsView, TextField, Widget};

pub const ACCOUNT_NAME_LIMIT: usize = 12;
pub const DESCRIPTION_LIMIT: usize = 100;
pub const DESCRIPTION_WIDTH: u16 = 30;

/// One tab of the interface, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Account,
    Items,
    NewItem,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Account, Tab::Items, Tab::NewItem];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Account => "Account",
            Tab::Items => "@TODO",
            Tab::NewItem => "New @TODO",
        }
    }
}

/// Where the session is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Only the account tab exists.
    AwaitingAccount,
    /// All three tabs exist.
    AccountActive,
}

pub struct App {
    tabs: Vec<Tab>,
    active_tab: usize,
    pub account: Option<String>,
    pub account_input: TextField,
    pub description_input: TextField,
    pub items: ItemsView,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab::Account],
            active_tab: 0,
            account: None,
            account_input: TextField::new(ACCOUNT_NAME_LIMIT),
            description_input: TextField::new(DESCRIPTION_LIMIT)
                .with_placeholder("What do you need to do?")
                .with_width(DESCRIPTION_WIDTH),
            items: ItemsView::new(),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn active(&self) -> Tab {
        self.tabs[self.active_tab]
    }

    pub fn phase(&self) -> Phase {
        if self.tabs.len() < Tab::ALL.len() {
            Phase::AwaitingAccount
        } else {
            Phase::AccountActive
        }
    }

    /// Cycle focus to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
    }

    /// Show all tabs and focus the items tab. Returns false (and leaves focus
    /// alone) if the tabs were already expanded.
    pub fn expand_tabs(&mut self) -> bool {
        if self.phase() == Phase::AccountActive {
            return false;
        }
        self.tabs = Tab::ALL.to_vec();
        self.active_tab = 1;
        true
    }

    /// The widget that receives keys the controller doesn't handle itself.
    pub fn focused_widget_mut(&mut self) -> &mut dyn Widget {
        match self.active() {
            Tab::Account => &mut self.account_input,
            Tab::Items => &mut self.items,
            Tab::NewItem => &mut self.description_input,
        }
    }
}
