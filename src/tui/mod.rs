//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. Everything
//! it shows is read from `App`; everything the user does is handed to the
//! `Driver`, which owns the store.
//!
//! ## Redraw Strategy
//!
//! The loop redraws after every batch of events and otherwise sleeps up to
//! `POLL_INTERVAL`. Nothing animates, so an idle terminal costs nothing.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{info, warn};

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::driver::{Driver, Flow};
use crate::store::{ItemStore, SqliteItemStore, StoreError, StoreOpener};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

struct TerminalModeGuard;

impl TerminalModeGuard {
    /// Paste still works without bracketed mode, one key at a time.
    fn enable() -> Self {
        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => info!("Terminal modes enabled (bracketed paste)"),
            Err(e) => warn!("Bracketed paste unavailable: {e}"),
        }
        Self
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
    }
}

/// Opens `<data_dir>/<account>.db` for each submitted account.
pub fn sqlite_opener(config: &ResolvedConfig) -> StoreOpener {
    let data_dir = config.data_dir.clone();
    let page_size = config.page_size;
    Box::new(
        move |account: &str| -> Result<Box<dyn ItemStore>, StoreError> {
            let store = SqliteItemStore::open(&data_dir, account, page_size)?;
            Ok(Box::new(store) as Box<dyn ItemStore>)
        },
    )
}

pub fn run(config: ResolvedConfig) -> crate::Result<()> {
    let mut driver = Driver::new(sqlite_opener(&config));

    let mut terminal = ratatui::init();
    // Restores the terminal on every exit path, including `?` below
    let _terminal_mode_guard = TerminalModeGuard::enable();

    loop {
        terminal.draw(|f| ui::draw_ui(f, &driver.app))?;

        let first_event = poll_event_timeout(POLL_INTERVAL)?;
        let Some(first_event) = first_event else {
            continue;
        };

        // Process first event + drain everything pending before the next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending.take() {
            if let TuiEvent::Key(key) = event
                && driver.dispatch(Action::Key(key))? == Flow::Quit
            {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}
