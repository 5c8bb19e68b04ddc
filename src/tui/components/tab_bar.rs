//! # TabBar Component
//!
//! One line listing the visible tabs with the active one highlighted.
//!
//! Stateless: labels and the active index are props copied from `App` each
//! frame. Before an account is chosen there is only one label.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::state::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    pub labels: Vec<&'static str>,
    pub active: usize,
}

impl TabBar {
    pub fn new(tabs: &[Tab], active: usize) -> Self {
        Self {
            labels: tabs.iter().map(|tab| tab.label()).collect(),
            active,
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(self.labels.clone())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|")
            .select(self.active);
        frame.render_widget(tabs, area);
    }
}
