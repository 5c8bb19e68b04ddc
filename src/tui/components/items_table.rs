//! # ItemsTable Component
//!
//! Transient render wrapper over `ItemsView`: a bordered two-column table
//! (`Done`, `@TODO`) with an 8-row viewport, followed by the key help.
//!
//! Selection and scroll offset are owned by `ItemsView`; a fresh `TableState`
//! is built from them every frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Row, Table, TableState};

use crate::core::widgets::{ItemsView, VISIBLE_ROWS};
use crate::tui::component::Component;

pub const HELP_LINES: [&str; 3] = [
    "Use ↑ and ↓ to change selection",
    "Press ENTER to toggle selected item",
    "Press DELETE to delete selected item",
];

const DONE_WIDTH: u16 = 4;
const DESCRIPTION_WIDTH: u16 = 30;

pub struct ItemsTable<'a> {
    pub view: &'a ItemsView,
}

impl<'a> ItemsTable<'a> {
    pub fn new(view: &'a ItemsView) -> Self {
        Self { view }
    }

    /// Rows for the table body, one per item.
    fn rows(&self) -> Vec<Row<'a>> {
        self.view
            .items()
            .iter()
            .map(|item| Row::new(vec![item.done_label(), item.description.as_str()]))
            .collect()
    }
}

impl Component for ItemsTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Header row plus one border line above and below
        let table_height = VISIBLE_ROWS as u16 + 3;
        let layout = Layout::vertical([
            Constraint::Length(table_height),
            Constraint::Length(HELP_LINES.len() as u16),
        ]);
        let [table_area, help_area] = layout.areas(area);

        let header = Row::new(vec!["Done", "@TODO"]).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            self.rows(),
            [
                Constraint::Length(DONE_WIDTH),
                Constraint::Length(DESCRIPTION_WIDTH),
            ],
        )
        .header(header)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Indexed(57))
                .add_modifier(Modifier::BOLD),
        );

        let mut state = TableState::default()
            .with_offset(self.view.offset())
            .with_selected(self.view.selected());
        frame.render_stateful_widget(table, table_area, &mut state);

        let help: Vec<Line> = HELP_LINES.iter().map(|line| Line::raw(*line)).collect();
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}
