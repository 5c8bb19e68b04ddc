use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::state::{App, Tab};
use crate::tui::component::Component;
use crate::tui::components::{ItemsTable, TabBar, TextInput};

/// The interface never grows past this many columns/rows.
pub const WINDOW_WIDTH: u16 = 80;
pub const WINDOW_HEIGHT: u16 = 20;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let window = window_area(frame.area());
    let block = Block::new().padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(window);
    frame.render_widget(block, window);

    use Constraint::{Length, Min};
    let [tabs_area, _, content_area] = Layout::vertical([Length(1), Length(1), Min(0)]).areas(inner);

    TabBar::new(app.tabs(), app.active_tab()).render(frame, tabs_area);

    match app.active() {
        Tab::Account => draw_account_tab(frame, content_area, app),
        Tab::Items => draw_items_tab(frame, content_area, app),
        Tab::NewItem => draw_new_item_tab(frame, content_area, app),
    }
}

/// Top-left `WINDOW_WIDTH` x `WINDOW_HEIGHT` region, shrunk to fit small terminals.
fn window_area(area: Rect) -> Rect {
    Rect {
        width: area.width.min(WINDOW_WIDTH),
        height: area.height.min(WINDOW_HEIGHT),
        ..area
    }
}

fn title_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Title line followed by the tab body.
fn split_titled(area: Rect) -> (Rect, Rect) {
    use Constraint::{Length, Min};
    let [title, _, body] = Layout::vertical([Length(1), Length(1), Min(0)]).areas(area);
    (title, body)
}

fn draw_account_tab(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(account) = &app.account {
        let text = format!("Viewing todo for account: {account}");
        frame.render_widget(Paragraph::new(text).style(title_style()), area);
        return;
    }

    let (title_area, input_area) = split_titled(area);
    frame.render_widget(
        Paragraph::new("Account name").style(title_style()),
        title_area,
    );
    TextInput::new(&app.account_input, true).render(frame, input_area);
}

fn draw_items_tab(frame: &mut Frame, area: Rect, app: &App) {
    let (title_area, table_area) = split_titled(area);
    let account = app.account.as_deref().unwrap_or_default();
    frame.render_widget(
        Paragraph::new(format!("{account}'s todo list:")).style(title_style()),
        title_area,
    );
    ItemsTable::new(&app.items).render(frame, table_area);
}

fn draw_new_item_tab(frame: &mut Frame, area: Rect, app: &App) {
    let (title_area, input_area) = split_titled(area);
    frame.render_widget(
        Paragraph::new("Add new todo item:").style(title_style()),
        title_area,
    );
    TextInput::new(&app.description_input, true).render(frame, input_area);
}
