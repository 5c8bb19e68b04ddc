use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields, usually borrowed from
/// `App`) and render to a `Frame` within a given `Rect`. Input handling is not
/// part of this trait: key handling lives with the state in `core::widgets`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
