use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they draw as props (struct fields) and
/// render into a `Frame` within a given `Rect`. Slide components are
/// transient: built fresh for each draw from a `RenderedPage`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
