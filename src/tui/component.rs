use ratatui::text::Line;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) and lay themselves
/// out as styled lines for a given terminal width. Producing lines instead of
/// drawing into a `Frame` keeps the whole screen a pure function of state,
/// which the view composes and tests read back as plain text.
pub trait Component {
    /// Lay the component out at `width` columns.
    fn render(&self, width: usize) -> Vec<Line<'static>>;
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
