use ratatui::Frame;
use ratatui::widgets::Paragraph;

use crate::core::state::ViewState;
use crate::tui::components::SearchInput;
use crate::tui::view;

pub fn draw_ui(frame: &mut Frame, state: &ViewState, search: &SearchInput) {
    let area = frame.area();
    let text = view::compose(state, search, area.width, area.height);
    frame.render_widget(Paragraph::new(text), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_state;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = fixture_state();
        state.set_viewport(view::visible_rows(24));
        terminal
            .draw(|f| draw_ui(f, &state, &SearchInput::new()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("wez-kv"));
        assert!(text.contains("ActivatePaneDirection"));
        assert!(text.contains("6 entries"));
    }

    #[test]
    fn test_draw_ui_narrow_terminal() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = fixture_state();
        terminal
            .draw(|f| draw_ui(f, &state, &SearchInput::new()))
            .unwrap();
        assert!(buffer_text(&terminal).contains("wez-kv"));
    }
}
