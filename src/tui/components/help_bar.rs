use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::keymap::HELP_ITEMS;
use crate::tui::theme;

/// Bottom line: `j/k:navigate  /:search  Tab:filter  q:quit`.
pub struct HelpBar;

impl Component for HelpBar {
    fn render(&self, _width: usize) -> Vec<Line<'static>> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in HELP_ITEMS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", theme::help()));
            }
            spans.push(Span::styled(*key, theme::help_key()));
            spans.push(Span::styled(format!(":{desc}"), theme::help()));
        }
        vec![Line::from(spans)]
    }
}
