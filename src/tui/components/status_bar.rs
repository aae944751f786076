//! # StatusBar Component
//!
//! The line under the table. Three forms, by priority:
//!
//! 1. **Searching**: live input with cursor, `N/M matches` on the right
//! 2. **Query applied**: `> query`, `N/M matches` on the right
//! 3. **Default**: `N entries`

use ratatui::text::{Line, Span};

use super::search_input::{PROMPT, SearchInput};
use super::{gap, pad};
use crate::tui::component::Component;
use crate::tui::theme;

pub struct StatusBar<'a> {
    pub input: &'a SearchInput,
    pub searching: bool,
    pub query: &'a str,
    /// Rows after filtering.
    pub shown: usize,
    /// Bindings before filtering.
    pub total: usize,
}

impl Component for StatusBar<'_> {
    fn render(&self, width: usize) -> Vec<Line<'static>> {
        let left: Vec<Span<'static>> = if self.searching {
            self.input.line(true).spans
        } else if !self.query.is_empty() {
            vec![
                Span::styled(PROMPT, theme::search_prompt()),
                Span::raw(self.query.to_string()),
            ]
        } else {
            let count = format!("{} entries", self.shown);
            return vec![Line::from(vec![
                Span::raw(" "),
                Span::styled(count, theme::match_count()),
            ])];
        };

        let count = vec![Span::styled(
            format!("{}/{} matches", self.shown, self.total),
            theme::match_count(),
        )];
        let spacing = gap(width, &left, &count, 2);

        let mut spans = vec![Span::raw(" ")];
        spans.extend(left);
        spans.push(pad(spacing));
        spans.extend(count);
        vec![Line::from(spans)]
    }
}
