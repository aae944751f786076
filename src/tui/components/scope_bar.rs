use ratatui::text::{Line, Span};

use crate::core::state::Scope;
use crate::tui::component::Component;
use crate::tui::theme;

const ALL_LABEL: &str = " [All]";

/// The row of table names under the title; the active one is highlighted.
pub struct ScopeBar<'a> {
    pub tables: &'a [String],
    pub active: Scope,
}

impl<'a> ScopeBar<'a> {
    pub fn new(tables: &'a [String], active: Scope) -> Self {
        Self { tables, active }
    }
}

impl Component for ScopeBar<'_> {
    fn render(&self, _width: usize) -> Vec<Line<'static>> {
        let style_for = |active: bool| {
            if active {
                theme::scope_tab_active()
            } else {
                theme::scope_tab()
            }
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(ALL_LABEL, style_for(self.active == Scope::All)),
        ];
        for (i, table) in self.tables.iter().enumerate() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                table.clone(),
                style_for(self.active == Scope::Table(i)),
            ));
        }
        vec![Line::from(spans)]
    }
}
