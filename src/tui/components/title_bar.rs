//! # TitleBar Component
//!
//! App name on the left, the leader key on the right when one is configured:
//!
//! ```text
//!  wez-kv                                 Leader: CTRL+Char('a') (2.001s)
//! ```

use ratatui::text::{Line, Span};

use super::{gap, pad};
use crate::core::parser::Leader;
use crate::tui::component::Component;
use crate::tui::theme;

pub const APP_TITLE: &str = " wez-kv";

pub struct TitleBar<'a> {
    pub leader: Option<&'a Leader>,
}

impl<'a> TitleBar<'a> {
    pub fn new(leader: Option<&'a Leader>) -> Self {
        Self { leader }
    }
}

/// `CTRL | SHIFT` + `a` → `CTRL | SHIFT+a`.
fn leader_chord(leader: &Leader) -> String {
    if leader.modifiers.is_empty() {
        leader.key.clone()
    } else {
        format!("{}+{}", leader.modifiers, leader.key)
    }
}

impl Component for TitleBar<'_> {
    fn render(&self, width: usize) -> Vec<Line<'static>> {
        let title = vec![Span::styled(APP_TITLE, theme::title())];
        let Some(leader) = self.leader else {
            return vec![Line::from(title)];
        };

        let right = vec![
            Span::styled("Leader: ", theme::leader_label()),
            Span::styled(leader_chord(leader), theme::leader_value()),
            Span::styled(format!(" ({})", leader.timeout), theme::leader_label()),
        ];
        let spacing = gap(width, &title, &right, 0);

        let mut spans = title;
        spans.push(pad(spacing));
        spans.extend(right);
        vec![Line::from(spans)]
    }
}
