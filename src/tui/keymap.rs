//! Normal-mode key bindings.
//!
//! | Keys            | Action            |
//! |-----------------|-------------------|
//! | `j` / Down      | cursor down       |
//! | `k` / Up        | cursor up         |
//! | `g` / Home      | top               |
//! | `G` / End       | bottom            |
//! | Ctrl+D / Ctrl+U | half page down/up |
//! | `/`             | search            |
//! | Esc             | clear filter      |
//! | Tab / Shift+Tab | next/prev table   |
//! | `q` / Ctrl+C    | quit              |

use crate::core::action::Action;
use crate::tui::event::TuiEvent;

/// Shown in the help bar as `key:description`.
pub const HELP_ITEMS: [(&str, &str); 4] = [
    ("j/k", "navigate"),
    ("/", "search"),
    ("Tab", "filter"),
    ("q", "quit"),
];

pub fn normal_action(event: &TuiEvent) -> Option<Action> {
    let action = match event {
        TuiEvent::Char('q') | TuiEvent::ForceQuit => Action::Quit,
        TuiEvent::Char('j') | TuiEvent::Down => Action::CursorDown,
        TuiEvent::Char('k') | TuiEvent::Up => Action::CursorUp,
        TuiEvent::Char('g') | TuiEvent::Home => Action::CursorTop,
        TuiEvent::Char('G') | TuiEvent::End => Action::CursorBottom,
        TuiEvent::CtrlD => Action::HalfPageDown,
        TuiEvent::CtrlU => Action::HalfPageUp,
        TuiEvent::Char('/') => Action::BeginSearch,
        TuiEvent::Escape => Action::ClearFilter,
        TuiEvent::Tab => Action::NextScope,
        TuiEvent::BackTab => Action::PrevScope,
        _ => return None,
    };
    Some(action)
}
