//! # TUI Components
//!
//! Every piece of the screen is a component that lays itself out as styled
//! lines (see [`Component`](crate::tui::component::Component)).
//!
//! ```text
//!  wez-kv                                   Leader: CTRL+a (1000ms)   ← TitleBar
//!   [All]  Default  copy_mode  Mouse                                  ← ScopeBar
//!  ───────────────────────────────────────────────────────────────
//!  Table              Modifiers          Key                  Action  ← BindingTable
//!  ───────────────────────────────────────────────────────────────
//!  Default            CTRL               Tab                  Activ…
//!  ...
//!  ───────────────────────────────────────────────────────────────
//!  > paste                                             1/23 matches   ← StatusBar
//!  j/k:navigate  /:search  Tab:filter  q:quit                         ← HelpBar
//! ```
//!
//! Stateless components (`TitleBar`, `ScopeBar`, `BindingTable`, `StatusBar`,
//! `HelpBar`) are built per frame from borrowed state. `SearchInput` is the
//! one stateful component: it lives in `TuiState` and handles key events.

mod binding_table;
mod help_bar;
mod scope_bar;
pub mod search_input;
mod status_bar;
mod title_bar;

pub use binding_table::{BindingTable, ColumnWidths};
pub use help_bar::HelpBar;
pub use scope_bar::ScopeBar;
pub use search_input::{SearchEvent, SearchInput};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;

use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Visual column count of a run of spans, ignoring their styles.
pub(crate) fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.as_ref().width()).sum()
}

/// `n` spaces as an unstyled span.
pub(crate) fn pad(n: usize) -> Span<'static> {
    Span::raw(" ".repeat(n))
}

/// Spaces needed to push `right` against the right edge, at least one.
pub(crate) fn gap(width: usize, left: &[Span<'_>], right: &[Span<'_>], margin: usize) -> usize {
    width
        .saturating_sub(spans_width(left) + spans_width(right) + margin)
        .max(1)
}
