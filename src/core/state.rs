//! # View State
//!
//! The filter/navigation engine. Owns the parsed keybindings (read-only) and
//! everything the user can change while browsing them.
//!
//! ```text
//! ViewState
//! ├── result: ParseResult       // parsed once, never mutated
//! ├── scope: Scope              // All | Table(i)
//! ├── query: String             // fuzzy text filter
//! ├── searching: bool           // search input has focus
//! ├── cursor / offset: usize    // selection and top of viewport
//! ├── viewport_rows: usize      // capacity reported by the view, >= 1
//! └── rows: Vec<FilteredRow>    // bindings passing both filters
//! ```
//!
//! Scope and query changes refilter and reset the cursor. Navigation only
//! moves the cursor and keeps the viewport around it:
//!
//! - `cursor < max(1, rows.len())`
//! - `offset <= cursor < offset + viewport_rows` while rows are non-empty
//! - `offset` is the smallest value satisfying the above
//!
//! State changes from the UI go through `update(state, action)` in action.rs.

use log::{debug, warn};

use crate::core::fuzzy::FuzzyMatcher;
use crate::core::parser::{Binding, Leader, ParseResult};

/// Which table the list is restricted to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    /// Index into `ParseResult::tables`.
    Table(usize),
}

/// A binding that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRow {
    /// Index into `ParseResult::bindings`.
    pub binding: usize,
    /// Matched char positions in [`Binding::searchable`]; empty without a query.
    pub positions: Vec<usize>,
}

pub struct ViewState {
    result: ParseResult,
    scope: Scope,
    query: String,
    searching: bool,
    cursor: usize,
    offset: usize,
    viewport_rows: usize,
    rows: Vec<FilteredRow>,
    matcher: FuzzyMatcher,
}

impl ViewState {
    pub fn new(result: ParseResult) -> Self {
        let mut state = Self {
            result,
            scope: Scope::All,
            query: String::new(),
            searching: false,
            cursor: 0,
            offset: 0,
            viewport_rows: 1,
            rows: Vec::new(),
            matcher: FuzzyMatcher::new(),
        };
        state.refilter();
        state
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    pub fn leader(&self) -> Option<&Leader> {
        self.result.leader.as_ref()
    }

    pub fn tables(&self) -> &[String] {
        &self.result.tables
    }

    pub fn total(&self) -> usize {
        self.result.bindings.len()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Name of the active table, `None` for [`Scope::All`].
    pub fn scope_name(&self) -> Option<&str> {
        match self.scope {
            Scope::All => None,
            Scope::Table(i) => self.result.tables.get(i).map(String::as_str),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn rows(&self) -> &[FilteredRow] {
        &self.rows
    }

    pub fn binding(&self, row: &FilteredRow) -> &Binding {
        &self.result.bindings[row.binding]
    }

    /// Bindings in filtered order.
    pub fn filtered(&self) -> impl Iterator<Item = &Binding> {
        self.rows.iter().map(|row| self.binding(row))
    }

    pub fn selected(&self) -> Option<&Binding> {
        self.rows.get(self.cursor).map(|row| self.binding(row))
    }

    /// The rows currently inside the viewport, with their filtered index.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &FilteredRow)> {
        self.rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.viewport_rows)
    }

    // ------------------------------------------------------------------
    // Filter transitions
    // ------------------------------------------------------------------

    /// Restrict to one table (or all). Out-of-range indices are ignored.
    pub fn set_scope(&mut self, scope: Scope) {
        if let Scope::Table(i) = scope
            && i >= self.result.tables.len()
        {
            warn!("Ignoring scope index {i}, only {} tables", self.result.tables.len());
            return;
        }
        self.scope = scope;
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// All → tables[0] → … → tables[n-1] → All.
    pub fn cycle_scope_forward(&mut self) {
        let next = match self.scope {
            Scope::All if self.result.tables.is_empty() => Scope::All,
            Scope::All => Scope::Table(0),
            Scope::Table(i) if i + 1 < self.result.tables.len() => Scope::Table(i + 1),
            Scope::Table(_) => Scope::All,
        };
        self.scope = next;
        self.refilter();
    }

    /// All → tables[n-1] → … → tables[0] → All.
    pub fn cycle_scope_backward(&mut self) {
        let prev = match self.scope {
            Scope::All => match self.result.tables.len() {
                0 => Scope::All,
                n => Scope::Table(n - 1),
            },
            Scope::Table(0) => Scope::All,
            Scope::Table(i) => Scope::Table(i - 1),
        };
        self.scope = prev;
        self.refilter();
    }

    /// Escape in normal mode: drop the query first, then the scope.
    pub fn clear_filter(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        } else if self.scope != Scope::All {
            self.scope = Scope::All;
            self.refilter();
        }
    }

    pub fn begin_search(&mut self) {
        self.searching = true;
    }

    /// Leave the search input. The query stays applied.
    pub fn end_search(&mut self) {
        self.searching = false;
    }

    fn refilter(&mut self) {
        let table = self.scope_name().map(str::to_owned);
        let candidates: Vec<usize> = self
            .result
            .bindings
            .iter()
            .enumerate()
            .filter(|(_, b)| table.as_deref().is_none_or(|t| b.table == t))
            .map(|(i, _)| i)
            .collect();

        self.rows = if self.query.is_empty() {
            candidates
                .into_iter()
                .map(|binding| FilteredRow {
                    binding,
                    positions: Vec::new(),
                })
                .collect()
        } else {
            let haystacks: Vec<String> = candidates
                .iter()
                .map(|&i| self.result.bindings[i].searchable())
                .collect();
            self.matcher
                .rank(&self.query, &haystacks)
                .into_iter()
                .map(|m| FilteredRow {
                    binding: candidates[m.index],
                    positions: m.positions,
                })
                .collect()
        };

        self.cursor = 0;
        self.offset = 0;
        debug!(
            "Refiltered: scope={:?} query={:?} rows={}",
            self.scope,
            self.query,
            self.rows.len()
        );
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move the cursor by `delta`, clamped to the rows.
    pub fn move_cursor(&mut self, delta: isize) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.clamp_view();
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
        self.clamp_view();
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.clamp_view();
    }

    /// Half a viewport down (`down = true`) or up, one row at a time.
    pub fn page_delta(&mut self, down: bool) {
        let step = if down { 1 } else { -1 };
        for _ in 0..self.viewport_rows / 2 {
            self.move_cursor(step);
        }
    }

    /// Viewport capacity from the view layer. Floors at one row.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.clamp_view();
    }

    fn clamp_view(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + self.viewport_rows {
            self.offset = self.cursor + 1 - self.viewport_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture_result, fixture_state};

    fn assert_viewport(state: &ViewState) {
        if state.rows().is_empty() {
            assert_eq!(state.cursor(), 0);
            return;
        }
        assert!(state.cursor() < state.rows().len());
        assert!(state.offset() <= state.cursor());
        assert!(state.cursor() < state.offset() + state.viewport_rows());
    }

    #[test]
    fn test_new_shows_everything() {
        let state = fixture_state();
        assert_eq!(state.rows().len(), 6);
        assert_eq!(state.scope(), Scope::All);
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_searching());
        assert!(state.rows().iter().all(|r| r.positions.is_empty()));
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = fixture_state();
        state.move_cursor(1);
        state.move_cursor(1);
        assert_eq!(state.cursor(), 2);
        state.move_cursor(-1);
        assert_eq!(state.cursor(), 1);
        state.move_to_top();
        assert_eq!(state.cursor(), 0);
        state.move_to_bottom();
        assert_eq!(state.cursor(), 5);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut state = fixture_state();
        state.move_cursor(-1);
        assert_eq!(state.cursor(), 0);
        state.move_to_bottom();
        state.move_cursor(1);
        assert_eq!(state.cursor(), 5);
        state.move_cursor(-100);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_cycle_scope_forward() {
        let mut state = fixture_state();
        let expected = [(Scope::Table(0), 3), (Scope::Table(1), 2), (Scope::Table(2), 1), (Scope::All, 6)];
        for (scope, len) in expected {
            state.cycle_scope_forward();
            assert_eq!(state.scope(), scope);
            assert_eq!(state.rows().len(), len);
        }
    }

    #[test]
    fn test_cycle_scope_backward_wraps_to_last() {
        let mut state = fixture_state();
        state.cycle_scope_backward();
        assert_eq!(state.scope(), Scope::Table(2));
        assert_eq!(state.scope_name(), Some("Search"));
        state.cycle_scope_backward();
        state.cycle_scope_backward();
        state.cycle_scope_backward();
        assert_eq!(state.scope(), Scope::All);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut state = fixture_state();
        state.set_scope(Scope::Table(1));
        for _ in 0..state.tables().len() + 1 {
            state.cycle_scope_forward();
        }
        assert_eq!(state.scope(), Scope::Table(1));
    }

    #[test]
    fn test_cycle_without_tables_stays_all() {
        let mut state = ViewState::new(ParseResult::default());
        state.cycle_scope_forward();
        assert_eq!(state.scope(), Scope::All);
        state.cycle_scope_backward();
        assert_eq!(state.scope(), Scope::All);
    }

    #[test]
    fn test_out_of_range_scope_is_ignored() {
        let mut state = fixture_state();
        state.set_scope(Scope::Table(1));
        state.set_scope(Scope::Table(99));
        assert_eq!(state.scope(), Scope::Table(1));
    }

    #[test]
    fn test_query_filters_to_paste() {
        let mut state = fixture_state();
        state.set_query("Paste");
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.selected().map(|b| b.action.as_str()), Some("Paste"));
        assert!(!state.rows()[0].positions.is_empty());
    }

    #[test]
    fn test_query_ignores_case() {
        let mut state = fixture_state();
        state.set_query("ctrl");
        let lower = state.rows().len();
        assert_eq!(lower, 3);

        state.set_query("Ctrl");
        assert_eq!(state.rows().len(), lower);
        state.set_query("CTRL");
        assert_eq!(state.rows().len(), lower);

        state.set_query("PASTE");
        assert_eq!(state.selected().map(|b| b.action.as_str()), Some("Paste"));
    }

    #[test]
    fn test_scope_and_query_combine() {
        let mut state = fixture_state();
        state.set_scope(Scope::Table(1));
        state.set_query("CopyMode");
        assert_eq!(state.rows().len(), 1);
        assert_eq!(state.filtered().next().map(|b| b.table.as_str()), Some("Copy"));
    }

    #[test]
    fn test_refilter_resets_cursor_and_offset() {
        let mut state = fixture_state();
        state.set_viewport(2);
        state.move_to_bottom();
        assert_eq!(state.offset(), 4);

        state.cycle_scope_forward();
        assert_eq!((state.cursor(), state.offset()), (0, 0));

        state.move_cursor(2);
        state.set_query("c");
        assert_eq!((state.cursor(), state.offset()), (0, 0));
    }

    #[test]
    fn test_clear_filter_query_then_scope() {
        let mut state = fixture_state();
        state.set_scope(Scope::Table(0));
        state.set_query("test");

        state.clear_filter();
        assert_eq!(state.query(), "");
        assert_eq!(state.scope(), Scope::Table(0));

        state.clear_filter();
        assert_eq!(state.scope(), Scope::All);
        assert_eq!(state.rows().len(), 6);

        state.move_cursor(3);
        state.clear_filter();
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_search_mode_keeps_query() {
        let mut state = fixture_state();
        state.begin_search();
        assert!(state.is_searching());
        state.set_query("Copy");
        state.end_search();
        assert!(!state.is_searching());
        assert_eq!(state.query(), "Copy");
    }

    #[test]
    fn test_viewport_scrolls_minimally() {
        let mut state = fixture_state();
        state.set_viewport(3);
        state.move_cursor(2);
        assert_eq!(state.offset(), 0);
        state.move_cursor(1);
        assert_eq!(state.offset(), 1);
        state.move_cursor(-1);
        assert_eq!(state.offset(), 1);
        state.move_cursor(-2);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_page_delta_moves_half_viewport() {
        let mut state = fixture_state();
        state.set_viewport(4);
        state.page_delta(true);
        assert_eq!(state.cursor(), 2);
        state.page_delta(true);
        state.page_delta(true);
        assert_eq!(state.cursor(), 5);
        state.page_delta(false);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_shrinking_viewport_reclamps() {
        let mut state = fixture_state();
        state.set_viewport(10);
        state.move_to_bottom();
        assert_eq!(state.offset(), 0);
        state.set_viewport(2);
        assert_eq!(state.offset(), 4);
        state.set_viewport(0);
        assert_eq!(state.viewport_rows(), 1);
        assert_viewport(&state);
    }

    #[test]
    fn test_navigation_on_empty_rows() {
        let mut state = fixture_state();
        state.set_query("zzzzzz");
        assert!(state.rows().is_empty());
        state.move_cursor(1);
        state.move_to_bottom();
        state.page_delta(true);
        assert_eq!(state.cursor(), 0);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_viewport_invariant_over_event_sequence() {
        let mut state = fixture_state();
        state.set_viewport(3);
        let steps: [fn(&mut ViewState); 8] = [
            |s| s.move_cursor(1),
            |s| s.move_cursor(4),
            |s| s.move_to_bottom(),
            |s| s.page_delta(false),
            |s| s.set_viewport(2),
            |s| s.move_cursor(-1),
            |s| s.move_to_top(),
            |s| s.page_delta(true),
        ];
        for _ in 0..3 {
            for step in steps {
                step(&mut state);
                assert_viewport(&state);
            }
        }
    }

    #[test]
    fn test_visible_window() {
        let mut state = fixture_state();
        state.set_viewport(2);
        state.move_cursor(3);
        let visible: Vec<usize> = state.visible().map(|(i, _)| i).collect();
        assert_eq!(visible, [2, 3]);
    }

    #[test]
    fn test_leader_and_total() {
        let state = ViewState::new(fixture_result());
        assert_eq!(state.total(), 6);
        assert_eq!(state.leader().map(|l| l.key.as_str()), Some("a"));
    }
}
