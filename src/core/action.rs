//! # Actions
//!
//! Everything the user can do to the keybinding view becomes an `Action`.
//! Pressing `j` is `Action::CursorDown`, typing in the search box is
//! `Action::SetQuery(text)`, a terminal resize is `Action::SetViewport(rows)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an [`Effect`] for the event loop. No I/O happens here.
//!
//! ```text
//! ViewState + Action  →  update()  →  ViewState' + Effect
//! ```

use log::debug;

use crate::core::state::{Scope, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    HalfPageUp,
    HalfPageDown,
    NextScope,
    PrevScope,
    SetScope(Scope),
    /// Escape in normal mode: clear the query, or failing that the scope.
    ClearFilter,
    BeginSearch,
    /// Confirm or cancel the search input; the query is kept either way.
    EndSearch,
    SetQuery(String),
    /// Viewport capacity in rows, computed by the view from terminal height.
    SetViewport(usize),
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(state: &mut ViewState, action: Action) -> Effect {
    debug!("Action: {action:?}");
    match action {
        Action::Quit => return Effect::Quit,
        Action::CursorUp => state.move_cursor(-1),
        Action::CursorDown => state.move_cursor(1),
        Action::CursorTop => state.move_to_top(),
        Action::CursorBottom => state.move_to_bottom(),
        Action::HalfPageUp => state.page_delta(false),
        Action::HalfPageDown => state.page_delta(true),
        Action::NextScope => state.cycle_scope_forward(),
        Action::PrevScope => state.cycle_scope_backward(),
        Action::SetScope(scope) => state.set_scope(scope),
        Action::ClearFilter => state.clear_filter(),
        Action::BeginSearch => state.begin_search(),
        Action::EndSearch => state.end_search(),
        Action::SetQuery(query) => state.set_query(query),
        Action::SetViewport(rows) => state.set_viewport(rows),
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixture_state;

    #[test]
    fn test_quit_is_the_only_quitting_action() {
        let mut state = fixture_state();
        assert_eq!(update(&mut state, Action::CursorDown), Effect::None);
        assert_eq!(update(&mut state, Action::ClearFilter), Effect::None);
        assert_eq!(update(&mut state, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_actions_drive_state() {
        let mut state = fixture_state();
        update(&mut state, Action::SetViewport(4));
        update(&mut state, Action::HalfPageDown);
        assert_eq!(state.cursor(), 2);
        update(&mut state, Action::CursorBottom);
        assert_eq!(state.cursor(), 5);
        update(&mut state, Action::CursorTop);
        assert_eq!(state.cursor(), 0);

        update(&mut state, Action::NextScope);
        assert_eq!(state.scope(), Scope::Table(0));
        update(&mut state, Action::PrevScope);
        assert_eq!(state.scope(), Scope::All);
        update(&mut state, Action::SetScope(Scope::Table(2)));
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn test_search_round_trip_keeps_query() {
        let mut state = fixture_state();
        update(&mut state, Action::BeginSearch);
        update(&mut state, Action::SetQuery("Paste".into()));
        update(&mut state, Action::EndSearch);
        assert!(!state.is_searching());
        assert_eq!(state.rows().len(), 1);

        update(&mut state, Action::ClearFilter);
        assert_eq!(state.query(), "");
        assert_eq!(state.rows().len(), 6);
    }
}
