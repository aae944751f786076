//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm::Event ─▶ event::map_event ─▶ TuiEvent
//!                                            │
//!              ┌─────────────────────────────┴──────────────┐
//!              ▼ Normal                                     ▼ Searching
//!      keymap::normal_action                     SearchInput::handle_event
//!              │                                            │
//!              └──────────────▶ core::update ◀──────────────┘
//! ```
//!
//! The loop blocks on the next event and redraws after each one; nothing
//! animates, so there is no tick.

pub mod component;
pub mod components;
pub mod event;
pub mod keymap;
pub mod theme;
mod ui;
pub mod view;

use log::info;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::ViewState;
use crate::tui::component::EventHandler;
use crate::tui::components::{SearchEvent, SearchInput};
use crate::tui::event::{TuiEvent, next_event};

/// TUI-specific presentation state (not part of the engine)
#[derive(Debug, Default)]
pub struct TuiState {
    pub search: SearchInput,
}

impl TuiState {
    /// Seed the search input from whatever query the engine starts with.
    pub fn new(state: &ViewState) -> Self {
        let mut search = SearchInput::new();
        search.set_value(state.query());
        Self { search }
    }
}

pub fn run(mut state: ViewState) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let mut tui = TuiState::new(&state);

    let result = terminal.size().and_then(|size| {
        update(&mut state, Action::SetViewport(view::visible_rows(size.height)));
        event_loop(&mut terminal, &mut state, &mut tui)
    });

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    state: &mut ViewState,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, state, &tui.search))?;

        let Some(event) = next_event()? else {
            continue;
        };
        if handle_event(state, tui, event) == Effect::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

/// Route one event by mode and apply the resulting action.
pub fn handle_event(state: &mut ViewState, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Ctrl+C always quits regardless of mode
    if event == TuiEvent::ForceQuit {
        return update(state, Action::Quit);
    }

    if let TuiEvent::Resize(_, height) = event {
        return update(state, Action::SetViewport(view::visible_rows(height)));
    }

    if state.is_searching() {
        return match tui.search.handle_event(&event) {
            Some(SearchEvent::Changed(query)) => update(state, Action::SetQuery(query)),
            Some(SearchEvent::Confirm | SearchEvent::Cancel) => update(state, Action::EndSearch),
            None => Effect::None,
        };
    }

    let Some(action) = keymap::normal_action(&event) else {
        return Effect::None;
    };
    let effect = update(state, action);
    // Esc may have cleared the query behind the input's back.
    if state.query() != tui.search.value() {
        tui.search.set_value(state.query());
    }
    effect
}
