//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::parser::{Binding, Leader, ParseResult};
use crate::core::state::ViewState;

/// A trimmed-down `wezterm show-keys` dump covering every line class.
pub const SHOW_KEYS_DUMP: &str = "\
Leader: Char('a') CTRL 2.001s
Default key table
-----------------

\tCTRL                 Tab                ->   ActivateTabRelative(1)
\tSHIFT | CTRL         Tab                ->   ActivateTabRelative(-1)
\tSHIFT                Enter              ->   SendString(\"\\n\")
\tALT                  Enter              ->   ToggleFullScreen
\tSHIFT | ALT | CTRL   DownArrow          ->   AdjustPaneSize(Down, 1)
\t                     Copy               ->   CopyTo(Clipboard)
\t                     Paste              ->   PasteFrom(Clipboard)

Key Table: copy_mode
--------------------

\t        Tab          ->   CopyMode(MoveForwardWord)
\tSHIFT   Tab          ->   CopyMode(MoveBackwardWord)
\t        Enter        ->   CopyMode(MoveToStartOfNextLine)
\t        Escape       ->   CopyMode(Close)
\t        F            ->   CopyMode(JumpBackward { prev_char: false })
\tSHIFT   F            ->   CopyMode(JumpBackward { prev_char: false })
\tCTRL    u            ->   CopyMode(ClearPattern)

Key Table: search_mode
----------------------

\t        Enter       ->   CopyMode(PriorMatch)
\t        Escape      ->   CopyMode(Close)
\tCTRL   n           ->   CopyMode(NextMatch)

Mouse
-----

\t               Down { streak: 1, button: Left }           ->   SelectTextAtMouseCursor(Cell)
\tSHIFT          Down { streak: 1, button: Left }           ->   ExtendSelectionToMouseCursor(Cell)
\tSHIFT | ALT    Down { streak: 1, button: Left }           ->   ExtendSelectionToMouseCursor(Block)
\t               Drag { streak: 1, button: Left }           ->   ExtendSelectionToMouseCursor(Cell)

Mouse: alt_screen
-----------------

\t               Down { streak: 1, button: Left }     ->   SelectTextAtMouseCursor(Cell)
\tSHIFT          Down { streak: 1, button: Left }     ->   ExtendSelectionToMouseCursor(Cell)
";

fn binding(table: &str, modifiers: &str, key: &str, action: &str) -> Binding {
    Binding {
        table: table.to_string(),
        modifiers: modifiers.to_string(),
        key: key.to_string(),
        action: action.to_string(),
    }
}

/// Six bindings over three tables, with a leader.
pub fn fixture_result() -> ParseResult {
    ParseResult {
        leader: Some(Leader {
            key: "a".to_string(),
            modifiers: "CTRL".to_string(),
            timeout: "1000ms".to_string(),
        }),
        bindings: vec![
            binding("Default", "CTRL", "c", "CopyTo"),
            binding("Default", "CTRL", "v", "Paste"),
            binding("Default", "", "Enter", "ActivatePaneDirection"),
            binding("Copy", "CTRL", "c", "CopyMode"),
            binding("Copy", "", "q", "QuitCopy"),
            binding("Search", "", "/", "SearchForward"),
        ],
        tables: vec!["Default".into(), "Copy".into(), "Search".into()],
    }
}

pub fn fixture_state() -> ViewState {
    ViewState::new(fixture_result())
}
