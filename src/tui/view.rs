//! # Screen Composition
//!
//! Lays the whole screen out as one [`Text`], a pure function of the engine
//! state, the search input, and the terminal size. `ui::draw_ui` just paints
//! the result; tests read it back with [`text_to_string`].
//!
//! Line budget, top to bottom:
//!
//! ```text
//! title            1
//! scope bar        1
//! separator        1
//! column header    1
//! separator        1
//! rows             visible_rows(height)
//! separator        1
//! status bar       1
//! help bar         1
//! ```

use ratatui::text::{Line, Text};

use crate::core::state::ViewState;
use crate::tui::component::Component;
use crate::tui::components::{
    BindingTable, HelpBar, ScopeBar, SearchInput, StatusBar, TitleBar,
};
use crate::tui::theme;

/// Lines that are not table rows.
pub const CHROME_ROWS: usize = 8;

/// Table rows that fit in a terminal `height` lines tall; at least one.
pub fn visible_rows(height: u16) -> usize {
    (height as usize).saturating_sub(CHROME_ROWS).max(1)
}

fn separator(width: usize) -> Line<'static> {
    Line::styled(
        format!(" {}", "─".repeat(width.saturating_sub(2))),
        theme::separator(),
    )
}

/// Build the full screen. Zero width or height yields empty text.
pub fn compose(state: &ViewState, search: &SearchInput, width: u16, height: u16) -> Text<'static> {
    if width == 0 || height == 0 {
        return Text::default();
    }
    let width = width as usize;

    let status = StatusBar {
        input: search,
        searching: state.is_searching(),
        query: state.query(),
        shown: state.rows().len(),
        total: state.total(),
    };

    let mut lines = Vec::with_capacity(height as usize);
    lines.extend(TitleBar::new(state.leader()).render(width));
    lines.extend(ScopeBar::new(state.tables(), state.scope()).render(width));
    lines.push(separator(width));
    lines.push(BindingTable::header(width));
    lines.push(separator(width));
    lines.extend(BindingTable::new(state, visible_rows(height)).render(width));
    lines.push(separator(width));
    lines.extend(status.render(width));
    lines.extend(HelpBar.render(width));
    Text::from(lines)
}

/// The characters of a line without styling.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// The characters of a text block without styling, lines joined by `\n`.
pub fn text_to_string(text: &Text<'_>) -> String {
    text.lines.iter().map(line_text).collect::<Vec<_>>().join("\n")
}
