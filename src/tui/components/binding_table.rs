//! # BindingTable Component
//!
//! The column header and the visible slice of filtered bindings.
//!
//! Four columns: table, modifiers and key are fixed width, action takes what
//! is left (never less than [`MIN_ACTION_WIDTH`]). Padding is computed from
//! display width, so highlight spans and wide characters don't shift columns.
//!
//! Fuzzy highlights arrive as char positions into
//! `"{modifiers} {key} {action}"`. Each column takes the slice of positions
//! that falls inside its own field.

use ratatui::text::{Line, Span};
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

use super::{pad, spans_width};
use crate::core::parser::Binding;
use crate::core::state::ViewState;
use crate::tui::component::Component;
use crate::tui::theme;

pub const TABLE_WIDTH: usize = 18;
pub const MODIFIERS_WIDTH: usize = 18;
pub const KEY_WIDTH: usize = 20;
pub const MIN_ACTION_WIDTH: usize = 20;
/// Leading space, three column gaps, one spare column.
const COLUMN_OVERHEAD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub table: usize,
    pub modifiers: usize,
    pub key: usize,
    pub action: usize,
}

impl ColumnWidths {
    pub fn for_width(width: usize) -> Self {
        let fixed = TABLE_WIDTH + MODIFIERS_WIDTH + KEY_WIDTH + COLUMN_OVERHEAD;
        Self {
            table: TABLE_WIDTH,
            modifiers: MODIFIERS_WIDTH,
            key: KEY_WIDTH,
            action: width.saturating_sub(fixed).max(MIN_ACTION_WIDTH),
        }
    }
}

pub struct BindingTable<'a> {
    pub state: &'a ViewState,
    /// Row slots to fill; empty slots become blank lines.
    pub rows: usize,
}

impl<'a> BindingTable<'a> {
    pub fn new(state: &'a ViewState, rows: usize) -> Self {
        Self { state, rows }
    }

    pub fn header(width: usize) -> Line<'static> {
        let cols = ColumnWidths::for_width(width);
        let text = format!(
            " {:<tw$} {:<mw$} {:<kw$} {}",
            "Table",
            "Modifiers",
            "Key",
            "Action",
            tw = cols.table,
            mw = cols.modifiers,
            kw = cols.key,
        );
        Line::styled(text, theme::column_header())
    }

    fn row(binding: &Binding, positions: &[usize], selected: bool, width: usize) -> Line<'static> {
        let cols = ColumnWidths::for_width(width);

        let key_start = binding.modifiers.chars().count() + 1;
        let action_start = key_start + binding.key.chars().count() + 1;

        let table = styled_chars(binding.table.chars().map(|c| (c, theme::table_name())));
        let modifiers = highlighted(
            modifier_chars(&binding.modifiers),
            0,
            positions,
        );
        let key = highlighted(
            binding.key.chars().map(|c| (c, theme::key())),
            key_start,
            positions,
        );
        let action = highlighted(
            truncate(&binding.action, cols.action).map(|c| (c, theme::action())),
            action_start,
            positions,
        );

        let mut spans = vec![Span::raw(" ")];
        for (cell, cell_width) in [(table, cols.table), (modifiers, cols.modifiers), (key, cols.key)] {
            let used = spans_width(&cell);
            spans.extend(cell);
            spans.push(pad(cell_width.saturating_sub(used)));
            spans.push(Span::raw(" "));
        }
        spans.extend(action);

        if !selected {
            return Line::from(spans);
        }
        let used = spans_width(&spans);
        spans.push(pad(width.saturating_sub(used)));
        Line::from(spans).style(theme::selected_row())
    }
}

impl Component for BindingTable<'_> {
    fn render(&self, width: usize) -> Vec<Line<'static>> {
        let cursor = self.state.cursor();
        let mut lines: Vec<Line<'static>> = self
            .state
            .visible()
            .take(self.rows)
            .map(|(i, row)| {
                Self::row(self.state.binding(row), &row.positions, i == cursor, width)
            })
            .collect();
        lines.resize(self.rows, Line::default());
        lines
    }
}

/// Modifier text with each `CTRL`/`SHIFT`/... token in its own color and the
/// ` | ` joiners muted.
fn modifier_chars(modifiers: &str) -> Vec<(char, Style)> {
    let mut out = Vec::new();
    for (i, token) in modifiers.split(" | ").enumerate() {
        if i > 0 {
            out.extend(" | ".chars().map(|c| (c, theme::modifier_separator())));
        }
        let style = theme::modifier(token);
        out.extend(token.chars().map(|c| (c, style)));
    }
    out
}

/// Chars of `text` that fit in `width` columns, with `…` marking a cut.
fn truncate(text: &str, width: usize) -> impl Iterator<Item = char> + '_ {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    let budget = if total > width { width.saturating_sub(1) } else { width };
    let mut used = 0;
    text.chars()
        .take_while(move |c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .chain((total > width).then_some('…'))
}

/// Apply the fuzzy-match style to chars whose position (offset by `start`)
/// is in `positions`.
fn highlighted(
    chars: impl IntoIterator<Item = (char, Style)>,
    start: usize,
    positions: &[usize],
) -> Vec<Span<'static>> {
    styled_chars(chars.into_iter().enumerate().map(|(i, (c, style))| {
        if positions.binary_search(&(start + i)).is_ok() {
            (c, theme::fuzzy_match())
        } else {
            (c, style)
        }
    }))
}

/// Collapse runs of equally styled chars into spans.
fn styled_chars(chars: impl IntoIterator<Item = (char, Style)>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (c, style) in chars {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}
