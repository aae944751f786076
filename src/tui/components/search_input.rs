//! # SearchInput Component
//!
//! Single-line text field behind `/`. Every edit is reported as
//! [`SearchEvent::Changed`] so the table filters live while typing.
//!
//! The cursor is a char index, not a byte offset, so multi-byte input
//! edits cleanly.

use ratatui::text::{Line, Span};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

pub const PROMPT: &str = "> ";
pub const CHAR_LIMIT: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The text changed; carries the full new value.
    Changed(String),
    /// Enter: keep the query, return to navigation.
    Confirm,
    /// Esc: also keeps the query.
    Cancel,
}

#[derive(Debug, Default)]
pub struct SearchInput {
    buffer: String,
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replace the text and put the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.buffer = value.chars().take(CHAR_LIMIT).collect();
        self.cursor = self.char_len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    /// Prompt and text; with focus the char under the cursor is reversed.
    pub fn line(&self, focused: bool) -> Line<'static> {
        let mut spans = vec![Span::styled(PROMPT, theme::search_prompt())];
        if !focused {
            spans.push(Span::raw(self.buffer.clone()));
            return Line::from(spans);
        }

        let at = self.byte_at(self.cursor);
        let (before, rest) = self.buffer.split_at(at);
        let mut rest_chars = rest.chars();
        let under = rest_chars.next().map_or(" ".to_string(), String::from);
        spans.push(Span::raw(before.to_string()));
        spans.push(Span::styled(under, theme::search_cursor()));
        spans.push(Span::raw(rest_chars.as_str().to_string()));
        Line::from(spans)
    }
}

impl EventHandler for SearchInput {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match *event {
            TuiEvent::Enter => Some(SearchEvent::Confirm),
            TuiEvent::Escape => Some(SearchEvent::Cancel),
            TuiEvent::Char(c) => {
                if self.char_len() >= CHAR_LIMIT {
                    return None;
                }
                let at = self.byte_at(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                let at = self.byte_at(self.cursor);
                self.buffer.remove(at);
                self.changed()
            }
            TuiEvent::CtrlU => {
                if self.cursor == 0 {
                    return None;
                }
                let at = self.byte_at(self.cursor);
                self.buffer.replace_range(..at, "");
                self.cursor = 0;
                self.changed()
            }
            TuiEvent::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.char_len();
                None
            }
            _ => None,
        }
    }
}
