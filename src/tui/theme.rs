//! Colors and text styles, all on the 256-color palette.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Indexed(69);
const MUTED: Color = Color::Indexed(243);

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn leader_label() -> Style {
    Style::default().fg(MUTED)
}

pub fn leader_value() -> Style {
    Style::default().fg(Color::Indexed(213)).add_modifier(Modifier::BOLD)
}

pub fn scope_tab() -> Style {
    Style::default().fg(MUTED)
}

pub fn scope_tab_active() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn column_header() -> Style {
    Style::default().fg(Color::Indexed(252)).add_modifier(Modifier::BOLD)
}

pub fn separator() -> Style {
    Style::default().fg(Color::Indexed(238))
}

pub fn selected_row() -> Style {
    Style::default().bg(Color::Indexed(236))
}

pub fn table_name() -> Style {
    Style::default().fg(Color::Indexed(245))
}

pub fn key() -> Style {
    Style::default().fg(Color::Indexed(255))
}

pub fn action() -> Style {
    Style::default().fg(Color::Indexed(252))
}

pub fn modifier_separator() -> Style {
    Style::default().fg(MUTED)
}

/// Each modifier kind gets its own color.
pub fn modifier(name: &str) -> Style {
    let color = match name {
        "CTRL" => Color::Indexed(6),
        "SHIFT" => Color::Indexed(3),
        "ALT" => Color::Indexed(5),
        "SUPER" => Color::Indexed(2),
        _ => Color::Indexed(245),
    };
    Style::default().fg(color)
}

/// Characters hit by the fuzzy query.
pub fn fuzzy_match() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn search_prompt() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn search_cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn match_count() -> Style {
    Style::default().fg(MUTED)
}

pub fn help() -> Style {
    Style::default().fg(Color::Indexed(241))
}

pub fn help_key() -> Style {
    Style::default().fg(ACCENT)
}
