use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
    Escape,
    Enter,
    Backspace,
    /// Ctrl+U: half page up, or clear-to-start in the search input.
    CtrlU,
    /// Ctrl+D: half page down.
    CtrlD,
    /// Ctrl+C quits from any mode.
    ForceQuit,
    Resize(u16, u16),
}

/// Block until the next event the TUI cares about.
///
/// Returns `Ok(None)` for events that map to nothing (mouse, focus, key
/// releases) so the caller can simply redraw and wait again.
pub fn next_event() -> std::io::Result<Option<TuiEvent>> {
    let event = event::read()?;
    Ok(map_event(event))
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') if ctrl => Some(TuiEvent::ForceQuit),
        KeyCode::Char('u') if ctrl => Some(TuiEvent::CtrlU),
        KeyCode::Char('d') if ctrl => Some(TuiEvent::CtrlD),
        KeyCode::Char(_) if ctrl || key_event.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(TuiEvent::Char(c)),
        KeyCode::BackTab => Some(TuiEvent::BackTab),
        KeyCode::Tab if key_event.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(TuiEvent::BackTab)
        }
        KeyCode::Tab => Some(TuiEvent::Tab),
        KeyCode::Up => Some(TuiEvent::Up),
        KeyCode::Down => Some(TuiEvent::Down),
        KeyCode::Left => Some(TuiEvent::Left),
        KeyCode::Right => Some(TuiEvent::Right),
        KeyCode::Home => Some(TuiEvent::Home),
        KeyCode::End => Some(TuiEvent::End),
        KeyCode::Esc => Some(TuiEvent::Escape),
        KeyCode::Enter => Some(TuiEvent::Enter),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        _ => None,
    }
}
