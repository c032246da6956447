//! Key bindings — maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::theory::Note;

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle play/pause of the chord cycle.
    TogglePlayback,
    /// Step to the next chord (wraps).
    NextChord,
    /// Step to the previous chord (wraps).
    PrevChord,
    /// Raise the auto-advance interval by one step.
    TempoUp,
    /// Lower the auto-advance interval by one step.
    TempoDown,
    /// Select a key directly (natural keys via letter keys).
    SelectKey(Note),
    /// Move to the next key chromatically.
    NextKey,
    /// Move to the previous key chromatically.
    PrevKey,
    /// Toggle between a natural key and its sharp.
    ToggleSharp,
    /// Toggle slow/fast strum sweep.
    ToggleStrumSpeed,
    /// Mute/unmute audio output.
    ToggleMute,
    /// Toggle display language.
    ToggleLang,
    /// Toggle the help overlay.
    ToggleHelp,
}

/// Map a key event to an action. Returns None for unbound keys.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::TogglePlayback),
        KeyCode::Right | KeyCode::Char('n') => Some(Action::NextChord),
        KeyCode::Left | KeyCode::Char('p') => Some(Action::PrevChord),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::TempoUp),
        KeyCode::Down | KeyCode::Char('-') => Some(Action::TempoDown),
        KeyCode::Tab => Some(Action::NextKey),
        KeyCode::BackTab => Some(Action::PrevKey),
        KeyCode::Char('c') => Some(Action::SelectKey(Note::C)),
        KeyCode::Char('d') => Some(Action::SelectKey(Note::D)),
        KeyCode::Char('e') => Some(Action::SelectKey(Note::E)),
        KeyCode::Char('f') => Some(Action::SelectKey(Note::F)),
        KeyCode::Char('g') => Some(Action::SelectKey(Note::G)),
        KeyCode::Char('a') => Some(Action::SelectKey(Note::A)),
        KeyCode::Char('b') => Some(Action::SelectKey(Note::B)),
        KeyCode::Char('s') => Some(Action::ToggleSharp),
        KeyCode::Char('w') => Some(Action::ToggleStrumSpeed),
        KeyCode::Char('m') => Some(Action::ToggleMute),
        KeyCode::Char('l') => Some(Action::ToggleLang),
        KeyCode::Char('h') | KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}
