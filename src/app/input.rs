//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

/// Normal-mode key mapping (basic, without modifiers)
pub fn normal_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('i') | KeyCode::Enter => Some(Action::Answer),
        KeyCode::Char(':') => Some(Action::Command),
        KeyCode::Char('a') => Some(Action::AddWord),
        KeyCode::Char('d') => Some(Action::DeleteCurrent),
        KeyCode::Char('r') => Some(Action::Reveal),
        KeyCode::Char('m') => Some(Action::CycleMode),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Char('?') => Some(Action::Help),
        // Note: 'q' intentionally not mapped - use :q command to quit
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations), valid in any focus
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reveal),
            KeyCode::Char('n') => Some(Action::CycleMode),
            _ => None,
        }
    } else {
        None
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Focus
    Answer,
    Command,

    // List management
    AddWord,
    DeleteCurrent,
    ScrollUp,
    ScrollDown,

    // Quiz
    Reveal,
    CycleMode,

    Help,
    Quit,
}
