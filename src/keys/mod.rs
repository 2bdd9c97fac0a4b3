use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical key actions in the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Quit,
    Help,
    SwitchView,
}

impl KeyAction {
    /// Human-readable help text for this key action.
    pub fn help_text(&self) -> &'static str {
        match self {
            KeyAction::Quit => "Quit",
            KeyAction::Help => "Help",
            KeyAction::SwitchView => "Switch map",
        }
    }

    /// Short key label for display in menus.
    pub fn key_label(&self) -> &'static str {
        match self {
            KeyAction::Quit => "q",
            KeyAction::Help => "?",
            KeyAction::SwitchView => "Tab",
        }
    }
}

/// Map a key event to a logical action.
pub fn map_key(event: KeyEvent) -> Option<KeyAction> {
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('?') => Some(KeyAction::Help),
        KeyCode::Tab | KeyCode::Char('m') => Some(KeyAction::SwitchView),

        // Ctrl+C as quit
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }

        _ => None,
    }
}
