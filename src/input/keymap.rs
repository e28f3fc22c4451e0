use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::recorder::PageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent) -> Option<Command> {
    map_key_to_command_with_preset(key, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(key: KeyEvent, preset: KeymapPreset) -> Option<Command> {
    match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Vim => map_key_vim(key),
    }
}

fn map_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('1') => Some(Command::Record {
            page: PageId::Home,
        }),
        KeyCode::Char('2') => Some(Command::Record {
            page: PageId::About,
        }),
        KeyCode::Char('3') => Some(Command::Record {
            page: PageId::Contact,
        }),
        KeyCode::Tab | KeyCode::Right => Some(Command::FocusNext),
        KeyCode::BackTab | KeyCode::Left => Some(Command::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::ActivateFocused),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn map_key_vim(key: KeyEvent) -> Option<Command> {
    if key.modifiers.is_empty() {
        match key.code {
            KeyCode::Char('l') => return Some(Command::FocusNext),
            KeyCode::Char('h') => return Some(Command::FocusPrev),
            _ => {}
        }
    }
    map_key_default(key)
}
