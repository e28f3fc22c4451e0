use crossterm::event::{Event, KeyEventKind};

use crate::app::App;
use crate::app::terminal_session::TerminalSurface;
use crate::command::Command;
use crate::error::AppResult;

use super::keymap::map_key_to_command_with_preset;
use super::mouse::map_mouse_to_command;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) command: Option<Command>,
}

impl App {
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        session: &mut impl TerminalSurface,
        needs_redraw: &mut bool,
    ) -> AppResult<InputEventOutcome> {
        let command = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                map_key_to_command_with_preset(key, self.keymap)
            }
            Event::Mouse(mouse) => {
                let area = session.area()?;
                map_mouse_to_command(mouse, area, self.recorder.recent().len())
            }
            Event::Resize(_, _) => {
                session.clear()?;
                *needs_redraw = true;
                None
            }
            _ => None,
        };

        Ok(match command {
            Some(Command::Quit) => InputEventOutcome {
                quit_requested: true,
                command: None,
            },
            command => InputEventOutcome {
                quit_requested: false,
                command,
            },
        })
    }
}
