pub mod handler;
pub mod keymap;
pub mod mouse;

pub use keymap::{KeymapPreset, map_key_to_command, map_key_to_command_with_preset};
pub use mouse::map_mouse_to_command;
