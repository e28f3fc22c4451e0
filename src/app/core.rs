use std::time::Duration;

use crate::config::Config;
use crate::input::KeymapPreset;
use crate::recorder::ClickRecorder;

use super::state::AppState;

/// The dashboard. Owns the recorder, so the click buffer lives exactly as
/// long as the app.
pub struct App {
    pub state: AppState,
    pub recorder: ClickRecorder,
    pub keymap: KeymapPreset,
    pub config: Config,
}

impl App {
    pub fn new_with_config(config: Config) -> Self {
        let recorder = ClickRecorder::new(
            Duration::from_millis(config.recorder.busy_feedback_ms),
            config.collector.build_dispatcher(),
        );
        Self {
            state: AppState::default(),
            recorder,
            keymap: KeymapPreset::parse(&config.input.keymap),
            config,
        }
    }
}
