use std::time::Instant;

use crate::app::App;
use crate::config::{CollectorKind, Config};
use crate::input::KeymapPreset;
use crate::recorder::PageId;

#[test]
fn new_with_config_applies_recorder_and_input_settings() {
    let mut config = Config::default();
    config.recorder.busy_feedback_ms = 750;
    config.collector.kind = CollectorKind::None;
    config.input.keymap = "vim".to_string();

    let mut app = App::new_with_config(config);

    assert_eq!(app.keymap, KeymapPreset::Vim);
    assert_eq!(app.recorder.dispatcher().collector_name(), "none");
    assert!(app.recorder.recent().is_empty());
    assert!(!app.recorder.is_busy());

    let start = Instant::now();
    app.recorder.record_click(PageId::Home, start);
    let deadline = app
        .recorder
        .next_busy_deadline()
        .expect("click should schedule a clear");
    assert_eq!(deadline.duration_since(start).as_millis(), 750);
}
