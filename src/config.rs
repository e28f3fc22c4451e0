use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::recorder::{Collector, ConsoleCollector, Dispatcher, NullCollector};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub recorder: RecorderConfig,
    pub collector: CollectorConfig,
    pub input: InputConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecorderConfig {
    pub busy_feedback_ms: u64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            busy_feedback_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollectorKind {
    #[default]
    Console,
    None,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CollectorConfig {
    pub kind: CollectorKind,
}

impl CollectorConfig {
    pub fn build_dispatcher(&self) -> Dispatcher {
        let collector: Arc<dyn Collector> = match self.kind {
            CollectorKind::Console => Arc::new(ConsoleCollector),
            CollectorKind::None => Arc::new(NullCollector),
        };
        Dispatcher::new(collector)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    pub keymap: String,
    pub ignore_while_busy: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keymap: "default".to_string(),
            ignore_while_busy: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub spinner_tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            spinner_tick_ms: 80,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        Self::parse(&raw)
            .map_err(|err| AppError::config(format!("{}: {err}", path.display())))
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        let parsed = toml::from_str::<Self>(raw)
            .map_err(|source| AppError::config(format!("failed to parse config: {source}")))?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.recorder.busy_feedback_ms = self.recorder.busy_feedback_ms.max(1);
        self.ui.spinner_tick_ms = self.ui.spinner_tick_ms.max(1);
        if !matches!(self.input.keymap.as_str(), "default" | "vim") {
            self.input.keymap = InputConfig::default().keymap;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("CLICKDECK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("clickdeck").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("clickdeck")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("clickdeck").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{CollectorKind, Config};

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "clickdeck_config_{suffix}_{}_{}",
            process::id(),
            nanos
        ));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
        assert_eq!(config.recorder.busy_feedback_ms, 300);
        assert!(config.input.ignore_while_busy);
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [recorder]
            busy_feedback_ms = 0

            [collector]
            kind = "none"

            [input]
            keymap = "dvorak"

            [ui]
            spinner_tick_ms = 0

            [log]
            file = "/tmp/clickdeck.log"
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.recorder.busy_feedback_ms, 1);
        assert_eq!(config.collector.kind, CollectorKind::None);
        assert_eq!(config.input.keymap, "default");
        assert!(config.input.ignore_while_busy);
        assert_eq!(config.ui.spinner_tick_ms, 1);
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/clickdeck.log")));

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn unknown_collector_kind_is_rejected() {
        let err = Config::parse("[collector]\nkind = \"http\"\n")
            .expect_err("unknown collector should fail");
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn collector_kind_selects_dispatcher() {
        let mut config = Config::default();
        assert_eq!(config.collector.build_dispatcher().collector_name(), "console");
        config.collector.kind = CollectorKind::None;
        assert_eq!(config.collector.build_dispatcher().collector_name(), "none");
    }

    #[test]
    fn load_from_path_rejects_directories() {
        let dir = std::env::temp_dir();
        assert!(Config::load_from_path(&dir).is_err());
    }
}
