use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::app::settings::config_dirs::settings_path;
use crate::pagination::PaginatorConfig;
use crate::ui::ControlSize;

/// Errors produced while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown action `{0}` in [keys]")]
    UnknownAction(String),

    #[error("unknown key `{key}` bound to `{action}`")]
    UnknownKey { action: &'static str, key: String },
}

/// User settings. Every field is optional; command-line flags take
/// precedence over anything set here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub page_size: Option<usize>,
    pub max_visible_pages: Option<usize>,
    pub size: Option<ControlSize>,
    /// Built-in theme name or path to a theme file.
    pub theme: Option<String>,
    /// Per-action key overrides, e.g. `next = ["Right", "l"]`.
    pub keys: BTreeMap<String, Vec<String>>,
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Pagination config with unset values left at their defaults.
    pub fn paginator_config(&self) -> PaginatorConfig {
        PaginatorConfig::from_options(self.page_size, self.max_visible_pages)
    }
}

/// Load settings from the default per-user location. A missing file is not
/// an error and yields the defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_path() {
        Some(path) if path.is_file() => load_settings_from(&path),
        _ => {
            debug!("no settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Load settings from an explicit path. The file must exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    debug!(path = %path.display(), "loading settings");
    let s = std::fs::read_to_string(path)?;
    Settings::from_toml(&s)
}
