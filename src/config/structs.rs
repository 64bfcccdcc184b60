//! Configuration file schema.

use serde::Deserialize;
use std::collections::HashMap;

/// Date and file modes accept either a name (`"time"`) or an ordinal (`1`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ModeValue {
    Name(String),
    Ordinal(i64),
}

impl From<&str> for ModeValue {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Line layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfigFile {
    /// Date segment (hide, time, full).
    pub date: ModeValue,
    /// File segment (hide, short, full).
    pub file: ModeValue,
    /// Enable colors.
    pub color: bool,
    /// Text placed between the file segment and the message.
    pub prefix: String,
}

impl Default for FormatConfigFile {
    fn default() -> Self {
        Self {
            date: "time".into(),
            file: "short".into(),
            color: true,
            prefix: String::new(),
        }
    }
}

/// Internal diagnostics configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Minimum level for hooklog's own diagnostics on stderr.
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Per-app overrides. Every field is optional so partial overrides work.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: Option<String>,
    pub date: Option<ModeValue>,
    pub file: Option<ModeValue>,
    pub color: Option<bool>,
    pub prefix: Option<String>,
}

/// An empty file still produces a working console; every section has defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub general: GeneralConfig,
    pub format: FormatConfigFile,
    pub internal: InternalConfig,
    pub apps: HashMap<String, AppConfig>,
}

impl ConfigFile {
    /// Applies `[apps.<name>]` on top of the shared sections.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();

        if let Some(app) = self.apps.get(app_name) {
            if let Some(ref level) = app.level {
                config.general.level.clone_from(level);
            }
            if let Some(ref date) = app.date {
                config.format.date = date.clone();
            }
            if let Some(ref file) = app.file {
                config.format.file = file.clone();
            }
            if let Some(color) = app.color {
                config.format.color = color;
            }
            if let Some(ref prefix) = app.prefix {
                config.format.prefix.clone_from(prefix);
            }
        }

        config
    }
}
