//! Console configuration: the user-facing mode fields plus the state compiled from them.
//!
//! Compiling the layout into a [`FormatTemplate`] and pre-rendering the per-level labels
//! once per config keeps the emission path down to a template render. Every setter
//! recompiles, so the derived state can never drift from the mode fields.

mod mode;
mod structs;

pub use mode::{DateFormat, DateFormatter, FileFormat, FileFormatter};
pub use structs::{
    AppConfig, ConfigFile, FormatConfigFile, GeneralConfig, InternalConfig, ModeValue,
};

use crate::fmt::{Color, FormatTemplate, colorize, colorize_if};
use crate::internal;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const LEVEL_COUNT: usize = Level::all().len();

/// Everything derived from the mode fields. Rebuilt by [`Config::compile`].
#[derive(Debug, Clone)]
struct Compiled {
    date: Option<DateFormatter>,
    file: Option<FileFormatter>,
    template: FormatTemplate,
    labels: [String; LEVEL_COUNT],
    prefixes: [String; LEVEL_COUNT],
}

impl Compiled {
    fn build(config: &Config) -> Self {
        let date = config.date.formatter();
        let file = config.file.formatter();

        let mut layout = String::new();
        if date.is_some() {
            layout.push_str(&colorize_if("{date}", Color::white(), config.color));
            layout.push(' ');
        }
        layout.push_str("{label} ");
        if file.is_some() {
            layout.push_str(&colorize_if("[{file}:{line}]", Color::gray(), config.color));
            layout.push(' ');
        }
        if !config.prefix.is_empty() {
            layout.push_str("{prefix} ");
        }
        layout.push_str("{msg}");

        let labels = Level::all().map(|l| colorize_if(l.label(), l.color(), config.color));
        let prefixes = Level::all().map(|l| {
            if config.color && !config.prefix.is_empty() {
                colorize(&config.prefix, l.color())
            } else {
                config.prefix.clone()
            }
        });

        Self {
            date,
            file,
            template: FormatTemplate::parse(&layout),
            labels,
            prefixes,
        }
    }
}

/// Holds the configuration of a console.
#[derive(Debug, Clone)]
pub struct Config {
    level: Level,
    date: DateFormat,
    file: FileFormat,
    color: bool,
    prefix: String,
    compiled: Compiled,
}

impl Default for Config {
    /// Plain output: Info and above, no date, no file, no colors, no prefix.
    fn default() -> Self {
        Self::from_parts(
            Level::Info,
            DateFormat::Hidden,
            FileFormat::Hidden,
            false,
            String::new(),
        )
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline for terminal use: colors on, time-only date, short file path, Info and above.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_parts(
            Level::Info,
            DateFormat::Time,
            FileFormat::Short,
            true,
            String::new(),
        )
    }

    fn from_parts(
        level: Level,
        date: DateFormat,
        file: FileFormat,
        color: bool,
        prefix: String,
    ) -> Self {
        let mut config = Self {
            level,
            date,
            file,
            color,
            prefix,
            compiled: Compiled {
                date: None,
                file: None,
                template: FormatTemplate::default(),
                labels: Default::default(),
                prefixes: Default::default(),
            },
        };
        config.compile();
        config
    }

    /// Rebuilds the formatters, the line template, and the per-level labels.
    ///
    /// Setters already call this; it is public for callers that want to force a rebuild.
    pub fn compile(&mut self) {
        self.compiled = Compiled::build(self);
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: DateFormat) -> Self {
        self.date = date;
        self.compile();
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: FileFormat) -> Self {
        self.file = file;
        self.compile();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self.compile();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.compile();
        self
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn date(&self) -> DateFormat {
        self.date
    }

    #[must_use]
    pub const fn file(&self) -> FileFormat {
        self.file
    }

    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Messages below this level are dropped before any work is done.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// The level's fixed-width label, colorized if colors are on.
    #[must_use]
    pub fn label(&self, level: Level) -> &str {
        &self.compiled.labels[level as usize]
    }

    /// The prefix as it appears on a line at `level`.
    #[must_use]
    pub fn prefix_for(&self, level: Level) -> &str {
        &self.compiled.prefixes[level as usize]
    }

    #[must_use]
    pub fn template(&self) -> &FormatTemplate {
        &self.compiled.template
    }

    /// `None` when the date segment is hidden.
    #[must_use]
    pub fn format_date(&self, now: &DateTime<Local>) -> Option<String> {
        self.compiled.date.map(|f| f(now))
    }

    /// `None` when the file segment is hidden.
    #[must_use]
    pub fn format_file(&self, path: &str) -> Option<String> {
        self.compiled.file.map(|f| f(path))
    }

    /// Loads the user's config from the XDG config directory. A missing file yields
    /// [`ConfigFile::default`].
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the TOML is malformed, or a
    /// level/date/file value is unknown.
    pub fn load() -> Result<Self, crate::Error> {
        Self::try_from(ConfigFile::load()?)
    }

    /// Same as [`Config::load`] with `[apps.<name>]` overrides applied.
    ///
    /// # Errors
    /// See [`Config::load`].
    pub fn load_for_app(app_name: &str) -> Result<Self, crate::Error> {
        Self::try_from(ConfigFile::load()?.for_app(app_name))
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed, or holds an unknown mode.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::try_from(ConfigFile::load_from(path)?)
    }
}

fn parse_mode<T>(value: &ModeValue) -> Result<T, crate::Error>
where
    T: std::str::FromStr<Err = crate::Error> + TryFrom<i64, Error = crate::Error>,
{
    match value {
        ModeValue::Name(s) => s.parse(),
        ModeValue::Ordinal(n) => T::try_from(*n),
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = crate::Error;

    /// Validates every mode up front so an invalid value fails before a console exists.
    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let level: Level = file.general.level.parse()?;
        let date: DateFormat = parse_mode(&file.format.date)?;
        let file_mode: FileFormat = parse_mode(&file.format.file)?;
        Ok(Self::from_parts(
            level,
            date,
            file_mode,
            file.format.color,
            file.format.prefix,
        ))
    }
}

impl ConfigFile {
    /// `~/.config/hooklog/config.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Returns `ConfigDirNotFound` when no home directory can be determined.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "hooklog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// Fails if the config directory can't be determined or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Reads and parses `path`; `~` is expanded. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// Minimum level for the internal diagnostics console.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] if `[internal] level` is not a level name.
    pub fn internal_level(&self) -> Result<Level, crate::Error> {
        Ok(self.internal.level.parse::<Level>()?)
    }
}
