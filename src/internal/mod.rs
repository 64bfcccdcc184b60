//! Hooklog's own diagnostic console, so config problems and sink failures are reported
//! through the same formatting pipeline, on stderr.
//!
//! Uses `OnceLock` so the console is initialized exactly once, even if several entry
//! points race to call `init`. Until then every call is a silent no-op.

use crate::config::{Config, ConfigFile, DateFormat, FileFormat};
use crate::console::{CallSite, Console};
use crate::fmt::Arg;
use crate::level::Level;
use std::sync::OnceLock;

static INTERNAL_CONSOLE: OnceLock<Console> = OnceLock::new();

/// Fallback initializer that loads the config file itself. An unreadable or invalid
/// file falls back to the defaults and the problem is reported once the console is up.
pub fn init() {
    let config = ConfigFile::load().unwrap_or_default();
    if let Err(e) = init_with_config(&config) {
        let fallback = ConfigFile::default();
        init_with_level(Level::Warn, fallback.format.color);
        warn("INTERNAL", &format!("{e}, using defaults"));
    }
}

/// Preferred initializer when the caller already loaded the config file. Colors follow
/// `[format] color`.
///
/// # Errors
/// Returns [`crate::Error::InvalidLevel`] if `[internal] level` is invalid. Nothing is
/// initialized in that case.
pub fn init_with_config(config: &ConfigFile) -> Result<(), crate::Error> {
    let level = config.internal_level()?;
    init_with_level(level, config.format.color);
    Ok(())
}

/// Initializes with an explicit minimum level. Only the first initializer takes effect.
pub fn init_with_level(level: Level, color: bool) {
    let was_init = INTERNAL_CONSOLE.get().is_some();
    INTERNAL_CONSOLE.get_or_init(|| build_internal_console(level, color));
    if !was_init {
        debug("INTERNAL", &format!("Internal console ready at level {level}"));
    }
}

fn build_internal_console(level: Level, color: bool) -> Console {
    let config = Config::new()
        .with_level(level)
        .with_date(DateFormat::Time)
        .with_file(FileFormat::Hidden)
        .with_color(color)
        .with_prefix("hooklog");
    Console::stderr(config).without_diagnostics()
}

/// Pre-init calls silently vanish rather than failing.
#[track_caller]
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(console) = INTERNAL_CONSOLE.get() {
        console.log_at(
            CallSite::caller(),
            level,
            "{}: {}",
            &[Arg::Literal(&scope), Arg::Literal(&msg)],
        );
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_CONSOLE.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_console_takes_color_from_caller() {
        let plain = build_internal_console(Level::Debug, false);
        assert!(!plain.config().color());
        assert_eq!(plain.config().level(), Level::Debug);
        assert_eq!(plain.config().label(Level::Warn), "WARN ");

        let colored = build_internal_console(Level::Warn, true);
        assert!(colored.config().color());
        assert_ne!(colored.config().label(Level::Warn), "WARN ");
    }
}
