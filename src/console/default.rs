//! Process-wide default console behind the free functions and the console-less macro forms.
//!
//! Applications that can pass a [`Console`] around should do so; this exists for call
//! sites that have no handle. Replacing the config goes through a write lock, and each
//! emission works on a handle cloned out of the lock, so a slow sink never blocks
//! `set_default_config`.

use super::{CallSite, Console};
use crate::config::Config;
use crate::fmt::Arg;
use crate::level::Level;
use std::sync::{LazyLock, PoisonError, RwLock};

static DEFAULT: LazyLock<RwLock<Console>> = LazyLock::new(|| RwLock::new(Console::standard()));

/// Handle to the current default console.
#[must_use]
pub fn default_console() -> Console {
    DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the default console's config. Sink and hooks are kept.
pub fn set_default_config(config: Config) {
    let mut console = DEFAULT.write().unwrap_or_else(PoisonError::into_inner);
    *console = console.with_config(config);
}

/// Replaces the default console wholesale.
pub fn set_default_console(console: Console) {
    *DEFAULT.write().unwrap_or_else(PoisonError::into_inner) = console;
}

/// Emits through the default console.
#[track_caller]
pub fn log(level: Level, format: &str, args: &[Arg<'_>]) {
    default_console().log_at(CallSite::caller(), level, format, args);
}

#[track_caller]
pub fn trace(format: &str, args: &[Arg<'_>]) {
    log(Level::Trace, format, args);
}

#[track_caller]
pub fn debug(format: &str, args: &[Arg<'_>]) {
    log(Level::Debug, format, args);
}

#[track_caller]
pub fn info(format: &str, args: &[Arg<'_>]) {
    log(Level::Info, format, args);
}

#[track_caller]
pub fn warn(format: &str, args: &[Arg<'_>]) {
    log(Level::Warn, format, args);
}

#[track_caller]
pub fn error(format: &str, args: &[Arg<'_>]) {
    log(Level::Error, format, args);
}

#[track_caller]
pub fn panic(format: &str, args: &[Arg<'_>]) {
    log(Level::Panic, format, args);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferSink;

    // The only test touching the process-wide default, so no cross-test interference.
    #[test]
    fn set_default_config_keeps_sink_and_hooks() {
        let sink = BufferSink::new();
        set_default_console(Console::new(Config::new(), sink.clone()));

        info("before {}", &[Arg::Literal(&1)]);
        set_default_config(Config::new().with_prefix("[app]").with_level(Level::Warn));
        info("dropped", &[]);
        warn("after", &[]);

        assert_eq!(sink.text(), "INFO  before 1\nWARN  [app] after\n");
    }
}
