//! The console ties a [`Config`], a sink, and a [`HookRegistry`] together and runs the
//! emission pipeline: gate, resolve arguments, render, dispatch hooks, write one line.

mod default;
mod sink;

pub use default::{
    debug, default_console, error, info, log, panic, set_default_config, set_default_console,
    trace, warn,
};
pub use sink::BufferSink;

pub(crate) use sink::lock;

use crate::config::{Config, DateFormat, FileFormat};
use crate::fmt::{Arg, FormatValues, render, resolve_all};
use crate::hook::{Hook, HookEvent, HookRegistry, dispatch_locked};
use crate::internal;
use crate::level::Level;
use chrono::Local;
use sink::SharedSink;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::Arc;

/// Source location of the logical caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Location of the nearest caller not marked `#[track_caller]`. Every public
    /// emission entry point is marked, so this resolves to user code.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Leveled writer with hooks.
///
/// `Clone` returns another handle to the same console (same config, sink, and hooks).
/// Use [`Console::clone_shared`] or [`Console::clone_isolated`] to derive a console with
/// a different prefix.
#[derive(Clone)]
pub struct Console {
    config: Arc<Config>,
    sink: SharedSink,
    hooks: HookRegistry,
    /// Off for the internal diagnostics console, which must not report its own failures.
    diagnostics: bool,
}

impl Console {
    #[must_use]
    pub fn new(config: Config, sink: impl Write + Send + 'static) -> Self {
        Self {
            config: Arc::new(config),
            sink: sink::shared(sink),
            hooks: HookRegistry::new(),
            diagnostics: true,
        }
    }

    #[must_use]
    pub fn stdout(config: Config) -> Self {
        Self::new(config, io::stdout())
    }

    #[must_use]
    pub fn stderr(config: Config) -> Self {
        Self::new(config, io::stderr())
    }

    /// Standard output with [`Config::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::stdout(Config::standard())
    }

    pub(crate) fn without_diagnostics(mut self) -> Self {
        self.diagnostics = false;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Registers `hook`, replacing any hook with the same id.
    pub fn add(&self, hook: impl Hook + 'static) {
        self.hooks.add(hook);
    }

    pub fn add_shared(&self, hook: Arc<dyn Hook>) {
        self.hooks.add_shared(hook);
    }

    /// Removes the hook registered under `id`.
    pub fn release(&self, id: &str) -> bool {
        self.hooks.release(id)
    }

    /// Same sink and hooks, different config.
    #[must_use]
    pub fn with_config(&self, config: Config) -> Self {
        Self {
            config: Arc::new(config),
            sink: Arc::clone(&self.sink),
            hooks: self.hooks.clone(),
            diagnostics: self.diagnostics,
        }
    }

    /// Derived console with `prefix`, sharing this console's sink and hook registry.
    /// Hooks added or released on either console affect both.
    #[must_use]
    pub fn clone_shared(&self, prefix: impl Into<String>) -> Self {
        self.with_config(self.config.as_ref().clone().with_prefix(prefix))
    }

    /// Derived console with `prefix` and its own copy of the hook registry. Writes still
    /// go through the shared sink lock, so lines from both consoles never interleave.
    #[must_use]
    pub fn clone_isolated(&self, prefix: impl Into<String>) -> Self {
        Self {
            config: Arc::new(self.config.as_ref().clone().with_prefix(prefix)),
            sink: Arc::clone(&self.sink),
            hooks: self.hooks.deep_copy(),
            diagnostics: self.diagnostics,
        }
    }

    /// Emits at `level`, attributing the line to the caller.
    #[track_caller]
    pub fn log(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), level, format, args);
    }

    /// Emits at `level` with an explicit call site, for wrappers that forward calls.
    pub fn log_at(&self, site: CallSite, level: Level, format: &str, args: &[Arg<'_>]) {
        if !self.config.enabled(level) {
            return;
        }

        let args = resolve_all(args);
        let message = render(format, &args);
        let line = self.format_line(site, level, &message);

        let event = HookEvent {
            level,
            message: &message,
            format,
            args: &args,
        };

        // Registry before sink, always, so hook dispatch and the write form one unit.
        let hooks = self.hooks.lock();
        dispatch_locked(&hooks, &event);
        let result = lock(&self.sink).write_all(line.as_bytes());
        drop(hooks);

        if let Err(e) = result
            && self.diagnostics
        {
            internal::debug("CONSOLE", &format!("Sink write failed: {e}"));
        }
    }

    /// Assembles `[date ]label [[file:line] ][prefix ]message` plus a newline if missing.
    fn format_line(&self, site: CallSite, level: Level, message: &str) -> String {
        let config = &self.config;

        let date = if config.date() == DateFormat::Hidden {
            String::new()
        } else {
            config.format_date(&Local::now()).unwrap_or_default()
        };
        let (file, line_no) = if config.file() == FileFormat::Hidden {
            (String::new(), String::new())
        } else {
            (
                config.format_file(site.file).unwrap_or_default(),
                site.line.to_string(),
            )
        };

        let values = FormatValues::new()
            .date(&date)
            .label(config.label(level))
            .location(&file, &line_no)
            .prefix(config.prefix_for(level))
            .msg(message);

        let mut line = config.template().render(&values);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    #[track_caller]
    pub fn trace(&self, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), Level::Trace, format, args);
    }

    #[track_caller]
    pub fn debug(&self, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), Level::Debug, format, args);
    }

    #[track_caller]
    pub fn info(&self, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), Level::Info, format, args);
    }

    #[track_caller]
    pub fn warn(&self, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), Level::Warn, format, args);
    }

    #[track_caller]
    pub fn error(&self, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), Level::Error, format, args);
    }

    /// Emits at [`Level::Panic`]. Does not unwind.
    #[track_caller]
    pub fn panic(&self, format: &str, args: &[Arg<'_>]) {
        self.log_at(CallSite::caller(), Level::Panic, format, args);
    }

    /// Buffered sinks may hold the tail of the output until flushed.
    ///
    /// # Errors
    /// I/O error from the sink.
    pub fn flush(&self) -> Result<(), crate::Error> {
        lock(&self.sink).flush()?;
        Ok(())
    }

    /// Whether both consoles write through the same sink handle.
    #[must_use]
    pub fn shares_sink_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
