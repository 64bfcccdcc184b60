//! `hooklog` - Leveled console writer with hooks.
//!
//! A log call is gated by level, its arguments are resolved (lazy ones only now),
//! the message is rendered, matching hooks run, and one formatted line is written to
//! the sink under a lock:
//!
//! ```text
//! 15:04:05 WARN  [src/main.rs:42] [db] connection retry 3
//! ```
//!
//! # Example
//!
//! ```
//! use hooklog::{BufferHook, BufferSink, Config, Console, Level, log_error, log_warn};
//!
//! let sink = BufferSink::new();
//! let console = Console::new(Config::new(), sink.clone());
//!
//! let errors = BufferHook::new("errors", Level::Error);
//! console.add(errors.clone());
//!
//! let db = console.clone_isolated("[db]");
//! log_warn!(db; "connection retry {}", 3);
//! log_error!(console; "giving up");
//!
//! assert_eq!(sink.text(), "WARN  [db] connection retry 3\nERROR giving up\n");
//! assert_eq!(errors.contents(), "giving up\n");
//! ```

pub mod config;
pub mod console;
pub mod fmt;
pub mod hook;
pub mod internal;
pub mod level;

mod error;
mod macros;

pub use config::{Config, ConfigFile, DateFormat, FileFormat};
pub use console::{
    BufferSink, CallSite, Console, debug, default_console, error, info, panic,
    set_default_config, set_default_console, trace, warn,
};
pub use error::Error;
pub use fmt::{Arg, Lazy};
pub use hook::{BufferHook, Hook, HookEvent, HookRegistry, JsonHook};
pub use level::Level;
