//! Rendering primitives: colors, the compiled line template, and log arguments.

mod args;
mod color;
mod format;

pub use args::{Arg, IntoArg, Lazy, MISSING, render, resolve_all};
pub use color::{Color, colorize, colorize_if};
pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
