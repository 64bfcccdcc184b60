//! Display modes for the optional date and file segments.
//!
//! Both modes parse from names and from integer ordinals. Anything else is rejected
//! at parse time so a bad config never reaches the emission path.

use chrono::{DateTime, Local};
use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};
use std::str::FromStr;

/// Renders the date segment of a line.
pub type DateFormatter = fn(&DateTime<Local>) -> String;

/// Renders the file part of the `[file:line]` segment.
pub type FileFormatter = fn(&str) -> String;

/// How much of the timestamp to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    #[default]
    Hidden = 0,
    /// `15:04:05`
    Time = 1,
    /// `2006/01/02 15:04:05`
    Full = 2,
}

impl DateFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hide",
            Self::Time => "time",
            Self::Full => "full",
        }
    }

    /// `None` means the segment is left out of the line entirely.
    #[must_use]
    pub fn formatter(self) -> Option<DateFormatter> {
        match self {
            Self::Hidden => None,
            Self::Time => Some(time_only),
            Self::Full => Some(full_datetime),
        }
    }
}

fn time_only(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

fn full_datetime(t: &DateTime<Local>) -> String {
    t.format("%Y/%m/%d %H:%M:%S").to_string()
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hide" | "hidden" | "none" => Ok(Self::Hidden),
            "time" | "hour" => Ok(Self::Time),
            "full" => Ok(Self::Full),
            _ => Err(crate::Error::InvalidDateFormat(s.to_string())),
        }
    }
}

impl TryFrom<i64> for DateFormat {
    type Error = crate::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Hidden),
            1 => Ok(Self::Time),
            2 => Ok(Self::Full),
            _ => Err(crate::Error::InvalidDateFormat(value.to_string())),
        }
    }
}

/// How much of the caller's source path to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    #[default]
    Hidden = 0,
    /// `<parent-dir>/<file>`
    Short = 1,
    /// The path exactly as the compiler recorded it.
    Full = 2,
}

impl FileFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hide",
            Self::Short => "short",
            Self::Full => "full",
        }
    }

    #[must_use]
    pub fn formatter(self) -> Option<FileFormatter> {
        match self {
            Self::Hidden => None,
            Self::Short => Some(short_path),
            Self::Full => Some(full_path),
        }
    }
}

fn full_path(path: &str) -> String {
    path.to_string()
}

/// Keeps the last directory component and the file name.
fn short_path(path: &str) -> String {
    let p = Path::new(path);
    let Some(file) = p.file_name() else {
        return path.to_string();
    };
    match p.parent().and_then(Path::file_name) {
        Some(dir) => format!(
            "{}{MAIN_SEPARATOR}{}",
            dir.to_string_lossy(),
            file.to_string_lossy()
        ),
        None => file.to_string_lossy().into_owned(),
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hide" | "hidden" | "none" => Ok(Self::Hidden),
            "short" | "show" => Ok(Self::Short),
            "full" => Ok(Self::Full),
            _ => Err(crate::Error::InvalidFileFormat(s.to_string())),
        }
    }
}

impl TryFrom<i64> for FileFormat {
    type Error = crate::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Hidden),
            1 => Ok(Self::Short),
            2 => Ok(Self::Full),
            _ => Err(crate::Error::InvalidFileFormat(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_path_keeps_parent_dir() {
        let path = format!("a{MAIN_SEPARATOR}b{MAIN_SEPARATOR}c.rs");
        assert_eq!(short_path(&path), format!("b{MAIN_SEPARATOR}c.rs"));
    }

    #[test]
    fn short_path_bare_file() {
        assert_eq!(short_path("main.rs"), "main.rs");
    }

    #[test]
    fn hidden_modes_have_no_formatter() {
        assert!(DateFormat::Hidden.formatter().is_none());
        assert!(FileFormat::Hidden.formatter().is_none());
    }
}
