//! Alert-style hook: messages at or above a threshold are appended to a writer as JSONL,
//! one object per line, so `jq` or a log shipper can pick them up.

use super::{Hook, HookEvent};
use crate::console::lock;
use crate::internal;
use crate::level::Level;

use chrono::Local;
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;
use ulid::Ulid;

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// Time-sortable and unique even with concurrent writers.
    id: String,
    ts: String,
    level: &'static str,
    msg: &'a str,
    format: &'a str,
    args: &'a [String],
}

pub struct JsonHook {
    id: String,
    min_level: Level,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonHook {
    #[must_use]
    pub fn new(id: impl Into<String>, min_level: Level, writer: impl Write + Send + 'static) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self {
            id: id.into(),
            min_level,
            writer: Mutex::new(writer),
        }
    }

    fn write_entry(&self, event: &HookEvent<'_>) -> Result<(), crate::Error> {
        let entry = JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            level: event.level.as_str(),
            msg: event.message.trim_end_matches('\n'),
            format: event.format,
            args: event.args,
        };
        let json = serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;

        let mut writer = lock(&self.writer);
        writeln!(writer, "{json}")?;
        writer.flush()?;
        Ok(())
    }
}

impl Hook for JsonHook {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, event: &HookEvent<'_>) -> bool {
        event.level >= self.min_level
    }

    fn action(&self, event: &HookEvent<'_>) {
        if let Err(e) = self.write_entry(event) {
            internal::error("JSON", &format!("Failed to write alert: {e}"));
        }
    }
}
