//! Hook matching, lifecycle, and the built-in hooks.

use hooklog::{
    Arg, BufferHook, BufferSink, Config, Console, Hook, HookEvent, HookRegistry, JsonHook, Level,
};
use std::fs;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records every call it receives.
#[derive(Default)]
struct Recorder {
    id: String,
    level: Option<Level>,
    matches: AtomicUsize,
    actions: AtomicUsize,
    seen: Mutex<Vec<(Level, String, String, Vec<String>)>>,
}

impl Recorder {
    fn new(id: &str, level: Option<Level>) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            level,
            ..Self::default()
        })
    }
}

impl Hook for Recorder {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, event: &HookEvent<'_>) -> bool {
        self.matches.fetch_add(1, Ordering::SeqCst);
        self.level.is_none_or(|l| l == event.level)
    }

    fn action(&self, event: &HookEvent<'_>) {
        self.actions.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((
            event.level,
            event.message.to_string(),
            event.format.to_string(),
            event.args.to_vec(),
        ));
    }
}

fn console(level: Level) -> (Console, BufferSink) {
    let sink = BufferSink::new();
    (
        Console::new(Config::new().with_level(level), sink.clone()),
        sink,
    )
}

#[test]
fn matching_hook_gets_one_action_per_emission() {
    let (console, _sink) = console(Level::Trace);
    let recorder = Recorder::new("warns", Some(Level::Warn));
    console.add_shared(recorder.clone());

    console.warn("one", &[]);
    console.warn("two", &[]);
    console.info("skip", &[]);

    assert_eq!(recorder.matches.load(Ordering::SeqCst), 3);
    assert_eq!(recorder.actions.load(Ordering::SeqCst), 2);
}

#[test]
fn hook_sees_message_format_and_resolved_args() {
    let (console, _sink) = console(Level::Info);
    let recorder = Recorder::new("all", None);
    console.add_shared(recorder.clone());

    let lazy = || "computed".to_string();
    console.error("x={} y={}", &[Arg::Literal(&5), Arg::Lazy(&lazy)]);

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        &[(
            Level::Error,
            "x=5 y=computed".to_string(),
            "x={} y={}".to_string(),
            vec!["5".to_string(), "computed".to_string()],
        )]
    );
}

#[test]
fn gated_emission_skips_hooks_entirely() {
    let (console, _sink) = console(Level::Error);
    let recorder = Recorder::new("all", None);
    console.add_shared(recorder.clone());

    console.warn("below", &[]);

    assert_eq!(recorder.matches.load(Ordering::SeqCst), 0);
    assert_eq!(recorder.actions.load(Ordering::SeqCst), 0);
}

#[test]
fn released_hook_is_never_called_again() {
    let (console, _sink) = console(Level::Info);
    let recorder = Recorder::new("all", None);
    console.add_shared(recorder.clone());

    console.info("before", &[]);
    assert!(console.release("all"));
    console.info("after", &[]);

    assert_eq!(recorder.actions.load(Ordering::SeqCst), 1);
}

#[test]
fn add_then_release_leaves_registry_empty() {
    let registry = HookRegistry::new();
    let hook = BufferHook::new("h", Level::Info);
    registry.add(hook.clone());
    assert_eq!(registry.len(), 1);
    assert!(registry.release_hook(&hook));
    assert!(registry.is_empty());
}

#[test]
fn release_of_unknown_id_is_noop() {
    let registry = HookRegistry::new();
    registry.add(BufferHook::new("h", Level::Info));
    assert!(!registry.release("missing"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn same_id_overwrites() {
    let (console, _sink) = console(Level::Info);
    let first = BufferHook::new("dup", Level::Info);
    let second = BufferHook::new("dup", Level::Info);
    console.add(first.clone());
    console.add(second.clone());

    assert_eq!(console.hooks().len(), 1);
    console.info("msg", &[]);
    assert_eq!(first.contents(), "");
    assert_eq!(second.contents(), "msg\n");
}

#[test]
fn hooks_run_before_the_write() {
    struct SinkProbe {
        sink: BufferSink,
        observed: Mutex<Option<usize>>,
    }

    impl Hook for SinkProbe {
        fn id(&self) -> String {
            "probe".to_string()
        }

        fn matches(&self, _: &HookEvent<'_>) -> bool {
            true
        }

        fn action(&self, _: &HookEvent<'_>) {
            *self.observed.lock().unwrap() = Some(self.sink.len());
        }
    }

    let (console, sink) = console(Level::Info);
    let probe = Arc::new(SinkProbe {
        sink: sink.clone(),
        observed: Mutex::new(None),
    });
    console.add_shared(probe.clone());

    console.info("x", &[]);
    assert_eq!(*probe.observed.lock().unwrap(), Some(0));
    assert!(!sink.is_empty());
}

struct Exploding;

impl Hook for Exploding {
    fn id(&self) -> String {
        "exploding".to_string()
    }

    fn matches(&self, event: &HookEvent<'_>) -> bool {
        event.level >= Level::Error
    }

    fn action(&self, _: &HookEvent<'_>) {
        panic!("hook failed");
    }
}

#[test]
fn failing_hook_propagates_and_console_recovers() {
    let (console, sink) = console(Level::Info);
    console.add(Exploding);

    let result = catch_unwind(AssertUnwindSafe(|| console.error("boom", &[])));
    assert!(result.is_err());
    assert!(sink.is_empty());

    console.info("still working", &[]);
    assert_eq!(sink.text(), "INFO  still working\n");
    assert!(console.release("exploding"));
}

#[test]
fn buffer_hook_captures_exact_level() {
    let (console, _sink) = console(Level::Trace);
    let hook = BufferHook::new("debug", Level::Debug);
    console.add(hook.clone());

    console.debug("a", &[]);
    console.info("b", &[]);
    console.debug("c\n", &[]);

    assert_eq!(hook.count(), 2);
    assert_eq!(hook.take(), "a\nc\n");
    assert_eq!(hook.contents(), "");
    assert_eq!(hook.count(), 0);
}

#[test]
fn buffer_hook_counts_multiline_message_once() {
    let (console, _sink) = console(Level::Info);
    let hook = BufferHook::new("warns", Level::Warn);
    console.add(hook.clone());

    console.warn("first\nsecond", &[]);

    assert_eq!(hook.count(), 1);
    assert_eq!(hook.contents(), "first\nsecond\n");
}

#[test]
fn json_hook_appends_records_at_or_above_threshold() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("alerts").join("alerts.jsonl");

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .unwrap();

    let (console, _sink) = console(Level::Info);
    console.add(JsonHook::new("alerts", Level::Error, file));

    console.warn("ignored", &[]);
    console.error("disk {} full", &[Arg::Literal(&"sda1")]);
    console.panic("gone", &[]);

    let content = fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "error");
    assert_eq!(records[0]["msg"], "disk sda1 full");
    assert_eq!(records[0]["format"], "disk {} full");
    assert_eq!(records[0]["args"][0], "sda1");
    assert_eq!(records[1]["level"], "panic");
    assert_ne!(records[0]["id"], records[1]["id"]);
}

#[test]
fn json_hook_writes_to_any_writer() {
    let buffer = BufferSink::new();
    let (console, _sink) = console(Level::Info);
    console.add(JsonHook::new("alerts", Level::Warn, buffer.clone()));

    console.warn("w", &[]);

    let record: serde_json::Value = serde_json::from_str(buffer.text().trim()).unwrap();
    assert_eq!(record["msg"], "w");
    assert!(record["ts"].is_string());
}
