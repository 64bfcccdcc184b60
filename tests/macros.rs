use hooklog::{
    BufferSink, Config, Console, Level, emit, lazy, log_debug, log_error, log_info, log_panic,
    log_trace, log_warn,
};
use std::cell::Cell;

fn console(level: Level) -> (Console, BufferSink) {
    let sink = BufferSink::new();
    (
        Console::new(Config::new().with_level(level), sink.clone()),
        sink,
    )
}

#[test]
fn level_macros_write_through_console() {
    let (console, sink) = console(Level::Trace);
    log_trace!(console; "t {}", 1);
    log_debug!(console; "d {}", 2.5);
    log_info!(console; "i {}", "three");
    log_warn!(console; "w");
    log_error!(console; "e {} {}", 'x', true,);
    log_panic!(console; "p");

    assert_eq!(
        sink.text(),
        "TRACE t 1\nDEBUG d 2.5\nINFO  i three\nWARN  w\nERROR e x true\nPANIC p\n"
    );
}

#[test]
fn emit_takes_runtime_level() {
    let (console, sink) = console(Level::Info);
    for level in [Level::Debug, Level::Warn] {
        emit!(console; level, "at {}", level);
    }
    assert_eq!(sink.text(), "WARN  at warn\n");
}

#[test]
fn lazy_macro_defers_evaluation() {
    let (console, sink) = console(Level::Info);
    let calls = Cell::new(0);
    let dump = || {
        calls.set(calls.get() + 1);
        "state"
    };

    log_debug!(console; "{}", lazy!(dump()));
    assert_eq!(calls.get(), 0);

    log_info!(console; "{}", lazy!(dump()));
    assert_eq!(calls.get(), 1);
    assert_eq!(sink.text(), "INFO  state\n");
}

#[test]
fn macros_accept_console_references() {
    let (console, sink) = console(Level::Info);
    let by_ref = &console;
    log_info!(by_ref; "ref");
    assert_eq!(sink.text(), "INFO  ref\n");
}
