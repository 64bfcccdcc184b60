//! Logging macros. Each argument is borrowed and converted through
//! [`IntoArg`](crate::fmt::IntoArg): `Display` values become literals, [`lazy!`] values
//! run only when the message passes the level gate.
//!
//! ```
//! use hooklog::{BufferSink, Config, Console, lazy, log_info, log_trace};
//!
//! let sink = BufferSink::new();
//! let console = Console::new(Config::new(), sink.clone());
//!
//! log_info!(console; "user {} logged in", "ana");
//! log_trace!(console; "state: {}", lazy!(expensive_dump()));
//! # fn expensive_dump() -> String { unreachable!() }
//!
//! assert_eq!(sink.text(), "INFO  user ana logged in\n");
//! ```

/// Wraps an expression so it is evaluated only if the message is emitted.
#[macro_export]
macro_rules! lazy {
    ($e:expr) => {
        $crate::fmt::Lazy(|| ::std::string::ToString::to_string(&$e))
    };
}

/// Emits at an explicit level, on a console (`emit!(console; level, ...)`) or on the
/// default console (`emit!(level, ...)`).
#[macro_export]
macro_rules! emit {
    ($console:expr; $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::Console::log(
            &$console,
            $level,
            $fmt,
            &[$($crate::fmt::IntoArg::into_arg(&$arg)),*],
        )
    };
    ($level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::console::log(
            $level,
            $fmt,
            &[$($crate::fmt::IntoArg::into_arg(&$arg)),*],
        )
    };
}

#[macro_export]
macro_rules! log_trace {
    ($console:expr; $($t:tt)+) => { $crate::emit!($console; $crate::Level::Trace, $($t)+) };
    ($($t:tt)+) => { $crate::emit!($crate::Level::Trace, $($t)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($console:expr; $($t:tt)+) => { $crate::emit!($console; $crate::Level::Debug, $($t)+) };
    ($($t:tt)+) => { $crate::emit!($crate::Level::Debug, $($t)+) };
}

#[macro_export]
macro_rules! log_info {
    ($console:expr; $($t:tt)+) => { $crate::emit!($console; $crate::Level::Info, $($t)+) };
    ($($t:tt)+) => { $crate::emit!($crate::Level::Info, $($t)+) };
}

#[macro_export]
macro_rules! log_warn {
    ($console:expr; $($t:tt)+) => { $crate::emit!($console; $crate::Level::Warn, $($t)+) };
    ($($t:tt)+) => { $crate::emit!($crate::Level::Warn, $($t)+) };
}

#[macro_export]
macro_rules! log_error {
    ($console:expr; $($t:tt)+) => { $crate::emit!($console; $crate::Level::Error, $($t)+) };
    ($($t:tt)+) => { $crate::emit!($crate::Level::Error, $($t)+) };
}

/// Emits at [`Level::Panic`](crate::Level::Panic). Does not unwind.
#[macro_export]
macro_rules! log_panic {
    ($console:expr; $($t:tt)+) => { $crate::emit!($console; $crate::Level::Panic, $($t)+) };
    ($($t:tt)+) => { $crate::emit!($crate::Level::Panic, $($t)+) };
}
