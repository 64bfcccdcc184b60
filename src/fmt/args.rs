//! Log arguments and the runtime format renderer.
//!
//! Messages are rendered only after the level gate passes, so arguments travel as
//! borrowed trait objects instead of a pre-built `String`. Expensive diagnostics are
//! wrapped in [`Lazy`] and only run when the message is actually emitted.

use std::fmt;

/// One positional log argument.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    /// Rendered through its `Display` impl.
    Literal(&'a dyn fmt::Display),
    /// Called once, after the level gate, to produce the argument text.
    Lazy(&'a dyn Fn() -> String),
}

impl Arg<'_> {
    /// Produces the argument text. Gated calls never reach this, so a lazy closure
    /// only runs for messages that are written.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Literal(v) => v.to_string(),
            Self::Lazy(f) => f(),
        }
    }

    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(&v.to_string()).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Marks a closure as a lazy argument for the logging macros: `lazy!(|| tree.dump())`.
pub struct Lazy<F>(pub F);

impl<F: Fn() -> String> Lazy<F> {
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

/// Converts macro arguments into [`Arg`]. `Display` values become literals,
/// [`Lazy`] wrappers become lazy arguments.
pub trait IntoArg<'a> {
    fn into_arg(self) -> Arg<'a>;
}

impl<'a, T: fmt::Display> IntoArg<'a> for &'a T {
    fn into_arg(self) -> Arg<'a> {
        Arg::Literal(self)
    }
}

impl<'a, F: Fn() -> String> IntoArg<'a> for &'a Lazy<F> {
    fn into_arg(self) -> Arg<'a> {
        Arg::Lazy(&self.0)
    }
}

/// Resolves every argument exactly once, in order.
#[must_use]
pub fn resolve_all(args: &[Arg<'_>]) -> Vec<String> {
    args.iter().map(Arg::resolve).collect()
}

/// Text substituted for a placeholder with no matching argument.
pub const MISSING: &str = "{MISSING}";

/// Substitutes `args` into `format`.
///
/// `{}` takes the next argument, `{N}` takes argument `N`, and `{{`/`}}` are literal
/// braces. Anything after a `:` inside the braces is ignored. Mismatches never panic:
/// a placeholder without an argument renders as `{MISSING}` and arguments that no
/// placeholder consumed are appended as `{EXTRA: a, b}`.
#[must_use]
pub fn render(format: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(format.len() + args.iter().map(String::len).sum::<usize>());
    let mut used = vec![false; args.len()];
    let mut next = 0;
    let mut rest = format;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            rest = "";
            break;
        };

        let inner = &tail[1..close];
        let index_text = inner.split(':').next().unwrap_or_default().trim();
        let index = if index_text.is_empty() {
            let i = next;
            next += 1;
            Some(i)
        } else {
            index_text.parse::<usize>().ok()
        };

        match index {
            Some(i) => match args.get(i) {
                Some(value) => {
                    out.push_str(value);
                    used[i] = true;
                }
                None => out.push_str(MISSING),
            },
            None => out.push_str(&tail[..=close]),
        }

        rest = &tail[close + 1..];
    }
    out.push_str(rest);

    let extra: Vec<&str> = args
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(a, _)| a.as_str())
        .collect();
    if !extra.is_empty() {
        out.push_str(" {EXTRA: ");
        out.push_str(&extra.join(", "));
        out.push('}');
    }

    out
}
