// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Printer construction options.
//!
//! Options are handed to the factory as an ordered list. The order matters
//! for one thing only: a static prefix given after a prefix function is
//! written after that function's output.

use std::fmt;
use std::sync::Arc;

use crate::sink::{SharedBuffer, Sink, SinkHandle, Stderr, Stdout};

/// Zero-argument prefix supplier, called once per printed message.
pub type PrefixFn = Arc<dyn Fn() -> String + Send + Sync>;

/// One printer option.
///
/// Only text, prefix functions and sinks convert into an option; anything
/// else is rejected at compile time:
///
/// ```compile_fail
/// use condprint::PrinterOption;
///
/// let _ = PrinterOption::from(121);
/// ```
#[derive(Clone)]
pub enum PrinterOption {
    /// Literal text written before each message.
    Prefix(String),
    /// Function whose output is written before each message.
    PrefixFn(PrefixFn),
    /// Where messages go (stdout when absent).
    Sink(SinkHandle),
}

impl PrinterOption {
    pub fn prefix(text: impl Into<String>) -> Self {
        PrinterOption::Prefix(text.into())
    }

    pub fn prefix_fn<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        PrinterOption::PrefixFn(Arc::new(f))
    }

    pub fn sink<S: Sink + 'static>(sink: S) -> Self {
        PrinterOption::Sink(Arc::new(sink))
    }
}

impl fmt::Debug for PrinterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterOption::Prefix(text) => f.debug_tuple("Prefix").field(text).finish(),
            PrinterOption::PrefixFn(_) => f.write_str("PrefixFn(..)"),
            PrinterOption::Sink(_) => f.write_str("Sink(..)"),
        }
    }
}

impl From<&str> for PrinterOption {
    fn from(text: &str) -> Self {
        PrinterOption::Prefix(text.to_string())
    }
}

impl From<String> for PrinterOption {
    fn from(text: String) -> Self {
        PrinterOption::Prefix(text)
    }
}

impl From<SinkHandle> for PrinterOption {
    fn from(sink: SinkHandle) -> Self {
        PrinterOption::Sink(sink)
    }
}

impl From<SharedBuffer> for PrinterOption {
    fn from(buf: SharedBuffer) -> Self {
        PrinterOption::sink(buf)
    }
}

impl From<Stdout> for PrinterOption {
    fn from(sink: Stdout) -> Self {
        PrinterOption::sink(sink)
    }
}

impl From<Stderr> for PrinterOption {
    fn from(sink: Stderr) -> Self {
        PrinterOption::sink(sink)
    }
}

/// Options folded into the fields of an enabled printer.
#[derive(Default)]
pub(crate) struct Resolved {
    pub sink: Option<SinkHandle>,
    pub prefix: Option<String>,
    pub prefix_fn: Option<PrefixFn>,
    /// Static prefix is written after the prefix function's output.
    pub after: bool,
}

impl Resolved {
    /// Fold options in order. Later options of the same kind replace
    /// earlier ones; `after` stays set once a prefix follows a function.
    pub(crate) fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = PrinterOption>,
    {
        let mut resolved = Resolved::default();
        for option in options {
            match option {
                PrinterOption::Prefix(text) => {
                    resolved.prefix = Some(text);
                    if resolved.prefix_fn.is_some() {
                        resolved.after = true;
                    }
                }
                PrinterOption::PrefixFn(f) => resolved.prefix_fn = Some(f),
                PrinterOption::Sink(sink) => resolved.sink = Some(sink),
            }
        }
        resolved
    }
}

#[cfg(test)]
#[path = "option_tests.rs"]
mod tests;
