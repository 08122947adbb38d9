// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional printers.
//!
//! [`verbose`] returns either an inert printer (gate off) or one that writes
//! an optional prefix followed by the formatted message to a sink. Call
//! sites print unconditionally and let the printer decide:
//!
//! ```
//! use condprint::{cprint, cprint_if, verbose, PrinterOption, SharedBuffer};
//!
//! let log = SharedBuffer::new();
//! let p = verbose(true, [log.clone().into(), PrinterOption::from("[INFO] ")]);
//! cprint!(p, "count={}", 3);
//! cprint_if!(p, false, "skipped");
//! assert_eq!(log.contents(), "[INFO] count=3");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::option::{PrefixFn, PrinterOption, Resolved};
use crate::sink::{Sink, SinkHandle, Stdout};

/// Build a printer. When `enabled` is false the options are dropped
/// unexamined and the printer never writes anything.
pub fn verbose<I>(enabled: bool, options: I) -> Printer
where
    I: IntoIterator<Item = PrinterOption>,
{
    Printer::new(enabled, options)
}

/// A conditional printer. Configuration is fixed at construction; clones
/// share it.
#[derive(Clone, Default)]
pub enum Printer {
    /// Gate was off: every call is a no-op.
    #[default]
    Inert,
    /// Gate was on: calls write to the configured sink.
    Active(Arc<ActivePrinter>),
}

/// Configuration of an enabled printer.
pub struct ActivePrinter {
    sink: SinkHandle,
    prefix: Option<String>,
    prefix_fn: Option<PrefixFn>,
    after: bool,
}

impl Printer {
    /// See [`verbose`].
    pub fn new<I>(enabled: bool, options: I) -> Self
    where
        I: IntoIterator<Item = PrinterOption>,
    {
        if !enabled {
            return Printer::Inert;
        }

        let Resolved {
            sink,
            prefix,
            prefix_fn,
            after,
        } = Resolved::from_options(options);

        let active = ActivePrinter {
            sink: sink.unwrap_or_else(|| Arc::new(Stdout)),
            prefix: prefix.filter(|p| !p.is_empty()),
            prefix_fn,
            after,
        };
        tracing::debug!(
            "printer enabled: prefix={:?} prefix_fn={} after={}",
            active.prefix,
            active.prefix_fn.is_some(),
            active.after
        );
        Printer::Active(Arc::new(active))
    }

    /// A printer that never writes.
    pub fn inert() -> Self {
        Printer::Inert
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Printer::Active(_))
    }

    /// Write the prefix (if any) and the formatted message.
    pub fn print(&self, args: fmt::Arguments<'_>) {
        if let Printer::Active(active) = self {
            let text = match args.as_str() {
                Some(s) => Cow::Borrowed(s),
                None => Cow::Owned(fmt::format(args)),
            };
            active.emit(&text);
        }
    }

    /// Write the prefix (if any) and `text` as-is.
    pub fn print_str(&self, text: &str) {
        if let Printer::Active(active) = self {
            active.emit(text);
        }
    }

    /// Print only when `cond` is true. Returns `cond`.
    pub fn print_if(&self, cond: bool, args: fmt::Arguments<'_>) -> bool {
        if cond {
            self.print(args);
        }
        cond
    }

    /// Print only when `cond` is false. Returns `cond`.
    pub fn print_if_not(&self, cond: bool, args: fmt::Arguments<'_>) -> bool {
        if !cond {
            self.print(args);
        }
        cond
    }
}

impl ActivePrinter {
    fn emit(&self, text: &str) {
        if !self.after
            && let Some(prefix) = &self.prefix
        {
            self.write(prefix);
        }
        if let Some(prefix_fn) = &self.prefix_fn {
            self.write(&prefix_fn());
        }
        if self.after
            && let Some(prefix) = &self.prefix
        {
            self.write(prefix);
        }
        self.write(text);
    }

    /// Best effort: a failing sink must not disturb the caller.
    fn write(&self, s: &str) {
        if let Err(e) = self.sink.append(s) {
            tracing::debug!("printer write dropped: {}", e);
        }
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Printer::Inert => f.write_str("Printer::Inert"),
            Printer::Active(active) => f
                .debug_struct("Printer::Active")
                .field("prefix", &active.prefix)
                .field("prefix_fn", &active.prefix_fn.is_some())
                .field("after", &active.after)
                .finish_non_exhaustive(),
        }
    }
}

/// Print through a [`Printer`] with `format!` syntax.
#[macro_export]
macro_rules! cprint {
    ($printer:expr, $($arg:tt)+) => {
        $printer.print(::core::format_args!($($arg)+))
    };
}

/// Print through a [`Printer`] when the condition holds; evaluates to the
/// condition.
#[macro_export]
macro_rules! cprint_if {
    ($printer:expr, $cond:expr, $($arg:tt)+) => {
        $printer.print_if($cond, ::core::format_args!($($arg)+))
    };
}

/// Print through a [`Printer`] when the condition does not hold; evaluates
/// to the condition.
#[macro_export]
macro_rules! cprint_if_not {
    ($printer:expr, $cond:expr, $($arg:tt)+) => {
        $printer.print_if_not($cond, ::core::format_args!($($arg)+))
    };
}

/// Build a printer from a gate and options of mixed kinds, converting each
/// with `PrinterOption::from`.
///
/// ```
/// use condprint::{printer, SharedBuffer};
///
/// let log = SharedBuffer::new();
/// let p = printer!(true, log.clone(), "> ");
/// p.print_str("hi");
/// assert_eq!(log.contents(), "> hi");
/// ```
///
/// An option of any other type does not compile:
///
/// ```compile_fail
/// let _ = condprint::printer!(true, 121);
/// ```
#[macro_export]
macro_rules! printer {
    ($enabled:expr $(, $option:expr)* $(,)?) => {{
        let options: ::std::vec::Vec<$crate::PrinterOption> =
            ::std::vec![$($crate::PrinterOption::from($option)),*];
        $crate::verbose($enabled, options)
    }};
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
