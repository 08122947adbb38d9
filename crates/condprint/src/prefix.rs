// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stock prefix functions for [`PrinterOption::prefix_fn`].
//!
//! [`PrinterOption::prefix_fn`]: crate::PrinterOption::prefix_fn

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local, TimeZone, Utc};

/// Local time rendered with a strftime-style `format`, e.g. `"%H:%M:%S "`.
pub fn timestamp(format: impl Into<String>) -> impl Fn() -> String + Send + Sync + 'static {
    let format = format.into();
    move || render(&Local::now(), &format)
}

/// Like [`timestamp`], in UTC.
pub fn utc_timestamp(format: impl Into<String>) -> impl Fn() -> String + Send + Sync + 'static {
    let format = format.into();
    move || render(&Utc::now(), &format)
}

/// Sequence number prefix: the first `{}` in `template` is replaced by
/// 1, 2, 3, ... on successive calls.
pub fn counter(template: impl Into<String>) -> impl Fn() -> String + Send + Sync + 'static {
    let template = template.into();
    let next = AtomicU64::new(1);
    move || {
        let n = next.fetch_add(1, Ordering::Relaxed);
        template.replacen("{}", &n.to_string(), 1)
    }
}

/// Whether `format` is a usable strftime format string.
pub fn is_valid_format(format: &str) -> bool {
    let mut out = String::new();
    write!(out, "{}", Utc::now().format(format)).is_ok()
}

/// Invalid formats render as an empty prefix instead of panicking.
fn render<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
    }
    out
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
