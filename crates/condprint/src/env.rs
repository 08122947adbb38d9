// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-variable gates for [`verbose`](crate::verbose).
//!
//! A variable counts as set when its value is `1` or `true` (any case).

/// True when `name` is set to `1` or `true`.
pub fn flag(name: &str) -> bool {
    flag_or(name, false)
}

/// Like [`flag`], but returns `default` when `name` is unset or not unicode.
pub fn flag_or(name: &str, default: bool) -> bool {
    parse_flag(std::env::var(name).ok().as_deref(), default)
}

pub(crate) fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => v == "1" || v.eq_ignore_ascii_case("true"),
        None => default,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
