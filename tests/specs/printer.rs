// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for printer construction and printing.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// GATE
// =============================================================================

/// > A printer built with the gate off never writes, whatever it is given.
#[test]
fn disabled_printer_writes_nothing() {
    let sink = SharedBuffer::new();
    let stamp = CountingPrefix::new(|n| format!("T{n} "));
    let p = verbose(
        false,
        [sink.clone().into(), stamp.option(), "[INFO] ".into()],
    );

    cprint!(p, "should not appear");
    cprint!(p, "count={}", 3);
    cprint_if!(p, true, "nor this");
    cprint_if_not!(p, false, "nor that");

    assert!(sink.is_empty());
    assert_eq!(stamp.calls(), 0);
}

/// > Disabled with no options at all is fine too.
#[test]
fn disabled_printer_without_options() {
    let p = verbose(false, []);
    cprint!(p, "should not appear");
    assert!(!p.is_enabled());
}

// =============================================================================
// PREFIX ORDER
// =============================================================================

/// > No prefix: the sink receives exactly the formatted text.
#[test]
fn plain_printer_writes_format_only() {
    let sink = SharedBuffer::new();
    let p = printer!(true, sink.clone());
    cprint!(p, "{}-{:03}-{:.1}", "a", 7, 2.5);
    assert_eq!(sink.contents(), "a-007-2.5");
}

/// > End-to-end: static prefix then formatted text.
#[test]
fn static_prefix_end_to_end() {
    let sink = SharedBuffer::new();
    let p = printer!(true, sink.clone(), "[INFO] ");
    cprint!(p, "count={}", 3);
    assert_eq!(sink.contents(), "[INFO] count=3");
}

/// > Dynamic prefix supplied first is written first.
#[test]
fn dynamic_then_static_end_to_end() {
    let sink = SharedBuffer::new();
    let dyn_prefix = CountingPrefix::new(|n| format!("T{n} "));
    let p = verbose(
        true,
        [sink.clone().into(), dyn_prefix.option(), "[INFO] ".into()],
    );
    cprint!(p, "count={}", 3);
    assert_eq!(sink.contents(), "T1 [INFO] count=3");
}

/// > Static prefix supplied first is written first.
#[test]
fn static_then_dynamic_end_to_end() {
    let sink = SharedBuffer::new();
    let dyn_prefix = CountingPrefix::new(|n| format!("T{n} "));
    let p = verbose(
        true,
        [sink.clone().into(), "[INFO] ".into(), dyn_prefix.option()],
    );
    cprint!(p, "count={}", 3);
    assert_eq!(sink.contents(), "[INFO] T1 count=3");
}

/// > The prefix function runs exactly once per print, never cached.
#[test]
fn dynamic_prefix_called_once_per_print() {
    let sink = SharedBuffer::new();
    let dyn_prefix = CountingPrefix::new(|n| format!("<{n}>"));
    let p = verbose(true, [sink.clone().into(), dyn_prefix.option()]);

    for i in 0..5 {
        cprint!(p, "{};", i);
        assert_eq!(dyn_prefix.calls(), i + 1);
    }
    assert_eq!(sink.contents(), "<1>0;<2>1;<3>2;<4>3;<5>4;");
}

/// > Duplicate options: the last one of each kind wins.
#[test]
fn last_option_of_a_kind_wins() {
    let first = SharedBuffer::new();
    let second = SharedBuffer::new();
    let p = printer!(true, first.clone(), "one ", second.clone(), "two ");
    cprint!(p, "x");
    assert!(first.is_empty());
    assert_eq!(second.contents(), "two x");
}

// =============================================================================
// CONDITIONAL WRAPPERS
// =============================================================================

/// > If prints on true and returns its condition.
#[test]
fn print_if_returns_condition() {
    let sink = SharedBuffer::new();
    let p = printer!(true, sink.clone(), "> ");

    let shown = cprint_if!(p, 2 > 1, "shown {}\n", 1);
    let hidden = cprint_if!(p, 1 > 2, "hidden\n");

    assert!(shown);
    assert!(!hidden);
    assert_eq!(sink.contents(), "> shown 1\n");
}

/// > IfNot is the exact complement.
#[test]
fn print_if_not_returns_condition() {
    let sink = SharedBuffer::new();
    let p = printer!(true, sink.clone());

    assert!(cprint_if_not!(p, true, "hidden"));
    assert!(!cprint_if_not!(p, false, "shown"));
    assert_eq!(sink.contents(), "shown");
}

/// > Conditionals chain on the returned condition.
#[test]
fn conditionals_chain() {
    let sink = SharedBuffer::new();
    let p = printer!(true, sink.clone());
    let found = false;
    if !cprint_if!(p, found, "found it") {
        cprint!(p, "kept looking");
    }
    assert_eq!(sink.contents(), "kept looking");
}

// =============================================================================
// INDEPENDENT STREAMS
// =============================================================================

/// > Several printers with distinct sinks and prefixes coexist.
#[test]
fn independent_streams() {
    let errors = SharedBuffer::new();
    let trace = SharedBuffer::new();
    let e = printer!(true, errors.clone(), "E: ");
    let t = printer!(true, trace.clone(), "T: ");
    let off = printer!(false, trace.clone(), "X: ");

    cprint!(e, "bad\n");
    cprint!(t, "step 1\n");
    cprint!(off, "never\n");
    cprint!(t, "step 2\n");

    assert_eq!(errors.contents(), "E: bad\n");
    assert_eq!(trace.contents(), "T: step 1\nT: step 2\n");
}
