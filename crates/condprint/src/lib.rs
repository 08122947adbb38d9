// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional printf-style printers.
//!
//! Decide once whether a stream of diagnostic output is wanted, then print
//! unconditionally at every call site:
//!
//! ```
//! use condprint::{cprint, prefix, verbose, PrinterOption, SharedBuffer};
//!
//! let log = SharedBuffer::new();
//! let p = verbose(
//!     true,
//!     [
//!         log.clone().into(),
//!         PrinterOption::prefix_fn(prefix::counter("#{} ")),
//!         "[INFO] ".into(),
//!     ],
//! );
//! cprint!(p, "count={}\n", 3);
//! assert_eq!(log.contents(), "#1 [INFO] count=3\n");
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod option;
pub mod prefix;
pub mod printer;
pub mod sink;

pub use config::{PrinterConfig, Printers, PrintersConfig, Target};
pub use error::{Error, Result};
pub use option::{PrefixFn, PrinterOption};
pub use printer::{Printer, verbose};
pub use sink::{SharedBuffer, Sink, SinkHandle, Stderr, Stdout};
