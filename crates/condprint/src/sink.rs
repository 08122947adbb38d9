// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output sinks a printer writes to.
//!
//! A sink only needs to append a string. Appends take `&self` so one sink
//! can back several printers, and a printer can be shared across threads.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination that accepts appended text.
pub trait Sink: Send + Sync {
    /// Append `s` to the sink.
    fn append(&self, s: &str) -> io::Result<()>;
}

/// Shared handle to a sink, as held by a printer.
pub type SinkHandle = Arc<dyn Sink>;

/// Process standard output. Default sink of every enabled printer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn append(&self, s: &str) -> io::Result<()> {
        write_flushed(&mut io::stdout().lock(), s)
    }
}

/// Process standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Sink for Stderr {
    fn append(&self, s: &str) -> io::Result<()> {
        write_flushed(&mut io::stderr().lock(), s)
    }
}

/// In-memory text buffer. Clones share the same underlying string, so a
/// caller can hand one clone to a printer and read the other.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<String>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything appended so far.
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Take the buffered text, leaving the buffer empty.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.inner.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for SharedBuffer {
    fn append(&self, s: &str) -> io::Result<()> {
        let mut buf = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("shared buffer lock poisoned"))?;
        buf.push_str(s);
        Ok(())
    }
}

/// Any byte writer (file, socket, `Vec<u8>`) behind a mutex.
impl<W: Write + Send> Sink for Mutex<W> {
    fn append(&self, s: &str) -> io::Result<()> {
        let mut writer = self
            .lock()
            .map_err(|_| io::Error::other("sink lock poisoned"))?;
        write_flushed(&mut *writer, s)
    }
}

/// Every append reaches the underlying stream before returning.
fn write_flushed<W: Write + ?Sized>(writer: &mut W, s: &str) -> io::Result<()> {
    writer.write_all(s.as_bytes())?;
    writer.flush()
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn append(&self, s: &str) -> io::Result<()> {
        (**self).append(s)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
