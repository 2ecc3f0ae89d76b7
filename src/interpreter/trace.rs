//! Debug trace formatting
//!
//! When tracing is enabled (`-d`/`--debug`), the engine emits one line per
//! executed command to stderr, indented by two spaces per nesting depth.
//! Tracing is a pure side observation; it never touches tape or cursor state,
//! and it stays off the program's own output stream so piped output remains
//! clean.

use std::fmt;

/// Trace switch threaded through the engine.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    enabled: bool,
}

impl Trace {
    pub fn new(enabled: bool) -> Self {
        Trace { enabled }
    }

    /// Emit one annotated line at the given indentation level.
    pub fn line(&self, level: usize, args: fmt::Arguments<'_>) {
        if self.enabled {
            eprintln!("{:width$}{}", "", args, width = level * 2);
        }
    }
}
