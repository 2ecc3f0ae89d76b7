//! The linear memory tape
//!
//! This module provides [`Tape`], the interpreter's addressable memory: a
//! fixed-capacity array of unsigned byte cells with one movable cursor.
//!
//! # Bounds Policy
//!
//! Cursor moves past either edge of the tape fail with [`BoundsError`] and are
//! fatal to the run. Cell arithmetic wraps modulo 256 and never fails.
//!
//! # Historical Error Labels
//!
//! The diagnostic text for bounds failures labels the right edge "underflow"
//! and the left edge "overflow", inverted relative to conventional
//! terminology. The labels are cosmetic and kept for compatibility; [`Side`]
//! carries the actual direction.

use std::fmt;

/// Tape capacity used when none is configured on the command line.
pub const DEFAULT_CAPACITY: usize = 65536;

/// Which edge of the tape a failed cursor move ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A cursor move that would leave `[0, capacity)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    pub side: Side,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inverted labels, kept for diagnostic compatibility
        match self.side {
            Side::Right => write!(f, "stack underflow!"),
            Side::Left => write!(f, "stack overflow!"),
        }
    }
}

impl std::error::Error for BoundsError {}

/// The interpreter's memory: wrapping byte cells plus a cursor.
///
/// Allocated once per run or interactive session, zero-initialized. The
/// cursor persists across commands within a session and is never reset
/// implicitly; [`Tape::clear`] zeroes the cells but leaves the cursor alone.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    cursor: usize,
}

impl Tape {
    /// Create a zeroed tape with the cursor at position 0.
    ///
    /// `capacity` must be at least 1; the driver rejects a configured size of
    /// 0 before a tape is ever built.
    pub fn new(capacity: usize) -> Self {
        Tape {
            cells: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Move the cursor one cell to the right.
    pub fn move_right(&mut self) -> Result<(), BoundsError> {
        if self.cursor < self.cells.len() - 1 {
            self.cursor += 1;
            Ok(())
        } else {
            Err(BoundsError { side: Side::Right })
        }
    }

    /// Move the cursor one cell to the left.
    pub fn move_left(&mut self) -> Result<(), BoundsError> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Ok(())
        } else {
            Err(BoundsError { side: Side::Left })
        }
    }

    /// Add 1 to the cell at the cursor, wrapping 255 → 0.
    pub fn increment(&mut self) {
        self.cells[self.cursor] = self.cells[self.cursor].wrapping_add(1);
    }

    /// Subtract 1 from the cell at the cursor, wrapping 0 → 255.
    pub fn decrement(&mut self) {
        self.cells[self.cursor] = self.cells[self.cursor].wrapping_sub(1);
    }

    /// Value of the cell at the cursor.
    pub fn read(&self) -> u8 {
        self.cells[self.cursor]
    }

    /// Overwrite the cell at the cursor.
    pub fn write(&mut self, byte: u8) {
        self.cells[self.cursor] = byte;
    }

    /// Value of an arbitrary cell, for shell inspection and tracing.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Zero every cell. The cursor stays where it is.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Tape {
    fn default() -> Self {
        Tape::new(DEFAULT_CAPACITY)
    }
}
