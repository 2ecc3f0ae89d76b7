//! Memory model for the brainfuck interpreter
//!
//! This module provides the single memory abstraction the language needs:
//! - [`tape`]: a fixed-capacity array of wrapping byte cells with one cursor
//!
//! There is no heap and no call stack; every command addresses the cell under
//! the cursor, and the cursor is the only pointer in the machine.

pub mod tape;

pub use tape::{BoundsError, Side, Tape, DEFAULT_CAPACITY};
