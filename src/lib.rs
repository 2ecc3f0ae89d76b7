//! # Introduction
//!
//! bftty executes brainfuck programs on a single linear tape of wrapping
//! byte cells, reading input one raw terminal character at a time.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source text → Interpreter (recursive eval) → Tape + Console
//! ```
//!
//! 1. [`interpreter`] — walks the command characters directly; loop bodies
//!    are re-read from source on every iteration, never compiled.
//! 2. [`memory`] — the [`memory::tape::Tape`]: fixed capacity, wrapping
//!    cells, one cursor with a hard bounds policy at both edges.
//! 3. [`console`] — raw-mode single-character reads with manual echo, and
//!    immediately-flushed writes; [`console::ScriptedConsole`] stands in
//!    during tests.
//! 4. [`repl`] — the interactive shell with tape inspection commands; not
//!    needed when running a source file.
//!
//! ## Language
//!
//! Recognized symbols: `> < + - . , [ ]`. Every other byte is a no-op, which
//! is how source files carry commentary.

pub mod console;
pub mod interpreter;
pub mod memory;
pub mod repl;
