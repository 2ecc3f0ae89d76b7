//! Brainfuck execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: recursive evaluator over raw source text
//! - [`errors`]: runtime error types
//! - [`trace`]: debug trace formatting
//!
//! # Execution Model
//!
//! The engine interprets the character stream directly. Loop bodies are not
//! compiled; a `[` re-scans its body from source on every iteration and
//! re-locates its matching `]` by a linear bracket count on exit. Recursion
//! depth follows static bracket nesting, not runtime trip count.

pub mod engine;
pub mod errors;
pub mod trace;

pub use engine::Interpreter;
pub use errors::RuntimeError;
pub use trace::Trace;
