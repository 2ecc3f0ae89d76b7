//! Execution engine for the brainfuck interpreter
//!
//! The engine is a recursive evaluator over raw source text. There is no
//! lexer, no AST, and no compiled instruction list: each `[` re-invokes
//! [`Interpreter::eval`] on the window starting just past the bracket, once
//! per iteration, and the matching `]` is re-located by a linear
//! bracket-depth scan every time the loop exits. This re-scan-per-iteration
//! model is the contract, not an implementation shortcut.
//!
//! The nesting depth threaded through `eval` exists only to distinguish a
//! stray `]` at top level from the legitimate end of a loop body, and to
//! indent trace output.

use crate::console::Console;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::trace::Trace;
use crate::memory::tape::Tape;

/// The main interpreter that executes a brainfuck program
///
/// Borrows the tape and console so that one tape can serve a whole
/// interactive session: the cursor and cells persist across `run` calls.
pub struct Interpreter<'a, C: Console> {
    tape: &'a mut Tape,
    console: &'a mut C,
    trace: Trace,
}

impl<'a, C: Console> Interpreter<'a, C> {
    pub fn new(tape: &'a mut Tape, console: &'a mut C, trace: Trace) -> Self {
        Interpreter {
            tape,
            console,
            trace,
        }
    }

    /// Execute a complete command string at nesting depth 0.
    pub fn run(&mut self, source: &str) -> Result<(), RuntimeError> {
        self.run_bytes(source.as_bytes())
    }

    /// Byte-slice entry point for source read straight from a file.
    ///
    /// The language is byte-oriented: anything outside the eight command
    /// characters is commentary, so source need not be valid UTF-8.
    pub fn run_bytes(&mut self, source: &[u8]) -> Result<(), RuntimeError> {
        self.eval(source, 0)
    }

    /// Execute `window` left to right.
    ///
    /// Returns when the window is exhausted, or at the `]` that closes the
    /// loop body this call was entered for (`depth > 0`). Any byte outside
    /// the eight command characters is a no-op.
    fn eval(&mut self, window: &[u8], depth: usize) -> Result<(), RuntimeError> {
        let mut i = 0;
        while i < window.len() {
            match window[i] {
                b'>' => {
                    let dest = self.tape.cursor() + 1;
                    self.trace.line(
                        depth + 1,
                        format_args!(
                            "> Move pointer right: {} [{}]",
                            dest,
                            self.tape.get(dest).unwrap_or(0)
                        ),
                    );
                    self.tape.move_right()?;
                }
                b'<' => {
                    let dest = self.tape.cursor().checked_sub(1);
                    self.trace.line(
                        depth + 1,
                        format_args!(
                            "< Move pointer left: {} [{}]",
                            self.tape.cursor() as i64 - 1,
                            dest.and_then(|d| self.tape.get(d)).unwrap_or(0)
                        ),
                    );
                    self.tape.move_left()?;
                }
                b'+' => {
                    self.trace.line(
                        depth + 1,
                        format_args!(
                            "+ increment pos: {} [{}]",
                            self.tape.cursor(),
                            self.tape.read().wrapping_add(1)
                        ),
                    );
                    self.tape.increment();
                }
                b'-' => {
                    self.trace.line(
                        depth + 1,
                        format_args!(
                            "- decrement pos: {} [{}]",
                            self.tape.cursor(),
                            self.tape.read().wrapping_sub(1)
                        ),
                    );
                    self.tape.decrement();
                }
                b'.' => {
                    self.trace.line(
                        depth + 1,
                        format_args!(
                            ". output value of: {} [{}]",
                            self.tape.cursor(),
                            self.tape.read()
                        ),
                    );
                    self.console.write_byte(self.tape.read())?;
                }
                b',' => match self.console.read_byte()? {
                    Some(byte) => {
                        self.trace.line(
                            depth + 1,
                            format_args!(", read input in: {} [{}]", self.tape.cursor(), byte),
                        );
                        self.tape.write(byte);
                    }
                    None => {
                        // End-of-input leaves the cell unchanged
                        self.trace.line(
                            depth + 1,
                            format_args!(
                                ", read EOF in: {} [{}]",
                                self.tape.cursor(),
                                self.tape.read()
                            ),
                        );
                    }
                },
                b'[' => {
                    // The body is re-read from source on every iteration;
                    // each recursive call returns at its matching `]`.
                    let body = &window[i + 1..];
                    while self.tape.read() != 0 {
                        self.trace.line(
                            depth + 1,
                            format_args!(
                                "[ while item {} not '0' [{}]:",
                                self.tape.cursor(),
                                self.tape.read()
                            ),
                        );
                        self.eval(body, depth + 1)?;
                    }
                    self.trace.line(
                        depth + 1,
                        format_args!(
                            "[ item {} is '0' [{}]",
                            self.tape.cursor(),
                            self.tape.read()
                        ),
                    );

                    // Skip to the closing bracket so the outer scan resumes
                    // just past the body.
                    i = self.find_closing_bracket(window, i)?;
                }
                b']' => {
                    if depth == 0 {
                        return Err(RuntimeError::UnmatchedCloseBracket);
                    }
                    // Natural end of the current loop body; the rest of the
                    // window belongs to the caller's own scan.
                    return Ok(());
                }
                _ => {}
            }
            i += 1;
        }
        Ok(())
    }

    /// Forward bracket-depth scan from the `[` at `open` to its matching `]`.
    fn find_closing_bracket(
        &self,
        window: &[u8],
        open: usize,
    ) -> Result<usize, RuntimeError> {
        let mut level: usize = 0;
        for (j, &byte) in window.iter().enumerate().skip(open) {
            match byte {
                b'[' => level += 1,
                b']' => level -= 1,
                _ => {}
            }
            if level == 0 {
                return Ok(j);
            }
        }
        Err(RuntimeError::UnmatchedOpenBracket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn run(tape: &mut Tape, source: &str) -> Result<Vec<u8>, RuntimeError> {
        let mut console = ScriptedConsole::new(&[]);
        Interpreter::new(tape, &mut console, Trace::new(false)).run(source)?;
        Ok(console.output().to_vec())
    }

    #[test]
    fn test_closing_bracket_scan_handles_nesting() {
        let mut tape = Tape::new(4);
        let mut console = ScriptedConsole::new(&[]);
        let interp = Interpreter::new(&mut tape, &mut console, Trace::new(false));
        assert_eq!(interp.find_closing_bracket(b"[[-]]", 0).unwrap(), 4);
        assert_eq!(interp.find_closing_bracket(b"[[-]]", 1).unwrap(), 3);
        assert!(matches!(
            interp.find_closing_bracket(b"[[-]", 0),
            Err(RuntimeError::UnmatchedOpenBracket)
        ));
    }

    #[test]
    fn test_loop_with_zero_cell_is_skipped() {
        let mut tape = Tape::new(4);
        let output = run(&mut tape, "[+++.]").unwrap();
        assert!(output.is_empty());
        assert_eq!(tape.read(), 0);
    }

    #[test]
    fn test_commands_after_skipped_loop_still_run() {
        let mut tape = Tape::new(4);
        let output = run(&mut tape, "[-]++.").unwrap();
        assert_eq!(output, vec![2]);
    }
}
