//! Interactive shell
//!
//! Line-based driver around the engine. Each prompt reads one line; a few
//! inspection commands act on the tape directly, and anything else is handed
//! to the interpreter as brainfuck source. The tape (cells and cursor) lives
//! across lines, so a session can build up state command by command.
//!
//! Shell commands:
//! - `exit` — leave the shell
//! - `clear` — zero every cell (the cursor stays put)
//! - `len` — report the tape capacity
//! - `show [n]` — display cell `n` (default 0, clamped to the last cell)
//! - `print [n]` — display the first `n` cells (default 16), cursor bracketed
//!
//! An evaluator error ends the session and is fatal to the process, same as
//! in file mode.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::trace::Trace;
use crate::memory::tape::Tape;

const PROMPT: &str = ">>> ";
const DEFAULT_PRINT_COUNT: usize = 16;

/// Interactive session over one tape.
pub struct Repl<'a, C: Console> {
    tape: &'a mut Tape,
    console: &'a mut C,
    trace: Trace,
}

impl<'a, C: Console> Repl<'a, C> {
    pub fn new(tape: &'a mut Tape, console: &'a mut C, trace: Trace) -> Self {
        Repl {
            tape,
            console,
            trace,
        }
    }

    /// Run the prompt loop until `exit` or end-of-input on `input`.
    ///
    /// Shell messages go to `output`; the program's own `.`/`,` I/O goes
    /// through the console the session was built with.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), RuntimeError> {
        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }
            let command = line.trim_end_matches(['\n', '\r']);

            if command == "exit" {
                writeln!(output, "Exiting...")?;
                return Ok(());
            } else if command == "clear" {
                writeln!(output, "Clear tape!")?;
                self.tape.clear();
            } else if command == "len" {
                writeln!(output, "Tape length: {}", self.tape.capacity())?;
            } else if let Some(rest) = command.strip_prefix("show") {
                self.show(&mut output, rest)?;
            } else if let Some(rest) = command.strip_prefix("print") {
                self.print(&mut output, rest)?;
            } else {
                Interpreter::new(self.tape, self.console, self.trace).run(command)?;
            }
        }
    }

    /// `show [n]`: one cell as decimal and as a character.
    fn show<W: Write>(&self, output: &mut W, argument: &str) -> Result<(), RuntimeError> {
        // Unparseable or missing index falls back to 0, out-of-range clamps
        let pos = argument
            .trim()
            .parse::<usize>()
            .unwrap_or(0)
            .min(self.tape.capacity() - 1);
        let value = self.tape.get(pos).unwrap_or(0);
        writeln!(output, "#{} element: {:3} [{}]", pos, value, value as char)?;
        Ok(())
    }

    /// `print [n]`: a prefix of the tape, the cursor's cell in brackets.
    fn print<W: Write>(&self, output: &mut W, argument: &str) -> Result<(), RuntimeError> {
        let count = argument
            .trim()
            .parse::<usize>()
            .unwrap_or(DEFAULT_PRINT_COUNT)
            .min(self.tape.capacity());
        writeln!(output, "First {} entries of tape:", count)?;
        for index in 0..count {
            let value = self.tape.get(index).unwrap_or(0);
            if index == self.tape.cursor() {
                write!(output, "[{:3}] ", value)?;
            } else {
                write!(output, "{:3} ", value)?;
            }
        }
        writeln!(output)?;
        Ok(())
    }
}
