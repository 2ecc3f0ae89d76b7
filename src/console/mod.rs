//! Terminal I/O for the `.` and `,` commands
//!
//! This module provides the [`Console`] seam between the engine and the
//! outside world:
//! - [`RawConsole`]: real terminal I/O. Reads toggle crossterm raw mode
//!   around a single one-byte read so no Enter key is needed, then echo the
//!   byte manually (raw mode suppresses terminal echo). Writes flush
//!   immediately so output ordering is visible before any following read.
//! - [`ScriptedConsole`]: scripted input and recorded output for tests.
//!
//! A read of the EOT control byte (ASCII 4, Ctrl-D) or of a closed stream is
//! reported as end-of-input, never as an error.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crossterm::terminal;

/// End-of-transmission control byte; translated to end-of-input.
const EOT: u8 = 4;

/// One-byte-at-a-time I/O as the engine sees it.
pub trait Console {
    /// Read one byte. `Ok(None)` signals end-of-input. Any byte delivered is
    /// echoed to the output side before this returns.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Write one byte and flush it.
    fn write_byte(&mut self, byte: u8) -> io::Result<()>;
}

/// Console backed by the process's stdin/stdout.
#[derive(Debug, Default)]
pub struct RawConsole;

impl RawConsole {
    pub fn new() -> Self {
        RawConsole
    }
}

impl Console for RawConsole {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        // Raw mode only around the single read. Enabling fails when stdin is
        // not a tty (piped input); a plain read still behaves correctly then.
        let raw = terminal::enable_raw_mode().is_ok();
        let mut buf = [0u8; 1];
        let read = io::stdin().read(&mut buf);
        if raw {
            terminal::disable_raw_mode()?;
        }
        match read? {
            0 => Ok(None),
            _ if buf[0] == EOT => Ok(None),
            _ => {
                // Raw mode turns off CR-to-NL translation; programs expect
                // the Enter key to deliver '\n'.
                let byte = if buf[0] == b'\r' { b'\n' } else { buf[0] };
                self.write_byte(byte)?;
                Ok(Some(byte))
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(&[byte])?;
        stdout.flush()
    }
}

/// Test console with a fixed input script and an output recording.
///
/// Mirrors the [`Console`] contract exactly: an EOT byte in the script is
/// end-of-input, and every delivered byte is echoed into the recording.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl ScriptedConsole {
    pub fn new(input: &[u8]) -> Self {
        ScriptedConsole {
            input: input.iter().copied().collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, echoes included.
    pub fn output(&self) -> &[u8] {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.input.pop_front() {
            None => Ok(None),
            Some(EOT) => Ok(None),
            Some(byte) => {
                self.output.push(byte);
                Ok(Some(byte))
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.output.push(byte);
        Ok(())
    }
}
