// bftty: brainfuck interpreter with raw-terminal I/O and an interactive shell

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::process;

use bftty::console::RawConsole;
use bftty::interpreter::engine::Interpreter;
use bftty::interpreter::trace::Trace;
use bftty::memory::tape::{Tape, DEFAULT_CAPACITY};
use bftty::repl::Repl;

/// Malformed invocation arguments
#[derive(Debug)]
enum OptionsError {
    /// `--size 0`, or a size that does not parse as a number
    InvalidSize,
    /// An option that requires a value was last on the command line
    MissingArgument { option: String, name: &'static str },
    /// Anything that is not a recognized option
    UnknownArgument(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidSize => write!(f, "Invalid size of 0!"),
            OptionsError::MissingArgument { option, name } => {
                write!(f, "Missing argument '{}' for option '{}'", name, option)
            }
            OptionsError::UnknownArgument(argument) => {
                write!(f, "Unknown argument: '{}'", argument)
            }
        }
    }
}

#[derive(Debug)]
struct Options {
    tape_capacity: usize,
    file: Option<String>,
    debug: bool,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Options, OptionsError> {
        let mut options = Options {
            tape_capacity: DEFAULT_CAPACITY,
            file: None,
            debug: false,
        };
        while let Some(argument) = args.next() {
            match argument.as_str() {
                "-c" | "--size" => {
                    let value = args.next().ok_or_else(|| OptionsError::MissingArgument {
                        option: argument.clone(),
                        name: "size",
                    })?;
                    // A non-numeric size parses as 0 and is rejected with it
                    options.tape_capacity = value.parse().unwrap_or(0);
                    if options.tape_capacity == 0 {
                        return Err(OptionsError::InvalidSize);
                    }
                }
                "-f" | "--file" => {
                    options.file =
                        Some(args.next().ok_or_else(|| OptionsError::MissingArgument {
                            option: argument.clone(),
                            name: "filename",
                        })?);
                }
                "-d" | "--debug" => options.debug = true,
                _ => return Err(OptionsError::UnknownArgument(argument)),
            }
        }
        Ok(options)
    }
}

fn version() {
    println!("bftty - brainfuck terminal interpreter");
    println!("v{}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("OptionsError: {}", error);
            process::exit(1);
        }
    };

    // Banner comes first in interactive mode, before any debug chatter
    if options.file.is_none() {
        version();
    }

    let trace = Trace::new(options.debug);
    if options.debug {
        println!("Debug Mode!");
        println!("Generating tape with {} cells", options.tape_capacity);
    }

    let mut tape = Tape::new(options.tape_capacity);
    let mut console = RawConsole::new();

    let result = match &options.file {
        Some(path) => {
            if options.debug {
                println!("Reading file '{}'", path);
            }
            // Raw bytes: commentary in source files need not be valid UTF-8
            let mut source = match fs::read(path) {
                Ok(source) => source,
                Err(_) => {
                    eprintln!("Can't open file '{}'", path);
                    process::exit(1);
                }
            };
            // One contiguous command window; newlines would only be no-ops
            // but the bracket scan is simplest over a single line
            source.retain(|byte| *byte != b'\n' && *byte != b'\r');
            Interpreter::new(&mut tape, &mut console, trace).run_bytes(&source)
        }
        None => {
            let stdin = io::stdin();
            Repl::new(&mut tape, &mut console, trace).run(stdin.lock(), io::stdout())
        }
    };

    // All evaluator errors are fatal; report and exit non-zero
    if let Err(error) = result {
        eprintln!("ParsingError: {}", error);
        process::exit(1);
    }
}
