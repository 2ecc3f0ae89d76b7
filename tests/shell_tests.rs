// Integration tests for the interactive shell

use bftty::console::ScriptedConsole;
use bftty::interpreter::errors::RuntimeError;
use bftty::interpreter::trace::Trace;
use bftty::memory::tape::Tape;
use bftty::repl::Repl;

/// Feed `script` to a fresh shell session; returns (shell output, program output).
fn session(tape: &mut Tape, script: &str) -> (String, Vec<u8>) {
    let mut console = ScriptedConsole::new(&[]);
    let mut output = Vec::new();
    Repl::new(tape, &mut console, Trace::new(false))
        .run(script.as_bytes(), &mut output)
        .unwrap();
    (String::from_utf8(output).unwrap(), console.output().to_vec())
}

#[test]
fn test_exit_command() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "exit\n");
    assert!(output.starts_with(">>> "));
    assert!(output.contains("Exiting..."));
}

#[test]
fn test_end_of_input_leaves_cleanly() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "");
    assert_eq!(output, ">>> \n");
}

#[test]
fn test_len_reports_capacity() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "len\nexit\n");
    assert!(output.contains("Tape length: 8"));
}

#[test]
fn test_show_defaults_to_cell_zero() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "+++\nshow\nexit\n");
    assert!(output.contains("#0 element:   3"));
}

#[test]
fn test_show_clamps_out_of_range_index() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "show 99\nexit\n");
    assert!(output.contains("#7 element:   0"));
}

#[test]
fn test_print_brackets_the_cursor_cell() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "+>++\nprint 4\nexit\n");
    assert!(output.contains("First 4 entries of tape:"));
    assert!(output.contains("  1 [  2]   0   0 "));
}

#[test]
fn test_clear_zeroes_cells_but_keeps_cursor() {
    let mut tape = Tape::new(8);
    let (output, _) = session(&mut tape, "+>+\nclear\nshow 1\nprint 2\nexit\n");
    assert!(output.contains("Clear tape!"));
    assert!(output.contains("#1 element:   0"));
    // Cursor still on cell 1 after the clear
    assert!(output.contains("  0 [  0] "));
    assert_eq!(tape.cursor(), 1);
}

#[test]
fn test_tape_persists_between_lines() {
    let mut tape = Tape::new(8);
    let (_, program_output) = session(&mut tape, "+++\n+++\n.\nexit\n");
    assert_eq!(program_output, vec![6]);
}

#[test]
fn test_evaluator_error_ends_the_session() {
    let mut tape = Tape::new(8);
    let mut console = ScriptedConsole::new(&[]);
    let mut output = Vec::new();
    let result = Repl::new(&mut tape, &mut console, Trace::new(false))
        .run("]\nexit\n".as_bytes(), &mut output);
    assert!(matches!(result, Err(RuntimeError::UnmatchedCloseBracket)));
}
