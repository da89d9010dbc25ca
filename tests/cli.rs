//! Process-level conformance checks: byte-exact stderr, silent stdout,
//! and the uniform failure status, as observed by the host OS.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn monty(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_monty"))
        .args(args)
        .output()
        .expect("failed to spawn monty")
}

/// Writes `source` to a temporary bytecode file and runs it.
fn run_program(source: &str) -> Output {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes()).expect("failed to write program");
    let path = file.path().to_string_lossy().into_owned();
    monty(&[&path])
}

fn assert_fault(output: &Output, stderr: &str) {
    assert_eq!(String::from_utf8_lossy(&output.stderr), stderr);
    assert!(output.stdout.is_empty(), "fault paths must not touch stdout");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn no_file_argument_is_a_usage_fault() {
    assert_fault(&monty(&[]), "USAGE: monty file\n");
}

#[test]
fn more_than_one_file_is_a_usage_fault() {
    assert_fault(&monty(&["a.m", "b.m"]), "USAGE: monty file\n");
}

#[test]
fn unopenable_file_names_the_path_verbatim() {
    assert_fault(
        &monty(&["missing.m"]),
        "Error: Can't open file missing.m\n",
    );
}

#[test]
fn unknown_instruction_reports_line_and_mnemonic() {
    assert_fault(
        &run_program("push 1\npush 2\npshh 3\n"),
        "L3: unknown instruction pshh\n",
    );
}

#[test]
fn bad_push_argument_reports_its_line() {
    assert_fault(
        &run_program("push 1\nnop\nnop\nnop\npush five\n"),
        "L5: usage: push integer\n",
    );
}

#[test]
fn short_stack_arithmetic_names_the_mnemonic() {
    let source = "push 1\nnop\nnop\nnop\nnop\nnop\nadd\n";
    assert_fault(&run_program(source), "L7: can't add, stack too short\n");
}

#[test]
fn division_by_zero_reports_its_line() {
    let source = "push 4\npush 0\nnop\nnop\nnop\nnop\nnop\nnop\nnop\ndiv\n";
    assert_fault(&run_program(source), "L10: division by zero\n");
}

#[test]
fn empty_stack_faults_report_their_opcode() {
    assert_fault(&run_program("pint\n"), "L1: can't pint, stack empty\n");
    assert_fault(&run_program("pop\n"), "L1: can't pop an empty stack\n");
    assert_fault(&run_program("pchar\n"), "L1: can't pchar, stack empty\n");
}

#[test]
fn pchar_out_of_range_reports_its_line() {
    assert_fault(
        &run_program("push 300\npchar\n"),
        "L2: can't pchar, value out of range\n",
    );
}

#[test]
fn every_fault_class_exits_with_the_same_status() {
    let outputs = [
        monty(&[]),
        monty(&["missing.m"]),
        run_program("pshh\n"),
        run_program("push x\n"),
        run_program("pint\n"),
        run_program("pop\n"),
        run_program("swap\n"),
        run_program("push 1\npush 0\ndiv\n"),
        run_program("push 200\npchar\n"),
        run_program("pchar\n"),
    ];
    for output in &outputs {
        assert_eq!(output.status.code(), Some(1));
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn successful_programs_exit_zero_and_stay_off_stderr() {
    let output = run_program("push 1\npush 2\nadd\npall\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn an_empty_program_is_a_successful_program() {
    let output = run_program("# only a comment\n\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn pstr_runs_end_to_end() {
    let output = run_program("push 114\npush 116\npush 115\npstr\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "str\n");
}
