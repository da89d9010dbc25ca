//! Entry point: argument handling and the top-level fault handler.
//!
//! Faults propagate as [`fault::Fatal`] results out of every interpreter
//! layer and land here; `run` is the only place a diagnostic is printed
//! and the only place the exit status is decided. All interpreter state
//! lives inside `execute`, so node storage is released before the process
//! ends on every path, fatal or normal.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::fault::{Fatal, Fault};
use crate::vm::Vm;

mod fault;
mod instruction;
mod parser;
mod vm;

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Monty bytecode file to run. Exactly one is expected.
    file: Vec<PathBuf>,
}

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    match execute() {
        Ok(()) => 0,
        Err(fault) => fault::report(Some(&fault)),
    }
}

fn execute() -> Fatal {
    let args = Args::parse();
    let [file] = args.file.as_slice() else {
        return Err(Fault::Usage);
    };
    interpret(file)
}

fn interpret(file: &Path) -> Fatal {
    // Bytecode files are plain text; bytes outside UTF-8 are tolerated the
    // way the reference interpreter tolerates them, by reading lossily.
    let bytes = fs::read(file).map_err(|_| Fault::FileOpen {
        path: file.display().to_string(),
    })?;
    let source = String::from_utf8_lossy(&bytes);

    let mut vm = Vm::new();
    let result = vm.run(&source);
    vm.release_all_nodes();
    result
}
