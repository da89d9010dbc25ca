//! Fault classification and the diagnostic reporter.
//!
//! Every unrecoverable condition the interpreter can hit is described by a
//! [`Fault`]: one variant per error class, carrying exactly the context its
//! diagnostic line needs. Faults propagate as the error side of [`Fatal`]
//! results up to the single top-level handler in `main`, which prints the
//! diagnostic and ends the process.

#![allow(dead_code)]

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::EnumIter;
use thiserror::Error;

use crate::instruction::Line;

/// The process exit status for every fault class. Fault classes are told
/// apart by their stderr line, never by the status.
pub const EXIT_FAILURE: i32 = 1;

/// The closed set of fault classes, numbered after the original Monty
/// reporting protocol. Raw codes outside 1..=11 fail conversion and carry
/// no diagnostic; the interpreter still tears down and exits on them.
#[derive(
    IntoPrimitive, TryFromPrimitive, PartialEq, Eq, Debug, Clone, Copy, EnumIter,
)]
#[repr(u8)]
pub enum ErrorCode {
    Usage = 1,
    FileOpen = 2,
    UnknownInstruction = 3,
    AllocationFailure = 4,
    BadPushArgument = 5,
    EmptyStackPint = 6,
    EmptyStackPop = 7,
    InsufficientDepth = 8,
    DivisionByZero = 9,
    CharOutOfRange = 10,
    EmptyStackPchar = 11,
}

/// A classified fault plus the context its diagnostic needs.
///
/// The message templates are load-bearing: conformance tooling compares
/// stderr byte for byte, so they must not be reworded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("USAGE: monty file")]
    Usage,
    #[error("Error: Can't open file {path}")]
    FileOpen { path: String },
    #[error("L{line}: unknown instruction {mnemonic}")]
    UnknownInstruction { line: Line, mnemonic: String },
    #[error("Error: malloc failed")]
    AllocationFailure,
    #[error("L{line}: usage: push integer")]
    BadPushArgument { line: Line },
    #[error("L{line}: can't pint, stack empty")]
    EmptyStackPint { line: Line },
    #[error("L{line}: can't pop an empty stack")]
    EmptyStackPop { line: Line },
    #[error("L{line}: can't {mnemonic}, stack too short")]
    InsufficientDepth { line: Line, mnemonic: String },
    #[error("L{line}: division by zero")]
    DivisionByZero { line: Line },
    #[error("L{line}: can't pchar, value out of range")]
    CharOutOfRange { line: Line },
    #[error("L{line}: can't pchar, stack empty")]
    EmptyStackPchar { line: Line },
}

impl Fault {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Usage => ErrorCode::Usage,
            Self::FileOpen { .. } => ErrorCode::FileOpen,
            Self::UnknownInstruction { .. } => ErrorCode::UnknownInstruction,
            Self::AllocationFailure => ErrorCode::AllocationFailure,
            Self::BadPushArgument { .. } => ErrorCode::BadPushArgument,
            Self::EmptyStackPint { .. } => ErrorCode::EmptyStackPint,
            Self::EmptyStackPop { .. } => ErrorCode::EmptyStackPop,
            Self::InsufficientDepth { .. } => ErrorCode::InsufficientDepth,
            Self::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            Self::CharOutOfRange { .. } => ErrorCode::CharOutOfRange,
            Self::EmptyStackPchar { .. } => ErrorCode::EmptyStackPchar,
        }
    }
}

/// Result alias for every operation that can only fail fatally.
pub type Fatal<T = ()> = Result<T, Fault>;

/// The single reporting site: writes the diagnostic line, if there is one,
/// to stderr and yields the uniform failure status.
///
/// `None` is the unclassified case: a fault outside [`ErrorCode`] prints
/// nothing but terminates exactly like any other. Do not add a message for
/// it.
pub fn report(diagnostic: Option<&Fault>) -> i32 {
    if let Some(fault) = diagnostic {
        eprintln!("{fault}");
    }
    EXIT_FAILURE
}
