//! Tokenizes Monty source one line at a time.
//!
//! Parsing is driven by the run loop rather than done up front so that
//! diagnostics come out in execution order: a runtime fault on line 2 is
//! reported before a syntax error on line 5 is ever looked at.

use std::str::FromStr;

use crate::fault::{Fatal, Fault};
use crate::instruction::{Instruction, Line, OpCode};

/// Parses one source line into an instruction.
///
/// Returns `Ok(None)` for blank lines and comments (first token starting
/// with `#`). Tokens after the ones an opcode consumes are ignored.
pub fn parse_line(line: Line, text: &str) -> Fatal<Option<Instruction>> {
    let mut tokens = text.split_whitespace();
    let Some(mnemonic) = tokens.next() else {
        return Ok(None);
    };
    if mnemonic.starts_with('#') {
        return Ok(None);
    }

    let opcode = OpCode::from_str(mnemonic).map_err(|_| Fault::UnknownInstruction {
        line,
        mnemonic: mnemonic.to_string(),
    })?;

    let argument = match opcode {
        OpCode::Push => Some(parse_push_argument(line, tokens.next())?),
        _ => None,
    };

    Ok(Some(Instruction {
        opcode,
        line,
        argument,
    }))
}

/// `push` takes exactly one decimal integer, optionally signed. Anything
/// else, including a missing argument or an overflowing value, is fatal.
fn parse_push_argument(line: Line, token: Option<&str>) -> Fatal<i32> {
    let fault = || Fault::BadPushArgument { line };
    let token = token.ok_or_else(fault)?;
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fault());
    }
    token.parse().map_err(|_| fault())
}
