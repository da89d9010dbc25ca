//! The Monty instruction set and the parsed form of a single source line.

use std::fmt::{self, Display};

use shrinkwraprs::Shrinkwrap;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// 1-based line number in the bytecode file, carried through to diagnostics.
#[derive(Shrinkwrap, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line(pub usize);

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of opcodes a Monty bytecode file may contain. Mnemonics map to
/// variants by their lowercase name.
#[derive(EnumString, AsRefStr, IntoStaticStr, EnumIter, PartialEq, Eq, Debug, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum OpCode {
    Push,
    Pall,
    Pint,
    Pop,
    Swap,
    Add,
    Nop,
    Sub,
    Div,
    Mul,
    Mod,
    Pchar,
    Pstr,
    Rotl,
    Rotr,
    Stack,
    Queue,
}

impl OpCode {
    /// The mnemonic as it appears in source, used verbatim in diagnostics.
    pub fn mnemonic(self) -> &'static str {
        self.into()
    }
}

/// One executable line of a Monty program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: OpCode,
    pub line: Line,
    /// Only `push` carries an argument.
    pub argument: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn mnemonics_round_trip_through_lowercase_names() {
        for opcode in OpCode::iter() {
            assert_eq!(OpCode::from_str(opcode.as_ref()), Ok(opcode));
        }
        assert_eq!(OpCode::from_str("push"), Ok(OpCode::Push));
        assert_eq!(OpCode::from_str("mod"), Ok(OpCode::Mod));
        assert!(OpCode::from_str("pshh").is_err());
        assert!(OpCode::from_str("PUSH").is_err());
    }

    #[test]
    fn lines_display_bare_numbers() {
        assert_eq!(Line(42).to_string(), "42");
    }
}
