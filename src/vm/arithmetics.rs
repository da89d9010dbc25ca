//! Binary arithmetic over the top two nodes.

use super::Vm;
use crate::fault::{Fatal, Fault};
use crate::instruction::{Line, OpCode};

impl<W> Vm<W> {
    /// Pops the top two nodes and leaves `second op top` on top. Wrapping
    /// i32 arithmetic, matching the C `int` behavior of the reference
    /// interpreter.
    pub(super) fn binary_op(&mut self, line: Line, opcode: OpCode) -> Fatal {
        let (Some(top), Some(second)) = (self.take_top(), self.take_top()) else {
            return Err(Fault::InsufficientDepth {
                line,
                mnemonic: opcode.mnemonic().to_string(),
            });
        };
        if top == 0 && matches!(opcode, OpCode::Div | OpCode::Mod) {
            return Err(Fault::DivisionByZero { line });
        }
        let result = match opcode {
            OpCode::Add => second.wrapping_add(top),
            OpCode::Sub => second.wrapping_sub(top),
            OpCode::Mul => second.wrapping_mul(top),
            OpCode::Div => second.wrapping_div(top),
            OpCode::Mod => second.wrapping_rem(top),
            _ => unreachable!("binary_op only dispatches arithmetic opcodes"),
        };
        self.restore_top(result);
        Ok(())
    }
}
