//! The virtual machine: node storage plus the line-by-line run loop.
//!
//! The VM drives the parser one line at a time and executes each
//! instruction immediately, so faults surface in program order. Output goes
//! to an injectable sink; the binary wires up stdout, tests a buffer.

mod arithmetics;
mod stack;

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::fault::{Fatal, Fault};
use crate::instruction::{Instruction, Line, OpCode};
use crate::parser;

/// Where `push` inserts: the top of the pile or the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stack,
    Queue,
}

pub struct Vm<W = io::Stdout> {
    nodes: VecDeque<i32>,
    mode: Mode,
    out: W,
}

impl Vm {
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Vm<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            nodes: VecDeque::new(),
            mode: Mode::Stack,
            out,
        }
    }

    /// Runs a whole Monty program. Stops at the first fault; the caller
    /// owns teardown and termination.
    pub fn run(&mut self, source: &str) -> Fatal {
        for (index, text) in source.lines().enumerate() {
            let line = Line(index + 1);
            let Some(instruction) = parser::parse_line(line, text)? else {
                continue;
            };
            self.execute(&instruction)?;
        }
        Ok(())
    }

    fn execute(&mut self, instruction: &Instruction) -> Fatal {
        #[cfg(feature = "trace_execution")]
        eprintln!("L{}: {}", instruction.line, instruction.opcode.mnemonic());

        let line = instruction.line;
        match instruction.opcode {
            OpCode::Push => {
                // The parser always attaches an argument to push.
                let value = instruction
                    .argument
                    .ok_or(Fault::BadPushArgument { line })?;
                self.insert(value)
            }
            OpCode::Pall => {
                self.pall();
                Ok(())
            }
            OpCode::Pint => self.pint(line),
            OpCode::Pop => self
                .take_top()
                .map(|_| ())
                .ok_or(Fault::EmptyStackPop { line }),
            OpCode::Swap => self.swap(line),
            OpCode::Add | OpCode::Sub | OpCode::Div | OpCode::Mul | OpCode::Mod => {
                self.binary_op(line, instruction.opcode)
            }
            OpCode::Nop => Ok(()),
            OpCode::Pchar => self.pchar(line),
            OpCode::Pstr => {
                self.pstr();
                Ok(())
            }
            OpCode::Rotl => {
                self.rotate_left();
                Ok(())
            }
            OpCode::Rotr => {
                self.rotate_right();
                Ok(())
            }
            OpCode::Stack => {
                self.mode = Mode::Stack;
                Ok(())
            }
            OpCode::Queue => {
                self.mode = Mode::Queue;
                Ok(())
            }
        }
    }

    /// Prints every node, top to bottom. An empty pile prints nothing.
    fn pall(&mut self) {
        for value in &self.nodes {
            let _ = writeln!(self.out, "{value}");
        }
    }

    fn pint(&mut self, line: Line) -> Fatal {
        let top = self.top().ok_or(Fault::EmptyStackPint { line })?;
        let _ = writeln!(self.out, "{top}");
        Ok(())
    }

    /// Prints the top value as an ASCII character.
    fn pchar(&mut self, line: Line) -> Fatal {
        let top = self.top().ok_or(Fault::EmptyStackPchar { line })?;
        if !(0..=127).contains(&top) {
            return Err(Fault::CharOutOfRange { line });
        }
        let _ = writeln!(self.out, "{}", top as u8 as char);
        Ok(())
    }

    /// Prints nodes as characters from the top, stopping at the first 0 or
    /// the first value outside ASCII. Always ends the line.
    fn pstr(&mut self) {
        for &value in &self.nodes {
            if !(1..=127).contains(&value) {
                break;
            }
            let _ = write!(self.out, "{}", value as u8 as char);
        }
        let _ = writeln!(self.out);
    }
}
