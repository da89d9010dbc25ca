use std::collections::VecDeque;

use super::{Mode, Vm};
use crate::fault::{Fatal, Fault};
use crate::instruction::{Line, OpCode};

impl<W> Vm<W> {
    /// Inserts a value according to the current mode: on top in stack
    /// mode, at the bottom in queue mode.
    pub(super) fn insert(&mut self, value: i32) -> Fatal {
        self.nodes
            .try_reserve(1)
            .map_err(|_| Fault::AllocationFailure)?;
        match self.mode {
            Mode::Stack => self.nodes.push_front(value),
            Mode::Queue => self.nodes.push_back(value),
        }
        Ok(())
    }

    /// The top value, without removing it.
    pub(super) fn top(&self) -> Option<i32> {
        self.nodes.front().copied()
    }

    pub(super) fn take_top(&mut self) -> Option<i32> {
        self.nodes.pop_front()
    }

    /// Puts a value back on top, bypassing the push mode. Arithmetic
    /// results land on top even in queue mode.
    pub(super) fn restore_top(&mut self, value: i32) {
        self.nodes.push_front(value);
    }

    pub(super) fn swap(&mut self, line: Line) -> Fatal {
        if self.node_count() < 2 {
            return Err(Fault::InsufficientDepth {
                line,
                mnemonic: OpCode::Swap.mnemonic().to_string(),
            });
        }
        self.nodes.swap(0, 1);
        Ok(())
    }

    /// Rotates the top node to the bottom. A no-op on short piles.
    pub(super) fn rotate_left(&mut self) {
        if let Some(top) = self.nodes.pop_front() {
            self.nodes.push_back(top);
        }
    }

    /// Rotates the bottom node to the top. A no-op on short piles.
    pub(super) fn rotate_right(&mut self) {
        if let Some(bottom) = self.nodes.pop_back() {
            self.nodes.push_front(bottom);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Releases every node owned by the interpreter, allocation included.
    /// The run wrapper calls this once, on fatal and normal paths alike.
    pub fn release_all_nodes(&mut self) {
        self.nodes = VecDeque::new();
    }
}
