//! Octet VM Instructions
//!
//! This module defines the closed instruction set executed by the tape VM.
//! Every source command maps to exactly one instruction; loop brackets become
//! a pair of jumps whose targets are resolved at compile time.
//!
//! # Jump Targets
//!
//! Targets are absolute indices into the program:
//!
//! ```text
//!   0  JumpIfZero(3)   ─┐  cell == 0: continue after the loop
//!   1  Decrement        │
//!   2  Jump(0)        ◄─┘  always: re-test the loop condition at 0
//!   3  ...
//! ```
//!
//! `JumpIfZero` targets the instruction right after its matching `Jump`, and
//! `Jump` targets its matching `JumpIfZero` (not the one after it), so the
//! condition is re-tested in place on every iteration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A single VM instruction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    // ========================================================================
    // Tape pointer
    // ========================================================================
    /// Move the tape pointer one cell to the right (`>`).
    MoveRight,

    /// Move the tape pointer one cell to the left (`<`).
    MoveLeft,

    // ========================================================================
    // Cell arithmetic (modulo 255)
    // ========================================================================
    /// Increment the current cell (`+`).
    Increment,

    /// Decrement the current cell (`-`).
    Decrement,

    // ========================================================================
    // I/O
    // ========================================================================
    /// Emit the current cell through the output sink (`.`).
    Output,

    /// Replace the current cell with the next byte from the input source (`,`).
    Input,

    // ========================================================================
    // Control flow
    // ========================================================================
    /// Loop start (`[`): if the current cell is zero, continue at the target.
    /// Operand: index of the instruction after the matching `Jump`.
    JumpIfZero(usize),

    /// Loop end (`]`): unconditionally continue at the target.
    /// Operand: index of the matching `JumpIfZero`.
    Jump(usize),
}

impl Instruction {
    /// Decode a single source character, if it is a non-bracket command.
    ///
    /// Brackets are not decoded here since they need jump resolution.
    pub fn from_command(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            _ => None,
        }
    }

    /// The source character this instruction was compiled from.
    pub fn command(&self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::JumpIfZero(_) => '[',
            Instruction::Jump(_) => ']',
        }
    }

    /// Extract the jump target, if this is a jump instruction.
    pub fn jump_target(&self) -> Option<usize> {
        match self {
            Instruction::JumpIfZero(target) | Instruction::Jump(target) => Some(*target),
            _ => None,
        }
    }

    pub fn is_jump(&self) -> bool {
        self.jump_target().is_some()
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::MoveRight => write!(f, "MoveRight"),
            Instruction::MoveLeft => write!(f, "MoveLeft"),
            Instruction::Increment => write!(f, "Increment"),
            Instruction::Decrement => write!(f, "Decrement"),
            Instruction::Output => write!(f, "Output"),
            Instruction::Input => write!(f, "Input"),
            Instruction::JumpIfZero(target) => write!(f, "JumpIfZero({})", target),
            Instruction::Jump(target) => write!(f, "Jump({})", target),
        }
    }
}
