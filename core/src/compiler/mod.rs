//! Bytecode compiler for octet programs.
//!
//! This module turns raw source text into a [`Program`](crate::vm::Program):
//! a flat instruction sequence whose jumps are already resolved.
//!
//! ## Design
//!
//! - Single left-to-right scan; characters other than the eight commands are
//!   commentary and produce nothing
//! - Loop starts are emitted as placeholders and pushed on a pending stack
//! - Each `]` pops its `[`, emits the backward jump and patches the forward one
//! - A non-empty pending stack after the scan is an unmatched `[`

mod bytecode;
mod error;

#[cfg(test)]
mod tests;

pub use bytecode::{BytecodeCompiler, compile};
pub use error::{CompileError, CompileErrorKind};
