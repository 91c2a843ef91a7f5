//! Public API for the octet interpreter.
//!
//! This module provides the stable public API for compiling and running
//! programs. Compilation errors are reported as [`Diagnostic`]s carrying
//! source spans, ready to be rendered for users.
//!
//! # Example
//!
//! ```
//! use octet_core::api::CompiledProgram;
//!
//! let program = CompiledProgram::compile(",+.").unwrap();
//! let mut written = Vec::new();
//! program.run(&mut || b'a', &mut |b: u8| written.push(b));
//! assert_eq!(written, b"b");
//! ```

pub mod error;
pub mod program;

pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use program::CompiledProgram;
