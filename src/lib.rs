//! Octet - An interpreter for the eight-command tape language
//!
//! # Overview
//!
//! Programs are written with eight single-character commands operating on a
//! tape of byte cells:
//!
//! | Command | Effect                                           |
//! |---------|--------------------------------------------------|
//! | `>` `<` | move the tape pointer right / left               |
//! | `+` `-` | increment / decrement the current cell (mod 255) |
//! | `.` `,` | write / read the current cell                    |
//! | `[` `]` | loop while the current cell is non-zero          |
//!
//! Every other character is commentary.
//!
//! # Quick Start
//!
//! ```
//! use octet::CompiledProgram;
//!
//! let program = CompiledProgram::compile("++++++++[>++++++++<-]>+.").unwrap();
//!
//! let mut output = Vec::new();
//! program.run(&mut || 0u8, &mut |b: u8| output.push(b));
//! assert_eq!(output, b"A");
//! ```
//!
//! Compilation errors carry source spans and can be rendered with
//! [`render_error`]:
//!
//! ```no_run
//! use octet::{CompiledProgram, render_error};
//!
//! if let Err(e) = CompiledProgram::compile("+[->+<") {
//!     render_error(&e);
//! }
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from octet_core
pub use octet_core::api::{CompiledProgram, Diagnostic, Error, RelatedInfo, Severity};

// Re-export the engine building blocks
pub use octet_core::compiler::{CompileError, CompileErrorKind, compile};
pub use octet_core::syntax::Span;
pub use octet_core::vm::{
    self, ByteSink, ByteSource, CELL_MODULUS, Instruction, InvalidProgram, Program, Tape, VM, run,
};
pub use octet_core::vm::io::{ReadSource, WriteSink};
