//! Compiled program handle.

use super::Error;
use crate::String;
use crate::compiler;
use crate::vm::{ByteSink, ByteSource, Program, Tape, VM};

/// A program compiled from source, ready to run any number of times.
///
/// # Example
///
/// ```
/// use octet_core::api::CompiledProgram;
///
/// let program = CompiledProgram::compile("+++.").unwrap();
/// let mut written = Vec::new();
/// program.run(&mut || 0u8, &mut |b: u8| written.push(b));
/// assert_eq!(written, vec![3]);
/// ```
#[derive(Debug, Clone)]
pub struct CompiledProgram {
    source: String,
    program: Program,
}

impl CompiledProgram {
    /// Compile `source`, converting failures to the public [`Error`].
    pub fn compile(source: &str) -> Result<Self, Error> {
        let program =
            compiler::compile(source).map_err(|err| Error::from_compile_error(source, err))?;
        Ok(Self {
            source: String::from(source),
            program,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Run on a fresh tape until the program ends.
    pub fn run<I, O>(&self, input: &mut I, output: &mut O)
    where
        I: ByteSource + ?Sized,
        O: ByteSink + ?Sized,
    {
        crate::vm::run(&self.program, input, output);
    }

    /// Run starting from `tape` and return the final tape.
    pub fn run_with_tape<I, O>(&self, tape: Tape, input: &mut I, output: &mut O) -> Tape
    where
        I: ByteSource + ?Sized,
        O: ByteSink + ?Sized,
    {
        let mut vm = VM::with_tape(&self.program, tape);
        vm.run(input, output);
        vm.into_tape()
    }
}
