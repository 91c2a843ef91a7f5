//! Bytecode compiler implementation.

use crate::{
    Vec,
    compiler::CompileError,
    syntax::Span,
    vm::{Instruction, Program},
};

/// Compile source text into a jump-resolved [`Program`].
///
/// Convenience wrapper around [`BytecodeCompiler`].
pub fn compile(source: &str) -> Result<Program, CompileError> {
    BytecodeCompiler::compile(source)
}

/// Single-pass compiler from source characters to VM instructions.
///
/// Loop starts are emitted as placeholders and patched once their closing
/// bracket is found, so every bracket pair costs O(1) and the source is never
/// re-scanned.
#[derive(Debug, Default)]
pub struct BytecodeCompiler {
    /// Bytecode instructions
    instructions: Vec<Instruction>,

    /// Pending loop starts: instruction index of the placeholder and the
    /// span of its `[`, innermost last.
    pending_loops: Vec<(usize, Span)>,
}

impl BytecodeCompiler {
    /// Create a new bytecode compiler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience method to compile a whole source text in one call.
    pub fn compile(source: &str) -> Result<Program, CompileError> {
        let mut compiler = Self::new();
        compiler.feed(source, 0)?;
        compiler.finalize()
    }

    /// Compile another chunk of source.
    ///
    /// `offset` is the byte position of `chunk` in the complete source and is
    /// only used for error spans. Loops may span several chunks.
    pub fn feed(&mut self, chunk: &str, offset: usize) -> Result<(), CompileError> {
        for (index, ch) in chunk.char_indices() {
            match ch {
                '[' => {
                    let placeholder = self.jump_placeholder();
                    self.pending_loops
                        .push((placeholder, Span::of_char(offset + index, ch)));
                }
                ']' => {
                    let Some((loop_start, _)) = self.pending_loops.pop() else {
                        return Err(CompileError::unmatched_close(Span::of_char(
                            offset + index,
                            ch,
                        )));
                    };
                    // Jump back onto the loop start so the condition is re-tested.
                    self.emit(Instruction::Jump(loop_start));
                    let loop_exit = self.instructions.len();
                    self.patch_jump(loop_start, loop_exit);
                }
                _ => {
                    if let Some(instruction) = Instruction::from_command(ch) {
                        self.emit(instruction);
                    }
                }
            }
        }
        Ok(())
    }

    /// Finalize compilation and return the program.
    ///
    /// Fails if any loop is still open.
    pub fn finalize(mut self) -> Result<Program, CompileError> {
        if let Some((_, innermost)) = self.pending_loops.pop() {
            let unclosed = self.pending_loops.into_iter().map(|(_, span)| span).collect();
            return Err(CompileError::unmatched_open(innermost, unclosed));
        }

        let program = Program::from_instructions(self.instructions);
        tracing::debug!(
            instructions = program.len(),
            loops = program.loop_count(),
            "compiled program"
        );
        Ok(program)
    }

    // === Instruction Emission ===

    /// Emit an instruction.
    fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Emit a loop start whose target is not known yet.
    ///
    /// Returns the index of the placeholder; the target is patched later
    /// with `patch_jump`.
    fn jump_placeholder(&mut self) -> usize {
        let placeholder_index = self.instructions.len();
        self.emit(Instruction::JumpIfZero(placeholder_index));
        placeholder_index
    }

    /// Point the placeholder at `target`.
    fn patch_jump(&mut self, placeholder_index: usize, target: usize) {
        debug_assert!(
            matches!(
                self.instructions[placeholder_index],
                Instruction::JumpIfZero(_)
            ),
            "patching a non-placeholder instruction at {}",
            placeholder_index
        );
        self.instructions[placeholder_index] = Instruction::JumpIfZero(target);
    }
}
