use super::instruction_set::Instruction;

use crate::vm::{ByteSink, ByteSource, Program, Tape};

/// Run `program` to completion on a fresh tape.
///
/// Returns once the program counter moves past the last instruction. A
/// program that loops forever never returns.
pub fn run<I, O>(program: &Program, input: &mut I, output: &mut O)
where
    I: ByteSource + ?Sized,
    O: ByteSink + ?Sized,
{
    VM::new(program).run(input, output);
}

/// Execution state for a single run of a [`Program`].
///
/// The program is borrowed immutably, so any number of VMs can execute the
/// same program concurrently.
#[derive(Debug, Clone)]
pub struct VM<'p> {
    program: &'p Program,
    pc: usize,
    pointer: i64,
    tape: Tape,
    steps: u64,
}

impl<'p> VM<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_tape(program, Tape::new())
    }

    /// Start a run on a pre-populated tape.
    pub fn with_tape(program: &'p Program, tape: Tape) -> Self {
        VM {
            program,
            pc: 0,
            pointer: 0,
            tape,
            steps: 0,
        }
    }

    pub fn program_counter(&self) -> usize {
        self.pc
    }

    pub fn tape_pointer(&self) -> i64 {
        self.pointer
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    pub fn into_tape(self) -> Tape {
        self.tape
    }

    /// Execute a single instruction.
    ///
    /// Returns `true` if the program had already finished, in which case
    /// nothing is executed.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> bool
    where
        I: ByteSource + ?Sized,
        O: ByteSink + ?Sized,
    {
        let Some(&instruction) = self.program.get(self.pc) else {
            return true;
        };
        tracing::trace!(pc = self.pc, pointer = self.pointer, ?instruction, "step");
        self.steps += 1;

        use Instruction::*;
        match instruction {
            MoveRight => {
                self.pointer += 1;
            }
            MoveLeft => {
                self.pointer -= 1;
            }
            Increment => {
                self.tape.increment(self.pointer);
            }
            Decrement => {
                self.tape.decrement(self.pointer);
            }
            Output => {
                output.write_byte(self.tape.get(self.pointer));
            }
            Input => {
                let byte = input.read_byte();
                self.tape.set(self.pointer, byte);
            }
            JumpIfZero(target) => {
                if self.tape.get(self.pointer) == 0 {
                    self.pc = target;
                    return false;
                }
            }
            Jump(target) => {
                self.pc = target;
                return false;
            }
        }

        self.pc += 1;
        false
    }

    /// Run until the program counter reaches the end of the program.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O)
    where
        I: ByteSource + ?Sized,
        O: ByteSink + ?Sized,
    {
        tracing::debug!(
            instructions = self.program.len(),
            pc = self.pc,
            "run started"
        );
        while !self.step(input, output) {}
        tracing::debug!(
            steps = self.steps,
            pointer = self.pointer,
            populated = self.tape.populated(),
            "run finished"
        );
    }
}
