use core::ops::Deref;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::{Vec, format, vm::Instruction};

/// A compiled, jump-resolved instruction sequence.
///
/// Programs are immutable once built by the compiler and can be executed any
/// number of times, including from several threads at once, since every run
/// keeps its own state.
///
/// Deserialization goes through [`TryFrom<Vec<Instruction>>`], so a decoded
/// program satisfies the same loop pairing as a compiled one.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Instruction>", into = "Vec<Instruction>")]
pub struct Program {
    instructions: Vec<Instruction>,
}

/// An instruction sequence whose jumps do not form well-nested loop pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidProgram {
    /// Index of the first instruction that breaks the pairing.
    pub index: usize,
}

impl core::fmt::Display for InvalidProgram {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "instruction {} breaks loop pairing", self.index)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidProgram {}

impl TryFrom<Vec<Instruction>> for Program {
    type Error = InvalidProgram;

    /// Accept `instructions` only if every `JumpIfZero` and `Jump` pair
    /// targets exactly what the compiler would have produced.
    fn try_from(instructions: Vec<Instruction>) -> Result<Self, Self::Error> {
        let mut pending = Vec::new();
        for (index, instr) in instructions.iter().enumerate() {
            match *instr {
                Instruction::JumpIfZero(_) => pending.push(index),
                Instruction::Jump(target) => {
                    let Some(loop_start) = pending.pop() else {
                        return Err(InvalidProgram { index });
                    };
                    if target != loop_start {
                        return Err(InvalidProgram { index });
                    }
                    if instructions[loop_start] != Instruction::JumpIfZero(index + 1) {
                        return Err(InvalidProgram { index: loop_start });
                    }
                }
                _ => {}
            }
        }
        match pending.first() {
            Some(&index) => Err(InvalidProgram { index }),
            None => Ok(Self { instructions }),
        }
    }
}

impl From<Program> for Vec<Instruction> {
    fn from(program: Program) -> Self {
        program.instructions
    }
}

impl Program {
    /// Wrap an already resolved instruction sequence.
    ///
    /// Only the compiler produces well-formed jump pairs; this is crate-private
    /// so a `Program` always satisfies the bracket invariants.
    pub(crate) fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of `JumpIfZero`/`Jump` pairs.
    pub fn loop_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|instr| matches!(instr, Instruction::Jump(_)))
            .count()
    }
}

impl Deref for Program {
    type Target = [Instruction];

    fn deref(&self) -> &Self::Target {
        &self.instructions
    }
}

/// Renders the canonical source: one command character per instruction.
impl core::fmt::Display for Program {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;

        for instr in &self.instructions {
            f.write_char(instr.command())?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Program {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Program {{")?;
        writeln!(f, "  length: {}", self.instructions.len())?;

        // First pass: collect all jump targets to determine which addresses need labels
        let jump_targets: HashSet<usize> = self
            .instructions
            .iter()
            .filter_map(Instruction::jump_target)
            .filter(|&target| target < self.instructions.len())
            .collect();

        // Assign label numbers to targets (sorted for deterministic output)
        let mut sorted_targets: Vec<_> = jump_targets.into_iter().collect();
        sorted_targets.sort();
        let label_map: HashMap<usize, usize> = sorted_targets
            .into_iter()
            .enumerate()
            .map(|(i, addr)| (addr, i))
            .collect();

        // Second pass: print instructions with labels
        writeln!(f, "  instructions:")?;
        for (addr, instr) in self.instructions.iter().enumerate() {
            let label_prefix = match label_map.get(&addr) {
                Some(label_num) => format!("L{}:", label_num),
                None => crate::String::new(),
            };

            match instr.jump_target() {
                Some(target) => {
                    // A target equal to the length falls off the end and has no label.
                    let target_label = label_map
                        .get(&target)
                        .map(|l| format!("L{}", l))
                        .unwrap_or_else(|| format!("@{}", target));
                    writeln!(
                        f,
                        "    {:4} {:>4}  {:?} (to {})",
                        addr, label_prefix, instr, target_label
                    )?;
                }
                None => writeln!(f, "    {:4} {:>4}  {:?}", addr, label_prefix, instr)?,
            }
        }

        write!(f, "}}")
    }
}
