mod code;
mod instruction_set;
pub mod io;
mod runtime;
mod tape;

pub use code::{InvalidProgram, Program};
pub use instruction_set::Instruction;
pub use io::{ByteSink, ByteSource};
pub use runtime::{VM, run};
pub use tape::{CELL_MODULUS, Tape};
