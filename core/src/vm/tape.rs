//! Sparse, unbounded memory tape.

use hashbrown::HashMap;

use crate::Vec;

/// Modulus applied to cell arithmetic.
///
/// Cells cycle through `0..=254`: incrementing 254 yields 0 and decrementing
/// 0 yields 254. This is not the usual 256-value byte cycle and programs that
/// rely on wraparound observe the difference.
pub const CELL_MODULUS: u16 = 255;

/// Memory addressed by any signed integer.
///
/// Only cells holding a non-zero value are stored; every other address reads
/// as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    cells: HashMap<i64, u8>,
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: i64) -> u8 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    pub fn set(&mut self, address: i64, value: u8) {
        if value == 0 {
            self.cells.remove(&address);
        } else {
            self.cells.insert(address, value);
        }
    }

    pub fn increment(&mut self, address: i64) {
        let value = (self.get(address) as u16 + 1) % CELL_MODULUS;
        self.set(address, value as u8);
    }

    pub fn decrement(&mut self, address: i64) {
        let value = (self.get(address) as u16 + CELL_MODULUS - 1) % CELL_MODULUS;
        self.set(address, value as u8);
    }

    /// Number of cells currently holding a non-zero value.
    pub fn populated(&self) -> usize {
        self.cells.len()
    }

    /// Non-zero cells as `(address, value)`, ordered by address.
    pub fn cells(&self) -> impl Iterator<Item = (i64, u8)> {
        let mut cells: Vec<(i64, u8)> = self.cells.iter().map(|(&a, &v)| (a, v)).collect();
        cells.sort_unstable_by_key(|&(address, _)| address);
        cells.into_iter()
    }
}

impl FromIterator<(i64, u8)> for Tape {
    fn from_iter<I: IntoIterator<Item = (i64, u8)>>(iter: I) -> Self {
        let mut tape = Tape::new();
        for (address, value) in iter {
            tape.set(address, value);
        }
        tape
    }
}
