//! Branch History Registers.
//!
//! Shift registers of recent branch outcomes. The global history register
//! records every resolved branch; the local history table keeps one register
//! per branch site, indexed the same way as the BTB.

use crate::common::constants::LOCAL_HISTORY_BITS;

/// Returns a mask with the low `bits` bits set (`bits` in `0..=32`).
#[inline]
pub const fn width_mask(bits: u32) -> u32 {
    if bits == 0 { 0 } else { u32::MAX >> (32 - bits) }
}

/// A fixed-width shift register of branch outcomes (1 = taken).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRegister {
    value: u32,
    mask: u32,
}

impl HistoryRegister {
    /// Creates a cleared register `bits` wide.
    pub const fn new(bits: u32) -> Self {
        Self {
            value: 0,
            mask: width_mask(bits),
        }
    }

    /// Current history bits, always within the register width.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Mask covering the register width.
    #[inline]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Shifts the newest outcome into the least significant bit.
    #[inline]
    pub fn push(&mut self, taken: bool) {
        self.value = ((self.value << 1) | u32::from(taken)) & self.mask;
    }
}

/// Per-site local history registers.
#[derive(Debug, Clone)]
pub struct LocalHistoryTable {
    registers: Vec<HistoryRegister>,
}

impl LocalHistoryTable {
    /// Creates `size` cleared local history registers.
    pub fn new(size: usize) -> Self {
        Self {
            registers: vec![HistoryRegister::new(LOCAL_HISTORY_BITS); size],
        }
    }

    /// History bits of the site at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> u32 {
        self.registers[idx].value()
    }

    /// Shifts an outcome into the site at `idx`.
    #[inline]
    pub fn push(&mut self, idx: usize, taken: bool) {
        self.registers[idx].push(taken);
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Returns `true` if the table has no sites.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Iterates over every site's history bits in index order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.registers.iter().map(HistoryRegister::value)
    }
}
