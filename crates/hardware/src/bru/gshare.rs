//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Indexing
//!
//! With `word = pc >> 2`:
//! - PHT index: `(word ^ ghr) & history_mask`
//! - BTB index: `word & (btb_size - 1)`
//! - BTB tag: `word >> log2(btb_size)`
//!
//! # Performance
//!
//! - **Time Complexity:** `predict()` and `update()` are O(1)
//! - **Space Complexity:** O(2^H) counters for an H-bit history, plus the BTB
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches or history length too short/long for pattern

use tracing::trace;

use super::{
    BranchPredictor, btb::Btb, counter::CounterTable, history::HistoryRegister,
};
use crate::common::ConfigError;
use crate::common::constants::{INSTRUCTION_SIZE, WORD_SHIFT};
use crate::config::validate_geometry;

/// GShare Predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: HistoryRegister,
    /// Pattern History Table containing 2-bit saturating counters.
    pht: CounterTable,
    /// Branch Target Buffer.
    btb: Btb,
}

impl GSharePredictor {
    /// Creates a new GShare Predictor with all tables cleared.
    ///
    /// # Arguments
    ///
    /// * `btb_size` - BTB entries; must be a non-zero power of two.
    /// * `bhr_size` - Global history width in bits, `1..=32`. The PHT holds
    ///   `2^bhr_size` counters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either size is out of range.
    pub fn new(btb_size: u32, bhr_size: u32) -> Result<Self, ConfigError> {
        validate_geometry(btb_size, bhr_size)?;
        Ok(Self {
            ghr: HistoryRegister::new(bhr_size),
            pht: CounterTable::pattern(1usize << bhr_size),
            btb: Btb::new(btb_size),
        })
    }

    /// Calculates the index into the Pattern History Table.
    #[inline]
    fn pht_index(&self, word: u32) -> usize {
        ((word ^ self.ghr.value()) & self.ghr.mask()) as usize
    }

    /// Tag stored alongside a BTB entry for this word address.
    #[inline]
    const fn tag(&self, word: u32) -> u32 {
        word >> self.btb.shift()
    }

    /// Current global history bits.
    pub const fn ghr(&self) -> u32 {
        self.ghr.value()
    }

    /// The PHT counter that the next `predict(pc)` would read.
    pub fn counter(&self, pc: u32) -> u8 {
        self.pht.get(self.pht_index(pc >> WORD_SHIFT))
    }

    /// Read access to the pattern history table.
    pub const fn pht(&self) -> &CounterTable {
        &self.pht
    }

    /// Read access to the branch target buffer.
    pub const fn btb(&self) -> &Btb {
        &self.btb
    }
}

impl BranchPredictor for GSharePredictor {
    fn name(&self) -> &'static str {
        "GShare"
    }

    fn predict_direction(&self, pc: u32) -> bool {
        self.pht.is_set(self.pht_index(pc >> WORD_SHIFT))
    }

    /// Returns the BTB target when the 2-bit counter at the hashed index is
    /// 2 or 3 and the BTB entry matches; `pc + 4` otherwise.
    fn predict(&self, pc: u32) -> u32 {
        let word = pc >> WORD_SHIFT;
        let taken = self.pht.is_set(self.pht_index(word));

        let target = if taken {
            self.btb.lookup(self.btb.index(word), self.tag(word))
        } else {
            None
        };
        let next_pc = target.unwrap_or_else(|| pc.wrapping_add(INSTRUCTION_SIZE));

        trace!("gshare: predict pc={pc:#x}, next_pc={next_pc:#x}, predict_taken={taken}");
        next_pc
    }

    /// Updates the 2-bit saturating counter, shifts the outcome into the
    /// Global History Register, and records the target of taken branches.
    fn update(&mut self, pc: u32, next_pc: u32, taken: bool) {
        let word = pc >> WORD_SHIFT;
        let idx = self.pht_index(word);

        self.pht.train(idx, taken);
        self.ghr.push(taken);

        if taken {
            self.btb.update(self.btb.index(word), self.tag(word), next_pc);
        }

        trace!("gshare: update pc={pc:#x}, next_pc={next_pc:#x}, taken={taken}");
    }
}
