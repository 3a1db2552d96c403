//! Tournament Branch Predictor (gshare+).
//!
//! A hybrid predictor that employs a meta-predictor to select between a global
//! predictor (gshare) and a local predictor (per-site history into a shared
//! local PHT). The meta table holds one 3-bit counter per BTB index; it tracks
//! which component has been right more often at that site and switches
//! allegiance once one has been consistently right while the other was wrong.
//!
//! # Indexing
//!
//! - PHT index: `((pc >> 2) ^ ghr) & history_mask`
//! - BTB, local history and meta index: `(pc >> 2) & (btb_size - 1)`
//! - Local PHT index: the site's 8-bit local history
//! - BTB tag: `pc >> log2(btb_size)` (the byte address, unlike gshare)
//!
//! # Training
//!
//! By default the meta counter is credited from the counters *after* they have
//! been trained on the current outcome, and the global history register never
//! advances, so the global component is indexed by PC alone. Both behaviours
//! can be switched to the textbook rule through [`TournamentConfig`].

use tracing::trace;

use super::{
    BranchPredictor,
    btb::Btb,
    counter::CounterTable,
    history::{HistoryRegister, LocalHistoryTable},
};
use crate::common::ConfigError;
use crate::common::constants::{INSTRUCTION_SIZE, LOCAL_PHT_SIZE, WORD_SHIFT};
use crate::config::{TournamentConfig, validate_geometry};

/// Table indices for one branch site under the current history.
#[derive(Clone, Copy)]
struct Indices {
    /// BTB, local history and meta table index.
    site: usize,
    /// Global PHT index.
    global: usize,
    /// Local PHT index.
    local: usize,
}

/// Tournament Predictor structure.
#[derive(Debug, Clone)]
pub struct TournamentPredictor {
    /// Training switches.
    config: TournamentConfig,
    /// Branch Target Buffer.
    btb: Btb,
    /// Global History Register.
    ghr: HistoryRegister,
    /// Global Pattern History Table (2-bit counters).
    global_pht: CounterTable,
    /// Local History Table storing history patterns per branch site.
    local_history: LocalHistoryTable,
    /// Local Pattern History Table indexed by local history patterns.
    local_pht: CounterTable,
    /// Meta table (3-bit counters). Selects global at 4..=7, local at 0..=3.
    meta: CounterTable,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor with the default training rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `btb_size` is not a non-zero power of two or
    /// `bhr_size` is outside `1..=32`.
    pub fn new(btb_size: u32, bhr_size: u32) -> Result<Self, ConfigError> {
        Self::with_config(&TournamentConfig::default(), btb_size, bhr_size)
    }

    /// Creates a new Tournament Predictor with explicit training switches.
    ///
    /// # Errors
    ///
    /// Same as [`TournamentPredictor::new`].
    pub fn with_config(
        config: &TournamentConfig,
        btb_size: u32,
        bhr_size: u32,
    ) -> Result<Self, ConfigError> {
        validate_geometry(btb_size, bhr_size)?;
        let sites = btb_size as usize;

        Ok(Self {
            config: *config,
            btb: Btb::new(btb_size),
            ghr: HistoryRegister::new(bhr_size),
            global_pht: CounterTable::pattern(1usize << bhr_size),
            local_history: LocalHistoryTable::new(sites),
            local_pht: CounterTable::pattern(LOCAL_PHT_SIZE),
            meta: CounterTable::meta(sites),
        })
    }

    #[inline]
    fn indices(&self, pc: u32) -> Indices {
        let word = pc >> WORD_SHIFT;
        let site = self.btb.index(word);
        Indices {
            site,
            global: ((word ^ self.ghr.value()) & self.ghr.mask()) as usize,
            local: (self.local_history.get(site) as usize) & (LOCAL_PHT_SIZE - 1),
        }
    }

    /// Tag stored alongside a BTB entry; derived from the byte address.
    #[inline]
    const fn tag(&self, pc: u32) -> u32 {
        pc >> self.btb.shift()
    }

    /// Prediction of the global (gshare) component alone.
    pub fn global_prediction(&self, pc: u32) -> bool {
        self.global_pht.is_set(self.indices(pc).global)
    }

    /// Prediction of the local-history component alone.
    pub fn local_prediction(&self, pc: u32) -> bool {
        self.local_pht.is_set(self.indices(pc).local)
    }

    /// Returns `true` if the meta table currently selects the global component for `pc`.
    pub fn uses_global(&self, pc: u32) -> bool {
        self.meta.is_set(self.indices(pc).site)
    }

    /// Raw meta counter for the site of `pc`.
    pub fn meta_counter(&self, pc: u32) -> u8 {
        self.meta.get(self.indices(pc).site)
    }

    /// Local history bits recorded for the site of `pc`.
    pub fn local_history(&self, pc: u32) -> u32 {
        self.local_history.get(self.indices(pc).site)
    }

    /// Current global history bits.
    pub const fn ghr(&self) -> u32 {
        self.ghr.value()
    }

    /// Training switches this predictor was built with.
    pub const fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Read access to the global pattern history table.
    pub const fn global_pht(&self) -> &CounterTable {
        &self.global_pht
    }

    /// Read access to the local pattern history table.
    pub const fn local_pht(&self) -> &CounterTable {
        &self.local_pht
    }

    /// Read access to the local history table.
    pub const fn local_history_table(&self) -> &LocalHistoryTable {
        &self.local_history
    }

    /// Read access to the meta table.
    pub const fn meta(&self) -> &CounterTable {
        &self.meta
    }

    /// Read access to the branch target buffer.
    pub const fn btb(&self) -> &Btb {
        &self.btb
    }

    #[inline]
    fn choose(&self, idx: Indices) -> bool {
        if self.meta.is_set(idx.site) {
            self.global_pht.is_set(idx.global)
        } else {
            self.local_pht.is_set(idx.local)
        }
    }
}

impl BranchPredictor for TournamentPredictor {
    fn name(&self) -> &'static str {
        "Tournament"
    }

    fn predict_direction(&self, pc: u32) -> bool {
        self.choose(self.indices(pc))
    }

    /// Queries both components, lets the meta table pick one, and looks up
    /// the BTB if the chosen direction is taken.
    fn predict(&self, pc: u32) -> u32 {
        let idx = self.indices(pc);
        let taken = self.choose(idx);

        let target = if taken {
            self.btb.lookup(idx.site, self.tag(pc))
        } else {
            None
        };
        let next_pc = target.unwrap_or_else(|| pc.wrapping_add(INSTRUCTION_SIZE));

        trace!("tournament: predict pc={pc:#x}, next_pc={next_pc:#x}, predict_taken={taken}");
        next_pc
    }

    /// Trains both components, advances the site's local history, credits the
    /// meta counter toward whichever component was right, and records the
    /// target of taken branches. The order of these steps is significant.
    fn update(&mut self, pc: u32, next_pc: u32, taken: bool) {
        let idx = self.indices(pc);
        let global_before = self.global_pht.is_set(idx.global);
        let local_before = self.local_pht.is_set(idx.local);

        self.global_pht.train(idx.global, taken);
        self.local_pht.train(idx.local, taken);
        self.local_history.push(idx.site, taken);

        let (global_correct, local_correct) = if self.config.train_meta_on_prediction {
            (global_before == taken, local_before == taken)
        } else {
            (
                self.global_pht.is_set(idx.global) == taken,
                self.local_pht.is_set(idx.local) == taken,
            )
        };

        if global_correct != local_correct {
            if global_correct {
                self.meta.increment(idx.site);
            } else {
                self.meta.decrement(idx.site);
            }
        }

        if self.config.update_global_history {
            self.ghr.push(taken);
        }

        if taken {
            self.btb.update(idx.site, self.tag(pc), next_pc);
        }

        trace!("tournament: update pc={pc:#x}, next_pc={next_pc:#x}, taken={taken}");
    }
}
