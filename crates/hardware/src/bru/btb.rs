//! Branch Target Buffer (BTB).
//!
//! The BTB is a direct-mapped table that remembers the last taken target of a
//! branch site so the fetch stage can redirect before the branch resolves.
//! Each entry carries a tag so two sites that alias onto the same index are
//! told apart. How the index and tag are derived from the PC is up to the
//! owning predictor; the BTB only stores and compares them.

/// An entry in the Branch Target Buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BtbEntry {
    /// Indicates if this entry has ever been written.
    pub valid: bool,
    /// The last observed taken target.
    pub target: u32,
    /// The tag used to verify the entry belongs to the requesting branch.
    pub tag: u32,
}

/// Branch Target Buffer structure.
#[derive(Clone, Debug)]
pub struct Btb {
    /// The table of BTB entries.
    table: Vec<BtbEntry>,
    /// Index mask (`size - 1`).
    mask: u32,
    /// Number of index bits (`ceil(log2(size))`).
    shift: u32,
}

impl Btb {
    /// Creates a new Branch Target Buffer with the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of entries in the BTB. Must be a non-zero power of 2;
    ///   the predictors check this before building their BTB.
    pub fn new(size: u32) -> Self {
        debug_assert!(size.is_power_of_two(), "BTB size must be a power of two");
        Self {
            table: vec![BtbEntry::default(); size as usize],
            mask: size.wrapping_sub(1),
            shift: size.trailing_zeros(),
        }
    }

    /// Total number of entries.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Number of index bits; tags are formed by shifting this many bits away.
    #[inline]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// Maps a word address onto a table index.
    #[inline]
    pub const fn index(&self, word: u32) -> usize {
        (word & self.mask) as usize
    }

    /// Looks up a target address.
    ///
    /// # Arguments
    ///
    /// * `index` - Table index of the branch site.
    /// * `tag` - Tag the entry must carry to be trusted.
    ///
    /// # Returns
    ///
    /// The stored target if the entry is valid and the tag matches, otherwise `None`.
    #[inline]
    pub fn lookup(&self, index: usize, tag: u32) -> Option<u32> {
        let e = self.table[index];
        if e.valid && e.tag == tag {
            Some(e.target)
        } else {
            None
        }
    }

    /// Overwrites the entry at `index` with a new target and tag.
    #[inline]
    pub fn update(&mut self, index: usize, tag: u32, target: u32) {
        self.table[index] = BtbEntry {
            valid: true,
            target,
            tag,
        };
    }

    /// Raw entry at `index`, valid or not.
    pub fn entry(&self, index: usize) -> BtbEntry {
        self.table[index]
    }
}
