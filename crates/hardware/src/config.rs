//! Configuration system for the branch predictor models.
//!
//! This module defines the configuration structures and enums used to parameterize
//! the predictors. It provides:
//! 1. **Defaults:** Baseline table geometry (BTB entries, global history width).
//! 2. **Structures:** Hierarchical config for general options and the predictor.
//! 3. **Enums:** The closed set of predictor algorithms.
//! 4. **Validation:** Geometry checks that run before any table is allocated.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built with
//! `Config::default()`.

use std::str::FromStr;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::constants::MAX_HISTORY_BITS;

/// Default configuration constants for the predictors.
mod defaults {
    /// Default Branch Target Buffer size (256 entries).
    pub const BTB_SIZE: u32 = 256;

    /// Default global history width (8 bits, 256 PHT entries).
    pub const BHR_SIZE: u32 = 8;
}

/// Branch prediction algorithm types.
///
/// Specifies which predictor the fetch stage consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BranchPredictor {
    /// Global history predictor (gshare).
    ///
    /// XORs the word address with the global history register to index a
    /// single pattern history table.
    #[default]
    #[serde(alias = "gshare", alias = "GSHARE")]
    GShare,
    /// Tournament predictor (gshare+).
    ///
    /// Arbitrates per branch site between the gshare component and a
    /// local-history component using a table of 3-bit meta counters.
    #[serde(alias = "tournament", alias = "GShare+", alias = "GSharePlus")]
    Tournament,
}

impl FromStr for BranchPredictor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gshare" => Ok(Self::GShare),
            "tournament" | "gshare+" | "gshareplus" => Ok(Self::Tournament),
            _ => Err(ConfigError::UnknownPredictor(s.to_string())),
        }
    }
}

/// Root configuration structure containing all predictor settings.
///
/// # Examples
///
/// ```
/// use bpsim_core::config::{BranchPredictor, Config};
///
/// let json = r#"{
///     "general": { "trace_predictions": true },
///     "predictor": { "kind": "Tournament", "btb_size": 64, "bhr_size": 10 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_predictions);
/// assert_eq!(config.predictor.kind, BranchPredictor::Tournament);
/// assert_eq!(config.predictor.btb_size, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General options (tracing)
    #[serde(default)]
    pub general: GeneralConfig,

    /// Predictor selection and table geometry
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed, or a geometry
    /// error if the resulting predictor configuration is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first geometry error found in the predictor section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.predictor.validate()
    }
}

/// General options that do not affect prediction results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every predict/update call
    #[serde(default)]
    pub trace_predictions: bool,
}

/// Predictor selection and table geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Predictor algorithm
    #[serde(default)]
    pub kind: BranchPredictor,

    /// Branch Target Buffer entries (power of two)
    #[serde(default = "PredictorConfig::default_btb_size")]
    pub btb_size: u32,

    /// Global history register width in bits (1..=32)
    #[serde(default = "PredictorConfig::default_bhr_size")]
    pub bhr_size: u32,

    /// Tournament-only switches
    #[serde(default)]
    pub tournament: TournamentConfig,
}

impl PredictorConfig {
    /// Returns the default Branch Target Buffer size.
    fn default_btb_size() -> u32 {
        defaults::BTB_SIZE
    }

    /// Returns the default global history width.
    fn default_bhr_size() -> u32 {
        defaults::BHR_SIZE
    }

    /// Validates the table geometry.
    ///
    /// # Errors
    ///
    /// See [`validate_geometry`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_geometry(self.btb_size, self.bhr_size)
    }
}

impl Default for PredictorConfig {
    /// Creates a gshare configuration with a 256-entry BTB and 8 history bits.
    fn default() -> Self {
        Self {
            kind: BranchPredictor::default(),
            btb_size: defaults::BTB_SIZE,
            bhr_size: defaults::BHR_SIZE,
            tournament: TournamentConfig::default(),
        }
    }
}

/// Tournament predictor switches.
///
/// Both default to `false`, which selects the default training rule: the
/// meta counter is credited from the freshly trained counters and the global
/// history register never advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct TournamentConfig {
    /// Shift each resolved outcome into the global history register
    #[serde(default)]
    pub update_global_history: bool,

    /// Credit the meta counter from the counters as they were at prediction time
    #[serde(default)]
    pub train_meta_on_prediction: bool,
}

/// Checks a BTB size and global history width before any table is allocated.
///
/// # Errors
///
/// Returns [`ConfigError::BtbSizeNotPowerOfTwo`] if `btb_size` is zero or not a
/// power of two, and [`ConfigError::HistoryBitsOutOfRange`] if `bhr_size` is
/// outside `1..=32`.
pub fn validate_geometry(btb_size: u32, bhr_size: u32) -> Result<(), ConfigError> {
    if !btb_size.is_power_of_two() {
        return Err(ConfigError::BtbSizeNotPowerOfTwo(btb_size));
    }
    if bhr_size == 0 || bhr_size > MAX_HISTORY_BITS {
        return Err(ConfigError::HistoryBitsOutOfRange(bhr_size));
    }
    Ok(())
}
