//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that every predictor
//! implements. The fetch stage calls [`BranchPredictor::predict`] to obtain the
//! next fetch address; once the branch resolves, the pipeline calls
//! [`BranchPredictor::update`] with the real direction and target.

/// Trait for branch prediction algorithms.
///
/// A given branch's `predict` happens strictly before its matching `update`.
/// Callers that model several in-flight predictions are responsible for
/// serializing access or keeping one predictor per core.
pub trait BranchPredictor {
    /// Short algorithm name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Predicts only the direction of the branch at `pc`.
    ///
    /// # Returns
    ///
    /// `true` if the branch is predicted taken.
    fn predict_direction(&self, pc: u32) -> bool;

    /// Predicts the next fetch address for the branch at `pc`.
    ///
    /// Does not mutate any table.
    ///
    /// # Returns
    ///
    /// The BTB target if the branch is predicted taken and the BTB holds a
    /// matching entry, otherwise the sequential address `pc + 4`.
    fn predict(&self, pc: u32) -> u32;

    /// Trains the predictor with a resolved branch.
    ///
    /// # Arguments
    ///
    /// * `pc` - Program counter of the branch instruction
    /// * `next_pc` - The resolved target, written to the BTB when taken
    /// * `taken` - Whether the branch was actually taken
    fn update(&mut self, pc: u32, next_pc: u32, taken: bool);
}
