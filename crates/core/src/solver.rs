//! Search configuration and item-ordering strategies.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Item-ordering rule driving one trial of the meta-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Largest volume first.
    #[default]
    VolumeDesc,
    /// Heaviest first.
    WeightDesc,
    /// Densest (weight per volume) first.
    DensityDesc,
    /// Toughest cartons first.
    FragilityDesc,
    /// Largest footprint first.
    AreaDesc,
}

impl Strategy {
    /// The base strategies in meta-search cycling order.
    pub const CYCLE: [Strategy; 5] = [
        Strategy::VolumeDesc,
        Strategy::WeightDesc,
        Strategy::DensityDesc,
        Strategy::FragilityDesc,
        Strategy::AreaDesc,
    ];

    /// Returns the strategy scheduled for a meta-search iteration.
    pub fn for_iteration(iteration: usize) -> Strategy {
        Self::CYCLE[iteration % Self::CYCLE.len()]
    }
}

/// Why a meta-search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// An outcome met the acceptance criteria after a new best.
    EarlyExit,
    /// No strict improvement for the configured number of trials.
    Stagnated,
    /// All scheduled trials ran.
    Exhausted,
}

/// Configuration for the meta-search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Maximum number of trials.
    pub max_iterations: usize,

    /// Consecutive non-improving trials before giving up.
    pub stagnation_limit: usize,

    /// Average volumetric efficiency (percent) that qualifies an outcome
    /// for early exit.
    pub target_efficiency: f64,

    /// Base seed for the per-trial random generators.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            stagnation_limit: 15,
            target_efficiency: 98.0,
            seed: 0,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of trials.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit.max(1);
        self
    }

    /// Sets the early-exit efficiency target, in percent.
    pub fn with_target_efficiency(mut self, percent: f64) -> Self {
        self.target_efficiency = percent.max(0.0);
        self
    }

    /// Sets the base RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
