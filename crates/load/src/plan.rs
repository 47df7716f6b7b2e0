//! Final load plan and summary statistics.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stowage_core::{Strategy, Termination};

use crate::item::Item;
use crate::metrics::BinReport;

/// Result of a full packing run: the winning trial's containers plus the
/// cartons no container could take, with meta-search bookkeeping.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadPlan {
    /// Loaded containers in placement order.
    pub bins: Vec<BinReport>,

    /// Cartons that fit no container.
    pub unpacked: Vec<Item>,

    /// Outcome score of the winning trial.
    pub score: f64,

    /// Meta-search trials executed.
    pub iterations: usize,

    /// Ordering strategy of the winning trial.
    pub strategy: Option<Strategy>,

    /// Why the meta-search stopped.
    pub termination: Termination,

    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl LoadPlan {
    /// A plan for an empty problem: nothing packed, nothing left over.
    pub fn empty() -> Self {
        Self {
            bins: Vec::new(),
            unpacked: Vec::new(),
            score: 0.0,
            iterations: 0,
            strategy: None,
            termination: Termination::Exhausted,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns true when every carton was placed.
    pub fn is_complete(&self) -> bool {
        self.unpacked.is_empty()
    }

    /// Number of containers used.
    pub fn container_count(&self) -> usize {
        self.bins.len()
    }

    /// Number of cartons that could not be placed.
    pub fn unpacked_count(&self) -> usize {
        self.unpacked.len()
    }

    /// Number of cartons placed across all containers.
    pub fn packed_count(&self) -> usize {
        self.bins.iter().map(|b| b.carton_count).sum()
    }

    /// Mean volumetric efficiency across containers, in percent.
    pub fn average_efficiency(&self) -> f64 {
        if self.bins.is_empty() {
            return 0.0;
        }
        self.bins.iter().map(|b| b.efficiency).sum::<f64>() / self.bins.len() as f64
    }

    /// Total payload across all containers, in kg.
    pub fn total_weight(&self) -> f64 {
        self.bins.iter().map(|b| b.total_weight).sum()
    }

    /// Total packed volume across all containers, in m³.
    pub fn total_cbm(&self) -> f64 {
        self.bins.iter().map(|b| b.total_cbm).sum()
    }

    /// Returns true when any container carries a safety warning.
    pub fn has_warnings(&self) -> bool {
        self.bins
            .iter()
            .any(|b| b.balance_warning || b.weight_6050_warning)
    }

    /// Condenses the plan into scalar summary statistics.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            containers_used: self.container_count(),
            cartons_packed: self.packed_count(),
            cartons_unpacked: self.unpacked_count(),
            average_efficiency: self.average_efficiency(),
            total_weight: self.total_weight(),
            total_cbm: self.total_cbm(),
            score: self.score,
            iterations: self.iterations,
        }
    }
}

/// Scalar digest of a [`LoadPlan`], for reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Containers used.
    pub containers_used: usize,
    /// Cartons placed.
    pub cartons_packed: usize,
    /// Cartons left unpacked.
    pub cartons_unpacked: usize,
    /// Mean volumetric efficiency in percent.
    pub average_efficiency: f64,
    /// Total payload in kg.
    pub total_weight: f64,
    /// Total packed volume in m³.
    pub total_cbm: f64,
    /// Outcome score of the winning trial.
    pub score: f64,
    /// Meta-search trials executed.
    pub iterations: usize,
}

impl From<&LoadPlan> for PlanSummary {
    fn from(plan: &LoadPlan) -> Self {
        plan.summary()
    }
}
