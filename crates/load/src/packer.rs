//! Public packing interface and meta-search wiring.

use rand::rngs::StdRng;

use stowage_core::{
    SearchConfig, SearchResult, SearchRunner, Strategy, Termination, TrialProblem,
};

use crate::container::{ContainerSpec, ContainerTemplate};
use crate::item::Item;
use crate::plan::LoadPlan;
use crate::trial::{plan_score, run_trial, TrialOutcome};

/// 3D container-loading optimizer.
///
/// Accumulates cartons against a single container template, then searches
/// item orderings for the plan that uses the fewest containers at the
/// highest volumetric utilization.
pub struct Packer {
    spec: ContainerSpec,
    items: Vec<Item>,
    config: SearchConfig,
}

impl Packer {
    /// Creates a packer for the given container template.
    ///
    /// `target_volume_cbm` (m³) normalizes the efficiency metric; it does
    /// not have to equal the container's interior volume.
    pub fn new(template: ContainerTemplate, target_volume_cbm: f64) -> Self {
        Self {
            spec: ContainerSpec::new(&template, target_volume_cbm),
            items: Vec::new(),
            config: SearchConfig::default(),
        }
    }

    /// Replaces the meta-search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the working container specification.
    pub fn spec(&self) -> &ContainerSpec {
        &self.spec
    }

    /// Returns the cartons added so far.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Adds one carton.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Adds a batch of cartons.
    pub fn add_items<I: IntoIterator<Item = Item>>(&mut self, items: I) {
        self.items.extend(items);
    }

    /// Runs the meta-search sequentially and returns the best plan.
    ///
    /// The first five trials run the pure strategies deterministically; the
    /// remaining trials jitter sort ties. The search stops early once a new
    /// best plan packs everything at the target efficiency with no safety
    /// warnings, or after the stagnation limit.
    pub fn pack_all(&self) -> LoadPlan {
        if self.items.is_empty() {
            return LoadPlan::empty();
        }

        let runner = SearchRunner::new(self.config.clone());
        self.into_plan(runner.run(self))
    }

    /// Runs every scheduled trial concurrently and returns the best plan.
    ///
    /// Per-trial seeding keeps the result reproducible; early-exit and
    /// stagnation stopping do not apply.
    pub fn pack_all_parallel(&self) -> LoadPlan {
        if self.items.is_empty() {
            return LoadPlan::empty();
        }

        let runner = SearchRunner::new(self.config.clone());
        self.into_plan(runner.run_parallel(self))
    }

    fn into_plan(&self, result: SearchResult<TrialOutcome>) -> LoadPlan {
        match result.best {
            Some(outcome) => LoadPlan {
                bins: outcome.bins,
                unpacked: outcome.unpacked,
                score: result.best_score,
                iterations: result.iterations,
                strategy: Some(outcome.strategy),
                termination: result.termination,
                elapsed: result.elapsed,
            },
            None => LoadPlan {
                bins: Vec::new(),
                unpacked: self.items.clone(),
                score: result.best_score,
                iterations: result.iterations,
                strategy: None,
                termination: Termination::Exhausted,
                elapsed: result.elapsed,
            },
        }
    }
}

impl TrialProblem for Packer {
    type Outcome = TrialOutcome;

    fn run_trial(&self, iteration: usize, rng: &mut StdRng) -> TrialOutcome {
        let strategy = Strategy::for_iteration(iteration);
        let jitter = iteration >= Strategy::CYCLE.len();
        log::debug!("trial {iteration}: strategy {strategy:?}, jitter {jitter}");
        run_trial(&self.items, &self.spec, strategy, jitter, rng)
    }

    fn score(&self, outcome: &TrialOutcome) -> f64 {
        plan_score(&outcome.bins, &outcome.unpacked)
    }

    fn is_acceptable(&self, outcome: &TrialOutcome) -> bool {
        if !outcome.unpacked.is_empty() || outcome.bins.is_empty() {
            return false;
        }

        let average = outcome.bins.iter().map(|b| b.efficiency).sum::<f64>()
            / outcome.bins.len() as f64;
        average >= self.config.target_efficiency
            && outcome
                .bins
                .iter()
                .all(|b| !b.balance_warning && !b.weight_6050_warning)
    }
}
