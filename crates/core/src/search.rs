//! Restart-based meta-search framework.
//!
//! The runner repeatedly executes independent trials of a [`TrialProblem`],
//! keeps the best outcome by score, and stops on early acceptance,
//! stagnation, or exhaustion of the trial budget. Every trial receives its
//! own random generator seeded from the base seed plus the iteration index,
//! so sequential and parallel runs are reproducible and trials never
//! contend on shared state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

use crate::solver::{SearchConfig, Termination};

/// Trait for problems driven by the restart meta-search.
pub trait TrialProblem: Send + Sync {
    /// The outcome produced by a single trial.
    type Outcome: Send;

    /// Runs one trial for the given iteration index.
    fn run_trial(&self, iteration: usize, rng: &mut StdRng) -> Self::Outcome;

    /// Scores an outcome. Higher is better.
    fn score(&self, outcome: &Self::Outcome) -> f64;

    /// Returns true when an outcome is good enough to stop searching.
    fn is_acceptable(&self, _outcome: &Self::Outcome) -> bool {
        false
    }
}

/// Result of a meta-search run.
#[derive(Debug, Clone)]
pub struct SearchResult<O> {
    /// The best outcome found, if any trial ran.
    pub best: Option<O>,
    /// Score of the best outcome.
    pub best_score: f64,
    /// Trials actually executed.
    pub iterations: usize,
    /// Why the search stopped.
    pub termination: Termination,
    /// Best score after each executed trial.
    pub history: Vec<f64>,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Meta-search runner cycling trials and keeping the best outcome.
pub struct SearchRunner {
    config: SearchConfig,
}

impl SearchRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn trial_rng(&self, iteration: usize) -> StdRng {
        StdRng::seed_from_u64(self.config.seed.wrapping_add(iteration as u64))
    }

    /// Runs trials sequentially.
    ///
    /// A strictly better score replaces the best outcome and resets the
    /// stagnation counter; anything else increments it. The search stops
    /// when a new best passes [`TrialProblem::is_acceptable`], when the
    /// stagnation limit is reached, or when the trial budget runs out.
    pub fn run<P: TrialProblem>(&self, problem: &P) -> SearchResult<P::Outcome> {
        let start = Instant::now();
        let mut history = Vec::new();

        let mut best: Option<P::Outcome> = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut stagnation = 0usize;
        let mut termination = Termination::Exhausted;
        let mut iterations = 0usize;

        for iteration in 0..self.config.max_iterations {
            let mut rng = self.trial_rng(iteration);
            let outcome = problem.run_trial(iteration, &mut rng);
            let score = problem.score(&outcome);
            iterations = iteration + 1;

            if score > best_score {
                let acceptable = problem.is_acceptable(&outcome);
                best_score = score;
                best = Some(outcome);
                stagnation = 0;
                history.push(best_score);

                log::debug!("trial {iteration}: new best score {best_score:.4}");

                if acceptable {
                    termination = Termination::EarlyExit;
                    break;
                }
            } else {
                stagnation += 1;
                history.push(best_score);

                if stagnation >= self.config.stagnation_limit {
                    log::debug!("trial {iteration}: stagnated after {stagnation} trials");
                    termination = Termination::Stagnated;
                    break;
                }
            }
        }

        SearchResult {
            best,
            best_score,
            iterations,
            termination,
            history,
            elapsed: start.elapsed(),
        }
    }

    /// Runs every scheduled trial concurrently and keeps the best by score.
    ///
    /// Early-exit and stagnation stopping do not apply; the full trial
    /// budget is always spent. Ties resolve to the lowest iteration index,
    /// matching what the sequential run would have kept.
    pub fn run_parallel<P: TrialProblem>(&self, problem: &P) -> SearchResult<P::Outcome> {
        let start = Instant::now();

        let scored: Vec<(f64, P::Outcome)> = (0..self.config.max_iterations)
            .into_par_iter()
            .map(|iteration| {
                let mut rng = self.trial_rng(iteration);
                let outcome = problem.run_trial(iteration, &mut rng);
                let score = problem.score(&outcome);
                (score, outcome)
            })
            .collect();

        let mut best: Option<P::Outcome> = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut history = Vec::with_capacity(scored.len());
        for (score, outcome) in scored {
            if score > best_score {
                best_score = score;
                best = Some(outcome);
            }
            history.push(best_score);
        }

        SearchResult {
            best,
            best_score,
            iterations: self.config.max_iterations,
            termination: Termination::Exhausted,
            history,
            elapsed: start.elapsed(),
        }
    }
}
