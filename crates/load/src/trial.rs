//! Strategy ordering, single-trial execution and outcome scoring.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stowage_core::Strategy;

use crate::container::ContainerSpec;
use crate::engine::pack_container;
use crate::item::Item;
use crate::metrics::{summarize_bin, BinReport};

/// Keys closer than this on the primary sort key count as a tie.
pub const TIE_EPS: f64 = 0.1;

/// Score for an outcome that opened no container at all.
const NO_BIN_SCORE: f64 = -1_000_000.0;

/// Penalty per m³ of unpacked carton volume.
const UNPACKED_PENALTY: f64 = 100.0;
/// Penalty per container opened.
const CONTAINER_PENALTY: f64 = 50.0;
/// Penalty for a balance warning on a non-final container.
const BALANCE_PENALTY: f64 = 20.0;
/// Penalty for a 60/50 warning on a non-final container.
const HALF_WEIGHT_PENALTY: f64 = 30.0;

/// Primary sort key for a strategy. All strategies order descending.
pub fn sort_key(strategy: Strategy, item: &Item) -> f64 {
    match strategy {
        Strategy::VolumeDesc => item.volume(),
        Strategy::WeightDesc => item.weight(),
        Strategy::DensityDesc => item.density(),
        Strategy::FragilityDesc => f64::from(item.fragility()),
        Strategy::AreaDesc => item.footprint(),
    }
}

/// Orders cartons for one trial.
///
/// The sort is stable and descending on the strategy key, so pure trials
/// are reproducible. With `jitter`, maximal runs of adjacent keys closer
/// than [`TIE_EPS`] are shuffled uniformly, perturbing ties only.
pub fn order_items(
    items: &[Item],
    strategy: Strategy,
    jitter: bool,
    rng: &mut StdRng,
) -> Vec<Item> {
    let mut decorated: Vec<(f64, Item)> = items
        .iter()
        .map(|item| (sort_key(strategy, item), item.clone()))
        .collect();
    decorated.sort_by(|a, b| b.0.total_cmp(&a.0));

    if jitter {
        let mut start = 0;
        while start < decorated.len() {
            let mut end = start + 1;
            while end < decorated.len() && (decorated[end - 1].0 - decorated[end].0).abs() < TIE_EPS
            {
                end += 1;
            }
            if end - start > 1 {
                decorated[start..end].shuffle(rng);
            }
            start = end;
        }
    }

    decorated.into_iter().map(|(_, item)| item).collect()
}

/// Result of one trial: loaded containers and whatever did not fit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialOutcome {
    /// Loaded containers in placement order.
    pub bins: Vec<BinReport>,
    /// Cartons no container could take.
    pub unpacked: Vec<Item>,
    /// Ordering strategy of this trial.
    pub strategy: Strategy,
    /// Whether ties were jittered.
    pub jittered: bool,
}

/// Runs one full trial: sorts the cartons, then fills containers one after
/// another, feeding each container's leftovers to the next.
///
/// A container that takes zero cartons while cartons remain ends the trial;
/// the remainder is unpackable for this container type.
pub fn run_trial(
    items: &[Item],
    spec: &ContainerSpec,
    strategy: Strategy,
    jitter: bool,
    rng: &mut StdRng,
) -> TrialOutcome {
    let mut remaining = order_items(items, strategy, jitter, rng);
    let mut bins: Vec<BinReport> = Vec::new();
    let mut unpacked: Vec<Item> = Vec::new();

    while !remaining.is_empty() {
        let (packed, leftovers) = pack_container(&remaining, spec);
        if packed.is_empty() {
            log::warn!(
                "container {} accepted no cartons; {} remain unpackable",
                bins.len() + 1,
                leftovers.len()
            );
            unpacked = leftovers;
            break;
        }
        bins.push(summarize_bin(packed, spec, bins.len() + 1));
        remaining = leftovers;
    }

    TrialOutcome {
        bins,
        unpacked,
        strategy,
        jittered: jitter,
    }
}

/// Scores a trial outcome; higher is better.
///
/// Packed volume rewards, unpacked volume and container count penalize.
/// Safety warnings penalize every container except the last: a tail
/// container typically holds light remnants and cannot be balanced.
pub fn plan_score(bins: &[BinReport], unpacked: &[Item]) -> f64 {
    if bins.is_empty() {
        return NO_BIN_SCORE;
    }

    let packed_cbm: f64 = bins.iter().map(|b| b.total_cbm).sum();
    let unpacked_cbm: f64 = unpacked.iter().map(Item::volume).sum::<f64>() / 1e6;

    let mut safety = 0.0;
    for bin in &bins[..bins.len() - 1] {
        if bin.balance_warning {
            safety += BALANCE_PENALTY;
        }
        if bin.weight_6050_warning {
            safety += HALF_WEIGHT_PENALTY;
        }
    }

    packed_cbm
        - UNPACKED_PENALTY * unpacked_cbm
        - CONTAINER_PENALTY * bins.len() as f64
        - safety
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerTemplate;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn spec(width: f64, height: f64, depth: f64, max_weight: f64) -> ContainerSpec {
        ContainerSpec::new(
            &ContainerTemplate::new(width, height, depth, max_weight),
            1.0,
        )
    }

    #[test]
    fn pure_orderings_are_deterministic() {
        let items = vec![
            Item::new("small", 10.0, 10.0, 10.0, 30.0),
            Item::new("large", 30.0, 30.0, 30.0, 5.0),
            Item::new("medium", 20.0, 20.0, 20.0, 10.0),
        ];

        for strategy in Strategy::CYCLE {
            let a = order_items(&items, strategy, false, &mut rng());
            let b = order_items(&items, strategy, false, &mut rng());
            let ids_a: Vec<&str> = a.iter().map(Item::id).collect();
            let ids_b: Vec<&str> = b.iter().map(Item::id).collect();
            assert_eq!(ids_a, ids_b, "{strategy:?}");
        }

        let by_volume = order_items(&items, Strategy::VolumeDesc, false, &mut rng());
        assert_eq!(
            by_volume.iter().map(Item::id).collect::<Vec<_>>(),
            vec!["large", "medium", "small"]
        );

        let by_weight = order_items(&items, Strategy::WeightDesc, false, &mut rng());
        assert_eq!(
            by_weight.iter().map(Item::id).collect::<Vec<_>>(),
            vec!["small", "medium", "large"]
        );
    }

    #[test]
    fn jitter_permutes_ties_only() {
        // Two tie groups: four identical cubes and one clearly larger one.
        let mut items: Vec<Item> = (0..4)
            .map(|i| Item::new(format!("tie{i}"), 10.0, 10.0, 10.0, 1.0))
            .collect();
        items.push(Item::new("big", 30.0, 30.0, 30.0, 1.0));

        let ordered = order_items(&items, Strategy::VolumeDesc, true, &mut rng());

        // The larger carton stays in front regardless of jitter.
        assert_eq!(ordered[0].id(), "big");

        // The tie group holds exactly the tied cartons, in some order.
        let mut tied: Vec<&str> = ordered[1..].iter().map(Item::id).collect();
        tied.sort_unstable();
        assert_eq!(tied, vec!["tie0", "tie1", "tie2", "tie3"]);
    }

    #[test]
    fn jitter_is_reproducible_per_seed() {
        let items: Vec<Item> = (0..8)
            .map(|i| Item::new(format!("c{i}"), 10.0, 10.0, 10.0, 1.0))
            .collect();

        let a = order_items(&items, Strategy::VolumeDesc, true, &mut rng());
        let b = order_items(&items, Strategy::VolumeDesc, true, &mut rng());
        assert_eq!(
            a.iter().map(Item::id).collect::<Vec<_>>(),
            b.iter().map(Item::id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn trial_spills_into_additional_containers() {
        // Only one 60-cube fits a 100-cube container.
        let items: Vec<Item> = (0..3)
            .map(|i| Item::new(format!("c{i}"), 60.0, 60.0, 60.0, 10.0))
            .collect();
        let spec = spec(100.0, 100.0, 100.0, 1000.0);

        let outcome = run_trial(&items, &spec, Strategy::VolumeDesc, false, &mut rng());
        assert_eq!(outcome.bins.len(), 3);
        assert!(outcome.unpacked.is_empty());
        for (i, bin) in outcome.bins.iter().enumerate() {
            assert_eq!(bin.id, format!("Container #{}", i + 1));
            assert_eq!(bin.carton_count, 1);
        }
    }

    #[test]
    fn degenerate_container_ends_the_trial() {
        let items = vec![
            Item::new("fits", 50.0, 50.0, 50.0, 10.0),
            Item::new("oversized", 300.0, 50.0, 50.0, 10.0),
        ];
        let spec = spec(100.0, 100.0, 100.0, 1000.0);

        let outcome = run_trial(&items, &spec, Strategy::VolumeDesc, false, &mut rng());
        assert_eq!(outcome.bins.len(), 1);
        assert_eq!(outcome.unpacked.len(), 1);
        assert_eq!(outcome.unpacked[0].id(), "oversized");
    }

    #[test]
    fn score_rewards_fewer_containers() {
        let spec = spec(100.0, 100.0, 100.0, 10_000.0);
        let items: Vec<Item> = (0..2)
            .map(|i| Item::new(format!("c{i}"), 60.0, 60.0, 60.0, 10.0))
            .collect();

        let two_bins = run_trial(&items, &spec, Strategy::VolumeDesc, false, &mut rng());
        assert_eq!(two_bins.bins.len(), 2);

        let one_item = run_trial(&items[..1], &spec, Strategy::VolumeDesc, false, &mut rng());
        assert_eq!(one_item.bins.len(), 1);

        let score_two = plan_score(&two_bins.bins, &two_bins.unpacked);
        let score_one = plan_score(&one_item.bins, &one_item.unpacked);
        assert!(score_one > score_two);
    }

    #[test]
    fn score_floors_at_no_bin_sentinel() {
        assert_eq!(plan_score(&[], &[]), -1_000_000.0);
        let unpacked = vec![Item::new("x", 10.0, 10.0, 10.0, 1.0)];
        assert_eq!(plan_score(&[], &unpacked), -1_000_000.0);
    }

    #[test]
    fn last_container_warnings_are_forgiven() {
        let spec = spec(100.0, 100.0, 100.0, 10_000.0);
        // A single small carton in one container: badly unbalanced, but it
        // is the last (only) container, so no safety penalty applies.
        let items = vec![Item::new("a", 20.0, 20.0, 20.0, 50.0)];
        let outcome = run_trial(&items, &spec, Strategy::VolumeDesc, false, &mut rng());

        assert_eq!(outcome.bins.len(), 1);
        assert!(outcome.bins[0].balance_warning);

        let expected = outcome.bins[0].total_cbm - 50.0;
        let score = plan_score(&outcome.bins, &outcome.unpacked);
        assert!((score - expected).abs() < 1e-9);
    }
}
