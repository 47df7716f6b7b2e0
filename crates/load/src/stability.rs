//! Physical plausibility checks for stacked cartons.

use nalgebra::Vector3;

use crate::engine::PackedItem;
use crate::geometry::{overlap_1d, SURFACE_EPS};
use crate::item::Item;

/// Minimum fraction of a carton footprint that must rest on support.
pub const SUPPORT_RATIO: f64 = 0.7;

/// A carton may weigh at most this factor times the mean supporter weight.
pub const STACK_WEIGHT_FACTOR: f64 = 1.1;

/// Placed cartons directly beneath the candidate rectangle.
///
/// A supporter's top face must be flush with the candidate `y` within
/// [`SURFACE_EPS`] and its footprint must strictly overlap the candidate's
/// on both horizontal axes.
pub fn supporters_of<'a>(
    position: &Vector3<f64>,
    dims: &Vector3<f64>,
    placed: &'a [PackedItem],
) -> Vec<&'a PackedItem> {
    placed
        .iter()
        .filter(|p| {
            (p.top() - position.y).abs() < SURFACE_EPS
                && overlap_1d(
                    position.x,
                    position.x + dims.x,
                    p.position.x,
                    p.position.x + p.dims.x,
                ) > 0.0
                && overlap_1d(
                    position.z,
                    position.z + dims.z,
                    p.position.z,
                    p.position.z + p.dims.z,
                ) > 0.0
        })
        .collect()
}

/// Footprint area resting on the given supporters, in cm².
pub fn support_area(
    position: &Vector3<f64>,
    dims: &Vector3<f64>,
    supporters: &[&PackedItem],
) -> f64 {
    supporters
        .iter()
        .map(|p| {
            overlap_1d(
                position.x,
                position.x + dims.x,
                p.position.x,
                p.position.x + p.dims.x,
            ) * overlap_1d(
                position.z,
                position.z + dims.z,
                p.position.z,
                p.position.z + p.dims.z,
            )
        })
        .sum()
}

/// Applies the stacking rules for a candidate placed above the floor.
///
/// All of the following must hold:
///
/// 1. at least one supporter exists (no hanging in air),
/// 2. combined support covers at least [`SUPPORT_RATIO`] of the footprint,
/// 3. no supporter is more fragile than the candidate,
/// 4. the candidate weighs at most [`STACK_WEIGHT_FACTOR`] times the mean
///    supporter weight.
pub fn is_supported(
    position: &Vector3<f64>,
    dims: &Vector3<f64>,
    item: &Item,
    placed: &[PackedItem],
) -> bool {
    let supporters = supporters_of(position, dims, placed);
    let Some(min_fragility) = supporters.iter().map(|p| p.item.fragility()).min() else {
        return false;
    };

    if support_area(position, dims, &supporters) < SUPPORT_RATIO * (dims.x * dims.z) {
        return false;
    }

    if min_fragility < item.fragility() {
        return false;
    }

    let mean_weight =
        supporters.iter().map(|p| p.item.weight()).sum::<f64>() / supporters.len() as f64;
    item.weight() <= STACK_WEIGHT_FACTOR * mean_weight
}
