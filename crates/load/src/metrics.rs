//! Per-container load metrics and safety warnings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::container::ContainerSpec;
use crate::engine::PackedItem;

/// Fraction of the half-dimension the center of gravity may drift from the
/// container center before the balance warning raises.
const BALANCE_BAND: f64 = 0.05;

/// Maximum share of total weight either longitudinal half may carry.
const HALF_WEIGHT_LIMIT: f64 = 0.6;

/// Metrics for one loaded container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinReport {
    /// Display identifier, `Container #k` with k counted from 1.
    pub id: String,

    /// Cartons in placement order.
    pub items: Vec<PackedItem>,

    /// Number of cartons.
    pub carton_count: usize,

    /// Total payload in kg.
    pub total_weight: f64,

    /// Payload as a percentage of the weight capacity.
    pub weight_capacity_percent: f64,

    /// Packed volume over the nominal target volume, in percent.
    ///
    /// The denominator is the target volume, not the container interior,
    /// so an overfilled nominal target reads above 100.
    pub efficiency: f64,

    /// Packed volume in m³.
    pub total_cbm: f64,

    /// Unused share of the target volume in m³.
    pub empty_cbm: f64,

    /// Unused share of the target volume in percent.
    pub empty_percent: f64,

    /// Weighted center of gravity along the width axis, in cm.
    pub cog_x: f64,

    /// Weighted center of gravity along the depth axis, in cm.
    pub cog_z: f64,

    /// Payload whose carton centers lie in the front half (low z), in kg.
    pub front_weight: f64,

    /// Payload whose carton centers lie in the back half, in kg.
    pub back_weight: f64,

    /// Raised when the center of gravity leaves the central balance band.
    pub balance_warning: bool,

    /// Raised when either longitudinal half carries more than 60 % of the
    /// payload (the 60/50 rule).
    pub weight_6050_warning: bool,
}

/// Derives the report for one loaded container.
pub fn summarize_bin(items: Vec<PackedItem>, spec: &ContainerSpec, ordinal: usize) -> BinReport {
    // Volume is rotation invariant; the unrotated dimensions are used.
    let total_volume: f64 = items.iter().map(|p| p.item.volume()).sum();
    let total_weight: f64 = items.iter().map(|p| p.item.weight()).sum();

    let mut moment_x = 0.0;
    let mut moment_z = 0.0;
    let mut front_weight = 0.0;
    for p in &items {
        let w = p.item.weight();
        moment_x += p.center_x() * w;
        moment_z += p.center_z() * w;
        if p.center_z() < spec.depth() / 2.0 {
            front_weight += w;
        }
    }

    let (cog_x, cog_z) = if total_weight > 0.0 {
        (moment_x / total_weight, moment_z / total_weight)
    } else {
        (spec.width() / 2.0, spec.depth() / 2.0)
    };
    let back_weight = total_weight - front_weight;

    let balance_warning = (cog_x - spec.width() / 2.0).abs() > BALANCE_BAND * spec.width()
        || (cog_z - spec.depth() / 2.0).abs() > BALANCE_BAND * spec.depth();
    let weight_6050_warning = front_weight > HALF_WEIGHT_LIMIT * total_weight
        || back_weight > HALF_WEIGHT_LIMIT * total_weight;

    let target_volume = spec.target_volume();
    let efficiency = if target_volume > 0.0 {
        total_volume / target_volume * 100.0
    } else {
        0.0
    };
    let empty_cbm = (target_volume - total_volume) / 1e6;
    let empty_percent = if target_volume > 0.0 {
        empty_cbm / spec.target_cbm() * 100.0
    } else {
        0.0
    };

    BinReport {
        id: format!("Container #{ordinal}"),
        carton_count: items.len(),
        total_weight,
        weight_capacity_percent: total_weight / spec.max_weight() * 100.0,
        efficiency,
        total_cbm: total_volume / 1e6,
        empty_cbm,
        empty_percent,
        cog_x,
        cog_z,
        front_weight,
        back_weight,
        balance_warning,
        weight_6050_warning,
        items,
    }
}
