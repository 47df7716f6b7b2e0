//! Greedy pivot-point placement for a single container.
//!
//! Cartons are tried in the given order. Candidate positions are the
//! container origin plus the three exposed corners of every placed carton,
//! visited floor first, then back to front, then side to side. The first
//! pivot × rotation combination that passes containment, collision, weight
//! and stacking checks commits the carton.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::container::ContainerSpec;
use crate::geometry::{boxes_intersect, Rotation};
use crate::item::Item;
use crate::stability;

/// A carton committed to a position inside a container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedItem {
    /// The source carton.
    pub item: Item,
    /// Front-lower-left corner of the placed box.
    pub position: Vector3<f64>,
    /// Selected orientation.
    pub rotation: Rotation,
    /// Post-rotation dimensions.
    pub dims: Vector3<f64>,
}

impl PackedItem {
    /// Returns the corner opposite the position.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.dims
    }

    /// Y-coordinate of the top face.
    pub fn top(&self) -> f64 {
        self.position.y + self.dims.y
    }

    /// X-coordinate of the carton center.
    pub fn center_x(&self) -> f64 {
        self.position.x + self.dims.x / 2.0
    }

    /// Z-coordinate of the carton center.
    pub fn center_z(&self) -> f64 {
        self.position.z + self.dims.z / 2.0
    }
}

/// Fills one container from the ordered cartons.
///
/// Returns the cartons placed, in placement order, and the leftovers that
/// did not fit. An empty placed list with non-empty leftovers means the
/// leftovers cannot be packed in this container type at all.
pub fn pack_container(items: &[Item], spec: &ContainerSpec) -> (Vec<PackedItem>, Vec<Item>) {
    let mut packed: Vec<PackedItem> = Vec::new();
    let mut leftovers: Vec<Item> = Vec::new();
    let mut total_weight = 0.0;

    for item in items {
        match place_item(item, &packed, total_weight, spec) {
            Some(placement) => {
                total_weight += placement.item.weight();
                packed.push(placement);
            }
            None => leftovers.push(item.clone()),
        }
    }

    (packed, leftovers)
}

/// Candidate origins for the next carton, in load order.
fn pivot_points(packed: &[PackedItem]) -> Vec<Vector3<f64>> {
    let mut pivots = Vec::with_capacity(1 + packed.len() * 3);
    pivots.push(Vector3::zeros());

    for p in packed {
        pivots.push(Vector3::new(
            p.position.x + p.dims.x,
            p.position.y,
            p.position.z,
        ));
        pivots.push(Vector3::new(
            p.position.x,
            p.position.y + p.dims.y,
            p.position.z,
        ));
        pivots.push(Vector3::new(
            p.position.x,
            p.position.y,
            p.position.z + p.dims.z,
        ));
    }

    // Floor first, then back to front, then side to side. The sort is
    // stable, so pivots from earlier placements keep precedence on ties.
    pivots.sort_by(|a, b| {
        a.y.total_cmp(&b.y)
            .then_with(|| a.z.total_cmp(&b.z))
            .then_with(|| a.x.total_cmp(&b.x))
    });
    pivots
}

fn fits_in_container(position: &Vector3<f64>, dims: &Vector3<f64>, spec: &ContainerSpec) -> bool {
    position.x + dims.x <= spec.width()
        && position.y + dims.y <= spec.height()
        && position.z + dims.z <= spec.depth()
}

/// Finds the first admissible pivot × rotation for the carton.
fn place_item(
    item: &Item,
    packed: &[PackedItem],
    current_weight: f64,
    spec: &ContainerSpec,
) -> Option<PackedItem> {
    if current_weight + item.weight() > spec.max_weight() {
        return None;
    }

    let rotations: &[Rotation] = if item.rotation_allowed() {
        &Rotation::ALL
    } else {
        &Rotation::ALL[..1]
    };

    for pivot in pivot_points(packed) {
        for &rotation in rotations {
            let dims = rotation.apply(item.dims());

            if !fits_in_container(&pivot, &dims, spec) {
                continue;
            }

            if packed
                .iter()
                .any(|p| boxes_intersect(&pivot, &dims, &p.position, &p.dims))
            {
                continue;
            }

            if pivot.y > 0.0 && !stability::is_supported(&pivot, &dims, item, packed) {
                continue;
            }

            return Some(PackedItem {
                item: item.clone(),
                position: pivot,
                rotation,
                dims,
            });
        }
    }

    None
}
