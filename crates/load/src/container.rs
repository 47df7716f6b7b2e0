//! Container template and working specification.

use nalgebra::Vector3;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Volumetric clearance factor applied to the template.
///
/// Each linear dimension is scaled by the cube root, reserving 0.2 % of the
/// container volume so cartons never sit flush against the walls.
pub const CLEARANCE_FACTOR: f64 = 0.998;

/// Caller-facing container dimensions and weight capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerTemplate {
    /// Interior width in cm.
    pub width: f64,
    /// Interior height in cm.
    pub height: f64,
    /// Interior depth in cm.
    pub depth: f64,
    /// Maximum payload in kg.
    pub max_weight: f64,
}

impl ContainerTemplate {
    /// Creates a new template.
    pub fn new(width: f64, height: f64, depth: f64, max_weight: f64) -> Self {
        Self {
            width,
            height,
            depth,
            max_weight,
        }
    }

    /// Checks the template for well-formedness.
    pub fn validate(&self) -> Result<()> {
        let dims = [self.width, self.height, self.depth];
        if !dims.iter().all(|d| d.is_finite() && *d > 0.0) {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive and finite".into(),
            ));
        }

        if !(self.max_weight > 0.0) || !self.max_weight.is_finite() {
            return Err(Error::InvalidContainer(
                "Maximum weight must be positive and finite".into(),
            ));
        }

        Ok(())
    }
}

/// Working container used by the placement engine.
///
/// Dimensions are the template's shrunk by [`CLEARANCE_FACTOR`]; the target
/// volume normalizes the efficiency metric and is independent of the shrunk
/// interior volume.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSpec {
    dims: Vector3<f64>,
    max_weight: f64,
    target_volume: f64,
}

impl ContainerSpec {
    /// Builds the working spec from a template and a target volume in m³.
    pub fn new(template: &ContainerTemplate, target_volume_cbm: f64) -> Self {
        let scale = CLEARANCE_FACTOR.cbrt();
        Self {
            dims: Vector3::new(
                template.width * scale,
                template.height * scale,
                template.depth * scale,
            ),
            max_weight: template.max_weight,
            target_volume: target_volume_cbm * 1e6,
        }
    }

    /// Returns the shrunk dimensions (width, height, depth).
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the shrunk width.
    pub fn width(&self) -> f64 {
        self.dims.x
    }

    /// Returns the shrunk height.
    pub fn height(&self) -> f64 {
        self.dims.y
    }

    /// Returns the shrunk depth.
    pub fn depth(&self) -> f64 {
        self.dims.z
    }

    /// Returns the maximum payload in kg.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the efficiency-normalization volume in cm³.
    pub fn target_volume(&self) -> f64 {
        self.target_volume
    }

    /// Returns the efficiency-normalization volume in m³.
    pub fn target_cbm(&self) -> f64 {
        self.target_volume / 1e6
    }
}
