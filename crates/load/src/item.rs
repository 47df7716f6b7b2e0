//! Carton model.

use nalgebra::Vector3;
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound of the fragility scale (most fragile).
pub const FRAGILITY_MIN: u8 = 1;
/// Upper bound of the fragility scale (toughest).
pub const FRAGILITY_MAX: u8 = 5;

/// A rectangular carton to be loaded.
///
/// Dimensions are in centimeters, weight in kilograms. The display name
/// denotes the SKU and may be shared by several cartons; the id is unique.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Stable identifier.
    id: String,

    /// Display name (SKU label).
    name: String,

    /// Dimensions (width, height, depth).
    dims: Vector3<f64>,

    /// Weight in kilograms.
    weight: f64,

    /// Whether the carton may be rotated into any of the six orientations.
    allow_rotation: bool,

    /// Fragility on a 1..=5 scale; higher cartons can bear more load.
    fragility: u8,
}

impl Item {
    /// Creates a new carton with the given id, dimensions and weight.
    ///
    /// The display name defaults to the id; rotation is allowed and the
    /// fragility sits at the middle of the scale.
    pub fn new(id: impl Into<String>, width: f64, height: f64, depth: f64, weight: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            dims: Vector3::new(width, height, depth),
            weight,
            allow_rotation: true,
            fragility: 3,
        }
    }

    /// Sets the display name (SKU label).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the carton may be rotated.
    pub fn with_rotation_allowed(mut self, allowed: bool) -> Self {
        self.allow_rotation = allowed;
        self
    }

    /// Sets the fragility, clamped to the 1..=5 scale.
    pub fn with_fragility(mut self, fragility: u8) -> Self {
        self.fragility = fragility.clamp(FRAGILITY_MIN, FRAGILITY_MAX);
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dims(&self) -> &Vector3<f64> {
        &self.dims
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dims.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dims.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dims.z
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns whether rotation is allowed.
    pub fn rotation_allowed(&self) -> bool {
        self.allow_rotation
    }

    /// Returns the fragility.
    pub fn fragility(&self) -> u8 {
        self.fragility
    }

    /// Volume in cm³, invariant under rotation.
    pub fn volume(&self) -> f64 {
        self.dims.x * self.dims.y * self.dims.z
    }

    /// Unrotated footprint (width × depth) in cm².
    pub fn footprint(&self) -> f64 {
        self.dims.x * self.dims.z
    }

    /// Weight per unit volume in kg/cm³.
    pub fn density(&self) -> f64 {
        self.weight / self.volume()
    }

    /// Checks the carton for well-formedness.
    pub fn validate(&self) -> Result<()> {
        if !(self.dims.x > 0.0 && self.dims.y > 0.0 && self.dims.z > 0.0)
            || !self.dims.iter().all(|d| d.is_finite())
        {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive and finite",
                self.id
            )));
        }

        if !(self.weight > 0.0) || !self.weight.is_finite() {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' must be positive and finite",
                self.id
            )));
        }

        if !(FRAGILITY_MIN..=FRAGILITY_MAX).contains(&self.fragility) {
            return Err(Error::InvalidItem(format!(
                "Fragility for '{}' must lie in {}..={}",
                self.id, FRAGILITY_MIN, FRAGILITY_MAX
            )));
        }

        Ok(())
    }
}
