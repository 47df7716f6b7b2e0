//! Rotation enumeration and axis-aligned box tests.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for flush stacked surfaces, in centimeters.
pub const SURFACE_EPS: f64 = 0.1;

/// The six axis-aligned orientations of a carton.
///
/// The letters name the source axes mapped onto (width, height, depth);
/// [`Rotation::Whd`] is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// (w, h, d) — identity.
    #[default]
    Whd,
    /// (h, w, d) — 90° around the depth axis.
    Hwd,
    /// (h, d, w) — depth up.
    Hdw,
    /// (d, h, w) — 90° around the height axis.
    Dhw,
    /// (d, w, h) — width up, rolled.
    Dwh,
    /// (w, d, h) — width up.
    Wdh,
}

impl Rotation {
    /// All rotations in placement trial order.
    pub const ALL: [Rotation; 6] = [
        Rotation::Whd,
        Rotation::Hwd,
        Rotation::Hdw,
        Rotation::Dhw,
        Rotation::Dwh,
        Rotation::Wdh,
    ];

    /// Applies the rotation to (width, height, depth) dimensions.
    pub fn apply(self, dims: &Vector3<f64>) -> Vector3<f64> {
        let (w, h, d) = (dims.x, dims.y, dims.z);
        match self {
            Rotation::Whd => Vector3::new(w, h, d),
            Rotation::Hwd => Vector3::new(h, w, d),
            Rotation::Hdw => Vector3::new(h, d, w),
            Rotation::Dhw => Vector3::new(d, h, w),
            Rotation::Dwh => Vector3::new(d, w, h),
            Rotation::Wdh => Vector3::new(w, d, h),
        }
    }
}

/// Clamped 1-D overlap length of `[a0, a1]` and `[b0, b1]`.
pub fn overlap_1d(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Strict axis-aligned box intersection.
///
/// Boxes intersect iff they overlap on all three axes with the half-open
/// test `a0 < b1 && b0 < a1`; touching faces do not intersect.
pub fn boxes_intersect(
    a_pos: &Vector3<f64>,
    a_dims: &Vector3<f64>,
    b_pos: &Vector3<f64>,
    b_dims: &Vector3<f64>,
) -> bool {
    a_pos.x < b_pos.x + b_dims.x
        && b_pos.x < a_pos.x + a_dims.x
        && a_pos.y < b_pos.y + b_dims.y
        && b_pos.y < a_pos.y + a_dims.y
        && a_pos.z < b_pos.z + b_dims.z
        && b_pos.z < a_pos.z + a_dims.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotations_permute_dimensions() {
        let dims = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(Rotation::Whd.apply(&dims), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Rotation::Hwd.apply(&dims), Vector3::new(2.0, 1.0, 3.0));
        assert_eq!(Rotation::Hdw.apply(&dims), Vector3::new(2.0, 3.0, 1.0));
        assert_eq!(Rotation::Dhw.apply(&dims), Vector3::new(3.0, 2.0, 1.0));
        assert_eq!(Rotation::Dwh.apply(&dims), Vector3::new(3.0, 1.0, 2.0));
        assert_eq!(Rotation::Wdh.apply(&dims), Vector3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn rotation_preserves_volume() {
        let dims = Vector3::new(4.0, 5.0, 6.0);
        for rotation in Rotation::ALL {
            let r = rotation.apply(&dims);
            assert_relative_eq!(r.x * r.y * r.z, 120.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn touching_faces_do_not_intersect() {
        let dims = Vector3::new(10.0, 10.0, 10.0);
        let a = Vector3::new(0.0, 0.0, 0.0);

        assert!(!boxes_intersect(
            &a,
            &dims,
            &Vector3::new(10.0, 0.0, 0.0),
            &dims
        ));
        assert!(boxes_intersect(
            &a,
            &dims,
            &Vector3::new(9.999, 0.0, 0.0),
            &dims
        ));
        assert!(boxes_intersect(
            &a,
            &dims,
            &Vector3::new(5.0, 5.0, 5.0),
            &dims
        ));
        assert!(!boxes_intersect(
            &a,
            &dims,
            &Vector3::new(0.0, 0.0, 20.0),
            &dims
        ));
    }

    #[test]
    fn overlap_clamps_to_zero() {
        assert_relative_eq!(overlap_1d(0.0, 10.0, 5.0, 15.0), 5.0);
        assert_relative_eq!(overlap_1d(0.0, 10.0, 10.0, 20.0), 0.0);
        assert_relative_eq!(overlap_1d(0.0, 10.0, 12.0, 20.0), 0.0);
        assert_relative_eq!(overlap_1d(2.0, 8.0, 0.0, 10.0), 6.0);
    }
}
