//! Six-plane rotation state and its combined matrix
//!
//! In 4D there are 6 basic rotation planes: XY, XZ, XW, YZ, YW, ZW.
//! The combined rotation is built by composing one plane rotation per pair
//! in the fixed order of [`Plane::ALL`]; 4D rotations do not commute, so that
//! order is part of how the shape looks for a given set of angles.

use crate::algebra::{multiply_matrices, plane_rotation};
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// A coordinate plane in 4-space, named by its two axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    XY,
    XZ,
    XW,
    YZ,
    YW,
    ZW,
}

impl Plane {
    /// Composition order of the combined rotation
    pub const ALL: [Plane; 6] = [
        Plane::XY,
        Plane::XZ,
        Plane::XW,
        Plane::YZ,
        Plane::YW,
        Plane::ZW,
    ];

    /// Axis indices (x=0, y=1, z=2, w=3) spanning this plane
    pub const fn axes(self) -> (usize, usize) {
        match self {
            Plane::XY => (0, 1),
            Plane::XZ => (0, 2),
            Plane::XW => (0, 3),
            Plane::YZ => (1, 2),
            Plane::YW => (1, 3),
            Plane::ZW => (2, 3),
        }
    }

    /// Whether the plane involves the fourth axis
    pub const fn is_4d(self) -> bool {
        matches!(self, Plane::XW | Plane::YW | Plane::ZW)
    }
}

/// Rotation angles (radians), one per plane. This is the whole pose of the shape.
///
/// Angles are never wrapped or normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationAngles {
    pub xy: f32,
    pub xz: f32,
    pub xw: f32,
    pub yz: f32,
    pub yw: f32,
    pub zw: f32,
}

/// Incremental change to a [`RotationAngles`], produced by input and animation
pub type AngleDelta = RotationAngles;

impl RotationAngles {
    /// Every angle zero
    pub const ZERO: Self = Self {
        xy: 0.0,
        xz: 0.0,
        xw: 0.0,
        yz: 0.0,
        yw: 0.0,
        zw: 0.0,
    };

    /// The pose shown at startup and after a reset
    pub const DEFAULT_POSE: Self = Self {
        xy: 0.2,
        xz: 0.4,
        xw: 0.7,
        yz: 0.1,
        yw: 0.3,
        zw: 0.0,
    };

    pub fn get(&self, plane: Plane) -> f32 {
        match plane {
            Plane::XY => self.xy,
            Plane::XZ => self.xz,
            Plane::XW => self.xw,
            Plane::YZ => self.yz,
            Plane::YW => self.yw,
            Plane::ZW => self.zw,
        }
    }

    pub fn get_mut(&mut self, plane: Plane) -> &mut f32 {
        match plane {
            Plane::XY => &mut self.xy,
            Plane::XZ => &mut self.xz,
            Plane::XW => &mut self.xw,
            Plane::YZ => &mut self.yz,
            Plane::YW => &mut self.yw,
            Plane::ZW => &mut self.zw,
        }
    }

    /// Combined rotation matrix: `I · R_xy · R_xz · R_xw · R_yz · R_yw · R_zw`
    pub fn matrix(&self) -> Mat4 {
        Plane::ALL.iter().fold(Mat4::IDENTITY, |acc, &plane| {
            let (i, j) = plane.axes();
            multiply_matrices(&acc, &plane_rotation(i, j, self.get(plane)))
        })
    }

    /// Overwrite only the angles present in `patch`
    pub fn apply_patch(&mut self, patch: &AnglesPatch) {
        for plane in Plane::ALL {
            if let Some(value) = patch.get(plane) {
                *self.get_mut(plane) = value;
            }
        }
    }
}

impl std::ops::AddAssign for RotationAngles {
    fn add_assign(&mut self, rhs: Self) {
        for plane in Plane::ALL {
            *self.get_mut(plane) += rhs.get(plane);
        }
    }
}

/// Partial angle update; `None` fields are left as they are
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnglesPatch {
    pub xy: Option<f32>,
    pub xz: Option<f32>,
    pub xw: Option<f32>,
    pub yz: Option<f32>,
    pub yw: Option<f32>,
    pub zw: Option<f32>,
}

impl AnglesPatch {
    pub fn get(&self, plane: Plane) -> Option<f32> {
        match plane {
            Plane::XY => self.xy,
            Plane::XZ => self.xz,
            Plane::XW => self.xw,
            Plane::YZ => self.yz,
            Plane::YW => self.yw,
            Plane::ZW => self.zw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::apply_matrix;
    use glam::Vec4;
    use std::f32::consts::TAU;

    #[test]
    fn zero_angles_give_identity() {
        assert!(RotationAngles::ZERO.matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn full_turns_give_identity() {
        for turns in [1.0_f32, 2.0, -1.0, 3.0] {
            let t = turns * TAU;
            let angles = RotationAngles {
                xy: t,
                xz: -t,
                xw: 2.0 * t,
                yz: t,
                yw: t,
                zw: -2.0 * t,
            };
            assert!(
                angles.matrix().abs_diff_eq(Mat4::IDENTITY, 1e-4),
                "turns = {turns}: {:?}",
                angles.matrix()
            );
        }
    }

    #[test]
    fn matrix_preserves_length() {
        let m = RotationAngles::DEFAULT_POSE.matrix();
        let v = Vec4::new(1.0, -1.0, 1.0, -1.0);
        assert!((apply_matrix(&m, v).length() - v.length()).abs() < 1e-5);
    }

    #[test]
    fn composition_order_is_xy_first() {
        let angles = RotationAngles {
            xy: 0.4,
            zw: 0.9,
            xw: -0.3,
            ..RotationAngles::ZERO
        };
        let expected = plane_rotation(0, 1, 0.4)
            * plane_rotation(0, 3, -0.3)
            * plane_rotation(2, 3, 0.9);
        assert!(angles.matrix().abs_diff_eq(expected, 1e-6));

        let reversed = plane_rotation(2, 3, 0.9)
            * plane_rotation(0, 3, -0.3)
            * plane_rotation(0, 1, 0.4);
        assert!(!angles.matrix().abs_diff_eq(reversed, 1e-3));
    }

    #[test]
    fn patch_overwrites_only_given_fields() {
        let mut angles = RotationAngles::DEFAULT_POSE;
        angles.apply_patch(&AnglesPatch {
            xw: Some(1.5),
            zw: Some(-0.25),
            ..AnglesPatch::default()
        });
        assert_eq!(angles.xw, 1.5);
        assert_eq!(angles.zw, -0.25);
        assert_eq!(angles.xy, RotationAngles::DEFAULT_POSE.xy);
        assert_eq!(angles.yw, RotationAngles::DEFAULT_POSE.yw);
    }

    #[test]
    fn add_assign_sums_per_plane() {
        let mut angles = RotationAngles::DEFAULT_POSE;
        angles += RotationAngles {
            yz: 1.0,
            ..RotationAngles::ZERO
        };
        assert!((angles.yz - 1.1).abs() < 1e-6);
        assert_eq!(angles.xy, 0.2);
    }

    #[test]
    fn four_d_planes() {
        let four_d: Vec<Plane> = Plane::ALL.into_iter().filter(|p| p.is_4d()).collect();
        assert_eq!(four_d, vec![Plane::XW, Plane::YW, Plane::ZW]);
    }
}
