//! 4D → 3D → 2D projection
//!
//! Each step is either a perspective divide against a camera sitting on the
//! dropped axis at distance `d`, or orthographic (the axis is simply dropped):
//!
//! ```text
//! k4 = d4 / max(0.1, d4 - w)      (x, y, z, w) -> (x, y, z) · k4
//! k3 = d3 / max(0.1, d3 - z)      (x, y, z)    -> (x, y) · k3 · scale + center
//! ```
//!
//! Points at or behind the camera get the clamped gap instead of a division
//! by zero or a sign flip, so output stays finite.

use crate::algebra::apply_matrix;
use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Smallest denominator either perspective divide will use
pub const MIN_CAMERA_GAP: f32 = 0.1;

/// Camera and screen parameters for both projection steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Camera distance along w for the 4D → 3D step
    pub distance_4d: f32,
    /// Camera distance along z for the 3D → 2D step
    pub distance_3d: f32,
    pub perspective_4d: bool,
    pub perspective_3d: bool,
    /// Pixels per projected unit
    pub scale: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            distance_4d: 3.2,
            distance_3d: 3.6,
            perspective_4d: true,
            perspective_3d: true,
            scale: 220.0,
        }
    }
}

/// A vertex after rotation and both projections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    /// Position on the drawing surface, in pixels
    pub screen: Vec2,
    /// z after the 4D → 3D step, before the 3D → 2D divide; used only for shading
    pub depth: f32,
}

/// Distance from a coordinate to the camera plane, floored at [`MIN_CAMERA_GAP`]
#[inline]
pub fn camera_gap(distance: f32, coord: f32) -> f32 {
    (distance - coord).max(MIN_CAMERA_GAP)
}

/// Perspective factor `d / gap`, or `1` for orthographic
#[inline]
pub fn perspective_factor(enabled: bool, distance: f32, coord: f32) -> f32 {
    if enabled {
        distance / camera_gap(distance, coord)
    } else {
        1.0
    }
}

/// 4D → 3D step for an already rotated point
pub fn project_to_3d(p: Vec4, config: &ProjectionConfig) -> Vec3 {
    let k4 = perspective_factor(config.perspective_4d, config.distance_4d, p.w);
    p.truncate() * k4
}

/// 3D → 2D step without scale or centering
pub fn project_to_plane(p: Vec3, config: &ProjectionConfig) -> Vec2 {
    let k3 = perspective_factor(config.perspective_3d, config.distance_3d, p.z);
    p.truncate() * k3
}

/// Rotate and project every vertex onto a `width × height` surface
pub fn project(
    vertices: &[Vec4],
    rotation: &Mat4,
    config: &ProjectionConfig,
    width: f32,
    height: f32,
) -> Vec<ProjectedVertex> {
    let center = Vec2::new(width / 2.0, height / 2.0);
    vertices
        .iter()
        .map(|&v| {
            let p3 = project_to_3d(apply_matrix(rotation, v), config);
            ProjectedVertex {
                screen: project_to_plane(p3, config) * config.scale + center,
                depth: p3.z,
            }
        })
        .collect()
}

/// Same pipeline as [`project`] but without `scale` and without centering
pub fn project_unscaled(
    vertices: &[Vec4],
    rotation: &Mat4,
    config: &ProjectionConfig,
) -> Vec<Vec2> {
    vertices
        .iter()
        .map(|&v| project_to_plane(project_to_3d(apply_matrix(rotation, v), config), config))
        .collect()
}

/// Axis-aligned 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    /// Bounding box of `points`, or `None` when empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }
}
