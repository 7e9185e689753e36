//! Viewer state and the operations the UI layer drives.
//!
//! [`ViewState`] is the single mutable record of the viewer: pose, projection,
//! animation settings, style and mode. It is plain data and serializable so
//! a startup config can carry it. [`TesseractView`] pairs it with the
//! immutable polytope and the gesture state machine.

use crate::animation::{tick, AnimationSettings, FrameUpdate};
use crate::input::{wheel_scale, DragController, GestureEvent};
use crate::polytope::Tesseract;
use crate::projection::{project, project_unscaled, Bounds2, ProjectedVertex, ProjectionConfig};
use crate::render::{draw, Style, Surface};
use crate::rotation::{AnglesPatch, RotationAngles};
use serde::{Deserialize, Serialize};

/// Fraction of the surface the shape should span after fit-to-view
pub const FIT_FRACTION: f32 = 0.75;

/// Range fit-to-view keeps the scale in
pub const FIT_SCALE_MIN: f32 = 60.0;
pub const FIT_SCALE_MAX: f32 = 1400.0;

/// 4D camera distance used by the cube-in-cube preset
pub const CUBE_IN_CUBE_DISTANCE_4D: f32 = 3.0;

/// Scale used by the cube-in-cube preset
pub const CUBE_IN_CUBE_SCALE: f32 = 260.0;

/// Camera/pose preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Both projections perspective, 4D rotation free
    #[default]
    Standard,
    /// Schlegel-style view: one cube nested in another
    CubeInCube,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Standard => "Standard",
            ViewMode::CubeInCube => "Cube-in-cube",
        }
    }
}

/// Everything the viewer can change at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub angles: RotationAngles,
    pub projection: ProjectionConfig,
    pub animation: AnimationSettings,
    pub style: Style,
    pub mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            angles: RotationAngles::DEFAULT_POSE,
            projection: ProjectionConfig::default(),
            animation: AnimationSettings::default(),
            style: Style::default(),
            mode: ViewMode::Standard,
        }
    }
}

impl ViewState {
    /// Overwrite the angles named in `patch`
    pub fn set_angles(&mut self, patch: AnglesPatch) {
        self.angles.apply_patch(&patch);
    }

    /// Back to the default pose and projection. Speeds and style are kept.
    pub fn reset_pose(&mut self) {
        self.angles = RotationAngles::DEFAULT_POSE;
        self.projection = ProjectionConfig::default();
        self.animation.lock_4d = false;
        self.mode = ViewMode::Standard;
        log::info!("pose reset");
    }

    /// Free 4D rotation with both perspective steps; the pose is left alone
    pub fn enter_standard(&mut self) {
        self.mode = ViewMode::Standard;
        self.animation.lock_4d = false;
        self.projection.perspective_3d = true;
        self.projection.perspective_4d = true;
        log::info!("mode: {}", self.mode.label());
    }

    /// Zero pose, 4D perspective only, 4D rotation locked
    pub fn enter_cube_in_cube(&mut self) {
        self.mode = ViewMode::CubeInCube;
        self.angles = RotationAngles::ZERO;
        self.projection.perspective_4d = true;
        self.projection.perspective_3d = false;
        self.projection.distance_4d = CUBE_IN_CUBE_DISTANCE_4D;
        self.projection.scale = CUBE_IN_CUBE_SCALE;
        self.animation.lock_4d = true;
        log::info!("mode: {}", self.mode.label());
    }

    /// Project the tesseract onto a `width × height` surface
    pub fn project(&self, tesseract: &Tesseract, width: f32, height: f32) -> Vec<ProjectedVertex> {
        project(
            &tesseract.vertices,
            &self.angles.matrix(),
            &self.projection,
            width,
            height,
        )
    }

    /// Draw the current state onto `surface`
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, tesseract: &Tesseract) {
        let projected = self.project(tesseract, surface.width(), surface.height());
        draw(surface, tesseract, &projected, &self.style);
    }

    /// Pick the scale that makes the current pose span [`FIT_FRACTION`] of
    /// the surface along its tighter axis, store it and return it
    pub fn fit_to_view(&mut self, tesseract: &Tesseract, width: f32, height: f32) -> f32 {
        let raw = project_unscaled(&tesseract.vertices, &self.angles.matrix(), &self.projection);
        let Some(bounds) = Bounds2::from_points(raw) else {
            return self.projection.scale;
        };
        let extent = bounds.extent();
        let axis_scale = |size: f32, span: f32| {
            if span > f32::EPSILON {
                size * FIT_FRACTION / span
            } else {
                f32::INFINITY
            }
        };
        let fitted = axis_scale(width, extent.x)
            .min(axis_scale(height, extent.y))
            .clamp(FIT_SCALE_MIN, FIT_SCALE_MAX);
        log::debug!(
            "fit to {width}x{height}: extent {:.3}x{:.3} -> scale {fitted:.1}",
            extent.x,
            extent.y
        );
        self.projection.scale = fitted;
        fitted
    }

    pub fn apply_wheel(&mut self, delta_y: f32) {
        self.projection.scale = wheel_scale(self.projection.scale, delta_y);
    }

    /// Run the animation driver for one frame
    pub fn advance(&mut self, elapsed: f32) -> FrameUpdate {
        let update = tick(&self.animation, elapsed);
        if let FrameUpdate::Advance(delta) = update {
            self.angles += delta;
        }
        update
    }
}

/// Viewer: state plus the polytope and the active gesture
#[derive(Debug, Clone, Default)]
pub struct TesseractView {
    pub state: ViewState,
    tesseract: Tesseract,
    drag: DragController,
}

impl TesseractView {
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            tesseract: Tesseract::new(),
            drag: DragController::new(),
        }
    }

    pub fn tesseract(&self) -> &Tesseract {
        &self.tesseract
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.state.draw(surface, &self.tesseract);
    }

    pub fn project(&self, width: f32, height: f32) -> Vec<ProjectedVertex> {
        self.state.project(&self.tesseract, width, height)
    }

    pub fn fit_to_view(&mut self, width: f32, height: f32) -> f32 {
        self.state.fit_to_view(&self.tesseract, width, height)
    }

    /// Feed a pointer/touch gesture; drags rotate the shape
    pub fn apply_gesture(&mut self, event: GestureEvent) {
        if let Some(delta) = self.drag.handle(event) {
            self.state.angles += delta;
        }
    }

    pub fn apply_wheel(&mut self, delta_y: f32) {
        self.state.apply_wheel(delta_y);
    }

    pub fn advance(&mut self, elapsed: f32) -> FrameUpdate {
        self.state.advance(elapsed)
    }
}
