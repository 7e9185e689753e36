//! Pointer gestures and wheel zoom.
//!
//! A drag nudges two rotation angles at a time. Which two is chosen by the
//! modifier held when the gesture *starts*; it stays latched until release.

use crate::rotation::{AngleDelta, RotationAngles};
use glam::Vec2;

/// Radians of rotation per pixel of drag
pub const DRAG_SENSITIVITY: f32 = 0.0075;

/// Relative scale change per wheel notch
pub const WHEEL_STEP: f32 = 0.08;

/// Range the wheel keeps the scale in
pub const WHEEL_SCALE_MIN: f32 = 80.0;
pub const WHEEL_SCALE_MAX: f32 = 1200.0;

/// Modifier latched at gesture start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    /// Drag rotates XY / YZ
    #[default]
    None,
    /// Drag rotates XW / YW
    AltOrCtrl,
    /// Drag rotates XZ / YZ
    Shift,
}

impl Modifier {
    /// Alt/Ctrl wins over Shift when both are held
    pub fn from_keys(alt: bool, ctrl: bool, shift: bool) -> Self {
        if alt || ctrl {
            Self::AltOrCtrl
        } else if shift {
            Self::Shift
        } else {
            Self::None
        }
    }

    /// Angle change for a drag of `(dx, dy)` pixels
    pub fn delta(self, d: Vec2) -> AngleDelta {
        let (dx, dy) = (d.x * DRAG_SENSITIVITY, d.y * DRAG_SENSITIVITY);
        let zero = RotationAngles::ZERO;
        match self {
            Self::None => AngleDelta { xy: dx, yz: dy, ..zero },
            Self::AltOrCtrl => AngleDelta { xw: dx, yw: dy, ..zero },
            Self::Shift => AngleDelta { xz: dx, yz: dy, ..zero },
        }
    }
}

/// Pointer or touch gesture, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start { position: Vec2, modifier: Modifier },
    Move { position: Vec2 },
    End,
}

/// Active gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last: Vec2, modifier: Modifier },
}

/// Gesture reducer: feed it events, apply the returned deltas
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Advance the state machine; returns the angle change to apply, if any
    pub fn handle(&mut self, event: GestureEvent) -> Option<AngleDelta> {
        match (event, &mut self.state) {
            (GestureEvent::Start { position, modifier }, state) => {
                *state = DragState::Dragging {
                    last: position,
                    modifier,
                };
                None
            }
            (GestureEvent::Move { position }, DragState::Dragging { last, modifier }) => {
                let d = position - *last;
                *last = position;
                Some(modifier.delta(d))
            }
            (GestureEvent::Move { .. }, DragState::Idle) => None,
            (GestureEvent::End, state) => {
                *state = DragState::Idle;
                None
            }
        }
    }
}

/// Scale after one wheel event; only the sign of `delta_y` matters
pub fn wheel_scale(scale: f32, delta_y: f32) -> f32 {
    let sign = if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    };
    (scale * (1.0 - sign * WHEEL_STEP)).clamp(WHEEL_SCALE_MIN, WHEEL_SCALE_MAX)
}
