//! Per-frame rotation driver

use crate::rotation::{AngleDelta, Plane, RotationAngles};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Longest step a single frame may advance, in seconds
pub const MAX_FRAME_STEP: f32 = 0.1;

/// Per-plane multipliers so the six angles drift at distinct rates
const RATE: RotationAngles = RotationAngles {
    xy: 0.8,
    xz: 0.6,
    xw: 0.7,
    yz: 0.5,
    yw: 0.5,
    zw: 0.4,
};

/// Auto-rotation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub auto_rotate: bool,
    /// Hold XW/YW/ZW still so only the 3D spin animates
    pub lock_4d: bool,
    /// Angular speed of the XY/XZ/YZ planes
    pub speed_3d: f32,
    /// Angular speed of the XW/YW/ZW planes
    pub speed_4d: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            lock_4d: false,
            speed_3d: 0.8,
            speed_4d: 0.35,
        }
    }
}

/// What a frame should do.
///
/// The shell redraws on every frame it is given, so `Redraw` only means no
/// angle change; `Advance` additionally asks for a follow-up frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameUpdate {
    /// Add this to the angles, then draw
    Advance(AngleDelta),
    /// Angles are driven by the user; just draw the current state
    Redraw,
}

/// Compute the frame's update for `elapsed` seconds
pub fn tick(settings: &AnimationSettings, elapsed: f32) -> FrameUpdate {
    if !settings.auto_rotate {
        return FrameUpdate::Redraw;
    }

    let mut delta = RotationAngles::ZERO;
    for plane in Plane::ALL {
        let speed = if plane.is_4d() {
            if settings.lock_4d {
                continue;
            }
            settings.speed_4d
        } else {
            settings.speed_3d
        };
        *delta.get_mut(plane) = speed * elapsed * RATE.get(plane);
    }
    FrameUpdate::Advance(delta)
}

/// Measures time between frames
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_STEP`]
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        dt.as_secs_f32().min(MAX_FRAME_STEP)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn advance(settings: &AnimationSettings, dt: f32) -> AngleDelta {
        match tick(settings, dt) {
            FrameUpdate::Advance(delta) => delta,
            FrameUpdate::Redraw => panic!("expected Advance"),
        }
    }

    #[test]
    fn paused_frames_only_redraw() {
        let settings = AnimationSettings {
            auto_rotate: false,
            ..AnimationSettings::default()
        };
        assert_eq!(tick(&settings, 0.016), FrameUpdate::Redraw);
    }

    #[test]
    fn advances_each_plane_at_its_own_rate() {
        let settings = AnimationSettings::default();
        let d = advance(&settings, 0.5);
        assert!((d.xy - 0.8 * 0.5 * 0.8).abs() < 1e-6);
        assert!((d.xz - 0.8 * 0.5 * 0.6).abs() < 1e-6);
        assert!((d.yz - 0.8 * 0.5 * 0.5).abs() < 1e-6);
        assert!((d.xw - 0.35 * 0.5 * 0.7).abs() < 1e-6);
        assert!((d.yw - 0.35 * 0.5 * 0.5).abs() < 1e-6);
        assert!((d.zw - 0.35 * 0.5 * 0.4).abs() < 1e-6);
    }

    #[test]
    fn lock_freezes_4d_planes() {
        let settings = AnimationSettings {
            lock_4d: true,
            speed_4d: 2.0,
            ..AnimationSettings::default()
        };
        let d = advance(&settings, 1.0);
        assert_eq!((d.xw, d.yw, d.zw), (0.0, 0.0, 0.0));
        assert!(d.xy > 0.0 && d.xz > 0.0 && d.yz > 0.0);
    }

    #[test]
    fn zero_elapsed_is_a_no_op_delta() {
        let d = advance(&AnimationSettings::default(), 0.0);
        assert_eq!(d, RotationAngles::ZERO);
    }

    #[test]
    fn clock_caps_long_frames() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let dt = clock.tick(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
        assert_eq!(clock.tick(t0 + Duration::from_secs(5)), MAX_FRAME_STEP);
    }

    #[test]
    fn clock_tolerates_time_going_backwards() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(t0);
        assert_eq!(clock.tick(t0 - Duration::from_millis(500)), 0.0);
    }
}
