//! Startup configuration
//!
//! An optional JSON file passed with `--config <path>`. Every field has a
//! default, so a file only needs the values it wants to change:
//!
//! ```json
//! { "window": { "width": 1600 }, "view": { "projection": { "scale": 300 } } }
//! ```

use crate::view::ViewState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Slider ranges the UI layer enforces; the geometry core trusts these
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const SPEED: RangeInclusive<f32> = 0.0..=2.0;
    pub const SCALE: RangeInclusive<f32> = 80.0..=1200.0;
    pub const CAMERA_DISTANCE: RangeInclusive<f32> = 2.0..=8.0;
    pub const EDGE_THICKNESS: RangeInclusive<f32> = 0.6..=5.0;
    pub const VERTEX_SIZE: RangeInclusive<f32> = 0.0..=6.0;
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Tesseract Lab".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub window: WindowSettings,
    pub view: ViewState,
}

impl LabConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load `--config <path>` if given; any failure is logged and defaults are used
    pub fn from_args() -> Self {
        match config_path_from_args(std::env::args()) {
            Some(path) => match Self::load(&path) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(err) => {
                    log::warn!("{err}; using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Clamp every user-tunable value into its slider range
    pub fn sanitized(mut self) -> Self {
        let clamp = |v: f32, r: &std::ops::RangeInclusive<f32>| v.clamp(*r.start(), *r.end());

        let animation = &mut self.view.animation;
        animation.speed_3d = clamp(animation.speed_3d, &ranges::SPEED);
        animation.speed_4d = clamp(animation.speed_4d, &ranges::SPEED);

        let projection = &mut self.view.projection;
        projection.scale = clamp(projection.scale, &ranges::SCALE);
        projection.distance_4d = clamp(projection.distance_4d, &ranges::CAMERA_DISTANCE);
        projection.distance_3d = clamp(projection.distance_3d, &ranges::CAMERA_DISTANCE);

        let style = &mut self.view.style;
        style.edge_thickness = clamp(style.edge_thickness, &ranges::EDGE_THICKNESS);
        style.vertex_size = clamp(style.vertex_size, &ranges::VERTEX_SIZE);

        self.window.width = self.window.width.max(1);
        self.window.height = self.window.height.max(1);
        self
    }
}

/// Value following `--config` in `args`, if any
pub fn config_path_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .skip_while(|a| a != "--config")
        .nth(1)
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewMode;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn config_flag_is_optional() {
        assert_eq!(config_path_from_args(args(&["tesseract_lab"])), None);
        assert_eq!(
            config_path_from_args(args(&["tesseract_lab", "--config", "lab.json"])),
            Some(PathBuf::from("lab.json"))
        );
        assert_eq!(config_path_from_args(args(&["tesseract_lab", "--config"])), None);
    }

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(LabConfig::from_json("{}").unwrap(), LabConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = LabConfig::from_json(
            r#"{
                "window": { "width": 1600 },
                "view": {
                    "angles": { "zw": 0.5 },
                    "projection": { "perspective_3d": false },
                    "mode": "cube_in_cube"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1600);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.view.angles.zw, 0.5);
        assert_eq!(config.view.angles.xy, 0.0);
        assert!(!config.view.projection.perspective_3d);
        assert_eq!(config.view.projection.distance_4d, 3.2);
        assert_eq!(config.view.mode, ViewMode::CubeInCube);
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let mut state = ViewState::default();
        state.enter_cube_in_cube();
        let json = serde_json::to_string(&state).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(LabConfig::from_json("{ \"window\": 3 }").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LabConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("here.json"));
    }

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let mut config = LabConfig::default();
        config.view.animation.speed_3d = 9.0;
        config.view.animation.speed_4d = -1.0;
        config.view.projection.scale = 5000.0;
        config.view.projection.distance_4d = 0.5;
        config.view.style.vertex_size = 10.0;
        config.window.width = 0;
        let config = config.sanitized();
        assert_eq!(config.view.animation.speed_3d, 2.0);
        assert_eq!(config.view.animation.speed_4d, 0.0);
        assert_eq!(config.view.projection.scale, 1200.0);
        assert_eq!(config.view.projection.distance_4d, 2.0);
        assert_eq!(config.view.style.vertex_size, 6.0);
        assert_eq!(config.window.width, 1);
    }
}
