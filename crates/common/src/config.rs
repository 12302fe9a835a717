//! Demo configuration.
//!
//! Every field has a default matching the stock demo, so a config file
//! only needs to name what it changes:
//! ```text
//! { "mesh": "triangle", "camera": { "move_mode": "view_relative" } }
//! ```

use crate::types::{LookMode, MeshKind, MoveMode};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// RGBA clear color.
    pub clear_color: [f64; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "quadview".into(),
            width: 640,
            height: 480,
            clear_color: [0.2, 0.0, 0.1, 1.0],
        }
    }
}

/// Initial camera state and control tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub view_direction: Vec3,
    pub up: Vec3,
    /// Displacement per frame while a move key is held.
    pub move_speed: f32,
    /// Degrees of rotation per pixel of pointer motion.
    pub sensitivity: f32,
    pub move_mode: MoveMode,
    pub look_mode: LookMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            view_direction: Vec3::NEG_Z,
            up: Vec3::Y,
            move_speed: 0.1,
            sensitivity: 0.1,
            move_mode: MoveMode::default(),
            look_mode: LookMode::default(),
        }
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub mesh: MeshKind,
    pub frame: FrameConfig,
    /// Directory holding `vertex.wgsl` and `fragment.wgsl`. Built-in shaders when `None`.
    pub shader_dir: Option<PathBuf>,
}

/// Frame loop tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub target_fps: u32,
    /// Radians added to the model's spin angle every frame.
    pub spin_step: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            spin_step: 0.01,
        }
    }
}

impl DemoConfig {
    /// Read a JSON config file. Fields it omits keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the frame loop or projection cannot work with.
    ///
    /// Camera vectors are not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.frame.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".into()));
        }
        let p = &self.projection;
        if !(p.near > 0.0 && p.far > p.near) {
            return Err(ConfigError::Invalid(format!(
                "projection planes must satisfy 0 < near < far, got near={} far={}",
                p.near, p.far
            )));
        }
        if !(p.fov_degrees > 0.0 && p.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees must be in (0, 180), got {}",
                p.fov_degrees
            )));
        }
        Ok(())
    }

    /// Whole-millisecond frame budget, `1000 / target_fps`.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame.target_fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let c = DemoConfig::default();
        assert_eq!((c.window.width, c.window.height), (640, 480));
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(c.camera.view_direction, Vec3::NEG_Z);
        assert_eq!(c.camera.up, Vec3::Y);
        assert_eq!(c.camera.move_speed, 0.1);
        assert_eq!(c.camera.sensitivity, 0.1);
        assert_eq!(c.projection.fov_degrees, 45.0);
        assert_eq!(c.mesh, MeshKind::Quad);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn frame_budget_uses_integer_milliseconds() {
        let c = DemoConfig::default();
        assert_eq!(c.frame_budget(), Duration::from_millis(16));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = DemoConfig::from_json(
            r#"{ "mesh": "triangle", "camera": { "move_mode": "view_relative" } }"#,
        )
        .unwrap();
        assert_eq!(c.mesh, MeshKind::Triangle);
        assert_eq!(c.camera.move_mode, MoveMode::ViewRelative);
        assert_eq!(c.camera.look_mode, LookMode::YawOnly);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(c.window, WindowConfig::default());
    }

    #[test]
    fn camera_vectors_are_not_validated() {
        let c = DemoConfig::from_json(r#"{ "camera": { "view_direction": [0.0, 0.0, 0.0] } }"#)
            .unwrap();
        assert_eq!(c.camera.view_direction, Vec3::ZERO);
    }

    #[test]
    fn rejects_zero_fps_and_bad_planes() {
        let err = DemoConfig::from_json(r#"{ "frame": { "target_fps": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = DemoConfig::from_json(r#"{ "projection": { "near": 5.0, "far": 1.0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("near"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = DemoConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window": {{ "title": "from file" }} }}"#).unwrap();

        let c = DemoConfig::load(file.path()).unwrap();
        assert_eq!(c.window.title, "from file");
        assert_eq!(c.window.width, 640);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = DemoConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }
}
