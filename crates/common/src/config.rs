use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure loading a [`DemoConfig`] from a YAML file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Procedural world parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of a chunk cell in world units (X/Z).
    pub chunk_size: f32,
    /// Number of points generated per chunk.
    pub points_per_chunk: usize,
    /// Master seed; the whole world is a pure function of it.
    pub seed: u64,
    /// Radius (world units) around the camera kept populated each tick.
    pub load_radius: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 20.0,
            points_per_chunk: 18,
            seed: 1337,
            load_radius: 60.0,
        }
    }
}

/// Camera motion and look parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Speed factor applied while the sprint key is held.
    pub sprint_multiplier: f32,
    /// Radians of yaw/pitch per pixel of pointer motion.
    pub mouse_sensitivity: f32,
    /// Fixed yaw step (radians) per tick for the discrete turn keys.
    pub key_yaw_step: f32,
    /// Upper bound on a single frame's dt fed into integration.
    pub max_frame_dt: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            sprint_multiplier: 2.0,
            mouse_sensitivity: 0.0022,
            key_yaw_step: 0.03,
            max_frame_dt: 0.1,
        }
    }
}

/// Main-view projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Vertical field of view in degrees.
    pub vfov_deg: f32,
    /// Minimum view-space depth; points at or behind it are culled.
    pub near: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            vfov_deg: 70.0,
            near: 0.1,
        }
    }
}

/// Minimap panel parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Square panel edge in pixels.
    pub size_px: f32,
    /// World-unit radius the panel shows.
    pub radius_units: f32,
    /// Camera-relative (forward-up) when true, north-up when false.
    pub rotate_with_camera: bool,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            size_px: 220.0,
            radius_units: 60.0,
            rotate_with_camera: true,
        }
    }
}

/// Top-level startup configuration for the demo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub world: WorldConfig,
    pub camera: CameraConfig,
    pub view: ViewConfig,
    pub minimap: MinimapConfig,
}

impl DemoConfig {
    /// Load from a YAML file; fields the file omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_demo() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.world.chunk_size, 20.0);
        assert_eq!(cfg.world.points_per_chunk, 18);
        assert_eq!(cfg.world.seed, 1337);
        assert_eq!(cfg.world.load_radius, 60.0);
        assert_eq!(cfg.view.vfov_deg, 70.0);
        assert_eq!(cfg.minimap.size_px, 220.0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: DemoConfig = serde_yaml::from_str("world:\n  seed: 7\n").unwrap();
        assert_eq!(cfg.world.seed, 7);
        assert_eq!(cfg.world.chunk_size, 20.0);
        assert_eq!(cfg.camera.move_speed, 5.0);
    }

    #[test]
    fn load_reads_overrides_from_file() {
        let path = std::env::temp_dir().join("pointfield_load_test.yaml");
        std::fs::write(&path, "world:\n  seed: 99\n").unwrap();
        let cfg = DemoConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.world.seed, 99);
        assert_eq!(cfg.camera.move_speed, 5.0);
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = DemoConfig::load(Path::new("/nonexistent/pointfield.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_reports_bad_yaml_as_parse_error() {
        let path = std::env::temp_dir().join("pointfield_bad_yaml_test.yaml");
        std::fs::write(&path, "world: [").unwrap();
        let err = DemoConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let cfg = DemoConfig::default();
        let text = serde_yaml::to_string(&cfg).unwrap();
        let back: DemoConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back.world.seed, cfg.world.seed);
        assert_eq!(back.minimap.radius_units, cfg.minimap.radius_units);
    }
}
