//! Shared types and configuration for the pointfield demo.
//!
//! # Invariants
//! - Value types here are plain data; no behavior beyond conversions.
//! - Every tunable scalar in the system lives in [`config`], with defaults
//!   matching the reference demo.

pub mod config;
pub mod types;

pub use config::{CameraConfig, ConfigError, DemoConfig, MinimapConfig, ViewConfig, WorldConfig};
pub use types::{ChunkCoord, WorldPoint};

pub fn crate_info() -> &'static str {
    "pointfield-common v0.1.0"
}
