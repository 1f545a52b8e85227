//! Camera: position/orientation state, the Active/Paused state machine, and
//! per-tick motion integration from input snapshots.
//!
//! # Invariants
//! - Pitch is clamped to (-89°, +89°) after every look update.
//! - Vertical position is forced back to the ground plane after every
//!   integration step (ground lock).
//! - All inputs clamp or no-op; nothing here can fail.

pub mod camera;

pub use camera::{Camera, CameraMode};

pub fn crate_info() -> &'static str {
    "pointfield-camera v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("camera"));
    }
}
