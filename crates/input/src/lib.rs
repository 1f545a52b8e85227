//! Input snapshot: the presentation layer's per-tick view of user intent.
//!
//! # Invariants
//! - A snapshot is an immutable value; the engine never reads input state
//!   from anywhere else.
//! - Pause, reset, and map-mode toggles are edge-triggered one-shots, never
//!   held state, so holding the key cannot re-trigger them every tick.

pub mod snapshot;

pub use snapshot::{HeldKeys, InputSnapshot, Viewport};

pub fn crate_info() -> &'static str {
    "pointfield-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
