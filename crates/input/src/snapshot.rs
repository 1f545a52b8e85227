use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Movement and modifier keys held during the tick.
///
/// Plain booleans instead of a key-code set: the presentation layer owns the
/// physical binding, the engine only sees intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub sprint: bool,
    /// Discrete yaw nudge keys (arrow left/right in the reference binding).
    pub turn_left: bool,
    pub turn_right: bool,
}

impl HeldKeys {
    pub fn any_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Everything the engine may read from the outside world for one tick.
///
/// Produced once per frame by the presentation layer and passed by value;
/// there is no other channel for input into the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Wall-clock seconds since the previous tick.
    pub dt: f32,
    /// Pointer motion since the previous tick, in pixels.
    pub look_delta: Vec2,
    /// Keys held during the tick.
    pub held: HeldKeys,
    /// Edge-triggered: pause toggle pressed this tick.
    pub pause: bool,
    /// Edge-triggered: reset position/orientation pressed this tick.
    pub reset: bool,
    /// Edge-triggered: minimap orientation mode toggle pressed this tick.
    pub toggle_map: bool,
    pub viewport: Viewport,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            dt: 0.0,
            look_delta: Vec2::ZERO,
            held: HeldKeys::default(),
            pause: false,
            reset: false,
            toggle_map: false,
            viewport: Viewport::default(),
        }
    }
}

impl InputSnapshot {
    /// An idle snapshot advancing time only. Handy for tests and headless runs.
    pub fn idle(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_inert() {
        let snap = InputSnapshot::default();
        assert_eq!(snap.dt, 0.0);
        assert!(!snap.held.any_movement());
        assert!(!snap.pause && !snap.reset && !snap.toggle_map);
    }

    #[test]
    fn any_movement_detects_each_axis() {
        let setters: [fn(&mut HeldKeys); 6] = [
            |h| h.forward = true,
            |h| h.back = true,
            |h| h.left = true,
            |h| h.right = true,
            |h| h.up = true,
            |h| h.down = true,
        ];
        for setter in setters {
            let mut held = HeldKeys::default();
            setter(&mut held);
            assert!(held.any_movement());
        }
        let held = HeldKeys {
            sprint: true,
            ..HeldKeys::default()
        };
        assert!(!held.any_movement(), "sprint alone is not movement");
    }

    #[test]
    fn viewport_aspect() {
        let vp = Viewport::new(1280.0, 720.0);
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }
}
