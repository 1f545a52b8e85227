use glam::{Vec2, Vec3};
use pointfield_common::CameraConfig;
use pointfield_input::HeldKeys;

const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;
const INTENT_EPSILON: f32 = 1e-6;

/// Two-state machine: input drives the camera only while Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Active,
    Paused,
}

/// Ground-locked free-look camera.
///
/// Yaw and pitch are radians; the basis convention matches the projection
/// pipeline: yaw 0 looks down +Z, positive yaw turns toward +X.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    mode: CameraMode,
    config: CameraConfig,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            mode: CameraMode::Active,
            config,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.mode == CameraMode::Paused
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, sp, cy * cp)
    }

    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, -sy)
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Flip Active/Paused. Position and orientation are untouched; pointer
    /// capture and dt-baseline handling belong to the caller.
    pub fn toggle_pause(&mut self) -> CameraMode {
        self.mode = match self.mode {
            CameraMode::Active => CameraMode::Paused,
            CameraMode::Paused => CameraMode::Active,
        };
        tracing::debug!(mode = ?self.mode, "camera pause toggled");
        self.mode
    }

    /// Zero position, yaw, and pitch immediately, bypassing integration.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// Apply a pointer delta in pixels. No-op while paused; pitch is clamped
    /// to the limit rather than rejected.
    pub fn look(&mut self, delta: Vec2) {
        if self.is_paused() {
            return;
        }
        self.yaw += delta.x * self.config.mouse_sensitivity;
        self.pitch += delta.y * self.config.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Advance position one tick from the held-key set.
    ///
    /// Sums the signed basis vectors into an intent, normalizes it so
    /// diagonal movement is not faster, scales by speed (and sprint) and dt,
    /// then ground-locks. The discrete turn keys nudge yaw by a fixed step
    /// per tick, independent of pointer look.
    pub fn integrate(&mut self, held: &HeldKeys, dt: f32) {
        if self.is_paused() {
            return;
        }

        if held.turn_right {
            self.yaw += self.config.key_yaw_step;
        }
        if held.turn_left {
            self.yaw -= self.config.key_yaw_step;
        }

        let fwd = self.forward();
        let right = self.right();
        let up = self.up();

        let mut intent = Vec3::ZERO;
        if held.forward {
            intent += fwd;
        }
        if held.back {
            intent -= fwd;
        }
        if held.right {
            intent += right;
        }
        if held.left {
            intent -= right;
        }
        if held.up {
            intent += up;
        }
        if held.down {
            intent -= up;
        }

        if intent.length() > INTENT_EPSILON {
            let speed = self.config.move_speed
                * if held.sprint {
                    self.config.sprint_multiplier
                } else {
                    1.0
                };
            self.position += intent.normalize() * speed * dt;
        }

        // Ground lock: vertical intent may tilt the direction within a tick
        // but never persists as altitude.
        self.position.y = 0.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(f: impl FnOnce(&mut HeldKeys)) -> HeldKeys {
        let mut h = HeldKeys::default();
        f(&mut h);
        h
    }

    #[test]
    fn basis_at_identity() {
        let cam = Camera::default();
        assert!((cam.forward() - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!((cam.right() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
        assert_eq!(cam.up(), Vec3::Y);
    }

    #[test]
    fn basis_after_quarter_turn() {
        let mut cam = Camera::default();
        cam.yaw = std::f32::consts::FRAC_PI_2;
        assert!((cam.forward() - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((cam.right() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn pitch_clamps_under_any_look_sequence() {
        let mut cam = Camera::default();
        for _ in 0..1000 {
            cam.look(Vec2::new(3.0, 250.0));
        }
        assert!(cam.pitch <= PITCH_LIMIT);
        for _ in 0..2000 {
            cam.look(Vec2::new(-1.0, -400.0));
        }
        assert!(cam.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn ground_lock_after_vertical_intent() {
        let mut cam = Camera::default();
        cam.integrate(&held(|h| h.up = true), 1.0);
        assert_eq!(cam.position.y, 0.0);
        cam.integrate(&held(|h| h.down = true), 1.0);
        assert_eq!(cam.position.y, 0.0);
    }

    #[test]
    fn forward_moves_along_heading() {
        let mut cam = Camera::default();
        cam.integrate(&held(|h| h.forward = true), 1.0);
        assert!((cam.position.z - cam.config.move_speed).abs() < 1e-5);
        assert!(cam.position.x.abs() < 1e-5);
    }

    #[test]
    fn diagonal_is_not_faster() {
        let mut straight = Camera::default();
        straight.integrate(&held(|h| h.forward = true), 1.0);

        let mut diagonal = Camera::default();
        diagonal.integrate(
            &held(|h| {
                h.forward = true;
                h.right = true;
            }),
            1.0,
        );
        let a = straight.position.length();
        let b = diagonal.position.length();
        assert!((a - b).abs() < 1e-4, "straight {a} vs diagonal {b}");
    }

    #[test]
    fn sprint_doubles_distance() {
        let mut walk = Camera::default();
        walk.integrate(&held(|h| h.forward = true), 1.0);

        let mut sprint = Camera::default();
        sprint.integrate(
            &held(|h| {
                h.forward = true;
                h.sprint = true;
            }),
            1.0,
        );
        assert!((sprint.position.z - 2.0 * walk.position.z).abs() < 1e-4);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut cam = Camera::default();
        cam.integrate(
            &held(|h| {
                h.forward = true;
                h.back = true;
            }),
            1.0,
        );
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn paused_camera_ignores_input() {
        let mut cam = Camera::default();
        cam.toggle_pause();
        assert!(cam.is_paused());

        cam.look(Vec2::new(100.0, 100.0));
        cam.integrate(&held(|h| h.forward = true), 1.0);
        assert_eq!(cam.position, Vec3::ZERO);
        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.pitch, 0.0);

        cam.toggle_pause();
        assert!(!cam.is_paused());
    }

    #[test]
    fn pause_preserves_pose() {
        let mut cam = Camera::default();
        cam.look(Vec2::new(50.0, 20.0));
        cam.integrate(&held(|h| h.forward = true), 0.5);
        let (pos, yaw, pitch) = (cam.position, cam.yaw, cam.pitch);

        cam.toggle_pause();
        assert_eq!(cam.position, pos);
        assert_eq!(cam.yaw, yaw);
        assert_eq!(cam.pitch, pitch);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut cam = Camera::default();
        cam.look(Vec2::new(500.0, 300.0));
        cam.integrate(&held(|h| h.forward = true), 2.0);
        cam.reset();
        assert_eq!(cam.position, Vec3::ZERO);
        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.pitch, 0.0);
    }

    #[test]
    fn turn_keys_nudge_yaw_by_fixed_step() {
        let mut cam = Camera::default();
        cam.integrate(&held(|h| h.turn_right = true), 0.016);
        assert!((cam.yaw - cam.config.key_yaw_step).abs() < 1e-6);
        cam.integrate(&held(|h| h.turn_left = true), 0.016);
        assert!(cam.yaw.abs() < 1e-6);
    }

    #[test]
    fn dt_scales_displacement() {
        let mut cam = Camera::default();
        cam.integrate(&held(|h| h.forward = true), 0.1);
        let short = cam.position.z;

        let mut cam2 = Camera::default();
        cam2.integrate(&held(|h| h.forward = true), 0.2);
        assert!((cam2.position.z - 2.0 * short).abs() < 1e-5);
    }
}
