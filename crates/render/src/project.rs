use glam::{Vec2, Vec3};
use pointfield_camera::Camera;
use pointfield_common::{ViewConfig, WorldPoint};

/// Transform a world point into view space: translate by the camera's
/// negated position, rotate by -yaw about Y, then by -pitch about X.
/// Positive Z is depth in front of the camera.
pub fn view_space(camera: &Camera, point: WorldPoint) -> Vec3 {
    let p = point.to_vec3() - camera.position;
    let (sy, cy) = camera.yaw.sin_cos();
    let (sp, cp) = camera.pitch.sin_cos();

    // Yaw about Y
    let x = p.x * cy - p.z * sy;
    let z = p.x * sy + p.z * cy;
    // Pitch about X
    let y = p.y * cp - z * sp;
    let z = p.y * sp + z * cp;

    Vec3::new(x, y, z)
}

/// A projected main-view point: screen position plus a draw radius that
/// shrinks with depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSprite {
    pub pos: Vec2,
    pub radius: f32,
}

/// Pinhole perspective projector for the main view.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    width: f32,
    height: f32,
    fx: f32,
    fy: f32,
    near: f32,
}

impl Projector {
    pub fn new(view: &ViewConfig, width: f32, height: f32) -> Self {
        let vfov = view.vfov_deg.to_radians();
        let fy = (height / 2.0) / (vfov / 2.0).tan();
        let fx = fy * (width / height);
        Self {
            width,
            height,
            fx,
            fy,
            near: view.near,
        }
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    /// Project a world point to the screen, or None when the view-space
    /// depth is at or behind the near plane.
    pub fn project(&self, camera: &Camera, point: WorldPoint) -> Option<PointSprite> {
        let v = view_space(camera, point);
        if v.z <= self.near {
            return None;
        }
        let sx = self.width / 2.0 + (v.x / v.z) * self.fx;
        let sy = self.height / 2.0 - (v.y / v.z) * self.fy;
        Some(PointSprite {
            pos: Vec2::new(sx, sy),
            radius: (200.0 / v.z).round().max(2.0),
        })
    }
}
