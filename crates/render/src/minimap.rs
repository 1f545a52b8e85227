use glam::Vec2;
use pointfield_camera::Camera;
use pointfield_common::{MinimapConfig, WorldPoint};

use crate::command::{Color, DrawCmd};

/// Half-angle of the minimap FOV wedge. Fixed; deliberately independent of
/// the main view's vertical FOV.
const WEDGE_HALF_ANGLE: f32 = 60.0 * std::f32::consts::PI / 180.0;
/// World-unit length of the wedge and the forward indicator.
const WEDGE_LENGTH_UNITS: f32 = 30.0;
/// Pixel padding between the panel edge and the mapped radius.
const PANEL_PADDING: f32 = 20.0;
/// Spacing of the range rings in world units.
const RING_STEP_UNITS: f32 = 10.0;

const MARKER_RADIUS_PX: f32 = 5.0;
const MARKER_TICK_PX: f32 = 14.0;
const MAP_POINT_RADIUS_PX: f32 = 3.0;

/// Top-down orthographic projection of the point field around the camera.
///
/// Map-local coordinates are screen-style: x right, y down, origin at the
/// panel center. In camera-relative mode the field is rotated by -yaw so
/// forward is always up; otherwise north (-Z up) stays fixed.
#[derive(Debug, Clone)]
pub struct Minimap {
    config: MinimapConfig,
}

impl Minimap {
    pub fn new(config: MinimapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimapConfig {
        &self.config
    }

    pub fn rotate_with_camera(&self) -> bool {
        self.config.rotate_with_camera
    }

    /// Flip between camera-relative and north-up.
    pub fn toggle_rotation(&mut self) -> bool {
        self.config.rotate_with_camera = !self.config.rotate_with_camera;
        self.config.rotate_with_camera
    }

    /// Pixel radius the world radius is mapped onto.
    pub fn px_radius(&self) -> f32 {
        (self.config.size_px - PANEL_PADDING) * 0.5
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.px_radius() / self.config.radius_units
    }

    /// Project a world point to map-local pixels, or None when its
    /// horizontal offset exceeds the map radius on either axis.
    pub fn project(&self, camera: &Camera, point: WorldPoint) -> Option<Vec2> {
        let dx = point.x - camera.position.x;
        let dz = point.z - camera.position.z;
        if dx.abs() > self.config.radius_units || dz.abs() > self.config.radius_units {
            return None;
        }
        Some(self.to_map_px(camera, dx, dz))
    }

    /// World-space horizontal offset to map-local pixels, applying the
    /// camera-relative rotation when enabled.
    fn to_map_px(&self, camera: &Camera, dx: f32, dz: f32) -> Vec2 {
        let scale = self.scale();
        if self.config.rotate_with_camera {
            // Rotate by -yaw: decompose the offset onto the camera's
            // horizontal right/forward axes so forward maps to up.
            let (sy, cy) = camera.yaw.sin_cos();
            let rightward = dx * cy - dz * sy;
            let forward = dx * sy + dz * cy;
            Vec2::new(rightward * scale, -forward * scale)
        } else {
            // North-up: raw world axes in the y-down map frame, so -Z
            // (north) is up.
            Vec2::new(dx * scale, dz * scale)
        }
    }

    /// Emit the full minimap layer, offset so the panel center sits at
    /// `center` in screen space: range rings, mapped points, the FOV wedge,
    /// and the player marker.
    pub fn commands(
        &self,
        camera: &Camera,
        points: &[WorldPoint],
        center: Vec2,
        out: &mut Vec<DrawCmd>,
    ) {
        let scale = self.scale();

        let mut ring = RING_STEP_UNITS;
        while ring <= self.config.radius_units {
            out.push(DrawCmd::Ring {
                center,
                radius: ring * scale,
                color: Color::MAP_RING,
            });
            ring += RING_STEP_UNITS;
        }

        for p in points {
            if let Some(mp) = self.project(camera, *p) {
                out.push(DrawCmd::Point {
                    pos: center + mp,
                    radius: MAP_POINT_RADIUS_PX,
                    color: Color::MAP_POINT,
                });
            }
        }

        // Wedge apex at the player; pointing up in camera-relative mode,
        // along the actual heading in north-up mode. The unit direction uses
        // the same map frame as to_map_px: -cos in the rotated frame (forward
        // up), +cos in the raw world frame (+Z down).
        let heading = if self.config.rotate_with_camera {
            0.0
        } else {
            camera.yaw
        };
        let dir = |angle: f32| {
            let a = heading + angle;
            if self.config.rotate_with_camera {
                Vec2::new(a.sin(), -a.cos())
            } else {
                Vec2::new(a.sin(), a.cos())
            }
        };
        let len = WEDGE_LENGTH_UNITS * scale;
        let arm = |angle: f32| center + dir(angle) * len;
        out.push(DrawCmd::Polygon {
            vertices: vec![center, arm(WEDGE_HALF_ANGLE), arm(-WEDGE_HALF_ANGLE)],
            color: Color::MAP_WEDGE,
        });

        out.push(DrawCmd::Point {
            pos: center,
            radius: MARKER_RADIUS_PX,
            color: Color::MAP_MARKER,
        });
        let tick = dir(0.0) * MARKER_TICK_PX;
        out.push(DrawCmd::Line {
            from: center,
            to: center + tick,
            color: Color::MAP_MARKER,
        });
    }
}

impl Default for Minimap {
    fn default() -> Self {
        Self::new(MinimapConfig::default())
    }
}
