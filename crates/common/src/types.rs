use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single decorative point in world space.
///
/// Immutable once generated; owned exclusively by the chunk that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<WorldPoint> for Vec3 {
    fn from(p: WorldPoint) -> Self {
        p.to_vec3()
    }
}

/// Integer coordinate of a chunk cell on the XZ plane.
///
/// Ord is derived so chunk maps iterate in a deterministic order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    pub fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Chunk containing the given world-space XZ position.
    pub fn containing(x: f32, z: f32, chunk_size: f32) -> Self {
        Self {
            cx: (x / chunk_size).floor() as i32,
            cz: (z / chunk_size).floor() as i32,
        }
    }
}
