//! Rendering core: the 3D-to-2D projection pipeline shared by the main view
//! and the minimap, plus the draw-command surface boundary.
//!
//! # Invariants
//! - The pipeline never mutates camera or world state.
//! - Points at or behind the near plane are culled, never errored.
//! - The core only emits draw commands; executing them (windows, painters,
//!   cursors) is entirely the presentation surface's problem.

mod command;
mod minimap;
mod project;

pub use command::{Color, DrawCmd, Frame, FrameStats, Surface, TextSurface};
pub use minimap::Minimap;
pub use project::{PointSprite, Projector, view_space};

pub fn crate_info() -> &'static str {
    "pointfield-render v0.1.0"
}
