//! Engine: the single-threaded tick routine.
//!
//! One logical frame: apply edge-triggered actions, integrate the camera,
//! query the world cache (generating chunks synchronously as needed), and
//! emit the frame's draw commands for the presentation surface.
//!
//! # Invariants
//! - All state is mutated by the tick routine only; there are no other
//!   writers and no locking.
//! - Frame dt is clamped, and the first dt after a resume is discarded so a
//!   pause never becomes one oversized integration step.

mod engine;
mod fps;

pub use engine::Engine;
pub use fps::FpsCounter;

pub fn crate_info() -> &'static str {
    "pointfield-engine v0.1.0"
}
