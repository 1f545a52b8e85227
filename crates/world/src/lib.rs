//! Procedural world: deterministic per-chunk point generation and a lazily
//! growing cache with radius queries.
//!
//! # Invariants
//! - A chunk's point set is a pure function of (coord, seed); regeneration is
//!   impossible because a cached chunk is never replaced.
//! - Radius queries only return points from chunks that fully cover the query
//!   disk.
//! - The cache grows monotonically; eviction is out of scope at demo scale.

mod cache;
mod generator;

pub use cache::ChunkWorld;
pub use generator::{Chunk, chunk_seed, generate};

pub fn crate_info() -> &'static str {
    "pointfield-world v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("world"));
    }
}
