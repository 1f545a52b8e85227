use std::collections::BTreeMap;

use pointfield_common::{ChunkCoord, WorldConfig, WorldPoint};

use crate::generator::{Chunk, generate};

/// Lazily generated infinite world.
///
/// Chunks are generated exactly once, on first coverage of their cell, and
/// live for the lifetime of the cache. BTreeMap keeps iteration order
/// deterministic so query results are identical across runs and platforms.
pub struct ChunkWorld {
    config: WorldConfig,
    chunks: BTreeMap<ChunkCoord, Chunk>,
}

impl ChunkWorld {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            chunks: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Number of chunks generated so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total points across all generated chunks.
    pub fn point_count(&self) -> usize {
        self.chunks.values().map(Chunk::len).sum()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Inclusive chunk range whose cells intersect the AABB of the disk of
    /// `radius` around (x, z).
    fn coverage_range(&self, x: f32, z: f32, radius: f32) -> (ChunkCoord, ChunkCoord) {
        let size = self.config.chunk_size;
        let min = ChunkCoord::containing(x - radius, z - radius, size);
        let max = ChunkCoord::containing(x + radius, z + radius, size);
        (min, max)
    }

    /// Generate every not-yet-cached chunk whose cell intersects the AABB of
    /// the query disk. Existing chunks are left untouched.
    pub fn ensure_coverage(&mut self, x: f32, z: f32, radius: f32) {
        let _span = tracing::debug_span!("ensure_coverage").entered();
        let (min, max) = self.coverage_range(x, z, radius);
        let (seed, size, count) = (
            self.config.seed,
            self.config.chunk_size,
            self.config.points_per_chunk,
        );
        let mut generated = 0usize;
        for cx in min.cx..=max.cx {
            for cz in min.cz..=max.cz {
                let coord = ChunkCoord::new(cx, cz);
                self.chunks.entry(coord).or_insert_with(|| {
                    generated += 1;
                    generate(coord, seed, size, count)
                });
            }
        }
        if generated > 0 {
            tracing::debug!(generated, total = self.chunks.len(), "expanded coverage");
        }
    }

    /// All cached points within 2D Euclidean `radius` of (x, z); y is
    /// ignored and the boundary (`d² == r²`) is included.
    ///
    /// Scans every cached chunk rather than only those in range. Fine at
    /// demo scale where the resident chunk count stays small; indexing the
    /// scan by chunk coordinate is the first thing to fix if this grows.
    pub fn points_near(&mut self, x: f32, z: f32, radius: f32) -> Vec<WorldPoint> {
        self.ensure_coverage(x, z, radius);
        let r2 = radius * radius;
        let mut out = Vec::new();
        for chunk in self.chunks.values() {
            for p in chunk.points() {
                let dx = p.x - x;
                let dz = p.z - z;
                if dx * dx + dz * dz <= r2 {
                    out.push(*p);
                }
            }
        }
        out
    }

    /// Deterministic FNV-style hash over every cached chunk, for cross-run
    /// and cross-machine world comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&self.config.seed.to_le_bytes());
        for (coord, chunk) in &self.chunks {
            mix(&coord.cx.to_le_bytes());
            mix(&coord.cz.to_le_bytes());
            for p in chunk.points() {
                mix(&p.x.to_le_bytes());
                mix(&p.y.to_le_bytes());
                mix(&p.z.to_le_bytes());
            }
        }
        h
    }
}
