use pointfield_common::{ChunkCoord, WorldPoint};

/// A generated chunk: its coordinate and a fixed-count point sequence.
///
/// Never mutated after generation; the cache hands out shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    coord: ChunkCoord,
    points: Vec<WorldPoint>,
}

impl Chunk {
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Stable per-chunk seed: each coordinate scaled by a large odd constant and
/// folded into the master seed with xor. Distinct chunks get distinct,
/// reproducible streams without any shared generator state.
pub fn chunk_seed(coord: ChunkCoord, master_seed: u64) -> u64 {
    let hx = (coord.cx as i64).wrapping_mul(73_856_093) as u64;
    let hz = (coord.cz as i64).wrapping_mul(19_349_663) as u64;
    hx ^ hz ^ master_seed
}

/// Generate the point set for a chunk. Pure and infallible: the same
/// (coord, seed, size, count) always yields a bit-identical sequence,
/// regardless of what other chunks have been generated.
pub fn generate(coord: ChunkCoord, master_seed: u64, chunk_size: f32, count: usize) -> Chunk {
    let mut rng = PointStream::new(chunk_seed(coord, master_seed));
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        // Draw order is part of the format: local x, local z, then height.
        let lx = rng.uniform(0.5, f64::from(chunk_size) - 0.5);
        let lz = rng.uniform(0.5, f64::from(chunk_size) - 0.5);
        let y = rng.uniform(-1.0, 1.5);
        let x = coord.cx as f64 * f64::from(chunk_size) + lx;
        let z = coord.cz as f64 * f64::from(chunk_size) + lz;
        points.push(WorldPoint::new(x as f32, y as f32, z as f32));
    }
    tracing::trace!(cx = coord.cx, cz = coord.cz, count, "generated chunk");
    Chunk { coord, points }
}

/// Splitmix64-backed uniform stream.
///
/// Splitmix64 is the same step function the demo uses elsewhere for
/// reproducible seeding: fast, well-mixed, and identical on every platform,
/// which keeps generated worlds comparable across runs and machines.
struct PointStream {
    state: u64,
}

impl PointStream {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1) from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}
