use std::hint::black_box;
use std::time::Instant;

use pointfield_common::WorldConfig;
use pointfield_world::ChunkWorld;

fn bench_cold_coverage(radius: f32, iterations: usize) {
    let start = Instant::now();
    for i in 0..iterations {
        let mut world = ChunkWorld::new(WorldConfig {
            seed: i as u64,
            ..WorldConfig::default()
        });
        world.ensure_coverage(black_box(0.0), black_box(0.0), black_box(radius));
        black_box(world.chunk_count());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  cold coverage (r={radius}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_warm_query(radius: f32, iterations: usize) {
    let mut world = ChunkWorld::new(WorldConfig::default());
    world.ensure_coverage(0.0, 0.0, radius);

    let start = Instant::now();
    for _ in 0..iterations {
        let pts = world.points_near(black_box(0.0), black_box(0.0), black_box(radius));
        black_box(pts.len());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  warm query (r={radius}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_roaming(steps: usize) {
    let mut world = ChunkWorld::new(WorldConfig::default());
    let cfg = world.config().clone();

    let start = Instant::now();
    for i in 0..steps {
        // Simulate a camera walking along +X one chunk per step
        let x = i as f32 * cfg.chunk_size;
        let pts = world.points_near(black_box(x), 0.0, cfg.load_radius);
        black_box(pts.len());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / steps as u32;
    println!(
        "  roaming ({steps} steps, {} resident chunks at end): {per_iter:?}/step, total {elapsed:?}",
        world.chunk_count()
    );
}

fn main() {
    println!("=== World Query Benchmarks ===\n");

    println!("Cold coverage (generation-dominated):");
    bench_cold_coverage(60.0, 100);
    bench_cold_coverage(200.0, 10);

    println!("\nWarm radius query (filter-dominated):");
    bench_warm_query(60.0, 10000);
    bench_warm_query(200.0, 1000);

    println!("\nRoaming (growing cache, full-scan cost visible):");
    bench_roaming(100);
    bench_roaming(500);

    println!("\n=== Done ===");
}
