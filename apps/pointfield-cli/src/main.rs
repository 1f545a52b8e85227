use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pointfield_common::{DemoConfig, WorldConfig};
use pointfield_engine::Engine;
use pointfield_input::{HeldKeys, InputSnapshot};
use pointfield_render::{Surface, TextSurface};
use pointfield_world::ChunkWorld;

#[derive(Parser)]
#[command(name = "pointfield-cli", about = "Headless tools for the pointfield demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional YAML config overriding the built-in defaults
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate version info
    Info,
    /// Generate the world around a point and report deterministic stats
    Probe {
        /// Master world seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Query center X
        #[arg(short, long, default_value = "0.0")]
        x: f32,
        /// Query center Z
        #[arg(short, long, default_value = "0.0")]
        z: f32,
        /// Query radius in world units
        #[arg(short, long, default_value = "60.0")]
        radius: f32,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run a scripted headless walk and render the final frame as text
    Walk {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "300")]
        ticks: u64,
        /// Master world seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Fixed per-tick dt in seconds
        #[arg(long, default_value = "0.016")]
        dt: f32,
    },
}

#[derive(Serialize)]
struct ProbeReport {
    seed: u64,
    x: f32,
    z: f32,
    radius: f32,
    resident_chunks: usize,
    cached_points: usize,
    points_in_radius: usize,
    state_hash: String,
}

fn load_config(path: Option<&std::path::Path>) -> Result<DemoConfig> {
    match path {
        Some(p) => DemoConfig::load(p).with_context(|| format!("loading config {}", p.display())),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("pointfield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", pointfield_common::crate_info());
            println!("world:  {}", pointfield_world::crate_info());
            println!("input:  {}", pointfield_input::crate_info());
            println!("camera: {}", pointfield_camera::crate_info());
            println!("render: {}", pointfield_render::crate_info());
            println!("engine: {}", pointfield_engine::crate_info());
        }
        Commands::Probe {
            seed,
            x,
            z,
            radius,
            json,
        } => {
            let world_cfg = WorldConfig {
                seed: seed.unwrap_or(config.world.seed),
                ..config.world
            };
            let mut world = ChunkWorld::new(world_cfg.clone());
            let points = world.points_near(x, z, radius);

            let report = ProbeReport {
                seed: world_cfg.seed,
                x,
                z,
                radius,
                resident_chunks: world.chunk_count(),
                cached_points: world.point_count(),
                points_in_radius: points.len(),
                state_hash: format!("{:#018x}", world.state_hash()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Probe: seed={} center=({}, {}) r={}", report.seed, x, z, radius);
                println!(
                    "  chunks={} cached_points={} in_radius={}",
                    report.resident_chunks, report.cached_points, report.points_in_radius
                );
                println!("  state_hash={}", report.state_hash);
            }
        }
        Commands::Walk { ticks, seed, dt } => {
            let mut cfg = config;
            if let Some(seed) = seed {
                cfg.world.seed = seed;
            }
            println!(
                "Headless walk: seed={}, {ticks} ticks at dt={dt}s",
                cfg.world.seed
            );

            let mut engine = Engine::new(cfg);
            let snap = InputSnapshot {
                dt,
                held: HeldKeys {
                    forward: true,
                    ..HeldKeys::default()
                },
                ..InputSnapshot::default()
            };

            let mut last = engine.tick(&snap);
            for _ in 1..ticks {
                last = engine.tick(&snap);
            }

            let cam = engine.camera();
            println!(
                "Camera: x={:.2} y={:.2} z={:.2} yaw={:.2} pitch={:.2}",
                cam.position.x, cam.position.y, cam.position.z, cam.yaw, cam.pitch
            );
            println!(
                "World: chunks={} points={} hash={:#018x}",
                engine.world().chunk_count(),
                engine.world().point_count(),
                engine.world().state_hash()
            );

            let mut surface = TextSurface::new();
            surface.execute(&last);
            print!("{}", surface.last_frame());
        }
    }

    Ok(())
}
