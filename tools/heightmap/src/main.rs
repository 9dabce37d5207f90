//! Command-line driver: generate a heightmap and print it as a text table or JSON.
//! Set RUST_LOG=subdiv_core=debug for generation diagnostics.

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use subdiv_core::metrics::{compute_hurst, compute_stats};
use subdiv_core::{generate_detailed, GenerateParams};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "heightmap", about = "Fill a heightmap of any size with diamond-square subdivision")]
struct Args {
    /// Number of columns.
    #[arg(short = 'W', long, default_value_t = 45)]
    width: usize,

    /// Number of rows.
    #[arg(short = 'H', long, default_value_t = 25)]
    height: usize,

    /// JSON file with generation parameters; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Per-depth amplitude damping in (0, 1); higher is rougher.
    #[arg(short, long)]
    roughness: Option<f32>,

    /// Displacement amplitude at depth 0 (default: 0.2 × longest span).
    #[arg(short, long)]
    amplitude: Option<f32>,

    /// Corner heights: top-left,top-right,bottom-left,bottom-right.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    corners: Option<Vec<f32>>,

    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print summary statistics and the Hurst estimate to stderr.
    #[arg(long)]
    stats: bool,
}

// ── Output types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GridDump<'a> {
    width: usize,
    height: usize,
    params: &'a GenerateParams,
    data: Vec<f32>,
}

// ── Config ────────────────────────────────────────────────────────────────────

fn resolve_params(args: &Args) -> Result<GenerateParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GenerateParams::default(),
    };

    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(r) = args.roughness {
        params.roughness = r;
    }
    if let Some(a) = args.amplitude {
        params.amplitude = Some(a);
    }
    if let Some(c) = &args.corners {
        let Ok(corners) = <[f32; 4]>::try_from(c.as_slice()) else {
            bail!("--corners takes exactly 4 values, got {}", c.len());
        };
        params.corner_values = Some(corners);
    }
    Ok(params)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = resolve_params(&args)?;

    let run = generate_detailed(args.width, args.height, &params)
        .with_context(|| format!("generating {}x{} heightmap", args.width, args.height))?;
    let grid = &run.grid;
    log::info!(
        "generated {}x{} heightmap: {} rectangles, depth {}",
        grid.width(), grid.height(), run.stats.rects, run.stats.max_depth
    );

    let out = match args.format {
        Format::Text => render::render_text(grid)?,
        Format::Json => {
            let dump = GridDump {
                width: grid.width(),
                height: grid.height(),
                params: &params,
                data: grid.values()?,
            };
            serde_json::to_string_pretty(&dump)? + "\n"
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{out}"),
    }

    if args.stats {
        let stats = compute_stats(grid)?;
        let hurst = compute_hurst(grid)?;
        eprintln!(
            "min {:.2}  max {:.2}  mean {:.2}  std {:.2}  max plane deviation {:.2}",
            stats.min, stats.max, stats.mean, stats.std, stats.max_plane_deviation
        );
        eprintln!("Hurst H {:.3} (R² {:.3})", hurst.h, hurst.r_squared);
    }

    Ok(())
}
