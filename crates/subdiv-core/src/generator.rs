//! Generation entry point: validate, allocate, seed corners, subdivide.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::params::GenerateParams;
use crate::rect::Rect;
use crate::rng::SeededRng;
use crate::subdivide::{subdivide, SubdivisionStats};

/// A filled grid plus bookkeeping from the run that produced it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub grid: Grid,
    pub stats: SubdivisionStats,
    /// Total RNG draws, corner seeding included.
    pub draws: u64,
    /// Displacement amplitude used at depth 0.
    pub amplitude: f32,
}

/// Fill a `width`×`height` heightmap. Same arguments, same grid, bit for bit.
pub fn generate(width: usize, height: usize, params: &GenerateParams) -> Result<Grid> {
    generate_detailed(width, height, params).map(|g| g.grid)
}

/// As [`generate`], also returning subdivision statistics.
pub fn generate_detailed(
    width: usize,
    height: usize,
    params: &GenerateParams,
) -> Result<Generation> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    params.validate()?;

    let mut grid = Grid::new(width, height)?;
    let mut rng = SeededRng::new(params.seed);
    let max_span = width.max(height) - 1;
    let amplitude = params.initial_amplitude(max_span);

    log::debug!(
        "generating {width}x{height} heightmap (seed {}, roughness {}, amplitude {amplitude})",
        params.seed, params.roughness
    );

    seed_corners(&mut grid, &mut rng, params.corner_values, max_span)?;
    let stats = subdivide(&mut grid, &mut rng, amplitude, params.roughness)?;

    log::debug!(
        "filled {} cells over {} rectangles, max depth {}, {} draws",
        grid.len(), stats.rects, stats.max_depth, rng.draws()
    );

    Ok(Generation { grid, stats, draws: rng.draws(), amplitude })
}

/// Seed TL, TR, BL, BR in order. Corners that coincide on 1-wide or 1-tall
/// grids are seeded once, by the first position that names them; later
/// positions neither draw nor read their supplied value.
fn seed_corners(
    grid: &mut Grid,
    rng: &mut SeededRng,
    supplied: Option<[f32; 4]>,
    max_span: usize,
) -> Result<()> {
    let rect = Rect::covering(grid.width(), grid.height());
    for (i, (row, col)) in rect.corners().into_iter().enumerate() {
        if grid.is_set(row, col)? {
            continue;
        }
        let val = match supplied {
            Some(values) => values[i],
            None => rng.uniform(0.0, max_span as f32),
        };
        grid.set(row, col, val)?;
    }
    Ok(())
}
