//! Augmented diamond-square subdivision over rectangles of any size.
//!
//! Each rectangle is split at its floor midpoints, so odd spans work as well
//! as powers of two. Thin rectangles fall back to 1D midpoint displacement.
//!
//! Draw order (one RNG draw per written cell, none for skipped cells):
//!   Area:  top, bottom, left, right edge midpoints, then the center,
//!          then quadrants top-left, top-right, bottom-left, bottom-right.
//!   Strip: the midpoint of each line (top then bottom, or left then right),
//!          then the first half, then the second.
//!
//! Edge midpoints shared with an already-processed neighbour are skipped,
//! never recomputed. Any other double write is a bug and surfaces as
//! `AlreadySet` wrapped with the failing rectangle and depth.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::rect::{Axis, Rect, Span};
use crate::rng::SeededRng;

/// Counters collected over one subdivision run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubdivisionStats {
    /// Rectangles processed, including degenerate leaves.
    pub rects: usize,
    /// Deepest recursion level reached; the whole grid is depth 0.
    pub max_depth: u32,
    /// Cells written by the engine (corners excluded).
    pub cells_written: usize,
}

/// Fill every unset cell of `grid`, whose four corners must already be set.
///
/// `amplitude` bounds the displacement at depth 0; each recursion level
/// multiplies it by `roughness`.
pub fn subdivide(
    grid: &mut Grid,
    rng: &mut SeededRng,
    amplitude: f32,
    roughness: f32,
) -> Result<SubdivisionStats> {
    let root = Rect::covering(grid.width(), grid.height());
    let mut engine = Subdivider { grid, rng, roughness, stats: SubdivisionStats::default() };
    engine.process(root, amplitude, 0)?;
    Ok(engine.stats)
}

struct Subdivider<'a> {
    grid: &'a mut Grid,
    rng: &'a mut SeededRng,
    roughness: f32,
    stats: SubdivisionStats,
}

impl Subdivider<'_> {
    fn process(&mut self, rect: Rect, amplitude: f32, depth: u32) -> Result<()> {
        self.stats.rects += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.check_corners(rect).map_err(|e| at(rect, depth, e))?;

        match rect.span() {
            Span::Degenerate => Ok(()),
            Span::Strip(axis) => {
                log::trace!("strip fallback ({axis:?}) in {rect} at depth {depth}");
                self.resolve_strip(rect, axis, amplitude)
                    .map_err(|e| at(rect, depth, e))?;
                let next = amplitude * self.roughness;
                for child in rect.halves(axis) {
                    self.process(child, next, depth + 1)?;
                }
                Ok(())
            }
            Span::Area => {
                self.resolve_area(rect, amplitude)
                    .map_err(|e| at(rect, depth, e))?;
                let next = amplitude * self.roughness;
                for child in rect.quadrants() {
                    self.process(child, next, depth + 1)?;
                }
                Ok(())
            }
        }
    }

    fn check_corners(&self, rect: Rect) -> Result<()> {
        for (row, col) in rect.corners() {
            if !self.grid.is_set(row, col)? {
                return Err(Error::UnseededCorner { row, col });
            }
        }
        Ok(())
    }

    /// One-dimensional step: midpoint of each long edge.
    fn resolve_strip(&mut self, rect: Rect, axis: Axis, amplitude: f32) -> Result<()> {
        let Rect { r0, c0, r1, c1 } = rect;
        match axis {
            Axis::Horizontal => {
                let cm = rect.mid_col();
                self.midpoint((r0, cm), (r0, c0), (r0, c1), amplitude)?;
                if r1 != r0 {
                    self.midpoint((r1, cm), (r1, c0), (r1, c1), amplitude)?;
                }
            }
            Axis::Vertical => {
                let rm = rect.mid_row();
                self.midpoint((rm, c0), (r0, c0), (r1, c0), amplitude)?;
                if c1 != c0 {
                    self.midpoint((rm, c1), (r0, c1), (r1, c1), amplitude)?;
                }
            }
        }
        Ok(())
    }

    /// Square step (edge midpoints) followed by the diamond step (center).
    fn resolve_area(&mut self, rect: Rect, amplitude: f32) -> Result<()> {
        let Rect { r0, c0, r1, c1 } = rect;
        let (rm, cm) = (rect.mid_row(), rect.mid_col());

        let top = self.midpoint((r0, cm), (r0, c0), (r0, c1), amplitude)?;
        let bottom = self.midpoint((r1, cm), (r1, c0), (r1, c1), amplitude)?;
        let left = self.midpoint((rm, c0), (r0, c0), (r1, c0), amplitude)?;
        let right = self.midpoint((rm, c1), (r0, c1), (r1, c1), amplitude)?;

        let center = (top + bottom + left + right) * 0.25 + self.rng.offset(amplitude);
        self.write(rm, cm, center)
    }

    /// Set `cell` to the mean of `a` and `b` plus one displacement, unless a
    /// neighbour already did. Returns the cell's value either way.
    fn midpoint(
        &mut self,
        cell: (usize, usize),
        a: (usize, usize),
        b: (usize, usize),
        amplitude: f32,
    ) -> Result<f32> {
        let (row, col) = cell;
        if self.grid.is_set(row, col)? {
            return self.grid.get(row, col);
        }
        let mean = (self.grid.get(a.0, a.1)? + self.grid.get(b.0, b.1)?) * 0.5;
        let val = mean + self.rng.offset(amplitude);
        self.write(row, col, val)?;
        Ok(val)
    }

    fn write(&mut self, row: usize, col: usize, val: f32) -> Result<()> {
        self.grid.set(row, col, val)?;
        self.stats.cells_written += 1;
        Ok(())
    }
}

fn at(rect: Rect, depth: u32, err: Error) -> Error {
    Error::Subdivision { rect, depth, source: Box::new(err) }
}
