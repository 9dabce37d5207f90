use serde::Serialize;

use crate::error::{Error, Result};

/// A 2D heightmap of f32 values, row-major, with write-once cells.
/// Width and height are independent; neither needs to be `2^n + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells; `None` until written.
    cells: Vec<Option<f32>>,
}

impl Grid {
    /// Allocate a `width`×`height` grid with every cell unset.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self { width, height, cells: vec![None; len] })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds { row, col, width: self.width, height: self.height });
        }
        Ok(row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        let idx = self.index(row, col)?;
        self.cells[idx].ok_or(Error::UnsetCell { row, col })
    }

    /// Write a cell. Fails with `AlreadySet` if it already holds a value.
    pub fn set(&mut self, row: usize, col: usize, val: f32) -> Result<()> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        if cell.is_some() {
            return Err(Error::AlreadySet { row, col });
        }
        *cell = Some(val);
        Ok(())
    }

    pub fn is_set(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].is_some())
    }

    /// Number of cells not yet written.
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Row-major copy of every value. Fails on the first unset cell.
    pub fn values(&self) -> Result<Vec<f32>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| c.ok_or(Error::UnsetCell { row: i / self.width, col: i % self.width }))
            .collect()
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> Result<[f32; 4]> {
        let (r1, c1) = (self.height - 1, self.width - 1);
        Ok([self.get(0, 0)?, self.get(0, c1)?, self.get(r1, 0)?, self.get(r1, c1)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(Grid::new(0, 5), Err(Error::InvalidDimension { width: 0, height: 5 }));
        assert_eq!(Grid::new(3, 0), Err(Error::InvalidDimension { width: 3, height: 0 }));
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn new_grid_is_entirely_unset() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.len(), 12);
        assert_eq!(g.unset_count(), 12);
        assert_eq!(g.get(2, 3), Err(Error::UnsetCell { row: 2, col: 3 }));
    }

    #[test]
    fn set_is_write_once() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(1, 0, 5.0).unwrap();
        assert_eq!(g.get(1, 0), Ok(5.0));
        assert_eq!(g.set(1, 0, 6.0), Err(Error::AlreadySet { row: 1, col: 0 }));
        assert_eq!(g.get(1, 0), Ok(5.0));
    }

    #[test]
    fn out_of_bounds_uses_declared_extent() {
        let mut g = Grid::new(5, 2).unwrap();
        let oob = Error::OutOfBounds { row: 2, col: 0, width: 5, height: 2 };
        assert_eq!(g.get(2, 0), Err(oob.clone()));
        assert_eq!(g.set(2, 0, 1.0), Err(oob));
        // Flat index 5 exists, but column 5 does not.
        assert!(matches!(g.is_set(0, 5), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn values_reports_first_unset_cell() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(0, 0, 1.0).unwrap();
        g.set(0, 1, 2.0).unwrap();
        assert_eq!(g.values(), Err(Error::UnsetCell { row: 1, col: 0 }));
        g.set(1, 0, 3.0).unwrap();
        g.set(1, 1, 4.0).unwrap();
        assert_eq!(g.values(), Ok(vec![1.0, 2.0, 3.0, 4.0]));
        assert_eq!(g.corners(), Ok([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn single_cell_corners_coincide() {
        let mut g = Grid::new(1, 1).unwrap();
        g.set(0, 0, 7.5).unwrap();
        assert_eq!(g.corners(), Ok([7.5; 4]));
    }
}
