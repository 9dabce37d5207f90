//! Recursion unit of the subdivision engine.

use std::fmt;

/// Axis along which a strip still has room to be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// At most two rows tall; split along columns.
    Horizontal,
    /// At most two columns wide; split along rows.
    Vertical,
}

/// What a rectangle still needs filled, decided from its spans alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Both spans ≤ 1: every cell is a corner.
    Degenerate,
    /// Exactly one span ≤ 1: one-dimensional midpoint displacement.
    Strip(Axis),
    /// Both spans ≥ 2: square step then diamond step.
    Area,
}

/// Inclusive cell rectangle `(r0, c0)`–`(r1, c1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub r0: usize,
    pub c0: usize,
    pub r1: usize,
    pub c1: usize,
}

impl Rect {
    pub fn new(r0: usize, c0: usize, r1: usize, c1: usize) -> Self {
        debug_assert!(r0 <= r1 && c0 <= c1, "inverted rectangle");
        Self { r0, c0, r1, c1 }
    }

    /// Rectangle covering a whole `width`×`height` grid.
    pub fn covering(width: usize, height: usize) -> Self {
        Self::new(0, 0, height - 1, width - 1)
    }

    #[inline]
    pub fn row_span(&self) -> usize {
        self.r1 - self.r0
    }

    #[inline]
    pub fn col_span(&self) -> usize {
        self.c1 - self.c0
    }

    /// Floor midpoint row. Strictly inside the rectangle when `row_span() ≥ 2`.
    #[inline]
    pub fn mid_row(&self) -> usize {
        self.r0 + self.row_span() / 2
    }

    /// Floor midpoint column.
    #[inline]
    pub fn mid_col(&self) -> usize {
        self.c0 + self.col_span() / 2
    }

    /// Corners in seeding order: top-left, top-right, bottom-left, bottom-right.
    /// Coincident corners of thin rectangles are repeated.
    pub fn corners(&self) -> [(usize, usize); 4] {
        [
            (self.r0, self.c0),
            (self.r0, self.c1),
            (self.r1, self.c0),
            (self.r1, self.c1),
        ]
    }

    pub fn span(&self) -> Span {
        match (self.row_span() <= 1, self.col_span() <= 1) {
            (true, true) => Span::Degenerate,
            (true, false) => Span::Strip(Axis::Horizontal),
            (false, true) => Span::Strip(Axis::Vertical),
            (false, false) => Span::Area,
        }
    }

    /// Four children of an `Area` split at `(rm, cm)`, in recursion order:
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Rect; 4] {
        let (rm, cm) = (self.mid_row(), self.mid_col());
        [
            Rect::new(self.r0, self.c0, rm, cm),
            Rect::new(self.r0, cm, rm, self.c1),
            Rect::new(rm, self.c0, self.r1, cm),
            Rect::new(rm, cm, self.r1, self.c1),
        ]
    }

    /// Two children of a strip split along `axis`, first half first.
    pub fn halves(&self, axis: Axis) -> [Rect; 2] {
        match axis {
            Axis::Horizontal => {
                let cm = self.mid_col();
                [
                    Rect::new(self.r0, self.c0, self.r1, cm),
                    Rect::new(self.r0, cm, self.r1, self.c1),
                ]
            }
            Axis::Vertical => {
                let rm = self.mid_row();
                [
                    Rect::new(self.r0, self.c0, rm, self.c1),
                    Rect::new(rm, self.c0, self.r1, self.c1),
                ]
            }
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows {}..={}, cols {}..={}", self.r0, self.r1, self.c0, self.c1)
    }
}
