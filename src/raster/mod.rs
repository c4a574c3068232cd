//! Rasterization of lines, conics and cubic parametric curves.
//!
//! Every rasterizer is a lazy, finite, forward-only iterator of [`Pixel`]
//! samples wrapped in [`Emitted`], which drops any grid cell already yielded
//! by the same call. Output order is first-computed order.
//!
//! # Algorithms
//!
//! - **DDA**, **Bresenham** and **Wu's anti-aliased** lines
//! - **Bresenham circle** (8-way symmetry)
//! - **Midpoint ellipse** and **hyperbola** (4-way symmetry)
//! - **Midpoint parabola** (mirrored across its axis only)
//! - **Hermite**, **Bezier** and **uniform cubic B-spline** curves
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use std::collections::HashSet;

mod conic;
mod line;
mod parametric;

pub use conic::{
    bresenham_circle, midpoint_ellipse, midpoint_hyperbola, midpoint_parabola, CircleOctants,
    EllipseQuadrants, HyperbolaQuadrants, ParabolaBranches,
};
pub use line::{bresenham_line, dda_line, wu_line, BresenhamLine, DdaLine, WuLine};
pub use parametric::{
    bezier_curve, bspline_curve, cubic_curve, hermite_curve, CubicBasis, CubicSamples,
};

/// One rasterized sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    /// Grid column.
    pub x: i32,
    /// Grid row.
    pub y: i32,
    /// Coverage in `[0, 1]`; 1.0 for every algorithm but Wu's.
    pub intensity: f64,
}

impl Pixel {
    /// Create a sample.
    #[must_use]
    pub const fn new(x: i32, y: i32, intensity: f64) -> Self {
        Self { x, y, intensity }
    }

    /// Fully opaque sample.
    #[must_use]
    pub const fn opaque(x: i32, y: i32) -> Self {
        Self::new(x, y, 1.0)
    }

    /// Grid coordinate of this sample.
    #[must_use]
    pub const fn coord(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Per-call de-duplication layer.
///
/// Wraps a raw sample iterator and yields each `(x, y)` at most once, keeping
/// the first sample computed for it. The seen-set lives and dies with the
/// iterator.
#[derive(Debug, Clone)]
pub struct Emitted<I> {
    inner: I,
    seen: HashSet<(i32, i32)>,
}

impl<I> Emitted<I>
where
    I: Iterator<Item = Pixel>,
{
    /// Wrap a raw sample iterator.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }

    /// Unwrap the raw iterator, bypassing de-duplication.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> Iterator for Emitted<I>
where
    I: Iterator<Item = Pixel>,
{
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        loop {
            let pixel = self.inner.next()?;
            if self.seen.insert(pixel.coord()) {
                return Some(pixel);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Queue of symmetric reflections of one computed point.
///
/// Conic steppers fill it with up to eight reflected cells, the iterator
/// drains it before asking for the next base point.
#[derive(Debug, Clone, Default)]
pub(crate) struct Mirror {
    cells: [(i32, i32); 8],
    len: usize,
    pos: usize,
}

impl Mirror {
    pub(crate) fn fill(&mut self, cells: &[(i32, i32)]) {
        debug_assert!(cells.len() <= self.cells.len());
        self.cells[..cells.len()].copy_from_slice(cells);
        self.len = cells.len();
        self.pos = 0;
    }

    pub(crate) fn pop(&mut self) -> Option<Pixel> {
        if self.pos < self.len {
            let (x, y) = self.cells[self.pos];
            self.pos += 1;
            Some(Pixel::opaque(x, y))
        } else {
            None
        }
    }
}
