//! Cubic parametric curves evaluated through basis matrices.
//!
//! Each sample at uniformly spaced `t ∈ [0, 1]` is `([t³, t², t, 1] · M) · G`:
//! the basis matrix `M` first turns `t` into one weight per control point,
//! then the weights blend the window's geometry `G` (one row per control
//! point). Weighting first keeps the endpoint samples exact, since at `t = 0`
//! and `t = 1` the Hermite and Bezier weight rows are unit vectors.

use super::{Emitted, Pixel};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::linalg::Matrix;
use crate::numeric::round_to_grid;

/// Control points consumed per cubic segment.
const SEGMENT_POINTS: usize = 4;

/// Basis matrix family for a cubic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubicBasis {
    /// Hermite: geometry is `[P0, P1, M0, M1]` (endpoints then tangents).
    Hermite,
    /// Cubic Bezier: four control points.
    Bezier,
    /// Uniform cubic B-spline: one segment per 4-point window.
    BSpline,
}

impl CubicBasis {
    /// Integer basis rows; the matrix is these times [`Self::scale`].
    fn rows(self) -> [[f64; 4]; 4] {
        match self {
            Self::Hermite => [
                [2.0, -2.0, 1.0, 1.0],
                [-3.0, 3.0, -2.0, -1.0],
                [0.0, 0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
            ],
            Self::Bezier => [
                [-1.0, 3.0, -3.0, 1.0],
                [3.0, -6.0, 3.0, 0.0],
                [-3.0, 3.0, 0.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
            ],
            Self::BSpline => [
                [-1.0, 3.0, -3.0, 1.0],
                [3.0, -6.0, 3.0, 0.0],
                [-3.0, 0.0, 3.0, 0.0],
                [1.0, 4.0, 1.0, 0.0],
            ],
        }
    }

    fn scale(self) -> f64 {
        match self {
            Self::Hermite | Self::Bezier => 1.0,
            Self::BSpline => 1.0 / 6.0,
        }
    }

    /// The 4×4 basis matrix.
    #[must_use]
    pub fn matrix(self) -> Matrix {
        Matrix::from_rows(&self.rows()).scaled(self.scale())
    }

    /// Control-point weights `[t³, t², t, 1] · M` at parameter `t`.
    #[must_use]
    pub fn weights(self, t: f64) -> [f64; 4] {
        let powers = [t * t * t, t * t, t, 1.0];
        let rows = self.rows();
        let scale = self.scale();

        let mut weights = [0.0; 4];
        for (j, w) in weights.iter_mut().enumerate() {
            let sum: f64 = powers.iter().zip(&rows).map(|(p, row)| p * row[j]).sum();
            *w = sum * scale;
        }
        weights
    }

    /// Short name used in errors and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hermite => "hermite",
            Self::Bezier => "bezier",
            Self::BSpline => "bspline",
        }
    }

    /// Monomial coefficients `M · G` (4×2) for one window of control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixDimension`] unless `window` holds four points.
    pub fn coefficients(self, window: &[Point]) -> Result<Matrix> {
        let geometry = Matrix::new(
            window.len(),
            2,
            window.iter().flat_map(|p| [p.x, p.y]).collect(),
        )?;
        self.matrix().mul(&geometry)
    }
}

/// Uniform-parameter samples over one or more cubic segments.
#[derive(Debug, Clone)]
pub struct CubicSamples {
    basis: CubicBasis,
    windows: Vec<[Point; SEGMENT_POINTS]>,
    steps: u32,
    segment: usize,
    step: u32,
}

impl CubicSamples {
    fn new(basis: CubicBasis, points: &[Point], steps: u32) -> Self {
        let windows = points
            .windows(SEGMENT_POINTS)
            .map(|w| [w[0], w[1], w[2], w[3]])
            .collect();

        Self {
            basis,
            windows,
            steps,
            segment: 0,
            step: 0,
        }
    }

    /// Number of raw samples still to come.
    fn remaining(&self) -> usize {
        let per_segment = self.steps as usize + 1;
        let segments_left = self.windows.len().saturating_sub(self.segment);
        (segments_left * per_segment).saturating_sub(self.step as usize)
    }
}

impl Iterator for CubicSamples {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        let window = self.windows.get(self.segment)?;

        let t = if self.steps > 0 {
            f64::from(self.step) / f64::from(self.steps)
        } else {
            0.0
        };
        let weights = self.basis.weights(t);
        let (x, y) = weights
            .iter()
            .zip(window)
            .fold((0.0, 0.0), |(x, y), (w, p)| (x + w * p.x, y + w * p.y));

        if self.step >= self.steps {
            self.step = 0;
            self.segment += 1;
        } else {
            self.step += 1;
        }

        Some(Pixel::opaque(round_to_grid(x), round_to_grid(y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

/// Rasterize a cubic curve from a slice of control points.
///
/// Hermite and Bezier take exactly four points; the B-spline takes any number
/// and yields nothing for fewer than four. Each segment contributes
/// `steps + 1` raw samples (one at `t = 0` when `steps == 0`).
///
/// # Errors
///
/// Returns [`Error::InsufficientPoints`] or [`Error::InvalidArgument`] when a
/// Hermite or Bezier curve does not get exactly four points.
pub fn cubic_curve(basis: CubicBasis, points: &[Point], steps: u32) -> Result<Emitted<CubicSamples>> {
    if basis != CubicBasis::BSpline {
        if points.len() < SEGMENT_POINTS {
            return Err(Error::InsufficientPoints {
                algorithm: basis.name(),
                required: SEGMENT_POINTS,
                actual: points.len(),
            });
        }
        if points.len() > SEGMENT_POINTS {
            return Err(Error::InvalidArgument(format!(
                "{} takes exactly {SEGMENT_POINTS} points, got {}",
                basis.name(),
                points.len()
            )));
        }
    }

    Ok(Emitted::new(CubicSamples::new(basis, points, steps)))
}

/// Hermite curve from endpoints `p0`, `p1` and tangents `m0`, `m1`.
pub fn hermite_curve(
    p0: Point,
    p1: Point,
    m0: Point,
    m1: Point,
    steps: u32,
) -> Result<Emitted<CubicSamples>> {
    cubic_curve(CubicBasis::Hermite, &[p0, p1, m0, m1], steps)
}

/// Cubic Bezier curve through `p0` and `p3`, shaped by `p1` and `p2`.
pub fn bezier_curve(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    steps: u32,
) -> Result<Emitted<CubicSamples>> {
    cubic_curve(CubicBasis::Bezier, &[p0, p1, p2, p3], steps)
}

/// Uniform cubic B-spline over every consecutive 4-point window.
pub fn bspline_curve(points: &[Point], steps: u32) -> Result<Emitted<CubicSamples>> {
    cubic_curve(CubicBasis::BSpline, points, steps)
}
