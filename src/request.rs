//! Curve requests built from picked points.
//!
//! A [`CurveRequest`] names an [`Algorithm`] and carries the grid points a
//! user picked. [`CurveRequest::rasterize`] derives the primitive's
//! parameters from those points, applies the configured
//! [`DegeneratePolicy`], runs the rasterizer and materializes its output.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};

use crate::config::{DegeneratePolicy, RasterConfig};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::{
    bezier_curve, bresenham_circle, bresenham_line, bspline_curve, dda_line, hermite_curve,
    midpoint_ellipse, midpoint_hyperbola, midpoint_parabola, wu_line, Pixel,
};

/// Rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// DDA line.
    Dda,
    /// Integer Bresenham line.
    Bresenham,
    /// Wu anti-aliased line.
    Wu,
    /// Bresenham circle: center, then a point on the circle.
    Circle,
    /// Midpoint ellipse: center, then a corner defining both semi-axes.
    Ellipse,
    /// Midpoint hyperbola: center, then a corner defining `a` and `b`.
    Hyperbola,
    /// Midpoint parabola: vertex, then a point setting scale and direction.
    Parabola,
    /// Hermite curve: `P0`, `P1`, `M0`, `M1`.
    Hermite,
    /// Cubic Bezier: four control points.
    Bezier,
    /// Uniform cubic B-spline: four or more control points.
    BSpline,
}

impl Algorithm {
    /// Every algorithm, lines first.
    pub const ALL: [Self; 10] = [
        Self::Dda,
        Self::Bresenham,
        Self::Wu,
        Self::Circle,
        Self::Ellipse,
        Self::Hyperbola,
        Self::Parabola,
        Self::Hermite,
        Self::Bezier,
        Self::BSpline,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
            Self::Wu => "wu",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Hyperbola => "hyperbola",
            Self::Parabola => "parabola",
            Self::Hermite => "hermite",
            Self::Bezier => "bezier",
            Self::BSpline => "bspline",
        }
    }

    /// Minimum number of picked points.
    #[must_use]
    pub const fn min_points(self) -> usize {
        match self {
            Self::Hermite | Self::Bezier | Self::BSpline => 4,
            _ => 2,
        }
    }

    /// True for the parametric cubics, which take a step count.
    #[must_use]
    pub const fn is_parametric(self) -> bool {
        matches!(self, Self::Hermite | Self::Bezier | Self::BSpline)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown algorithm '{s}'")))
    }
}

/// A rasterization request: algorithm, picked points and optional overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRequest {
    algorithm: Algorithm,
    points: Vec<Point>,
    steps: Option<u32>,
    limit: Option<u32>,
}

impl CurveRequest {
    /// Create a request from picked points.
    pub fn new<P: Into<Point>>(algorithm: Algorithm, points: impl IntoIterator<Item = P>) -> Self {
        Self {
            algorithm,
            points: points.into_iter().map(Into::into).collect(),
            steps: None,
            limit: None,
        }
    }

    /// Override the parametric step count.
    #[must_use]
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Override the hyperbola/parabola limit.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The requested algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The picked points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Run the rasterizer and collect its samples in emission order.
    ///
    /// # Errors
    ///
    /// - [`Error::InsufficientPoints`] if fewer points than
    ///   [`Algorithm::min_points`] were picked.
    /// - [`Error::InvalidArgument`] for non-finite coordinates.
    /// - [`Error::DegenerateParameter`] for a non-positive derived semi-axis
    ///   or focal parameter under [`DegeneratePolicy::Reject`]. A zero circle
    ///   radius is never an error.
    pub fn rasterize(&self, config: &RasterConfig) -> Result<Vec<Pixel>> {
        let algorithm = self.algorithm;
        let required = algorithm.min_points();
        if self.points.len() < required {
            return Err(Error::InsufficientPoints {
                algorithm: algorithm.name(),
                required,
                actual: self.points.len(),
            });
        }
        if let Some(p) = self.points.iter().find(|p| !p.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "non-finite point ({}, {})",
                p.x, p.y
            )));
        }

        let policy = config.degenerate_policy;
        let steps = self.steps.unwrap_or(config.steps);
        let limit = self.limit.or(config.conic_limit);
        let (p1, p2) = (self.points[0], self.points[1]);
        let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);

        debug!(
            "rasterizing {algorithm} from {} points (steps={steps}, limit={limit:?})",
            self.points.len()
        );

        let pixels: Vec<Pixel> = match algorithm {
            Algorithm::Dda => dda_line(p1.x, p1.y, p2.x, p2.y).collect(),
            Algorithm::Bresenham => {
                let (a, b) = (p1.to_grid(), p2.to_grid());
                bresenham_line(a.x, a.y, b.x, b.y).collect()
            }
            Algorithm::Wu => wu_line(p1.x, p1.y, p2.x, p2.y).collect(),
            Algorithm::Circle => bresenham_circle(p1.x, p1.y, p1.distance(p2)).collect(),
            Algorithm::Ellipse => {
                let a = checked_dimension(policy, "a", dx.abs())?;
                let b = checked_dimension(policy, "b", dy.abs())?;
                midpoint_ellipse(p1.x, p1.y, a, b).collect()
            }
            Algorithm::Hyperbola => {
                let a = checked_dimension(policy, "a", dx.abs())?;
                let b = checked_dimension(policy, "b", dy.abs())?;
                midpoint_hyperbola(p1.x, p1.y, a, b, limit).collect()
            }
            Algorithm::Parabola => {
                let p = checked_dimension(policy, "p", dx.abs().max(dy.abs()))?;
                let direction = if dx >= 0.0 { 1 } else { -1 };
                midpoint_parabola(p1.x, p1.y, p, direction, limit).collect()
            }
            Algorithm::Hermite => {
                let [p0, p1, m0, m1] = first_four(&self.points);
                hermite_curve(p0, p1, m0, m1, steps)?.collect()
            }
            Algorithm::Bezier => {
                let [p0, p1, p2, p3] = first_four(&self.points);
                bezier_curve(p0, p1, p2, p3, steps)?.collect()
            }
            Algorithm::BSpline => bspline_curve(&self.points, steps)?.collect(),
        };

        debug!("{algorithm} produced {} samples", pixels.len());
        Ok(pixels)
    }
}

/// Apply the degenerate-dimension policy to a derived semi-axis or parameter.
fn checked_dimension(policy: DegeneratePolicy, name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        return Ok(value);
    }
    match policy {
        DegeneratePolicy::Reject => {
            trace!("rejecting degenerate {name} = {value}");
            Err(Error::DegenerateParameter { name, value })
        }
        DegeneratePolicy::Clamp => {
            warn!("{name} = {value} is not positive; clamping to 1");
            Ok(value)
        }
    }
}

/// First four points; callers have already checked there are at least four.
fn first_four(points: &[Point]) -> [Point; 4] {
    [points[0], points[1], points[2], points[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp() -> RasterConfig {
        RasterConfig {
            degenerate_policy: DegeneratePolicy::Clamp,
            ..RasterConfig::default()
        }
    }

    fn coords(pixels: &[Pixel]) -> Vec<(i32, i32)> {
        pixels.iter().map(Pixel::coord).collect()
    }

    #[test]
    fn test_algorithm_round_trips_through_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(" Bezier ".parse::<Algorithm>().unwrap(), Algorithm::Bezier);
        assert!("spiral".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_line_request() {
        let req = CurveRequest::new(Algorithm::Bresenham, [(0.0, 0.0), (3.0, 1.0)]);
        let out = req.rasterize(&RasterConfig::default()).unwrap();
        assert_eq!(coords(&out), vec![(0, 0), (1, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_too_few_points() {
        let req = CurveRequest::new(Algorithm::Circle, [(0.0, 0.0)]);
        let err = req.rasterize(&RasterConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientPoints {
                algorithm: "circle",
                required: 2,
                actual: 1
            }
        ));

        let req = CurveRequest::new(Algorithm::BSpline, [(0.0, 0.0); 3]);
        assert!(req.rasterize(&RasterConfig::default()).is_err());
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let req = CurveRequest::new(Algorithm::Dda, [(0.0, 0.0), (f64::INFINITY, 1.0)]);
        assert!(matches!(
            req.rasterize(&RasterConfig::default()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_circle_radius_from_distance() {
        let req = CurveRequest::new(Algorithm::Circle, [(0.0, 0.0), (3.0, 4.0)]);
        let out = req.rasterize(&RasterConfig::default()).unwrap();
        assert_eq!(out[0].coord(), (0, 5));
    }

    #[test]
    fn test_ellipse_axes_from_corner() {
        let req = CurveRequest::new(Algorithm::Ellipse, [(1.0, 1.0), (4.0, 3.0)]);
        let out = req.rasterize(&RasterConfig::default()).unwrap();
        let direct: Vec<Pixel> = midpoint_ellipse(1.0, 1.0, 3.0, 2.0).collect();
        assert_eq!(out, direct);
    }

    #[test]
    fn test_degenerate_rejected_by_default() {
        let flat = [(0.0, 0.0), (4.0, 0.0)];
        for algorithm in [Algorithm::Ellipse, Algorithm::Hyperbola] {
            let err = CurveRequest::new(algorithm, flat)
                .rasterize(&RasterConfig::default())
                .unwrap_err();
            assert!(matches!(err, Error::DegenerateParameter { name: "b", .. }));
        }

        let same = [(3.0, 3.0), (3.0, 3.0)];
        let err = CurveRequest::new(Algorithm::Parabola, same)
            .rasterize(&RasterConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateParameter { name: "p", .. }));
    }

    #[test]
    fn test_degenerate_clamped_by_policy() {
        // Flat corner: b = 0 is clamped to 1 by the rasterizer
        let req = CurveRequest::new(Algorithm::Ellipse, [(0.0, 0.0), (4.0, 0.0)]);
        let out = req.rasterize(&clamp()).unwrap();
        assert!(out.iter().any(|p| p.y == 1));
    }

    #[test]
    fn test_zero_radius_circle_always_drawn() {
        let req = CurveRequest::new(Algorithm::Circle, [(2.0, 2.0), (2.0, 2.0)]);
        for config in [RasterConfig::default(), clamp()] {
            let out = req.rasterize(&config).unwrap();
            assert_eq!(coords(&out), vec![(2, 3), (2, 1), (3, 2), (1, 2)]);
        }
    }

    #[test]
    fn test_parabola_direction_from_second_point() {
        let req = CurveRequest::new(Algorithm::Parabola, [(0.0, 0.0), (-2.0, 1.0)]).limit(6);
        let out = req.rasterize(&RasterConfig::default()).unwrap();
        assert!(out.iter().all(|p| p.x <= 0));
        assert!(out.iter().any(|p| p.x == -6));
    }

    #[test]
    fn test_config_limit_applies_when_request_has_none() {
        let config = RasterConfig {
            conic_limit: Some(3),
            ..RasterConfig::default()
        };
        let req = CurveRequest::new(Algorithm::Hyperbola, [(0.0, 0.0), (2.0, 1.0)]);
        let out = req.rasterize(&config).unwrap();
        assert_eq!(out.iter().map(|p| p.y).max(), Some(3));
    }

    #[test]
    fn test_parametric_steps_default_from_config() {
        let req = CurveRequest::new(
            Algorithm::Bezier,
            [(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)],
        );
        let config = RasterConfig {
            steps: 1,
            ..RasterConfig::default()
        };
        let out = req.rasterize(&config).unwrap();
        assert_eq!(coords(&out), vec![(0, 0), (100, 0)]);

        let out = req.steps(2).rasterize(&config).unwrap();
        assert_eq!(coords(&out), vec![(0, 0), (50, 75), (100, 0)]);
    }

    #[test]
    fn test_hermite_uses_first_four_points() {
        let req = CurveRequest::new(
            Algorithm::Hermite,
            [(0.0, 0.0), (10.0, 0.0), (0.0, 0.0), (0.0, 0.0), (99.0, 99.0)],
        )
        .steps(10);
        let out = req.rasterize(&RasterConfig::default()).unwrap();
        assert_eq!(out.last().map(Pixel::coord), Some((10, 0)));
    }
}
