//! # Curve-Raster
//!
//! Discrete rasterization of continuous curves onto an integer grid.
//!
//! Every algorithm turns a geometric primitive into an ordered, duplicate-free
//! sequence of `(x, y, intensity)` samples, reproducing the classical
//! algorithms cell for cell.
//!
//! ## Algorithms
//!
//! - **Lines**: DDA, integer Bresenham, Wu anti-aliased
//! - **Conics**: Bresenham circle, midpoint ellipse, hyperbola and parabola
//! - **Cubics**: Hermite, Bezier and uniform B-spline through basis matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use curve_raster::prelude::*;
//!
//! let pixels: Vec<Pixel> = bresenham_line(0, 0, 5, 2).collect();
//! assert_eq!(pixels.first().map(Pixel::coord), Some((0, 0)));
//! assert_eq!(pixels.last().map(Pixel::coord), Some((5, 2)));
//!
//! let request = CurveRequest::new(Algorithm::Circle, [(0.0, 0.0), (3.0, 4.0)]);
//! let circle = request.rasterize(&RasterConfig::default())?;
//! assert!(circle.iter().all(|p| p.intensity == 1.0));
//! # Ok::<(), curve_raster::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Foley, van Dam, Feiner & Hughes (1990). *Computer Graphics: Principles and Practice*.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Shared rounding and fractional-part helpers.
pub mod numeric;

/// Geometric primitives (points, grid cells).
pub mod geometry;

/// Dense matrices for basis-matrix evaluation.
pub mod linalg;

// ============================================================================
// Rasterization
// ============================================================================

/// Line, conic and parametric rasterizers.
pub mod raster;

/// Requests built from picked points.
pub mod request;

/// Committed curves and step playback.
pub mod playback;

// ============================================================================
// Configuration & Errors
// ============================================================================

/// Rasterization settings.
pub mod config;

/// Error types for curve-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use curve_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{DegeneratePolicy, RasterConfig};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{GridPoint, Point};
    pub use crate::playback::Playback;
    pub use crate::raster::{
        bezier_curve, bresenham_circle, bresenham_line, bspline_curve, cubic_curve, dda_line,
        hermite_curve, midpoint_ellipse, midpoint_hyperbola, midpoint_parabola, wu_line,
        CubicBasis, Emitted, Pixel,
    };
    pub use crate::request::{Algorithm, CurveRequest};
}
