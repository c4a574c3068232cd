//! Conic rasterizers.
//!
//! Each conic walks one symmetric octant or quadrant with a decision variable
//! and reflects every computed point into its symmetric copies. Radii and
//! parameters are normalized to `max(1, round(v))`; centers are rounded to the
//! grid.

use super::{Emitted, Mirror, Pixel};
use crate::numeric::{default_limit, normalize_dimension, round_to_grid};

/// Walks a conic one base point at a time, filling the reflection buffer.
trait Stepper {
    fn mirror(&mut self) -> &mut Mirror;

    /// Compute the next base point and queue its reflections.
    /// Returns `false` once the walk is finished.
    fn advance(&mut self) -> bool;

    fn next_pixel(&mut self) -> Option<Pixel> {
        loop {
            if let Some(pixel) = self.mirror().pop() {
                return Some(pixel);
            }
            if !self.advance() {
                return None;
            }
        }
    }
}

/// Offset a center by a step, staying in `i32` grid space.
#[inline]
fn at(c: i64, offset: i64) -> i32 {
    (c + offset) as i32
}

fn quadrants(mirror: &mut Mirror, cx: i64, cy: i64, x: i64, y: i64) {
    mirror.fill(&[
        (at(cx, x), at(cy, y)),
        (at(cx, -x), at(cy, y)),
        (at(cx, x), at(cy, -y)),
        (at(cx, -x), at(cy, -y)),
    ]);
}

// ============================================================================
// Circle
// ============================================================================

/// Bresenham circle walk over the second octant, reflected 8 ways.
#[derive(Debug, Clone)]
pub struct CircleOctants {
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    d: i64,
    mirror: Mirror,
}

impl Stepper for CircleOctants {
    fn mirror(&mut self) -> &mut Mirror {
        &mut self.mirror
    }

    fn advance(&mut self) -> bool {
        if self.x > self.y {
            return false;
        }

        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        self.mirror.fill(&[
            (at(cx, x), at(cy, y)),
            (at(cx, -x), at(cy, y)),
            (at(cx, x), at(cy, -y)),
            (at(cx, -x), at(cy, -y)),
            (at(cx, y), at(cy, x)),
            (at(cx, -y), at(cy, x)),
            (at(cx, y), at(cy, -x)),
            (at(cx, -y), at(cy, -x)),
        ]);

        if self.d < 0 {
            self.d += 2 * x + 3;
        } else {
            self.d += 2 * (x - y) + 5;
            self.y -= 1;
        }
        self.x += 1;
        true
    }
}

impl Iterator for CircleOctants {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        self.next_pixel()
    }
}

/// Rasterize a circle with Bresenham's integer algorithm.
///
/// Walks from `(0, r)` while `x <= y`, emitting all eight octant reflections
/// of every step.
pub fn bresenham_circle(cx: f64, cy: f64, r: f64) -> Emitted<CircleOctants> {
    let r = normalize_dimension(r);
    Emitted::new(CircleOctants {
        cx: i64::from(round_to_grid(cx)),
        cy: i64::from(round_to_grid(cy)),
        x: 0,
        y: r,
        d: 1 - r,
        mirror: Mirror::default(),
    })
}

// ============================================================================
// Ellipse
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum EllipseRegion {
    /// Slope magnitude at most 1, stepping x.
    Upper { d1: f64 },
    /// Steeper part, stepping y down to 0.
    Lower { d2: f64 },
}

/// Two-region midpoint ellipse walk over the first quadrant, reflected 4 ways.
#[derive(Debug, Clone)]
pub struct EllipseQuadrants {
    cx: i64,
    cy: i64,
    a2: f64,
    b2: f64,
    x: i64,
    y: i64,
    region: EllipseRegion,
    mirror: Mirror,
}

impl Stepper for EllipseQuadrants {
    fn mirror(&mut self) -> &mut Mirror {
        &mut self.mirror
    }

    fn advance(&mut self) -> bool {
        let (a2, b2) = (self.a2, self.b2);

        loop {
            match self.region {
                EllipseRegion::Upper { d1 } => {
                    if 2.0 * b2 * self.x as f64 > 2.0 * a2 * self.y as f64 {
                        let x = self.x as f64;
                        let y = self.y as f64;
                        let d2 = b2 * (x + 0.5).powi(2) + a2 * (y - 1.0).powi(2) - a2 * b2;
                        self.region = EllipseRegion::Lower { d2 };
                        continue;
                    }

                    quadrants(&mut self.mirror, self.cx, self.cy, self.x, self.y);

                    let d1 = if d1 < 0.0 {
                        d1 + 2.0 * b2 * self.x as f64 + b2
                    } else {
                        self.y -= 1;
                        d1 + 2.0 * b2 * self.x as f64 - 2.0 * a2 * self.y as f64 + b2
                    };
                    self.x += 1;
                    self.region = EllipseRegion::Upper { d1 };
                    return true;
                }
                EllipseRegion::Lower { d2 } => {
                    if self.y < 0 {
                        return false;
                    }

                    quadrants(&mut self.mirror, self.cx, self.cy, self.x, self.y);

                    let d2 = if d2 > 0.0 {
                        d2 - 2.0 * a2 * self.y as f64 + a2
                    } else {
                        self.x += 1;
                        d2 + 2.0 * b2 * self.x as f64 - 2.0 * a2 * self.y as f64 + a2
                    };
                    self.y -= 1;
                    self.region = EllipseRegion::Lower { d2 };
                    return true;
                }
            }
        }
    }
}

impl Iterator for EllipseQuadrants {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        self.next_pixel()
    }
}

/// Rasterize an axis-aligned ellipse with the two-region midpoint algorithm.
///
/// `a` is the horizontal and `b` the vertical semi-axis. Region one runs while
/// `2·b²·x <= 2·a²·y`; region two continues from where it stopped down to
/// `y = 0`.
pub fn midpoint_ellipse(cx: f64, cy: f64, a: f64, b: f64) -> Emitted<EllipseQuadrants> {
    let a = normalize_dimension(a) as f64;
    let b = normalize_dimension(b);
    let a2 = a * a;
    let b2 = (b * b) as f64;
    let d1 = b2 - a2 * b as f64 + a2 / 4.0;

    Emitted::new(EllipseQuadrants {
        cx: i64::from(round_to_grid(cx)),
        cy: i64::from(round_to_grid(cy)),
        a2,
        b2,
        x: 0,
        y: b,
        region: EllipseRegion::Upper { d1 },
        mirror: Mirror::default(),
    })
}

// ============================================================================
// Hyperbola
// ============================================================================

/// Midpoint walk up the right branch of a hyperbola, reflected 4 ways.
#[derive(Debug, Clone)]
pub struct HyperbolaQuadrants {
    cx: i64,
    cy: i64,
    a2: f64,
    b2: f64,
    x: i64,
    y: i64,
    limit: i64,
    mirror: Mirror,
}

impl Stepper for HyperbolaQuadrants {
    fn mirror(&mut self) -> &mut Mirror {
        &mut self.mirror
    }

    fn advance(&mut self) -> bool {
        if self.y > self.limit {
            return false;
        }

        quadrants(&mut self.mirror, self.cx, self.cy, self.x, self.y);

        // Evaluated fresh at the midpoint every row, not accumulated.
        let x = self.x as f64;
        let y = self.y as f64;
        let d = self.b2 * (x + 0.5).powi(2) - self.a2 * (y + 1.0).powi(2) - self.a2 * self.b2;
        if d < 0.0 {
            self.x += 1;
        }
        self.y += 1;
        true
    }
}

impl Iterator for HyperbolaQuadrants {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        self.next_pixel()
    }
}

/// Rasterize the hyperbola `x²/a² − y²/b² = 1` (both branches).
///
/// Walks `y` from 0 to `limit` (default `max(50, 5·b)`), starting at `x = a`
/// and stepping `x` whenever the midpoint lies inside the curve.
pub fn midpoint_hyperbola(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    limit: Option<u32>,
) -> Emitted<HyperbolaQuadrants> {
    let a = normalize_dimension(a);
    let b = normalize_dimension(b);
    let limit = limit.map_or_else(|| default_limit(b), i64::from);

    Emitted::new(HyperbolaQuadrants {
        cx: i64::from(round_to_grid(cx)),
        cy: i64::from(round_to_grid(cy)),
        a2: (a * a) as f64,
        b2: (b * b) as f64,
        x: a,
        y: 0,
        limit,
        mirror: Mirror::default(),
    })
}

// ============================================================================
// Parabola
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum ParabolaRegion {
    /// Near the vertex (`y < p`), stepping y. Holds `F(x + 1/2, y + 1)`.
    Vertex { d: i64 },
    /// Along the arms, stepping x. Holds `4·F(x + 1, y + 1/2)`.
    Arm { d: i64 },
}

/// Two-region midpoint walk of `y² = 2·p·x`, mirrored across the axis only.
#[derive(Debug, Clone)]
pub struct ParabolaBranches {
    cx: i64,
    cy: i64,
    p: i64,
    direction: i64,
    x: i64,
    y: i64,
    limit: i64,
    region: ParabolaRegion,
    mirror: Mirror,
}

impl ParabolaBranches {
    fn emit(&mut self) {
        let px = at(self.cx, self.direction * self.x);
        if self.y == 0 {
            self.mirror.fill(&[(px, at(self.cy, 0))]);
        } else {
            self.mirror
                .fill(&[(px, at(self.cy, self.y)), (px, at(self.cy, -self.y))]);
        }
    }
}

impl Stepper for ParabolaBranches {
    fn mirror(&mut self) -> &mut Mirror {
        &mut self.mirror
    }

    fn advance(&mut self) -> bool {
        let p = self.p;

        loop {
            match self.region {
                ParabolaRegion::Vertex { d } => {
                    if self.y >= p {
                        let d = (2 * self.y + 1).pow(2) - 8 * p * (self.x + 1);
                        self.region = ParabolaRegion::Arm { d };
                        continue;
                    }
                    if self.x > self.limit {
                        return false;
                    }

                    self.emit();

                    let d = if d > 0 {
                        self.x += 1;
                        d + 2 * self.y + 3 - 2 * p
                    } else {
                        d + 2 * self.y + 3
                    };
                    self.y += 1;
                    self.region = ParabolaRegion::Vertex { d };
                    return true;
                }
                ParabolaRegion::Arm { d } => {
                    if self.x > self.limit {
                        return false;
                    }

                    self.emit();

                    let d = if d < 0 {
                        let next = d + 8 * self.y + 8 - 8 * p;
                        self.y += 1;
                        next
                    } else {
                        d - 8 * p
                    };
                    self.x += 1;
                    self.region = ParabolaRegion::Arm { d };
                    return true;
                }
            }
        }
    }
}

impl Iterator for ParabolaBranches {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        self.next_pixel()
    }
}

/// Rasterize the parabola `y² = 2·p·x` with its vertex at `(cx, cy)`.
///
/// Opens right for `direction >= 0` and left otherwise. Near the vertex the
/// walk steps `y` and picks `x` by midpoint; once the slope passes 1 it steps
/// `x` and picks `y`. Stops when `|x|` exceeds `limit` (default
/// `max(50, 5·p)`). Only the `±y` reflection is applied, and none on the axis.
pub fn midpoint_parabola(
    cx: f64,
    cy: f64,
    p: f64,
    direction: i32,
    limit: Option<u32>,
) -> Emitted<ParabolaBranches> {
    let p = normalize_dimension(p.abs());
    let limit = limit.map_or_else(|| default_limit(p), i64::from);

    Emitted::new(ParabolaBranches {
        cx: i64::from(round_to_grid(cx)),
        cy: i64::from(round_to_grid(cy)),
        p,
        direction: if direction >= 0 { 1 } else { -1 },
        x: 0,
        y: 0,
        limit,
        region: ParabolaRegion::Vertex { d: 1 - p },
        mirror: Mirror::default(),
    })
}

// ============================================================================
// Tests
// ============================================================================
