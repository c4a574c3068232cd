//! Line rasterizers.
//!
//! Implements the DDA, integer Bresenham and Wu anti-aliased line algorithms
//! as lazy sample iterators.

use std::collections::VecDeque;

use super::{Emitted, Pixel};
use crate::numeric::{fractional_part, reverse_fractional_part, round_to_grid};

/// Below this horizontal extent Wu's algorithm draws a plain vertical run.
const WU_VERTICAL_EPSILON: f64 = 0.001;

// ============================================================================
// DDA
// ============================================================================

/// Digital differential analyzer stepping state.
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: usize,
}

impl DdaLine {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());

        if steps == 0.0 {
            return Self {
                x: x1,
                y: y1,
                x_inc: 0.0,
                y_inc: 0.0,
                remaining: 1,
            };
        }

        Self {
            x: x1,
            y: y1,
            x_inc: dx / steps,
            y_inc: dy / steps,
            remaining: (steps.trunc() as usize).saturating_add(1),
        }
    }
}

impl Iterator for DdaLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let pixel = Pixel::opaque(round_to_grid(self.x), round_to_grid(self.y));
        self.x += self.x_inc;
        self.y += self.y_inc;
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Rasterize a line with the DDA algorithm.
///
/// Takes `max(|dx|, |dy|)` unit steps along the major axis and emits the
/// rounded position at each of the `steps + 1` positions. Identical endpoints
/// give a single sample.
pub fn dda_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Emitted<DdaLine> {
    Emitted::new(DdaLine::new(x1, y1, x2, y2))
}

// ============================================================================
// Bresenham
// ============================================================================

/// Integer Bresenham stepping state.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i64,
    y: i64,
    x_end: i64,
    y_end: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Iterator for BresenhamLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.done {
            return None;
        }

        let pixel = Pixel::opaque(self.x as i32, self.y as i32);

        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(pixel);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(pixel)
    }
}

/// Rasterize a line with the integer Bresenham algorithm.
///
/// Both endpoints are included; the walk stops exactly on `(x2, y2)`.
pub fn bresenham_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Emitted<BresenhamLine> {
    let (x1, y1, x2, y2) = (
        i64::from(x1),
        i64::from(y1),
        i64::from(x2),
        i64::from(y2),
    );
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();

    Emitted::new(BresenhamLine {
        x: x1,
        y: y1,
        x_end: x2,
        y_end: y2,
        dx,
        dy,
        sx: if x1 < x2 { 1 } else { -1 },
        sy: if y1 < y2 { 1 } else { -1 },
        err: dx - dy,
        done: false,
    })
}

// ============================================================================
// Wu
// ============================================================================

#[derive(Debug, Clone)]
enum WuSpan {
    Vertical {
        x: i32,
        y: i32,
        y_end: i32,
    },
    Interior {
        x: i32,
        x_end: i32,
        intery: f64,
        gradient: f64,
        steep: bool,
    },
    Done,
}

/// Wu anti-aliased line state: endpoint caps first, then the interior span.
#[derive(Debug, Clone)]
pub struct WuLine {
    pending: VecDeque<Pixel>,
    span: WuSpan,
}

impl WuLine {
    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;

        if dx.abs() < WU_VERTICAL_EPSILON {
            let (y_lo, y_hi) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
            return Self {
                pending: VecDeque::new(),
                span: WuSpan::Vertical {
                    x: round_to_grid(x1),
                    y: y_lo.trunc() as i32,
                    y_end: y_hi.trunc() as i32,
                },
            };
        }

        let steep = dy.abs() > dx.abs();
        let (x1, y1, x2, y2, dx, dy) = if steep {
            (y1, x1, y2, x2, dy, dx)
        } else {
            (x1, y1, x2, y2, dx, dy)
        };
        let (x1, y1, x2, y2) = if x1 > x2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };

        let gradient = if dx.abs() > WU_VERTICAL_EPSILON { dy / dx } else { 1.0 };

        let mut pending = VecDeque::with_capacity(4);

        // First endpoint
        let xend = x1.round();
        let yend = y1 + gradient * (xend - x1);
        let xgap = reverse_fractional_part(x1 + 0.5);
        let xpxl1 = xend as i32;
        let ypxl1 = yend.floor() as i32;
        push_pair(&mut pending, steep, xpxl1, ypxl1, yend, xgap);

        let intery = yend + gradient;

        // Second endpoint
        let xend = x2.round();
        let yend = y2 + gradient * (xend - x2);
        let xgap = fractional_part(x2 + 0.5);
        let xpxl2 = xend as i32;
        let ypxl2 = yend.floor() as i32;
        push_pair(&mut pending, steep, xpxl2, ypxl2, yend, xgap);

        Self {
            pending,
            span: WuSpan::Interior {
                x: xpxl1 + 1,
                x_end: xpxl2,
                intery,
                gradient,
                steep,
            },
        }
    }
}

/// Queue the two cells straddling `y` at major-axis position `major`.
fn push_pair(out: &mut VecDeque<Pixel>, steep: bool, major: i32, minor: i32, y: f64, gap: f64) {
    let near = reverse_fractional_part(y) * gap;
    let far = fractional_part(y) * gap;
    if steep {
        out.push_back(Pixel::new(minor, major, near));
        out.push_back(Pixel::new(minor + 1, major, far));
    } else {
        out.push_back(Pixel::new(major, minor, near));
        out.push_back(Pixel::new(major, minor + 1, far));
    }
}

impl Iterator for WuLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if let Some(pixel) = self.pending.pop_front() {
            return Some(pixel);
        }

        match &mut self.span {
            WuSpan::Vertical { x, y, y_end } => {
                if *y > *y_end {
                    self.span = WuSpan::Done;
                    return None;
                }
                let pixel = Pixel::opaque(*x, *y);
                *y += 1;
                Some(pixel)
            }
            WuSpan::Interior {
                x,
                x_end,
                intery,
                gradient,
                steep,
            } => {
                if *x >= *x_end {
                    self.span = WuSpan::Done;
                    return None;
                }
                let steep = *steep;
                push_pair(&mut self.pending, steep, *x, intery.floor() as i32, *intery, 1.0);
                *intery += *gradient;
                *x += 1;
                self.pending.pop_front()
            }
            WuSpan::Done => None,
        }
    }
}

/// Rasterize an anti-aliased line with Xiaolin Wu's algorithm.
///
/// Emits the two endpoint cap pairs, then for every interior column along the
/// major axis two adjacent cells weighted by the fractional and complementary
/// fractional parts of the interpolated minor coordinate. Lines with
/// `|dx| < 0.001` become an opaque vertical run.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn wu_line(x1: f64, y1: f64, x2: f64, y2: f64) -> Emitted<WuLine> {
    Emitted::new(WuLine::new(x1, y1, x2, y2))
}

// ============================================================================
// Tests
// ============================================================================
