//! Committed curves and step-by-step playback.
//!
//! Holds the materialized output of every drawn curve. The most recent one is
//! the *current* curve and can be scrubbed: only its first `step` samples are
//! visible, while earlier curves are always shown in full. Picked grid cells
//! accumulate until a draw consumes them.
//!
//! In step-by-step mode a freshly committed curve starts hidden at step 0 so
//! it can be revealed one sample at a time; otherwise it is shown in full.

use log::debug;

use crate::config::RasterConfig;
use crate::error::Result;
use crate::geometry::GridPoint;
use crate::raster::Pixel;
use crate::request::{Algorithm, CurveRequest};

/// Drawing history with a playback cursor over the current curve.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    curves: Vec<Vec<Pixel>>,
    picks: Vec<GridPoint>,
    step: usize,
    step_by_step: bool,
}

impl Playback {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start new curves at step 0 (`true`) or fully drawn (`false`).
    ///
    /// Takes effect on the next commit; the current step is left alone.
    pub fn set_step_by_step(&mut self, enabled: bool) {
        self.step_by_step = enabled;
    }

    /// Whether new curves start at step 0.
    #[must_use]
    pub const fn is_step_by_step(&self) -> bool {
        self.step_by_step
    }

    /// Record a picked grid cell.
    pub fn pick(&mut self, cell: impl Into<GridPoint>) {
        self.picks.push(cell.into());
    }

    /// Cells picked since the last draw.
    #[must_use]
    pub fn picked(&self) -> &[GridPoint] {
        &self.picks
    }

    /// Forget picked cells.
    pub fn clear_picks(&mut self) {
        self.picks.clear();
    }

    /// Rasterize the picked cells with `algorithm` and commit the result.
    ///
    /// On error nothing changes, so the user can keep picking.
    ///
    /// # Errors
    ///
    /// Any error from [`CurveRequest::rasterize`].
    pub fn draw(
        &mut self,
        algorithm: Algorithm,
        steps: Option<u32>,
        config: &RasterConfig,
    ) -> Result<usize> {
        let mut request = CurveRequest::new(algorithm, self.picks.iter().copied());
        if let Some(steps) = steps {
            request = request.steps(steps);
        }

        let pixels = request.rasterize(config)?;
        Ok(self.commit(pixels))
    }

    /// Append a finished curve and forget the picks. Returns its sample count.
    ///
    /// The step moves to the end of the new curve, or to 0 in step-by-step
    /// mode.
    pub fn commit(&mut self, samples: impl IntoIterator<Item = Pixel>) -> usize {
        let curve: Vec<Pixel> = samples.into_iter().collect();
        let len = curve.len();
        self.picks.clear();
        self.step = if self.step_by_step { 0 } else { len };
        self.curves.push(curve);
        debug!(
            "committed curve #{} with {len} samples at step {}",
            self.curves.len(),
            self.step
        );
        len
    }

    /// Every committed curve, oldest first.
    #[must_use]
    pub fn curves(&self) -> &[Vec<Pixel>] {
        &self.curves
    }

    /// Samples of the most recent curve.
    #[must_use]
    pub fn current(&self) -> &[Pixel] {
        self.curves.last().map_or(&[][..], Vec::as_slice)
    }

    /// Playback position within the current curve.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Number of samples in the current curve.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.current().len()
    }

    /// Move the playback position, clamped to `[0, max_steps]`.
    pub fn set_step(&mut self, step: usize) {
        self.step = step.min(self.max_steps());
    }

    /// Advance one sample.
    pub fn step_forward(&mut self) {
        self.set_step(self.step.saturating_add(1));
    }

    /// Go back one sample.
    pub fn step_back(&mut self) {
        self.set_step(self.step.saturating_sub(1));
    }

    /// Samples to display: earlier curves in full, then the current prefix.
    pub fn visible(&self) -> impl Iterator<Item = &Pixel> + '_ {
        let (current, earlier) = match self.curves.split_last() {
            Some((current, earlier)) => (current.as_slice(), earlier),
            None => (&[][..], &[][..]),
        };
        earlier
            .iter()
            .flatten()
            .chain(&current[..self.step.min(current.len())])
    }

    /// Drop all curves, picks and the playback position.
    pub fn clear(&mut self) {
        self.curves.clear();
        self.picks.clear();
        self.step = 0;
    }
}
