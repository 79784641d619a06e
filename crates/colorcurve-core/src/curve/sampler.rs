use rand::Rng;
use tracing::trace;

use crate::consts::SLOPE_WINDOW_EPSILON;
use crate::curve::{ControlPoint, Curve, LookupTable};
use crate::error::{CurveError, Result};
use crate::params::{is_sampleable, SampleRange};

/// Samples constrained five-point curves and their lookup tables.
///
/// Holds only the three normalized ranges; randomness comes from the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSampler {
    pub black_range: SampleRange,
    pub white_range: SampleRange,
    pub slope_range: SampleRange,
}

impl CurveSampler {
    pub fn new(black_range: SampleRange, white_range: SampleRange, slope_range: SampleRange) -> Self {
        Self {
            black_range,
            white_range,
            slope_range,
        }
    }

    /// Sample black and white points, then insert the midpoint followed by
    /// the two quarter points.
    ///
    /// Fails with [`CurveError::InvalidConfiguration`] for an empty or
    /// non-finite range, and with [`CurveError::InfeasibleSlopeWindow`] when
    /// the slope range cannot connect the sampled black and white points.
    pub fn sample_curve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Curve> {
        self.slope_range.validate()?;
        let black = ControlPoint::new(0.0, self.black_range.sample(rng)?);
        let white = ControlPoint::new(1.0, self.white_range.sample(rng)?);

        let middle = control_point_between(rng, black, white, &self.slope_range)?;
        let quarter = control_point_between(rng, black, middle, &self.slope_range)?;
        let three_quarter = control_point_between(rng, middle, white, &self.slope_range)?;

        let curve = Curve::new([black, quarter, middle, three_quarter, white]);
        trace!(ys = ?curve.ys(), "Sampled control points");
        Ok(curve)
    }

    /// Sample a fresh curve and evaluate it into a 256-entry table.
    pub fn sample_lookup_table<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<LookupTable> {
        let curve = self.sample_curve(rng)?;
        LookupTable::from_curve(&curve)
    }
}

/// Insert a control point halfway between `left` and `right`, with y drawn so
/// that the slopes to both neighbours stay within `slope`.
pub fn control_point_between<R: Rng + ?Sized>(
    rng: &mut R,
    left: ControlPoint,
    right: ControlPoint,
    slope: &SampleRange,
) -> Result<ControlPoint> {
    let half = (right.x - left.x) / 2.0;
    let min_slope = slope.low();
    let max_slope = slope.high();

    let max_y = (left.y + max_slope * half).min(right.y - min_slope * half);
    let min_y = (left.y + min_slope * half).max(right.y - max_slope * half);

    let y = sample_window(rng, min_y, max_y)?;
    Ok(ControlPoint::new(left.x + half, y))
}

fn sample_window<R: Rng + ?Sized>(rng: &mut R, min_y: f64, max_y: f64) -> Result<f64> {
    let feasible =
        min_y.is_finite() && max_y.is_finite() && min_y <= max_y + SLOPE_WINDOW_EPSILON;
    if !feasible {
        return Err(CurveError::InfeasibleSlopeWindow { min_y, max_y });
    }
    if min_y >= max_y {
        // Collapsed window (exactly or within rounding slack).
        return Ok(max_y + (min_y - max_y) / 2.0);
    }
    if !is_sampleable(min_y, max_y) {
        return Err(CurveError::InfeasibleSlopeWindow { min_y, max_y });
    }
    Ok(rng.gen_range(min_y..=max_y))
}
