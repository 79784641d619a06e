use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_RANGE_WIDTH;
use crate::error::{CurveError, Result};

/// A bound as supplied by the user: either a jitter amount around the
/// parameter's center, or an explicit `[min, max]` interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundSpec {
    Scalar(f64),
    Pair([f64; 2]),
}

impl From<f64> for BoundSpec {
    fn from(value: f64) -> Self {
        BoundSpec::Scalar(value)
    }
}

impl From<(f64, f64)> for BoundSpec {
    fn from((min, max): (f64, f64)) -> Self {
        BoundSpec::Pair([min, max])
    }
}

impl From<[f64; 2]> for BoundSpec {
    fn from(pair: [f64; 2]) -> Self {
        BoundSpec::Pair(pair)
    }
}

/// The three jittered curve parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveParam {
    WhitePoint,
    BlackPoint,
    Slope,
}

impl CurveParam {
    pub fn name(self) -> &'static str {
        match self {
            CurveParam::WhitePoint => "white_point",
            CurveParam::BlackPoint => "black_point",
            CurveParam::Slope => "slope",
        }
    }

    /// Value the parameter takes when no jitter is applied.
    pub fn center(self) -> f64 {
        match self {
            CurveParam::WhitePoint | CurveParam::Slope => 1.0,
            CurveParam::BlackPoint => 0.0,
        }
    }

    /// Inclusive domain an explicit `[min, max]` pair must lie in.
    pub fn bound(self) -> (f64, f64) {
        match self {
            CurveParam::WhitePoint | CurveParam::Slope => (0.0, f64::INFINITY),
            CurveParam::BlackPoint => (-1.0, 1.0),
        }
    }

    /// Whether a scalar jitter clamps its lower end at zero.
    fn clip_first_on_zero(self) -> bool {
        !matches!(self, CurveParam::BlackPoint)
    }
}

/// A normalized sampling interval.
///
/// `Fixed` is the "no variation" state: sampling returns the value without
/// touching the random source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleRange {
    Fixed(f64),
    Uniform { low: f64, high: f64 },
}

impl SampleRange {
    pub fn low(&self) -> f64 {
        match *self {
            SampleRange::Fixed(v) => v,
            SampleRange::Uniform { low, .. } => low,
        }
    }

    pub fn high(&self) -> f64 {
        match *self {
            SampleRange::Fixed(v) => v,
            SampleRange::Uniform { high, .. } => high,
        }
    }

    /// Check the interval is finite, ordered and no wider than
    /// [`MAX_RANGE_WIDTH`].
    pub fn validate(&self) -> Result<()> {
        let (low, high) = (self.low(), self.high());
        if !is_sampleable(low, high) {
            return Err(CurveError::invalid(
                "sample_range",
                format!("cannot sample from ({low}, {high})"),
            ));
        }
        Ok(())
    }

    /// True if `value` lies in the interval, allowing `tolerance` on both ends.
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        value >= self.low() - tolerance && value <= self.high() + tolerance
    }

    /// Draw a value uniformly from the interval.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        self.validate()?;
        Ok(match *self {
            SampleRange::Fixed(v) => v,
            SampleRange::Uniform { low, high } if low == high => low,
            SampleRange::Uniform { low, high } => rng.gen_range(low..=high),
        })
    }
}

impl fmt::Display for SampleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleRange::Fixed(v) => write!(f, "fixed({v})"),
            SampleRange::Uniform { low, high } => write!(f, "({low}, {high})"),
        }
    }
}

/// Resolve a user-supplied bound into a canonical [`SampleRange`].
///
/// A scalar `v` becomes `(center - v, center + v)`, with the lower end
/// clamped at zero for white point and slope. An explicit pair must satisfy
/// `bound.0 <= min <= max <= bound.1`. A range collapsing onto the center
/// becomes [`SampleRange::Fixed`].
pub fn normalize(spec: BoundSpec, param: CurveParam) -> Result<SampleRange> {
    let name = param.name();
    let center = param.center();

    let (low, high) = match spec {
        BoundSpec::Scalar(v) => {
            if !v.is_finite() || v < 0.0 {
                return Err(CurveError::invalid(
                    name,
                    format!("a single number must be finite and non negative, got {v}"),
                ));
            }
            let low = center - v;
            let low = if param.clip_first_on_zero() {
                low.max(0.0)
            } else {
                low
            };
            (low, center + v)
        }
        BoundSpec::Pair([low, high]) => {
            let (min, max) = param.bound();
            let finite = low.is_finite() && high.is_finite();
            if !(finite && min <= low && low <= high && high <= max) {
                return Err(CurveError::invalid(
                    name,
                    format!("values should be ordered and between ({min}, {max}), got ({low}, {high})"),
                ));
            }
            (low, high)
        }
    };

    if !is_sampleable(low, high) {
        return Err(CurveError::invalid(
            name,
            format!("interval ({low}, {high}) is too wide to sample"),
        ));
    }

    if low == center && high == center {
        Ok(SampleRange::Fixed(center))
    } else {
        Ok(SampleRange::Uniform { low, high })
    }
}

/// True if a uniform draw from `[low, high]` cannot panic.
pub(crate) fn is_sampleable(low: f64, high: f64) -> bool {
    low.is_finite() && high.is_finite() && low <= high && high - low <= MAX_RANGE_WIDTH
}
