use std::ops::Index;

use crate::consts::{LUT_SIZE, MAX_CHANNEL_VALUE};
use crate::curve::{Curve, QuadraticSpline};
use crate::error::Result;

/// Per-channel mapping from an 8-bit input level to an output level.
///
/// Entry `i` holds the curve evaluated at `i / 256`. Values are unclamped;
/// clamping to [0, 1] happens in [`LookupTable::map_level`].
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable {
    values: [f64; LUT_SIZE],
}

impl LookupTable {
    /// Fit a quadratic spline through the curve's control points and sample it.
    pub fn from_curve(curve: &Curve) -> Result<Self> {
        let spline = QuadraticSpline::interpolate(&curve.xs(), &curve.ys())?;
        Ok(Self::from_fn(|x| spline.evaluate(x)))
    }

    /// Build a table by evaluating `f` at `0, 1/256, ..., 255/256`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            values: std::array::from_fn(|i| f(i as f64 / LUT_SIZE as f64)),
        }
    }

    pub fn identity() -> Self {
        Self::from_fn(|x| x)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Remap one 8-bit level: clamp the table entry to [0, 1], scale to 255
    /// and truncate.
    pub fn map_level(&self, level: u8) -> u8 {
        (self.values[level as usize].clamp(0.0, 1.0) * MAX_CHANNEL_VALUE) as u8
    }

    /// Precompute [`map_level`](Self::map_level) for every input level.
    pub fn to_levels(&self) -> [u8; LUT_SIZE] {
        std::array::from_fn(|i| self.map_level(i as u8))
    }
}

impl Index<usize> for LookupTable {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
