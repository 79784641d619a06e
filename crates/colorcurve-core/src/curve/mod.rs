pub mod lut;
pub mod sampler;
pub mod spline;

pub use lut::LookupTable;
pub use sampler::{control_point_between, CurveSampler};
pub use spline::QuadraticSpline;

use crate::consts::CONTROL_POINT_COUNT;

/// An (x, y) anchor the fitted curve passes through.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Slope of the segment from `self` to `other`.
    pub fn slope_to(&self, other: &ControlPoint) -> f64 {
        (other.y - self.y) / (other.x - self.x)
    }
}

/// Five control points ordered by x: 0, 0.25, 0.5, 0.75, 1.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub points: [ControlPoint; CONTROL_POINT_COUNT],
}

impl Curve {
    pub fn new(points: [ControlPoint; CONTROL_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Output level at input 0.
    pub fn black_point(&self) -> f64 {
        self.points[0].y
    }

    /// Output level at input 1.
    pub fn white_point(&self) -> f64 {
        self.points[CONTROL_POINT_COUNT - 1].y
    }

    pub fn xs(&self) -> [f64; CONTROL_POINT_COUNT] {
        self.points.map(|p| p.x)
    }

    pub fn ys(&self) -> [f64; CONTROL_POINT_COUNT] {
        self.points.map(|p| p.y)
    }

    /// Slopes between each consecutive pair of control points.
    pub fn slopes(&self) -> [f64; CONTROL_POINT_COUNT - 1] {
        std::array::from_fn(|i| self.points[i].slope_to(&self.points[i + 1]))
    }
}
