use ndarray::{Array1, Array2};

use crate::error::{CurveError, Result};

/// Spline degree.
const DEGREE: usize = 2;

/// Quadratic B-spline passing exactly through a set of nodes.
///
/// Knots are clamped at both ends; interior knots sit at the midpoints
/// between consecutive nodes, skipping the first and last midpoint so the
/// number of basis functions equals the number of nodes.
#[derive(Clone, Debug)]
pub struct QuadraticSpline {
    knots: Vec<f64>,
    coefficients: Vec<f64>,
}

impl QuadraticSpline {
    /// Fit the interpolating spline. `xs` must be strictly increasing and
    /// hold at least three nodes.
    pub fn interpolate(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let n = xs.len();
        if n != ys.len() {
            return Err(CurveError::Interpolation(format!(
                "{n} x-nodes but {} y-values",
                ys.len()
            )));
        }
        if n <= DEGREE {
            return Err(CurveError::Interpolation(format!(
                "need at least {} nodes, got {n}",
                DEGREE + 1
            )));
        }
        if xs.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(CurveError::Interpolation(
                "x-nodes must be strictly increasing".into(),
            ));
        }

        let knots = build_knots(xs);

        let mut collocation = Array2::<f64>::zeros((n, n));
        for (row, &x) in xs.iter().enumerate() {
            let span = find_span(&knots, n, x);
            let basis = basis_functions(&knots, span, x);
            for (r, &b) in basis.iter().enumerate() {
                collocation[[row, span - DEGREE + r]] = b;
            }
        }

        let coefficients = solve(collocation, Array1::from(ys.to_vec())).ok_or_else(|| {
            CurveError::Interpolation("singular collocation matrix".into())
        })?;

        Ok(Self {
            knots,
            coefficients,
        })
    }

    /// Evaluate the spline at `x`. Inputs outside the node range extrapolate
    /// the first or last polynomial piece.
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.coefficients.len();
        let span = find_span(&self.knots, n, x);
        let basis = basis_functions(&self.knots, span, x);
        basis
            .iter()
            .enumerate()
            .map(|(r, b)| b * self.coefficients[span - DEGREE + r])
            .sum()
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }
}

/// Knot vector `[x0; 3] ++ midpoints[1..n-2] ++ [x_last; 3]`.
fn build_knots(xs: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let first = xs[0];
    let last = xs[n - 1];

    let mut knots = Vec::with_capacity(n + DEGREE + 1);
    knots.extend(std::iter::repeat(first).take(DEGREE + 1));
    knots.extend(
        xs.windows(2)
            .skip(1)
            .take(n - DEGREE - 1)
            .map(|w| (w[0] + w[1]) / 2.0),
    );
    knots.extend(std::iter::repeat(last).take(DEGREE + 1));
    knots
}

/// Index `l` in `[DEGREE, n-1]` with `knots[l] <= x < knots[l+1]`, clamped
/// at both ends.
fn find_span(knots: &[f64], n: usize, x: f64) -> usize {
    if x >= knots[n] {
        return n - 1;
    }
    let mut span = DEGREE;
    while span < n - 1 && knots[span + 1] <= x {
        span += 1;
    }
    span
}

/// The `DEGREE + 1` non-zero basis functions at `x` (Cox-de Boor).
fn basis_functions(knots: &[f64], span: usize, x: f64) -> [f64; DEGREE + 1] {
    let mut basis = [0.0; DEGREE + 1];
    let mut left = [0.0; DEGREE + 1];
    let mut right = [0.0; DEGREE + 1];
    basis[0] = 1.0;

    for j in 1..=DEGREE {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = basis[r] / (right[r + 1] + left[j - r]);
            basis[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        basis[j] = saved;
    }

    basis
}

/// Gaussian elimination with partial pivoting. Returns `None` if singular.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))?;
        if a[[pivot, col]].abs() < 1e-12 {
            return None;
        }
        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }
    Some(x)
}
