// File: crates/burnup-core/src/regression.rs
// Summary: Ordinary least-squares line fit over (x, y) samples.

use crate::types::{Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Fitted value at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 { self.intercept + self.slope * x }

    /// Fitted line from x = 0 to x = `width`.
    pub fn span(&self, width: f64) -> Segment {
        Segment::from_coords(0.0, self.at(0.0), width, self.at(width))
    }
}

/// Least-squares fit `y = slope * x + intercept`.
///
/// Returns `None` when there is no usable trend: no samples, x values that
/// do not vary beyond rounding noise, or a non-finite result.
pub fn linear_reg(points: &[Point]) -> Option<Regression> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    for p in points {
        sx += p.x;
        sy += p.y;
        sxx += p.x * p.x;
        sxy += p.x * p.y;
    }

    // n*Σx² - (Σx)² cancels badly when every x is the same fraction,
    // so test the spread around the mean instead.
    let mean_x = sx / n;
    let spread: f64 = points.iter().map(|p| (p.x - mean_x).powi(2)).sum();
    if spread <= f64::EPSILON * sxx {
        return None;
    }

    let denominator = n * sxx - sx * sx;
    let slope = (n * sxy - sx * sy) / denominator;
    let intercept = (sxx * sy - sxy * sx) / denominator;

    if slope.is_finite() && intercept.is_finite() {
        Some(Regression { slope, intercept })
    } else {
        None
    }
}
