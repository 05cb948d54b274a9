//! stationarity::mackinnon — approximate p-values for the ADF t-statistic.
//!
//! Purpose
//! -------
//! Map an Augmented Dickey–Fuller t-statistic (constant-only regression,
//! no deterministic trend) to an asymptotic p-value using the response
//! surface of MacKinnon (1994, J. Business & Economic Statistics 12,
//! 167–176): a cubic (large-p region) or quadratic (small-p region)
//! polynomial in the statistic, pushed through the standard normal CDF.
//!
//! Key behaviors
//! -------------
//! - Statistics beyond the tabulated range clamp to p = 0 (far left
//!   tail) or p = 1 (far right tail).
//! - The polynomial switches at τ* = −1.61, the boundary published for
//!   the single-variable, constant-only case; the two branches agree to
//!   about 1e-3 at the seam.
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficients are specific to the constant-only regression this
//!   crate runs; they are not valid for trend-augmented ADF variants.
//! - Returned values always lie in [0, 1].
//!
//! Testing notes
//! -------------
//! - Unit tests check the classic 5% critical value (τ = −2.86 ⇒
//!   p ≈ 0.05), the clamped tails, branch continuity at τ*, and
//!   monotonicity over a coarse grid.

use statrs::distribution::{ContinuousCDF, Normal};

// MacKinnon (1994) response-surface bounds and coefficients for the
// constant-only ADF regression with one variable.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const SMALL_P: [f64; 3] = [2.1659, 1.4412, 3.8269e-2];
const LARGE_P: [f64; 4] = [1.7339, 9.3202e-1, -1.2745e-1, -1.0368e-2];

/// Approximate asymptotic p-value for an ADF t-statistic.
///
/// Parameters
/// ----------
/// - `stat`: `f64`
///   The t-ratio on the lagged level from the constant-only ADF
///   regression.
///
/// Returns
/// -------
/// `f64`
///   A p-value in [0, 1]; small values reject the unit-root null, i.e.
///   indicate stationarity.
///
/// Notes
/// -----
/// - Below τ_min the left tail is indistinguishable from zero and above
///   τ_max from one at the precision of the response surface, so the
///   value is clamped rather than extrapolated.
pub fn mackinnon_p_value(stat: f64) -> f64 {
    if stat > TAU_MAX {
        return 1.0;
    }
    if stat < TAU_MIN {
        return 0.0;
    }
    let z = if stat <= TAU_STAR { polyval(&SMALL_P, stat) } else { polyval(&LARGE_P, stat) };
    let normal = Normal::new(0.0, 1.0).expect("unit normal");
    normal.cdf(z)
}

/// Evaluate c₀ + c₁x + c₂x² + … by Horner's rule.
#[inline]
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
