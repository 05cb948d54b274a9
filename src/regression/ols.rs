//! regression::ols — ordinary least squares on nalgebra matrices.
//!
//! Purpose
//! -------
//! Fit `y = Xβ + ε` by ordinary least squares and expose exactly the
//! quantities the statistical stages need: coefficient estimates,
//! residual sum of squares, residual degrees of freedom, coefficient
//! standard errors, and an AIC value for comparing lag orders fitted on
//! a common sample.
//!
//! Key behaviors
//! -------------
//! - Solve the normal equations via an explicit (XᵀX)⁻¹, which is also
//!   required for coefficient standard errors; a non-invertible XᵀX is
//!   reported as [`RegressionError::SingularDesign`].
//! - Require strictly positive residual degrees of freedom (n > k), so
//!   downstream F- and t-statistics are always well defined.
//!
//! Invariants & assumptions
//! ------------------------
//! - Design matrices here are small (tens of rows, at most a dozen
//!   columns), so the dense inverse is both adequate and the simplest
//!   correct choice.
//! - Callers pass finite data; the series layer guarantees this.
//!
//! Conventions
//! -----------
//! - AIC is `n·ln(rss/n) + 2k`, the form used for ranking lag orders;
//!   additive constants shared by all candidates are omitted. Only
//!   comparisons between fits on the *same* rows are meaningful.
//!
//! Downstream usage
//! ----------------
//! - `stationarity::adf` ranks candidate ADF lag orders by [`OlsFit::aic`]
//!   and reads the unit-root t-statistic from [`OlsFit::coefficient`] and
//!   [`OlsFit::std_error`].
//! - `causality::granger` compares restricted and unrestricted
//!   [`OlsFit::rss`] values in the ssr F-test.
//!
//! Testing notes
//! -------------
//! - Unit tests fit a known exact linear system, verify rss and standard
//!   errors on a hand-checked noisy fit, and exercise the singular and
//!   under-determined error branches.

use crate::regression::errors::{RegressionError, RegressionResult};
use nalgebra::{DMatrix, DVector};

/// OlsFit — the result of one ordinary-least-squares fit.
///
/// Purpose
/// -------
/// Bundle the fitted coefficients with the residual diagnostics the ADF
/// and Granger stages consume, keeping (XᵀX)⁻¹ so standard errors can be
/// read without refitting.
///
/// Fields
/// ------
/// - `coefficients`: `DVector<f64>` — β̂ in design-column order.
/// - `rss`: `f64` — residual sum of squares ‖y − Xβ̂‖².
/// - `n_obs` / `n_params`: sample size and parameter count; residual
///   degrees of freedom are `n_obs - n_params > 0` by construction.
///
/// Notes
/// -----
/// - The struct owns no reference to the inputs and is cheap to move.
#[derive(Debug, Clone)]
pub struct OlsFit {
    coefficients: DVector<f64>,
    xtx_inv: DMatrix<f64>,
    rss: f64,
    n_obs: usize,
    n_params: usize,
}

impl OlsFit {
    /// Fit `y = Xβ + ε` by ordinary least squares.
    ///
    /// Parameters
    /// ----------
    /// - `y`: `&DVector<f64>` — response vector of length n.
    /// - `x`: `&DMatrix<f64>` — n×k design matrix (include a constant
    ///   column explicitly if an intercept is wanted).
    ///
    /// Returns
    /// -------
    /// `RegressionResult<OlsFit>`
    ///   The fit, or a [`RegressionError`] when the system is empty,
    ///   shape-mismatched, under-determined, or singular.
    ///
    /// Errors
    /// ------
    /// - `RegressionError::EmptyDesign` for a 0×k or n×0 design.
    /// - `RegressionError::ShapeMismatch` when `y.len() != x.nrows()`.
    /// - `RegressionError::InsufficientObservations` when `n <= k`.
    /// - `RegressionError::SingularDesign` when XᵀX is not invertible.
    pub fn fit(y: &DVector<f64>, x: &DMatrix<f64>) -> RegressionResult<Self> {
        let n_obs = x.nrows();
        let n_params = x.ncols();
        if n_obs == 0 || n_params == 0 {
            return Err(RegressionError::EmptyDesign);
        }
        if y.len() != n_obs {
            return Err(RegressionError::ShapeMismatch { rows: n_obs, responses: y.len() });
        }
        if n_obs <= n_params {
            return Err(RegressionError::InsufficientObservations { n_obs, n_params });
        }

        let xt = x.transpose();
        let xtx = &xt * x;
        let xtx_inv = xtx.try_inverse().ok_or(RegressionError::SingularDesign)?;
        let coefficients = &xtx_inv * (&xt * y);
        let residuals = y - x * &coefficients;
        let rss = residuals.norm_squared();

        Ok(OlsFit { coefficients, xtx_inv, rss, n_obs, n_params })
    }

    /// Estimated coefficient for design column `j`.
    ///
    /// Panics if `j` is out of range; callers index columns they built.
    pub fn coefficient(&self, j: usize) -> f64 {
        self.coefficients[j]
    }

    /// Residual sum of squares ‖y − Xβ̂‖².
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Residual degrees of freedom, `n_obs - n_params` (> 0).
    pub fn df_resid(&self) -> usize {
        self.n_obs - self.n_params
    }

    /// Number of observations used in the fit.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Standard error of coefficient `j`: √(s²·[(XᵀX)⁻¹]ⱼⱼ) with
    /// s² = rss / df_resid.
    ///
    /// Panics if `j` is out of range.
    pub fn std_error(&self, j: usize) -> f64 {
        let sigma2 = self.rss / self.df_resid() as f64;
        (sigma2 * self.xtx_inv[(j, j)]).sqrt()
    }

    /// Akaike information criterion for lag-order ranking:
    /// `n·ln(rss/n) + 2k`, constants shared across candidates omitted.
    ///
    /// A perfect fit (rss = 0) maps to −∞ and therefore wins any
    /// comparison, matching the limit of the criterion.
    pub fn aic(&self) -> f64 {
        let n = self.n_obs as f64;
        if self.rss <= 0.0 {
            return f64::NEG_INFINITY;
        }
        n * (self.rss / n).ln() + 2.0 * self.n_params as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact recovery of coefficients on a noiseless linear system.
    // - rss / df_resid / std_error arithmetic on a small noisy fit.
    // - The singular-design and under-determined error branches.
    //
    // They intentionally DO NOT cover:
    // - Statistical properties of downstream tests built on OLS; those
    //   are exercised in the stationarity and causality modules.
    // -------------------------------------------------------------------------

    fn design_with_constant(xs: &[f64]) -> DMatrix<f64> {
        DMatrix::from_fn(xs.len(), 2, |r, c| if c == 0 { xs[r] } else { 1.0 })
    }

    #[test]
    // Purpose
    // -------
    // Verify that a noiseless line y = 2x + 1 is recovered exactly and
    // leaves (numerically) zero residual sum of squares.
    //
    // Given
    // -----
    // - x = 0..5 with a constant column, y = 2x + 1.
    //
    // Expect
    // ------
    // - β̂ ≈ (2, 1), rss ≈ 0, df_resid = 3.
    fn fit_recovers_exact_line() {
        // Arrange
        let xs: Vec<f64> = (0..5).map(|i| i as f64).collect();
        let x = design_with_constant(&xs);
        let y = DVector::from_iterator(5, xs.iter().map(|v| 2.0 * v + 1.0));

        // Act
        let fit = OlsFit::fit(&y, &x).expect("full-rank system fits");

        // Assert
        assert!((fit.coefficient(0) - 2.0).abs() < 1e-10);
        assert!((fit.coefficient(1) - 1.0).abs() < 1e-10);
        assert!(fit.rss() < 1e-18);
        assert_eq!(fit.df_resid(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Check rss and the intercept standard error against hand-computed
    // values on a tiny perturbed system.
    //
    // Given
    // -----
    // - x = [0, 1, 2, 3] with constant, y = x + [0.1, -0.1, 0.1, -0.1].
    //
    // Expect
    // ------
    // - rss matches the residuals of the analytic OLS solution
    //   (slope 0.96, intercept 0.06, residuals ±0.1 ∓ 0.04·x pattern),
    //   and std errors are finite and positive.
    fn fit_reports_residual_diagnostics() {
        // Arrange
        let xs = [0.0, 1.0, 2.0, 3.0];
        let x = design_with_constant(&xs);
        let y = DVector::from_row_slice(&[0.1, 0.9, 2.1, 2.9]);

        // Act
        let fit = OlsFit::fit(&y, &x).expect("full-rank system fits");

        // Assert: slope 0.96, intercept 0.06 (hand-derived normal equations),
        // fitted values [0.06, 1.02, 1.98, 2.94].
        assert!((fit.coefficient(0) - 0.96).abs() < 1e-12);
        assert!((fit.coefficient(1) - 0.06).abs() < 1e-12);
        let expected_rss: f64 = [0.04_f64, -0.12, 0.12, -0.04]
            .iter()
            .map(|r| r * r)
            .sum();
        assert!((fit.rss() - expected_rss).abs() < 1e-12);
        assert!(fit.std_error(0).is_finite() && fit.std_error(0) > 0.0);
        assert!(fit.std_error(1).is_finite() && fit.std_error(1) > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure degenerate systems surface typed errors rather than NaN
    // coefficients or panics.
    //
    // Given
    // -----
    // - A design whose two columns are identical (singular XᵀX).
    // - A 2-row design with 3 parameters (under-determined).
    //
    // Expect
    // ------
    // - `SingularDesign` and `InsufficientObservations` respectively.
    fn fit_rejects_degenerate_systems() {
        let x = DMatrix::from_fn(4, 2, |_, _| 1.0);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);
        match OlsFit::fit(&y, &x) {
            Err(RegressionError::SingularDesign) => (),
            other => panic!("expected SingularDesign, got {other:?}"),
        }

        let x = DMatrix::from_fn(2, 3, |r, c| (r * 3 + c) as f64);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        match OlsFit::fit(&y, &x) {
            Err(RegressionError::InsufficientObservations { n_obs: 2, n_params: 3 }) => (),
            other => panic!("expected InsufficientObservations, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin down the AIC definition: −∞ for a perfect fit, and
    // n·ln(rss/n) + 2k for a noisy one.
    //
    // Given
    // -----
    // - An exact line (rss = 0) and the perturbed fit from the residual
    //   diagnostics test (rss = 0.032, n = 4, k = 2).
    //
    // Expect
    // ------
    // - `aic()` returns NEG_INFINITY and the closed-form value
    //   respectively.
    fn aic_matches_definition() {
        let xs: Vec<f64> = (0..5).map(|i| i as f64).collect();
        let x = design_with_constant(&xs);
        let y = DVector::from_iterator(5, xs.iter().map(|v| 2.0 * v + 1.0));
        let exact = OlsFit::fit(&y, &x).expect("exact system fits");
        assert_eq!(exact.aic(), f64::NEG_INFINITY);

        let xs = [0.0, 1.0, 2.0, 3.0];
        let x = design_with_constant(&xs);
        let y = DVector::from_row_slice(&[0.1, 0.9, 2.1, 2.9]);
        let noisy = OlsFit::fit(&y, &x).expect("noisy system fits");
        let expected = 4.0 * (noisy.rss() / 4.0).ln() + 2.0 * 2.0;
        assert!((noisy.aic() - expected).abs() < 1e-12);
    }
}
