//! correlation::selection — choose the reporting lag from a Granger sweep.
//!
//! Purpose
//! -------
//! Turn a [`CausalitySummary`](crate::causality::CausalitySummary) into
//! the single lag the pipeline reports the lagged correlation at, while
//! keeping the *basis* of the choice observable: a lag backed by a
//! significant test is distinguishable from the default used when no
//! lag is significant.
//!
//! Key behaviors
//! -------------
//! - Among significant lags, pick the lowest p-value; ties keep the
//!   smallest lag order.
//! - With no significant lag, fall back to [`DEFAULT_LAG`] and say so
//!   in the returned variant rather than silently blending the two
//!   cases.
//!
//! Downstream usage
//! ----------------
//! - The pipeline embeds the [`LagSelection`] in its outcome; callers
//!   that only need the number use [`LagSelection::lag`].

use crate::causality::CausalitySummary;

/// Reporting lag used when no lag in the sweep is significant.
pub const DEFAULT_LAG: usize = 1;

/// LagSelection — the chosen reporting lag and the basis for it.
///
/// Purpose
/// -------
/// Make "lag 1 because the test said so" and "lag 1 because nothing was
/// significant" different values, so consumers never mistake a default
/// for evidence.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LagSelection {
    /// A lag whose F-test rejected the null, with its p-value.
    Significant { lag: usize, p_value: f64 },

    /// No lag was significant; the conventional default is used.
    FallbackDefault { lag: usize },
}

impl LagSelection {
    /// The lag order to report at, regardless of basis.
    pub fn lag(&self) -> usize {
        match self {
            LagSelection::Significant { lag, .. } => *lag,
            LagSelection::FallbackDefault { lag } => *lag,
        }
    }

    /// Whether the selection is backed by a significant test.
    pub fn is_significant(&self) -> bool {
        matches!(self, LagSelection::Significant { .. })
    }
}

/// Select the reporting lag from a completed sweep.
///
/// Parameters
/// ----------
/// - `summary`: `&CausalitySummary`
///   Per-lag F-test results for lags 1..=max_lag.
///
/// Returns
/// -------
/// `LagSelection`
///   The significant lag with the lowest p-value (smallest lag on
///   ties), or `FallbackDefault { lag: 1 }` when none is significant.
pub fn select_best_lag(summary: &CausalitySummary) -> LagSelection {
    let mut best: Option<(usize, f64)> = None;
    for result in summary.iter() {
        if !result.significant {
            continue;
        }
        // Strict < keeps the smallest lag on ties; iteration ascends.
        if best.map_or(true, |(_, best_p)| result.p_value < best_p) {
            best = Some((result.lag, result.p_value));
        }
    }
    match best {
        Some((lag, p_value)) => LagSelection::Significant { lag, p_value },
        None => LagSelection::FallbackDefault { lag: DEFAULT_LAG },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::causality::{CausalitySummary, LagResult};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Lowest-p selection among significant lags.
    // - Smallest-lag tie-breaking.
    // - The explicit fallback when nothing is significant.
    //
    // They intentionally DO NOT cover:
    // - Production of the summaries themselves; see the granger tests.
    // -------------------------------------------------------------------------

    fn summary(entries: &[(usize, f64)]) -> CausalitySummary {
        let results = entries
            .iter()
            .map(|&(lag, p_value)| LagResult {
                lag,
                f_stat: 1.0,
                p_value,
                significant: p_value < crate::SIGNIFICANCE_LEVEL,
            })
            .collect();
        CausalitySummary::from_lag_results(results).expect("contiguous fixture lags")
    }

    #[test]
    // Purpose
    // -------
    // The significant lag with the lowest p-value wins even when it is
    // not the smallest lag.
    fn picks_lowest_p_value_among_significant() {
        let s = summary(&[(1, 0.04), (2, 0.001), (3, 0.3)]);
        assert_eq!(select_best_lag(&s), LagSelection::Significant { lag: 2, p_value: 0.001 });
    }

    #[test]
    // Purpose
    // -------
    // Equal p-values resolve to the smaller lag order.
    //
    // Given
    // -----
    // - Lags 2 and 4 both at p = 0.01; lags 1, 3, 5 insignificant.
    //
    // Expect
    // ------
    // - Lag 2 selected.
    fn ties_resolve_to_smallest_lag() {
        let s = summary(&[(1, 0.5), (2, 0.01), (3, 0.6), (4, 0.01), (5, 0.7)]);
        assert_eq!(select_best_lag(&s), LagSelection::Significant { lag: 2, p_value: 0.01 });
    }

    #[test]
    // Purpose
    // -------
    // No significant lag yields the explicit default, and the value is
    // distinguishable from a significant lag-1 result.
    fn falls_back_to_default_when_nothing_significant() {
        let s = summary(&[(1, 0.2), (2, 0.9), (3, 0.06)]);
        let selection = select_best_lag(&s);
        assert_eq!(selection, LagSelection::FallbackDefault { lag: 1 });
        assert_eq!(selection.lag(), 1);
        assert!(!selection.is_significant());
    }
}
