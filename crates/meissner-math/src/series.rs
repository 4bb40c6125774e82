// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Series
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Heuristically truncated infinite sums.
//!
//! The Matsubara-style kernel sums converge, but slowly and without a usable
//! a-priori bound, so truncation is a policy: stop when a term drops to
//! machine epsilon, or at a hard term cap. The cap is a pragmatic limit, not
//! a convergence proof; `SeriesSum::converged` makes a capped (or NaN-laden)
//! sum detectable by the caller.

use num_traits::Float;

/// Truncation policy for an infinite sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPolicy<T> {
    /// Hard cap on the number of accumulated terms.
    pub max_terms: usize,
    /// Stop once |term| no longer exceeds this threshold.
    pub tolerance: T,
}

impl<T: Float> Default for SeriesPolicy<T> {
    fn default() -> Self {
        SeriesPolicy {
            max_terms: 100,
            tolerance: T::epsilon(),
        }
    }
}

/// Partial sum with truncation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSum<T> {
    /// Accumulated value (may be a partial sum, NaN, or ±∞).
    pub value: T,
    /// Number of terms accumulated.
    pub terms: usize,
    /// True when the term threshold (not the cap) ended the sum.
    pub converged: bool,
}

/// Accumulate `term(n)` for n = 0, 1, 2, … under `policy`.
///
/// At least one term is always evaluated. A non-finite term ends the sum
/// immediately with `converged == false`, mirroring plain floating-point
/// accumulation where `|NaN| > tol` is false.
pub fn sum_series<T, F>(policy: &SeriesPolicy<T>, mut term: F) -> SeriesSum<T>
where
    T: Float,
    F: FnMut(usize) -> T,
{
    let mut sum = T::zero();
    let mut n = 0usize;
    loop {
        let change = term(n);
        sum = sum + change;
        n += 1;

        let keep_going = change.abs() > policy.tolerance;
        if !keep_going || n >= policy.max_terms {
            return SeriesSum {
                value: sum,
                terms: n,
                converged: change.abs() <= policy.tolerance,
            };
        }
    }
}
