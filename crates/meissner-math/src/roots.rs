// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Roots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derivative-based root finding.
//!
//! `halley_iterate` is a bracketed third-order Halley scheme: each step uses
//! f, f′ and f″, so the number of correct digits roughly triples per
//! iteration. Steps that leave the bracket are replaced by a bisection step
//! towards the violated bound. The caller supplies the precision target in
//! binary digits and a hard iteration cap; non-convergence is never silent —
//! the result carries the iteration count and a convergence flag.

use num_traits::Float;

/// Outcome of a derivative-based root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T> {
    /// Best available estimate of the root.
    pub root: T,
    /// Iterations consumed.
    pub iterations: usize,
    /// Whether the last step met the requested precision target.
    pub converged: bool,
}

/// Mantissa digits available for `T`, derived from machine epsilon
/// (eps = 2^(1 − p), so p = 1 − log2(eps); 53 for f64, 24 for f32).
pub fn mantissa_digits<T: Float>() -> u32 {
    let eps = T::epsilon().to_f64().unwrap_or(f64::EPSILON);
    (1.0 - eps.log2()).round() as u32
}

/// Third-order Halley iteration on `[min, max]`.
///
/// `f` returns the tuple (f(x), f′(x), f″(x)). Convergence is declared once
/// the step size satisfies |Δx| ≤ |x|·2^(1−digits). When the Halley
/// denominator 2f′² − f·f″ degenerates the step falls back to Newton; when
/// the derivative vanishes as well, the iterate bisects towards the bracket
/// midpoint.
pub fn halley_iterate<T, F>(
    f: F,
    guess: T,
    min: T,
    max: T,
    digits: u32,
    max_iterations: usize,
) -> RootResult<T>
where
    T: Float,
    F: Fn(T) -> (T, T, T),
{
    let two = T::from(2.0).expect("literal representable in T");
    let factor = T::from(2.0f64.powi(1 - digits as i32)).expect("literal representable in T");

    let mut x = guess;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        let (f0, f1, f2) = f(x);
        iterations += 1;

        if f0 == T::zero() {
            converged = true;
            break;
        }

        let denom = two * f1 * f1 - f0 * f2;
        let mut delta = if denom.is_finite() && denom != T::zero() {
            two * f0 * f1 / denom
        } else if f1 != T::zero() {
            f0 / f1
        } else {
            x - (min + max) / two
        };
        if !delta.is_finite() {
            delta = f0 / f1;
        }

        let mut next = x - delta;
        // Out-of-bracket steps degrade to bisection towards the bound.
        if next < min {
            next = (x + min) / two;
        } else if next > max {
            next = (x + max) / two;
        }

        let step = x - next;
        x = next;

        if step.abs() <= x.abs() * factor {
            converged = true;
            break;
        }
    }

    RootResult {
        root: x,
        iterations,
        converged,
    }
}
