// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ooura-Mori double-exponential quadrature for Fourier-sine integrals
//!
//! ```text
//! I(ω) = ∫₀^∞ f(x)·sin(ω·x) dx
//! ```
//!
//! after T. Ooura and M. Mori, J. Comput. Appl. Math. 112, 229 (1999).
//!
//! The variable transform x = (π/h)·φ(t), with
//!
//! ```text
//! φ(t) = t / (1 − exp(−(2t + α(1 − e^(−t)) + β(e^t − 1))))
//! ```
//!
//! pushes the abscissas double-exponentially towards the zeros of sin at
//! t → +∞ and towards the origin at t → −∞, so the trapezoidal sum over
//! t = n·h truncates after a handful of terms regardless of how slowly f
//! decays. Each refinement level halves h; node/weight tables for every
//! level are precomputed at construction and keyed by the requested relative
//! tolerance, so one integrator instance serves many (f, ω) evaluations and
//! is safe to share read-only across threads.

use num_traits::Float;
use std::f64::consts::PI;

/// β of the Ooura-Mori transform.
const BETA: f64 = 0.25;

/// Terms with |weight| below this contribute nothing at any supported
/// tolerance; they terminate node generation.
const WEIGHT_CUTOFF: f64 = f64::EPSILON * f64::EPSILON;

/// α = β / sqrt(1 + M·ln(1+M)/(4π)) with M = π/h, written in the expanded
/// 1/sqrt(16 + 4·ln(1+π/h)/h) form.
fn ooura_alpha(h: f64) -> f64 {
    1.0 / (16.0 + 4.0 * (PI / h).ln_1p() / h).sqrt()
}

/// φ(t) and φ′(t); the t = 0 singularity is removable and handled by the
/// leading series coefficients.
fn phi_and_derivative(t: f64, alpha: f64) -> (f64, f64) {
    if t == 0.0 {
        let c1 = 2.0 + alpha + BETA;
        let c2 = (BETA - alpha) / 2.0;
        return (1.0 / c1, 0.5 - c2 / (c1 * c1));
    }
    let d = 2.0 * t + alpha * (-(-t).exp_m1()) + BETA * t.exp_m1();
    let exp_md = (-d).exp();
    if !exp_md.is_finite() {
        // d → −∞ only for t far on the negative side; φ and φ′ vanish.
        return (0.0, 0.0);
    }
    let u = -(-d).exp_m1(); // 1 − e^(−d)
    let dp = 2.0 + alpha * (-t).exp() + BETA * t.exp();
    let phi = t / u;
    let dphi = 1.0 / u - t * exp_md * dp / (u * u);
    (phi, dphi)
}

/// Node/weight table for one step size h = 2^(−level), at unit frequency.
#[derive(Debug, Clone)]
struct QuadratureLevel<T> {
    /// Abscissas (π/h)·φ(n·h), ascending in n.
    nodes: Vec<T>,
    /// Weights π·sin(node)·φ′(n·h).
    weights: Vec<T>,
}

fn build_level<T: Float>(level: usize) -> QuadratureLevel<T> {
    let h = 0.5f64.powi(level as i32);
    let alpha = ooura_alpha(h);
    let m = PI / h;
    let max_n = (20.0 / h) as i64 + 100;

    let mut nodes = Vec::new();
    let mut weights = Vec::new();

    // Negative n: abscissas collapse onto the origin double-exponentially.
    let mut negative = Vec::new();
    for n in 1..=max_n {
        let t = -(n as f64) * h;
        let (phi, dphi) = phi_and_derivative(t, alpha);
        let node = m * phi;
        let weight = PI * node.sin() * dphi;
        if node == 0.0 || !weight.is_finite() || weight.abs() < WEIGHT_CUTOFF {
            break;
        }
        negative.push((node, weight));
    }
    for &(node, weight) in negative.iter().rev() {
        nodes.push(node);
        weights.push(weight);
    }

    // n = 0: direct evaluation of the removable-singularity limit.
    {
        let (phi, dphi) = phi_and_derivative(0.0, alpha);
        let node = m * phi;
        nodes.push(node);
        weights.push(PI * node.sin() * dphi);
    }

    // Positive n: the abscissa approaches n·π, so the sine factor is
    // computed from the residual φ(t) − t = t·e^(−d)/(1 − e^(−d)) to avoid
    // cancellation; sin(nπ + s) = (−1)^n · sin(s).
    for n in 1..=max_n {
        let t = n as f64 * h;
        let d = 2.0 * t + alpha * (-(-t).exp_m1()) + BETA * t.exp_m1();
        let exp_md = (-d).exp();
        let u = -(-d).exp_m1();
        let dp = 2.0 + alpha * (-t).exp() + BETA * t.exp();
        let residual = t * exp_md / u; // φ(t) − t
        let dphi = 1.0 / u - t * exp_md * dp / (u * u);
        let node = m * (t + residual);
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        let weight = PI * sign * (m * residual).sin() * dphi;
        if !weight.is_finite() || weight.abs() < WEIGHT_CUTOFF {
            break;
        }
        nodes.push(node);
        weights.push(weight);
    }

    // Weights that underflow at the working precision carry no information;
    // drop them so the integrand is never evaluated against a zero weight.
    let mut cast_nodes = Vec::with_capacity(nodes.len());
    let mut cast_weights = Vec::with_capacity(weights.len());
    for (x, w) in nodes.into_iter().zip(weights) {
        let (Some(x), Some(w)) = (T::from(x), T::from(w)) else {
            continue;
        };
        if w == T::zero() {
            continue;
        }
        cast_nodes.push(x);
        cast_weights.push(w);
    }

    QuadratureLevel {
        nodes: cast_nodes,
        weights: cast_weights,
    }
}

/// Result of one oscillatory-integral evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult<T> {
    /// Estimate of ∫₀^∞ f(x)·sin(ωx) dx.
    pub value: T,
    /// Relative difference between the last two refinement levels.
    pub relative_error: T,
    /// Number of levels evaluated.
    pub levels_used: usize,
    /// True when the level-to-level change met the requested tolerance.
    pub converged: bool,
}

/// Fourier-sine integrator over (0, ∞) with precomputed node/weight tables.
#[derive(Debug, Clone)]
pub struct FourierSineIntegrator<T> {
    relative_tolerance: T,
    levels: Vec<QuadratureLevel<T>>,
}

impl<T: Float> FourierSineIntegrator<T> {
    /// Build tables for `levels` refinement levels (h = 1, 1/2, …,
    /// 2^(1−levels)) targeting the given relative tolerance. At least two
    /// levels are always built so an error estimate exists.
    pub fn new(relative_tolerance: T, levels: usize) -> Self {
        let levels = levels.max(2);
        FourierSineIntegrator {
            relative_tolerance,
            levels: (0..levels).map(build_level).collect(),
        }
    }

    /// Requested relative tolerance.
    pub fn relative_tolerance(&self) -> T {
        self.relative_tolerance
    }

    /// Number of precomputed refinement levels.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// Evaluate ∫₀^∞ f(x)·sin(ω·x) dx for ω > 0.
    ///
    /// Levels are consumed coarse-to-fine until two consecutive estimates
    /// agree to the requested relative tolerance. A NaN produced by `f`
    /// propagates into the result (`converged == false`). The call is
    /// read-only; a shared integrator may evaluate concurrently.
    pub fn integrate<F>(&self, f: F, omega: T) -> QuadratureResult<T>
    where
        F: Fn(T) -> T,
    {
        let mut value = T::zero();
        let mut previous = T::zero();
        let mut relative_error = T::infinity();
        let mut levels_used = 0;

        for (index, level) in self.levels.iter().enumerate() {
            let mut sum = T::zero();
            for (&node, &weight) in level.nodes.iter().zip(level.weights.iter()) {
                sum = sum + f(node / omega) * weight;
            }
            value = sum / omega;
            levels_used = index + 1;

            if index > 0 {
                let scale = value.abs().max(T::min_positive_value());
                relative_error = (value - previous).abs() / scale;
                if relative_error <= self.relative_tolerance {
                    return QuadratureResult {
                        value,
                        relative_error,
                        levels_used,
                        converged: true,
                    };
                }
            }
            previous = value;
        }

        QuadratureResult {
            value,
            relative_error,
            levels_used,
            converged: false,
        }
    }
}

/// Baseline configuration: √ε tolerance with `size_of::<T>()` levels.
impl<T: Float> Default for FourierSineIntegrator<T> {
    fn default() -> Self {
        Self::new(T::epsilon().sqrt(), core::mem::size_of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn sine_integral_sinc() {
        // ∫₀^∞ sin(x)/x dx = π/2.
        let integrator = FourierSineIntegrator::<f64>::default();
        let result = integrator.integrate(|x| 1.0 / x, 1.0);
        assert!(result.converged);
        assert!(
            (result.value - FRAC_PI_2).abs() < 1e-7,
            "got {}, expected {}",
            result.value,
            FRAC_PI_2
        );
    }

    #[test]
    fn damped_exponential() {
        // ∫₀^∞ e^(−x)·sin(x) dx = 1/2.
        let integrator = FourierSineIntegrator::<f64>::default();
        let result = integrator.integrate(|x| (-x).exp(), 1.0);
        assert!(result.converged);
        assert!((result.value - 0.5).abs() < 1e-7);
    }

    #[test]
    fn lorentzian_matches_closed_form() {
        // ∫₀^∞ x/(x²+a²)·sin(ωx) dx = (π/2)·e^(−aω).
        let integrator = FourierSineIntegrator::<f64>::default();
        for &(a, omega) in &[(1.0, 1.0), (0.5, 3.0), (2.0, 0.25), (1.0, 10.0)] {
            let result = integrator.integrate(|x| x / (x * x + a * a), omega);
            let expected = FRAC_PI_2 * (-a * omega).exp();
            assert!(result.converged, "a={a}, omega={omega} did not converge");
            assert!(
                (result.value - expected).abs() <= 1e-7 * expected.max(1e-3),
                "a={a}, omega={omega}: got {}, expected {}",
                result.value,
                expected
            );
        }
    }

    #[test]
    fn nan_integrand_propagates() {
        let integrator = FourierSineIntegrator::<f64>::default();
        let result = integrator.integrate(|_| f64::NAN, 1.0);
        assert!(result.value.is_nan());
        assert!(!result.converged);
    }

    #[test]
    fn coarse_tolerance_uses_fewer_levels() {
        let coarse = FourierSineIntegrator::<f64>::new(1e-4, 8);
        let fine = FourierSineIntegrator::<f64>::new(1e-12, 8);
        let c = coarse.integrate(|x| (-x).exp(), 1.0);
        let f = fine.integrate(|x| (-x).exp(), 1.0);
        assert!(c.levels_used <= f.levels_used);
    }

    #[test]
    fn reuse_is_bit_identical() {
        let integrator = FourierSineIntegrator::<f64>::default();
        let a = integrator.integrate(|x| x / (x * x + 1.0), 2.0);
        let b = integrator.integrate(|x| x / (x * x + 1.0), 2.0);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn single_precision_tables() {
        let integrator = FourierSineIntegrator::<f32>::default();
        let result = integrator.integrate(|x| (-x).exp(), 1.0f32);
        assert!((result.value - 0.5).abs() < 1e-3);
    }
}
