// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — BCS
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bardeen-Cooper-Schrieffer (BCS) theory of the Meissner state.
//!
//! The reduced gap Δ(x) solves Thouless' self-consistency equation
//! tanh(Δ/x) = Δ; the nonlocal response kernel K(q) is a Matsubara-style
//! sum over an integer index, truncated by `SeriesPolicy`; the field
//! profile is the Fourier-sine inversion of K.
//!
//! Singular parameter points (propagated per IEEE-754, never clamped):
//!   - T = T_c: the gap closes, `matsubara_scale` → ∞ and the kernel is NaN.
//!   - T = 0: every `lambda_factor` is infinite, so the kernel sums to 0 and
//!     the penetration-depth estimator returns +∞.

use meissner_math::quadrature::FourierSineIntegrator;
use meissner_math::roots::{halley_iterate, mantissa_digits, RootResult};
use meissner_math::series::{sum_series, SeriesPolicy, SeriesSum};
use meissner_types::constants;
use meissner_types::parameters::MaterialParameters;
use num_traits::{Float, FloatConst};

use crate::profile;

/// Hard cap on Halley iterations for the gap equation; convergence normally
/// takes fewer than ten.
const MAX_GAP_ITERATIONS: usize = 100;

/// Fraction of the mantissa digits demanded from the gap solver. Halley
/// accuracy triples per step, so stopping just past a third of the digits
/// already yields a fully converged root.
const GAP_DIGIT_FRACTION: f64 = 0.4;

fn cast<T: Float>(x: f64) -> T {
    T::from(x).expect("literal representable in T")
}

/// Solve tanh(Δ/x) = Δ for the reduced gap at reduced temperature x ∈ (0, 1).
///
/// The initial guess is fixed at 1 and the iteration descends. Do not
/// replace it with a temperature-dependent guess: anything that already
/// approaches zero as x → 1 lands on the trivial root Δ = 0 for x ≳ 0.9.
/// The bracket is widened by machine epsilon on both ends; the slack is
/// required for exact results at the interval endpoints.
pub fn reduced_gap_solver<T: Float>(x: T) -> RootResult<T> {
    let guess = T::one();
    let min = T::zero() - T::epsilon();
    let max = T::one() + T::epsilon();
    let digits = (GAP_DIGIT_FRACTION * f64::from(mantissa_digits::<T>())) as u32;

    halley_iterate(
        move |delta: T| {
            let th = (delta / x).tanh();
            let ch = (delta / x).cosh();
            let f = th - delta;
            let df = T::one() / (x * ch * ch) - T::one();
            let d2f = -cast::<T>(2.0) * th / ((x * ch) * (x * ch));
            (f, df, d2f)
        },
        guess,
        min,
        max,
        digits,
        MAX_GAP_ITERATIONS,
    )
}

/// Temperature dependence of the reduced energy gap Δ(T)/Δ(0).
pub fn reduced_gap<T: Float>(reduced_temperature: T) -> T {
    if reduced_temperature >= T::one() {
        T::zero()
    } else if reduced_temperature <= T::zero() {
        T::one()
    } else {
        reduced_gap_solver(reduced_temperature).root
    }
}

/// Reduced energy gap at an absolute temperature.
pub fn reduced_gap_at<T: Float>(temperature: T, critical_temperature: T) -> T {
    reduced_gap(temperature / critical_temperature)
}

/// Temperature dependence of the energy gap (meV).
pub fn gap<T: Float>(temperature: T, critical_temperature: T, gap_mev: T) -> T {
    gap_mev * reduced_gap_at(temperature, critical_temperature)
}

/// Weak-coupling BCS energy gap at absolute zero (meV):
/// Δ(0) = π·e^(−γ)·k_B·T_c.
pub fn gap_mev<T: Float + FloatConst>(critical_temperature: T) -> T {
    T::PI()
        * (-constants::euler_gamma::<T>()).exp()
        * constants::boltzmann_mev_per_k::<T>()
        * critical_temperature
}

/// Gap ratio 2Δ(0)/(k_B·T_c); 2π·e^(−γ) ≈ 3.528 in weak coupling.
pub fn gap_ratio<T: Float>(critical_temperature: T, gap_mev: T) -> T {
    cast::<T>(2.0) * gap_mev / (constants::boltzmann_mev_per_k::<T>() * critical_temperature)
}

/// a(T) = π·k_B·T / Δ(T). Diverges at T = T_c where the gap closes.
pub fn matsubara_scale<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
) -> T {
    T::PI() * constants::boltzmann_mev_per_k::<T>() * temperature
        / gap(temperature, critical_temperature, gap_mev)
}

/// f_n = sqrt(1 + (a·(2n+1))²) at index n.
pub fn matsubara_factor<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
    n: usize,
) -> T {
    let odd = cast::<T>(2.0) * cast::<T>(n as f64) + T::one();
    let arg = matsubara_scale(temperature, critical_temperature, gap_mev) * odd;
    (T::one() + arg * arg).sqrt()
}

/// Effective BCS coherence length at index n:
/// ξ_n = 1 / ((2/π)·f_n·Δ(T)/Δ(0)/ξ₀ + 1/ℓ).
///
/// Degenerate denominators map to the opposite extreme (0 → ∞, ∞ → 0) so
/// the clean limit ℓ = ∞ and vanishing ξ₀ stay NaN-free.
pub fn coherence_length<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
    xi_0: T,
    mean_free_path: T,
    n: usize,
) -> T {
    let fraction_1 = T::FRAC_2_PI()
        * matsubara_factor(temperature, critical_temperature, gap_mev, n)
        * reduced_gap_at(temperature, critical_temperature)
        / xi_0;
    let fraction_2 = T::one() / mean_free_path;
    let fraction = fraction_1 + fraction_2;
    if fraction.is_infinite() {
        T::zero()
    } else if fraction == T::zero() {
        T::infinity()
    } else {
        T::one() / fraction
    }
}

/// Λ_n = λ₀²·f_n³·(1 + ξ_n/ℓ) / (2a). Infinite at T = 0 where a vanishes.
pub fn lambda_factor<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
    xi_0: T,
    mean_free_path: T,
    lambda_0: T,
    n: usize,
) -> T {
    let f_n = matsubara_factor(temperature, critical_temperature, gap_mev, n);
    let xi_n = coherence_length(
        temperature,
        critical_temperature,
        gap_mev,
        xi_0,
        mean_free_path,
        n,
    );
    lambda_0 * lambda_0 * f_n * f_n * f_n * (T::one() + xi_n / mean_free_path)
        / (cast::<T>(2.0) * matsubara_scale(temperature, critical_temperature, gap_mev))
}

/// Kernel shape function g(x) = (3/2)·((1+x²)·atan(x) − x)/x³.
/// The x → 0 branch removes a 0/0 singularity; g(0) = 1 and g(∞) = 0.
pub fn g<T: Float>(x: T) -> T {
    if x < cast::<T>(1.0e-4) {
        T::one()
    } else {
        cast::<T>(1.5) * ((T::one() + x * x) * x.atan() - x) / (x * x * x)
    }
}

/// BCS kernel K(q) as an inspectable truncated sum of g(q·ξ_n)/Λ_n.
pub fn kernel_sum<T: Float + FloatConst>(
    q: T,
    params: &MaterialParameters<T>,
    policy: &SeriesPolicy<T>,
) -> SeriesSum<T> {
    sum_series(policy, |n| {
        let xi_n = coherence_length(
            params.temperature,
            params.critical_temperature,
            params.gap_mev,
            params.coherence_length_0,
            params.mean_free_path,
            n,
        );
        g(q * xi_n)
            / lambda_factor(
                params.temperature,
                params.critical_temperature,
                params.gap_mev,
                params.coherence_length_0,
                params.mean_free_path,
                params.penetration_depth_0,
                n,
            )
    })
}

/// BCS kernel K(q) under the default truncation policy.
pub fn kernel<T: Float + FloatConst>(q: T, params: &MaterialParameters<T>) -> T {
    kernel_sum(q, params, &SeriesPolicy::default()).value
}

/// Self-normalized kernel K(q)/K(0); equals 1 at q = 0 by construction.
pub fn reduced_kernel<T: Float + FloatConst>(q: T, params: &MaterialParameters<T>) -> T {
    kernel(q, params) / kernel(T::zero(), params)
}

/// BCS magnetic penetration depth λ = K(0)^(−1/2).
pub fn penetration_depth<T: Float + FloatConst>(params: &MaterialParameters<T>) -> T {
    (T::one() / kernel(T::zero(), params)).sqrt()
}

/// Reduced field profile B(z)/B₀ below the surface.
pub fn reduced_field_penetration<T: Float + FloatConst>(
    z: T,
    params: &MaterialParameters<T>,
    integrator: &FourierSineIntegrator<T>,
) -> T {
    profile::reduced_field_penetration(z, |q| kernel(q, params), integrator)
}

/// Field profile B(z) for a given applied field.
pub fn field_penetration<T: Float + FloatConst>(
    z: T,
    params: &MaterialParameters<T>,
    applied_field: T,
    integrator: &FourierSineIntegrator<T>,
) -> T {
    applied_field * reduced_field_penetration(z, params, integrator)
}

/// Reduced field at many depths against one parameter set, in parallel.
pub fn reduced_field_profile<T: Float + FloatConst + Send + Sync>(
    depths: &[T],
    params: &MaterialParameters<T>,
    integrator: &FourierSineIntegrator<T>,
) -> Vec<T> {
    profile::reduced_field_profile(depths, |q| kernel(q, params), integrator)
}
