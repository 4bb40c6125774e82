// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Pippard
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pippard's phenomenological nonlocal theory of the Meissner state.
//!
//! Structurally the BCS kernel without the index sum: a single effective
//! coherence length whose temperature dependence is "borrowed" from BCS,
//! combined with the power-law penetration depth.
//!
//! Singular parameter points (propagated per IEEE-754, never clamped):
//!   - T = T_c: λ(T) diverges while Δ(T) → 0, so `j_0`, the coherence
//!     length, and the kernel are NaN.
//!   - T = 0 is regular here: tanh(Δ/0) = tanh(+∞) = 1 and `j_0` = 1
//!     exactly.

use meissner_math::quadrature::FourierSineIntegrator;
use meissner_types::constants;
use meissner_types::parameters::MaterialParameters;
use num_traits::{Float, FloatConst};

use crate::bcs;
pub use crate::bcs::g;
use crate::phenomenology;
use crate::profile;

fn cast<T: Float>(x: f64) -> T {
    T::from(x).expect("literal representable in T")
}

/// J₀ = (λ(T)/λ₀)²·(Δ(T)/Δ(0))·tanh(Δ(T)/(2·k_B·T)).
///
/// Equals 1 exactly at T = 0 and NaN at T = T_c (∞·0 from the diverging
/// reduced penetration depth against the closing gap).
pub fn j_0<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
    exponent: T,
) -> T {
    let reduced_lambda =
        phenomenology::reduced_penetration_depth_at(temperature, critical_temperature, exponent);
    reduced_lambda
        * reduced_lambda
        * bcs::reduced_gap_at(temperature, critical_temperature)
        * (bcs::gap(temperature, critical_temperature, gap_mev)
            / (cast::<T>(2.0) * constants::boltzmann_mev_per_k::<T>() * temperature))
            .tanh()
}

/// Effective Pippard coherence length ξ(T) = 1/(J₀/ξ₀ + 1/ℓ), with the same
/// degenerate-denominator convention as the BCS variant (0 → ∞, ∞ → 0).
pub fn coherence_length<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
    exponent: T,
    xi_0: T,
    mean_free_path: T,
) -> T {
    let fraction_1 = j_0(temperature, critical_temperature, gap_mev, exponent) / xi_0;
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

/// Reduced coherence length ξ(T)/ξ(0).
pub fn reduced_coherence_length<T: Float + FloatConst>(
    temperature: T,
    critical_temperature: T,
    gap_mev: T,
    exponent: T,
    xi_0: T,
    mean_free_path: T,
) -> T {
    coherence_length(
        temperature,
        critical_temperature,
        gap_mev,
        exponent,
        xi_0,
        mean_free_path,
    ) / coherence_length(
        T::zero(),
        critical_temperature,
        gap_mev,
        exponent,
        xi_0,
        mean_free_path,
    )
}

/// Pippard kernel K(q) = λ(T)^(−2)·(ξ(T)/ξ(0))·g(q·ξ(T)).
pub fn kernel<T: Float + FloatConst>(q: T, params: &MaterialParameters<T>) -> T {
    let xi = coherence_length(
        params.temperature,
        params.critical_temperature,
        params.gap_mev,
        params.exponent,
        params.coherence_length_0,
        params.mean_free_path,
    );
    phenomenology::penetration_depth(
        params.temperature,
        params.critical_temperature,
        params.exponent,
        params.penetration_depth_0,
    )
    .powi(-2)
        * reduced_coherence_length(
            params.temperature,
            params.critical_temperature,
            params.gap_mev,
            params.exponent,
            params.coherence_length_0,
            params.mean_free_path,
        )
        * g(q * xi)
}

/// Self-normalized kernel K(q)/K(0); equals 1 at q = 0 by construction.
pub fn reduced_kernel<T: Float + FloatConst>(q: T, params: &MaterialParameters<T>) -> T {
    kernel(q, params) / kernel(T::zero(), params)
}

/// Pippard magnetic penetration depth λ = K(0)^(−1/2).
pub fn penetration_depth<T: Float + FloatConst>(params: &MaterialParameters<T>) -> T {
    (T::one() / kernel(T::zero(), params)).sqrt()
}

/// Integrator baseline validated for Pippard profiles: cube-root-of-epsilon
/// tolerance with `size_of::<T>()` refinement levels. The constants are
/// empirically tuned; callers needing different behavior construct their
/// own `FourierSineIntegrator`.
pub fn pippard_integrator<T: Float>() -> FourierSineIntegrator<T> {
    FourierSineIntegrator::new(T::epsilon().cbrt(), core::mem::size_of::<T>())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn niobium(temperature: f64) -> MaterialParameters<f64> {
        MaterialParameters {
            temperature,
            critical_temperature: 9.25,
            gap_mev: bcs::gap_mev(9.25),
            coherence_length_0: 38.0,
            mean_free_path: 10_000.0,
            penetration_depth_0: 22.0,
            exponent: 4.0,
        }
    }

    #[test]
    fn shape_function_reexport_limits() {
        assert_eq!(g(0.0f64), 1.0);
        assert!(g(1e10f64).abs() < 0.01);
        assert_eq!(g(0.0f32), 1.0);
        assert!(g(1e10f32).abs() < 0.01);
    }

    #[test]
    fn j_0_zero_temperature_limit() {
        let tc = 10.0f64;
        let delta = bcs::gap_mev(tc);
        assert_eq!(j_0(0.0, tc, delta, 4.0), 1.0);
    }

    #[test]
    fn j_0_is_nan_at_critical_temperature() {
        let tc = 10.0f64;
        let delta = bcs::gap_mev(tc);
        assert!(j_0(tc, tc, delta, 4.0).is_nan());
    }

    #[test]
    fn coherence_length_zero_temperature() {
        let tc = 10.0f64;
        let delta = bcs::gap_mev(tc);
        let xi_0 = 100.0;
        let ell = 1.0;

        // J₀(0) = 1, so ξ(0) reduces to the parallel sum of ξ₀ and ℓ.
        let expected = 1.0 / (1.0 / xi_0 + 1.0 / ell);
        assert_eq!(coherence_length(0.0, tc, delta, 4.0, xi_0, ell), expected);

        assert!(coherence_length(tc, tc, delta, 4.0, xi_0, ell).is_nan());
    }

    #[test]
    fn coherence_length_clean_limit() {
        let tc = 10.0f64;
        let delta = bcs::gap_mev(tc);
        let xi_0 = 100.0;
        let ell = f64::INFINITY;

        let expected = 1.0 / (1.0 / xi_0 + 1.0 / ell);
        let got = coherence_length(0.0, tc, delta, 4.0, xi_0, ell);
        assert_eq!(got, expected);
        assert_eq!(got, xi_0);
    }

    #[test]
    fn reduced_kernel_self_normalizes() {
        let p = niobium(3.5);
        assert_eq!(reduced_kernel(0.0, &p), 1.0);
    }

    #[test]
    fn kernel_positive_below_transition() {
        let p = niobium(3.5);
        let k0 = kernel(0.0, &p);
        assert!(k0.is_finite() && k0 > 0.0);
        // nonlocality suppresses the response at finite q
        assert!(kernel(0.5, &p) < k0);
    }

    #[test]
    fn pippard_integrator_baseline() {
        let integrator = pippard_integrator::<f64>();
        assert_eq!(integrator.levels(), core::mem::size_of::<f64>());
        assert_eq!(integrator.relative_tolerance(), f64::EPSILON.cbrt());
    }

    #[test]
    fn profile_decays_from_surface() {
        let p = niobium(3.5);
        let integrator = pippard_integrator::<f64>();
        let surface = reduced_field_penetration(0.0, &p, &integrator);
        let shallow = reduced_field_penetration(10.0, &p, &integrator);
        let deep = reduced_field_penetration(60.0, &p, &integrator);
        assert_eq!(surface, 1.0);
        assert!(shallow.abs() < 1.0);
        assert!(deep.abs() < shallow.abs());
    }
}
