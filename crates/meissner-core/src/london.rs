// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — London
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! London's local limit: a q-independent kernel.
//!
//! Included for interface consistency with the nonlocal theories; the field
//! profile is exactly exponential, B(z)/B₀ = e^(−z/λ(T)), which also makes
//! this module the closed-form oracle for the Fourier-sine integrator.

use meissner_math::quadrature::FourierSineIntegrator;
use num_traits::{Float, FloatConst};

use crate::phenomenology;
use crate::profile;

/// London kernel K = λ(T)^(−2), independent of q.
pub fn kernel<T: Float>(
    _q: T,
    temperature: T,
    critical_temperature: T,
    exponent: T,
    lambda_0: T,
) -> T {
    phenomenology::penetration_depth(temperature, critical_temperature, exponent, lambda_0)
        .powi(-2)
}

/// Self-normalized London kernel: identically 1.
pub fn reduced_kernel<T: Float>(
    _q: T,
    _temperature: T,
    _critical_temperature: T,
    _exponent: T,
    _lambda_0: T,
) -> T {
    T::one()
}

/// Reduced field profile B(z)/B₀; analytically e^(−z/λ(T)).
pub fn reduced_field_penetration<T: Float + FloatConst>(
    z: T,
    temperature: T,
    critical_temperature: T,
    exponent: T,
    lambda_0: T,
    integrator: &FourierSineIntegrator<T>,
) -> T {
    let k = kernel(T::zero(), temperature, critical_temperature, exponent, lambda_0);
    profile::reduced_field_penetration(z, |_q| k, integrator)
}

/// Field profile B(z) for a given applied field.
#[allow(clippy::too_many_arguments)]
pub fn field_penetration<T: Float + FloatConst>(
    z: T,
    temperature: T,
    critical_temperature: T,
    exponent: T,
    lambda_0: T,
    applied_field: T,
    integrator: &FourierSineIntegrator<T>,
) -> T {
    applied_field
        * reduced_field_penetration(
            z,
            temperature,
            critical_temperature,
            exponent,
            lambda_0,
            integrator,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_ignores_q() {
        let k0 = kernel(0.0f64, 3.5, 9.25, 4.0, 22.0);
        let k1 = kernel(17.3f64, 3.5, 9.25, 4.0, 22.0);
        assert_eq!(k0, k1);
    }

    #[test]
    fn reduced_kernel_is_unity() {
        assert_eq!(reduced_kernel(0.0f64, 3.5, 9.25, 4.0, 22.0), 1.0);
        assert_eq!(reduced_kernel(42.0f64, 3.5, 9.25, 4.0, 22.0), 1.0);
    }

    #[test]
    fn kernel_at_zero_temperature_is_inverse_square_lambda() {
        let k = kernel(0.0f64, 0.0, 9.25, 4.0, 22.0);
        assert!((k - 22.0f64.powi(-2)).abs() < 1e-18);
    }

    #[test]
    fn profile_matches_exponential() {
        let integrator = FourierSineIntegrator::<f64>::default();
        let (temperature, tc, exponent, lambda_0) = (3.5, 9.25, 4.0, 22.0);
        let lambda = phenomenology::penetration_depth(temperature, tc, exponent, lambda_0);
        for z in [0.5, 5.0, 22.0, 80.0] {
            let got =
                reduced_field_penetration(z, temperature, tc, exponent, lambda_0, &integrator);
            let expected = (-z / lambda).exp();
            assert!(
                (got - expected).abs() < 1e-6 * expected.max(1e-6),
                "z={z}: got {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn profile_above_transition_is_unscreened_inside() {
        // λ(T ≥ T_c) = ∞ makes K = 0 and the integrand sin(qz)/q: the
        // profile is 1 at every depth (no screening in the normal state).
        let integrator = FourierSineIntegrator::<f64>::default();
        let got = reduced_field_penetration(25.0, 10.0, 9.25, 4.0, 22.0, &integrator);
        assert!((got - 1.0).abs() < 1e-6);
    }
}
