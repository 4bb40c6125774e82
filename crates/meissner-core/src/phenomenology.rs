// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Phenomenology
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Purely phenomenological relations in superconductivity.
//!
//! Closed-form functions of their inputs; no iteration anywhere. The
//! power-law penetration depth is the external collaborator consumed by the
//! Pippard and London kernels.

use num_traits::{Float, FloatConst};

/// Temperature dependence of the reduced penetration depth,
/// λ(T)/λ₀ = 1/sqrt(1 − x^n). Infinite at and above T_c.
pub fn reduced_penetration_depth<T: Float>(reduced_temperature: T, exponent: T) -> T {
    if reduced_temperature >= T::one() {
        T::infinity()
    } else if reduced_temperature <= T::zero() {
        T::one()
    } else {
        T::one() / (T::one() - reduced_temperature.powf(exponent)).sqrt()
    }
}

/// Reduced penetration depth at an absolute temperature.
pub fn reduced_penetration_depth_at<T: Float>(
    temperature: T,
    critical_temperature: T,
    exponent: T,
) -> T {
    reduced_penetration_depth(temperature / critical_temperature, exponent)
}

/// Temperature dependence of the penetration depth (same units as λ₀).
pub fn penetration_depth<T: Float>(
    temperature: T,
    critical_temperature: T,
    exponent: T,
    lambda_0: T,
) -> T {
    lambda_0 * reduced_penetration_depth_at(temperature, critical_temperature, exponent)
}

/// Closed-form reduced gap, after Halbritter (ca. 1970):
/// Δ(x)/Δ(0) = cos((π/2)·x²).
pub fn reduced_gap<T: Float + FloatConst>(reduced_temperature: T) -> T {
    if reduced_temperature >= T::one() {
        T::zero()
    } else if reduced_temperature <= T::zero() {
        T::one()
    } else {
        (T::FRAC_PI_2() * reduced_temperature * reduced_temperature).cos()
    }
}

/// Transition temperature (K) under an applied magnetic field, assuming a
/// power-law suppression T_c(B) = T_c0·(1 − B/B_c)^n; n = 0.5 gives the
/// usual "parabolic" critical-field curve.
pub fn critical_temperature<T: Float>(
    applied_field: T,
    critical_temperature_0: T,
    critical_field: T,
    exponent: T,
) -> T {
    if applied_field < T::zero() {
        // negative fields are not considered
        critical_temperature_0
    } else if applied_field > critical_field {
        // no superconductivity above the critical field
        T::zero()
    } else {
        critical_temperature_0 * (T::one() - applied_field / critical_field).powf(exponent)
    }
}

/// Transition temperature (K) under an applied field, from inverting
/// Hc2(T)/Hc2(0) = [1 − (T/Tc)²] / [1 + (T/Tc)²].
/// See M. Tinkham, Phys. Rev. 129, 2413 (1963).
pub fn critical_temperature_ii<T: Float>(
    applied_field: T,
    critical_temperature_0: T,
    upper_critical_field: T,
) -> T {
    if applied_field < T::zero() {
        critical_temperature_0
    } else if applied_field > upper_critical_field {
        T::zero()
    } else {
        let b = applied_field / upper_critical_field;
        critical_temperature_0 * ((T::one() - b * b) / (T::one() + b * b)).sqrt()
    }
}

/// Gorter-Casimir two-fluid reduced penetration depth (fixed exponent 4).
pub fn two_fluid_reduced_penetration_depth<T: Float>(reduced_temperature: T) -> T {
    reduced_penetration_depth(reduced_temperature, T::from(4.0).expect("literal"))
}

/// Gorter-Casimir two-fluid penetration depth (fixed exponent 4).
pub fn two_fluid_penetration_depth<T: Float>(
    temperature: T,
    critical_temperature: T,
    lambda_0: T,
) -> T {
    lambda_0 * two_fluid_reduced_penetration_depth(temperature / critical_temperature)
}
