// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fourier-sine inversion of a response kernel into a field profile.
//!
//! For any kernel K(q), the reduced field below the surface is
//!
//! ```text
//! B(z)/B₀ = (2/π)·∫₀^∞ q/(q² + K(q))·sin(q·z) dq,     z > 0,
//! ```
//!
//! and B(z)/B₀ = 1 at or above the surface. The integrator is owned by the
//! caller and shared across evaluations; the typical fitting workload (many
//! depths, one parameter set) batches depths with rayon against a single
//! kernel closure.

use meissner_math::quadrature::FourierSineIntegrator;
use num_traits::{Float, FloatConst};
use rayon::prelude::*;

/// Reduced field B(z)/B₀ for an arbitrary kernel.
pub fn reduced_field_penetration<T, K>(
    z: T,
    kernel: K,
    integrator: &FourierSineIntegrator<T>,
) -> T
where
    T: Float + FloatConst,
    K: Fn(T) -> T,
{
    // The field is unscreened at and outside the surface.
    if z <= T::zero() {
        return T::one();
    }
    let result = integrator.integrate(|q| q / (q * q + kernel(q)), z);
    T::FRAC_2_PI() * result.value
}

/// Field B(z) for an arbitrary kernel and applied field B₀.
pub fn field_penetration<T, K>(
    z: T,
    kernel: K,
    applied_field: T,
    integrator: &FourierSineIntegrator<T>,
) -> T
where
    T: Float + FloatConst,
    K: Fn(T) -> T,
{
    applied_field * reduced_field_penetration(z, kernel, integrator)
}

/// Reduced field at many depths against one fixed kernel, in parallel.
pub fn reduced_field_profile<T, K>(
    depths: &[T],
    kernel: K,
    integrator: &FourierSineIntegrator<T>,
) -> Vec<T>
where
    T: Float + FloatConst + Send + Sync,
    K: Fn(T) -> T + Sync,
{
    depths
        .par_iter()
        .map(|&z| reduced_field_penetration(z, &kernel, integrator))
        .collect()
}
