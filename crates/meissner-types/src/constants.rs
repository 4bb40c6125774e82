// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical and mathematical constants used by the screening models.
//!
//! Only the two constants the kernels actually consume are tabulated here:
//! the Boltzmann constant (CODATA 2018, exact by SI definition) and the
//! Euler–Mascheroni constant entering the weak-coupling BCS gap relation.

use num_traits::Float;

/// Boltzmann constant (eV / K), CODATA 2018.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617333262e-5;

/// Boltzmann constant (meV / K). Energies in this crate are in meV.
pub const BOLTZMANN_MEV_PER_K: f64 = 1e3 * BOLTZMANN_EV_PER_K;

/// Euler–Mascheroni constant γ.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Boltzmann constant (meV / K) at the working precision of `T`.
pub fn boltzmann_mev_per_k<T: Float>() -> T {
    T::from(BOLTZMANN_MEV_PER_K).expect("constant representable in T")
}

/// Euler–Mascheroni constant at the working precision of `T`.
pub fn euler_gamma<T: Float>() -> T {
    T::from(EULER_GAMMA).expect("constant representable in T")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boltzmann_mev_scale() {
        assert!((BOLTZMANN_MEV_PER_K - 8.617333262e-2).abs() < 1e-15);
    }

    #[test]
    fn generic_accessors_match_consts() {
        assert_eq!(boltzmann_mev_per_k::<f64>(), BOLTZMANN_MEV_PER_K);
        assert_eq!(euler_gamma::<f64>(), EULER_GAMMA);
        assert_eq!(boltzmann_mev_per_k::<f32>(), BOLTZMANN_MEV_PER_K as f32);
    }
}
