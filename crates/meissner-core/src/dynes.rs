// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Dynes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quasiparticle density of states with lifetime broadening.
//!
//! R. C. Dynes et al., "Direct measurement of quasiparticle-lifetime
//! broadening in a strong-coupled superconductor",
//! Phys. Rev. Lett. 41, 1509 (1978).
//! https://doi.org/10.1103/PhysRevLett.41.1509

use num_complex::Complex;
use num_traits::Float;

/// Broadened density of states N(E, Γ, Δ) = Re[(E − iΓ)/√((E − iΓ)² − Δ²)].
/// Γ = 0 recovers the BCS square-root singularity at |E| = Δ.
pub fn density_of_states<T: Float>(energy: T, gamma: T, delta: T) -> T {
    let e = Complex::new(energy, -gamma);
    let d = Complex::new(delta, T::zero());
    (e / (e * e - d * d).sqrt()).re
}

/// BCS coherence factor M(E, Γ, Δ) = Re[Δ/√((E − iΓ)² − Δ²)], as enters the
/// Hebel-Slichter peak.
pub fn coherence_factor<T: Float>(energy: T, gamma: T, delta: T) -> T {
    let e = Complex::new(energy, -gamma);
    let d = Complex::new(delta, T::zero());
    (d / (e * e - d * d).sqrt()).re
}
