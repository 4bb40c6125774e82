// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Meissner Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Meissner screening models for depth-resolved magnetometry.
//!
//! Models the decay of a static magnetic field below the surface of a
//! superconductor under three alternative response theories, as needed to
//! fit μSR / β-NMR depth profiles:
//!
//!   - `bcs` — microscopic BCS theory: gap equation, Matsubara-summed
//!     nonlocal kernel, field profile, penetration-depth estimator
//!   - `pippard` — Pippard's phenomenological nonlocal generalization with
//!     a coherence length "borrowed" from BCS temperature dependence
//!   - `london` — the local (London) limit, a constant kernel
//!   - `phenomenology` — closed-form power laws for λ(T), the Halbritter
//!     gap, and field-dependent critical temperatures
//!   - `dynes` — broadened quasiparticle density of states
//!   - `profile` — shared Fourier-sine inversion of a kernel into B(z)
//!
//! All entry points are pure functions of their scalar inputs, generic over
//! the floating-point type. Singular parameter points (T = 0, T = T_c)
//! propagate NaN/±∞ per IEEE-754 rather than raising errors; see the module
//! docs for the exact singular sets.

pub mod bcs;
pub mod dynes;
pub mod london;
pub mod phenomenology;
pub mod pippard;
pub mod profile;
