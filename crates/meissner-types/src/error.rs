// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Error taxonomy for the screening models.
//!
//! Only programming errors (invalid parameters, I/O, malformed JSON) are
//! reported through this type. Mathematical singularities of the kernel
//! formulas (T = 0, T = T_c, ℓ = ∞) are part of the contract and propagate
//! as IEEE-754 NaN/±∞ through ordinary arithmetic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeissnerError {
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Solver diverged at iteration {iteration}: {message}")]
    SolverDiverged { iteration: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MeissnerResult<T> = Result<T, MeissnerError>;
