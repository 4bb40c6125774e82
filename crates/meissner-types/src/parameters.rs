// ─────────────────────────────────────────────────────────────────────
// SCPN Meissner Core — Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Material parameters for a single superconducting sample.
//!
//! A `MaterialParameters` value is an immutable bag of scalars passed by
//! reference to every kernel and profile evaluation. A fit engine varies the
//! fields between iterations and holds the depths fixed; nothing here is
//! cached or mutated by the physics code.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{MeissnerError, MeissnerResult};

/// Physical parameters of the screening models.
///
/// Lengths are in nm, temperatures in K, energies in meV. The mean free
/// path may be `+inf`, denoting the disorder-free (clean) limit; it is also
/// the serde default so a JSON file may simply omit the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Float + Deserialize<'de>"))]
pub struct MaterialParameters<T> {
    /// Sample temperature (K).
    pub temperature: T,
    /// Critical temperature T_c (K). Must be positive.
    pub critical_temperature: T,
    /// Zero-temperature energy gap Δ(0) (meV).
    pub gap_mev: T,
    /// BCS coherence length ξ₀ (nm). Must be positive.
    pub coherence_length_0: T,
    /// Electron mean free path ℓ (nm). `+inf` is the clean limit.
    #[serde(default = "clean_limit")]
    pub mean_free_path: T,
    /// Zero-temperature magnetic penetration depth λ₀ (nm). Must be positive.
    pub penetration_depth_0: T,
    /// Exponent of the phenomenological power law for λ(T).
    pub exponent: T,
}

fn clean_limit<T: Float>() -> T {
    T::infinity()
}

impl<T: Float> MaterialParameters<T> {
    /// Reduced temperature x = T / T_c.
    pub fn reduced_temperature(&self) -> T {
        self.temperature / self.critical_temperature
    }

    /// Fail fast on parameters that are programming errors rather than
    /// mathematical singularities: non-positive T_c or lengths, negative
    /// temperature or gap. NaN fields are rejected by the same comparisons.
    pub fn validate(&self) -> MeissnerResult<()> {
        if !(self.temperature >= T::zero()) {
            return Err(invalid("temperature", self.temperature));
        }
        if !(self.critical_temperature > T::zero()) {
            return Err(invalid("critical_temperature", self.critical_temperature));
        }
        if !(self.gap_mev >= T::zero()) {
            return Err(invalid("gap_mev", self.gap_mev));
        }
        if !(self.coherence_length_0 > T::zero()) {
            return Err(invalid("coherence_length_0", self.coherence_length_0));
        }
        if !(self.mean_free_path > T::zero()) {
            return Err(invalid("mean_free_path", self.mean_free_path));
        }
        if !(self.penetration_depth_0 > T::zero()) {
            return Err(invalid("penetration_depth_0", self.penetration_depth_0));
        }
        Ok(())
    }
}

impl<T: Float + serde::de::DeserializeOwned> MaterialParameters<T> {
    /// Parse and validate parameters from a JSON string.
    pub fn from_json_str(json: &str) -> MeissnerResult<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Load and validate parameters from a JSON file.
    pub fn from_file(path: &str) -> MeissnerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

fn invalid<T: Float>(name: &'static str, value: T) -> MeissnerError {
    MeissnerError::InvalidParameter {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}
