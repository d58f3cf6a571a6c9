//! Soft body configuration.
//!
//! Everything a body needs beyond its geometry: initial inverse mass,
//! which external forces act on it, and how it is drawn. Loadable from
//! TOML; every field is optional and falls back to [`Default`].

use std::path::Path;

use pliant_math::Vec3;
use pliant_types::constants::DEFAULT_INVERSE_MASS;
use pliant_types::{PliantError, PliantResult};
use serde::{Deserialize, Serialize};

/// Configuration for one soft body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Initial inverse mass of every vertex. Zero makes the body static.
    pub inverse_mass: f32,

    /// Whether the solver applies gravity.
    pub gravity_affected: bool,

    /// Whether the solver applies wind.
    pub wind_affected: bool,

    /// Flat RGB colour in `[0, 1]`.
    pub colour: Vec3,

    /// Model-space offset applied at render time.
    pub position: Vec3,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            inverse_mass: DEFAULT_INVERSE_MASS,
            gravity_affected: false,
            wind_affected: false,
            colour: Vec3::splat(0.8),
            position: Vec3::ZERO,
        }
    }
}

impl BodyConfig {
    /// A body that falls under gravity.
    pub fn dynamic() -> Self {
        Self {
            gravity_affected: true,
            ..Default::default()
        }
    }

    /// A body no force can move.
    pub fn fixed() -> Self {
        Self {
            inverse_mass: 0.0,
            ..Default::default()
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> PliantResult<Self> {
        let config: Self = toml::from_str(s)
            .map_err(|e| PliantError::InvalidConfig(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> PliantResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> PliantResult<String> {
        toml::to_string(self)
            .map_err(|e| PliantError::Serialization(format!("TOML serialization failed: {e}")))
    }

    /// Rejects negative or non-finite inverse mass and non-finite vectors.
    pub fn validate(&self) -> PliantResult<()> {
        if !self.inverse_mass.is_finite() || self.inverse_mass < 0.0 {
            return Err(PliantError::InvalidConfig(format!(
                "inverse_mass must be finite and >= 0, got {}",
                self.inverse_mass
            )));
        }
        if !self.colour.is_finite() {
            return Err(PliantError::InvalidConfig("colour must be finite".into()));
        }
        if !self.position.is_finite() {
            return Err(PliantError::InvalidConfig("position must be finite".into()));
        }
        Ok(())
    }
}
