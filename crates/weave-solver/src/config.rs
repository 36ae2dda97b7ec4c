//! Simulator configuration.
//!
//! Every value the external settings panel can change, with the defaults of
//! a freshly opened scene. Loadable from TOML:
//!
//! ```toml
//! grid_size = 20
//! integrator = "rk4"
//! adaptive_step_size = true
//!
//! [spring_constants]
//! structural = 15000.0
//! shear = 15000.0
//! flex = 15000.0
//!
//! [wind]
//! enabled = true
//! direction = [1.0, 0.0, 1.0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use weave_cloth::{SpringConstants, SpringKind};
use weave_math::Vec3;
use weave_types::{constants, Scalar, WeaveError, WeaveResult};

use crate::environment::{Environment, Wind};
use crate::integrator::Integrator;

/// Wind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    pub enabled: bool,
    pub strength: Scalar,
    /// Direction `[x, y, z]`; normalized at force evaluation.
    pub direction: [Scalar; 3],
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: constants::WIND_STRENGTH,
            direction: constants::WIND_DIRECTION,
        }
    }
}

impl From<&WindConfig> for Wind {
    fn from(config: &WindConfig) -> Self {
        Wind {
            enabled: config.enabled,
            strength: config.strength,
            direction: Vec3::from_array(config.direction),
        }
    }
}

/// Configuration of a [`ClothSimulator`](crate::ClothSimulator).
///
/// Tables (`spring_constants`, `wind`) come last so the struct serializes
/// to valid TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Particles per grid side.
    pub grid_size: usize,
    /// Rest distance between neighbouring particles.
    pub particle_distance: Scalar,
    /// Mass of every particle.
    pub mass: Scalar,
    /// Vertical gravitational acceleration.
    pub gravity: Scalar,
    /// Quadratic drag coefficient.
    pub air_resistance: Scalar,
    /// Inelastic floor at y = 0.
    pub ground_collision: bool,
    /// Pin the left end of the top row.
    pub fix_left_corner: bool,
    /// Pin the right end of the top row.
    pub fix_right_corner: bool,
    pub integrator: Integrator,
    /// Derive the sub-step size from a step-doubling error estimate.
    pub adaptive_step_size: bool,
    /// Target local error for adaptive stepping.
    pub error_threshold: Scalar,
    /// Sub-steps per frame when adaptive stepping is off.
    pub step_divisor: u32,
    pub spring_constants: SpringConstants,
    pub wind: WindConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            grid_size: constants::GRID_SIZE,
            particle_distance: constants::PARTICLE_DISTANCE,
            mass: constants::MASS,
            gravity: constants::GRAVITY,
            air_resistance: constants::AIR_RESISTANCE,
            ground_collision: true,
            fix_left_corner: true,
            fix_right_corner: true,
            integrator: Integrator::RungeKutta4,
            adaptive_step_size: true,
            error_threshold: constants::ERROR_THRESHOLD,
            step_divisor: constants::STEP_DIVISOR,
            spring_constants: SpringConstants::default(),
            wind: WindConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Cheap preset: Euler with a fixed sub-step count.
    pub fn fast() -> Self {
        Self {
            integrator: Integrator::Euler,
            adaptive_step_size: false,
            ..Default::default()
        }
    }

    /// Accurate preset: adaptive RK4 with a tight error target.
    pub fn high_accuracy() -> Self {
        Self {
            integrator: Integrator::RungeKutta4,
            adaptive_step_size: true,
            error_threshold: 0.01,
            ..Default::default()
        }
    }

    /// Environment derived from this configuration.
    pub fn environment(&self) -> Environment {
        Environment {
            gravity: self.gravity,
            air_resistance: self.air_resistance,
            wind: Wind::from(&self.wind),
            ground_collision: self.ground_collision,
        }
    }

    /// Checks that the configuration describes a simulable cloth.
    pub fn validate(&self) -> WeaveResult<()> {
        if self.grid_size < 2 {
            return Err(WeaveError::InvalidGrid(format!(
                "grid must be at least 2x2, got {0}x{0}",
                self.grid_size
            )));
        }
        if !(self.particle_distance > 0.0 && self.particle_distance.is_finite()) {
            return Err(WeaveError::InvalidGrid(format!(
                "particle distance must be positive and finite, got {}",
                self.particle_distance
            )));
        }
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(WeaveError::InvalidConfig(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if !(self.error_threshold > 0.0 && self.error_threshold.is_finite()) {
            return Err(WeaveError::InvalidConfig(format!(
                "error threshold must be positive and finite, got {}",
                self.error_threshold
            )));
        }
        if self.step_divisor == 0 {
            return Err(WeaveError::InvalidConfig(
                "step divisor must be at least 1".into(),
            ));
        }
        for &kind in SpringKind::all() {
            let k = self.spring_constants.get(kind);
            if !(k >= 0.0 && k.is_finite()) {
                return Err(WeaveError::InvalidConfig(format!(
                    "{} spring constant must be non-negative and finite, got {k}",
                    kind.name()
                )));
            }
        }
        let scalars = [self.gravity, self.air_resistance, self.wind.strength];
        if scalars.iter().chain(&self.wind.direction).any(|v| !v.is_finite()) {
            return Err(WeaveError::InvalidConfig(
                "gravity, air resistance and wind must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> WeaveResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| WeaveError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> WeaveResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> WeaveResult<String> {
        toml::to_string(self).map_err(|e| WeaveError::Serialization(e.to_string()))
    }
}
