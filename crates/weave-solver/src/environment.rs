//! Environmental forces acting on every free particle.

use weave_math::Vec3;
use weave_types::{constants, Scalar};

/// Uniform wind field.
///
/// Not attenuated by distance or occlusion: every free particle receives
/// the same force `strength * normalize(direction)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub enabled: bool,
    pub strength: Scalar,
    /// Direction of the wind. Need not be normalized.
    pub direction: Vec3,
}

impl Wind {
    /// Force applied to each free particle. Zero when disabled or when
    /// `direction` has no length.
    pub fn force(&self) -> Vec3 {
        if self.enabled {
            self.direction.normalize_or_zero() * self.strength
        } else {
            Vec3::ZERO
        }
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: constants::WIND_STRENGTH,
            direction: Vec3::from_array(constants::WIND_DIRECTION),
        }
    }
}

/// Scalars shared by every particle during force evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Vertical gravitational acceleration; the force is `(0, gravity·m, 0)`.
    pub gravity: Scalar,
    /// Quadratic drag coefficient.
    pub air_resistance: Scalar,
    pub wind: Wind,
    /// Inelastic floor at y = 0.
    pub ground_collision: bool,
}

impl Environment {
    /// No gravity, drag, wind or floor.
    pub fn vacuum() -> Self {
        Self {
            gravity: 0.0,
            air_resistance: 0.0,
            wind: Wind {
                enabled: false,
                ..Wind::default()
            },
            ground_collision: false,
        }
    }

    /// Gravity, quadratic drag and wind on a free particle.
    ///
    /// Drag is `-c |v|² v̂`; a particle at rest has no drag direction and
    /// receives none.
    pub fn external_force(&self, mass: Scalar, velocity: Vec3, wind_force: Vec3) -> Vec3 {
        let gravity = Vec3::new(0.0, self.gravity * mass, 0.0);
        let drag = velocity.normalize_or_zero() * (-self.air_resistance * velocity.length_squared());
        gravity + drag + wind_force
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            air_resistance: constants::AIR_RESISTANCE,
            wind: Wind::default(),
            ground_collision: true,
        }
    }
}
