//! Point masses.

use weave_math::Vec3;
use weave_types::Scalar;

/// A point mass of the cloth.
///
/// `force` is scratch output of the most recent force evaluation. It is
/// overwritten on every evaluation and never accumulated across them.
///
/// A `fixed` particle is pinned in place: no force evaluation, integrator
/// step or derivative application changes its position or velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub mass: Scalar,
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    pub fixed: bool,
}

impl Particle {
    /// A free particle at rest at `position`.
    pub fn new(mass: Scalar, position: Vec3) -> Self {
        Self {
            mass,
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            fixed: false,
        }
    }

    /// A pinned particle at `position`.
    pub fn pinned(mass: Scalar, position: Vec3) -> Self {
        Self {
            fixed: true,
            ..Self::new(mass, position)
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        !self.fixed
    }

    /// Pins the particle at `position`, clearing its motion and force.
    pub fn pin_at(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.force = Vec3::ZERO;
        self.fixed = true;
    }

    /// Releases the pin. Position and velocity are left as they are.
    pub fn release(&mut self) {
        self.fixed = false;
    }

    /// Kinetic energy ½ m |v|².
    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
