//! Simulation state: a particle snapshot plus the shared spring list.
//!
//! This is the primary mutable data structure during simulation. Integrators
//! evaluate derivatives on it, build temporary stage states from it with
//! [`SimulationState::add_derivative`], and finally advance it in place with
//! [`SimulationState::apply_derivative`].

use std::sync::Arc;

use weave_cloth::{Particle, Spring, SpringKind};
use weave_math::Vec3;
use weave_types::{constants, Scalar};

use crate::derivation::DerivationState;
use crate::environment::Environment;

/// Particles, springs and environment of one cloth.
///
/// Cloning deep-copies the particles but shares the spring list. Springs are
/// read-only during force evaluation, so every stage and diagnostic clone
/// points at the same allocation. Bulk stiffness updates go through
/// [`SimulationState::set_spring_constant`], which copies the list only if a
/// clone is still holding it.
///
/// The particle count is fixed for the lifetime of a state.
#[derive(Debug, Clone)]
pub struct SimulationState {
    particles: Vec<Particle>,
    springs: Arc<Vec<Spring>>,
    /// Gravity, drag, wind and floor settings.
    pub environment: Environment,
}

impl SimulationState {
    /// Creates a state from particles and springs.
    pub fn new(particles: Vec<Particle>, springs: Vec<Spring>, environment: Environment) -> Self {
        Self::with_shared_springs(particles, Arc::new(springs), environment)
    }

    /// Creates a state that shares an existing spring list.
    pub fn with_shared_springs(
        particles: Vec<Particle>,
        springs: Arc<Vec<Spring>>,
        environment: Environment,
    ) -> Self {
        debug_assert!(springs
            .iter()
            .all(|s| s.from_index() < particles.len() && s.to_index() < particles.len()));
        Self {
            particles,
            springs,
            environment,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to individual particles.
    ///
    /// A slice, so the particle count cannot change.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Handle to the shared spring list.
    #[inline]
    pub fn shared_springs(&self) -> &Arc<Vec<Spring>> {
        &self.springs
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Sets the constant of every spring of `kind`.
    pub fn set_spring_constant(&mut self, kind: SpringKind, spring_constant: Scalar) {
        Arc::make_mut(&mut self.springs)
            .iter_mut()
            .filter(|s| s.kind() == kind)
            .for_each(|s| s.set_spring_constant(spring_constant));
    }

    /// Sets the mass of every particle.
    pub fn set_mass(&mut self, mass: Scalar) {
        for p in &mut self.particles {
            p.mass = mass;
        }
    }

    /// Evaluates forces on this state and returns its time derivative.
    ///
    /// Side effect: the `force` field of every free particle is recomputed
    /// from scratch (gravity, drag, wind, then springs). Fixed particles are
    /// skipped entirely and get zero deltas.
    pub fn compute_derivative(&mut self, h: Scalar) -> DerivationState {
        self.accumulate_forces();
        DerivationState::from_particles(&self.particles, h)
    }

    fn accumulate_forces(&mut self) {
        let environment = self.environment;
        let wind_force = environment.wind.force();

        for p in self.particles.iter_mut().filter(|p| p.is_free()) {
            p.force = environment.external_force(p.mass, p.velocity, wind_force);
        }

        // Springs are visited in list order so the floating-point sum is
        // reproducible between runs.
        for spring in self.springs.iter() {
            let from = spring.from_index();
            let to = spring.to_index();
            let force = spring.force(self.particles[from].position, self.particles[to].position);

            if self.particles[from].is_free() {
                self.particles[from].force += force;
            }
            if self.particles[to].is_free() {
                self.particles[to].force -= force;
            }
        }
    }

    /// Advances this state in place by `derivation`.
    ///
    /// With ground collision on, a particle whose proposed height
    /// `y + dp.y` would go below the floor keeps its height, and the
    /// vertical component of its velocity delta is dropped: its velocity
    /// stays what it was before contact. Horizontal deltas are applied
    /// unchanged. Fixed particles are skipped.
    pub fn apply_derivative(&mut self, derivation: &DerivationState) {
        debug_assert_eq!(derivation.len(), self.particles.len());
        let ground = self.environment.ground_collision;

        for (p, (dp, dv)) in self.particles.iter_mut().zip(derivation.iter()) {
            if p.fixed {
                continue;
            }
            let mut dp = *dp;
            let mut dv = *dv;

            if ground && p.position.y + dp.y < constants::GROUND_HEIGHT {
                dp.y = 0.0;
                dv.y = 0.0;
            }

            p.position += dp;
            p.velocity += dv;
        }
    }

    /// Returns a copy of this state advanced by `derivation`.
    ///
    /// Used for Runge-Kutta stage states. No floor clamping happens here.
    pub fn add_derivative(&self, derivation: &DerivationState) -> SimulationState {
        debug_assert_eq!(derivation.len(), self.particles.len());
        let mut next = self.clone();
        for (p, (dp, dv)) in next.particles.iter_mut().zip(derivation.iter()) {
            if p.fixed {
                continue;
            }
            p.position += *dp;
            p.velocity += *dv;
        }
        next
    }

    /// Euclidean distance between two states over every position and
    /// velocity component.
    pub fn distance(&self, other: &SimulationState) -> Scalar {
        self.particles
            .iter()
            .zip(&other.particles)
            .map(|(a, b)| {
                a.position.distance_squared(b.position) + a.velocity.distance_squared(b.velocity)
            })
            .sum::<Scalar>()
            .sqrt()
    }

    /// Total kinetic energy `Σ ½ m |v|²` over free particles.
    pub fn kinetic_energy(&self) -> Scalar {
        self.particles
            .iter()
            .filter(|p| p.is_free())
            .map(Particle::kinetic_energy)
            .sum()
    }

    /// Gravitational potential `Σ -g m y` over free particles.
    pub fn potential_energy(&self) -> Scalar {
        let g = self.environment.gravity;
        self.particles
            .iter()
            .filter(|p| p.is_free())
            .map(|p| -g * p.mass * p.position.y)
            .sum()
    }

    /// Elastic energy stored in all springs.
    pub fn elastic_energy(&self) -> Scalar {
        self.springs
            .iter()
            .map(|s| {
                s.potential_energy(
                    self.particles[s.from_index()].position,
                    self.particles[s.to_index()].position,
                )
            })
            .sum()
    }

    /// Lowest particle height.
    pub fn min_height(&self) -> Scalar {
        self.particles
            .iter()
            .map(|p| p.position.y)
            .fold(Scalar::INFINITY, Scalar::min)
    }

    /// Positions as a flat list, for consumers that rebuild a render mesh.
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }
}
