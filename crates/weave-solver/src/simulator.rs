//! Top-level cloth simulator.
//!
//! Owns the grid topology and the authoritative [`SimulationState`], exposes
//! every setting of the external configuration panel, and advances the cloth
//! once per render tick:
//!
//! ```text
//! simulate(delta):
//!   h = adaptive ? estimate_step(state, delta).h : delta / step_divisor
//!   t = 0
//!   while t < delta:          // the last sub-step may overshoot delta
//!       integrator.step(state, h)
//!       t += h
//! ```
//!
//! ```
//! use weave_solver::{ClothSimulator, SimulatorConfig};
//!
//! let config = SimulatorConfig { grid_size: 4, ..Default::default() };
//! let mut cloth = ClothSimulator::new(config).unwrap();
//! let report = cloth.simulate(1.0 / 60.0);
//! assert!(report.substeps_taken >= 1);
//! ```

use weave_cloth::{ClothGrid, Particle, Spring, SpringKind};
use weave_math::Vec3;
use weave_types::{Scalar, WeaveResult};

use crate::adaptive::{estimate_step, StepEstimate};
use crate::config::SimulatorConfig;
use crate::integrator::Integrator;
use crate::state::SimulationState;

/// Diagnostics of one `simulate()` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Sub-step size used for the frame.
    pub h: Scalar,
    /// Sub-steps actually executed.
    pub substeps_taken: u32,
    /// Adaptive sub-step count estimate (display only). Carried over from
    /// the last adaptive frame when adaptive stepping is off.
    pub adaptive_substeps: u32,
    /// Step-doubling error estimate, when adaptive stepping is on.
    pub error: Option<Scalar>,
}

/// Mass-spring cloth on a square grid.
///
/// Not internally synchronized: callers run at most one `simulate()` at a
/// time against a given simulator.
#[derive(Debug, Clone)]
pub struct ClothSimulator {
    grid: ClothGrid,
    state: SimulationState,
    config: SimulatorConfig,
    h: Scalar,
    adaptive_substeps: u32,
    last_error: Option<Scalar>,
}

impl ClothSimulator {
    /// Builds the grid, springs and pinned corners described by `config`.
    pub fn new(config: SimulatorConfig) -> WeaveResult<Self> {
        config.validate()?;
        let grid = ClothGrid::new(config.grid_size, config.particle_distance)?;
        let state = Self::build_state(&grid, &config);

        tracing::info!(
            grid_size = grid.size(),
            particles = state.particle_count(),
            springs = state.springs().len(),
            integrator = %config.integrator,
            adaptive = config.adaptive_step_size,
            "cloth simulator created"
        );

        Ok(Self {
            h: 0.0,
            adaptive_substeps: 1,
            last_error: None,
            grid,
            state,
            config,
        })
    }

    /// Simulator with the default configuration.
    pub fn with_defaults() -> WeaveResult<Self> {
        Self::new(SimulatorConfig::default())
    }

    fn build_state(grid: &ClothGrid, config: &SimulatorConfig) -> SimulationState {
        let mut particles = grid.particles(config.mass);
        if config.fix_left_corner {
            let corner = grid.left_corner();
            particles[corner].pin_at(grid.rest_position(corner));
        }
        if config.fix_right_corner {
            let corner = grid.right_corner();
            particles[corner].pin_at(grid.rest_position(corner));
        }
        let springs = grid.springs(&config.spring_constants);
        SimulationState::new(particles, springs, config.environment())
    }

    /// Rebuilds particles and springs from the current configuration.
    ///
    /// All motion is lost; the cloth returns to its rest grid.
    pub fn reset(&mut self) {
        self.state = Self::build_state(&self.grid, &self.config);
        self.h = 0.0;
        self.adaptive_substeps = 1;
        self.last_error = None;
        tracing::info!(particles = self.state.particle_count(), "cloth simulator reset");
    }

    // ─── Simulation ───────────────────────────────────────────

    /// Advances the cloth by `delta_time` seconds.
    ///
    /// With adaptive stepping, the sub-step size comes from a step-doubling
    /// estimate on two scratch clones; otherwise it is
    /// `delta_time / step_divisor`. Sub-steps of that fixed size are then
    /// taken until the accumulated time reaches `delta_time`, so the last
    /// one may overshoot by less than `h`.
    pub fn simulate(&mut self, delta_time: Scalar) -> FrameReport {
        let integrator = self.config.integrator;

        if self.config.adaptive_step_size {
            let StepEstimate { h, error, substeps } = estimate_step(
                &self.state,
                integrator,
                delta_time,
                self.config.error_threshold,
            );
            tracing::debug!(h, error, substeps, "adaptive step size");
            self.h = h;
            self.adaptive_substeps = substeps;
            self.last_error = Some(error);
        } else {
            self.h = delta_time / Scalar::from(self.config.step_divisor);
            self.last_error = None;
        }

        let h = self.h;
        let mut substeps_taken = 0u32;
        if h > 0.0 && h.is_finite() {
            let mut t = 0.0;
            while t < delta_time {
                integrator.step(&mut self.state, h);
                t += h;
                substeps_taken += 1;
            }
        }

        tracing::trace!(delta_time, h, substeps_taken, "frame simulated");

        FrameReport {
            h,
            substeps_taken,
            adaptive_substeps: self.adaptive_substeps,
            error: self.last_error,
        }
    }

    // ─── Read access ──────────────────────────────────────────

    /// Particles in grid order (`row * size + col`).
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.state.particles()
    }

    #[inline]
    pub fn springs(&self) -> &[Spring] {
        self.state.springs()
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access to the authoritative state, e.g. to perturb particles.
    #[inline]
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    #[inline]
    pub fn grid(&self) -> &ClothGrid {
        &self.grid
    }

    /// Particles per grid side.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Sub-step size of the most recent frame (0 before the first frame).
    #[inline]
    pub fn h(&self) -> Scalar {
        self.h
    }

    /// Sub-step count estimate of the most recent adaptive frame, for
    /// display. Frames with fixed stepping leave it unchanged; it is 1
    /// before any adaptive frame.
    #[inline]
    pub fn adaptive_substeps(&self) -> u32 {
        self.adaptive_substeps
    }

    /// Error estimate of the most recent adaptive frame.
    #[inline]
    pub fn last_error(&self) -> Option<Scalar> {
        self.last_error
    }

    #[inline]
    pub fn integrator(&self) -> Integrator {
        self.config.integrator
    }

    // ─── Pinning ──────────────────────────────────────────────

    /// Pins or releases the left end of the top row.
    ///
    /// Pinning moves the particle back to its rest position and clears its
    /// velocity and force. Releasing only clears the flag.
    pub fn set_fix_left_corner(&mut self, fixed: bool) {
        self.config.fix_left_corner = fixed;
        let corner = self.grid.left_corner();
        self.set_corner(corner, fixed);
    }

    /// Pins or releases the right end of the top row.
    pub fn set_fix_right_corner(&mut self, fixed: bool) {
        self.config.fix_right_corner = fixed;
        let corner = self.grid.right_corner();
        self.set_corner(corner, fixed);
    }

    fn set_corner(&mut self, index: usize, fixed: bool) {
        let rest = self.grid.rest_position(index);
        let particle = &mut self.state.particles_mut()[index];
        if fixed {
            particle.pin_at(rest);
        } else {
            particle.release();
        }
        tracing::debug!(index, fixed, "corner pin changed");
    }

    #[inline]
    pub fn fix_left_corner(&self) -> bool {
        self.config.fix_left_corner
    }

    #[inline]
    pub fn fix_right_corner(&self) -> bool {
        self.config.fix_right_corner
    }

    // ─── Bulk material settings ───────────────────────────────

    /// Sets the mass of every particle.
    pub fn set_mass(&mut self, mass: Scalar) {
        self.config.mass = mass;
        self.state.set_mass(mass);
        tracing::debug!(mass, "particle mass changed");
    }

    /// Sets the constant of every spring of `kind`.
    pub fn set_spring_constant(&mut self, kind: SpringKind, spring_constant: Scalar) {
        self.config.spring_constants.set(kind, spring_constant);
        self.state.set_spring_constant(kind, spring_constant);
        tracing::debug!(kind = kind.name(), spring_constant, "spring constant changed");
    }

    pub fn set_structural_constant(&mut self, spring_constant: Scalar) {
        self.set_spring_constant(SpringKind::Structural, spring_constant);
    }

    pub fn set_shear_constant(&mut self, spring_constant: Scalar) {
        self.set_spring_constant(SpringKind::Shear, spring_constant);
    }

    pub fn set_flex_constant(&mut self, spring_constant: Scalar) {
        self.set_spring_constant(SpringKind::Flex, spring_constant);
    }

    // ─── Environment ──────────────────────────────────────────

    pub fn set_gravity(&mut self, gravity: Scalar) {
        self.config.gravity = gravity;
        self.state.environment.gravity = gravity;
    }

    pub fn set_air_resistance(&mut self, air_resistance: Scalar) {
        self.config.air_resistance = air_resistance;
        self.state.environment.air_resistance = air_resistance;
    }

    pub fn set_ground_collision(&mut self, enabled: bool) {
        self.config.ground_collision = enabled;
        self.state.environment.ground_collision = enabled;
    }

    pub fn set_wind_enabled(&mut self, enabled: bool) {
        self.config.wind.enabled = enabled;
        self.state.environment.wind.enabled = enabled;
    }

    pub fn set_wind_strength(&mut self, strength: Scalar) {
        self.config.wind.strength = strength;
        self.state.environment.wind.strength = strength;
    }

    /// Sets the wind direction. It need not be normalized; a zero vector
    /// disables the wind force without clearing the enable flag.
    pub fn set_wind_direction(&mut self, direction: Vec3) {
        self.config.wind.direction = direction.to_array();
        self.state.environment.wind.direction = direction;
    }

    pub fn set_wind_x(&mut self, x: Scalar) {
        let mut direction = self.state.environment.wind.direction;
        direction.x = x;
        self.set_wind_direction(direction);
    }

    pub fn set_wind_y(&mut self, y: Scalar) {
        let mut direction = self.state.environment.wind.direction;
        direction.y = y;
        self.set_wind_direction(direction);
    }

    pub fn set_wind_z(&mut self, z: Scalar) {
        let mut direction = self.state.environment.wind.direction;
        direction.z = z;
        self.set_wind_direction(direction);
    }

    // ─── Integration settings ─────────────────────────────────

    pub fn set_integrator(&mut self, integrator: Integrator) {
        self.config.integrator = integrator;
        tracing::debug!(%integrator, "integrator changed");
    }

    /// Selects the integrator by name (`"rk4"`, `"Runge Kutta"`, `"euler"`, ...).
    pub fn set_integrator_by_name(&mut self, name: &str) -> WeaveResult<()> {
        let integrator = name.parse()?;
        self.set_integrator(integrator);
        Ok(())
    }

    pub fn set_adaptive_step_size(&mut self, enabled: bool) {
        self.config.adaptive_step_size = enabled;
    }

    pub fn set_error_threshold(&mut self, threshold: Scalar) {
        self.config.error_threshold = threshold;
    }

    /// Fixed sub-steps per frame without adaptive stepping. Clamped to at least 1.
    pub fn set_step_divisor(&mut self, divisor: u32) {
        self.config.step_divisor = divisor.max(1);
    }
}
