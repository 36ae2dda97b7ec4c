//! Physical constants and simulation defaults.
//!
//! These are the starting values of a freshly constructed simulator.

use crate::Scalar;

/// Vertical gravitational acceleration (m/s²). Negative points down.
pub const GRAVITY: Scalar = -9.81;

/// Quadratic air-drag coefficient.
pub const AIR_RESISTANCE: Scalar = 5.0;

/// Mass of every particle.
pub const MASS: Scalar = 100.0;

/// Spring constant shared by structural, shear and flex springs.
pub const SPRING_CONSTANT: Scalar = 15_000.0;

/// Rest distance between neighbouring grid particles.
pub const PARTICLE_DISTANCE: Scalar = 10.0;

/// Particles per grid side.
pub const GRID_SIZE: usize = 20;

/// Fixed sub-steps per frame when adaptive stepping is off.
pub const STEP_DIVISOR: u32 = 10;

/// Target local error for adaptive step-size control.
pub const ERROR_THRESHOLD: Scalar = 0.05;

/// Magnitude of the uniform wind force.
pub const WIND_STRENGTH: Scalar = 400.0;

/// Wind direction (unnormalized).
pub const WIND_DIRECTION: [Scalar; 3] = [0.0, 0.0, 1.0];

/// Height of the ground plane (Y coordinate).
pub const GROUND_HEIGHT: Scalar = 0.0;
