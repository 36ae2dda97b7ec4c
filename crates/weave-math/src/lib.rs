//! # weave-math
//!
//! Vector primitives for the weave simulation engine.
//!
//! Re-exports the double-precision `glam` types, with `DVec3` as [`Vec3`].
//! Directions that can legitimately be zero (a particle at rest, coincident
//! spring endpoints, a `(0, 0, 0)` wind) go through
//! [`DVec3::normalize_or_zero`], so no NaN enters the particle state.

// Re-export glam double-precision types as the canonical math types for weave.
pub use glam::DVec3;

/// Three-component vector used for positions, velocities and forces.
pub type Vec3 = DVec3;
