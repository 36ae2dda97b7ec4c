//! Scalar type alias for the simulation.
//!
//! The mass-spring core runs on the CPU only, so it uses double precision
//! throughout. Stiff springs (k = 15000 against m = 100) lose too much
//! accuracy in `f32` for the adaptive error estimate to be meaningful.

/// The floating-point type used throughout the simulation.
pub type Scalar = f64;
