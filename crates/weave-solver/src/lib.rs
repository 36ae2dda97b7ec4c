//! # weave-solver
//!
//! Force evaluation, time integration, and adaptive step-size control
//! for mass-spring cloth.
//!
//! ## Key Types
//!
//! - [`SimulationState`] — Particle snapshot sharing one spring list; computes
//!   forces/derivatives and applies them with ground clamping
//! - [`DerivationState`] — Per-particle position/velocity deltas
//! - [`Integrator`] — RK4 or explicit Euler, each with its error order
//! - [`ClothSimulator`] — Grid owner and per-frame adaptive stepping driver
//! - [`SimulatorConfig`] — Serializable configuration with validation

pub mod adaptive;
pub mod config;
pub mod derivation;
pub mod environment;
pub mod integrator;
pub mod simulator;
pub mod state;

pub use adaptive::{estimate_step, StepEstimate};
pub use config::{SimulatorConfig, WindConfig};
pub use derivation::DerivationState;
pub use environment::{Environment, Wind};
pub use integrator::Integrator;
pub use simulator::{ClothSimulator, FrameReport};
pub use state::SimulationState;
