//! # weave-types
//!
//! Shared scalar type, error type, and physical defaults
//! for the weave cloth simulation engine.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other weave crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{WeaveError, WeaveResult};
pub use scalar::Scalar;
