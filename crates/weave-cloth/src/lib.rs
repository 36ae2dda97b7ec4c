//! # weave-cloth
//!
//! Data model of a mass-spring cloth: point masses on a square grid,
//! connected by three families of springs.
//!
//! ## Key Types
//!
//! - [`Particle`] — A point mass with position, velocity, force and a pin flag.
//! - [`Spring`] — A Hooke spring between two particle indices.
//! - [`SpringKind`] — Structural, shear or flex; used for bulk constant updates.
//! - [`ClothGrid`] — Grid geometry and procedural spring generation.

pub mod grid;
pub mod particle;
pub mod spring;

pub use grid::ClothGrid;
pub use particle::Particle;
pub use spring::{Spring, SpringConstants, SpringKind};
