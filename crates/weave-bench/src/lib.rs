//! # weave-bench
//!
//! Benchmark suite for the cloth simulator.
//!
//! Provides canned cloth scenarios, a runner that drives
//! [`weave_solver::ClothSimulator`] frame by frame while emitting telemetry,
//! and CSV export of the collected metrics for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
