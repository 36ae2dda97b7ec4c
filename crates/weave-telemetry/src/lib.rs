//! # weave-telemetry
//!
//! Frame-scoped event bus for simulation telemetry. The simulation driver
//! records structured per-frame events (frame timing, adapted step sizes,
//! energy) that pluggable sinks consume a frame at a time: an in-memory log
//! for inspection, or `tracing` output.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
