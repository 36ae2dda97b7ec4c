//! Simulation event types.
//!
//! Structured events emitted once or a few times per rendered frame.
//! Events are lightweight value types that carry just enough data to be
//! useful for monitoring and benchmarking.

use serde::{Deserialize, Serialize};

/// A simulation event, tagged with the frame it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin {
        /// Simulated time the frame must cover (seconds).
        delta_time: f64,
    },

    /// Adaptive step-size controller picked a sub-step size.
    StepSizeAdapted {
        /// Sub-step size (seconds).
        h: f64,
        /// Step-doubling error estimate.
        error: f64,
        /// Estimated sub-steps per frame.
        substeps: u32,
    },

    /// Frame completed.
    FrameEnd {
        /// Wall-clock time for the frame (seconds).
        wall_time: f64,
        /// Integrator sub-steps executed.
        substeps_taken: u32,
    },

    /// Energy snapshot at the end of a frame.
    Energy {
        /// Kinetic energy (0.5 * m * v^2).
        kinetic: f64,
        /// Gravitational potential energy.
        potential: f64,
        /// Energy stored in springs.
        elastic: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}

impl EventKind {
    /// Short snake_case label of the variant.
    pub fn label(&self) -> &str {
        match self {
            EventKind::FrameBegin { .. } => "frame_begin",
            EventKind::StepSizeAdapted { .. } => "step_size_adapted",
            EventKind::FrameEnd { .. } => "frame_end",
            EventKind::Energy { .. } => "energy",
            EventKind::Custom { label, .. } => label,
        }
    }
}
