//! Frame-scoped event bus.
//!
//! The simulation driver brackets every rendered frame with
//! [`EventBus::begin_frame`] and [`EventBus::end_frame`]. Events recorded in
//! between are tagged with the frame number and held back; `end_frame`
//! hands the complete frame to every sink in one batch, so a sink never
//! observes half a frame.

use crate::events::{EventKind, SimulationEvent};
use crate::sinks::EventSink;

pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
    /// Events of the open frame.
    pending: Vec<SimulationEvent>,
    /// Number of the open (or next) frame.
    frame: u64,
    enabled: bool,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            pending: Vec::new(),
            frame: 0,
            enabled: true,
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        tracing::debug!(sink = sink.name(), "telemetry sink registered");
        self.sinks.push(sink);
    }

    /// Disabled bus drops events silently; frame numbers still advance.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Number of the frame events are currently tagged with.
    ///
    /// Counts on across runs that share a bus.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Events recorded since the last `end_frame`.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Opens a frame covering `delta_time` seconds of simulation.
    pub fn begin_frame(&mut self, delta_time: f64) {
        self.record(EventKind::FrameBegin { delta_time });
    }

    /// Records an event in the open frame.
    pub fn record(&mut self, kind: EventKind) {
        if self.enabled {
            self.pending.push(SimulationEvent::new(self.frame, kind));
        }
    }

    /// Closes the frame, delivers its events to every sink, and moves on
    /// to the next frame number.
    pub fn end_frame(&mut self, wall_time: f64, substeps_taken: u32) {
        self.record(EventKind::FrameEnd {
            wall_time,
            substeps_taken,
        });
        self.dispatch();
        self.frame += 1;
    }

    /// Delivers any events of an unfinished frame, then finalizes every sink.
    pub fn finalize(&mut self) {
        self.dispatch();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    fn dispatch(&mut self) {
        for event in self.pending.drain(..) {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
