//! Integration tests for weave-telemetry.

use weave_telemetry::bus::EventBus;
use weave_telemetry::events::{EventKind, SimulationEvent};
use weave_telemetry::sinks::{EventSink, TracingSink, VecSink};

fn frame_begin(frame: u64) -> SimulationEvent {
    SimulationEvent::new(frame, EventKind::FrameBegin { delta_time: 1.0 / 60.0 })
}

fn energy() -> EventKind {
    EventKind::Energy {
        kinetic: 1.0,
        potential: 2.0,
        elastic: 3.0,
    }
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn frame_is_delivered_on_end_frame() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.begin_frame(1.0 / 60.0);
    bus.record(energy());
    assert!(sink.is_empty(), "nothing is delivered mid-frame");
    assert_eq!(bus.pending_len(), 2);

    bus.end_frame(0.001, 10);
    assert_eq!(bus.pending_len(), 0);

    let events = sink.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0], frame_begin(0));
    assert_eq!(events[1].kind.label(), "energy");
    assert_eq!(
        events[2].kind,
        EventKind::FrameEnd {
            wall_time: 0.001,
            substeps_taken: 10
        }
    );
    assert!(events.iter().all(|e| e.frame == 0));
}

#[test]
fn frame_numbers_advance() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    for _ in 0..3 {
        bus.begin_frame(1.0 / 60.0);
        bus.end_frame(0.0, 1);
    }
    assert_eq!(bus.frame(), 3);
    let frames: Vec<u64> = sink
        .events()
        .iter()
        .filter(|e| e.kind.label() == "frame_begin")
        .map(|e| e.frame)
        .collect();
    assert_eq!(frames, vec![0, 1, 2]);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    assert!(!bus.is_enabled());

    bus.begin_frame(0.016);
    bus.end_frame(0.0, 1);
    assert!(sink.is_empty());
    assert_eq!(bus.frame(), 1);

    bus.set_enabled(true);
    bus.begin_frame(0.016);
    bus.end_frame(0.0, 1);
    assert_eq!(sink.len(), 2);
    assert!(sink.events().iter().all(|e| e.frame == 1));
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::default();
    let a = VecSink::new();
    let b = VecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    assert_eq!(bus.sink_count(), 2);

    bus.begin_frame(0.016);
    bus.record(energy());
    bus.end_frame(0.0, 4);

    assert_eq!(a.len(), 3);
    assert_eq!(a.events(), b.events());
}

#[test]
fn finalize_delivers_unfinished_frame() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.begin_frame(1.0 / 60.0);
    bus.finalize();
    assert_eq!(sink.events(), vec![frame_begin(0)]);

    bus.finalize();
    assert_eq!(sink.len(), 1, "finalize does not redeliver");
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn sink_names() {
    assert_eq!(VecSink::new().name(), "vec_sink");
    assert_eq!(TracingSink::default().name(), "tracing_sink");
    assert_eq!(TracingSink::new(tracing::Level::INFO).level(), tracing::Level::INFO);
}

#[test]
fn tracing_sink_accepts_all_events() {
    let mut sink = TracingSink::new(tracing::Level::INFO);
    let kinds = vec![
        EventKind::FrameBegin { delta_time: 0.016 },
        EventKind::StepSizeAdapted {
            h: 0.004,
            error: 0.01,
            substeps: 4,
        },
        EventKind::FrameEnd {
            wall_time: 0.002,
            substeps_taken: 4,
        },
        EventKind::Energy {
            kinetic: 1.0,
            potential: 2.0,
            elastic: 3.0,
        },
        EventKind::Custom {
            label: "note".into(),
            payload: "{}".into(),
        },
    ];
    for kind in kinds {
        sink.handle(&SimulationEvent::new(7, kind));
    }
    sink.finalize();
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::Energy {
            kinetic: 1.0,
            potential: 2.0,
            elastic: 0.5,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn step_size_event() {
    let event = SimulationEvent::new(
        10,
        EventKind::StepSizeAdapted {
            h: 0.002,
            error: 0.04,
            substeps: 8,
        },
    );
    match &event.kind {
        EventKind::StepSizeAdapted { substeps, .. } => assert_eq!(*substeps, 8),
        _ => panic!("wrong event kind"),
    }
    assert_eq!(event.kind.label(), "step_size_adapted");
}

#[test]
fn custom_event_label() {
    let event = SimulationEvent::new(
        0,
        EventKind::Custom {
            label: "pin_released".into(),
            payload: r#"{"index":12}"#.into(),
        },
    );
    assert_eq!(event.kind.label(), "pin_released");
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("pin_released"));
}
