//! Integration tests for weave-bench.

use weave_bench::metrics::BenchmarkMetrics;
use weave_bench::runner::BenchmarkRunner;
use weave_bench::scenarios::{Scenario, ScenarioKind};
use weave_solver::Integrator;
use weave_telemetry::{EventBus, EventKind, VecSink};

fn quick(kind: ScenarioKind) -> Scenario {
    Scenario::from_kind(kind).with_grid_size(4).with_frames(3)
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn hanging_cloth_setup() {
    let s = Scenario::hanging_cloth();
    assert_eq!(s.kind, ScenarioKind::HangingCloth);
    assert_eq!(s.config.grid_size, 20);
    assert!(s.config.fix_left_corner && s.config.fix_right_corner);
    assert!(s.config.adaptive_step_size);
    assert!((s.duration() - 2.0).abs() < 1e-9);
}

#[test]
fn windy_cloth_setup() {
    let s = Scenario::windy_cloth();
    assert!(s.config.wind.enabled);
    assert_eq!(s.config.wind.direction, [1.0, 0.0, 1.0]);
}

#[test]
fn euler_cloth_setup() {
    let s = Scenario::euler_cloth();
    assert_eq!(s.config.integrator, Integrator::Euler);
    assert!(!s.config.adaptive_step_size);
}

#[test]
fn free_fall_setup() {
    let s = Scenario::free_fall();
    assert!(!s.config.fix_left_corner);
    assert!(!s.config.fix_right_corner);
    assert!(s.config.ground_collision);
}

#[test]
fn all_scenarios_valid() {
    for &kind in ScenarioKind::all() {
        let s = Scenario::from_kind(kind);
        assert_eq!(s.kind, kind);
        assert!(s.frames > 0);
        assert!(s.delta_time > 0.0);
        assert!(s.config.validate().is_ok(), "{} invalid", kind.name());
    }
}

#[test]
fn scenario_names_round_trip() {
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.name()));
    }
    assert_eq!(ScenarioKind::from_name("sphere_drape"), None);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_hanging_cloth() {
    let mut bus = EventBus::new();
    let metrics = BenchmarkRunner::run(&quick(ScenarioKind::HangingCloth), &mut bus).unwrap();
    assert_eq!(metrics.scenario, "hanging_cloth");
    assert_eq!(metrics.particle_count, 16);
    assert_eq!(metrics.spring_count, 58);
    assert_eq!(metrics.frames, 3);
    assert!(metrics.total_wall_time >= 0.0);
    assert!(metrics.min_frame_time <= metrics.max_frame_time);
    assert!(metrics.avg_substeps >= 1.0);
    assert!(metrics.final_kinetic_energy > 0.0);
    assert!(metrics.max_displacement > 0.0);
    assert!(metrics.min_height > 0.0);
}

#[test]
fn run_euler_uses_step_divisor() {
    let mut bus = EventBus::new();
    let metrics = BenchmarkRunner::run(&quick(ScenarioKind::EulerCloth), &mut bus).unwrap();
    // 10 sub-steps, possibly one more from floating-point accumulation
    assert!(metrics.avg_substeps >= 10.0 && metrics.avg_substeps <= 11.0);
}

#[test]
fn run_emits_frame_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    BenchmarkRunner::run(&quick(ScenarioKind::WindyCloth), &mut bus).unwrap();

    let events = sink.events();
    let count = |label: &str| events.iter().filter(|e| e.kind.label() == label).count();
    assert_eq!(count("frame_begin"), 3);
    assert_eq!(count("frame_end"), 3);
    assert_eq!(count("energy"), 3);
    assert_eq!(count("step_size_adapted"), 3);
    assert_eq!(events.first().map(|e| e.frame), Some(0));
    assert_eq!(events.last().map(|e| e.frame), Some(2));
    assert!(matches!(events[0].kind, EventKind::FrameBegin { .. }));
}

#[test]
fn fixed_stepping_skips_step_size_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    BenchmarkRunner::run(&quick(ScenarioKind::FreeFall), &mut bus).unwrap();
    assert!(sink
        .events()
        .iter()
        .all(|e| !matches!(e.kind, EventKind::StepSizeAdapted { .. })));
}

#[test]
fn invalid_scenario_is_an_error() {
    let mut bus = EventBus::new();
    let scenario = quick(ScenarioKind::HangingCloth).with_grid_size(1);
    assert!(BenchmarkRunner::run(&scenario, &mut bus).is_err());
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn csv_output() {
    let m = BenchmarkMetrics {
        scenario: "test".into(),
        particle_count: 16,
        spring_count: 58,
        frames: 10,
        total_wall_time: 0.5,
        avg_frame_time: 0.05,
        min_frame_time: 0.04,
        max_frame_time: 0.06,
        avg_substeps: 10.0,
        final_kinetic_energy: 0.001,
        max_displacement: 0.1,
        min_height: 12.5,
    };
    let csv = BenchmarkMetrics::to_csv(&[m]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("scenario,"));
    assert!(lines[1].starts_with("test,16,58,10,"));
    assert_eq!(
        lines[0].split(',').count(),
        lines[1].split(',').count()
    );
}

#[test]
fn metrics_serialization() {
    let mut bus = EventBus::new();
    let metrics = BenchmarkRunner::run(&quick(ScenarioKind::EulerCloth), &mut bus).unwrap();
    let json = serde_json::to_string(&metrics).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.scenario, "euler_cloth");
    assert_eq!(recovered.frames, 3);
}

#[test]
fn zero_frame_run_reports_zero_times() {
    let mut bus = EventBus::new();
    let scenario = quick(ScenarioKind::HangingCloth).with_frames(0);
    let metrics = BenchmarkRunner::run(&scenario, &mut bus).unwrap();
    assert_eq!(metrics.frames, 0);
    assert_eq!(metrics.min_frame_time, 0.0);
    assert_eq!(metrics.max_frame_time, 0.0);
    assert_eq!(metrics.avg_frame_time, 0.0);
    assert_eq!(metrics.avg_substeps, 0.0);
    assert_eq!(metrics.max_displacement, 0.0);
}

#[test]
fn shared_bus_numbers_frames_across_runs() {
    let mut bus = EventBus::new();
    BenchmarkRunner::run(&quick(ScenarioKind::EulerCloth), &mut bus).unwrap();
    BenchmarkRunner::run(&quick(ScenarioKind::FreeFall), &mut bus).unwrap();
    assert_eq!(bus.frame(), 6);
    assert_eq!(bus.pending_len(), 0);
}
