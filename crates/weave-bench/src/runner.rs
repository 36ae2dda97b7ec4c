//! Benchmark runner: drives a simulator through a scenario and collects metrics.

use std::time::Instant;

use weave_solver::ClothSimulator;
use weave_telemetry::{EventBus, EventKind};
use weave_types::WeaveResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario, recording one telemetry frame on `bus` per
    /// simulated frame.
    pub fn run(scenario: &Scenario, bus: &mut EventBus) -> WeaveResult<BenchmarkMetrics> {
        let mut sim = ClothSimulator::new(scenario.config.clone())?;
        let rest_positions = sim.state().positions();

        tracing::info!(
            scenario = scenario.kind.name(),
            frames = scenario.frames,
            particles = sim.particles().len(),
            "benchmark started"
        );

        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut total_substeps: u64 = 0;

        let total_start = Instant::now();

        for _ in 0..scenario.frames {
            bus.begin_frame(scenario.delta_time);

            let frame_start = Instant::now();
            let report = sim.simulate(scenario.delta_time);
            let wall_time = frame_start.elapsed().as_secs_f64();

            if let Some(error) = report.error {
                bus.record(EventKind::StepSizeAdapted {
                    h: report.h,
                    error,
                    substeps: report.adaptive_substeps,
                });
            }
            let state = sim.state();
            bus.record(EventKind::Energy {
                kinetic: state.kinetic_energy(),
                potential: state.potential_energy(),
                elastic: state.elastic_energy(),
            });
            bus.end_frame(wall_time, report.substeps_taken);

            frame_times.push(wall_time);
            total_substeps += u64::from(report.substeps_taken);
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let state = sim.state();
        let max_displacement = state
            .particles()
            .iter()
            .zip(&rest_positions)
            .map(|(p, rest)| p.position.distance(*rest))
            .fold(0.0, f64::max);

        let (avg_frame, min_frame, avg_substeps) = if frame_times.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let n = frame_times.len() as f64;
            (
                frame_times.iter().sum::<f64>() / n,
                frame_times.iter().copied().fold(f64::MAX, f64::min),
                total_substeps as f64 / n,
            )
        };
        let max_frame = frame_times.iter().copied().fold(0.0, f64::max);

        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            particle_count: state.particle_count(),
            spring_count: state.springs().len(),
            frames: scenario.frames,
            total_wall_time,
            avg_frame_time: avg_frame,
            min_frame_time: min_frame,
            max_frame_time: max_frame,
            avg_substeps,
            final_kinetic_energy: state.kinetic_energy(),
            max_displacement,
            min_height: state.min_height(),
        };

        tracing::info!(
            scenario = scenario.kind.name(),
            total_wall_time,
            avg_substeps,
            "benchmark finished"
        );
        Ok(metrics)
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all(bus: &mut EventBus) -> WeaveResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario, bus)?);
        }
        Ok(results)
    }
}
