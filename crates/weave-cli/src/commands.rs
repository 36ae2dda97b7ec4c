//! CLI command implementations.

use std::time::Instant;

use weave_bench::metrics::BenchmarkMetrics;
use weave_bench::runner::BenchmarkRunner;
use weave_bench::scenarios::{Scenario, ScenarioKind};
use weave_solver::{ClothSimulator, SimulatorConfig};
use weave_telemetry::{EventBus, EventKind, TracingSink};

/// Run a headless simulation.
pub fn simulate(
    config_path: Option<&str>,
    frames: u32,
    dt: f64,
    integrator: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weave Simulation");
    println!("────────────────");

    if !(dt > 0.0 && dt.is_finite()) {
        return Err(format!("frame duration must be positive, got {dt}").into());
    }

    let config = match config_path {
        Some(path) => {
            println!("Config:      {path}");
            SimulatorConfig::load(path)?
        }
        None => {
            println!("Config:      (defaults)");
            SimulatorConfig::default()
        }
    };

    let mut sim = ClothSimulator::new(config)?;
    if let Some(name) = integrator {
        sim.set_integrator_by_name(name)?;
    }

    println!(
        "Grid:        {0}x{0} ({1} particles, {2} springs)",
        sim.size(),
        sim.particles().len(),
        sim.springs().len()
    );
    println!("Integrator:  {}", sim.integrator());
    println!(
        "Stepping:    {}",
        if sim.config().adaptive_step_size { "adaptive" } else { "fixed" }
    );
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::default()));

    let report_every = (frames / 10).max(1);
    for frame in 0..frames {
        bus.begin_frame(dt);
        let frame_start = Instant::now();
        let report = sim.simulate(dt);
        let wall_time = frame_start.elapsed().as_secs_f64();

        let state = sim.state();
        if let Some(error) = report.error {
            bus.record(EventKind::StepSizeAdapted {
                h: report.h,
                error,
                substeps: report.adaptive_substeps,
            });
        }
        bus.record(EventKind::Energy {
            kinetic: state.kinetic_energy(),
            potential: state.potential_energy(),
            elastic: state.elastic_energy(),
        });
        bus.end_frame(wall_time, report.substeps_taken);

        if frame % report_every == 0 || frame + 1 == frames {
            println!(
                "frame {:>5}  h={:.6}s  substeps={:>4}  KE={:.4e}  min_y={:.4}",
                frame,
                report.h,
                report.substeps_taken,
                state.kinetic_energy(),
                state.min_height(),
            );
        }
    }
    bus.finalize();

    let state = sim.state();
    println!();
    println!("Final energy:");
    println!("  Kinetic:    {:.6e}", state.kinetic_energy());
    println!("  Potential:  {:.6e}", state.potential_energy());
    println!("  Elastic:    {:.6e}", state.elastic_energy());

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weave Benchmark Suite");
    println!("═════════════════════");
    println!();

    let mut bus = EventBus::new();

    let all_metrics = if scenario_name == "all" {
        println!("Running all {} scenarios...", ScenarioKind::all().len());
        BenchmarkRunner::run_all(&mut bus).map_err(|e| format!("Benchmark failed: {e}"))?
    } else {
        let Some(kind) = ScenarioKind::from_name(scenario_name) else {
            let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
            eprintln!("Unknown scenario: {scenario_name}");
            eprintln!("Available: {}, all", available.join(", "));
            return Err("Unknown scenario".into());
        };
        let scenario = Scenario::from_kind(kind);
        println!(
            "Running: {name} ({n}x{n} grid, {frames} frames, {integrator})",
            name = kind.name(),
            n = scenario.config.grid_size,
            frames = scenario.frames,
            integrator = scenario.config.integrator,
        );
        let metrics =
            BenchmarkRunner::run(&scenario, &mut bus).map_err(|e| format!("Benchmark failed: {e}"))?;
        vec![metrics]
    };
    println!();

    for metrics in &all_metrics {
        println!("{}:", metrics.scenario);
        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Avg substeps:  {:.1}", metrics.avg_substeps);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Min height:    {:.4}", metrics.min_height);
        println!();
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a config file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weave Validator");
    println!("───────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err("Unsupported file format. Use .toml (config).".into());
    }

    println!("Validating config: {path}");
    let config = SimulatorConfig::load(path)?;
    println!(
        "✅ Config is valid ({0}x{0} grid, {1}, {2} stepping).",
        config.grid_size,
        config.integrator,
        if config.adaptive_step_size { "adaptive" } else { "fixed" }
    );

    Ok(())
}

/// Print a configuration preset as TOML.
pub fn config(preset: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = match preset {
        "default" => SimulatorConfig::default(),
        "fast" => SimulatorConfig::fast(),
        "high_accuracy" => SimulatorConfig::high_accuracy(),
        other => return Err(format!("Unknown preset: {other}. Available: default, fast, high_accuracy").into()),
    };
    print!("{}", config.to_toml_string()?);
    Ok(())
}
