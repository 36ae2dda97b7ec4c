//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    pub particle_count: usize,
    pub spring_count: usize,
    /// Number of frames executed.
    pub frames: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    /// Minimum frame time.
    pub min_frame_time: f64,
    /// Maximum frame time.
    pub max_frame_time: f64,
    /// Average integrator sub-steps per frame.
    pub avg_substeps: f64,
    /// Final kinetic energy.
    pub final_kinetic_energy: f64,
    /// Maximum particle displacement from its rest position.
    pub max_displacement: f64,
    /// Lowest particle height at the end of the run.
    pub min_height: f64,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,particle_count,spring_count,frames,total_wall_time_s,avg_frame_ms,min_frame_ms,max_frame_ms,avg_substeps,final_ke,max_displacement,min_height".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.2},{:.6e},{:.6},{:.6}",
            self.scenario,
            self.particle_count,
            self.spring_count,
            self.frames,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.min_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.avg_substeps,
            self.final_kinetic_energy,
            self.max_displacement,
            self.min_height,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
