//! Benchmark scenarios: simulator configuration plus frame schedule.
//!
//! Four canonical scenarios for regression testing:
//! 1. **Hanging cloth**: both top corners pinned, drapes under gravity (adaptive RK4)
//! 2. **Windy cloth**: hanging cloth with wind blowing across it
//! 3. **Euler cloth**: hanging cloth with the fast Euler preset
//! 4. **Free fall**: nothing pinned, the cloth drops onto the floor

use serde::{Deserialize, Serialize};

use weave_solver::SimulatorConfig;
use weave_types::Scalar;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    HangingCloth,
    WindyCloth,
    EulerCloth,
    FreeFall,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingCloth,
            ScenarioKind::WindyCloth,
            ScenarioKind::EulerCloth,
            ScenarioKind::FreeFall,
        ]
    }

    /// Returns the snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingCloth => "hanging_cloth",
            ScenarioKind::WindyCloth => "windy_cloth",
            ScenarioKind::EulerCloth => "euler_cloth",
            ScenarioKind::FreeFall => "free_fall",
        }
    }

    /// Looks a scenario up by its name.
    pub fn from_name(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Simulator configuration.
    pub config: SimulatorConfig,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Frame duration (seconds).
    pub delta_time: Scalar,
}

impl Scenario {
    /// A 20×20 cloth pinned at both top corners, hanging under gravity for
    /// 2 seconds at 60fps with adaptive RK4.
    pub fn hanging_cloth() -> Self {
        Self {
            kind: ScenarioKind::HangingCloth,
            config: SimulatorConfig::default(),
            frames: 120,
            delta_time: 1.0 / 60.0,
        }
    }

    /// The hanging cloth with wind blowing diagonally through it.
    pub fn windy_cloth() -> Self {
        let mut config = SimulatorConfig::default();
        config.wind.enabled = true;
        config.wind.direction = [1.0, 0.0, 1.0];
        Self {
            kind: ScenarioKind::WindyCloth,
            config,
            frames: 120,
            delta_time: 1.0 / 60.0,
        }
    }

    /// The hanging cloth integrated with fixed-step Euler.
    pub fn euler_cloth() -> Self {
        Self {
            kind: ScenarioKind::EulerCloth,
            config: SimulatorConfig::fast(),
            frames: 120,
            delta_time: 1.0 / 60.0,
        }
    }

    /// An unpinned cloth falling onto the floor, 3 seconds with fixed steps.
    pub fn free_fall() -> Self {
        Self {
            kind: ScenarioKind::FreeFall,
            config: SimulatorConfig {
                fix_left_corner: false,
                fix_right_corner: false,
                adaptive_step_size: false,
                ..Default::default()
            },
            frames: 180,
            delta_time: 1.0 / 60.0,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingCloth => Self::hanging_cloth(),
            ScenarioKind::WindyCloth => Self::windy_cloth(),
            ScenarioKind::EulerCloth => Self::euler_cloth(),
            ScenarioKind::FreeFall => Self::free_fall(),
        }
    }

    /// Overrides the grid size.
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.config.grid_size = grid_size;
        self
    }

    /// Overrides the frame count.
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    /// Simulated time covered by the whole run (seconds).
    pub fn duration(&self) -> Scalar {
        self.delta_time * Scalar::from(self.frames)
    }
}
