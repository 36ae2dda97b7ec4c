//! Fixed-order integrators, one sub-step at a time.
//!
//! Every integrator advances a [`SimulationState`] by step size `h` in place
//! and declares the error order used by the adaptive step-size controller:
//!
//! ```text
//! h_next = delta * (threshold / error)^(1 / error_order)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weave_types::{Scalar, WeaveError};

use crate::state::SimulationState;

/// Stage weights of the Runge-Kutta combination, applied to k1..k4.
///
/// Not the textbook `1/6, 1/3, 1/3, 1/6`: these sum to 3/2.
pub const RUNGE_KUTTA_WEIGHTS: [Scalar; 4] = [1.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0];

/// Selectable one-sub-step integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Integrator {
    /// Four-stage Runge-Kutta. Error order 5.
    #[default]
    #[serde(rename = "rk4", alias = "runge_kutta4", alias = "runge_kutta")]
    RungeKutta4,
    /// Explicit (forward) Euler. Error order 2.
    #[serde(rename = "euler")]
    Euler,
}

impl Integrator {
    /// Returns all integrators.
    pub fn all() -> &'static [Integrator] {
        &[Integrator::RungeKutta4, Integrator::Euler]
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Integrator::RungeKutta4 => "Runge Kutta",
            Integrator::Euler => "Euler",
        }
    }

    /// Exponent `p` of the adaptive step formula.
    pub fn error_order(&self) -> Scalar {
        match self {
            Integrator::RungeKutta4 => 5.0,
            Integrator::Euler => 2.0,
        }
    }

    /// Advances `state` by one sub-step of size `h`.
    pub fn step(&self, state: &mut SimulationState, h: Scalar) {
        match self {
            Integrator::RungeKutta4 => runge_kutta4(state, h),
            Integrator::Euler => euler(state, h),
        }
    }
}

fn runge_kutta4(state: &mut SimulationState, h: Scalar) {
    let k1 = state.compute_derivative(h);

    let mut stage = state.add_derivative(&(&k1 * 0.5));
    let k2 = stage.compute_derivative(h);

    let mut stage = state.add_derivative(&(&k2 * 0.5));
    let k3 = stage.compute_derivative(h);

    let mut stage = state.add_derivative(&k3);
    let k4 = stage.compute_derivative(h);

    let [w1, w2, w3, w4] = RUNGE_KUTTA_WEIGHTS;
    let combined = k1 * w1 + k2 * w2 + k3 * w3 + k4 * w4;
    state.apply_derivative(&combined);
}

fn euler(state: &mut SimulationState, h: Scalar) {
    let k1 = state.compute_derivative(h);
    state.apply_derivative(&k1);
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Integrator {
    type Err = WeaveError;

    /// Accepts `rk4`, `runge kutta`, `runge_kutta4`, `runge-kutta` and
    /// `euler`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "rk4" | "runge_kutta" | "runge_kutta4" => Ok(Integrator::RungeKutta4),
            "euler" => Ok(Integrator::Euler),
            _ => Err(WeaveError::UnknownIntegrator(s.to_string())),
        }
    }
}
