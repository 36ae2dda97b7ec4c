//! Step-doubling error estimate and adaptive sub-step size.
//!
//! One full step of size `delta` is compared against two half steps. The
//! distance between the two results estimates the local error, from which
//! the sub-step size for the frame follows:
//!
//! ```text
//! error = | full(delta) - half(half(delta/2)) |
//! h     = delta * (threshold / error)^(1 / p)
//! ```

use weave_types::Scalar;

use crate::integrator::Integrator;
use crate::state::SimulationState;

/// Result of one adaptive estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEstimate {
    /// Sub-step size for this frame.
    pub h: Scalar,
    /// Distance between the full-step and two-half-step results.
    pub error: Scalar,
    /// `round(delta / h)`, at least 1. Display only.
    pub substeps: u32,
}

/// Estimates the sub-step size for advancing `state` by `delta`.
///
/// Both probes run on clones; `state` itself is not touched.
pub fn estimate_step(
    state: &SimulationState,
    integrator: Integrator,
    delta: Scalar,
    threshold: Scalar,
) -> StepEstimate {
    let mut full = state.clone();
    integrator.step(&mut full, delta);

    let mut halves = state.clone();
    integrator.step(&mut halves, delta / 2.0);
    integrator.step(&mut halves, delta / 2.0);

    let error = full.distance(&halves);
    let h = adapted_step_size(delta, threshold, error, integrator.error_order());

    StepEstimate {
        h,
        error,
        substeps: substep_count(delta, h),
    }
}

/// `delta * (threshold / error)^(1/order)`.
///
/// An error of zero (or NaN) gives no usable ratio; the step then falls back
/// to `delta`, as does any non-positive result.
pub fn adapted_step_size(delta: Scalar, threshold: Scalar, error: Scalar, order: Scalar) -> Scalar {
    let h = delta * (threshold / error).powf(1.0 / order);
    if h.is_finite() && h > 0.0 {
        h
    } else {
        delta
    }
}

/// Number of sub-steps of size `h` that cover `delta`, for display.
pub fn substep_count(delta: Scalar, h: Scalar) -> u32 {
    let ratio = delta / h;
    if ratio < 1.0 || !ratio.is_finite() {
        1
    } else {
        ratio.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_error_falls_back_to_delta() {
        assert_eq!(adapted_step_size(0.016, 0.05, 0.0, 5.0), 0.016);
    }

    #[test]
    fn nan_error_falls_back_to_delta() {
        assert_eq!(adapted_step_size(0.016, 0.05, f64::NAN, 2.0), 0.016);
    }

    #[test]
    fn error_at_threshold_keeps_delta() {
        let h = adapted_step_size(0.02, 0.05, 0.05, 5.0);
        assert!((h - 0.02).abs() < 1e-15);
    }

    #[test]
    fn larger_error_shrinks_step() {
        // (0.05 / 0.2)^(1/2) = 0.5
        let h = adapted_step_size(0.02, 0.05, 0.2, 2.0);
        assert!((h - 0.01).abs() < 1e-12);
    }

    #[test]
    fn substeps_round_and_floor_at_one() {
        assert_eq!(substep_count(1.0, 2.0), 1);
        assert_eq!(substep_count(1.0, 0.3), 3);
        assert_eq!(substep_count(1.0, 0.4), 3);
        assert_eq!(substep_count(1.0, 1.0), 1);
    }
}
