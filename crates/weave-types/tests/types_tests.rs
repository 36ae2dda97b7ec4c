//! Integration tests for weave-types.

use weave_types::constants;
use weave_types::WeaveError;

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WeaveError::InvalidGrid("grid must be at least 2x2, got 1".into());
    assert!(err.to_string().contains("at least 2x2"));
}

#[test]
fn unknown_integrator_display() {
    let err = WeaveError::UnknownIntegrator("verlet".into());
    let msg = err.to_string();
    assert!(msg.contains("verlet"));
    assert!(msg.contains("rk4"));
}

#[test]
fn io_error_converts() {
    fn open() -> weave_types::WeaveResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "cloth.toml"))?;
        Ok(())
    }
    let err = open().unwrap_err();
    assert!(matches!(err, WeaveError::Io(_)));
    assert!(err.to_string().contains("cloth.toml"));
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn gravity_points_down() {
    assert!(constants::GRAVITY < 0.0);
}

#[test]
fn defaults_are_positive() {
    assert!(constants::MASS > 0.0);
    assert!(constants::SPRING_CONSTANT > 0.0);
    assert!(constants::PARTICLE_DISTANCE > 0.0);
    assert!(constants::ERROR_THRESHOLD > 0.0);
    assert!(constants::STEP_DIVISOR >= 1);
    assert!(constants::GRID_SIZE >= 2);
}
