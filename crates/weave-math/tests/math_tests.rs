//! Integration tests for weave-math.

use weave_math::{DVec3, Vec3};

// ─── Direction Tests ──────────────────────────────────────────

#[test]
fn normalize_unit_length() {
    let n = Vec3::new(3.0, 4.0, 0.0).normalize_or_zero();
    assert!((n.length() - 1.0).abs() < 1e-12);
    assert!((n.x - 0.6).abs() < 1e-12);
    assert!((n.y - 0.8).abs() < 1e-12);
}

#[test]
fn degenerate_directions_normalize_to_zero() {
    assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    assert_eq!(Vec3::new(f64::NAN, 0.0, 1.0).normalize_or_zero(), Vec3::ZERO);
    assert_eq!(Vec3::splat(f64::INFINITY).normalize_or_zero(), Vec3::ZERO);
}

#[test]
fn normalize_preserves_direction() {
    let v = Vec3::new(-2.0, 0.0, 0.0);
    assert_eq!(v.normalize_or_zero(), Vec3::NEG_X);
}

#[test]
fn vec3_is_double_precision() {
    let v: DVec3 = Vec3::new(1.0e-300, 0.0, 0.0);
    assert!(v.x > 0.0);
    assert_eq!(std::mem::size_of::<Vec3>(), 3 * std::mem::size_of::<f64>());
}
