//! Per-particle time derivatives produced by one force evaluation.
//!
//! A [`DerivationState`] is the vector an integrator works with: it supports
//! scaling by a scalar and element-wise addition, so Runge-Kutta stages can
//! be combined with ordinary arithmetic:
//!
//! ```
//! use weave_math::Vec3;
//! use weave_solver::DerivationState;
//!
//! let k1 = DerivationState::from_deltas(vec![Vec3::X], vec![Vec3::Y]);
//! let k2 = DerivationState::from_deltas(vec![Vec3::Z], vec![Vec3::ZERO]);
//! let combined = &k1 * 0.5 + k2;
//! assert_eq!(combined.dposition_dt()[0], Vec3::new(0.5, 0.0, 1.0));
//! ```

use std::ops::{Add, AddAssign, Mul, MulAssign};

use weave_cloth::Particle;
use weave_math::Vec3;
use weave_types::Scalar;

/// Position and velocity deltas, index-aligned with the particle array.
///
/// The deltas are already multiplied by the step size `h`, so applying a
/// derivation is a plain addition.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivationState {
    dposition_dt: Vec<Vec3>,
    dvelocity_dt: Vec<Vec3>,
}

impl DerivationState {
    /// All-zero derivation for `len` particles.
    pub fn zeros(len: usize) -> Self {
        Self {
            dposition_dt: vec![Vec3::ZERO; len],
            dvelocity_dt: vec![Vec3::ZERO; len],
        }
    }

    /// Builds a derivation from explicit deltas.
    ///
    /// # Panics
    /// If the two sequences differ in length.
    pub fn from_deltas(dposition_dt: Vec<Vec3>, dvelocity_dt: Vec<Vec3>) -> Self {
        assert_eq!(
            dposition_dt.len(),
            dvelocity_dt.len(),
            "position and velocity deltas must be index-aligned"
        );
        Self {
            dposition_dt,
            dvelocity_dt,
        }
    }

    /// Derives `dp = v·h` and `dv = (F/m)·h` for every particle.
    ///
    /// Fixed particles and particles without positive mass get zero deltas.
    pub fn from_particles(particles: &[Particle], h: Scalar) -> Self {
        let (dposition_dt, dvelocity_dt) = particles
            .iter()
            .map(|p| {
                if p.fixed || p.mass <= 0.0 {
                    (Vec3::ZERO, Vec3::ZERO)
                } else {
                    (p.velocity * h, p.force * (h / p.mass))
                }
            })
            .unzip();
        Self {
            dposition_dt,
            dvelocity_dt,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dposition_dt.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dposition_dt.is_empty()
    }

    /// Position deltas.
    #[inline]
    pub fn dposition_dt(&self) -> &[Vec3] {
        &self.dposition_dt
    }

    /// Velocity deltas.
    #[inline]
    pub fn dvelocity_dt(&self) -> &[Vec3] {
        &self.dvelocity_dt
    }

    /// `(dp, dv)` pairs per particle.
    pub fn iter(&self) -> impl Iterator<Item = (&Vec3, &Vec3)> {
        self.dposition_dt.iter().zip(&self.dvelocity_dt)
    }
}

impl MulAssign<Scalar> for DerivationState {
    fn mul_assign(&mut self, scalar: Scalar) {
        for (dp, dv) in self.dposition_dt.iter_mut().zip(&mut self.dvelocity_dt) {
            *dp *= scalar;
            *dv *= scalar;
        }
    }
}

impl Mul<Scalar> for DerivationState {
    type Output = DerivationState;

    fn mul(mut self, scalar: Scalar) -> DerivationState {
        self *= scalar;
        self
    }
}

impl Mul<Scalar> for &DerivationState {
    type Output = DerivationState;

    fn mul(self, scalar: Scalar) -> DerivationState {
        self.clone() * scalar
    }
}

impl AddAssign<&DerivationState> for DerivationState {
    /// Element-wise addition. Both derivations must cover the same particles.
    fn add_assign(&mut self, other: &DerivationState) {
        debug_assert_eq!(self.len(), other.len());
        for (dp, other_dp) in self.dposition_dt.iter_mut().zip(&other.dposition_dt) {
            *dp += *other_dp;
        }
        for (dv, other_dv) in self.dvelocity_dt.iter_mut().zip(&other.dvelocity_dt) {
            *dv += *other_dv;
        }
    }
}

impl Add for DerivationState {
    type Output = DerivationState;

    fn add(mut self, other: DerivationState) -> DerivationState {
        self += &other;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_yields_zero_velocity_delta() {
        let mut p = Particle::new(0.0, Vec3::ZERO);
        p.force = Vec3::ONE;
        let d = DerivationState::from_particles(&[p], 0.1);
        assert_eq!(d.dvelocity_dt()[0], Vec3::ZERO);
    }

    #[test]
    fn scale_in_place() {
        let mut d = DerivationState::from_deltas(vec![Vec3::ONE], vec![Vec3::X]);
        d *= 3.0;
        assert_eq!(d.dposition_dt()[0], Vec3::splat(3.0));
        assert_eq!(d.dvelocity_dt()[0], Vec3::new(3.0, 0.0, 0.0));
    }
}
