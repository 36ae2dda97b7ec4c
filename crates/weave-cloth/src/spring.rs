//! Hooke springs between particle pairs.

use serde::{Deserialize, Serialize};
use weave_math::Vec3;
use weave_types::{constants, Scalar};

/// Topological class of a spring.
///
/// The kind only matters for bulk stiffness updates; force evaluation
/// treats every spring identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringKind {
    /// Horizontal and vertical nearest neighbours. Resists stretching.
    Structural,
    /// Diagonal neighbours. Resists shearing.
    Shear,
    /// Skip-one neighbours along both axes. Resists bending.
    Flex,
}

impl SpringKind {
    /// Returns all spring kinds in generation order.
    pub fn all() -> &'static [SpringKind] {
        &[SpringKind::Structural, SpringKind::Shear, SpringKind::Flex]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SpringKind::Structural => "structural",
            SpringKind::Shear => "shear",
            SpringKind::Flex => "flex",
        }
    }
}

/// Spring constant per spring kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConstants {
    pub structural: Scalar,
    pub shear: Scalar,
    pub flex: Scalar,
}

impl SpringConstants {
    /// The same constant for every kind.
    pub fn uniform(k: Scalar) -> Self {
        Self {
            structural: k,
            shear: k,
            flex: k,
        }
    }

    pub fn get(&self, kind: SpringKind) -> Scalar {
        match kind {
            SpringKind::Structural => self.structural,
            SpringKind::Shear => self.shear,
            SpringKind::Flex => self.flex,
        }
    }

    pub fn set(&mut self, kind: SpringKind, k: Scalar) {
        match kind {
            SpringKind::Structural => self.structural = k,
            SpringKind::Shear => self.shear = k,
            SpringKind::Flex => self.flex = k,
        }
    }
}

impl Default for SpringConstants {
    fn default() -> Self {
        Self::uniform(constants::SPRING_CONSTANT)
    }
}

/// A spring between particles `from` and `to`.
///
/// Endpoints, rest length and kind are fixed at construction.
/// Only the spring constant may change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    from: usize,
    to: usize,
    spring_constant: Scalar,
    rest_length: Scalar,
    kind: SpringKind,
}

impl Spring {
    pub fn new(
        from: usize,
        to: usize,
        spring_constant: Scalar,
        rest_length: Scalar,
        kind: SpringKind,
    ) -> Self {
        Self {
            from,
            to,
            spring_constant,
            rest_length,
            kind,
        }
    }

    #[inline]
    pub fn from_index(&self) -> usize {
        self.from
    }

    #[inline]
    pub fn to_index(&self) -> usize {
        self.to
    }

    #[inline]
    pub fn spring_constant(&self) -> Scalar {
        self.spring_constant
    }

    #[inline]
    pub fn rest_length(&self) -> Scalar {
        self.rest_length
    }

    #[inline]
    pub fn kind(&self) -> SpringKind {
        self.kind
    }

    pub fn set_spring_constant(&mut self, spring_constant: Scalar) {
        self.spring_constant = spring_constant;
    }

    /// Hooke force acting on the `from` endpoint.
    ///
    /// `-k (|d| - rest) * d/|d|` with `d = from_pos - to_pos`. A stretched
    /// spring pulls `from` toward `to`, a compressed one pushes it away. The
    /// `to` endpoint receives the negation. Coincident endpoints have no
    /// direction and yield zero.
    pub fn force(&self, from_pos: Vec3, to_pos: Vec3) -> Vec3 {
        let difference = from_pos - to_pos;
        let base_force = -self.spring_constant * (difference.length() - self.rest_length);
        difference.normalize_or_zero() * base_force
    }

    /// Elastic potential ½ k (|d| - rest)².
    pub fn potential_energy(&self, from_pos: Vec3, to_pos: Vec3) -> Scalar {
        let stretch = from_pos.distance(to_pos) - self.rest_length;
        0.5 * self.spring_constant * stretch * stretch
    }
}
