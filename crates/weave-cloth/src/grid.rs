//! Square cloth grid: rest geometry and procedural spring generation.
//!
//! Particles are stored row-major, `index = row * size + col`. Row 0 is the
//! lowest row; rows stack upward in +Y, columns run along +X, and the whole
//! sheet lies in the Z = 0 plane:
//!
//! ```text
//!   row N-1:  [N²-N] ... [N²-1]   <- pinned corners (left, right)
//!   ...
//!   row 0:    [0]  [1] ... [N-1]
//! ```

use weave_math::Vec3;
use weave_types::{Scalar, WeaveError, WeaveResult};

use crate::particle::Particle;
use crate::spring::{Spring, SpringConstants, SpringKind};

/// Geometry of an `size × size` particle grid with uniform spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClothGrid {
    size: usize,
    spacing: Scalar,
}

impl ClothGrid {
    /// Creates a grid description.
    ///
    /// # Errors
    /// `InvalidGrid` if `size < 2` or `spacing` is not a positive finite number.
    pub fn new(size: usize, spacing: Scalar) -> WeaveResult<Self> {
        if size < 2 {
            return Err(WeaveError::InvalidGrid(format!(
                "grid must be at least 2x2, got {size}x{size}"
            )));
        }
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(WeaveError::InvalidGrid(format!(
                "particle distance must be positive and finite, got {spacing}"
            )));
        }
        Ok(Self { size, spacing })
    }

    /// Particles per side.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rest distance between neighbouring particles.
    #[inline]
    pub fn spacing(&self) -> Scalar {
        self.spacing
    }

    /// Total particle count, `size²`.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.size * self.size
    }

    /// Flat index of the particle at (`row`, `col`).
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Left end of the top row.
    #[inline]
    pub fn left_corner(&self) -> usize {
        self.size * self.size - self.size
    }

    /// Right end of the top row.
    #[inline]
    pub fn right_corner(&self) -> usize {
        self.size * self.size - 1
    }

    /// Rest position of particle `index`.
    ///
    /// The sheet is centred on X = 0 and starts at height `size * spacing / 2`.
    pub fn rest_position(&self, index: usize) -> Vec3 {
        let row = index / self.size;
        let col = index % self.size;
        let half_extent = self.size as Scalar * self.spacing / 2.0;
        Vec3::new(
            -half_extent + col as Scalar * self.spacing,
            half_extent + row as Scalar * self.spacing,
            0.0,
        )
    }

    /// Generates all particles at rest, free, with uniform `mass`.
    ///
    /// Pinning is applied by the caller.
    pub fn particles(&self, mass: Scalar) -> Vec<Particle> {
        (0..self.particle_count())
            .map(|i| Particle::new(mass, self.rest_position(i)))
            .collect()
    }

    /// Generates the three spring families in order: structural, shear, flex.
    pub fn springs(&self, constants: &SpringConstants) -> Vec<Spring> {
        let mut springs = Vec::with_capacity(self.spring_count());
        springs.extend(self.structural_springs(constants.structural));
        springs.extend(self.shear_springs(constants.shear));
        springs.extend(self.flex_springs(constants.flex));
        springs
    }

    /// Expected spring count over all families.
    pub fn spring_count(&self) -> usize {
        SpringKind::all()
            .iter()
            .map(|&kind| self.spring_count_of(kind))
            .sum()
    }

    /// Expected spring count of one family.
    ///
    /// structural `2N(N-1)`, shear `2(N-1)²`, flex `2N(N-2)`.
    pub fn spring_count_of(&self, kind: SpringKind) -> usize {
        let n = self.size;
        match kind {
            SpringKind::Structural => 2 * n * (n - 1),
            SpringKind::Shear => 2 * (n - 1) * (n - 1),
            SpringKind::Flex => 2 * n * n.saturating_sub(2),
        }
    }

    /// Nearest neighbours along a row, then along a column. Rest length `d`.
    pub fn structural_springs(&self, k: Scalar) -> Vec<Spring> {
        let n = self.size;
        let d = self.spacing;
        let mut springs = Vec::with_capacity(self.spring_count_of(SpringKind::Structural));

        for row in 0..n {
            for col in 0..n - 1 {
                let a = self.index(row, col);
                springs.push(Spring::new(a, a + 1, k, d, SpringKind::Structural));
            }
        }
        for row in 0..n - 1 {
            for col in 0..n {
                let a = self.index(row, col);
                springs.push(Spring::new(a, a + n, k, d, SpringKind::Structural));
            }
        }

        springs
    }

    /// Both diagonals of every grid cell. Rest length `d·√2`.
    pub fn shear_springs(&self, k: Scalar) -> Vec<Spring> {
        let n = self.size;
        let rest = (2.0 * self.spacing * self.spacing).sqrt();
        let mut springs = Vec::with_capacity(self.spring_count_of(SpringKind::Shear));

        for row in 0..n - 1 {
            for col in 0..n - 1 {
                let a = self.index(row, col);
                let b = self.index(row + 1, col + 1);
                springs.push(Spring::new(a, b, k, rest, SpringKind::Shear));
            }
        }
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                let a = self.index(row + 1, col);
                let b = self.index(row, col + 1);
                springs.push(Spring::new(a, b, k, rest, SpringKind::Shear));
            }
        }

        springs
    }

    /// Skip-one neighbours along a row, then along a column. Rest length `2d`.
    ///
    /// Empty for a 2×2 grid.
    pub fn flex_springs(&self, k: Scalar) -> Vec<Spring> {
        let n = self.size;
        let rest = 2.0 * self.spacing;
        let mut springs = Vec::with_capacity(self.spring_count_of(SpringKind::Flex));

        for row in 0..n {
            for col in 0..n.saturating_sub(2) {
                let a = self.index(row, col);
                springs.push(Spring::new(a, a + 2, k, rest, SpringKind::Flex));
            }
        }
        for row in 0..n.saturating_sub(2) {
            for col in 0..n {
                let a = self.index(row, col);
                springs.push(Spring::new(a, a + 2 * n, k, rest, SpringKind::Flex));
            }
        }

        springs
    }
}
