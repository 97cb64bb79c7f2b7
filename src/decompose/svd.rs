use nalgebra::Vector2;

use crate::animation::phase::PhaseSequence;
use crate::foundation::core::Mat2;
use crate::foundation::error::{SvdVizError, SvdVizResult};

/// Singular value decomposition `A = U·Σ·Vᵀ` of a 2x2 matrix.
///
/// Singular values are non-negative and sorted in descending order; `u` and `vt` are orthogonal.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    /// Source matrix `A`.
    pub source: Mat2,
    /// Left singular vectors (columns).
    pub u: Mat2,
    /// Singular values, descending.
    pub singular_values: [f64; 2],
    /// Transposed right singular vectors.
    pub vt: Mat2,
}

impl Decomposition {
    /// Decompose `matrix` with nalgebra's SVD.
    pub fn of(matrix: Mat2) -> SvdVizResult<Self> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(SvdVizError::validation(
                "matrix entries must be finite to compute an SVD",
            ));
        }

        let svd = matrix.svd(true, true);
        let mut u = svd
            .u
            .ok_or_else(|| SvdVizError::validation("svd did not produce U"))?;
        let mut vt = svd
            .v_t
            .ok_or_else(|| SvdVizError::validation("svd did not produce V^T"))?;
        let mut s: Vector2<f64> = svd.singular_values;

        for i in 0..2 {
            if s[i] < 0.0 {
                s[i] = -s[i];
                u.column_mut(i).neg_mut();
            }
        }
        if s[0] < s[1] {
            s.swap_rows(0, 1);
            u.swap_columns(0, 1);
            vt.swap_rows(0, 1);
        }

        Ok(Self {
            source: matrix,
            u,
            singular_values: [s[0], s[1]],
            vt,
        })
    }

    /// Diagonal matrix `Σ`.
    pub fn sigma(&self) -> Mat2 {
        Mat2::new(self.singular_values[0], 0.0, 0.0, self.singular_values[1])
    }

    /// Recompose `U·Σ·Vᵀ`.
    pub fn reconstruct(&self) -> Mat2 {
        self.u * self.sigma() * self.vt
    }

    /// Phase sequence `[Vᵀ, Σ, U]` in application order.
    pub fn phases(&self) -> PhaseSequence {
        PhaseSequence::new(self.vt, self.sigma(), self.u)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decompose/svd.rs"]
mod tests;
