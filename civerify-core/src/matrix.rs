use crate::complex_interval::ComplexInterval;

/// The numerical floor on `inf |det M|` below which inversion is abandoned
/// rather than risking a catastrophically wide (useless) inverse enclosure.
///
/// Matches the reference implementation's `1e-15` threshold.
pub const SINGULARITY_FLOOR: f64 = 1e-15;

/// A 2×2 matrix of `ComplexInterval` entries, used for the Jacobian
/// enclosure `J(B)` and its inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexIntervalMatrix2 {
    pub m11: ComplexInterval,
    pub m12: ComplexInterval,
    pub m21: ComplexInterval,
    pub m22: ComplexInterval,
}

impl ComplexIntervalMatrix2 {
    #[inline]
    pub fn new(
        m11: ComplexInterval,
        m12: ComplexInterval,
        m21: ComplexInterval,
        m22: ComplexInterval,
    ) -> Self {
        Self { m11, m12, m21, m22 }
    }

    /// `det(M) = m11*m22 - m12*m21`.
    pub fn det(self) -> ComplexInterval {
        self.m11.mul(self.m22).sub(self.m12.mul(self.m21))
    }

    /// Closed-form adjugate inverse. `ok=false` (with `self` returned
    /// unchanged) when `inf |det M|` is below [`SINGULARITY_FLOOR`].
    pub fn inverse(self) -> (Self, bool) {
        let det = self.det();
        if det.inf_norm() <= SINGULARITY_FLOOR {
            return (self, false);
        }
        let (inv_det, ok) = det.recip();
        if !ok {
            return (self, false);
        }
        (
            Self {
                m11: self.m22.mul(inv_det),
                m12: self.m12.neg().mul(inv_det),
                m21: self.m21.neg().mul(inv_det),
                m22: self.m11.mul(inv_det),
            },
            true,
        )
    }

    /// Matrix-vector product `M * (v1, v2)`.
    pub fn mul_vec(self, v1: ComplexInterval, v2: ComplexInterval) -> (ComplexInterval, ComplexInterval) {
        let r1 = self.m11.mul(v1).add(self.m12.mul(v2));
        let r2 = self.m21.mul(v1).add(self.m22.mul(v2));
        (r1, r2)
    }
}
