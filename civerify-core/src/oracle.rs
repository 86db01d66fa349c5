use crate::box2::Box2;
use crate::complex_interval::ComplexInterval;
use crate::interval::Interval;

/// Which component's axis a partial derivative is taken with respect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Z1,
    Z2,
}

/// The pluggable collaborator supplying rigorous enclosures of `F: ℂ² → ℂ²`
/// and its complex Jacobian on a box.
///
/// Implementors must uphold the correctness contract: for every point
/// `z` in `box_` with the returned `ok == true`, `F(z)` lies in the
/// returned value enclosure and `∂F(z)` lies in the returned derivative
/// enclosure. `ok == false` signals overflow, division by zero, or any
/// other domain error the implementation cannot soundly enclose — never a
/// panic.
pub trait Oracle: Sync {
    /// `F(box_, p) -> (f1, f2, ok)`.
    fn evaluate(&self, box_: &Box2, p: Interval) -> (ComplexInterval, ComplexInterval, bool);

    /// `(∂f1/∂z_k, ∂f2/∂z_k, ok)` for `k` given by `axis`.
    fn derivative(
        &self,
        box_: &Box2,
        axis: Axis,
        p: Interval,
    ) -> (ComplexInterval, ComplexInterval, bool);
}
