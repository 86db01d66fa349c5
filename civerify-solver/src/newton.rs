use civerify_core::{Axis, Box2, ComplexIntervalMatrix2, Interval, Oracle};

/// Iteration cap for [`validate`].
///
/// Unexplained in the reference implementation this crate follows; kept as
/// a tunable constant since correctness of the verifier does not depend on
/// its value, only the sharpness/bisection-count tradeoff.
pub const NEWTON_MAX_ITERATIONS: u32 = 10;

/// Outcome of the Newton verification loop, prior to the classifier mapping
/// it onto the run-wide [`crate::outcome::Outcome`] taxonomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewtonStatus {
    /// `N(B) ⊆ B` held on some iteration; `B` is the final contracted box.
    Certified(Box2),
    /// `N(B)` was found disjoint from `B`.
    Discarded,
    /// The oracle or the Jacobian inverse could not soundly enclose a result.
    Failed,
    /// Neither containment nor disjointness was established within the cap.
    Undecided,
}

/// Run the interval Newton operator `N(B) = mid(B) - J(B)^-1 F(mid(B))` for
/// up to [`NEWTON_MAX_ITERATIONS`] steps, contracting `B` as it goes.
///
/// The Jacobian is recomputed on the current (shrinking) box every
/// iteration, never fixed at the box's initial width.
pub fn validate(oracle: &dyn Oracle, box_: Box2, p: Interval) -> NewtonStatus {
    let mut b = box_;
    let mut is_zero = false;

    for _ in 0..NEWTON_MAX_ITERATIONS {
        let mid = b.mid();
        let (f1, f2, ok_f) = oracle.evaluate(&mid, p);
        if !ok_f {
            return NewtonStatus::Failed;
        }

        let (df1_dz1, df2_dz1, ok1) = oracle.derivative(&b, Axis::Z1, p);
        let (df1_dz2, df2_dz2, ok2) = oracle.derivative(&b, Axis::Z2, p);
        if !ok1 || !ok2 {
            return NewtonStatus::Failed;
        }

        let jacobian = ComplexIntervalMatrix2::new(df1_dz1, df1_dz2, df2_dz1, df2_dz2);
        let (inv, ok_inv) = jacobian.inverse();
        if !ok_inv {
            return NewtonStatus::Failed;
        }

        let (step1, step2) = inv.mul_vec(f1, f2);
        let n = Box2::new(mid.z1.sub(step1), mid.z2.sub(step2));

        if n.subset(&b) {
            is_zero = true;
        } else if n.disjoint(&b) {
            return NewtonStatus::Discarded;
        }

        match n.intersect(&b) {
            Some(intersection) => b = intersection,
            None => return NewtonStatus::Discarded,
        }
    }

    if is_zero {
        NewtonStatus::Certified(b)
    } else {
        NewtonStatus::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civerify_core::{ComplexInterval, ReferenceOracle};

    fn box_from(re1: (f64, f64), im1: (f64, f64), re2: (f64, f64), im2: (f64, f64)) -> Box2 {
        Box2::new(
            ComplexInterval::new(
                Interval::new(re1.0, re1.1).unwrap(),
                Interval::new(im1.0, im1.1).unwrap(),
            ),
            ComplexInterval::new(
                Interval::new(re2.0, re2.1).unwrap(),
                Interval::new(im2.0, im2.1).unwrap(),
            ),
        )
    }

    #[test]
    fn identity_certifies_a_box_enclosing_the_origin() {
        let b = box_from((-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0));
        let status = validate(&ReferenceOracle::Identity, b, Interval::ZERO);
        match status {
            NewtonStatus::Certified(contracted) => assert!(contracted.subset(&b)),
            other => panic!("expected Certified, got {other:?}"),
        }
    }

    #[test]
    fn no_zeros_is_discarded_or_undecided_never_certified() {
        let b = box_from((-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0));
        let status = validate(&ReferenceOracle::NoZeros, b, Interval::ZERO);
        assert!(!matches!(status, NewtonStatus::Certified(_)));
    }

    #[test]
    fn product_oracle_is_undecided_near_the_singular_locus() {
        let b = box_from((-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0));
        let status = validate(&ReferenceOracle::Product, b, Interval::ZERO);
        assert!(matches!(
            status,
            NewtonStatus::Undecided | NewtonStatus::Failed
        ));
    }
}
