use civerify_core::{Axis, Box2, ComplexIntervalMatrix2, Interval, Oracle};

use crate::newton::{validate, NewtonStatus};
use crate::outcome::Outcome;

/// Decide the fate of one box: a cheap enclosure test, a Jacobian
/// non-singularity test, and only then the (expensive) Newton verifier.
///
/// Ordering matters: the enclosure test rejects the bulk of empty regions
/// for the cost of one `F` evaluation; the Jacobian test is what justifies
/// applying Newton at all; Newton is the only step that can *prove*
/// existence.
pub fn classify(oracle: &dyn Oracle, box_: Box2, p: Interval) -> Outcome {
    let (f1, f2, ok_f) = oracle.evaluate(&box_, p);
    if !ok_f {
        return Outcome::Failed;
    }
    if !f1.contains_zero() || !f2.contains_zero() {
        return Outcome::DiscardedByEnclosure;
    }

    let (df1_dz1, df2_dz1, ok1) = oracle.derivative(&box_, Axis::Z1, p);
    let (df1_dz2, df2_dz2, ok2) = oracle.derivative(&box_, Axis::Z2, p);
    if !ok1 || !ok2 {
        return Outcome::Failed;
    }
    let jacobian = ComplexIntervalMatrix2::new(df1_dz1, df1_dz2, df2_dz1, df2_dz2);
    if jacobian.det().contains_zero() {
        return Outcome::Undecided;
    }

    match validate(oracle, box_, p) {
        NewtonStatus::Certified(contracted) => Outcome::CertifiedZero(contracted),
        NewtonStatus::Discarded => Outcome::DiscardedByNewton,
        NewtonStatus::Failed => Outcome::Failed,
        NewtonStatus::Undecided => Outcome::Undecided,
    }
}
