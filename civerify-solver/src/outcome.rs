use civerify_core::Box2;

/// The result of classifying a single box.
///
/// Only `Undecided` yields children; every other variant terminates the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The Newton verifier proved exactly one zero lies in the (contracted) box.
    CertifiedZero(Box2),
    /// The enclosure of `F` on the box excludes zero on at least one component.
    DiscardedByEnclosure,
    /// The Newton operator's image is disjoint from the box: no zero inside.
    DiscardedByNewton,
    /// The oracle or a matrix inversion could not soundly enclose a result.
    Failed,
    /// Neither existence nor absence could be established within the iteration cap.
    Undecided,
}
