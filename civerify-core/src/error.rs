use thiserror::Error;

/// Errors originating from the core interval/complex-interval algebra and
/// data model.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid interval [{lo}, {hi}] (bounds must be finite with lo <= hi)")]
    InvalidInterval { lo: f64, hi: f64 },

    #[error("unknown reference oracle: {0:?} (expected one of: identity, polynomial, trivial, no-zeros, param-shift, product)")]
    UnknownOracle(String),
}
