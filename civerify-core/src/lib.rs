pub mod box2;
pub mod complex_interval;
pub mod error;
pub mod examples;
pub mod interval;
pub mod matrix;
pub mod oracle;

// Re-export primary types for convenience.
pub use box2::{Box2, SplitAxis};
pub use complex_interval::ComplexInterval;
pub use error::CoreError;
pub use examples::ReferenceOracle;
pub use interval::Interval;
pub use matrix::{ComplexIntervalMatrix2, SINGULARITY_FLOOR};
pub use oracle::{Axis, Oracle};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
