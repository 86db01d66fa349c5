pub mod classifier;
pub mod counters;
pub mod error;
pub mod newton;
pub mod outcome;
pub mod scheduler;

pub use classifier::classify;
pub use counters::{CounterSnapshot, Counters};
pub use error::SolverError;
pub use newton::{validate, NewtonStatus, NEWTON_MAX_ITERATIONS};
pub use outcome::Outcome;
pub use scheduler::{run, RunOptions, RunReport};

/// Convenience result type for the solver crate.
pub type Result<T> = std::result::Result<T, SolverError>;
