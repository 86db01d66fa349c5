use thiserror::Error;

/// Errors originating from the root-finding scheduler and its collaborators.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("worker_count must be at least 1 (got {0})")]
    ZeroWorkers(usize),

    #[error(transparent)]
    Core(#[from] civerify_core::CoreError),
}
