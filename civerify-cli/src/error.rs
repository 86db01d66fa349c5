use thiserror::Error;

/// Errors surfaced at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("expected exactly 8 domain numbers, got {0}")]
    WrongDomainArity(usize),

    #[error("parameter width must be non-negative (got {0})")]
    NegativeParamWidth(f64),

    #[error(transparent)]
    Core(#[from] civerify_core::CoreError),

    #[error(transparent)]
    Solver(#[from] civerify_solver::SolverError),
}
