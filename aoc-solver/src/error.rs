//! Error types for the solver library

use thiserror::Error;

/// Why an input could not be turned into a puzzle's shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A specific input line was rejected (1-based)
    #[error("Invalid line {line}: {message}")]
    Line { line: usize, message: String },
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    pub fn at_line(line: usize, message: impl ToString) -> Self {
        Self::Line {
            line,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// Inside `1..=PARTS` but without a `PartSolver` impl
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a solver's own error, or a plain message
    pub fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::SolveFailed(error.into())
    }
}

/// Failure to look up, parse or run a registered puzzle
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Parse error in {year}/{day:02}: {source}")]
    ParseError {
        year: u16,
        day: u8,
        #[source]
        source: ParseError,
    },
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Rejected by [`RegistryBuilder`](crate::RegistryBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Day is outside `1..=DAYS_PER_YEAR`
    #[error("Invalid year/day combination: {0} day {1}")]
    InvalidYearDay(u16, u8),
}
