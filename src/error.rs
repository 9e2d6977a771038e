use crate::common::{Float, Int};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
    #[error("{0}")]
    Parse(#[from] crate::parse::ParseError),
    #[error("too many dice rolled: {requested} requested, at most {max} allowed")]
    TooManyRolls { requested: u64, max: u64 },
    #[error("roll total overflowed")]
    Overflow,
}

/// A numeric precondition that a caller violated.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("sides must be greater than 0, got {0}")]
    NonPositiveSides(Int),
    #[error("probability must be between 0 and 1, got {0}")]
    ProbabilityOutOfRange(Float),
}
