// Engine Errors

use tickdex_math::MathError;

/// Failures shared by the ledger, registry and swap packages
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    TickOutOfRange,
    /// Negative or otherwise unusable amount
    InvalidAmount,
    InsufficientReserves,
    InsufficientShares,
    PoolNotFound,
    Overflow,
    DivisionByZero,
    /// Stored state disagrees with itself
    InvariantViolation,
}

impl From<MathError> for EngineError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::TickOutOfRange => EngineError::TickOutOfRange,
            MathError::Overflow => EngineError::Overflow,
            MathError::DivisionByZero => EngineError::DivisionByZero,
        }
    }
}
