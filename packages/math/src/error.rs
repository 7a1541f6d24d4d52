/// Failures of the fixed-point helpers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    /// Tick outside `MIN_TICK..=MAX_TICK`
    TickOutOfRange,
    /// Result does not fit the target integer type
    Overflow,
    DivisionByZero,
}
