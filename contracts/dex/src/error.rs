// Contract errors
//
// Codes are grouped by category:
// - 1xx initialization
// - 2xx request validation, rejected before any state is read
// - 3xx deposit policy
// - 4xx resources (reserves, shares, balances)
// - 7xx math and invariant failures

use soroban_sdk::contracterror;
use tickdex_math::MathError;
use tickdex_tick::EngineError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DexError {
    // Initialization errors (100-199)
    AlreadyInitialized = 100,
    NotInitialized = 101,

    // Validation errors (200-299)
    /// Tokens are identical
    InvalidTokenPair = 200,
    /// Fee tier not in the configured list
    UnsupportedFeeTier = 201,
    /// A pool tick falls outside +/- MAX_TICK
    TickOutOfRange = 202,
    /// Negative amount
    InvalidAmount = 203,
    /// Nothing left to deposit
    ZeroDeposit = 204,
    /// Deposit batch is empty
    EmptyRequest = 205,
    /// Fee tier list is empty, duplicated or above MAX_FEE_TIER
    InvalidFeeTiers = 206,

    // Policy errors (300-399)
    /// Deposit would sit across the spread from opposite liquidity
    DepositBehindEnemyLines = 300,

    // Resource errors (400-499)
    InsufficientReserves = 400,
    InsufficientShares = 401,
    /// Caller's token balance is below the amount owed
    InsufficientFunds = 402,
    PoolNotFound = 403,
    /// Swap filled nothing
    NoLiquidity = 404,
    /// Swap output below the caller's minimum
    InsufficientOutput = 405,
    /// Deposit would credit reserves without issuing shares
    ZeroSharesIssued = 406,

    // Math errors (700-799)
    DivisionByZero = 700,
    Overflow = 701,
    /// Stored state disagrees with itself
    InvariantViolation = 702,
}

impl From<EngineError> for DexError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::TickOutOfRange => DexError::TickOutOfRange,
            EngineError::InvalidAmount => DexError::InvalidAmount,
            EngineError::InsufficientReserves => DexError::InsufficientReserves,
            EngineError::InsufficientShares => DexError::InsufficientShares,
            EngineError::PoolNotFound => DexError::PoolNotFound,
            EngineError::Overflow => DexError::Overflow,
            EngineError::DivisionByZero => DexError::DivisionByZero,
            EngineError::InvariantViolation => DexError::InvariantViolation,
        }
    }
}

impl From<MathError> for DexError {
    fn from(err: MathError) -> Self {
        EngineError::from(err).into()
    }
}
