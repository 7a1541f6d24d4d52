// Constants shared by the TickDex packages and contract.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Largest supported tick index.
/// 1.0001^440000 ≈ 1.28e19 is still representable as a Q64.64 `u128`.
pub const MAX_TICK: i64 = 440_000;

/// Smallest supported tick index.
pub const MIN_TICK: i64 = -MAX_TICK;

/// Number of entries in the power table; covers every bit of |MAX_TICK|.
pub const TICK_TABLE_BITS: usize = 19;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fee tiers (in ticks) enabled when the contract is initialized without an explicit list.
pub const DEFAULT_FEE_TIERS: [u64; 12] = [0, 1, 2, 3, 4, 5, 10, 20, 50, 100, 150, 200];

/// Upper bound accepted for a configured fee tier.
pub const MAX_FEE_TIER: u64 = 10_000;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Maximum ticks visited by one swap
pub const MAX_SWAP_ITERATIONS: u32 = 1024;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
pub const Q64: u128 = 1u128 << 64;

/// 1.0001^(2^k) in Q64.64, rounded down, for k = 0..19
pub(crate) const POW_TABLE_X64: [u128; TICK_TABLE_BITS] = [
    18448588748116922571,
    18450433606991734263,
    18454123878217468680,
    18461506635090006701,
    18476281010653910144,
    18505865242158250041,
    18565175891880433522,
    18684368066214940582,
    18925053041275764671,
    19415764168677886926,
    20435687552633177494,
    22639080592224303007,
    27784196929998399742,
    41848122137994986128,
    94936283578220370716,
    488590176327622479860,
    12941056668319229769860,
    9078618265828848800676189,
    4468068147273140139091016147737,
];
