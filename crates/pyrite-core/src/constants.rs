//! Protocol-wide constants for Pyrite.

/// Length in bytes of a 32-byte hash.
pub const HASH32_LEN: usize = 32;

/// Expected seconds per block (economic / UX target).
pub const POW_TARGET_SPACING_SECS: u64 = 600;

/// Expected seconds per retarget interval (two weeks).
pub const POW_TARGET_TIMESPAN_SECS: u64 = 14 * 24 * 60 * 60;

/// Blocks between difficulty retargets.
pub const DIFFICULTY_ADJUSTMENT_INTERVAL: u64 =
    POW_TARGET_TIMESPAN_SECS / POW_TARGET_SPACING_SECS;
