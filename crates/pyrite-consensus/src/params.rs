//! Per-network consensus parameters.

use crate::compact::encode_compact;
use num_bigint::BigUint;
use pyrite_core::{POW_TARGET_SPACING_SECS, POW_TARGET_TIMESPAN_SECS};

/// Proof-of-work parameters for one network.
///
/// Passed by reference to every operation (configuration-as-value); nothing
/// in this crate reads ambient global state, so several networks can be
/// validated concurrently in one process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    /// Easiest (numerically largest) target the network allows.
    pub pow_limit: BigUint,
    /// Expected seconds per retarget interval.
    pub pow_target_timespan: u64,
    /// Expected seconds per block.
    pub pow_target_spacing: u64,
    /// Test-network rule: allow a minimum-difficulty block after a mining gap.
    pub allow_min_difficulty_blocks: bool,
    /// Regression-test rule: never retarget.
    pub no_retargeting: bool,
}

impl ConsensusParams {
    /// Main network: two-week timespan, ten-minute spacing, pow limit
    /// `0x1d00ffff`.
    pub fn mainnet() -> Self {
        Self {
            pow_limit: BigUint::from(0xffffu32) << 208,
            pow_target_timespan: POW_TARGET_TIMESPAN_SECS,
            pow_target_spacing: POW_TARGET_SPACING_SECS,
            allow_min_difficulty_blocks: false,
            no_retargeting: false,
        }
    }

    /// Test network: mainnet timing with the minimum-difficulty rule.
    pub fn testnet() -> Self {
        Self {
            allow_min_difficulty_blocks: true,
            ..Self::mainnet()
        }
    }

    /// Regression-test network: pow limit `0x207fffff`, retargeting off.
    pub fn regtest() -> Self {
        Self {
            pow_limit: BigUint::from(0x7f_ffffu32) << 232,
            allow_min_difficulty_blocks: true,
            no_retargeting: true,
            ..Self::mainnet()
        }
    }

    /// Blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Compact encoding of [`pow_limit`](Self::pow_limit).
    pub fn pow_limit_bits(&self) -> u32 {
        encode_compact(&self.pow_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::decode_compact;

    #[test]
    fn network_pow_limit_bits() {
        assert_eq!(ConsensusParams::mainnet().pow_limit_bits(), 0x1d00_ffff);
        assert_eq!(ConsensusParams::testnet().pow_limit_bits(), 0x1d00_ffff);
        assert_eq!(ConsensusParams::regtest().pow_limit_bits(), 0x207f_ffff);
    }

    #[test]
    fn pow_limit_matches_its_compact_form() {
        for params in [ConsensusParams::mainnet(), ConsensusParams::regtest()] {
            let d = decode_compact(params.pow_limit_bits());
            assert_eq!(d.target, params.pow_limit);
        }
    }

    #[test]
    fn mainnet_interval_is_2016() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.difficulty_adjustment_interval(), 2016);
        assert_eq!(
            params.difficulty_adjustment_interval(),
            pyrite_core::DIFFICULTY_ADJUSTMENT_INTERVAL
        );
    }
}
