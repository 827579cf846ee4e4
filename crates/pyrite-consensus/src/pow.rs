// Consensus-critical. Every condition here is a boolean rejection; this
// sits on the hot path for every block received.
//! Proof-of-work verification.

use crate::compact::decode_compact;
use crate::params::ConsensusParams;
use num_bigint::BigUint;
use num_traits::Zero;
use pyrite_core::Hash32;

/// Compare a 32-byte big-endian hash against a target magnitude.
///
/// Returns `true` if `hash <= target`.
pub fn hash_meets_target(hash: &Hash32, target: &BigUint) -> bool {
    BigUint::from_bytes_be(hash.as_bytes()) <= *target
}

/// Check a block hash against its claimed compact target.
///
/// Rejects targets that are negative, overflowing, zero, or easier than the
/// network's pow limit, then compares the hash. Never panics and never
/// errors: every invalid condition is `false`.
pub fn check_proof_of_work(hash: &Hash32, claimed_bits: u32, params: &ConsensusParams) -> bool {
    let decoded = decode_compact(claimed_bits);

    // Range check: the claimed target must be legal for the network.
    if decoded.negative
        || decoded.target.is_zero()
        || decoded.overflow
        || decoded.target > params.pow_limit
    {
        return false;
    }

    hash_meets_target(hash, &decoded.target)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mainnet pow limit (0xffff << 208) as a 32-byte big-endian array.
    fn limit_hash() -> Hash32 {
        let mut bytes = [0u8; 32];
        bytes[4] = 0xff;
        bytes[5] = 0xff;
        Hash32(bytes)
    }

    #[test]
    fn accepts_hash_equal_to_target() {
        let params = ConsensusParams::mainnet();
        assert!(check_proof_of_work(&limit_hash(), 0x1d00_ffff, &params));
    }

    #[test]
    fn accepts_hash_below_target() {
        let params = ConsensusParams::mainnet();
        assert!(check_proof_of_work(&Hash32::zero(), 0x1d00_ffff, &params));
    }

    #[test]
    fn rejects_hash_above_target() {
        let params = ConsensusParams::mainnet();
        let mut bytes = *limit_hash().as_bytes();
        bytes[3] = 0x01;
        assert!(!check_proof_of_work(&Hash32(bytes), 0x1d00_ffff, &params));
    }

    #[test]
    fn rejects_negative_target() {
        let params = ConsensusParams::mainnet();
        assert!(!check_proof_of_work(&Hash32::zero(), 0x0492_3456, &params));
    }

    #[test]
    fn rejects_overflowing_target() {
        let params = ConsensusParams::mainnet();
        assert!(!check_proof_of_work(&Hash32::zero(), 0xff12_3456, &params));
    }

    #[test]
    fn rejects_zero_target() {
        let params = ConsensusParams::mainnet();
        assert!(!check_proof_of_work(&Hash32::zero(), 0, &params));
        // Nonzero mantissa can still decode to zero at small exponents.
        assert!(!check_proof_of_work(&Hash32::zero(), 0x0100_3456, &params));
    }

    #[test]
    fn rejects_target_above_pow_limit() {
        let params = ConsensusParams::mainnet();
        // 0xffff << 216, one byte easier than the limit.
        assert!(!check_proof_of_work(&Hash32::zero(), 0x1e00_ffff, &params));
        // The same bits are legal on regtest, whose limit is easier.
        let regtest = ConsensusParams::regtest();
        assert!(check_proof_of_work(&Hash32::zero(), 0x1e00_ffff, &regtest));
    }
}
