// Consensus-critical. The clamp bounds and operation order here are
// byte-exact requirements; reordering the multiply/divide changes output.
//! Periodic difficulty retarget calculation.

use crate::compact::{decode_compact, encode_compact};
use crate::params::ConsensusParams;
use num_bigint::BigUint;

/// Compute the compact target for the interval following `prev_bits`.
///
/// `first_block_time` and `last_block_time` bound the just-completed
/// interval. Timestamp ordering is not validated here (that happens
/// upstream); the clamp below bounds the effect of inconsistent inputs,
/// including a negative elapsed time. Infallible: `prev_bits` is assumed to
/// have passed verification when it entered the chain, and the timespan
/// divisor is a fixed positive network parameter.
pub fn calculate_next_work_required(
    prev_bits: u32,
    first_block_time: u64,
    last_block_time: u64,
    params: &ConsensusParams,
) -> u32 {
    if params.no_retargeting {
        return prev_bits;
    }

    // Limit the adjustment step to 4x in either direction.
    let target_timespan = params.pow_target_timespan as i64;
    let mut actual_timespan = last_block_time as i64 - first_block_time as i64;
    if actual_timespan < target_timespan / 4 {
        actual_timespan = target_timespan / 4;
    }
    if actual_timespan > target_timespan * 4 {
        actual_timespan = target_timespan * 4;
    }

    // new = old * actual / expected, multiply first.
    let old = decode_compact(prev_bits).target;
    let mut new = old * BigUint::from(actual_timespan as u64)
        / BigUint::from(params.pow_target_timespan);

    if new > params.pow_limit {
        new = params.pow_limit.clone();
    }

    encode_compact(&new)
}
