// Consensus-critical. The walk-back predicate below is load-bearing for
// historical chain data; do not simplify it.
//! Per-height difficulty policy.

use crate::chain::{BlockTime, ChainNode};
use crate::error::ConsensusError;
use crate::params::ConsensusParams;
use crate::retarget::calculate_next_work_required;

/// Compact target required of the block that would extend `tip`.
///
/// `candidate_time` is the new block's timestamp; it only matters on
/// networks with the minimum-difficulty rule. The candidate's height is
/// always `tip.height() + 1`.
///
/// # Errors
///
/// [`ConsensusError::MissingAncestor`] when the chain index cannot produce
/// the first block of the just-completed interval. That indicates a broken
/// or incomplete index, not bad consensus data; callers may treat it as
/// fatal.
pub fn next_work_required<N: ChainNode>(
    tip: &N,
    candidate_time: BlockTime,
    params: &ConsensusParams,
) -> Result<u32, ConsensusError> {
    let interval = params.difficulty_adjustment_interval();

    // Difficulty only changes at interval boundaries.
    if (tip.height() + 1) % interval != 0 {
        if params.allow_min_difficulty_blocks {
            let pow_limit_bits = params.pow_limit_bits();

            // A block arriving more than two spacings after the tip may be
            // mined at minimum difficulty.
            if candidate_time > tip.time() + 2 * params.pow_target_spacing {
                return Ok(pow_limit_bits);
            }

            // Otherwise skip back over the run of minimum-difficulty
            // catch-up blocks to the last genuinely earned target, stopping
            // at any retarget boundary.
            let mut node = tip.clone();
            loop {
                match node.parent() {
                    Some(parent)
                        if node.height() % interval != 0 && node.bits() == pow_limit_bits =>
                    {
                        node = parent;
                    }
                    _ => return Ok(node.bits()),
                }
            }
        }
        return Ok(tip.bits());
    }

    // Retarget boundary: measure the just-completed interval from its first
    // block. `tip.height() >= interval - 1` here, so this cannot underflow.
    let first_height = tip.height() - (interval - 1);
    let first = tip
        .ancestor(first_height)
        .ok_or(ConsensusError::MissingAncestor(first_height))?;

    Ok(calculate_next_work_required(
        tip.bits(),
        first.time(),
        tip.time(),
        params,
    ))
}
