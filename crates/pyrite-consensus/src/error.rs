//! Consensus error types.

use thiserror::Error;

/// Errors returned by the difficulty policy.
#[derive(Debug, Error)]
pub enum ConsensusError {
    /// The chain index could not produce a required ancestor.
    ///
    /// This is an integration fault (incomplete chain index), not a
    /// consensus-data fault; callers may treat it as fatal.
    #[error("chain index has no ancestor at height {0}")]
    MissingAncestor(u64),
}
