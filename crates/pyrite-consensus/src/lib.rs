#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Pyrite proof-of-work difficulty rules.
//!
//! This crate is responsible for:
//! - compact difficulty target encoding/decoding (`bits`)
//! - the periodic difficulty retarget calculation
//! - the per-height difficulty policy (which target a new block must carry)
//! - proof-of-work verification against a claimed target
//!
//! It intentionally does **not** include header hashing, chain selection,
//! networking, mempool policy, or state updates. Every operation is a pure
//! function of its inputs and safe to call concurrently.

pub mod chain;
pub mod compact;
pub mod error;
pub mod params;
pub mod policy;
pub mod pow;
pub mod retarget;

pub use chain::*;
pub use compact::*;
pub use error::*;
pub use params::*;
pub use policy::*;
pub use pow::*;
pub use retarget::*;
