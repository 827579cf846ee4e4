#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Pyrite core: canonical value types and protocol constants.

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
