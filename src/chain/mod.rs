//! Raw option-chain normalization
//!
//! Turns provider-native chain rows, where any column may be absent,
//! mistyped, or degenerate, into validated `ContractQuote` records.

pub mod normalize;
pub mod raw;

pub use normalize::*;
pub use raw::*;
