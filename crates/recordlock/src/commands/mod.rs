//! # Command Layer
//!
//! Each of the four record operations lives in its own submodule as a pure
//! function over [`Record`](crate::record::Record). None of them mutates its
//! input; the two lockers return a new record.
//!
//! ## Command Modules
//!
//! - [`filter_keys`]: Keys whose attribute is set
//! - [`immutability`]: Whether any lock level applies
//! - [`lock_key`]: Copy with one key made read-only
//! - [`lock_all`]: Fully frozen copy

pub mod filter_keys;
pub mod immutability;
pub mod lock_all;
pub mod lock_key;
