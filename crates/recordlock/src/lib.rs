//! # recordlock
//!
//! Ordered key-value records whose keys carry explicit mutability attributes,
//! and four operations over them:
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | [`filter_keys_by_attribute`] | Keys whose attribute (`mutable-value`, `enumerable`, `reconfigurable`) is set |
//! | [`is_any_immutability_applied`] | Whether the record is non-extensible, sealed or frozen |
//! | [`with_single_key_locked`] | A copy with one key made read-only |
//! | [`with_all_locked`] | A fully frozen copy |
//!
//! None of the operations mutates its input. The lockers return shallow
//! copies: descriptors are duplicated, nested values are shared.
//!
//! ```ignore
//! use recordlock::{with_all_locked, Record};
//! use serde_json::json;
//!
//! let record = Record::from_json(&json!({ "x": 5, "y": 10 }))?;
//! let mut frozen = with_all_locked(&record);
//! assert!(frozen.set("x", 1).is_err());
//! assert!(record.is_extensible());
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The four operations, typed and over JSON input
//! - [`commands`]: One module per operation
//! - [`record`]: The `Record` container and its enforcement rules
//! - [`attributes`]: Attribute names and per-key descriptors
//! - [`lock`]: Lock levels and violation modes
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod lock;
pub mod record;

pub use api::{
    filter_keys_by_attribute, is_any_immutability_applied, with_all_locked,
    with_single_key_locked, RecordApi,
};
pub use attributes::{Attribute, Descriptor, PropertyDescriptor, PropertyUpdate};
pub use config::RecordConfig;
pub use error::{RecordError, Result};
pub use lock::{LockLevel, ViolationMode};
pub use record::Record;
