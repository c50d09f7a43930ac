//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for the four record operations.
//!
//! ## Two Surfaces
//!
//! - **Typed**: [`filter_keys_by_attribute`], [`is_any_immutability_applied`],
//!   [`with_single_key_locked`], [`with_all_locked`] take a [`Record`].
//! - **Untyped**: [`RecordApi`] takes `serde_json::Value` input, normalizes it
//!   into a `Record` (rejecting non-objects with `InvalidInput`) under the
//!   configured violation mode, then dispatches to the same commands.
//!
//! Neither surface carries logic of its own; that lives in `commands/*.rs`.

use serde_json::Value;

use crate::attributes::Attribute;
use crate::commands;
use crate::config::RecordConfig;
use crate::error::Result;
use crate::record::Record;

/// Keys of `record` whose named attribute is set.
///
/// `attribute` is `mutable-value`, `enumerable` or `reconfigurable` (or the
/// aliases `writable` / `configurable`); anything else fails with
/// `InvalidAttribute`.
pub fn filter_keys_by_attribute(record: &Record, attribute: &str) -> Result<Vec<String>> {
    let attribute: Attribute = attribute.parse()?;
    Ok(commands::filter_keys::run(record, attribute))
}

pub fn is_any_immutability_applied(record: &Record) -> bool {
    commands::immutability::run(record)
}

pub fn with_single_key_locked(record: &Record, key: &str) -> Result<Record> {
    commands::lock_key::run(record, key)
}

pub fn with_all_locked(record: &Record) -> Record {
    commands::lock_all::run(record)
}

/// The record operations over untyped JSON input.
#[derive(Debug, Clone, Default)]
pub struct RecordApi {
    config: RecordConfig,
}

impl RecordApi {
    pub fn new(config: RecordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecordConfig {
        &self.config
    }

    /// Normalize JSON input into a record in the configured violation mode.
    pub fn record(&self, input: &Value) -> Result<Record> {
        Ok(Record::from_json(input)?.with_mode(self.config.violation_mode()))
    }

    pub fn filter_keys_by_attribute(
        &self,
        input: &Value,
        attribute: &str,
    ) -> Result<Vec<String>> {
        filter_keys_by_attribute(&self.record(input)?, attribute)
    }

    /// Always `false` for a JSON object, which builds an open record. Kept
    /// for surface parity and to validate the input.
    pub fn is_any_immutability_applied(&self, input: &Value) -> Result<bool> {
        Ok(is_any_immutability_applied(&self.record(input)?))
    }

    pub fn with_single_key_locked(&self, input: &Value, key: &str) -> Result<Record> {
        with_single_key_locked(&self.record(input)?, key)
    }

    pub fn with_all_locked(&self, input: &Value) -> Result<Record> {
        Ok(with_all_locked(&self.record(input)?))
    }
}
