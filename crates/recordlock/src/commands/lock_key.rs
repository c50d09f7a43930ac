use serde_json::Value;

use crate::attributes::PropertyUpdate;
use crate::error::Result;
use crate::record::Record;

/// A shallow copy of `record` with `key` made read-only.
///
/// An existing key keeps its value and other flags. A missing key is added
/// as `null`, enumerable and configurable. The copy is extensible regardless
/// of the source's lock state, so adding the key always succeeds.
pub fn run(record: &Record, key: &str) -> Result<Record> {
    let mut copy = record.copy();
    let update = if copy.contains_key(key) {
        PropertyUpdate::new().writable(false)
    } else {
        PropertyUpdate::new()
            .value(Value::Null)
            .writable(false)
            .enumerable(true)
            .configurable(true)
    };
    copy.define(key, update)?;
    Ok(copy)
}
