//! # Records
//!
//! A [`Record`] is an ordered mapping from string keys to JSON values where
//! every key carries a [`Descriptor`] (writable, enumerable, configurable) and
//! the record as a whole carries an *extensible* flag.
//!
//! ## Values and Sharing
//!
//! Values are held behind [`Arc`], so [`Record::copy`] is a shallow copy: the
//! key/value/descriptor triples are duplicated, but nested structures are
//! shared with the source rather than deep-cloned. Values are never mutated
//! in place (assignment swaps the `Arc`), so a copy and its source can't
//! observe each other's writes.
//!
//! ## Enforcement
//!
//! Every mutator checks the relevant flags before touching the record:
//!
//! - [`Record::set`]: needs a writable key, or an extensible record for a new key
//! - [`Record::define`]: see its docs for the non-configurable rules
//! - [`Record::delete`]: needs a configurable key
//!
//! A refused mutation leaves the record untouched. Whether it also returns an
//! error depends on the record's [`ViolationMode`].

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::attributes::{Attribute, Descriptor, PropertyDescriptor, PropertyUpdate};
use crate::error::{RecordError, Result};
use crate::lock::{LockLevel, ViolationMode};

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    key: String,
    value: Arc<Value>,
    descriptor: Descriptor,
}

/// An ordered key-value container with per-key mutability attributes.
///
/// `Clone` produces an exact duplicate, lock state included. Use
/// [`Record::copy`] for a fresh, extensible record holding the same triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    slots: Vec<Slot>,
    extensible: bool,
    mode: ViolationMode,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    /// Create an empty, extensible record in strict mode.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            extensible: true,
            mode: ViolationMode::default(),
        }
    }

    /// Set the violation mode.
    pub fn with_mode(mut self, mode: ViolationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ViolationMode {
        self.mode
    }

    /// Build a record from a JSON object. Every key gets the open descriptor.
    ///
    /// Any other JSON value is rejected with [`RecordError::InvalidInput`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = expect_object(value)?;
        let slots = map
            .iter()
            .map(|(key, value)| Slot {
                key: key.clone(),
                value: Arc::new(value.clone()),
                descriptor: Descriptor::OPEN,
            })
            .collect();
        Ok(Self {
            slots,
            ..Self::new()
        })
    }

    /// Parse a JSON document and build a record from it.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Build a record from a JSON object of descriptor objects.
    ///
    /// ```ignore
    /// let record = Record::from_descriptor_json(&json!({
    ///     "a": { "value": 1, "writable": true, "enumerable": true, "configurable": true },
    ///     "b": { "value": 2, "enumerable": true },
    /// }))?;
    /// ```
    ///
    /// Flags missing from a descriptor default to `false`, a missing value to
    /// `null`.
    pub fn from_descriptor_json(value: &Value) -> Result<Self> {
        let map = expect_object(value)?;
        let mut slots = Vec::with_capacity(map.len());
        for (key, raw) in map {
            let property: PropertyDescriptor = serde_json::from_value(raw.clone())?;
            slots.push(Slot {
                key: key.clone(),
                descriptor: property.descriptor(),
                value: Arc::new(property.value),
            });
        }
        Ok(Self {
            slots,
            ..Self::new()
        })
    }

    /// The enumerable keys and their values as a JSON object.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .slots
            .iter()
            .filter(|slot| slot.descriptor.enumerable)
            .map(|slot| (slot.key.clone(), (*slot.value).clone()))
            .collect();
        Value::Object(map)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slot(key).map(|slot| slot.value.as_ref())
    }

    /// The shared handle to a key's value.
    pub fn get_shared(&self, key: &str) -> Option<&Arc<Value>> {
        self.slot(key).map(|slot| &slot.value)
    }

    pub fn descriptor(&self, key: &str) -> Option<Descriptor> {
        self.slot(key).map(|slot| slot.descriptor)
    }

    /// A key's value and descriptor together.
    pub fn property(&self, key: &str) -> Option<PropertyDescriptor> {
        self.slot(key)
            .map(|slot| PropertyDescriptor::new((*slot.value).clone(), slot.descriptor))
    }

    /// Every key, in order, enumerable or not.
    pub fn own_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(|slot| slot.key.as_str())
    }

    /// Enumerable keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys_where(Attribute::Enumerable)
    }

    /// Keys whose `attribute` is currently set, in order.
    pub fn keys_where(&self, attribute: Attribute) -> impl Iterator<Item = &str> + '_ {
        self.slots
            .iter()
            .filter(move |slot| slot.descriptor.get(attribute))
            .map(|slot| slot.key.as_str())
    }

    /// `(key, value, descriptor)` for every key, in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value, Descriptor)> + '_ {
        self.slots
            .iter()
            .map(|slot| (slot.key.as_str(), slot.value.as_ref(), slot.descriptor))
    }

    /// Assign a value.
    ///
    /// An existing key must be writable. A new key is appended with the open
    /// descriptor and requires the record to be extensible.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => {
                if !self.slots[index].descriptor.writable {
                    return self.violation(RecordError::ReadOnly(key));
                }
                self.slots[index].value = Arc::new(value.into());
                Ok(())
            }
            None => {
                if !self.extensible {
                    return self.violation(RecordError::NotExtensible(key));
                }
                self.slots.push(Slot {
                    key,
                    value: Arc::new(value.into()),
                    descriptor: Descriptor::OPEN,
                });
                Ok(())
            }
        }
    }

    /// Define or redefine a key from a partial update.
    ///
    /// A new key requires an extensible record; fields the update leaves out
    /// default to `false` (value to `null`).
    ///
    /// For an existing non-configurable key the update is refused when it
    /// would make the key configurable or change its enumerability. If the
    /// key is also non-writable, the update may neither make it writable nor
    /// change its value (restating the current value is fine). Turning a
    /// writable non-configurable key read-only is always allowed.
    pub fn define(&mut self, key: impl Into<String>, update: PropertyUpdate) -> Result<()> {
        let key = key.into();
        let Some(index) = self.position(&key) else {
            if !self.extensible {
                return self.violation(RecordError::NotExtensible(key));
            }
            let descriptor = update.merged_descriptor(Descriptor::CLOSED);
            self.slots.push(Slot {
                key,
                value: Arc::new(update.value.unwrap_or(Value::Null)),
                descriptor,
            });
            return Ok(());
        };

        let slot = &self.slots[index];
        if !slot.descriptor.configurable && !redefinition_allowed(slot, &update) {
            return self.violation(RecordError::NotConfigurable(key));
        }

        let slot = &mut self.slots[index];
        slot.descriptor = update.merged_descriptor(slot.descriptor);
        if let Some(value) = update.value {
            if *slot.value != value {
                slot.value = Arc::new(value);
            }
        }
        Ok(())
    }

    /// Remove a key. Removing a missing key is a no-op.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let Some(index) = self.position(key) else {
            return Ok(());
        };
        if !self.slots[index].descriptor.configurable {
            return self.violation(RecordError::NotConfigurable(key.to_string()));
        }
        self.slots.remove(index);
        Ok(())
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    /// Stop new keys from being added.
    pub fn prevent_extensions(&mut self) {
        self.apply_lock(LockLevel::NonExtensible);
    }

    /// Lock the record at `level`.
    ///
    /// Flags are only ever cleared, so applying a weaker level to a record
    /// that is already locked more strictly changes nothing.
    pub fn apply_lock(&mut self, level: LockLevel) {
        self.extensible = false;
        for slot in &mut self.slots {
            if level >= LockLevel::Sealed {
                slot.descriptor.configurable = false;
            }
            if level >= LockLevel::Frozen {
                slot.descriptor.writable = false;
            }
        }
        debug!(%level, keys = self.slots.len(), "applied record lock");
    }

    /// The strictest lock level the record currently satisfies, or `None`
    /// while it is still extensible.
    pub fn lock_level(&self) -> Option<LockLevel> {
        if self.extensible {
            return None;
        }
        let sealed = self.slots.iter().all(|slot| !slot.descriptor.configurable);
        let read_only = self.slots.iter().all(|slot| !slot.descriptor.writable);
        Some(match (sealed, read_only) {
            (true, true) => LockLevel::Frozen,
            (true, false) => LockLevel::Sealed,
            (false, _) => LockLevel::NonExtensible,
        })
    }

    pub fn is_sealed(&self) -> bool {
        self.lock_level() >= Some(LockLevel::Sealed)
    }

    pub fn is_frozen(&self) -> bool {
        self.lock_level() == Some(LockLevel::Frozen)
    }

    /// Shallow copy into a fresh, extensible record.
    ///
    /// Every key keeps its value handle and descriptor; only the record-level
    /// lock state is reset. The violation mode carries over.
    pub fn copy(&self) -> Self {
        debug!(keys = self.slots.len(), "copying record");
        Self {
            slots: self.slots.clone(),
            extensible: true,
            mode: self.mode,
        }
    }

    /// A shallow copy locked at `level`. `self` is left untouched.
    pub fn locked(&self, level: LockLevel) -> Self {
        let mut copy = self.copy();
        copy.apply_lock(level);
        copy
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.key == key)
    }

    fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.key == key)
    }

    fn violation(&self, err: RecordError) -> Result<()> {
        match self.mode {
            ViolationMode::Strict => Err(err),
            ViolationMode::Silent => {
                trace!(%err, "ignored record violation");
                Ok(())
            }
        }
    }
}

/// Whether `update` may be applied to the non-configurable `slot`.
fn redefinition_allowed(slot: &Slot, update: &PropertyUpdate) -> bool {
    if update.configurable == Some(true) {
        return false;
    }
    if update
        .enumerable
        .is_some_and(|flag| flag != slot.descriptor.enumerable)
    {
        return false;
    }
    if slot.descriptor.writable {
        return true;
    }
    if update.writable == Some(true) {
        return false;
    }
    match &update.value {
        Some(value) => *value == *slot.value,
        None => true,
    }
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(RecordError::InvalidInput("null")),
        Value::Bool(_) => Err(RecordError::InvalidInput("boolean")),
        Value::Number(_) => Err(RecordError::InvalidInput("number")),
        Value::String(_) => Err(RecordError::InvalidInput("string")),
        Value::Array(_) => Err(RecordError::InvalidInput("array")),
    }
}
