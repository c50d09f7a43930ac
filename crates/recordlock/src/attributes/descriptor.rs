//! Per-key descriptor types.
//!
//! A [`Descriptor`] is the attribute triple attached to every key.
//! [`PropertyDescriptor`] pairs it with the key's value for serialization,
//! and [`PropertyUpdate`] expresses a partial redefinition.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Attribute;

/// The attribute triple carried by a single record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Descriptor {
    /// Descriptor given to keys created by plain assignment.
    pub const OPEN: Descriptor = Descriptor {
        writable: true,
        enumerable: true,
        configurable: true,
    };

    /// Descriptor of a key defined without any flags.
    pub const CLOSED: Descriptor = Descriptor {
        writable: false,
        enumerable: false,
        configurable: false,
    };

    /// Read a single attribute.
    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Writable => self.writable,
            Attribute::Enumerable => self.enumerable,
            Attribute::Configurable => self.configurable,
        }
    }

    /// Return a copy with a single attribute replaced.
    pub fn with(mut self, attribute: Attribute, flag: bool) -> Self {
        match attribute {
            Attribute::Writable => self.writable = flag,
            Attribute::Enumerable => self.enumerable = flag,
            Attribute::Configurable => self.configurable = flag,
        }
        self
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::OPEN
    }
}

/// A key's value together with its descriptor.
///
/// Serializes as `{"value": .., "writable": .., "enumerable": .., "configurable": ..}`.
/// When deserializing, missing flags default to `false` and a missing value
/// to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub writable: bool,
    #[serde(default)]
    pub enumerable: bool,
    #[serde(default)]
    pub configurable: bool,
}

impl PropertyDescriptor {
    pub fn new(value: Value, descriptor: Descriptor) -> Self {
        Self {
            value,
            writable: descriptor.writable,
            enumerable: descriptor.enumerable,
            configurable: descriptor.configurable,
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            writable: self.writable,
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }
}

/// A partial redefinition of a key, applied with `Record::define`.
///
/// Fields left as `None` keep their current setting on an existing key.
/// On a new key they default to `false` (value to `null`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyUpdate {
    pub value: Option<Value>,
    pub writable: Option<bool>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

impl PropertyUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn writable(mut self, flag: bool) -> Self {
        self.writable = Some(flag);
        self
    }

    pub fn enumerable(mut self, flag: bool) -> Self {
        self.enumerable = Some(flag);
        self
    }

    pub fn configurable(mut self, flag: bool) -> Self {
        self.configurable = Some(flag);
        self
    }

    /// Set a single attribute by enum.
    pub fn attribute(self, attribute: Attribute, flag: bool) -> Self {
        match attribute {
            Attribute::Writable => self.writable(flag),
            Attribute::Enumerable => self.enumerable(flag),
            Attribute::Configurable => self.configurable(flag),
        }
    }

    /// The descriptor this update produces when layered over `base`.
    pub fn merged_descriptor(&self, base: Descriptor) -> Descriptor {
        Descriptor {
            writable: self.writable.unwrap_or(base.writable),
            enumerable: self.enumerable.unwrap_or(base.enumerable),
            configurable: self.configurable.unwrap_or(base.configurable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_descriptor_is_default() {
        assert_eq!(Descriptor::default(), Descriptor::OPEN);
        for attribute in Attribute::ALL {
            assert!(Descriptor::OPEN.get(attribute));
        }
    }

    #[test]
    fn with_replaces_only_one_flag() {
        let d = Descriptor::OPEN.with(Attribute::Writable, false);
        assert!(!d.writable);
        assert!(d.enumerable);
        assert!(d.configurable);
    }

    #[test]
    fn property_descriptor_missing_fields_default_to_false() {
        let parsed: PropertyDescriptor = serde_json::from_value(json!({ "value": 3 })).unwrap();
        assert_eq!(parsed.value, json!(3));
        assert_eq!(parsed.descriptor(), Descriptor::CLOSED);

        let empty: PropertyDescriptor = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.value, Value::Null);
    }

    #[test]
    fn property_descriptor_serializes_flat() {
        let hidden = Descriptor::OPEN.with(Attribute::Enumerable, false);
        let pd = PropertyDescriptor::new(json!("x"), hidden);
        assert_eq!(
            serde_json::to_value(&pd).unwrap(),
            json!({
                "value": "x",
                "writable": true,
                "enumerable": false,
                "configurable": true,
            })
        );
    }

    #[test]
    fn update_merges_over_base() {
        let update = PropertyUpdate::new().writable(false);
        assert_eq!(
            update.merged_descriptor(Descriptor::OPEN),
            Descriptor::OPEN.with(Attribute::Writable, false)
        );

        let none = PropertyUpdate::new();
        assert_eq!(
            none.merged_descriptor(Descriptor::CLOSED),
            Descriptor::CLOSED
        );
    }

    #[test]
    fn update_attribute_dispatches_by_enum() {
        let update = PropertyUpdate::new()
            .attribute(Attribute::Enumerable, false)
            .attribute(Attribute::Configurable, true);
        assert_eq!(update.writable, None);
        assert_eq!(update.enumerable, Some(false));
        assert_eq!(update.configurable, Some(true));
    }
}
