//! Attribute specifications and registry.
//!
//! This module defines the closed set of per-key attributes, the names they
//! are known by, and how a name is resolved to an [`Attribute`].

use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;

/// One of the three boolean flags every record key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// The key's value can be reassigned.
    Writable,

    /// The key shows up in default iteration (`Record::keys`, `to_json`).
    Enumerable,

    /// The key's attributes can be changed and the key can be removed.
    Configurable,
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// Canonical name (e.g., "mutable-value")
    pub name: &'static str,

    /// The attribute this spec describes
    pub attribute: Attribute,

    /// Alternative names accepted when parsing
    pub aliases: &'static [&'static str],
}

impl AttributeSpec {
    const fn new(name: &'static str, attribute: Attribute) -> Self {
        Self {
            name,
            attribute,
            aliases: &[],
        }
    }

    /// Set the accepted aliases.
    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Whether `name` refers to this attribute.
    pub fn accepts(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

/// Registry of all key attributes.
///
/// This is the single source of truth for attribute names.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("mutable-value", Attribute::Writable).aliases(&["writable"]),
    AttributeSpec::new("enumerable", Attribute::Enumerable),
    AttributeSpec::new("reconfigurable", Attribute::Configurable).aliases(&["configurable"]),
];

/// Look up an attribute spec by canonical name or alias.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.accepts(name))
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Writable,
        Attribute::Enumerable,
        Attribute::Configurable,
    ];

    /// The canonical name of this attribute.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Writable => "mutable-value",
            Attribute::Enumerable => "enumerable",
            Attribute::Configurable => "reconfigurable",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_spec(s)
            .map(|spec| spec.attribute)
            .ok_or_else(|| RecordError::InvalidAttribute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_one_entry_per_attribute() {
        for attribute in Attribute::ALL {
            let count = ATTRIBUTES
                .iter()
                .filter(|spec| spec.attribute == attribute)
                .count();
            assert_eq!(count, 1, "{attribute} registered {count} times");
        }
    }

    #[test]
    fn canonical_names_parse() {
        assert_eq!(
            "mutable-value".parse::<Attribute>().unwrap(),
            Attribute::Writable
        );
        assert_eq!(
            "enumerable".parse::<Attribute>().unwrap(),
            Attribute::Enumerable
        );
        assert_eq!(
            "reconfigurable".parse::<Attribute>().unwrap(),
            Attribute::Configurable
        );
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("writable".parse::<Attribute>().unwrap(), Attribute::Writable);
        assert_eq!(
            "configurable".parse::<Attribute>().unwrap(),
            Attribute::Configurable
        );
    }

    #[test]
    fn unknown_name_is_invalid_attribute() {
        let err = "frozen".parse::<Attribute>().unwrap_err();
        assert!(matches!(err, RecordError::InvalidAttribute(ref name) if name == "frozen"));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Enumerable".parse::<Attribute>().is_err());
        assert!("WRITABLE".parse::<Attribute>().is_err());
    }

    #[test]
    fn name_roundtrips_through_parse() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.name().parse::<Attribute>().unwrap(), attribute);
            assert_eq!(attribute.to_string(), attribute.name());
        }
    }
}
