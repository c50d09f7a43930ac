//! # Attribute System
//!
//! Every key in a [`Record`](crate::record::Record) carries three boolean
//! attributes. Instead of hanging them off values implicitly, the attribute
//! system makes them explicit:
//!
//! - **Names**: a registry resolving canonical names and aliases
//! - **Descriptors**: the per-key triple, with serde support
//! - **Updates**: partial redefinitions applied through `Record::define`
//!
//! ## Attributes
//!
//! | Attribute | Canonical name | Alias | Controls |
//! |-----------|----------------|-------|----------|
//! | `Writable` | `mutable-value` | `writable` | Reassigning the value |
//! | `Enumerable` | `enumerable` | | Appearing in default iteration |
//! | `Configurable` | `reconfigurable` | `configurable` | Changing attributes, deleting the key |
//!
//! ## Usage
//!
//! ```ignore
//! let attribute: Attribute = "mutable-value".parse()?;
//! let descriptor = record.descriptor("a").unwrap();
//! if descriptor.get(attribute) { ... }
//!
//! record.define("a", PropertyUpdate::new().writable(false))?;
//! ```

mod descriptor;
mod spec;

pub use descriptor::{Descriptor, PropertyDescriptor, PropertyUpdate};
pub use spec::{get_spec, Attribute, AttributeSpec, ATTRIBUTES};
