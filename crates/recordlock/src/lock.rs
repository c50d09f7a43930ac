//! Lock levels and violation handling.
//!
//! A record can be locked at three levels of increasing strictness:
//!
//! | Level | New keys | Delete / reconfigure keys | Reassign values |
//! |-------|----------|---------------------------|-----------------|
//! | `NonExtensible` | no | per key | per key |
//! | `Sealed` | no | no | per key |
//! | `Frozen` | no | no | no |
//!
//! Locks are applied with [`Record::apply_lock`](crate::record::Record::apply_lock)
//! and never loosen a stricter state already in place. The level reported by
//! [`Record::lock_level`](crate::record::Record::lock_level) is derived from
//! the record's current flags, so a record sealed by hand (every key made
//! non-configurable, then extensions prevented) reports `Sealed` too.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How strictly a record is locked against structural mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockLevel {
    /// No new keys can be added.
    NonExtensible,
    /// Non-extensible, and no key can be removed or reconfigured.
    Sealed,
    /// Sealed, and no value can be reassigned.
    Frozen,
}

impl fmt::Display for LockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LockLevel::NonExtensible => "non-extensible",
            LockLevel::Sealed => "sealed",
            LockLevel::Frozen => "frozen",
        };
        f.write_str(name)
    }
}

/// What a record does when a mutation would break one of its locks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationMode {
    /// The mutation fails with a violation error.
    #[default]
    Strict,
    /// The mutation is ignored and reports success.
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_strictness() {
        assert!(LockLevel::NonExtensible < LockLevel::Sealed);
        assert!(LockLevel::Sealed < LockLevel::Frozen);
        assert_eq!(
            [LockLevel::Frozen, LockLevel::NonExtensible, LockLevel::Sealed]
                .into_iter()
                .max(),
            Some(LockLevel::Frozen)
        );
    }

    #[test]
    fn level_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&LockLevel::NonExtensible).unwrap(),
            "\"non-extensible\""
        );
        let parsed: LockLevel = serde_json::from_str("\"sealed\"").unwrap();
        assert_eq!(parsed, LockLevel::Sealed);
    }

    #[test]
    fn level_display_matches_serde_name() {
        for level in [LockLevel::NonExtensible, LockLevel::Sealed, LockLevel::Frozen] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn violation_mode_defaults_to_strict() {
        assert_eq!(ViolationMode::default(), ViolationMode::Strict);
        let parsed: ViolationMode = serde_json::from_str("\"silent\"").unwrap();
        assert_eq!(parsed, ViolationMode::Silent);
    }
}
