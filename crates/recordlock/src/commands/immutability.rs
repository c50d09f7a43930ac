use crate::record::Record;

/// Whether `record` is frozen, sealed, or at least non-extensible.
///
/// Only a record that still accepts new keys reports `false`. Use
/// [`Record::lock_level`] to tell the levels apart.
pub fn run(record: &Record) -> bool {
    record.lock_level().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::PropertyUpdate;
    use crate::lock::LockLevel;
    use serde_json::json;

    fn sample() -> Record {
        Record::from_json(&json!({ "a": 1 })).unwrap()
    }

    #[test]
    fn extensible_record_is_not_locked() {
        assert!(!run(&Record::new()));
        assert!(!run(&sample()));
    }

    #[test]
    fn every_lock_level_counts() {
        for level in [LockLevel::NonExtensible, LockLevel::Sealed, LockLevel::Frozen] {
            let mut record = sample();
            record.apply_lock(level);
            assert!(run(&record), "{level} should count as locked");
        }
    }

    #[test]
    fn read_only_keys_alone_do_not_count() {
        let mut record = sample();
        record
            .define("a", PropertyUpdate::new().writable(false).configurable(false))
            .unwrap();
        assert!(!run(&record));
    }
}
