use crate::lock::LockLevel;
use crate::record::Record;

/// A shallow copy of `record` that is frozen: no key can be reassigned,
/// deleted, or reconfigured, and no key can be added.
pub fn run(record: &Record) -> Record {
    record.locked(LockLevel::Frozen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::PropertyUpdate;
    use crate::error::RecordError;
    use serde_json::json;

    #[test]
    fn every_key_is_frozen() {
        let source = Record::from_json(&json!({ "x": 5, "y": 10 })).unwrap();
        let frozen = run(&source);

        assert!(frozen.is_frozen());
        for (_, _, descriptor) in frozen.entries() {
            assert!(!descriptor.writable);
            assert!(!descriptor.configurable);
        }
    }

    #[test]
    fn hidden_keys_stay_hidden() {
        let mut source = Record::new();
        source
            .define("h", PropertyUpdate::new().value(1).writable(true))
            .unwrap();
        let frozen = run(&source);
        assert!(!frozen.descriptor("h").unwrap().enumerable);
    }

    #[test]
    fn frozen_copy_rejects_all_mutations() {
        let source = Record::from_json(&json!({ "x": 5, "y": 10 })).unwrap();
        let mut frozen = run(&source);

        assert!(matches!(frozen.set("x", 1), Err(RecordError::ReadOnly(_))));
        assert!(matches!(frozen.delete("y"), Err(RecordError::NotConfigurable(_))));
        assert!(matches!(frozen.set("z", 1), Err(RecordError::NotExtensible(_))));
        assert_eq!(frozen.to_json(), json!({ "x": 5, "y": 10 }));
    }

    #[test]
    fn source_stays_open() {
        let mut source = Record::from_json(&json!({ "x": 5 })).unwrap();
        let _frozen = run(&source);
        assert!(source.is_extensible());
        source.set("x", 6).unwrap();
        source.set("z", 1).unwrap();
    }

    #[test]
    fn freezing_twice_is_stable() {
        let source = Record::from_json(&json!({ "x": 5, "y": [1, 2] })).unwrap();
        assert_eq!(run(&run(&source)), run(&source));
    }
}
