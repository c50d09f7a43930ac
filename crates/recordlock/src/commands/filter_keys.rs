use crate::attributes::Attribute;
use crate::record::Record;

/// Keys of `record` whose `attribute` is set, in the record's key order.
///
/// Every own key is considered, enumerable or not.
pub fn run(record: &Record, attribute: Attribute) -> Vec<String> {
    record.keys_where(attribute).map(str::to_string).collect()
}
