//! Result-set filters shared by the query flows.

use crate::domain::ConfidenceThreshold;
use crate::models::RecordRef;
use std::collections::HashSet;
use std::hash::Hash;

/// Keep records whose attention score reaches `threshold`, in order.
pub fn filter_by_confidence(
    records: Vec<RecordRef>,
    threshold: ConfidenceThreshold,
) -> Vec<RecordRef> {
    records
        .into_iter()
        .filter(|record| threshold.accepts(record.attention_score))
        .collect()
}

/// Drop later duplicates, keeping each value at its first position.
///
/// Values are compared exactly as given (no case or whitespace folding).
pub fn dedupe_preserve_order<T>(values: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
