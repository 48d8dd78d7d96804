//! Lookup-reference resolution across record collections.
//!
//! # Responsibility
//! - Build id-keyed indices over definition and category collections.
//! - Extract the target record id from URL-like lookup reference strings.
//!
//! # Invariants
//! - A reference resolves to at most one record.
//! - Missing or malformed references resolve to "no match", never an error.

use crate::model::record::{Record, RecordId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Index from record id to the record itself, borrowed from a snapshot.
pub type RecordIndex<'a, F> = HashMap<RecordId, &'a Record<F>>;

// A lookup reference is valid only when it ends in the target record's
// 24-character hex id, e.g. `https://.../records/6975ec8a00a9eae13ac5b92b`.
static RECORD_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9a-fA-F]{24})$").expect("valid record id regex"));

/// Builds an id-keyed index over a record collection.
///
/// Duplicate ids should not occur; if they do, later records overwrite
/// earlier ones.
pub fn build_index<F>(records: &[Record<F>]) -> RecordIndex<'_, F> {
    records
        .iter()
        .map(|record| (record.record_id.clone(), record))
        .collect()
}

/// Extracts the target record id from a lookup reference string.
///
/// Returns the trailing 24-character hex run as captured, or `None` for
/// missing or malformed references. Callers treat `None` as "unresolved".
pub fn extract_record_id(reference: Option<&str>) -> Option<RecordId> {
    let reference = reference?;
    RECORD_ID_RE
        .captures(reference)
        .map(|captures| RecordId::new(&captures[1]))
}

/// Resolves a lookup reference against a prebuilt index.
///
/// A `None` reference and a missing key both yield `None`; never fails.
pub fn resolve<'a, F>(reference: Option<&str>, index: &RecordIndex<'a, F>) -> Option<&'a Record<F>> {
    let id = extract_record_id(reference)?;
    index.get(&id).copied()
}

#[cfg(test)]
mod tests {
    use super::{build_index, extract_record_id};
    use crate::model::record::{CategoryFields, Record, RecordId};

    #[test]
    fn extract_accepts_trailing_hex_run() {
        let reference = "https://store.example/rest/apps/abc/records/6975ec870ed5e30e8cfc909f";
        assert_eq!(
            extract_record_id(Some(reference)),
            Some(RecordId::new("6975ec870ed5e30e8cfc909f"))
        );
    }

    #[test]
    fn extract_preserves_captured_case() {
        assert_eq!(
            extract_record_id(Some("6975EC870ED5E30E8CFC909F")),
            Some(RecordId::new("6975EC870ED5E30E8CFC909F"))
        );
    }

    #[test]
    fn extract_rejects_missing_and_malformed_input() {
        assert_eq!(extract_record_id(None), None);
        assert_eq!(extract_record_id(Some("")), None);
        // Too short.
        assert_eq!(extract_record_id(Some("6975ec87")), None);
        // Non-hex tail.
        assert_eq!(
            extract_record_id(Some("https://x/records/6975ec870ed5e30e8cfc909z")),
            None
        );
        // Hex run not at the end.
        assert_eq!(
            extract_record_id(Some("6975ec870ed5e30e8cfc909f/detail")),
            None
        );
    }

    #[test]
    fn build_index_keeps_last_duplicate() {
        let first = Record::new(RecordId::new("6975ec870ed5e30e8cfc909f"), CategoryFields {
            name: Some("first".to_string()),
            ..CategoryFields::default()
        });
        let second = Record::new(RecordId::new("6975ec870ed5e30e8cfc909f"), CategoryFields {
            name: Some("second".to_string()),
            ..CategoryFields::default()
        });

        let records = vec![first, second];
        let index = build_index(&records);
        assert_eq!(index.len(), 1);
        let kept = index[&RecordId::new("6975ec870ed5e30e8cfc909f")];
        assert_eq!(kept.fields.name.as_deref(), Some("second"));
    }
}
