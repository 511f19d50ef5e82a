//! Parsing of raw routing-record lines.
//!
//! Input lines are pipe-delimited with exactly four fields:
//! `source|destination|claim_id|status_code`. Lines that are empty or do
//! not split into exactly four fields carry no record and are skipped by
//! every consumer, so the parser returns a tagged [`Parsed`] value rather
//! than an error.

use serde::Serialize;

/// Field separator for routing-record lines. No escaping is supported.
pub const DELIMITER: char = '|';

/// The composite key grouping routing records into independent graphs.
///
/// Ordering is lexicographic on `(claim_id, status_code)` — the derived
/// `Ord` compares fields in declaration order, which is exactly the
/// grouping, sort-validation, and tie-breaking order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub claim_id: String,
    pub status_code: String,
}

impl GroupKey {
    pub fn new(claim_id: impl Into<String>, status_code: impl Into<String>) -> Self {
        Self {
            claim_id: claim_id.into(),
            status_code: status_code.into(),
        }
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.claim_id, self.status_code)
    }
}

/// One routing record: a directed edge between two system names, owned by
/// the group identified by `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub source: String,
    pub destination: String,
    pub key: GroupKey,
}

/// Outcome of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// The line carried a well-formed routing record.
    Record(Record),
    /// Empty or malformed line — not an error, produces no record.
    Skip,
}

/// Parses one line (newline already stripped) into a routing record.
///
/// Fields may be empty strings; only the field *count* is checked.
pub fn parse_line(line: &str) -> Parsed {
    if line.is_empty() {
        return Parsed::Skip;
    }
    let mut fields = line.split(DELIMITER);
    let (Some(source), Some(destination), Some(claim_id), Some(status_code), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Parsed::Skip;
    };
    Parsed::Record(Record {
        source: source.to_string(),
        destination: destination.to_string(),
        key: GroupKey::new(claim_id, status_code),
    })
}
