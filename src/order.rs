//! Sort-order validation for the streaming consumer's precondition.
//!
//! The sorted consumer assumes records arrive in non-decreasing group-key
//! order. This check is advisory: a violation is surfaced as a warning by
//! the CLI and never aborts processing.

use std::io::BufRead;

use serde::Serialize;

use crate::record::{GroupKey, Parsed, parse_line};

/// The first point at which consecutive group keys decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderViolation {
    /// 1-based line number, counting every line including skipped ones.
    pub line: u64,
    /// Key of the last record before the violation.
    pub previous: GroupKey,
    /// The out-of-order key found on `line`.
    pub found: GroupKey,
}

/// Scans a record stream and reports the first line whose group key is
/// strictly smaller than its predecessor's, or `None` if the stream is in
/// non-decreasing key order.
///
/// Empty and malformed lines are skipped (they still advance the line
/// count). Scanning stops at the first violation; the remainder of the
/// stream is left unread.
pub fn check<R: BufRead>(reader: R) -> std::io::Result<Option<OrderViolation>> {
    let mut previous: Option<GroupKey> = None;
    let mut line_no: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;

        let record = match parse_line(&line) {
            Parsed::Record(r) => r,
            Parsed::Skip => continue,
        };

        if let Some(prev) = &previous {
            if record.key < *prev {
                return Ok(Some(OrderViolation {
                    line: line_no,
                    previous: prev.clone(),
                    found: record.key,
                }));
            }
        }
        previous = Some(record.key);
    }

    Ok(None)
}
