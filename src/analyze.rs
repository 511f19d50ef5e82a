//! Entry points tying input sources, order validation, and the two
//! consumption strategies together.

use crate::best::Best;
use crate::order::{self, OrderViolation};
use crate::source::{Input, InputError};
use crate::{accumulate, stream};

/// Result of a sorted-mode run: the computed winner plus any sort-order
/// violation found by the advisory pre-pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedReport {
    pub best: Best,
    pub violation: Option<OrderViolation>,
}

/// Buffers the whole input, then evaluates every group. Accepts records
/// in any order.
pub fn run_unsorted(input: &Input) -> Result<Best, InputError> {
    let reader = input.open()?;
    Ok(accumulate::run(reader)?)
}

/// Streams the input holding one group's edges at a time.
///
/// With `validate`, a re-readable source gets a full order-checking
/// pre-pass; the file is then reopened from the start for the main pass,
/// so validation never alters the computed result. Standard input cannot
/// be read twice — validation is skipped there with a logged warning
/// rather than silently consuming the stream.
pub fn run_sorted(input: &Input, validate: bool) -> Result<SortedReport, InputError> {
    let mut violation = None;
    if validate {
        if input.is_rereadable() {
            violation = order::check(input.open()?)?;
        } else {
            log::warn!("{input} cannot be re-read; skipping sort-order validation");
        }
    }
    let best = stream::run(input.open()?)?;
    Ok(SortedReport { best, violation })
}
