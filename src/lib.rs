pub mod accumulate;
pub mod analyze;
pub mod best;
pub mod cycle;
pub mod order;
pub mod record;
pub mod source;
pub mod stream;

pub use accumulate::GroupTable;
pub use analyze::{SortedReport, run_sorted, run_unsorted};
pub use best::Best;
pub use cycle::{RouteGraph, longest_cycle};
pub use order::OrderViolation;
pub use record::{GroupKey, Parsed, Record, parse_line};
pub use source::{Input, InputError};
pub use stream::SortedConsumer;
