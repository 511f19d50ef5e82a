//! Unsorted accumulation: buffer every group's edges, then search each one.
//!
//! This consumer accepts records in any order at the cost of holding the
//! whole input in memory. System names are interned once across all
//! groups; a group stores its edges as interned id pairs in arrival order
//! and compacts them to a dense adjacency list when it is evaluated.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::BufRead;

use crate::best::Best;
use crate::cycle::{Interner, compact_adjacency, longest_cycle};
use crate::record::{GroupKey, Parsed, Record, parse_line};

/// Groups evaluated between progress log lines.
const PROGRESS_INTERVAL: usize = 100_000;

/// Accumulates every group's edges in memory, in any input order.
#[derive(Debug, Default)]
pub struct GroupTable {
    interner: Interner,
    groups: HashMap<GroupKey, Vec<(u32, u32)>>,
    /// First-seen order of keys; evaluation iterates in this order.
    order: Vec<GroupKey>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files one record's edge under its group, creating the group on the
    /// key's first appearance. Duplicate edges are retained.
    pub fn push(&mut self, record: &Record) {
        let s = self.interner.intern(&record.source);
        let d = self.interner.intern(&record.destination);
        match self.groups.entry(record.key.clone()) {
            Entry::Occupied(entry) => entry.into_mut().push((s, d)),
            Entry::Vacant(entry) => {
                self.order.push(record.key.clone());
                entry.insert(vec![(s, d)]);
            }
        }
    }

    /// Number of distinct groups seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Evaluates every group in first-seen order and reduces to the
    /// winning group.
    pub fn finish(self) -> Best {
        let mut best = Best::new();
        let total = self.order.len();

        for (i, key) in self.order.iter().enumerate() {
            if (i + 1) % PROGRESS_INTERVAL == 0 {
                log::info!("evaluated {}/{} groups", i + 1, total);
            }
            let edges = &self.groups[key];
            // A simple cycle cannot use more edges than the group has.
            if edges.len() < best.length {
                continue;
            }
            let adj = compact_adjacency(edges);
            best.consider(key, longest_cycle(&adj));
        }

        best
    }
}

/// Consumes an entire record stream and returns the winning group.
pub fn run<R: BufRead>(reader: R) -> std::io::Result<Best> {
    let mut table = GroupTable::new();
    for line in reader.lines() {
        let line = line?;
        if let Parsed::Record(record) = parse_line(&line) {
            table.push(&record);
        }
    }
    Ok(table.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_str(input: &str) -> Best {
        run(Cursor::new(input)).unwrap()
    }

    #[test]
    fn test_empty_input_has_no_winner() {
        let best = run_str("");
        assert!(best.is_empty());
        assert_eq!(best.length, 0);
    }

    #[test]
    fn test_single_group_triangle() {
        let best = run_str("A|B|c1|01\nB|C|c1|01\nC|A|c1|01\n");
        assert_eq!(best.key, Some(GroupKey::new("c1", "01")));
        assert_eq!(best.length, 3);
    }

    #[test]
    fn test_acyclic_groups_yield_no_winner() {
        let best = run_str("A|B|c1|01\nB|C|c1|01\nX|Y|c2|01\n");
        assert!(best.is_empty());
    }

    #[test]
    fn test_longest_group_wins_across_groups() {
        // c1 has a 2-cycle, c2 a 3-cycle.
        let input = "A|B|c1|01\nB|A|c1|01\nX|Y|c2|01\nY|Z|c2|01\nZ|X|c2|01\n";
        let best = run_str(input);
        assert_eq!(best.key, Some(GroupKey::new("c2", "01")));
        assert_eq!(best.length, 3);
    }

    #[test]
    fn test_tie_break_prefers_smaller_key_regardless_of_input_order() {
        // Key ("2","1") arrives first; the equal-length ("1","1") must win.
        let input = "A|B|2|1\nB|A|2|1\nA|B|1|1\nB|A|1|1\n";
        let best = run_str(input);
        assert_eq!(best.key, Some(GroupKey::new("1", "1")));
        assert_eq!(best.length, 2);
    }

    #[test]
    fn test_non_contiguous_group_edges_merge() {
        // The c1 triangle is interleaved with c2 edges; accumulation
        // still assembles the full group.
        let input = "A|B|c1|01\nX|Y|c2|01\nB|C|c1|01\nY|X|c2|01\nC|A|c1|01\n";
        let best = run_str(input);
        assert_eq!(best.key, Some(GroupKey::new("c1", "01")));
        assert_eq!(best.length, 3);
    }

    #[test]
    fn test_malformed_and_blank_lines_are_skipped() {
        let input = "A|B|c1|01\n\ngarbage\nB|A|c1|01\nA|B|c1\n";
        let best = run_str(input);
        assert_eq!(best.length, 2);
    }

    #[test]
    fn test_same_key_in_distinct_groups_by_status() {
        // Same claim id, different status codes: independent graphs.
        let input = "A|B|c1|01\nB|A|c1|02\n";
        let best = run_str(input);
        assert!(best.is_empty(), "edges split across statuses form no cycle");
    }

    #[test]
    fn test_idempotent_across_runs() {
        let input = "A|B|c1|01\nB|A|c1|01\nX|X|c2|01\n";
        assert_eq!(run_str(input), run_str(input));
    }

    #[test]
    fn test_group_table_insertion_order() {
        let mut table = GroupTable::new();
        for line in ["A|B|b|1", "A|B|a|1", "B|A|b|1"] {
            if let Parsed::Record(r) = parse_line(line) {
                table.push(&r);
            }
        }
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.order,
            vec![GroupKey::new("b", "1"), GroupKey::new("a", "1")]
        );
    }
}
