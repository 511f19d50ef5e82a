//! Longest-simple-cycle search for directed routing graphs.
//!
//! This module is standalone: it operates on adjacency lists over dense
//! numeric node ids and knows nothing about routing records or group keys,
//! so it can be tested in isolation.
//!
//! The search enumerates simple paths from every start vertex with an
//! iterative DFS (explicit frame stack, no recursion) and an on-path
//! membership vector for O(1) simple-cycle pruning. An edge back to the
//! start vertex closes a cycle whose length equals the number of vertices
//! currently on the path — one vertex on the path plus a `(v, v)` edge is
//! a self-loop, a cycle of length 1.
//!
//! Enumerating simple paths is exponential in the worst case. Groups are
//! one claim's routing history and stay small in practice, so no
//! memoization is applied; a vertex's best cycle differs per start.

use std::collections::HashMap;

/// A node identifier. Using usize for efficiency; callers map their own names.
pub type NodeId = usize;

// ─────────────────────────────────────────────────────────────────────────────
// Longest simple cycle
// ─────────────────────────────────────────────────────────────────────────────

/// Returns the length in edges of the longest simple cycle in the graph,
/// or 0 if the graph is acyclic.
///
/// Duplicate entries in an adjacency row are parallel edges; each is
/// followed, though parallel edges cannot lengthen a simple cycle.
///
/// # Arguments
/// * `adj` — adjacency list: `adj[u]` = successors of `u`, ids `0..adj.len()`
///
/// # Example
/// ```
/// use routecycle::cycle::longest_cycle;
///
/// // Graph: 0 → 1 → 2 → 0 (a 3-node cycle)
/// let adj = vec![vec![1], vec![2], vec![0]];
/// assert_eq!(longest_cycle(&adj), 3);
/// ```
pub fn longest_cycle(adj: &[Vec<NodeId>]) -> usize {
    let num_nodes = adj.len();
    let mut best = 0;
    let mut on_path = vec![false; num_nodes];

    // Each frame tracks: (node, position in adj[node])
    struct Frame {
        node: NodeId,
        next_neighbor: usize,
    }

    for start in 0..num_nodes {
        // Only vertices with outgoing edges can begin a cycle.
        if adj[start].is_empty() {
            continue;
        }

        let mut path: Vec<Frame> = vec![Frame {
            node: start,
            next_neighbor: 0,
        }];
        on_path[start] = true;

        while let Some(frame) = path.last_mut() {
            let v = frame.node;

            if frame.next_neighbor < adj[v].len() {
                let w = adj[v][frame.next_neighbor];
                frame.next_neighbor += 1;

                if w == start {
                    // Closed a cycle: its edge count equals the vertices
                    // on the path, self-loops included (path length 1).
                    best = best.max(path.len());
                } else if !on_path[w] {
                    on_path[w] = true;
                    path.push(Frame {
                        node: w,
                        next_neighbor: 0,
                    });
                }
            } else {
                // All successors tried — backtrack.
                on_path[v] = false;
                path.pop();
            }
        }
    }

    best
}

/// Remaps arbitrary (non-dense) id pairs to a dense adjacency list.
///
/// The accumulating consumer interns system names globally across all
/// groups; one group touches only a handful of those ids, so its edges
/// are compacted to `0..n` before the search.
pub fn compact_adjacency(pairs: &[(u32, u32)]) -> Vec<Vec<NodeId>> {
    let mut dense: HashMap<u32, NodeId> = HashMap::new();
    let mut adj: Vec<Vec<NodeId>> = Vec::new();

    fn local(id: u32, adj: &mut Vec<Vec<NodeId>>, dense: &mut HashMap<u32, NodeId>) -> NodeId {
        *dense.entry(id).or_insert_with(|| {
            adj.push(Vec::new());
            adj.len() - 1
        })
    }

    for &(s, d) in pairs {
        let si = local(s, &mut adj, &mut dense);
        let di = local(d, &mut adj, &mut dense);
        adj[si].push(di);
    }

    adj
}

// ─────────────────────────────────────────────────────────────────────────────
// Name interning
// ─────────────────────────────────────────────────────────────────────────────

/// Maps string system names to dense numeric ids.
///
/// Bridges the string names appearing in routing records and the numeric
/// ids used by the cycle search.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    names: Vec<String>,
    ids: HashMap<String, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next id on first sight.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Number of distinct names seen.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: u32) -> &str {
        &self.names[id as usize]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Named routing graph
// ─────────────────────────────────────────────────────────────────────────────

/// A directed graph over string-named systems.
///
/// Used by the streaming consumer to hold the single open group: names are
/// interned per group, so the ids are already dense and the adjacency list
/// can be searched directly.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    interner: Interner,
    adj: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directed edge between two named systems, creating the nodes
    /// as needed. Duplicate edges are kept as parallel edges.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_id = self.intern(from);
        let to_id = self.intern(to);
        self.adj[from_id].push(to_id);
        self.edge_count += 1;
    }

    fn intern(&mut self, name: &str) -> NodeId {
        let id = self.interner.intern(name) as NodeId;
        if id == self.adj.len() {
            self.adj.push(Vec::new());
        }
        id
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adj
    }

    /// Length of the longest simple cycle among this graph's edges.
    pub fn longest_cycle(&self) -> usize {
        longest_cycle(&self.adj)
    }
}
