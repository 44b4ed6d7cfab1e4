//! Open set for the search.
//!
//! Entries are stored in a min-heap keyed by `(f, insertion_order)`. Lower
//! `f` is popped first; ties are broken by insertion order (FIFO), so a run
//! is fully deterministic for a given graph and endpoints.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use gridstar_core::Point;

use crate::node::{NodeId, SearchNode};

/// A candidate waiting in the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierEntry {
    /// Arena handle of the candidate node.
    pub node: NodeId,
    pub position: Point,
    pub g: i32,
    pub f: i32,
}

impl FrontierEntry {
    /// Entry for the node stored at `id`.
    pub fn new(id: NodeId, node: &SearchNode) -> Self {
        Self {
            node: id,
            position: node.position,
            g: node.g,
            f: node.f,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    entry: FrontierEntry,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl Slot {
    #[inline]
    fn key(&self) -> (i32, u64) {
        (self.entry.f, self.seq)
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Wrapped in Reverse for the BinaryHeap: smaller f first, then
        // smaller seq.
        self.key().cmp(&other.key())
    }
}

/// Priority queue of candidate nodes plus a per-position index of the `g`
/// values currently held.
///
/// The index answers [`contains_with_cost_at_most`](Self::contains_with_cost_at_most)
/// without scanning, and gives the same answer a scan over every held entry
/// would.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Slot>>,
    /// position -> (g -> number of held entries with that g)
    costs: HashMap<Point, BTreeMap<i32, usize>>,
    seq: u64,
    high_water: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unconditionally.
    ///
    /// Dominance is the caller's business; see
    /// [`contains_with_cost_at_most`](Self::contains_with_cost_at_most).
    pub fn push(&mut self, entry: FrontierEntry) {
        let seq = self.seq;
        self.seq += 1;
        *self
            .costs
            .entry(entry.position)
            .or_default()
            .entry(entry.g)
            .or_insert(0) += 1;
        self.heap.push(Reverse(Slot { entry, seq }));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the entry with the smallest `f` (FIFO among ties).
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        let Reverse(slot) = self.heap.pop()?;
        self.forget(slot.entry.position, slot.entry.g);
        Some(slot.entry)
    }

    /// Whether some held entry at `position` has a cost of at most `g`.
    pub fn contains_with_cost_at_most(&self, position: Point, g: i32) -> bool {
        self.best_g(position).is_some_and(|best| best <= g)
    }

    /// Smallest `g` among the held entries at `position`.
    pub fn best_g(&self, position: Point) -> Option<i32> {
        self.costs
            .get(&position)
            .and_then(|m| m.keys().next().copied())
    }

    /// Whether any entry at `position` is held.
    pub fn contains(&self, position: Point) -> bool {
        self.costs.contains_key(&position)
    }

    /// Drop every held entry at `position`, returning how many were removed.
    pub fn remove_position(&mut self, position: Point) -> usize {
        let Some(counts) = self.costs.remove(&position) else {
            return 0;
        };
        self.heap.retain(|Reverse(slot)| slot.entry.position != position);
        counts.values().sum()
    }

    /// Held entries in the order they would be popped.
    pub fn entries(&self) -> Vec<FrontierEntry> {
        let mut slots: Vec<&Slot> = self.heap.iter().map(|Reverse(s)| s).collect();
        slots.sort();
        slots.into_iter().map(|s| s.entry).collect()
    }

    /// Number of held entries (duplicates for a position included).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once over the life of the search.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn forget(&mut self, position: Point, g: i32) {
        let Some(counts) = self.costs.get_mut(&position) else {
            return;
        };
        if let Some(n) = counts.get_mut(&g) {
            *n -= 1;
            if *n == 0 {
                counts.remove(&g);
            }
        }
        if counts.is_empty() {
            self.costs.remove(&position);
        }
    }
}
