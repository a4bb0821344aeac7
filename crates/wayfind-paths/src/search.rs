//! Generic A* over any [`SearchSpace`].

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::pqueue::IndexedPriorityQueue;
use crate::traits::{Cost, SearchSpace};

// ---------------------------------------------------------------------------
// Per-search node state
// ---------------------------------------------------------------------------

/// Scratch state A* keeps for every node it has reached.
///
/// Records live in a side table owned by [`PathSearch`] and are discarded
/// when the next search starts, so the graph itself never carries search
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRecord<N> {
    g: Cost,
    h: Cost,
    predecessor: Option<N>,
}

impl<N: Copy> NodeRecord<N> {
    pub fn new(g: Cost, h: Cost, predecessor: Option<N>) -> Self {
        Self { g, h, predecessor }
    }

    /// Best known cost from the search source.
    #[inline]
    pub fn g(&self) -> Cost {
        self.g
    }

    #[inline]
    pub fn set_g(&mut self, g: Cost) {
        self.g = g;
    }

    /// Heuristic estimate to the nearest destination.
    #[inline]
    pub fn h(&self) -> Cost {
        self.h
    }

    /// Estimated total cost through this node, `g + h`.
    #[inline]
    pub fn f(&self) -> Cost {
        self.g + self.h
    }

    /// The node preceding this one on the best known path; `None` for the
    /// source.
    #[inline]
    pub fn predecessor(&self) -> Option<N> {
        self.predecessor
    }

    #[inline]
    pub fn set_predecessor(&mut self, predecessor: Option<N>) {
        self.predecessor = predecessor;
    }
}

/// Open-list priority: lowest F first, then lowest H (closer to the goal),
/// then earliest insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchKey {
    f: Cost,
    h: Cost,
    seq: u64,
}

impl PartialEq for SearchKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchKey {}

impl PartialOrd for SearchKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.h.total_cmp(&other.h))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A successful search: the nodes after the source, in travel order, and
/// the total cost of reaching the last one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchPath<N> {
    pub nodes: Vec<N>,
    pub cost: Cost,
}

impl<N> SearchPath<N> {
    /// The destination that was reached, or `None` when the source already
    /// was one.
    pub fn destination(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Convert every node, e.g. from an arena index to a grid cell.
    pub fn map<M>(self, f: impl FnMut(N) -> M) -> SearchPath<M> {
        SearchPath {
            nodes: self.nodes.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable A* state: open list, closed set and the node record table.
///
/// Every call to [`search`](Self::search) starts from empty tables; keeping a
/// `PathSearch` around only saves reallocation.
#[derive(Debug)]
pub struct PathSearch<N> {
    open: IndexedPriorityQueue<N, SearchKey>,
    closed: HashSet<N>,
    records: HashMap<N, NodeRecord<N>>,
    nbuf: Vec<N>,
    seq: u64,
    expanded: usize,
}

impl<N: Copy + Eq + Hash + Debug> Default for PathSearch<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Eq + Hash + Debug> PathSearch<N> {
    pub fn new() -> Self {
        Self {
            open: IndexedPriorityQueue::new(),
            closed: HashSet::new(),
            records: HashMap::new(),
            nbuf: Vec::with_capacity(8),
            seq: 0,
            expanded: 0,
        }
    }

    /// Number of nodes closed by the most recent search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The record the most recent search kept for `node`, if it reached it.
    pub fn record(&self, node: N) -> Option<&NodeRecord<N>> {
        self.records.get(&node)
    }

    /// Find a cheapest path from `source` to any node in `destinations`.
    ///
    /// Returns the nodes after `source` up to and including the destination
    /// that was reached, or `None` if none is reachable. An empty
    /// `destinations` slice never matches. If `source` is itself a
    /// destination the path is empty with cost 0.
    pub fn search<S, C>(
        &mut self,
        space: &S,
        source: N,
        destinations: &[N],
        ctx: &C,
    ) -> Option<SearchPath<N>>
    where
        S: SearchSpace<C, Node = N> + ?Sized,
        C: ?Sized,
    {
        self.reset();
        if destinations.is_empty() {
            debug!("path search from {source:?} has no destinations");
            return None;
        }

        let goals: HashSet<N> = destinations.iter().copied().collect();
        let h = space.calculate_h(source, destinations);
        self.records.insert(source, NodeRecord::new(0.0, h, None));
        self.push_open(source, h, h);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let reached = loop {
            if self.open.is_empty() {
                break None;
            }
            let current = self.open.top().id;
            if goals.contains(&current) {
                break Some(current);
            }

            self.open.pop();
            self.closed.insert(current);
            self.expanded += 1;
            let current_g = self.records[&current].g;
            trace!("expanding {current:?} at g={current_g}");

            nbuf.clear();
            space.neighbours(current, ctx, &mut nbuf);

            for &next in nbuf.iter() {
                if self.closed.contains(&next) {
                    continue;
                }
                let tentative_g = current_g + space.cost_to_neighbour(current, next, ctx);

                if let Some(rec) = self.records.get_mut(&next) {
                    // Seen but not closed, so it is on the open list.
                    if tentative_g < rec.g {
                        rec.g = tentative_g;
                        rec.predecessor = Some(current);
                        let seq = self.open.get_element(&next).key.seq;
                        let key = SearchKey {
                            f: rec.f(),
                            h: rec.h,
                            seq,
                        };
                        self.open.update_key(&next, key);
                    }
                    continue;
                }

                let h = space.calculate_h(next, destinations);
                self.records
                    .insert(next, NodeRecord::new(tentative_g, h, Some(current)));
                self.push_open(next, tentative_g + h, h);
            }
        };

        self.nbuf = nbuf;

        let Some(goal) = reached else {
            debug!(
                "no path from {source:?}: open list exhausted after expanding {} nodes",
                self.expanded
            );
            return None;
        };

        let path = self.reconstruct(source, goal);
        debug!(
            "path from {source:?} reached {goal:?}: {} steps, cost {}, {} nodes expanded",
            path.nodes.len(),
            path.cost,
            self.expanded
        );
        Some(path)
    }

    fn reset(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.records.clear();
        self.seq = 0;
        self.expanded = 0;
    }

    fn push_open(&mut self, node: N, f: Cost, h: Cost) {
        let seq = self.seq;
        self.seq += 1;
        let inserted = self.open.insert(node, SearchKey { f, h, seq }, ());
        assert!(inserted.is_ok(), "{node:?} pushed onto the open list twice");
    }

    fn reconstruct(&self, source: N, goal: N) -> SearchPath<N> {
        let cost = self.records[&goal].g;
        let mut nodes = Vec::new();
        let mut at = goal;
        while at != source {
            nodes.push(at);
            match self.records[&at].predecessor {
                Some(prev) => at = prev,
                None => break,
            }
        }
        nodes.reverse();
        SearchPath { nodes, cost }
    }
}

/// One-shot A* with freshly allocated search state.
pub fn find_path<S, C>(
    space: &S,
    source: S::Node,
    destinations: &[S::Node],
    ctx: &C,
) -> Option<SearchPath<S::Node>>
where
    S: SearchSpace<C> + ?Sized,
    C: ?Sized,
{
    PathSearch::new().search(space, source, destinations, ctx)
}
