use std::fmt::Debug;
use std::hash::Hash;

/// Scalar cost type used for edge weights and heuristic estimates.
pub type Cost = f32;

/// A graph that A* can search.
///
/// The graph owns its nodes; [`Node`](Self::Node) is a cheap identity
/// (typically an index into the graph's storage) used as priority-queue and
/// closed-set key. `C` is a caller-chosen context forwarded untouched to
/// [`neighbours`](Self::neighbours) and
/// [`cost_to_neighbour`](Self::cost_to_neighbour), letting one graph serve
/// movers with different traversal rules.
pub trait SearchSpace<C: ?Sized = ()> {
    type Node: Copy + Eq + Hash + Debug;

    /// Append the nodes reachable in one step from `node` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbours(&self, node: Self::Node, ctx: &C, buf: &mut Vec<Self::Node>);

    /// Cost of stepping from `from` to the adjacent `to`. Must be >= 0.
    fn cost_to_neighbour(&self, from: Self::Node, to: Self::Node, ctx: &C) -> Cost;

    /// Estimated cost from `node` to the nearest of `destinations`.
    ///
    /// Must never overestimate (admissible) for search results to be
    /// optimal. This is not checked.
    fn calculate_h(&self, node: Self::Node, destinations: &[Self::Node]) -> Cost;
}
