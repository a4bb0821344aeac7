//! Occupancy-aware navigation grid with world-space path queries.

use log::{debug, trace, warn};
use wayfind_core::{Point, Range, WorldPoint};

use crate::config::{Connectivity, NavConfig};
use crate::error::ConfigError;
use crate::search::{PathSearch, SearchPath};
use crate::traits::{Cost, SearchSpace};
use crate::traversal::Traversal;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Identity of one grid cell: its row-major index into the map's node array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Structural state of one cell.
#[derive(Debug, Clone)]
pub struct GridNode<E> {
    pos: Point,
    occupant: Option<E>,
}

impl<E: Copy> GridNode<E> {
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The entity currently standing on this cell. This is a handle, not
    /// ownership; the entity lives elsewhere.
    #[inline]
    pub fn occupant(&self) -> Option<E> {
        self.occupant
    }
}

/// Source of terrain dimensions.
pub trait Terrain {
    /// Grid size: `x` is the column count, `y` the row count.
    fn size(&self) -> Point;
}

impl Terrain for Range {
    fn size(&self) -> Point {
        Range::size(*self)
    }
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// World-space route produced by [`NavMap::find_path`].
///
/// Iterating yields waypoints in travel order and consumes them: the first
/// is the centre of the source cell, the last is whichever requested
/// destination point lies nearest to the final cell.
#[derive(Debug, Clone)]
pub struct Path {
    waypoints: std::vec::IntoIter<WorldPoint>,
    cells: Vec<Point>,
    cost: Cost,
}

impl Path {
    /// Cells stepped through after the source cell.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Total search cost in cell steps.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Waypoints not yet consumed.
    pub fn remaining(&self) -> &[WorldPoint] {
        self.waypoints.as_slice()
    }

    /// The final waypoint, if any remain.
    pub fn destination(&self) -> Option<WorldPoint> {
        self.remaining().last().copied()
    }
}

impl Iterator for Path {
    type Item = WorldPoint;

    fn next(&mut self) -> Option<WorldPoint> {
        self.waypoints.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.waypoints.size_hint()
    }
}

impl ExactSizeIterator for Path {}

impl std::iter::FusedIterator for Path {}

// ---------------------------------------------------------------------------
// NavMap
// ---------------------------------------------------------------------------

/// A rectangular navigation grid over one terrain.
///
/// Holds one node per cell together with the entity (if any) occupying it,
/// and answers path queries in world coordinates. `E` is the occupant
/// handle, typically an entity id.
///
/// Searches borrow the map immutably, so occupancy cannot change while one
/// is running.
#[derive(Debug, Clone)]
pub struct NavMap<E> {
    bounds: Range,
    config: NavConfig,
    nodes: Vec<GridNode<E>>,
}

impl<E: Copy + Eq> NavMap<E> {
    /// A `width × height` map with the default configuration (unit cells
    /// at the world origin, 4-way movement).
    ///
    /// Negative dimensions produce an empty map.
    pub fn new(width: i32, height: i32) -> Self {
        Self::build(Range::with_size(width, height), NavConfig::default())
    }

    pub fn with_config(width: i32, height: i32, config: NavConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(Range::with_size(width, height), config))
    }

    /// A map sized to `terrain`.
    pub fn for_terrain(terrain: &impl Terrain, config: NavConfig) -> Result<Self, ConfigError> {
        let size = terrain.size();
        Self::with_config(size.x, size.y, config)
    }

    fn build(bounds: Range, config: NavConfig) -> Self {
        let nodes: Vec<GridNode<E>> = bounds
            .iter()
            .map(|pos| GridNode {
                pos,
                occupant: None,
            })
            .collect();
        debug!(
            "navigation map {}x{} ({} cells, cell size {}, {:?})",
            bounds.width(),
            bounds.height(),
            nodes.len(),
            config.cell_size,
            config.connectivity
        );
        Self {
            bounds,
            config,
            nodes,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    // -----------------------------------------------------------------------
    // Cells and nodes
    // -----------------------------------------------------------------------

    /// Node for `cell`, or `None` outside the map.
    #[inline]
    pub fn node_id(&self, cell: Point) -> Option<NodeId> {
        if !self.bounds.contains(cell) {
            return None;
        }
        Some(NodeId((cell.y * self.bounds.width() + cell.x) as u32))
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this map.
    #[inline]
    pub fn node(&self, id: NodeId) -> &GridNode<E> {
        &self.nodes[id.index()]
    }

    /// Iterate over every node in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &GridNode<E>> {
        self.nodes.iter()
    }

    // -----------------------------------------------------------------------
    // World <-> grid
    // -----------------------------------------------------------------------

    /// The cell containing `p`, clamped onto the map.
    ///
    /// Returns `None` only for an empty map or a non-finite point.
    pub fn world_to_cell(&self, p: WorldPoint) -> Option<Point> {
        if !p.is_finite() {
            return None;
        }
        let rel = p - self.config.origin;
        let size = self.config.cell_size;
        let raw = Point::new((rel.x / size).floor() as i32, (rel.y / size).floor() as i32);
        let cell = self.bounds.clamp(raw)?;
        if cell != raw {
            trace!("world point {p} outside map, clamped to cell {cell}");
        }
        Some(cell)
    }

    /// World-space centre of `cell`.
    pub fn cell_center(&self, cell: Point) -> WorldPoint {
        let offset = WorldPoint::new(cell.x as f32 + 0.5, cell.y as f32 + 0.5);
        self.config.origin + offset * self.config.cell_size
    }

    /// Cells overlapped by the world-space rectangle spanned by `a` and `b`,
    /// clipped to the map. Useful as an entity's footprint.
    pub fn cells_in_rect(&self, a: WorldPoint, b: WorldPoint) -> Vec<Point> {
        let (Some(ca), Some(cb)) = (self.world_to_cell(a), self.world_to_cell(b)) else {
            return Vec::new();
        };
        let min = Point::new(ca.x.min(cb.x), ca.y.min(cb.y));
        let max = Point::new(ca.x.max(cb.x), ca.y.max(cb.y));
        Range::new(min.x, min.y, max.x + 1, max.y + 1).iter().collect()
    }

    // -----------------------------------------------------------------------
    // Occupancy
    // -----------------------------------------------------------------------

    /// Whether any of `cells` currently has an occupant.
    pub fn are_occupied<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        cells.into_iter().any(|c| self.lookup_entity(c).is_some())
    }

    #[inline]
    pub fn is_occupied(&self, cell: Point) -> bool {
        self.lookup_entity(cell).is_some()
    }

    /// Set (`Some`) or clear (`None`) the occupant of every cell in `cells`.
    /// Cells outside the map are skipped.
    pub fn mark_occupied<I>(&mut self, cells: I, occupant: Option<E>)
    where
        I: IntoIterator<Item = Point>,
    {
        for cell in cells {
            match self.node_id(cell) {
                Some(id) => self.nodes[id.index()].occupant = occupant,
                None => warn!("ignoring occupancy change for cell {cell} outside {}", self.bounds),
            }
        }
    }

    /// The occupant of `cell`; `None` when empty or outside the map.
    #[inline]
    pub fn lookup_entity(&self, cell: Point) -> Option<E> {
        self.node_id(cell).and_then(|id| self.nodes[id.index()].occupant)
    }

    /// Free every cell held by `occupant`; returns how many were freed.
    pub fn clear_occupant(&mut self, occupant: E) -> usize {
        let mut freed = 0;
        for node in self.nodes.iter_mut().filter(|n| n.occupant == Some(occupant)) {
            node.occupant = None;
            freed += 1;
        }
        freed
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.occupant.is_some()).count()
    }

    // -----------------------------------------------------------------------
    // Path queries
    // -----------------------------------------------------------------------

    /// Grid-level search from `source` to the cheapest reachable of
    /// `destinations` under `rules`.
    ///
    /// Out-of-map destinations are ignored; an out-of-map source, or no
    /// in-map destination, yields `None`.
    pub fn find_path_cells<T>(
        &self,
        source: Point,
        destinations: &[Point],
        rules: &T,
    ) -> Option<SearchPath<Point>>
    where
        T: Traversal<E> + ?Sized,
    {
        let src = self.node_id(source)?;
        let mut dests: Vec<NodeId> = destinations.iter().filter_map(|&c| self.node_id(c)).collect();
        dests.sort_unstable();
        dests.dedup();
        let path = PathSearch::new().search(self, src, &dests, rules)?;
        Some(path.map(|id| self.nodes[id.index()].pos))
    }

    /// World-space search from `source` to whichever of `destinations` is
    /// cheapest to reach.
    ///
    /// Points are discretized to cells (clamping onto the map). The result
    /// starts at the source cell's centre, passes through the centre of
    /// every cell on the route and ends at the requested destination point
    /// nearest the final cell.
    pub fn find_path<T>(
        &self,
        source: WorldPoint,
        destinations: &[WorldPoint],
        rules: &T,
    ) -> Option<Path>
    where
        T: Traversal<E> + ?Sized,
    {
        let src_cell = self.world_to_cell(source)?;
        let dest_cells: Vec<Point> = destinations
            .iter()
            .filter_map(|&p| self.world_to_cell(p))
            .collect();
        let route = self.find_path_cells(src_cell, &dest_cells, rules)?;

        let mut waypoints = Vec::with_capacity(route.nodes.len() + 2);
        waypoints.push(self.cell_center(src_cell));
        waypoints.extend(route.nodes.iter().map(|&c| self.cell_center(c)));
        let last = waypoints[waypoints.len() - 1];
        let nearest = destinations
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .min_by(|a, b| a.distance_squared(last).total_cmp(&b.distance_squared(last)));
        waypoints.extend(nearest);

        Some(Path {
            waypoints: waypoints.into_iter(),
            cells: route.nodes,
            cost: route.cost,
        })
    }

    #[inline]
    fn enterable<T>(&self, cell: Point, rules: &T) -> bool
    where
        T: Traversal<E> + ?Sized,
    {
        self.node_id(cell)
            .is_some_and(|id| rules.can_enter(cell, self.nodes[id.index()].occupant))
    }
}

impl<E, T> SearchSpace<T> for NavMap<E>
where
    E: Copy + Eq,
    T: Traversal<E> + ?Sized,
{
    type Node = NodeId;

    fn neighbours(&self, node: NodeId, rules: &T, buf: &mut Vec<NodeId>) {
        let cell = self.nodes[node.index()].pos;
        let mut push = |n: Point| {
            if let Some(id) = self.node_id(n) {
                buf.push(id);
            }
        };
        match self.config.connectivity {
            Connectivity::Four => {
                for n in cell.neighbors_4() {
                    if self.enterable(n, rules) {
                        push(n);
                    }
                }
            }
            Connectivity::Eight => {
                for n in cell.neighbors_8() {
                    if !self.enterable(n, rules) {
                        continue;
                    }
                    if cell.is_diagonal_to(n)
                        && !(self.enterable(Point::new(n.x, cell.y), rules)
                            && self.enterable(Point::new(cell.x, n.y), rules))
                    {
                        continue;
                    }
                    push(n);
                }
            }
        }
    }

    fn cost_to_neighbour(&self, from: NodeId, to: NodeId, rules: &T) -> Cost {
        rules.step_cost(self.nodes[from.index()].pos, self.nodes[to.index()].pos)
    }

    fn calculate_h(&self, node: NodeId, destinations: &[NodeId]) -> Cost {
        let cell = self.nodes[node.index()].pos;
        destinations
            .iter()
            .map(|d| self.config.connectivity.heuristic(cell, self.nodes[d.index()].pos))
            .fold(Cost::INFINITY, Cost::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::{AvoidOccupied, AvoidOthers, IgnoreOccupancy};
    use proptest::prelude::*;
    use std::f32::consts::SQRT_2;

    type Map = NavMap<u32>;

    fn at(x: f32, y: f32) -> WorldPoint {
        WorldPoint::new(x, y)
    }

    fn center(x: i32, y: i32) -> WorldPoint {
        at(x as f32 + 0.5, y as f32 + 0.5)
    }

    fn assert_steps_adjacent(map: &Map, from: Point, cells: &[Point]) {
        let mut prev = from;
        for &c in cells {
            assert!(map.bounds().contains(c));
            assert!(crate::chebyshev(prev, c) == 1, "{prev} -> {c} is not a single step");
            prev = c;
        }
    }

    /// Unit-step distance over unoccupied cells by breadth-first search.
    fn bfs_steps(map: &Map, from: Point, to: Point) -> Option<usize> {
        let mut dist = std::collections::HashMap::from([(from, 0usize)]);
        let mut queue = std::collections::VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            let d = dist[&p];
            if p == to {
                return Some(d);
            }
            for n in p.neighbors_4() {
                if map.bounds().contains(n) && !map.is_occupied(n) && !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }

    #[test]
    fn open_grid_corner_to_corner() {
        let map = Map::new(5, 5);
        let path = map.find_path(center(0, 0), &[center(4, 4)], &AvoidOccupied).unwrap();
        assert_eq!(path.cost(), 8.0);
        assert_eq!(path.cells().len(), 8);
        assert_eq!(path.cells().last(), Some(&Point::new(4, 4)));
        assert_steps_adjacent(&map, Point::ZERO, path.cells());

        let waypoints: Vec<WorldPoint> = path.collect();
        assert_eq!(waypoints.len(), 10);
        assert_eq!(waypoints[0], center(0, 0));
        assert_eq!(waypoints[8], center(4, 4));
        assert_eq!(waypoints[9], center(4, 4));
    }

    #[test]
    fn occupied_centre_forces_equal_cost_detour() {
        let mut map = Map::new(5, 5);
        map.mark_occupied([Point::new(2, 2)], Some(1));
        let path = map.find_path(center(0, 0), &[center(4, 4)], &AvoidOccupied).unwrap();
        assert_eq!(path.cost(), 8.0);
        assert!(!path.cells().contains(&Point::new(2, 2)));
        assert_steps_adjacent(&map, Point::ZERO, path.cells());
    }

    #[test]
    fn surrounded_destination_is_unreachable() {
        let mut map = Map::new(5, 5);
        let goal = Point::new(2, 2);
        map.mark_occupied(goal.neighbors_4(), Some(1));
        assert!(map.find_path(center(0, 0), &[center(2, 2)], &AvoidOccupied).is_none());

        let mut map8: Map =
            NavMap::with_config(5, 5, NavConfig::default().with_connectivity(Connectivity::Eight))
                .unwrap();
        map8.mark_occupied(goal.neighbors_8(), Some(1));
        assert!(map8.find_path(center(0, 0), &[center(2, 2)], &AvoidOccupied).is_none());
        // Rules that ignore occupancy walk straight through.
        assert!(map8.find_path(center(0, 0), &[center(2, 2)], &IgnoreOccupancy).is_some());
    }

    #[test]
    fn boxed_in_source_is_unreachable() {
        let mut map = Map::new(5, 5);
        map.mark_occupied([Point::new(1, 0), Point::new(0, 1)], Some(9));
        assert!(map.find_path(center(0, 0), &[center(4, 4)], &AvoidOccupied).is_none());
    }

    #[test]
    fn are_occupied_iff_any_marked() {
        let mut map = Map::new(4, 4);
        let cells = [Point::new(0, 0), Point::new(1, 2), Point::new(3, 3)];
        assert!(!map.are_occupied(cells));
        map.mark_occupied([Point::new(1, 2)], Some(5));
        assert!(map.are_occupied(cells));
        assert!(!map.are_occupied([Point::new(0, 0), Point::new(3, 3)]));
        map.mark_occupied([Point::new(1, 2)], None);
        assert!(!map.are_occupied(cells));
        assert!(!map.are_occupied(Vec::<Point>::new()));
    }

    #[test]
    fn lookup_outside_map_is_none() {
        let mut map = Map::new(3, 3);
        map.mark_occupied([Point::new(0, 0)], Some(2));
        assert_eq!(map.lookup_entity(Point::new(0, 0)), Some(2));
        assert_eq!(map.lookup_entity(Point::new(-1, 0)), None);
        assert_eq!(map.lookup_entity(Point::new(0, 3)), None);
        assert!(!map.is_occupied(Point::new(7, 7)));
    }

    #[test]
    fn mark_occupied_skips_cells_outside_map() {
        let mut map = Map::new(3, 3);
        map.mark_occupied([Point::new(-1, 1), Point::new(1, 1), Point::new(3, 0)], Some(4));
        assert_eq!(map.occupied_count(), 1);
        assert_eq!(map.lookup_entity(Point::new(1, 1)), Some(4));
        map.mark_occupied(std::iter::empty::<Point>(), Some(8));
        assert_eq!(map.occupied_count(), 1);
    }

    #[test]
    fn clear_occupant_frees_its_footprint() {
        let mut map = Map::new(6, 6);
        let footprint = map.cells_in_rect(at(1.2, 1.2), at(2.8, 2.8));
        assert_eq!(footprint.len(), 4);
        map.mark_occupied(footprint.iter().copied(), Some(3));
        map.mark_occupied([Point::new(5, 5)], Some(4));
        assert_eq!(map.clear_occupant(3), 4);
        assert_eq!(map.occupied_count(), 1);
        assert!(!map.are_occupied(footprint));
    }

    #[test]
    fn nearest_literal_destination_is_appended() {
        let map = Map::new(6, 6);
        // (0, 2) is closer than (3, 0) from the origin cell.
        let dests = [at(3.6, 0.4), at(0.3, 2.7)];
        let path = map.find_path(center(0, 0), &dests, &AvoidOccupied).unwrap();
        assert_eq!(path.cells().last(), Some(&Point::new(0, 2)));
        assert_eq!(path.destination(), Some(at(0.3, 2.7)));
        assert_eq!(path.cost(), 2.0);
    }

    #[test]
    fn nearest_of_points_sharing_a_cell() {
        let map = Map::new(6, 6);
        let dests = [at(4.1, 4.2), at(4.6, 4.55)];
        let path = map.find_path(center(0, 0), &dests, &AvoidOccupied).unwrap();
        assert_eq!(path.destination(), Some(at(4.6, 4.55)));
    }

    #[test]
    fn source_cell_already_a_destination() {
        let map = Map::new(3, 3);
        let mut path = map.find_path(at(0.5, 0.5), &[at(0.7, 0.2)], &AvoidOccupied).unwrap();
        assert!(path.cells().is_empty());
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path.next(), Some(center(0, 0)));
        assert_eq!(path.next(), Some(at(0.7, 0.2)));
        assert_eq!(path.next(), None);
        assert_eq!(path.next(), None);
    }

    #[test]
    fn occupied_destination_needs_permissive_rules() {
        let mut map = Map::new(4, 1);
        map.mark_occupied([Point::new(3, 0)], Some(1));
        assert!(map.find_path(center(0, 0), &[center(3, 0)], &AvoidOccupied).is_none());
        assert!(map.find_path(center(0, 0), &[center(3, 0)], &AvoidOthers(1)).is_some());
    }

    #[test]
    fn mover_can_leave_its_own_footprint() {
        let mut map = Map::new(5, 3);
        map.mark_occupied([Point::new(0, 0), Point::new(1, 0)], Some(7));
        map.mark_occupied([Point::new(0, 1)], Some(9));
        assert!(map.find_path(center(0, 0), &[center(4, 0)], &AvoidOccupied).is_none());
        let path = map.find_path(center(0, 0), &[center(4, 0)], &AvoidOthers(7)).unwrap();
        assert_eq!(path.cost(), 4.0);
    }

    #[test]
    fn eight_way_moves_diagonally() {
        let map: Map =
            NavMap::with_config(5, 5, NavConfig::default().with_connectivity(Connectivity::Eight))
                .unwrap();
        let path = map.find_path(center(0, 0), &[center(4, 4)], &AvoidOccupied).unwrap();
        assert_eq!(path.cells().len(), 4);
        assert!((path.cost() - 4.0 * SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn eight_way_does_not_cut_corners() {
        let mut map: Map =
            NavMap::with_config(5, 5, NavConfig::default().with_connectivity(Connectivity::Eight))
                .unwrap();
        map.mark_occupied([Point::new(1, 0)], Some(1));
        let path = map.find_path(center(0, 0), &[center(4, 4)], &AvoidOccupied).unwrap();
        assert_eq!(path.cells()[0], Point::new(0, 1));
        assert!((path.cost() - (2.0 + 3.0 * SQRT_2)).abs() < 1e-4);
        assert_steps_adjacent(&map, Point::ZERO, path.cells());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let mut map = Map::new(8, 8);
        map.mark_occupied([Point::new(3, 3), Point::new(4, 4), Point::new(2, 5)], Some(1));
        let first = map.find_path(center(0, 0), &[center(7, 7)], &AvoidOccupied).unwrap();
        for _ in 0..5 {
            let again = map.find_path(center(0, 0), &[center(7, 7)], &AvoidOccupied).unwrap();
            assert_eq!(again.cells(), first.cells());
            assert_eq!(again.remaining(), first.remaining());
        }
    }

    #[test]
    fn world_grid_translation() {
        let cfg = NavConfig::default()
            .with_cell_size(2.0)
            .with_origin(at(-10.0, 5.0));
        let map: Map = NavMap::with_config(4, 3, cfg).unwrap();
        assert_eq!(map.world_to_cell(at(-9.0, 5.5)), Some(Point::new(0, 0)));
        assert_eq!(map.world_to_cell(at(-3.9, 9.9)), Some(Point::new(3, 2)));
        assert_eq!(map.cell_center(Point::new(0, 0)), at(-9.0, 6.0));
        assert_eq!(map.cell_center(Point::new(2, 1)), at(-5.0, 8.0));
        // Outside points clamp onto the edge.
        assert_eq!(map.world_to_cell(at(-100.0, 100.0)), Some(Point::new(0, 2)));
        assert_eq!(map.world_to_cell(at(f32::NAN, 0.0)), None);
    }

    #[test]
    fn cells_in_rect_any_corner_order() {
        let map = Map::new(10, 10);
        let a = map.cells_in_rect(at(1.5, 1.5), at(3.2, 2.9));
        let b = map.cells_in_rect(at(3.2, 2.9), at(1.5, 1.5));
        assert_eq!(a.len(), 6);
        assert_eq!(a, b);
        assert_eq!(map.cells_in_rect(at(-5.0, -5.0), at(0.5, 0.5)), vec![Point::ZERO]);
    }

    #[test]
    fn construction() {
        let map: Map = NavMap::for_terrain(&Range::with_size(6, 4), NavConfig::default()).unwrap();
        assert_eq!((map.width(), map.height()), (6, 4));
        assert_eq!(map.nodes().count(), 24);
        let id = map.node_id(Point::new(5, 3)).unwrap();
        assert_eq!(id.index(), 23);
        assert_eq!(map.node(id).pos(), Point::new(5, 3));
        assert_eq!(map.node(id).occupant(), None);

        let bad = NavConfig::default().with_cell_size(0.0);
        assert!(Map::with_config(3, 3, bad).is_err());

        let empty = Map::new(-2, 5);
        assert!(empty.bounds().is_empty());
        assert_eq!(empty.world_to_cell(at(0.0, 0.0)), None);
        assert!(empty.find_path(at(0.0, 0.0), &[at(1.0, 1.0)], &AvoidOccupied).is_none());
    }

    #[test]
    fn find_path_cells_validates_cells() {
        let map = Map::new(4, 4);
        let outside = Point::new(-1, 0);
        assert!(map.find_path_cells(outside, &[Point::new(2, 2)], &AvoidOccupied).is_none());
        assert!(map.find_path_cells(Point::ZERO, &[Point::new(9, 9)], &AvoidOccupied).is_none());
        let path = map
            .find_path_cells(Point::ZERO, &[Point::new(9, 9), Point::new(0, 3)], &AvoidOccupied)
            .unwrap();
        assert_eq!(path.destination(), Some(&Point::new(0, 3)));
    }

    proptest! {
        #[test]
        fn routes_avoid_occupied_cells(
            blocked in prop::collection::vec((0i32..8, 0i32..8), 0..20),
            gx in 0i32..8, gy in 0i32..8,
        ) {
            let mut map = Map::new(8, 8);
            let goal = Point::new(gx, gy);
            map.mark_occupied(
                blocked.iter().map(|&(x, y)| Point::new(x, y)).filter(|&c| c != goal),
                Some(1),
            );
            map.mark_occupied([Point::ZERO], None);
            let expected = bfs_steps(&map, Point::ZERO, goal);
            let found = map.find_path_cells(Point::ZERO, &[goal], &AvoidOccupied);
            prop_assert_eq!(found.as_ref().map(|p| p.cost as usize), expected);
            if let Some(path) = found {
                prop_assert!(!map.are_occupied(path.nodes.iter().copied()));
                prop_assert_eq!(path.nodes.len(), expected.unwrap_or_default());
                let mut prev = Point::ZERO;
                for &c in &path.nodes {
                    prop_assert_eq!(crate::manhattan(prev, c), 1);
                    prev = c;
                }
            }
        }
    }
}
