use crate::grid::hex::{AxialPoint, HasAxialPosition};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::HashSet;

/// A set of axial points
pub type AxialPointSet = HashSet<AxialPoint, FnvBuildHasher>;
/// An ORDERED set of axial points. This has some extra memory overhead, so we
/// should only use it when we actually need the ordering.
pub type AxialPointIndexSet = IndexSet<AxialPoint, FnvBuildHasher>;

/// Collect the cells of a group of positioned items into a set. Items that
/// share a cell collapse into a single entry.
pub fn occupancy<T: HasAxialPosition>(
    items: impl IntoIterator<Item = T>,
) -> AxialPointSet {
    items.into_iter().map(|item| item.position()).collect()
}

/// A flood fill that grows outward from a seed cell through a set of occupied
/// cells, and finds the empty cells that border them.
///
/// The fill tracks three sets:
///
/// - The **frontier**: candidate cells, initially just the seed. Once the fill
///   finishes, these are the empty cells that border the occupied region.
/// - The **occupied** cells that haven't been reached yet
/// - The **visited** cells: occupied cells that have been reached and
///   absorbed into the region
///
/// Each step finds the first frontier cell that is also occupied, moves it
/// from occupied to visited, and replaces it in the frontier with its
/// unvisited neighbors. When no frontier cell is occupied, the fill is done.
/// Every step removes one occupied cell, so this always terminates.
///
/// The fill only spreads through occupied cells that are connected to the
/// seed. Occupied cells in a separate island are never visited; they stay in
/// [Self::unreached] and contribute nothing to the frontier.
#[derive(Clone, Debug, Default)]
pub struct OccupancyFill {
    frontier: AxialPointIndexSet,
    occupied: AxialPointSet,
    visited: AxialPointSet,
}

impl OccupancyFill {
    /// Start a new fill at a single seed cell
    pub fn new(seed: AxialPoint, occupied: AxialPointSet) -> Self {
        let mut frontier = AxialPointIndexSet::default();
        frontier.insert(seed);
        Self::from_parts(frontier, occupied, AxialPointSet::default())
    }

    /// Resume a fill from an arbitrary state. The visited set is subtracted
    /// from the frontier up front, so a visited cell can never be a candidate.
    pub fn from_parts(
        mut frontier: AxialPointIndexSet,
        occupied: AxialPointSet,
        visited: AxialPointSet,
    ) -> Self {
        frontier.retain(|point| !visited.contains(point));
        Self {
            frontier,
            occupied,
            visited,
        }
    }

    /// Run the fill to completion
    pub fn run(mut self) -> Self {
        while let Some(point) = self.next_match() {
            self.absorb(point);
        }
        self
    }

    /// Find the first frontier cell that is still waiting to be matched, if
    /// any. `None` means the fill is done.
    fn next_match(&self) -> Option<AxialPoint> {
        if self.occupied.is_empty() {
            return None;
        }
        self.frontier
            .iter()
            .copied()
            .find(|point| self.occupied.contains(point))
    }

    /// Absorb an occupied frontier cell into the visited region, and replace
    /// it in the frontier with its unvisited neighbors
    fn absorb(&mut self, point: AxialPoint) {
        self.occupied.remove(&point);
        self.visited.insert(point);
        self.frontier.extend(point.adjacents());

        let visited = &self.visited; // cause closure capturing is kinda dumb
        self.frontier.retain(|point| !visited.contains(point));
    }

    /// Cells that are candidates for expansion. After [Self::run], these are
    /// the empty cells bordering the occupied region, in discovery order.
    pub fn frontier(&self) -> &AxialPointIndexSet {
        &self.frontier
    }

    /// Move the frontier out of this struct
    pub fn into_frontier(self) -> AxialPointIndexSet {
        self.frontier
    }

    /// Occupied cells that have been reached by the fill
    pub fn visited(&self) -> &AxialPointSet {
        &self.visited
    }

    /// Occupied cells that have **not** been reached by the fill. After
    /// [Self::run], these are the occupied cells that aren't connected to the
    /// seed.
    pub fn unreached(&self) -> &AxialPointSet {
        &self.occupied
    }
}

/// Expand a frontier through a set of occupied cells until no frontier cell is
/// occupied, and return the final frontier. See [OccupancyFill] for a full
/// description of the algorithm.
pub fn expand_frontier(
    frontier: AxialPointIndexSet,
    occupied: AxialPointSet,
    visited: AxialPointSet,
) -> AxialPointIndexSet {
    OccupancyFill::from_parts(frontier, occupied, visited)
        .run()
        .into_frontier()
}
