pub mod hex;

use crate::{
    grid::hex::{
        axial_to_world, convert_radius, hex_vertices, world_to_axial,
        AxialPoint, AxialPointSet, HasAxialPosition, HexPolygon,
        OccupancyFill, Orientation, RadiusKind,
    },
    timed,
    util::unit::WorldPosition,
    GridConfig,
};
use anyhow::Context;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hex grid, ready to answer questions about world positions. A grid is
/// created from a [GridConfig], and from there can be used to snap or project
/// any number of points.
///
/// Config options cannot be changed after creating a grid, but grids are very
/// cheap to create so if you need to change the config, just create a new
/// grid. A grid holds no state between calls; every operation is a pure
/// function of the config and its arguments.
#[derive(Copy, Clone, Debug)]
pub struct HexGrid {
    config: GridConfig,
    /// Cached conversion of the configured radius, so we only have to do it
    /// once
    outer_radius: f64,
}

impl HexGrid {
    /// Initialize a new grid with the given config. Returns an error if the
    /// config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;
        let outer_radius = config.outer_radius()?;
        Ok(Self {
            config,
            outer_radius,
        })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Distance from the center of each cell to any of its vertices, in world
    /// units. This is what all the projection math is based on, regardless of
    /// which kind of radius was configured.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Find the cell that contains a world position
    pub fn world_to_axial(&self, position: WorldPosition) -> AxialPoint {
        world_to_axial(position, self.config.orientation, self.outer_radius)
    }

    /// Get the world position of a cell's center
    pub fn axial_to_world(&self, point: AxialPoint) -> WorldPosition {
        axial_to_world(point, self.config.orientation, self.outer_radius)
    }

    /// Get the wireframe outline of a cell
    pub fn polygon(&self, point: AxialPoint) -> HexPolygon {
        hex_vertices(
            self.axial_to_world(point),
            self.config.orientation,
            self.config.radius_kind,
            self.outer_radius,
        )
    }

    /// Snap a world position to the center of the cell that contains it. This
    /// is idempotent: snapping a cell center gives back the same center. The
    /// snapped position always lies on the grid plane (`y = 0`).
    pub fn snap(&self, position: WorldPosition) -> WorldPosition {
        let point = self.world_to_axial(position);
        let snapped = self.axial_to_world(point);
        trace!("Snapped {} to cell {} at {}", position, point, snapped);
        snapped
    }

    /// Project a group of world positions into the set of cells they occupy.
    /// Positions that fall in the same cell collapse into one entry.
    pub fn occupancy(
        &self,
        positions: impl IntoIterator<Item = WorldPosition>,
    ) -> AxialPointSet {
        positions
            .into_iter()
            .map(|position| self.world_to_axial(position))
            .collect()
    }

    /// Find the empty cells that border a group of placed objects. Every
    /// object position is projected onto the grid, then a flood fill grows
    /// out from the origin cell through the occupied cells. The result is the
    /// boundary of that fill: every empty cell adjacent to the occupied region
    /// that the origin is part of, in discovery order.
    ///
    /// - If there are no positions at all, the result is just the origin cell.
    /// - If the origin cell isn't occupied, nothing can be reached, so the
    ///   result is also just the origin cell.
    /// - Occupied cells that aren't connected to the origin's region are
    ///   ignored.
    pub fn empty_boundary(
        &self,
        positions: impl IntoIterator<Item = WorldPosition>,
    ) -> Vec<BoundaryCell> {
        let occupied = self.occupancy(positions);
        let occupied_count = occupied.len();

        let fill = timed!(
            "Occupancy fill",
            OccupancyFill::new(AxialPoint::ORIGIN, occupied).run()
        );
        debug!(
            "Filled {} of {} occupied cells, found {} empty boundary cells",
            fill.visited().len(),
            occupied_count,
            fill.frontier().len()
        );
        if !fill.unreached().is_empty() {
            debug!(
                "{} occupied cells are not connected to the origin: {:?}",
                fill.unreached().len(),
                fill.unreached()
            );
        }

        fill.into_frontier()
            .into_iter()
            .map(|point| BoundaryCell {
                point,
                center: self.axial_to_world(point),
                polygon: self.polygon(point),
            })
            .collect()
    }
}

/// One empty cell on the boundary of an occupied region, with everything a
/// host needs to place something there or draw it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCell {
    /// The cell's axial coordinate
    pub point: AxialPoint,
    /// The cell's center, in world space
    pub center: WorldPosition,
    /// The cell's outline, in world space
    pub polygon: HexPolygon,
}

impl HasAxialPosition for BoundaryCell {
    fn position(&self) -> AxialPoint {
        self.point
    }
}

/// Snap a world position to the center of its cell, without building a
/// [HexGrid] first. Returns an error if the radius is negative, NaN or
/// infinite.
pub fn snap_to_grid(
    position: WorldPosition,
    orientation: Orientation,
    radius_kind: RadiusKind,
    radius: f64,
) -> anyhow::Result<WorldPosition> {
    let outer_radius = convert_radius(radius_kind, radius)?;
    let point = world_to_axial(position, orientation, outer_radius);
    Ok(axial_to_world(point, orientation, outer_radius))
}

/// Find the empty cells bordering a group of placed objects, without building
/// a [HexGrid] first. Outlines are drawn from the outer radius. See
/// [HexGrid::empty_boundary] for details.
///
/// The radius must already be validated as positive and finite.
pub fn compute_empty_boundary(
    positions: impl IntoIterator<Item = WorldPosition>,
    orientation: Orientation,
    outer_radius: f64,
) -> Vec<BoundaryCell> {
    let grid = HexGrid {
        config: GridConfig {
            radius: outer_radius,
            radius_kind: RadiusKind::Outer,
            orientation,
        },
        outer_radius,
    };
    grid.empty_boundary(positions)
}
