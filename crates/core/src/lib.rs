//! hexalign snaps freely placed objects onto a hexagonal grid, and finds the
//! empty cells around a group of already placed objects so they can be drawn
//! as a wireframe overlay. This crate contains all the grid logic. Presentation
//! layers (editors, the CLI) are implemented elsewhere.
//!
//! ```
//! use hexalign::{GridConfig, HexGrid, WorldPosition};
//!
//! let grid = HexGrid::new(GridConfig::default()).unwrap();
//! let snapped = grid.snap(WorldPosition::new(7.0, 3.0, 5.0));
//! let overlay = grid.empty_boundary(vec![WorldPosition::ORIGIN, snapped]);
//! println!("{} empty cells", overlay.len());
//! ```
//!
//! See [GridConfig] for details on how the grid can be customized.

mod config;
pub mod editor;
pub mod grid;
pub mod render;
mod util;

pub use crate::{
    config::GridConfig,
    editor::{EditorSession, SceneHost},
    grid::{
        compute_empty_boundary,
        hex::{
            AxialDirection, AxialPoint, AxialVector, HasAxialPosition,
            HexPolygon, Orientation, RadiusKind,
        },
        snap_to_grid, BoundaryCell, HexGrid,
    },
    render::{
        config::RenderConfig, unit::Color3, LineSegment, OverlayRenderer,
    },
    util::unit::WorldPosition,
};
