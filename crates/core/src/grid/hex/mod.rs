//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! hexalign deals with two different coordinate systems:
//!
//! ### Axial Coordinates
//!
//! Axial coordinates identify a single cell of the hex grid. The system we use
//! is the [axial coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//!
//! Each cell is named by two integers, `q` and `r`. Axial coordinates are
//! really cube coordinates with the third component dropped: every cell also
//! has an `s` component, and **for every cell, `q + r + s = 0`.** Since `s`
//! can always be derived from the other two, it is never stored. Cube form is
//! still useful for math though, particularly for distances and for rounding
//! a fractional coordinate to the cell that contains it.
//!
//! ### World Coordinates
//!
//! World coordinates are the continuous 3D coordinates of the host that places
//! objects. The grid lies flat in the world's `x`/`z` plane, and `y` is "up".
//! Only `x` and `z` ever take part in hex math. The center of cell `(0, 0)` is
//! always the world origin.
//!
//! Converting between the two systems depends on two pieces of configuration:
//!
//! - [Orientation]: whether cells are flat-topped or pointy-topped. The two
//!   layouts differ by a 30° rotation.
//! - The **outer** radius of each cell, i.e. the distance from its center to
//!   any of its vertices. Inner radii (center to edge midpoint) are accepted
//!   during configuration, but are converted to outer radii once up front via
//!   [convert_radius].
//!
//! Use [world_to_axial] to find the cell containing a world position, and
//! [axial_to_world] to find the center of a cell in world space.

mod data_structure;
mod layout;
mod unit;

pub use self::{data_structure::*, layout::*, unit::*};
