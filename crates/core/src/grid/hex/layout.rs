//! Conversions between world space and axial space. Everything in here is
//! parameterized on an [Orientation] and an **outer** radius. Inner radii are
//! converted to outer radii once, via [convert_radius], before they get here.

use crate::{grid::hex::AxialPoint, util::unit::WorldPosition};
use anyhow::bail;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_6;
use strum::{Display, EnumIter, EnumString};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The two canonical ways to lay hexagons out on a plane. They differ by a 30°
/// rotation, which swaps the roles of the `x` and `z` world axes.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Two edges of each hexagon run parallel to the world `x` axis. Columns
    /// of cells run along `z`.
    FlatTop,
    /// Two edges of each hexagon run parallel to the world `z` axis. Rows of
    /// cells run along `x`.
    PointyTop,
}

impl Orientation {
    /// Matrix that maps an axial `(q, r)` pair onto the world `(x, z)` plane,
    /// for a hexagon with an outer radius of 1.
    fn forward_matrix(self) -> Matrix2<f64> {
        match self {
            Self::FlatTop => Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3),
            Self::PointyTop => Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5),
        }
    }

    /// Inverse of [Self::forward_matrix]. Maps a world `(x, z)` pair to a
    /// fractional axial `(q, r)` pair, for a hexagon with an outer radius of 1.
    fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::FlatTop => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
            Self::PointyTop => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
        }
    }

    /// Angle (in radians) added to every vertex angle when drawing a cell's
    /// outline. Vertex angles are measured from the `+z` axis towards `+x`.
    pub fn vertex_rotation(self) -> f64 {
        match self {
            Self::FlatTop => -FRAC_PI_6,
            Self::PointyTop => 0.0,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::FlatTop
    }
}

/// Which of a hexagon's two radii a configured length refers to.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RadiusKind {
    /// Circumradius: distance from the center to a vertex
    Outer,
    /// Inradius: distance from the center to the midpoint of an edge
    Inner,
}

impl Default for RadiusKind {
    fn default() -> Self {
        Self::Outer
    }
}

/// Convert a radius of the given kind to an outer radius. Outer radii pass
/// through untouched, inner radii are scaled by `2/√3`. Returns an error for
/// negative, NaN or infinite values.
pub fn convert_radius(kind: RadiusKind, value: f64) -> anyhow::Result<f64> {
    if !value.is_finite() || value < 0.0 {
        bail!(
            "invalid {} radius {}; must be finite and non-negative",
            kind,
            value
        );
    }
    Ok(match kind {
        RadiusKind::Outer => value,
        RadiusKind::Inner => value * 2.0 / SQRT_3,
    })
}

/// Find the cell that contains the given world position. The `y` component of
/// the position is ignored.
///
/// The position must be finite, and within `i64` cells of the origin on each
/// axis. Coordinates beyond that saturate to the nearest representable cell.
pub fn world_to_axial(
    position: WorldPosition,
    orientation: Orientation,
    outer_radius: f64,
) -> AxialPoint {
    let fractional = orientation.inverse_matrix()
        * Vector2::new(position.x, position.z)
        / outer_radius;
    round_cube(fractional.x, fractional.y)
}

/// Get the world position of the center of the given cell. The returned
/// position always lies on the grid plane (`y = 0`).
pub fn axial_to_world(
    point: AxialPoint,
    orientation: Orientation,
    outer_radius: f64,
) -> WorldPosition {
    let world = orientation.forward_matrix()
        * Vector2::new(point.q() as f64, point.r() as f64)
        * outer_radius;
    WorldPosition::on_plane(world.x, world.y)
}

/// Round a fractional cube coordinate to the cell that contains it.
///
/// Each component is rounded independently, which can break `q + r + s = 0`.
/// The component that moved the furthest during rounding is the least
/// trustworthy, so it gets recomputed from the other two. If that's `s`, we
/// have nothing to do since `s` is never stored.
///
/// Rounding is ties-to-even, so a point exactly halfway between two integers
/// lands on the even one.
fn round_cube(q_frac: f64, r_frac: f64) -> AxialPoint {
    let s_frac = -q_frac - r_frac;

    let mut q = q_frac.round_ties_even();
    let mut r = r_frac.round_ties_even();
    let s = s_frac.round_ties_even();

    let q_diff = (q - q_frac).abs();
    let r_diff = (r - r_frac).abs();
    let s_diff = (s - s_frac).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    }

    AxialPoint::new(q as i64, r as i64)
}

/// The outline of a single cell, ready to be drawn as a wireframe. Index 0 of
/// [Self::points] is the center, indexes 1-6 are the vertices in a fixed
/// angular order, so each pair of adjacent indexes (wrapping 6 back to 1) forms
/// one edge of the hexagon.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexPolygon {
    center: WorldPosition,
    vertices: [WorldPosition; 6],
}

impl HexPolygon {
    pub fn center(&self) -> WorldPosition {
        self.center
    }

    pub fn vertices(&self) -> &[WorldPosition; 6] {
        &self.vertices
    }

    /// All 7 points of the polygon: the center, then the 6 vertices
    pub fn points(&self) -> [WorldPosition; 7] {
        let mut points = [self.center; 7];
        points[1..].copy_from_slice(&self.vertices);
        points
    }

    /// The 6 outer edges, as `(start, end)` pairs. Vertex `i` connects to
    /// vertex `i + 1`, and the last vertex wraps back around to the first.
    pub fn edges(
        &self,
    ) -> impl Iterator<Item = (WorldPosition, WorldPosition)> {
        let vertices = self.vertices;
        (0..vertices.len())
            .map(move |i| (vertices[i], vertices[(i + 1) % vertices.len()]))
    }

    /// The 6 spokes from the center to each vertex, as `(start, end)` pairs
    pub fn spokes(
        &self,
    ) -> impl Iterator<Item = (WorldPosition, WorldPosition)> {
        let center = self.center;
        self.vertices.into_iter().map(move |vertex| (center, vertex))
    }
}

/// Build the outline polygon for a cell centered at the given world position.
///
/// The drawn radius is the outer radius for [RadiusKind::Outer], or the outer
/// radius scaled by `2/√3` for [RadiusKind::Inner], and is then halved. Vertex
/// `i` sits at `60°·i` plus the orientation's rotation, measured from `+z`
/// towards `+x`.
pub fn hex_vertices(
    center: WorldPosition,
    orientation: Orientation,
    radius_kind: RadiusKind,
    outer_radius: f64,
) -> HexPolygon {
    let radius = match radius_kind {
        RadiusKind::Outer => outer_radius,
        RadiusKind::Inner => outer_radius * 2.0 / SQRT_3,
    } / 2.0;

    let mut vertices = [center; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle =
            (60.0 * i as f64).to_radians() + orientation.vertex_rotation();
        *vertex = center
            + WorldPosition::on_plane(
                radius * angle.sin(),
                radius * angle.cos(),
            );
    }

    HexPolygon { center, vertices }
}
