//! This sub-module contains basic types for units that form the axial
//! coordinate system. See the parent module documentation for more info on the
//! coordinate system.

use derive_more::{Add, Display, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};

/// A point in the axial coordinate system that refers to a whole cell (via its
/// center point). See module-level documentation for a description of the
/// coordinate system.
///
/// ## Implementation
///
/// Every cell center lies on the plane `q + r + s = 0`, so this struct only
/// needs to store `q` and `r`. The `s` component is derived as needed and is
/// never stored, which means it can never drift out of sync with the other two.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct AxialPoint {
    q: i64,
    r: i64,
}

impl AxialPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new point with the given q and r. Since q+r+s=0 for all
    /// points, we can derive s from q & r.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    pub fn q(self) -> i64 {
        self.q
    }

    pub fn r(self) -> i64 {
        self.r
    }

    pub fn s(self) -> i64 {
        -(self.q + self.r)
    }

    /// Get the location of the cell adjacent to this one in a particular
    /// direction
    pub fn adjacent(self, direction: AxialDirection) -> AxialPoint {
        self + direction.to_vector()
    }

    /// Get an iterator of all the points directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in the order the
    /// [AxialDirection] variants are declared.
    pub fn adjacents(self) -> impl Iterator<Item = AxialPoint> {
        AxialDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the cells are adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance_to(self, other: AxialPoint) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let diff = self - other;
        ((diff.q.abs() + diff.r.abs() + diff.s().abs()) / 2) as usize
    }
}

impl ops::Add<AxialVector> for AxialPoint {
    type Output = AxialPoint;

    fn add(self, rhs: AxialVector) -> Self::Output {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl ops::Sub for AxialPoint {
    type Output = AxialVector;

    fn sub(self, rhs: AxialPoint) -> Self::Output {
        AxialVector::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl From<(i64, i64)> for AxialPoint {
    fn from((q, r): (i64, i64)) -> Self {
        Self::new(q, r)
    }
}

/// A translation in the axial coordinate system. This is essentially the same
/// as an [AxialPoint], but denoting some values explicitly as vectors makes it
/// a bit clearer when shifting points around. Like points, q+r+s will always
/// equal 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Add, Sub, Neg)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
pub struct AxialVector {
    pub q: i64,
    pub r: i64,
}

impl AxialVector {
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    pub fn s(&self) -> i64 {
        -(self.q + self.r)
    }
}

/// The 6 directions in which cells can line up side-to-side. For any given
/// cell, a direction points from its center to the center of one neighbor.
///
/// Variants are named by the axial offset they apply rather than by compass
/// heading, because the compass heading of each offset depends on the grid
/// [Orientation](super::Orientation).
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AxialDirection {
    /// `(+1, 0)`
    QPos,
    /// `(+1, -1)`
    QPosRNeg,
    /// `(0, -1)`
    RNeg,
    /// `(-1, 0)`
    QNeg,
    /// `(-1, +1)`
    QNegRPos,
    /// `(0, +1)`
    RPos,
}

impl AxialDirection {
    /// Get a vector offset that would move a point one cell in this direction
    pub fn to_vector(self) -> AxialVector {
        match self {
            Self::QPos => AxialVector::new(1, 0),
            Self::QPosRNeg => AxialVector::new(1, -1),
            Self::RNeg => AxialVector::new(0, -1),
            Self::QNeg => AxialVector::new(-1, 0),
            Self::QNegRPos => AxialVector::new(-1, 1),
            Self::RPos => AxialVector::new(0, 1),
        }
    }
}

/// A trait that denotes any data type that has a singular assigned cell in the
/// axial grid.
pub trait HasAxialPosition {
    fn position(&self) -> AxialPoint;
}

impl HasAxialPosition for AxialPoint {
    fn position(&self) -> AxialPoint {
        *self
    }
}
