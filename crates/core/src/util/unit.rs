use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Neg, Sub,
    SubAssign,
};
use serde::{Deserialize, Serialize};

/// A 3D point in the host's local coordinate space. The grid lies in the
/// `x`/`z` plane; `y` is the host's "up" axis and never takes part in hex math.
/// Points produced by projecting a cell back into world space always have
/// `y = 0`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct WorldPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPosition {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Construct a point on the grid plane, i.e. with `y = 0`
    pub const fn on_plane(x: f64, z: f64) -> Self {
        Self::new(x, 0.0, z)
    }

    /// Are all three components finite (not NaN or infinite)?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Straight-line distance to another point, measured in the grid plane
    /// only. The `y` component of both points is ignored.
    pub fn planar_distance_to(&self, other: WorldPosition) -> f64 {
        (self.x - other.x).hypot(self.z - other.z)
    }
}
