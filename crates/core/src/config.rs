use crate::{
    grid::hex::{convert_radius, Orientation, RadiusKind},
    util,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a hex grid. Two grids built from the same config
/// will always place every point in the same cell.
///
/// This is a plain value: hosts hold onto whatever config the user picked and
/// pass it in each time they build a [HexGrid](crate::HexGrid). Nothing about
/// the grid is stored globally.
#[cfg_attr(feature = "bevy", derive(bevy_ecs::system::Resource))]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Size of each cell. Whether this is measured to a vertex or to the
    /// midpoint of an edge is determined by `radius_kind`. Must be positive
    /// and finite.
    #[validate(custom = "validate_radius")]
    pub radius: f64,

    /// What `radius` measures. See [RadiusKind].
    pub radius_kind: RadiusKind,

    /// Whether cells are flat-topped or pointy-topped. See [Orientation].
    pub orientation: Orientation,
}

impl GridConfig {
    /// Get the configured radius as an outer radius (center to vertex), which
    /// is what all the grid math runs on. Returns an error if the radius is
    /// invalid.
    pub fn outer_radius(&self) -> anyhow::Result<f64> {
        convert_radius(self.radius_kind, self.radius)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            radius_kind: RadiusKind::Outer,
            orientation: Orientation::FlatTop,
        }
    }
}

fn validate_radius(radius: f64) -> Result<(), ValidationError> {
    if util::is_valid_radius(radius) {
        Ok(())
    } else {
        let mut error = ValidationError::new("radius");
        error.message = Some("must be positive and finite".into());
        Err(error)
    }
}
