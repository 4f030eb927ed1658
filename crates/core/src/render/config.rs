use crate::render::unit::Color3;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration specific to drawing grid overlays. These options have
/// absolutely no bearing on which cells end up in an overlay, only on how the
/// overlay is presented.
///
/// Not all render options apply to all outputs, e.g. `stroke_width` only
/// matters for SVG since line-drawing hosts pick their own line width. The
/// documentation for each field will list which outputs it applies to.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::system::Resource))]
#[serde(default)]
pub struct RenderConfig {
    /// Color of every line in the overlay
    ///
    /// ## Relevant Outputs
    /// - Line segments
    /// - SVG
    #[validate(custom = "validate_color")]
    pub line_color: Color3,

    /// Should each cell be drawn with spokes from its center to each vertex,
    /// in addition to its outline? With spokes, each cell is 12 lines. Without,
    /// it's 6.
    ///
    /// ## Relevant Outputs
    /// - Line segments
    /// - SVG
    pub show_spokes: bool,

    /// Width of each line, in world units
    ///
    /// ## Relevant Outputs
    /// - SVG
    #[validate(range(min = 0.001))]
    pub stroke_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_color: Color3::WHITE,
            show_spokes: true,
            stroke_width: 0.05,
        }
    }
}

fn validate_color(color: &Color3) -> Result<(), ValidationError> {
    if color.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::new("color"))
    }
}
