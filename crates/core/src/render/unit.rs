use crate::util::unit::WorldPosition;
use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A 2D point in screen space, i.e. the top-down view of the grid plane.
/// World `x` maps to screen `x`, and world `z` maps to screen `-y` so that
/// `+z` points up the screen.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Add, Sub)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl From<WorldPosition> for Point2 {
    fn from(position: WorldPosition) -> Self {
        Self {
            x: position.x,
            y: -position.z,
        }
    }
}

/// An RGB color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color3 {
    /// The valid range of values for each component in RGB
    const COMPONENT_RANGE: RangeInclusive<f32> = 0.0..=1.0;

    pub const WHITE: Self = Self::new_int(255, 255, 255);

    /// Create a new RGB color with components in the range [0.0, 1.0]. Panic
    /// if any of the components are out of range
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        let color = Self { red, green, blue };
        assert!(
            color.is_valid(),
            "color components must be in [0, 1]: {:?}",
            color
        );
        color
    }

    /// Create a new RGB color from integer components in the [0,255] range.
    pub const fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Are all three components in the range [0.0, 1.0]? Colors built via the
    /// constructors always are, but deserialized colors need to be checked.
    pub fn is_valid(&self) -> bool {
        [self.red, self.green, self.blue]
            .iter()
            .all(|component| Self::COMPONENT_RANGE.contains(component))
    }

    /// Convert this color to a set of 3 bytes: `(red, green, blue)`
    pub fn to_ints(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Convert this color to an HTML color code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html() {
        assert_eq!(Color3::WHITE.to_html(), "#ffffff");
        assert_eq!(Color3::new_int(72, 192, 240).to_html(), "#48c0f0");
        assert_eq!(Color3::new(0.0, 0.5, 1.0).to_html(), "#0080ff");
    }

    #[test]
    #[should_panic]
    fn test_invalid_component() {
        Color3::new(1.5, 0.0, 0.0);
    }

    #[test]
    fn test_screen_space() {
        let point: Point2 = WorldPosition::new(3.0, 9.0, 2.0).into();
        assert_eq!(point, Point2 { x: 3.0, y: -2.0 });
    }
}
