pub mod config;
#[cfg(feature = "svg")]
pub mod svg;
pub mod unit;

use crate::{
    grid::{hex::HexPolygon, BoundaryCell},
    render::{config::RenderConfig, unit::Color3},
    util::unit::WorldPosition,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An overlay renderer converts boundary cells into line segments that a host
/// can draw over its scene. A renderer is created using a particular
/// [RenderConfig], and from there can be used to render any number of
/// overlays any number of times.
///
/// Config options cannot be changed after creating a renderer, but renderers
/// are very cheap to create so if you need to change the config, just create
/// a new renderer.
///
/// ## Supported Formats
/// - Line segments in world space, for hosts that draw their own lines
/// - SVG (2D top-down, requires the `svg` feature)
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct OverlayRenderer {
    /// Config that determines how rendering is done
    ///
    /// **This is different from the grid config.** The grid config controls
    /// which cells end up in the overlay, the render config just controls how
    /// they're visually presented.
    render_config: RenderConfig,
}

/// A single straight line in world space, ready to be drawn by a host
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: WorldPosition,
    pub end: WorldPosition,
    pub color: Color3,
}

impl OverlayRenderer {
    /// Initialize a new renderer with the given config. Returns an error if
    /// the config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config
            .validate()
            .context("invalid render config")?;
        Ok(Self { render_config })
    }

    /// Get a reference to the config that defines how this renderer behaves
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Convert one cell outline into line segments. The six outer edges come
    /// first, in vertex order. If spokes are enabled, the six lines from the
    /// center to each vertex follow.
    pub fn line_segments(&self, polygon: &HexPolygon) -> Vec<LineSegment> {
        let color = self.render_config.line_color;
        let to_segment = |(start, end): (WorldPosition, WorldPosition)| {
            LineSegment { start, end, color }
        };

        let mut segments: Vec<LineSegment> =
            polygon.edges().map(to_segment).collect();
        if self.render_config.show_spokes {
            segments.extend(polygon.spokes().map(to_segment));
        }
        segments
    }

    /// Convert a full overlay into line segments. Segments are grouped by
    /// cell, in the same order as the input.
    pub fn overlay_segments(&self, cells: &[BoundaryCell]) -> Vec<LineSegment> {
        cells
            .iter()
            .flat_map(|cell| self.line_segments(&cell.polygon))
            .collect()
    }

    /// Render an overlay as a top-down SVG
    #[cfg(feature = "svg")]
    pub fn render_as_svg(&self, cells: &[BoundaryCell]) -> String {
        svg::overlay_to_svg(cells, self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::hex::{hex_vertices, AxialPoint, Orientation, RadiusKind};
    use assert_approx_eq::assert_approx_eq;

    fn polygon() -> HexPolygon {
        hex_vertices(
            WorldPosition::new(2.0, 0.0, 3.0),
            Orientation::PointyTop,
            RadiusKind::Outer,
            4.0,
        )
    }

    #[test]
    fn test_invalid_config() {
        let err = OverlayRenderer::new(RenderConfig {
            stroke_width: 0.0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.downcast_ref::<validator::ValidationErrors>().is_some());

        let err = OverlayRenderer::new(RenderConfig {
            line_color: Color3 {
                red: 2.0,
                green: 0.0,
                blue: 0.0,
            },
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.downcast_ref::<validator::ValidationErrors>().is_some());
    }

    #[test]
    fn test_line_segments_with_spokes() {
        let renderer = OverlayRenderer::new(RenderConfig::default()).unwrap();
        let polygon = polygon();
        let segments = renderer.line_segments(&polygon);
        assert_eq!(segments.len(), 12);

        // Edges form a closed loop around the vertices
        let vertices = polygon.vertices();
        for (i, segment) in segments[..6].iter().enumerate() {
            assert_eq!(segment.start, vertices[i]);
            assert_eq!(segment.end, vertices[(i + 1) % 6]);
            assert_eq!(segment.color, Color3::WHITE);
        }

        // Spokes all go from the center out to a vertex, which is half the
        // outer radius away
        for (i, segment) in segments[6..].iter().enumerate() {
            assert_eq!(segment.start, polygon.center());
            assert_eq!(segment.end, vertices[i]);
            assert_approx_eq!(
                segment.start.planar_distance_to(segment.end),
                2.0
            );
        }
    }

    #[test]
    fn test_line_segments_without_spokes() {
        let renderer = OverlayRenderer::new(RenderConfig {
            show_spokes: false,
            line_color: Color3::new_int(255, 0, 0),
            ..Default::default()
        })
        .unwrap();
        let segments = renderer.line_segments(&polygon());
        assert_eq!(segments.len(), 6);
        assert!(segments
            .iter()
            .all(|segment| segment.color.to_html() == "#ff0000"));
    }

    #[test]
    fn test_overlay_segments() {
        let renderer = OverlayRenderer::new(RenderConfig::default()).unwrap();
        let grid = crate::HexGrid::new(Default::default()).unwrap();
        let cells = grid.empty_boundary(vec![WorldPosition::ORIGIN]);
        let segments = renderer.overlay_segments(&cells);
        assert_eq!(segments.len(), 6 * 12);

        // First cell's spokes all start at that cell's center
        let first = grid
            .axial_to_world(AxialPoint::ORIGIN.adjacents().next().unwrap());
        assert!(segments[6..12].iter().all(|segment| segment.start == first));
        assert!(renderer.overlay_segments(&[]).is_empty());
    }
}
