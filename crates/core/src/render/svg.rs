use crate::{
    grid::BoundaryCell,
    render::{unit::Point2, LineSegment, OverlayRenderer},
};
use svg::{
    node::{
        element::{Group, Line},
        Comment,
    },
    Document,
};

/// Empty space around the outside of the overlay, in world units
const VIEW_BOX_PADDING: f64 = 1.0;

/// Render an overlay as an SVG. This is a 2D top-down rendering of the grid
/// plane, where world `x` runs right and world `z` runs up the page.
pub fn overlay_to_svg(
    cells: &[BoundaryCell],
    renderer: &OverlayRenderer,
) -> Document {
    let (min, max) = view_bounds(cells);
    let mut document = Document::new()
        .set(
            "viewBox",
            (
                // Top-left corner
                min.x - VIEW_BOX_PADDING,
                min.y - VIEW_BOX_PADDING,
                // Width and height
                max.x - min.x + VIEW_BOX_PADDING * 2.0,
                max.y - min.y + VIEW_BOX_PADDING * 2.0,
            ),
        )
        .add(Comment::new(format!(
            "\n{:#?}\n",
            renderer.render_config()
        )));

    for cell in cells {
        document = document.add(draw_cell(renderer, cell));
    }

    document
}

/// Find the top-left and bottom-right corners of the box that contains every
/// vertex in the overlay, in screen space. An empty overlay gets a box around
/// the origin.
fn view_bounds(cells: &[BoundaryCell]) -> (Point2, Point2) {
    let mut points = cells
        .iter()
        .flat_map(|cell| cell.polygon.points())
        .map(Point2::from);

    let first = match points.next() {
        Some(point) => point,
        None => return (Point2::default(), Point2::default()),
    };
    points.fold((first, first), |(min, max), point| {
        (
            Point2 {
                x: min.x.min(point.x),
                y: min.y.min(point.y),
            },
            Point2 {
                x: max.x.max(point.x),
                y: max.y.max(point.y),
            },
        )
    })
}

/// Generate an SVG group for a single cell
fn draw_cell(renderer: &OverlayRenderer, cell: &BoundaryCell) -> Group {
    let render_config = renderer.render_config();
    let mut group = Group::new()
        .set("stroke", render_config.line_color.to_html())
        .set("stroke-width", render_config.stroke_width)
        .add(Comment::new(cell.point.to_string())); // Readability!

    for segment in renderer.line_segments(&cell.polygon) {
        group = group.add(draw_line(segment));
    }

    group
}

fn draw_line(segment: LineSegment) -> Line {
    let start = Point2::from(segment.start);
    let end = Point2::from(segment.end);
    Line::new()
        .set("x1", start.x)
        .set("y1", start.y)
        .set("x2", end.x)
        .set("y2", end.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render::config::RenderConfig, HexGrid, WorldPosition};

    #[test]
    fn test_overlay_to_svg() {
        let grid = HexGrid::new(Default::default()).unwrap();
        let renderer = OverlayRenderer::new(RenderConfig::default()).unwrap();
        let cells = grid.empty_boundary(vec![WorldPosition::ORIGIN]);
        let svg = renderer.render_as_svg(&cells);

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<g").count(), 6);
        assert_eq!(svg.matches("<line").count(), 6 * 12);
        assert!(svg.contains("stroke=\"#ffffff\""));
        // Each cell is labelled with its axial coordinate
        for cell in &cells {
            assert!(svg.contains(&cell.point.to_string()));
        }
    }

    #[test]
    fn test_view_bounds() {
        assert_eq!(view_bounds(&[]), (Point2::default(), Point2::default()));

        let grid = HexGrid::new(Default::default()).unwrap();
        let cells = grid.empty_boundary(Vec::new());
        let (min, max) = view_bounds(&cells);
        // Origin cell is drawn at half of the default radius of 5, flat-topped
        // so the widest points are on the x axis
        assert!((min.x + 2.5).abs() < 1e-9);
        assert!((max.x - 2.5).abs() < 1e-9);
        assert!(min.y < 0.0 && max.y > 0.0);
    }
}
