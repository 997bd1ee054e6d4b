//! The Koch snowflake: recursive subdivision of each side of an equilateral
//! triangle into four sub-segments with an outward triangular bump.

use crate::geometry::Point2;

/// A straight line segment in screen space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

/// Subdivide one segment to the given depth, appending the leaf segments to
/// `out`. Depth 0 emits the segment unchanged; otherwise the segment splits
/// into two equal thirds plus an apex displaced perpendicular to the segment
/// by `length * sqrt(3) / 6`, forming an equilateral bump.
pub fn subdivide(start: Point2, end: Point2, depth: u32, out: &mut Vec<Segment>) {
    if depth == 0 {
        out.push(Segment { start, end });
        return;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let bump = 3.0_f64.sqrt() / 6.0;

    let p1 = start;
    let p2 = Point2::new(start.x + dx / 3.0, start.y + dy / 3.0);
    let p3 = Point2::new(
        start.x + dx / 2.0 - dy * bump,
        start.y + dy / 2.0 + dx * bump,
    );
    let p4 = Point2::new(start.x + 2.0 * dx / 3.0, start.y + 2.0 * dy / 3.0);
    let p5 = end;

    subdivide(p1, p2, depth - 1, out);
    subdivide(p2, p3, depth - 1, out);
    subdivide(p3, p4, depth - 1, out);
    subdivide(p4, p5, depth - 1, out);
}

/// Generate the full snowflake: an equilateral triangle centred on
/// `(center_x, center_y)` with the given side length, each side subdivided to
/// `depth`. Coordinates are screen space (y grows downward), matching how the
/// segments are painted.
pub fn snowflake(center_x: f64, center_y: f64, size: f64, depth: u32) -> Vec<Segment> {
    let height = size * 3.0_f64.sqrt() / 2.0;
    let corners = [
        Point2::new(center_x - size / 2.0, center_y + height / 3.0),
        Point2::new(center_x + size / 2.0, center_y + height / 3.0),
        Point2::new(center_x, center_y - 2.0 * height / 3.0),
    ];

    let mut segments = Vec::new();
    for i in 0..3 {
        subdivide(corners[i], corners[(i + 1) % 3], depth, &mut segments);
    }
    segments
}
