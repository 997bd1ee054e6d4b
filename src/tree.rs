//! The recursive binary tree: every branch draws a segment, then spawns two
//! children rotated 45 degrees either way at 0.7 of its length.

use crate::geometry::Point2;

/// One drawn branch. `depth` is the remaining recursion depth at this branch
/// and drives both the hue gradient and the stroke width.
#[derive(Clone, Copy, Debug)]
pub struct Branch {
    pub start: Point2,
    pub end: Point2,
    pub depth: u32,
}

impl Branch {
    /// Hue for this branch's recursion level, in degrees
    pub fn hue(&self) -> f64 {
        ((120 + self.depth * 20) % 360) as f64
    }

    /// Stroke width in pixels, thicker towards the trunk; the depth-zero
    /// leaves still get a one-pixel stroke
    pub fn stroke_width(&self) -> u32 {
        self.depth.max(1)
    }
}

/// Recursively grow branches, appending each drawn segment to `out` in
/// draw order (parent first, then the whole left subtree, then the right).
/// `angle` and `base_rotation` are in degrees; `base_rotation` is applied
/// uniformly to every branch.
pub fn branch(
    start: Point2,
    length: f64,
    angle: f64,
    depth: u32,
    base_rotation: f64,
    out: &mut Vec<Branch>,
) {
    let radians = (angle + base_rotation).to_radians();
    let end = Point2::new(
        start.x + length * radians.cos(),
        start.y + length * radians.sin(),
    );
    out.push(Branch { start, end, depth });

    // Every call draws its own segment; only branches with splits left
    // recurse, so depth d yields 2^(d+1) - 1 segments
    if depth == 0 {
        return;
    }
    branch(end, length * 0.7, angle - 45.0, depth - 1, base_rotation, out);
    branch(end, length * 0.7, angle + 45.0, depth - 1, base_rotation, out);
}

/// Grow a tree anchored at the bottom-centre of a canvas of the given size,
/// trunk pointing straight up.
pub fn generate(width: u32, height: u32, depth: u32, rotation: f64) -> Vec<Branch> {
    let mut branches = Vec::new();
    branch(
        Point2::new(width as f64 / 2.0, height as f64 * 0.8),
        height as f64 * 0.2,
        -90.0,
        depth,
        rotation,
        &mut branches,
    );
    branches
}
