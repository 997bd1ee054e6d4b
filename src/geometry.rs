//! Shared geometry: plane and space points, the model-to-screen boundary for
//! the 2D generators, and the rotate-then-project pipeline used by the
//! parametric surfaces.

/// A plane coordinate, in model space before [`ModelToScreen`] is applied and
/// in screen space after
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Point2 {
        Point2 { x, y }
    }
}

/// A model-space coordinate on a parametric surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Accumulated Euler rotation angles in radians, advanced once per animation
/// tick and shared by every point projected within a frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A projected surface point: screen position plus the rotated depth used for
/// colouring
#[derive(Clone, Copy, Debug)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Perspective strength; projection divides by `FOCAL + z`
pub const FOCAL: f64 = 1000.0;

/// The single place where model space meets pixel space for the plane
/// generators. Model space is y-up with the origin at the bottom-centre of
/// the canvas; screen space is the usual y-down pixel grid.
#[derive(Clone, Copy, Debug)]
pub struct ModelToScreen {
    pub zoom: f64,
    pub offset: Point2,
    pub width: u32,
    pub height: u32,
}

impl ModelToScreen {
    pub fn apply(&self, point: Point2) -> Point2 {
        Point2 {
            x: point.x * self.zoom + self.width as f64 / 2.0 + self.offset.x,
            y: self.height as f64 - point.y * self.zoom + self.offset.y,
        }
    }
}

/// Rotate a point around the X, then Y, then Z axis and project it onto the
/// canvas with a perspective divide.
pub fn project(point: Point3, rotation: &Rotation, scale: f64, center: Point2) -> Projected {
    let Point3 { x, y, z } = point;

    // Rotate around X
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let y1 = y * cos_x - z * sin_x;
    let z1 = y * sin_x + z * cos_x;

    // Rotate around Y
    let (sin_y, cos_y) = rotation.y.sin_cos();
    let x2 = x * cos_y + z1 * sin_y;
    let z2 = -x * sin_y + z1 * cos_y;

    // Rotate around Z
    let (sin_z, cos_z) = rotation.z.sin_cos();
    let x3 = x2 * cos_z - y1 * sin_z;
    let y3 = x2 * sin_z + y1 * cos_z;

    let perspective = FOCAL / (FOCAL + z2);
    Projected {
        x: x3 * perspective * scale + center.x,
        y: y3 * perspective * scale + center.y,
        depth: z2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn model_to_screen_places_origin_at_bottom_centre() {
        let transform = ModelToScreen {
            zoom: 50.0,
            offset: Point2::new(0.0, 0.0),
            width: 600,
            height: 600,
        };
        let origin = transform.apply(Point2::new(0.0, 0.0));
        assert_eq!(origin, Point2::new(300.0, 600.0));
    }

    #[test]
    fn model_to_screen_y_is_flipped() {
        let transform = ModelToScreen {
            zoom: 50.0,
            offset: Point2::new(0.0, 0.0),
            width: 600,
            height: 600,
        };
        let up = transform.apply(Point2::new(0.0, 2.0));
        assert_eq!(up, Point2::new(300.0, 500.0));
    }

    #[test]
    fn zero_rotation_reduces_to_scaled_orthographic() {
        // With all angles at zero the projection must differ from a direct
        // orthographic projection only by the perspective scale and the
        // recentring offset.
        let rotation = Rotation::default();
        let center = Point2::new(300.0, 300.0);
        let point = Point3 {
            x: 1.5,
            y: -2.0,
            z: 4.0,
        };
        let projected = project(point, &rotation, 100.0, center);

        let perspective = FOCAL / (FOCAL + point.z);
        assert!((projected.x - (point.x * perspective * 100.0 + center.x)).abs() < EPSILON);
        assert!((projected.y - (point.y * perspective * 100.0 + center.y)).abs() < EPSILON);
        assert!((projected.depth - point.z).abs() < EPSILON);
    }

    #[test]
    fn full_turn_round_trips() {
        let rotation = Rotation {
            x: std::f64::consts::TAU,
            y: std::f64::consts::TAU,
            z: std::f64::consts::TAU,
        };
        let center = Point2::new(0.0, 0.0);
        let point = Point3 {
            x: 0.3,
            y: 0.7,
            z: -0.2,
        };
        let turned = project(point, &rotation, 1.0, center);
        let still = project(point, &Rotation::default(), 1.0, center);
        assert!((turned.x - still.x).abs() < 1e-9);
        assert!((turned.y - still.y).abs() < 1e-9);
    }
}
