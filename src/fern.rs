//! The Barnsley fern: an iterated function system that grows an unbounded
//! point cloud by repeatedly applying one of four weighted affine maps to the
//! previously generated point.

use crate::color::Rgb;
use crate::geometry::Point2;
use rand::Rng;

/// A weighted affine map: 2x2 linear part `a..d`, translation `e, f`, and a
/// selection probability `p`. The probabilities across [`TRANSFORMS`] sum to
/// one, modelling the distribution the chaos game draws from.
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub p: f64,
    pub color: Rgb,
    pub name: &'static str,
}

impl AffineTransform {
    pub fn apply(&self, point: Point2) -> Point2 {
        Point2 {
            x: self.a * point.x + self.b * point.y + self.e,
            y: self.c * point.x + self.d * point.y + self.f,
        }
    }
}

/// The classic Barnsley coefficients: stem, successive copies, and the two
/// leaflets.
pub const TRANSFORMS: [AffineTransform; 4] = [
    AffineTransform {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.16,
        e: 0.0,
        f: 0.0,
        p: 0.01,
        color: Rgb::new(0xff, 0x6b, 0x6b),
        name: "Main Stem",
    },
    AffineTransform {
        a: 0.85,
        b: 0.04,
        c: -0.04,
        d: 0.85,
        e: 0.0,
        f: 1.6,
        p: 0.85,
        color: Rgb::new(0x4e, 0xcb, 0x71),
        name: "Successive Copies",
    },
    AffineTransform {
        a: 0.2,
        b: -0.26,
        c: 0.23,
        d: 0.22,
        e: 0.0,
        f: 1.6,
        p: 0.07,
        color: Rgb::new(0x4a, 0x90, 0xe2),
        name: "Left Leaflet",
    },
    AffineTransform {
        a: -0.15,
        b: 0.28,
        c: 0.26,
        d: 0.24,
        e: 0.0,
        f: 0.44,
        p: 0.07,
        color: Rgb::new(0x9b, 0x59, 0xb6),
        name: "Right Leaflet",
    },
];

/// A generated point tagged with the transform that produced it and its
/// position in the generation order
#[derive(Clone, Copy, Debug)]
pub struct GeneratedPoint {
    pub position: Point2,
    pub transform: usize,
    pub iteration: u64,
}

/// Owns the ever-growing point sequence. Points accumulate across frames and
/// are only discarded by an explicit [`FernGenerator::reset`].
#[derive(Default)]
pub struct FernGenerator {
    points: Vec<GeneratedPoint>,
    iterations: u64,
}

impl FernGenerator {
    pub fn new() -> FernGenerator {
        FernGenerator::default()
    }

    pub fn points(&self) -> &[GeneratedPoint] {
        &self.points
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Append `count` new points, starting from the last generated point (or
    /// the origin when the sequence is empty).
    pub fn generate<R: Rng>(&mut self, count: u32, rng: &mut R) {
        let mut current = match self.points.last() {
            Some(point) => point.position,
            None => Point2::new(0.0, 0.0),
        };

        for _ in 0..count {
            let index = select_transform(rng.gen::<f64>());
            current = TRANSFORMS[index].apply(current);
            self.points.push(GeneratedPoint {
                position: current,
                transform: index,
                iteration: self.iterations,
            });
            self.iterations += 1;
        }
    }

    /// Clear the accumulated sequence and reset the iteration counter
    pub fn reset(&mut self) {
        self.points.clear();
        self.iterations = 0;
    }
}

/// Walk the transform list accumulating probabilities until the running sum
/// reaches `r`. If float rounding exhausts the list without a match, the last
/// transform is used rather than dropping the draw.
fn select_transform(r: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, transform) in TRANSFORMS.iter().enumerate() {
        cumulative += transform.p;
        if r <= cumulative {
            return index;
        }
    }
    TRANSFORMS.len() - 1
}
