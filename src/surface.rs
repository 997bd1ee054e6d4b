//! Parametric surfaces: the Möbius strip and the Klein bottle, sampled over a
//! regular (u, v) grid, rotated, perspective-projected, and painted as a
//! translucent quad mesh.

use crate::canvas::Canvas;
use crate::color::{Rgb, RED};
use crate::geometry::{project, Point2, Point3, Projected, Rotation};
use std::f64::consts::{PI, TAU};

/// Major radius of the Möbius strip
const MOBIUS_R: f64 = 2.0;
/// Half-width of the Möbius strip
const MOBIUS_WIDTH: f64 = 1.0;
/// Body radius of the Klein bottle
const KLEIN_RADIUS: f64 = 3.0;

/// Fixed v used when stroking the cross-section path
const CROSS_SECTION_V: f64 = 0.5;

/// Which parametric family to sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    /// A strip closed with the given number of half-twists; one half-twist is
    /// the classic Möbius strip
    Mobius { half_twists: u32 },
    Klein,
}

impl SurfaceKind {
    /// Grid subdivisions per parameter axis. A resolution/performance
    /// tradeoff, not a correctness constraint.
    pub fn resolution(&self) -> u32 {
        match self {
            SurfaceKind::Mobius { .. } => 50,
            SurfaceKind::Klein => 40,
        }
    }

    /// Base projection scale in pixels per model unit
    pub fn scale(&self) -> f64 {
        match self {
            SurfaceKind::Mobius { .. } => 100.0,
            SurfaceKind::Klein => 50.0,
        }
    }

    /// Evaluate the surface equation at `(u, v)`, both in [0, 1]
    pub fn point(&self, u: f64, v: f64) -> Point3 {
        let theta = u * TAU;
        let phi = v * TAU;
        match self {
            SurfaceKind::Mobius { half_twists } => {
                // The strip cross-section turns by half_twists * pi over one
                // trip around the ring
                let twist = *half_twists as f64 * phi / 2.0;
                let radius = MOBIUS_R + MOBIUS_WIDTH * twist.cos();
                Point3 {
                    x: radius * theta.cos(),
                    y: radius * theta.sin(),
                    z: MOBIUS_WIDTH * twist.sin(),
                }
            }
            SurfaceKind::Klein => {
                // Piecewise parametrization; the two branches meet at phi = pi
                if phi < PI {
                    let bulge = KLEIN_RADIUS
                        + (theta / 2.0).cos() * phi.sin()
                        - (theta / 2.0).sin() * (2.0 * phi).sin();
                    Point3 {
                        x: bulge * theta.cos(),
                        y: bulge * theta.sin(),
                        z: (theta / 2.0).sin() * phi.sin() + (theta / 2.0).cos() * (2.0 * phi).sin(),
                    }
                } else {
                    let bulge = KLEIN_RADIUS + (theta / 2.0).cos() * phi.sin();
                    Point3 {
                        x: bulge * theta.cos(),
                        y: bulge * theta.sin(),
                        z: (theta / 2.0).sin() * phi.sin(),
                    }
                }
            }
        }
    }

    /// Mesh hue at grid cell `(i, j)` with the given average projected depth
    fn hue(&self, i: u32, j: u32, depth: f64) -> f64 {
        let resolution = self.resolution() as f64;
        match self {
            SurfaceKind::Mobius { .. } => (i + j) as f64 / resolution * 180.0,
            SurfaceKind::Klein => ((i + j) as f64 / (resolution * 2.0) * 360.0 + depth * 20.0)
                .rem_euclid(360.0),
        }
    }

    /// Number of quads painted per frame, for the stats readout
    pub fn quad_count(&self) -> u64 {
        let resolution = self.resolution() as u64;
        resolution * resolution
    }
}

/// Per-frame view parameters for the surface renderer, owned by the caller
/// and read-only here
#[derive(Clone, Copy, Debug)]
pub struct SurfaceView {
    pub rotation: Rotation,
    pub zoom: f64,
    pub show_particle: bool,
    pub particle_pos: f64,
    pub show_cross_section: bool,
}

/// Paint one full frame of the surface onto the canvas: the quad mesh, then
/// the optional tracked particle and cross-section path on top.
pub fn render(kind: SurfaceKind, view: &SurfaceView, canvas: &mut Canvas) {
    let resolution = kind.resolution();
    let scale = kind.scale() * view.zoom;
    let center = Point2::new(canvas.width() as f64 / 2.0, canvas.height() as f64 / 2.0);
    let project_at = |u: f64, v: f64| project(kind.point(u, v), &view.rotation, scale, center);

    // Sample and project the whole grid first; each quad reuses its
    // neighbours' corners
    let mut grid: Vec<Vec<Projected>> = Vec::with_capacity(resolution as usize + 1);
    for i in 0..=resolution {
        let mut row = Vec::with_capacity(resolution as usize + 1);
        for j in 0..=resolution {
            row.push(project_at(
                i as f64 / resolution as f64,
                j as f64 / resolution as f64,
            ));
        }
        grid.push(row);
    }

    for i in 0..resolution as usize {
        for j in 0..resolution as usize {
            let p1 = grid[i][j];
            let p2 = grid[i + 1][j];
            let p3 = grid[i][j + 1];
            let p4 = grid[i + 1][j + 1];

            let depth = (p1.depth + p2.depth + p3.depth + p4.depth) / 4.0;
            let color = Rgb::hsl(kind.hue(i as u32, j as u32, depth), 0.7, 0.5);
            let corners = [(p1.x, p1.y), (p2.x, p2.y), (p4.x, p4.y), (p3.x, p3.y)];
            canvas.fill_polygon(&corners, color, 0.1, 0.2);
        }
    }

    if view.show_particle {
        let particle = project_at(view.particle_pos, 0.0);
        canvas.fill_circle(particle.x, particle.y, 5.0, RED, 1.0);
    }

    if view.show_cross_section {
        let path: Vec<(f64, f64)> = (0..=resolution)
            .map(|i| {
                let projected = project_at(i as f64 / resolution as f64, CROSS_SECTION_V);
                (projected.x, projected.y)
            })
            .collect();
        canvas.stroke_polyline(&path, 2, RED, 1.0);
    }
}
