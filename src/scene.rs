//! Scene selection and per-frame rendering: maps the current animation state
//! through the right generator family and paints the result onto a canvas.

use crate::animation::AnimationState;
use crate::canvas::Canvas;
use crate::color::{Rgb, BLACK, DIM_GREY, WHITE};
use crate::fern::TRANSFORMS;
use crate::geometry::{ModelToScreen, Point2};
use crate::render_settings::RenderSettings;
use crate::surface::{self, SurfaceKind, SurfaceView};
use crate::{koch, tree};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stroke colour for the snowflake curve
const KOCH_BLUE: Rgb = Rgb::new(0x4a, 0x90, 0xe2);

/// Pixels-per-model-unit for the fern at zoom 1.0
const FERN_BASE_ZOOM: f64 = 50.0;
/// Snowflake side length in pixels at zoom 1.0
const KOCH_BASE_SIZE: f64 = 300.0;

/// The five visualizations
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Scene {
    Fern,
    KochSnowflake,
    BinaryTree,
    MobiusStrip,
    KleinBottle,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Fern,
        Scene::KochSnowflake,
        Scene::BinaryTree,
        Scene::MobiusStrip,
        Scene::KleinBottle,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Scene::Fern => "Recursive Barnsley Fern",
            Scene::KochSnowflake => "Koch Snowflake",
            Scene::BinaryTree => "Recursive Binary Tree",
            Scene::MobiusStrip => "Mobius Strip Explorer",
            Scene::KleinBottle => "Klein Bottle Explorer",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scene::Fern => "fern",
            Scene::KochSnowflake => "koch-snowflake",
            Scene::BinaryTree => "binary-tree",
            Scene::MobiusStrip => "mobius-strip",
            Scene::KleinBottle => "klein-bottle",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Scene, String> {
        match s {
            "fern" => Ok(Scene::Fern),
            "koch-snowflake" | "koch" => Ok(Scene::KochSnowflake),
            "binary-tree" | "tree" => Ok(Scene::BinaryTree),
            "mobius-strip" | "mobius" => Ok(Scene::MobiusStrip),
            "klein-bottle" | "klein" => Ok(Scene::KleinBottle),
            other => Err(format!(
                "unknown scene '{other}' (expected one of: fern, koch-snowflake, binary-tree, mobius-strip, klein-bottle)"
            )),
        }
    }
}

/// Paint one complete frame. The canvas is created fresh every call; there is
/// no retained drawing state between frames.
pub fn render_frame(settings: &RenderSettings, state: &AnimationState) -> Canvas {
    // The fern draws on black like the original; everything else on white
    let background = match settings.scene {
        Scene::Fern => BLACK,
        _ => WHITE,
    };
    let mut canvas = Canvas::new(settings.width, settings.height, background);

    match settings.scene {
        Scene::Fern => render_fern(settings, state, &mut canvas),
        Scene::KochSnowflake => render_koch(settings, &mut canvas),
        Scene::BinaryTree => render_tree(settings, state, &mut canvas),
        Scene::MobiusStrip | Scene::KleinBottle => {
            let view = SurfaceView {
                rotation: state.rotation,
                zoom: settings.zoom,
                show_particle: settings.show_particle,
                particle_pos: state.particle_pos,
                show_cross_section: settings.show_cross_section,
            };
            surface::render(surface_kind(settings), &view, &mut canvas);
        }
    }
    canvas
}

pub fn surface_kind(settings: &RenderSettings) -> SurfaceKind {
    match settings.scene {
        Scene::KleinBottle => SurfaceKind::Klein,
        _ => SurfaceKind::Mobius {
            half_twists: settings.half_twists,
        },
    }
}

fn render_fern(settings: &RenderSettings, state: &AnimationState, canvas: &mut Canvas) {
    let transform = ModelToScreen {
        zoom: settings.zoom * FERN_BASE_ZOOM,
        offset: Point2::new(settings.offset[0], settings.offset[1]),
        width: settings.width,
        height: settings.height,
    };
    let highlight = settings.highlight.as_deref();

    for point in state.fern.points() {
        let screen = transform.apply(point.position);
        let own_color = TRANSFORMS[point.transform].color;
        // A highlighted transform keeps its colour and brightens; everything
        // else is dimmed and desaturated rather than hidden
        let (color, alpha) = match highlight {
            Some(name) if TRANSFORMS[point.transform].name == name => (own_color, 0.8),
            Some(_) => (DIM_GREY, 0.2),
            None => (own_color, 0.6),
        };
        canvas.fill_rect(screen.x, screen.y, 2, 2, color, alpha);
    }
}

fn render_koch(settings: &RenderSettings, canvas: &mut Canvas) {
    let segments = koch::snowflake(
        settings.width as f64 / 2.0,
        settings.height as f64 / 2.0,
        KOCH_BASE_SIZE * settings.zoom,
        settings.depth,
    );
    for segment in &segments {
        canvas.draw_line(
            segment.start.x,
            segment.start.y,
            segment.end.x,
            segment.end.y,
            1,
            KOCH_BLUE,
            1.0,
        );
    }
}

fn render_tree(settings: &RenderSettings, state: &AnimationState, canvas: &mut Canvas) {
    let branches = tree::generate(
        settings.width,
        settings.height,
        settings.depth,
        state.rotation.z.to_degrees(),
    );
    for branch in &branches {
        canvas.draw_line(
            branch.start.x,
            branch.start.y,
            branch.end.x,
            branch.end.y,
            branch.stroke_width(),
            Rgb::hsl(branch.hue(), 0.7, 0.5),
            1.0,
        );
    }
}

/// Derived display numbers recomputed from the final state, for the readout
/// printed after rendering. Outputs only; nothing here feeds back into the
/// generators.
pub fn frame_stats(settings: &RenderSettings, state: &AnimationState) -> String {
    let zoom_percent = settings.zoom * 100.0;
    match settings.scene {
        Scene::Fern => format!(
            "Total points:\t{}\nIterations:\t{}\nZoom:\t\t{zoom_percent:.0}%",
            state.fern.points().len(),
            state.fern.iterations(),
        ),
        Scene::KochSnowflake => format!(
            "Segments:\t{}\nZoom:\t\t{zoom_percent:.0}%",
            3 * 4_u64.pow(settings.depth),
        ),
        Scene::BinaryTree => format!(
            "Branches:\t{}\nRotation:\t{:.1} deg",
            2_u64.pow(settings.depth + 1) - 1,
            state.rotation.z.to_degrees(),
        ),
        Scene::MobiusStrip | Scene::KleinBottle => format!(
            "Quads per frame:{}\nRotation:\t{:.2}, {:.2}, {:.2} rad\nZoom:\t\t{zoom_percent:.0}%",
            surface_kind(settings).quad_count(),
            state.rotation.x,
            state.rotation.y,
            state.rotation.z,
        ),
    }
}
