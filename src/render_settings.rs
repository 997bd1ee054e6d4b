//! Utility for rendering settings

use crate::scene::Scene;
use crate::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use serde::{Deserialize, Serialize};
use std::io::Error;
use std::{fmt, fs};

/// Configuration settings for the main function
#[derive(Serialize, Deserialize, Clone)]
pub struct RenderSettings {
    /// Which visualization to render
    pub scene: Scene,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Recursion depth for the Koch snowflake (0-7) and binary tree (1-12)
    pub depth: u32,
    /// Fern points generated per animation frame
    pub speed: u32,
    /// Zoom factor applied at the model-to-screen boundary
    pub zoom: f64,
    /// Pan offset in pixels, applied after zoom
    pub offset: [f64; 2],
    /// Number of animation frames to render; 1 produces a single still
    pub frames: u32,
    /// Half-twist count for the Mobius strip (1 is the classic strip)
    pub half_twists: u32,
    /// Draw the tracked particle travelling over the surface
    pub show_particle: bool,
    /// Stroke the fixed-v cross-section path over the surface
    pub show_cross_section: bool,
    /// Name of the fern transform to emphasize; other points are dimmed
    pub highlight: Option<String>,
}

/// Default settings (equivalent to selecting the default values in the
/// configuration wizard)
pub const DEFAULT_RENDER_SETTINGS: RenderSettings = RenderSettings {
    scene: Scene::Fern,
    width: 600,
    height: 600,
    depth: 4,
    speed: 200,
    zoom: 1.0,
    offset: [0.0, 0.0],
    frames: 60,
    half_twists: 1,
    show_particle: false,
    show_cross_section: false,
    highlight: None,
};

/// Bounds enforced at the configuration boundary. The generators assume valid
/// input; clamping never happens inside them.
pub const KOCH_DEPTH_RANGE: (u32, u32) = (0, 7);
pub const TREE_DEPTH_RANGE: (u32, u32) = (1, 12);
pub const ZOOM_RANGE: (f64, f64) = (0.2, 4.0);
pub const SPEED_RANGE: (u32, u32) = (1, 5_000);
pub const HALF_TWIST_RANGE: (u32, u32) = (1, 8);

impl fmt::Display for RenderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scene:\t\t{}\nResolution:\t{}x{}\nDepth:\t\t{}\nPoints/frame:\t{}\nZoom:\t\t{:.0}%\nFrames:\t\t{}{}",
            self.scene,
            self.width,
            self.height,
            self.depth,
            self.speed,
            self.zoom * 100.0,
            self.frames,
            match self.scene {
                Scene::MobiusStrip => format!("\nHalf-twists:\t{}", self.half_twists),
                _ => String::from(""),
            },
        )
    }
}

impl RenderSettings {
    /// Serializes and writes the configuration in TOML format to a file
    pub fn to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.serialize()?)?;
        Ok(())
    }

    /// Serializes the configuration to TOML
    pub fn serialize(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Opens a TOML file to a [`RenderSettings`]
    pub fn from_file(path: &str) -> Result<RenderSettings, Box<dyn std::error::Error>> {
        let data: String = fs::read_to_string(path)?;
        Ok(toml::from_str(data.as_str())?)
    }

    /// Clamp every parameter into its practical range. Depth bounds keep the
    /// segment counts renderable (3*4^depth for the snowflake, 2^(depth+1)-1
    /// for the tree).
    pub fn clamped(mut self) -> RenderSettings {
        self.depth = match self.scene {
            Scene::KochSnowflake => self.depth.clamp(KOCH_DEPTH_RANGE.0, KOCH_DEPTH_RANGE.1),
            Scene::BinaryTree => self.depth.clamp(TREE_DEPTH_RANGE.0, TREE_DEPTH_RANGE.1),
            _ => self.depth,
        };
        self.zoom = self.zoom.clamp(ZOOM_RANGE.0, ZOOM_RANGE.1);
        self.speed = self.speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
        self.half_twists = self
            .half_twists
            .clamp(HALF_TWIST_RANGE.0, HALF_TWIST_RANGE.1);
        self.frames = self.frames.max(1);
        self
    }

    /// Generates a [`RenderSettings`] from a TUI in the terminal
    pub fn from_wizard() -> Result<Option<RenderSettings>, Box<dyn std::error::Error>> {
        let scene = match select(
            "Scene",
            vec![
                ("Barnsley fern", &Scene::Fern),
                ("Koch snowflake", &Scene::KochSnowflake),
                ("Binary tree", &Scene::BinaryTree),
                ("Mobius strip", &Scene::MobiusStrip),
                ("Klein bottle", &Scene::KleinBottle),
            ],
            0,
        )? {
            Some(scene) => *scene,
            None => return Ok(None),
        };

        let resolution = match select(
            "Resolution",
            vec![
                ("Small (600)", &600_u32),
                ("Medium (800)", &800),
                ("Large (1024)", &1024),
            ],
            0,
        )? {
            Some(val) => *val,
            None => return Ok(None),
        };

        let mut settings = RenderSettings {
            scene,
            width: resolution,
            height: resolution,
            ..DEFAULT_RENDER_SETTINGS
        };

        match scene {
            Scene::KochSnowflake => {
                settings.depth = match select(
                    "Detail",
                    vec![
                        ("Gentle (depth 3)", &3),
                        ("Classic (depth 5)", &5),
                        ("Intricate (depth 7)", &7),
                    ],
                    1,
                )? {
                    Some(val) => *val,
                    None => return Ok(None),
                };
            }
            Scene::BinaryTree => {
                settings.depth = match select(
                    "Detail",
                    vec![
                        ("Sapling (depth 6)", &6),
                        ("Grown (depth 9)", &9),
                        ("Dense (depth 12)", &12),
                    ],
                    1,
                )? {
                    Some(val) => *val,
                    None => return Ok(None),
                };
            }
            Scene::Fern => {
                settings.speed = match select(
                    "Growth speed",
                    vec![("Sparse", &50), ("Normal", &200), ("Dense", &500)],
                    1,
                )? {
                    Some(val) => *val,
                    None => return Ok(None),
                };
            }
            Scene::MobiusStrip => {
                settings.half_twists = match select(
                    "Half-twists",
                    vec![("One (classic)", &1), ("Two", &2), ("Three", &3)],
                    0,
                )? {
                    Some(val) => *val,
                    None => return Ok(None),
                };
            }
            Scene::KleinBottle => {}
        }

        settings.frames = match select(
            "Animation",
            vec![
                ("Still image", &1_u32),
                ("Short animation (60 frames)", &60),
                ("Full loop (360 frames)", &360),
            ],
            1,
        )? {
            Some(val) => *val,
            None => return Ok(None),
        };

        if Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Render like this?"))
            .default(true)
            .interact()?
        {
            Ok(Some(settings))
        } else {
            Err("Canceled".into())
        }
    }
}

fn select<'a, T>(
    prompt: &str,
    items: Vec<(&str, &'a T)>,
    default: usize,
) -> Result<Option<&'a T>, Error> {
    let (selections, values): (Vec<&str>, Vec<&T>) = items.into_iter().unzip();
    match Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&selections)
        .default(default)
        .interact_on_opt(&Term::stderr())?
    {
        Some(index) => Ok(Some(values[index])),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn toml_round_trip_preserves_settings() {
        let mut settings = DEFAULT_RENDER_SETTINGS.clone();
        settings.scene = Scene::KleinBottle;
        settings.show_particle = true;
        settings.highlight = Some(String::from("Main Stem"));

        let serialized = settings.serialize().unwrap();
        let restored: RenderSettings = toml::from_str(&serialized).unwrap();
        assert_eq!(restored.scene, Scene::KleinBottle);
        assert!(restored.show_particle);
        assert_eq!(restored.highlight.as_deref(), Some("Main Stem"));
        assert_eq!(restored.frames, settings.frames);
    }

    #[test]
    fn settings_round_trip_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let path = path.to_str().unwrap();

        DEFAULT_RENDER_SETTINGS.to_file(path).unwrap();
        let restored = RenderSettings::from_file(path).unwrap();
        assert_eq!(restored.scene, DEFAULT_RENDER_SETTINGS.scene);
        assert_eq!(restored.width, DEFAULT_RENDER_SETTINGS.width);
        assert_eq!(restored.speed, DEFAULT_RENDER_SETTINGS.speed);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "scene = \"dodecahedron\"").unwrap();
        assert!(RenderSettings::from_file(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn clamping_bounds_the_koch_depth() {
        let mut settings = DEFAULT_RENDER_SETTINGS.clone();
        settings.scene = Scene::KochSnowflake;
        settings.depth = 30;
        assert_eq!(settings.clamped().depth, KOCH_DEPTH_RANGE.1);
    }

    #[test]
    fn clamping_keeps_the_tree_depth_positive() {
        let mut settings = DEFAULT_RENDER_SETTINGS.clone();
        settings.scene = Scene::BinaryTree;
        settings.depth = 0;
        assert_eq!(settings.clamped().depth, TREE_DEPTH_RANGE.0);
    }

    #[test]
    fn clamping_bounds_zoom_and_frames() {
        let mut settings = DEFAULT_RENDER_SETTINGS.clone();
        settings.zoom = 100.0;
        settings.frames = 0;
        let clamped = settings.clamped();
        assert_eq!(clamped.zoom, ZOOM_RANGE.1);
        assert_eq!(clamped.frames, 1);
    }

    #[test]
    fn display_names_the_scene() {
        let text = DEFAULT_RENDER_SETTINGS.to_string();
        assert!(text.contains("fern"));
        assert!(text.contains("600x600"));
    }
}
