//! Utility for program configuration arguments

use crate::render_settings::{RenderSettings, DEFAULT_RENDER_SETTINGS};
use crate::scene::Scene;
use crate::teaching;
use clap::{Parser, Subcommand};
use console::style;
use std::process::exit;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File to write to; animations append the frame number before the extension
    #[clap(short, long, value_parser, default_value = "image.png")]
    output: String,

    /// Scene to render (fern, koch-snowflake, binary-tree, mobius-strip, klein-bottle)
    #[clap(short, long, value_parser)]
    scene: Option<Scene>,

    /// Number of animation frames, overriding the configured value
    #[clap(short, long, value_parser)]
    frames: Option<u32>,

    /// Configuration file
    #[clap(short, long, value_parser)]
    config: Option<String>,

    /// Alternate behaviours for the program
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display configuration wizard
    Wizard {
        /// Path to write the selected configuration to
        #[clap(short, long, value_parser)]
        save_config: Option<String>,
    },
    /// Write the default configuration to TOML
    WriteDefault {
        /// Path to write the default configuration to (writes to stdout if unset)
        #[clap(short, long, value_parser)]
        save_config: Option<String>,
    },
    /// Print the teaching notes for a scene
    Notes {
        /// Scene to describe
        #[clap(value_parser)]
        scene: Scene,
    },
}

/// How to run the program
pub struct ProgramOptions {
    /// Rendering settings
    pub render_settings: RenderSettings,

    /// Filepath for output (png image format)
    pub output_path: String,
}

/// Get options from program arguments
pub fn get_options() -> Result<ProgramOptions, Box<dyn std::error::Error>> {
    let args: Args = Args::parse();
    let render_settings = match &args.command {
        Some(Commands::WriteDefault {
            save_config: config,
        }) => {
            match config {
                Some(path) => {
                    DEFAULT_RENDER_SETTINGS.to_file(path)?;
                }
                None => {
                    println!("{}", DEFAULT_RENDER_SETTINGS.serialize()?);
                }
            };
            exit(0);
        }
        Some(Commands::Notes { scene }) => {
            print_notes(*scene);
            exit(0);
        }
        Some(Commands::Wizard {
            save_config: config,
        }) => match RenderSettings::from_wizard()? {
            Some(settings) => {
                if let Some(config) = config {
                    settings.to_file(config)?;
                }
                Ok(settings)
            }
            None => Err("User canceled..."),
        },
        None => {
            if let Some(config_path) = args.config.as_deref() {
                Ok(RenderSettings::from_file(config_path)?)
            } else {
                Ok(DEFAULT_RENDER_SETTINGS)
            }
        }
    }?;

    let mut render_settings = render_settings;
    if let Some(scene) = args.scene {
        render_settings.scene = scene;
    }
    if let Some(frames) = args.frames {
        render_settings.frames = frames;
    }
    let render_settings = render_settings.clamped();

    let output_path = args.output.clone();
    Ok(ProgramOptions {
        render_settings,
        output_path,
    })
}

/// Print a scene's teaching steps, numbered and lightly styled, walking the
/// same cursor an interactive presentation would
fn print_notes(scene: Scene) {
    println!("{}", style(scene.title()).bold());
    let steps = teaching::steps(scene);
    let mut cursor = teaching::StepCursor::new(steps.len());
    while let Some(step) = steps.get(cursor.index()) {
        println!(
            "\n{} {}",
            style(format!("{}.", cursor.index() + 1)).cyan().bold(),
            style(step.title).bold()
        );
        println!("{}", step.content);
        if cursor.index() + 1 == steps.len() {
            break;
        }
        cursor.next();
    }
}
