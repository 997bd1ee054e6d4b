//! Render interactive mathematical patterns to PNG.
//!
//! Five scenes are available: the Barnsley fern, the Koch snowflake, a
//! recursive binary tree, the Mobius strip, and the Klein bottle. Each frame
//! is a full recomputation of its scene from the current animation state, so
//! a still is simply a one-frame animation.

use crate::animation::AnimationState;
use crate::canvas::Canvas;
use crate::program_options::ProgramOptions;
use dialoguer::console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use rand::thread_rng;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::thread;
use std::thread::JoinHandle;

mod animation;
mod canvas;
mod color;
mod fern;
mod geometry;
mod koch;
mod program_options;
mod render_settings;
mod scene;
mod surface;
mod teaching;
mod tree;

/// This program is hard-coded to output RGB-encoded PNG files, so 3 channels are used throughout.
const CHANNELS: u32 = 3;

/// Cap on encoder threads running behind the render loop; each pending write
/// holds a full frame buffer until it finishes
const MAX_PENDING_WRITES: usize = 8;

/// Main function that will hopefully give you a nice picture by the end
fn main() -> Result<(), Box<dyn Error>> {
    let ProgramOptions {
        render_settings,
        output_path,
    } = program_options::get_options()?;

    println!("Rendering with settings:\n{render_settings}");

    let progress_bar_style = ProgressStyle::with_template(
        "{spinner:.black.on_blue.bold}{wide_bar:.blue/white} [eta:{eta_precise}] {msg:>40.white.bold}",
    )
    .unwrap();

    let frames = render_settings.frames;
    let progress = ProgressBar::new(frames.into());
    progress.set_style(progress_bar_style);
    progress.set_message(format!("Rendering {}", render_settings.scene));
    progress.tick();

    let mut state = AnimationState::new();
    let mut rng = thread_rng();
    let mut writers: Vec<JoinHandle<Result<(), png::EncodingError>>> = vec![];

    for frame in 0..frames {
        animation::tick(&mut state, &render_settings, &mut rng);
        let canvas = scene::render_frame(&render_settings, &state);
        writers.push(write_image(canvas, frame_path(&output_path, frame, frames)));
        if writers.len() >= MAX_PENDING_WRITES {
            let oldest = writers.remove(0);
            oldest.join().expect("Problem writing data to file")?;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    for writer in writers {
        writer.join().expect("Problem writing data to file")?;
    }

    println!("{}", scene::frame_stats(&render_settings, &state));
    Ok(())
}

/// Output path for one frame. Stills keep the configured path; animations
/// number each frame before the extension.
fn frame_path(output_path: &str, frame: u32, frames: u32) -> PathBuf {
    if frames <= 1 {
        return PathBuf::from(output_path);
    }
    let path = Path::new(output_path);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("png");
    path.with_file_name(format!("{stem}_{frame:04}.{extension}"))
}

/// Encode and write a frame on a background thread so the next frame can
/// render while this one hits the disk
fn write_image(canvas: Canvas, path: PathBuf) -> JoinHandle<Result<(), png::EncodingError>> {
    thread::spawn(move || data_to_png(canvas.data(), canvas.width(), canvas.height(), &path))
}

fn data_to_png(
    data: &[u8],
    width: u32,
    height: u32,
    path: &Path,
) -> Result<(), png::EncodingError> {
    let file = File::create(path)?;
    let ref mut w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_keeps_the_configured_path() {
        assert_eq!(frame_path("image.png", 0, 1), PathBuf::from("image.png"));
    }

    #[test]
    fn animation_frames_are_numbered() {
        assert_eq!(
            frame_path("out/fern.png", 12, 60),
            PathBuf::from("out/fern_0012.png")
        );
    }

    #[test]
    fn missing_extension_defaults_to_png() {
        assert_eq!(frame_path("render", 3, 10), PathBuf::from("render_0003.png"));
    }

    #[test]
    fn background_writers_land_their_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut writers = vec![];
        for frame in 0..3 {
            let canvas = Canvas::new(16, 16, crate::color::BLACK);
            let path = dir.path().join(format!("frame_{frame}.png"));
            writers.push(write_image(canvas, path));
        }
        for writer in writers {
            writer.join().unwrap().unwrap();
        }
        for frame in 0..3 {
            assert!(dir.path().join(format!("frame_{frame}.png")).exists());
        }
    }
}
