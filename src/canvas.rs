//! A fixed-size RGB pixel canvas standing in for the browser drawing surface.
//!
//! Every frame is fully cleared and redrawn, so the canvas carries no state
//! between frames beyond its pixel data. All painting operations take screen
//! coordinates as `f64` and silently clip anything that falls outside the
//! buffer; a paint that lands nowhere is simply a no-op.

use crate::color::{blend, Rgb};
use crate::CHANNELS;

pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Canvas {
        let mut canvas = Canvas {
            width,
            height,
            data: vec![0; (width * height * CHANNELS) as usize],
        };
        canvas.clear(background);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB-encoded pixel data, row-major, ready for the PNG encoder
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self, color: Rgb) {
        for pixel in self.data.chunks_exact_mut(CHANNELS as usize) {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
        }
    }

    /// Blend a single pixel; out-of-range coordinates are clipped
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = ((y as u32 * self.width + x as u32) * CHANNELS) as usize;
        let dst = Rgb {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        };
        let out = blend(dst, color, alpha);
        self.data[index] = out.r;
        self.data[index + 1] = out.g;
        self.data[index + 2] = out.b;
    }

    /// Fill an axis-aligned rectangle with its top-left corner at (x, y)
    pub fn fill_rect(&mut self, x: f64, y: f64, w: u32, h: u32, color: Rgb, alpha: f64) {
        let x0 = x.round() as i64;
        let y0 = y.round() as i64;
        for dy in 0..h as i64 {
            for dx in 0..w as i64 {
                self.blend_pixel(x0 + dx, y0 + dy, color, alpha);
            }
        }
    }

    /// Draw a line between two points using Bresenham's algorithm.
    /// A `width` above 1 stamps a square brush of that size at every step.
    pub fn draw_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: u32,
        color: Rgb,
        alpha: f64,
    ) {
        let (mut x0, mut y0, x1, y1) = (
            x0.round() as i64,
            y0.round() as i64,
            x1.round() as i64,
            y1.round() as i64,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy; // error value e_xy

        loop {
            self.stamp(x0, y0, width, color, alpha);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn stamp(&mut self, x: i64, y: i64, width: u32, color: Rgb, alpha: f64) {
        if width <= 1 {
            self.blend_pixel(x, y, color, alpha);
            return;
        }
        let half = width as i64 / 2;
        for dy in -half..=(width as i64 - 1 - half) {
            for dx in -half..=(width as i64 - 1 - half) {
                self.blend_pixel(x + dx, y + dy, color, alpha);
            }
        }
    }

    /// Stroke an open polyline through the given screen points
    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], width: u32, color: Rgb, alpha: f64) {
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            self.draw_line(x0, y0, x1, y1, width, color, alpha);
        }
    }

    /// Fill a closed polygon (even-odd scanline rule), then stroke its outline.
    /// The mesh renderer uses separate fill and stroke alphas so overlapping
    /// regions of a self-intersecting surface stay legible.
    pub fn fill_polygon(
        &mut self,
        corners: &[(f64, f64)],
        color: Rgb,
        fill_alpha: f64,
        stroke_alpha: f64,
    ) {
        if corners.len() >= 3 {
            let min_y = corners.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
            let max_y = corners
                .iter()
                .map(|p| p.1)
                .fold(f64::NEG_INFINITY, f64::max);
            let y_start = min_y.floor().max(0.0) as i64;
            let y_end = max_y.ceil().min(self.height as f64 - 1.0) as i64;

            for y in y_start..=y_end {
                let scan = y as f64 + 0.5;
                let mut crossings: Vec<f64> = Vec::new();
                for i in 0..corners.len() {
                    let (x0, y0) = corners[i];
                    let (x1, y1) = corners[(i + 1) % corners.len()];
                    if (y0 <= scan && y1 > scan) || (y1 <= scan && y0 > scan) {
                        crossings.push(x0 + (scan - y0) / (y1 - y0) * (x1 - x0));
                    }
                }
                crossings.sort_by(|a, b| a.total_cmp(b));
                for span in crossings.chunks_exact(2) {
                    let x_start = span[0].round() as i64;
                    let x_end = span[1].round() as i64;
                    for x in x_start..x_end {
                        self.blend_pixel(x, y, color, fill_alpha);
                    }
                }
            }
        }

        // Outline
        for i in 0..corners.len() {
            let (x0, y0) = corners[i];
            let (x1, y1) = corners[(i + 1) % corners.len()];
            self.draw_line(x0, y0, x1, y1, 1, color, stroke_alpha);
        }
    }

    /// Fill a circle of the given radius centred on (cx, cy)
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        let r = radius.ceil() as i64;
        let x0 = cx.round() as i64;
        let y0 = cy.round() as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                let distance = ((dx * dx + dy * dy) as f64).sqrt();
                if distance <= radius {
                    self.blend_pixel(x0 + dx, y0 + dy, color, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    fn pixel(canvas: &Canvas, x: u32, y: u32) -> Rgb {
        let index = ((y * canvas.width() + x) * CHANNELS) as usize;
        Rgb {
            r: canvas.data()[index],
            g: canvas.data()[index + 1],
            b: canvas.data()[index + 2],
        }
    }

    #[test]
    fn clear_fills_every_pixel() {
        let canvas = Canvas::new(4, 3, WHITE);
        assert_eq!(canvas.data().len(), 4 * 3 * CHANNELS as usize);
        assert!(canvas.data().iter().all(|&channel| channel == 255));
    }

    #[test]
    fn out_of_range_paints_are_clipped() {
        let mut canvas = Canvas::new(8, 8, BLACK);
        canvas.blend_pixel(-1, 3, WHITE, 1.0);
        canvas.blend_pixel(8, 0, WHITE, 1.0);
        canvas.draw_line(-20.0, -20.0, 30.0, 30.0, 1, WHITE, 1.0);
        canvas.fill_circle(-5.0, -5.0, 3.0, WHITE, 1.0);
        // The diagonal crossed the canvas, nothing else should have landed
        assert_eq!(pixel(&canvas, 4, 4), WHITE);
        assert_eq!(pixel(&canvas, 7, 0), BLACK);
    }

    #[test]
    fn horizontal_line_paints_span() {
        let mut canvas = Canvas::new(10, 5, BLACK);
        canvas.draw_line(1.0, 2.0, 8.0, 2.0, 1, WHITE, 1.0);
        for x in 1..=8 {
            assert_eq!(pixel(&canvas, x, 2), WHITE);
        }
        assert_eq!(pixel(&canvas, 0, 2), BLACK);
        assert_eq!(pixel(&canvas, 9, 2), BLACK);
    }

    #[test]
    fn polygon_fill_covers_interior() {
        let mut canvas = Canvas::new(20, 20, BLACK);
        let square = [(4.0, 4.0), (15.0, 4.0), (15.0, 15.0), (4.0, 15.0)];
        canvas.fill_polygon(&square, WHITE, 1.0, 1.0);
        assert_eq!(pixel(&canvas, 9, 9), WHITE);
        assert_eq!(pixel(&canvas, 1, 1), BLACK);
    }

    #[test]
    fn fill_rect_respects_size() {
        let mut canvas = Canvas::new(10, 10, BLACK);
        canvas.fill_rect(3.0, 3.0, 2, 2, WHITE, 1.0);
        assert_eq!(pixel(&canvas, 3, 3), WHITE);
        assert_eq!(pixel(&canvas, 4, 4), WHITE);
        assert_eq!(pixel(&canvas, 5, 5), BLACK);
    }
}
