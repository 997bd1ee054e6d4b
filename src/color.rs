//! Colour helpers for the canvas: HSL conversion and source-over blending.
//!
//! The renderer colours geometry the same way the browser canvas API does,
//! with `hsl(hue, saturation, lightness)` values and a per-operation alpha,
//! so the hue formulas used by the generators carry over unchanged.

/// An 8-bit RGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Dimmed grey used for de-emphasized points when a transform is highlighted
pub const DIM_GREY: Rgb = Rgb {
    r: 0x33,
    g: 0x33,
    b: 0x33,
};

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Convert an HSL colour to RGB.
    /// Hue is in degrees (wrapped into [0, 360)), saturation and lightness in [0, 1].
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Rgb {
        let hue = hue.rem_euclid(360.0);
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let base = lightness - chroma / 2.0;

        let (r, g, b) = match hue {
            h if h < 60.0 => (chroma, secondary, 0.0),
            h if h < 120.0 => (secondary, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, secondary),
            h if h < 240.0 => (0.0, secondary, chroma),
            h if h < 300.0 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        Rgb {
            r: ((r + base) * 255.0).round() as u8,
            g: ((g + base) * 255.0).round() as u8,
            b: ((b + base) * 255.0).round() as u8,
        }
    }
}

/// Source-over blend of `src` at `alpha` onto `dst`
pub fn blend(dst: Rgb, src: Rgb, alpha: f64) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |d: u8, s: u8| (s as f64 * alpha + d as f64 * (1.0 - alpha)).round() as u8;
    Rgb {
        r: mix(dst.r, src.r),
        g: mix(dst.g, src.g),
        b: mix(dst.b, src.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        assert_eq!(Rgb::hsl(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::hsl(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::hsl(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsl_wraps_hue() {
        assert_eq!(Rgb::hsl(360.0, 0.7, 0.5), Rgb::hsl(0.0, 0.7, 0.5));
        assert_eq!(Rgb::hsl(-120.0, 0.7, 0.5), Rgb::hsl(240.0, 0.7, 0.5));
    }

    #[test]
    fn hsl_zero_saturation_is_grey() {
        let grey = Rgb::hsl(200.0, 0.0, 0.5);
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
    }

    #[test]
    fn blend_extremes() {
        assert_eq!(blend(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(blend(BLACK, WHITE, 1.0), WHITE);
    }

    #[test]
    fn blend_partial() {
        let half = blend(BLACK, WHITE, 0.5);
        assert!(half.r > 120 && half.r < 136);
    }
}
