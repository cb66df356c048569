//! Decorative frame overlays.
//!
//! Each [`FramePreset`] variant owns one rendering routine, dispatched by a
//! plain `match` — no numeric IDs. All geometry is derived from the canvas
//! dimensions (fractions of width/height, or the `max(w,h)/1000` scale unit
//! for the neon strokes), so a frame looks proportionally identical on a
//! thumbnail and a full-resolution photo.
//!
//! Frames draw over the already-adjusted canvas through [`Surface`], which
//! carries no tonal state — overlay pixels are never subject to the color
//! adjustments.

use clap::ValueEnum;
use image::RgbaImage;

use super::surface::{Paint, Path, Stop, Surface, Tint};

/// Overlay selector. `None` leaves the canvas untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FramePreset {
    #[default]
    None,
    Polaroid,
    Vintage,
    Rainbow,
    Neon,
    Gold,
    Hearts,
}

/// Caption printed in the polaroid band.
const CAPTION: &str = "Photobooth";

/// The six-stop hue spectrum of the rainbow border, each stop at alpha 0.3.
const RAINBOW_STOPS: [Stop; 6] = [
    (0.0, Tint::rgba(255.0, 0.0, 150.0, 0.3)),
    (0.2, Tint::rgba(255.0, 100.0, 0.0, 0.3)),
    (0.4, Tint::rgba(255.0, 255.0, 0.0, 0.3)),
    (0.6, Tint::rgba(0.0, 255.0, 100.0, 0.3)),
    (0.8, Tint::rgba(0.0, 150.0, 255.0, 0.3)),
    (1.0, Tint::rgba(150.0, 0.0, 255.0, 0.3)),
];

const GOLD_STOPS: [Stop; 3] = [
    (0.0, Tint::rgba(255.0, 215.0, 0.0, 0.7)),
    (0.5, Tint::rgba(255.0, 223.0, 0.0, 0.3)),
    (1.0, Tint::rgba(255.0, 215.0, 0.0, 0.7)),
];

const VINTAGE_STOPS: [Stop; 3] = [
    (0.0, Tint::rgba(139.0, 69.0, 19.0, 0.0)),
    (0.7, Tint::rgba(139.0, 69.0, 19.0, 0.1)),
    (1.0, Tint::rgba(139.0, 69.0, 19.0, 0.4)),
];

impl FramePreset {
    /// Every variant in display order, `None` first.
    pub fn all() -> [FramePreset; 7] {
        [
            FramePreset::None,
            FramePreset::Polaroid,
            FramePreset::Vintage,
            FramePreset::Rainbow,
            FramePreset::Neon,
            FramePreset::Gold,
            FramePreset::Hearts,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FramePreset::None => "No Frame",
            FramePreset::Polaroid => "Polaroid",
            FramePreset::Vintage => "Vintage",
            FramePreset::Rainbow => "Rainbow",
            FramePreset::Neon => "Neon",
            FramePreset::Gold => "Gold",
            FramePreset::Hearts => "Hearts",
        }
    }

    /// Draw the selected overlay onto the canvas in place.
    pub fn render(&self, canvas: &mut RgbaImage) {
        let mut surface = Surface::new(canvas);
        match self {
            FramePreset::None => {}
            FramePreset::Polaroid => polaroid(&mut surface),
            FramePreset::Vintage => vintage(&mut surface),
            FramePreset::Rainbow => rainbow(&mut surface),
            FramePreset::Neon => neon(&mut surface),
            FramePreset::Gold => gold(&mut surface),
            FramePreset::Hearts => hearts(&mut surface),
        }
    }
}

/// Opaque white band over the bottom 15%, caption centered inside it.
fn polaroid(surface: &mut Surface) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    surface.fill_rect(
        0.0,
        h * 0.85,
        w,
        h * 0.15,
        &Paint::Solid(Tint::opaque(255.0, 255.0, 255.0)),
    );
    // Glyph cells are 8px tall; snap the 3%-of-width caption size to the
    // nearest integer scale, never below 1
    let scale = ((w * 0.03 / 8.0).round() as u32).max(1);
    surface.draw_text(
        CAPTION,
        w / 2.0,
        h * 0.95,
        scale,
        Tint::opaque(51.0, 51.0, 51.0),
    );
}

/// Lens-vignette tint: transparent middle, warm brown corners.
fn vintage(surface: &mut Surface) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let paint = Paint::Radial {
        center: (w / 2.0, h / 2.0),
        radius: w.max(h) / 2.0,
        stops: &VINTAGE_STOPS,
    };
    surface.fill_rect(0.0, 0.0, w, h, &paint);
}

/// Four border strips, the hue spectrum running along each strip.
fn rainbow(surface: &mut Surface) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let border = w.max(h) * 0.02;

    let across = Paint::Linear {
        from: (0.0, 0.0),
        to: (w, 0.0),
        stops: &RAINBOW_STOPS,
    };
    surface.fill_rect(0.0, 0.0, w, border, &across);
    surface.fill_rect(0.0, h - border, w, border, &across);

    let down = Paint::Linear {
        from: (0.0, 0.0),
        to: (0.0, h),
        stops: &RAINBOW_STOPS,
    };
    surface.fill_rect(0.0, 0.0, border, h, &down);
    surface.fill_rect(w - border, 0.0, border, h, &down);
}

/// Two concentric glowing strokes: cyan outside, magenta inside.
fn neon(surface: &mut Surface) {
    let unit = surface.width().max(surface.height()) as f32 / 1000.0;
    surface.stroke_rounded_rect(
        20.0 * unit,
        8.0 * unit,
        8.0 * unit,
        20.0 * unit,
        Tint::opaque(0.0, 255.0, 255.0),
    );
    surface.stroke_rounded_rect(
        30.0 * unit,
        8.0 * unit,
        4.0 * unit,
        20.0 * unit,
        Tint::opaque(255.0, 0.0, 255.0),
    );
}

/// Four border strips under one corner-to-corner gold gradient.
fn gold(surface: &mut Surface) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let border = w.max(h) * 0.03;
    let diagonal = Paint::Linear {
        from: (0.0, 0.0),
        to: (w, h),
        stops: &GOLD_STOPS,
    };
    surface.fill_rect(0.0, 0.0, w, border, &diagonal);
    surface.fill_rect(0.0, h - border, w, border, &diagonal);
    surface.fill_rect(0.0, 0.0, border, h, &diagonal);
    surface.fill_rect(w - border, 0.0, border, h, &diagonal);
}

/// One translucent pink heart inset near each corner.
fn hearts(surface: &mut Surface) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let size = w.min(h) * 0.05;
    let pink = Tint::rgba(255.0, 20.0, 147.0, 0.6);

    for (x, y) in [
        (size, size),
        (w - size * 2.0, size),
        (size, h - size * 2.0),
        (w - size * 2.0, h - size * 2.0),
    ] {
        surface.fill_path(&heart_path(x, y, size), pink);
    }
}

/// Symmetric two-lobe heart: four cubic segments around the anchor point at
/// the notch between the lobes.
fn heart_path(x: f32, y: f32, size: f32) -> Path {
    let top = size * 0.3;
    let waist = y + (top + size) / 2.0;
    let mut path = Path::new((x, y + top));
    path.cubic_to((x, y), (x - size / 2.0, y), (x - size / 2.0, y + top))
        .cubic_to((x - size / 2.0, waist), (x, waist), (x, y + size))
        .cubic_to((x, waist), (x + size / 2.0, waist), (x + size / 2.0, y + top))
        .cubic_to((x + size / 2.0, y), (x, y), (x, y + top));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn red(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([200, 0, 0, 255]))
    }

    fn white(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn none_leaves_canvas_byte_identical() {
        let mut canvas = red(33, 47);
        let before = canvas.clone();
        FramePreset::None.render(&mut canvas);
        assert_eq!(canvas.as_raw(), before.as_raw());
    }

    #[test]
    fn polaroid_band_is_fifteen_percent_at_any_size() {
        for (w, h) in [(100u32, 100u32), (1000, 1000)] {
            let mut canvas = red(w, h);
            FramePreset::Polaroid.render(&mut canvas);
            let band_top = (h as f32 * 0.85) as u32;
            assert_eq!(canvas.get_pixel(0, band_top - 1).0, [200, 0, 0, 255]);
            assert_eq!(canvas.get_pixel(0, band_top).0, [255, 255, 255, 255]);
            assert_eq!(canvas.get_pixel(0, h - 1).0, [255, 255, 255, 255]);
        }
    }

    #[test]
    fn polaroid_draws_a_caption() {
        let mut canvas = red(400, 400);
        FramePreset::Polaroid.render(&mut canvas);
        let caption_pixels = canvas
            .enumerate_pixels()
            .filter(|(_, y, _)| *y >= 340)
            .filter(|(_, _, p)| p.0 == [51, 51, 51, 255])
            .count();
        assert!(caption_pixels > 0);
    }

    #[test]
    fn vintage_tints_corners_not_center() {
        let mut canvas = white(200, 200);
        FramePreset::Vintage.render(&mut canvas);
        assert_eq!(canvas.get_pixel(100, 100).0, [255, 255, 255, 255]);
        let corner = canvas.get_pixel(0, 0).0;
        assert!(corner[2] < 255, "corner should carry the brown tint");
        // Warm tint: blue drops hardest
        assert!(corner[0] > corner[2]);
    }

    #[test]
    fn rainbow_strips_are_two_percent() {
        let mut canvas = white(200, 100);
        FramePreset::Rainbow.render(&mut canvas);
        let border = 4; // max(200, 100) * 0.02
        assert_ne!(canvas.get_pixel(100, 0).0, [255, 255, 255, 255]);
        assert_ne!(canvas.get_pixel(100, border - 1).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(100, border).0, [255, 255, 255, 255]);
        // Side strips too
        assert_ne!(canvas.get_pixel(0, 50).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(border, 50).0, [255, 255, 255, 255]);
    }

    #[test]
    fn gold_strips_are_three_percent() {
        let mut canvas = white(100, 100);
        FramePreset::Gold.render(&mut canvas);
        assert_ne!(canvas.get_pixel(50, 0).0, [255, 255, 255, 255]);
        assert_ne!(canvas.get_pixel(50, 2).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(50, 3).0, [255, 255, 255, 255]);
        assert_eq!(canvas.get_pixel(50, 50).0, [255, 255, 255, 255]);
    }

    #[test]
    fn neon_strokes_ring_the_edges() {
        let mut canvas = red(1000, 1000);
        FramePreset::Neon.render(&mut canvas);
        // Inner stroke core sits 30 units in; its opaque magenta is the
        // last paint there
        assert_eq!(canvas.get_pixel(500, 30).0, [255, 0, 255, 255]);
        // Outer core at 20 units keeps full cyan blue under the magenta glow
        let outer = canvas.get_pixel(500, 20).0;
        assert_eq!(outer[2], 255);
        assert!(outer[1] > outer[0]);
        // The photo interior is beyond both glows
        assert_eq!(canvas.get_pixel(500, 500).0, [200, 0, 0, 255]);
    }

    #[test]
    fn neon_geometry_scales_down() {
        let mut canvas = red(100, 100);
        FramePreset::Neon.render(&mut canvas);
        // At a tenth of the size the ring sits a tenth as far in
        assert_ne!(canvas.get_pixel(50, 2).0, [200, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(50, 50).0, [200, 0, 0, 255]);
    }

    #[test]
    fn hearts_sit_near_all_four_corners() {
        let mut canvas = white(400, 400);
        FramePreset::Hearts.render(&mut canvas);
        let is_pinkish = |x: u32, y: u32| {
            let p = canvas.get_pixel(x, y).0;
            p[0] == 255 && p[1] < 255 && p[2] < 255
        };
        // size = 20: each heart spans x±10 around its anchor and 20 rows down
        assert!(is_pinkish(20, 30));
        assert!(is_pinkish(360, 30));
        assert!(is_pinkish(20, 370));
        assert!(is_pinkish(360, 370));
        assert!(!is_pinkish(200, 200));
    }

    #[test]
    fn labels_cover_every_variant() {
        for frame in FramePreset::all() {
            assert!(!frame.label().is_empty());
        }
        assert_eq!(FramePreset::all().len(), 7);
    }
}
