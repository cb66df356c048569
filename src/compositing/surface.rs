//! Pixel drawing surface backing the frame renderers.
//!
//! A thin capability set over an [`RgbaImage`]: filled rects with solid or
//! gradient paint, rounded-rect strokes with a glow falloff, even-odd path
//! fills built from cubic Béziers, and bitmap caption text. Everything
//! rasterizes on the CPU with plain source-over blending — no GPU, no
//! external 2D library, and no retained filter state that could leak tonal
//! adjustments into overlay pixels.
//!
//! Pixel coverage is center-sampled: a pixel belongs to a shape when its
//! center lies inside. That keeps fractional geometry (a 15% band, a 2%
//! strip) proportionally identical across resolutions.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::RgbaImage;

/// An RGBA paint color: channels in 0–255, alpha as a 0–1 coverage factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A gradient stop: offset along the gradient axis in 0–1, and its color.
pub type Stop = (f32, Tint);

/// Fill paint: a solid color or a gradient evaluated per pixel.
pub enum Paint<'a> {
    Solid(Tint),
    /// Linear gradient from one point to another, in pixel coordinates.
    Linear {
        from: (f32, f32),
        to: (f32, f32),
        stops: &'a [Stop],
    },
    /// Radial gradient from a center out to `radius`.
    Radial {
        center: (f32, f32),
        radius: f32,
        stops: &'a [Stop],
    },
}

impl Paint<'_> {
    fn at(&self, x: f32, y: f32) -> Tint {
        match self {
            Paint::Solid(tint) => *tint,
            Paint::Linear { from, to, stops } => {
                let (dx, dy) = (to.0 - from.0, to.1 - from.1);
                let len_sq = dx * dx + dy * dy;
                let t = if len_sq > 0.0 {
                    ((x - from.0) * dx + (y - from.1) * dy) / len_sq
                } else {
                    0.0
                };
                sample_stops(stops, t)
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let d = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
                let t = if *radius > 0.0 { d / radius } else { 0.0 };
                sample_stops(stops, t)
            }
        }
    }
}

/// Piecewise-linear interpolation between gradient stops, clamped at the ends.
fn sample_stops(stops: &[Stop], t: f32) -> Tint {
    match stops {
        [] => Tint::rgba(0.0, 0.0, 0.0, 0.0),
        [only] => only.1,
        _ => {
            if t <= stops[0].0 {
                return stops[0].1;
            }
            for pair in stops.windows(2) {
                let (t0, c0) = pair[0];
                let (t1, c1) = pair[1];
                if t <= t1 {
                    let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
                    return Tint::rgba(
                        c0.r + (c1.r - c0.r) * f,
                        c0.g + (c1.g - c0.g) * f,
                        c0.b + (c1.b - c0.b) * f,
                        c0.a + (c1.a - c0.a) * f,
                    );
                }
            }
            stops[stops.len() - 1].1
        }
    }
}

/// A closed outline built by flattening cubic Bézier segments.
pub struct Path {
    points: Vec<(f32, f32)>,
}

/// Flattening resolution per cubic segment. Enough that the largest frame
/// glyphs stay smooth while the point count stays trivial.
const CUBIC_SEGMENTS: u32 = 24;

impl Path {
    pub fn new(start: (f32, f32)) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Append a cubic Bézier from the current point, flattened to line
    /// segments.
    pub fn cubic_to(&mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) -> &mut Self {
        let start = *self.points.last().unwrap_or(&end);
        for i in 1..=CUBIC_SEGMENTS {
            let t = i as f32 / CUBIC_SEGMENTS as f32;
            let u = 1.0 - t;
            let x = u * u * u * start.0
                + 3.0 * u * u * t * c1.0
                + 3.0 * u * t * t * c2.0
                + t * t * t * end.0;
            let y = u * u * u * start.1
                + 3.0 * u * u * t * c1.1
                + 3.0 * u * t * t * c2.1
                + t * t * t * end.1;
            self.points.push((x, y));
        }
        self
    }
}

/// Mutable drawing view over a canvas.
pub struct Surface<'a> {
    canvas: &'a mut RgbaImage,
}

impl<'a> Surface<'a> {
    pub fn new(canvas: &'a mut RgbaImage) -> Self {
        Self { canvas }
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Source-over blend one pixel.
    fn blend(&mut self, x: u32, y: u32, tint: Tint) {
        if tint.a <= 0.0 || x >= self.canvas.width() || y >= self.canvas.height() {
            return;
        }
        let px = self.canvas.get_pixel_mut(x, y);
        if tint.a >= 1.0 {
            px.0[0] = tint.r.round().clamp(0.0, 255.0) as u8;
            px.0[1] = tint.g.round().clamp(0.0, 255.0) as u8;
            px.0[2] = tint.b.round().clamp(0.0, 255.0) as u8;
            px.0[3] = 255;
            return;
        }
        let inv = 1.0 - tint.a;
        px.0[0] = (tint.r * tint.a + px.0[0] as f32 * inv).round().clamp(0.0, 255.0) as u8;
        px.0[1] = (tint.g * tint.a + px.0[1] as f32 * inv).round().clamp(0.0, 255.0) as u8;
        px.0[2] = (tint.b * tint.a + px.0[2] as f32 * inv).round().clamp(0.0, 255.0) as u8;
        let out_a = tint.a + px.0[3] as f32 / 255.0 * inv;
        px.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Fill an axis-aligned rect. A pixel is covered when its center lies
    /// inside `[x, x+w) × [y, y+h)`.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x0 = x.floor().max(0.0) as u32;
        let y0 = y.floor().max(0.0) as u32;
        let x1 = (x + w).ceil().min(self.width() as f32) as u32;
        let y1 = (y + h).ceil().min(self.height() as f32) as u32;
        for py in y0..y1 {
            let cy = py as f32 + 0.5;
            if cy < y || cy >= y + h {
                continue;
            }
            for px in x0..x1 {
                let cx = px as f32 + 0.5;
                if cx < x || cx >= x + w {
                    continue;
                }
                let tint = paint.at(cx, cy);
                self.blend(px, py, tint);
            }
        }
    }

    /// Stroke a rounded rect inset from the canvas edges, with a soft glow.
    ///
    /// The stroke core (within `stroke_width / 2` of the outline) paints at
    /// the color's own alpha; beyond it the alpha falls off quadratically
    /// over `glow` pixels, approximating a shadow-blurred stroke.
    pub fn stroke_rounded_rect(
        &mut self,
        inset: f32,
        corner_radius: f32,
        stroke_width: f32,
        glow: f32,
        color: Tint,
    ) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        let (cx, cy) = (w / 2.0, h / 2.0);
        let half_w = (w / 2.0 - inset).max(0.0);
        let half_h = (h / 2.0 - inset).max(0.0);
        let r = corner_radius.min(half_w).min(half_h);
        let reach = stroke_width / 2.0 + glow;

        for py in 0..self.height() {
            for px in 0..self.width() {
                let qx = (px as f32 + 0.5 - cx).abs() - (half_w - r);
                let qy = (py as f32 + 0.5 - cy).abs() - (half_h - r);
                // signed distance to the rounded-rect outline
                let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
                let inside = qx.max(qy).min(0.0);
                let dist = (outside + inside - r).abs();

                if dist <= stroke_width / 2.0 {
                    self.blend(px, py, color);
                } else if dist <= reach && glow > 0.0 {
                    let f = 1.0 - (dist - stroke_width / 2.0) / glow;
                    self.blend(px, py, color.with_alpha(color.a * f * f));
                }
            }
        }
    }

    /// Fill a closed path with even-odd scanline coverage.
    pub fn fill_path(&mut self, path: &Path, color: Tint) {
        let pts = &path.points;
        if pts.len() < 3 {
            return;
        }
        let min_y = pts.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = pts.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let y0 = min_y.floor().max(0.0) as u32;
        let y1 = max_y.ceil().min(self.height() as f32) as u32;

        let mut xs: Vec<f32> = Vec::new();
        for py in y0..y1 {
            let cy = py as f32 + 0.5;
            xs.clear();
            for i in 0..pts.len() {
                let (x0e, y0e) = pts[i];
                let (x1e, y1e) = pts[(i + 1) % pts.len()];
                if (y0e <= cy && y1e > cy) || (y1e <= cy && y0e > cy) {
                    xs.push(x0e + (cy - y0e) * (x1e - x0e) / (y1e - y0e));
                }
            }
            xs.sort_by(|a, b| a.total_cmp(b));
            for span in xs.chunks_exact(2) {
                let sx = span[0].floor().max(0.0) as u32;
                let ex = span[1].ceil().min(self.width() as f32) as u32;
                for px in sx..ex {
                    let cx = px as f32 + 0.5;
                    if cx >= span[0] && cx < span[1] {
                        self.blend(px, py, color);
                    }
                }
            }
        }
    }

    /// Stamp a line of 8×8 bitmap glyphs, scaled by an integer factor and
    /// centered horizontally on `center_x`. `baseline_y` is the bottom of
    /// the glyph cells. Characters outside the basic set fall back to `?`.
    pub fn draw_text(&mut self, text: &str, center_x: f32, baseline_y: f32, scale: u32, color: Tint) {
        if text.is_empty() || scale == 0 {
            return;
        }
        let gap = scale; // one scaled column between glyphs
        let count = text.chars().count() as u32;
        let total_w = count * 8 * scale + (count - 1) * gap;
        let origin_x = center_x - total_w as f32 / 2.0;
        let origin_y = baseline_y - (8 * scale) as f32;

        let mut cursor = 0u32;
        for ch in text.chars() {
            let glyph = BASIC_FONTS
                .get(ch)
                .unwrap_or_else(|| BASIC_FONTS.get('?').unwrap());
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..8u32 {
                    if (bits >> col) & 1 == 0 {
                        continue;
                    }
                    let gx = origin_x + (cursor + col * scale) as f32;
                    let gy = origin_y + (row as u32 * scale) as f32;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let px = gx + dx as f32;
                            let py = gy + dy as f32;
                            if px >= 0.0 && py >= 0.0 {
                                self.blend(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
            cursor += 8 * scale + gap;
        }
    }
}
