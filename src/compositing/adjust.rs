//! Per-pixel tonal adjustment pipeline.
//!
//! [`adjust`] is a pure function: source pixels in, adjusted pixels out, no
//! state. Stage order is fixed — brightness, contrast, saturation, grayscale
//! mix, sepia mix, then blur — because each blend reads the luma of the
//! value produced by the stages before it. Every stage clamps its result to
//! [0, 255] so extreme settings cannot compound into channel wrap-around.
//!
//! Rows are processed in parallel with rayon; each row writes a disjoint
//! slice of the output, so the result is identical to the sequential run.

use image::RgbaImage;
use rayon::prelude::*;

use super::params::AdjustmentParameters;

/// Rec.601 luma of a pixel, the perceptual gray all blends target.
#[inline]
fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Apply the six tonal adjustments to every pixel.
///
/// Parameters are clamped into their domains before use. Alpha passes
/// through the tonal stages untouched and is blurred together with the
/// color channels.
pub fn adjust(source: &RgbaImage, params: &AdjustmentParameters) -> RgbaImage {
    let params = params.clamp();
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return source.clone();
    }
    let stride = width as usize * 4;

    let brightness = params.brightness / 100.0;
    let contrast = params.contrast / 100.0;
    let saturation = params.saturation / 100.0;
    let grayscale = params.grayscale / 100.0;
    let sepia = params.sepia / 100.0;

    let src = source.as_raw();
    let mut dst = vec![0u8; src.len()];

    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row_out)| {
            let row_in = &src[y * stride..(y + 1) * stride];
            for x in 0..width as usize {
                let pi = x * 4;
                let mut r = row_in[pi] as f32;
                let mut g = row_in[pi + 1] as f32;
                let mut b = row_in[pi + 2] as f32;

                // 1. brightness
                r = (r * brightness).clamp(0.0, 255.0);
                g = (g * brightness).clamp(0.0, 255.0);
                b = (b * brightness).clamp(0.0, 255.0);

                // 2. contrast about the midpoint
                r = ((r - 128.0) * contrast + 128.0).clamp(0.0, 255.0);
                g = ((g - 128.0) * contrast + 128.0).clamp(0.0, 255.0);
                b = ((b - 128.0) * contrast + 128.0).clamp(0.0, 255.0);

                // 3. saturation: pull toward gray, or past it at > 100%
                let l = luma(r, g, b);
                r = (l + (r - l) * saturation).clamp(0.0, 255.0);
                g = (l + (g - l) * saturation).clamp(0.0, 255.0);
                b = (l + (b - l) * saturation).clamp(0.0, 255.0);

                // 4. grayscale mix
                let l = luma(r, g, b);
                r = (r + (l - r) * grayscale).clamp(0.0, 255.0);
                g = (g + (l - g) * grayscale).clamp(0.0, 255.0);
                b = (b + (l - b) * grayscale).clamp(0.0, 255.0);

                // 5. sepia mix toward the tinted luma
                let l = luma(r, g, b);
                let (sr, sg, sb) = sepia_tint(l);
                r = (r + (sr - r) * sepia).clamp(0.0, 255.0);
                g = (g + (sg - g) * sepia).clamp(0.0, 255.0);
                b = (b + (sb - b) * sepia).clamp(0.0, 255.0);

                row_out[pi] = r.round() as u8;
                row_out[pi + 1] = g.round() as u8;
                row_out[pi + 2] = b.round() as u8;
                row_out[pi + 3] = row_in[pi + 3];
            }
        });

    let adjusted = RgbaImage::from_raw(width, height, dst)
        .unwrap_or_else(|| RgbaImage::new(width, height));

    // 6. blur last, over the fully adjusted values
    if params.blur > 0.0 {
        gaussian_blur(&adjusted, params.blur)
    } else {
        adjusted
    }
}

/// The digital-sepia matrix applied to a gray value.
///
/// Coefficients from the standard sepia transform, collapsed for r=g=b:
/// each output channel is the matrix row sum times the gray value.
#[inline]
fn sepia_tint(l: f32) -> (f32, f32, f32) {
    (
        (1.351 * l).min(255.0),
        (1.203 * l).min(255.0),
        (0.937 * l).min(255.0),
    )
}

/// Separable Gaussian blur with sigma equal to the radius parameter.
///
/// Kernel taps extend to `max(1, ceil(2*sigma))`, so radius 0.5 still gets a
/// 3-tap kernel and visibly softens. Edges sample clamp-to-edge. Two passes:
/// horizontal into an f32 scratch buffer, vertical back to 8-bit, so the
/// intermediate is never quantized.
fn gaussian_blur(source: &RgbaImage, radius: f32) -> RgbaImage {
    let (width, height) = source.dimensions();
    let (w, h) = (width as usize, height as usize);
    let stride = w * 4;

    let sigma = radius;
    let taps = ((2.0 * sigma).ceil() as i64).max(1);
    let mut kernel: Vec<f32> = (-taps..=taps)
        .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }

    let src = source.as_raw();

    // horizontal
    let mut mid = vec![0f32; src.len()];
    mid.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row_out)| {
            let row_in = &src[y * stride..(y + 1) * stride];
            for x in 0..w {
                let mut acc = [0f32; 4];
                for (ki, k) in kernel.iter().enumerate() {
                    let sx = (x as i64 + ki as i64 - taps).clamp(0, w as i64 - 1) as usize;
                    for c in 0..4 {
                        acc[c] += row_in[sx * 4 + c] as f32 * k;
                    }
                }
                for c in 0..4 {
                    row_out[x * 4 + c] = acc[c];
                }
            }
        });

    // vertical
    let mut dst = vec![0u8; src.len()];
    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row_out)| {
            for x in 0..w {
                let mut acc = [0f32; 4];
                for (ki, k) in kernel.iter().enumerate() {
                    let sy = (y as i64 + ki as i64 - taps).clamp(0, h as i64 - 1) as usize;
                    for c in 0..4 {
                        acc[c] += mid[sy * stride + x * 4 + c] * k;
                    }
                }
                for c in 0..4 {
                    row_out[x * 4 + c] = acc[c].round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    RgbaImage::from_raw(width, height, dst).unwrap_or_else(|| RgbaImage::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[test]
    fn neutral_params_are_identity() {
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, 255])
        });
        let out = adjust(&img, &AdjustmentParameters::NEUTRAL);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn brightness_scales_mid_gray() {
        let img = solid(10, 10, [100, 100, 100, 255]);
        let params = AdjustmentParameters {
            brightness: 130.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        for p in out.pixels() {
            assert_eq!(p.0, [130, 130, 130, 255]);
        }
    }

    #[test]
    fn brightness_clamps_instead_of_wrapping() {
        let img = solid(4, 4, [200, 200, 200, 255]);
        let params = AdjustmentParameters {
            brightness: 200.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn out_of_domain_equals_domain_edge() {
        let img = RgbaImage::from_fn(8, 8, |x, y| Rgba([(x * 30) as u8, (y * 30) as u8, 60, 255]));
        let wild = AdjustmentParameters {
            brightness: 9999.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let edge = AdjustmentParameters {
            brightness: 200.0,
            ..AdjustmentParameters::NEUTRAL
        };
        assert_eq!(adjust(&img, &wild).as_raw(), adjust(&img, &edge).as_raw());

        let wild_low = AdjustmentParameters {
            contrast: -40.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let edge_low = AdjustmentParameters {
            contrast: 50.0,
            ..AdjustmentParameters::NEUTRAL
        };
        assert_eq!(
            adjust(&img, &wild_low).as_raw(),
            adjust(&img, &edge_low).as_raw()
        );
    }

    #[test]
    fn contrast_fixes_the_midpoint() {
        let img = solid(4, 4, [128, 128, 128, 255]);
        let params = AdjustmentParameters {
            contrast: 180.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        assert_eq!(out.get_pixel(0, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn zero_saturation_produces_luma_gray() {
        let img = solid(4, 4, [200, 50, 90, 255]);
        let params = AdjustmentParameters {
            saturation: 0.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        let expected = (0.299 * 200.0 + 0.587 * 50.0 + 0.114 * 90.0_f32).round() as u8;
        let p = out.get_pixel(0, 0).0;
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
        assert!((p[0] as i16 - expected as i16).abs() <= 1);
    }

    #[test]
    fn double_saturation_pushes_away_from_gray() {
        let img = solid(4, 4, [180, 60, 100, 255]);
        let params = AdjustmentParameters {
            saturation: 200.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        let p = out.get_pixel(0, 0).0;
        // Red is above luma, so extrapolation raises it; green drops
        assert!(p[0] > 180);
        assert!(p[1] < 60);
    }

    #[test]
    fn full_grayscale_equalizes_channels() {
        let img = solid(4, 4, [10, 240, 30, 255]);
        let params = AdjustmentParameters {
            grayscale: 100.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        let p = out.get_pixel(0, 0).0;
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
    }

    #[test]
    fn full_sepia_applies_warm_tint() {
        let img = solid(4, 4, [100, 100, 100, 255]);
        let params = AdjustmentParameters {
            sepia: 100.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        let p = out.get_pixel(0, 0).0;
        // Tint of gray 100: r lifted, b depressed, r > g > b
        assert!(p[0] > p[1]);
        assert!(p[1] > p[2]);
        assert_eq!(p[0], 135); // 1.351 * 100
        assert_eq!(p[2], 94); // 0.937 * 100
    }

    #[test]
    fn blur_zero_is_a_noop() {
        let img = RgbaImage::from_fn(9, 9, |x, y| {
            Rgba([if (x + y) % 2 == 0 { 255 } else { 0 }, 0, 0, 255])
        });
        let out = adjust(&img, &AdjustmentParameters::NEUTRAL);
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn blur_half_pixel_still_softens() {
        let mut img = solid(9, 9, [0, 0, 0, 255]);
        img.put_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let params = AdjustmentParameters {
            blur: 0.5,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        // Energy spreads off the impulse into its neighbors
        assert!(out.get_pixel(4, 4).0[0] < 255);
        assert!(out.get_pixel(3, 4).0[0] > 0);
    }

    #[test]
    fn blur_softness_grows_with_radius() {
        let mut img = solid(21, 21, [0, 0, 0, 255]);
        img.put_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let center_at = |radius: f32| {
            let params = AdjustmentParameters {
                blur: radius,
                ..AdjustmentParameters::NEUTRAL
            };
            adjust(&img, &params).get_pixel(10, 10).0[0]
        };
        let c1 = center_at(1.0);
        let c2 = center_at(2.0);
        let c4 = center_at(4.0);
        assert!(c1 > c2);
        assert!(c2 > c4);
    }

    #[test]
    fn alpha_survives_tonal_stages() {
        let img = solid(4, 4, [90, 120, 40, 77]);
        let params = AdjustmentParameters {
            brightness: 150.0,
            contrast: 130.0,
            sepia: 50.0,
            ..AdjustmentParameters::NEUTRAL
        };
        let out = adjust(&img, &params);
        assert_eq!(out.get_pixel(2, 2).0[3], 77);
    }
}
