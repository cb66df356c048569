//! The compositing engine: validate, adjust, frame, encode.
//!
//! Two entry points. [`render`] produces the unencoded canvas — exact pixels,
//! what the tests assert against. [`compose`] runs [`render`] and encodes the
//! canvas to JPEG at a fixed quality, so identical inputs always produce
//! byte-identical output.
//!
//! The engine holds no state between calls and never rescales: the output
//! canvas always matches the source dimensions. Callers wanting thumbnails
//! resize before or after.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use super::ComposeError;
use super::adjust::adjust;
use super::frames::FramePreset;
use super::params::AdjustmentParameters;

/// Fixed JPEG quality for the final encode.
const JPEG_QUALITY: u8 = 90;

/// The final composited image: encoded bytes plus what produced them.
#[derive(Debug, Clone)]
pub struct CompositeResult {
    /// Encoded image data.
    pub bytes: Vec<u8>,
    /// Format tag for the bytes.
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    /// The parameter values actually applied, after clamping.
    pub params: AdjustmentParameters,
    /// True when the caller's values were out of domain and got clamped.
    pub clamped: bool,
}

impl CompositeResult {
    /// The `data:<mime>;base64,…` form, for callers that hand the image to
    /// a browser-style consumer instead of a file.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Adjust and frame the source image, returning the raw canvas.
///
/// The source is copied, never mutated, so the caller can re-run with new
/// parameters. Fails with [`ComposeError::InvalidImage`] on a zero-sized
/// raster; out-of-domain parameters are clamped, not rejected.
pub fn render(
    source: &RgbaImage,
    params: &AdjustmentParameters,
    frame: FramePreset,
) -> Result<RgbaImage, ComposeError> {
    if source.width() == 0 || source.height() == 0 {
        return Err(ComposeError::InvalidImage(format!(
            "zero-sized raster ({}x{})",
            source.width(),
            source.height()
        )));
    }

    let mut canvas = adjust(source, &params.clamp());
    frame.render(&mut canvas);
    Ok(canvas)
}

/// Full pipeline: [`render`] plus JPEG encode.
///
/// Deterministic — the encoder runs with fixed settings, so re-running with
/// identical inputs reproduces the output byte for byte. A failed call
/// yields no partial result.
pub fn compose(
    source: &RgbaImage,
    params: &AdjustmentParameters,
    frame: FramePreset,
) -> Result<CompositeResult, ComposeError> {
    let canvas = render(source, params, frame)?;
    let (width, height) = canvas.dimensions();

    // JPEG carries no alpha; flatten before encoding
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| ComposeError::EncodingFailed(e.to_string()))?;

    Ok(CompositeResult {
        bytes,
        mime: "image/jpeg",
        width,
        height,
        params: params.clamp(),
        clamped: !params.is_in_domain(),
    })
}
