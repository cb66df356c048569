//! The compositing core — pure pixels in, one encoded image out.
//!
//! | Stage | Module |
//! |---|---|
//! | **Parameters** | [`params`] — the six-slider record with domain clamping |
//! | **Tonal pass** | [`adjust`] — brightness → contrast → saturation → grayscale → sepia → blur |
//! | **Drawing surface** | [`surface`] — rects, gradients, paths, strokes, caption text |
//! | **Frames** | [`frames`] — the seven-variant overlay enum |
//! | **Engine** | [`engine`] — validate, adjust, frame, JPEG encode |
//! | **Presets** | [`presets`] — the static named catalog |
//!
//! The module is pure computation: no I/O, no shared state, every call owns
//! its buffers. Decoding files and writing results is the caller's business
//! (the CLI in `main.rs` being the bundled caller).

pub mod adjust;
pub mod engine;
pub mod frames;
pub mod params;
pub mod presets;
pub mod surface;

pub use adjust::adjust;
pub use engine::{CompositeResult, compose, render};
pub use frames::FramePreset;
pub use params::AdjustmentParameters;

use thiserror::Error;

/// Everything that can go wrong between a source raster and a result.
///
/// Out-of-domain parameters are deliberately absent: they clamp and
/// continue, with the clamping recorded on
/// [`CompositeResult::clamped`].
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("invalid image: {0}")]
    InvalidImage(String),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
