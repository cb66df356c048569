//! # snapbooth
//!
//! A photobooth compositing engine: take a decoded photo, six tonal
//! adjustments, and a decorative frame, and produce one encoded JPEG ready
//! to download or share.
//!
//! # Architecture: One Pure Pipeline
//!
//! The whole system is a single deterministic function from inputs to bytes:
//!
//! ```text
//! raster + AdjustmentParameters + FramePreset
//!     → per-pixel tonal pass (brightness, contrast, saturation,
//!       grayscale, sepia, blur — in that order)
//!     → frame overlay (drawn after adjustments, never subject to them)
//!     → JPEG at quality 90
//! ```
//!
//! There is no internal cache and no cross-call state. Rapid re-runs with
//! different slider values are the caller's loop — each call is
//! self-contained, takes an owned copy of its inputs, and can run
//! concurrently with any other call. Identical inputs reproduce the output
//! byte for byte.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compositing`] | The core: parameters, tonal pass, drawing surface, frames, engine, presets |
//! | [`output`] | CLI result formatting — what `snapbooth compose` prints |
//!
//! # Design Decisions
//!
//! ## CPU Pixels, No GPU
//!
//! Every stage rasterizes on the CPU with the `image` crate's buffers. A
//! photobooth works on single photos, not video: the per-pixel pass and the
//! separable blur are bounded by image size and finish in well under a
//! second at photo resolutions, with rayon splitting rows across cores.
//! Determinism falls out for free — no driver, no shader, no float
//! reordering.
//!
//! ## Resolution-Independent Frames
//!
//! Frame geometry is specified as fractions of the canvas dimensions (the
//! polaroid band is 15% of height, the gold border 3% of the larger
//! dimension), never fixed pixel counts. The same frame looks
//! proportionally identical on a 100px thumbnail and a 4000px photo.
//!
//! ## Clamp, Don't Reject
//!
//! Slider values outside their domains are snapped into range and the
//! result records that it happened. Rejecting would turn a dragged slider
//! into an error dialog; silently wrapping would corrupt the photo. An
//! unknown preset *name*, by contrast, is a hard error — no silent
//! fallback to "Normal".

pub mod compositing;
pub mod output;
