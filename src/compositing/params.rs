//! Tonal-adjustment parameter record and its domains.
//!
//! The six sliders of the editor, as data. Each field has a fixed domain and
//! a neutral (identity) value:
//!
//! | field | domain | neutral |
//! |---|---|---|
//! | `brightness` | 50–200 % | 100 |
//! | `contrast` | 50–200 % | 100 |
//! | `saturation` | 0–200 % | 100 |
//! | `blur` | 0–10 px radius, 0.5 steps | 0 |
//! | `grayscale` | 0–100 % | 0 |
//! | `sepia` | 0–100 % | 0 |
//!
//! Out-of-domain input is never an error: [`AdjustmentParameters::clamp`]
//! snaps everything into range and the engine records on the result whether
//! it had to. Serde derives let the CLI read a parameter file and dump the
//! preset catalog as JSON.

use serde::{Deserialize, Serialize};

/// The six tonal-adjustment values applied by the per-pixel pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Channel multiplier, percent.
    pub brightness: f32,
    /// Remap about the 128 midpoint, percent.
    pub contrast: f32,
    /// Blend toward/away from luma gray, percent. 200 extrapolates.
    pub saturation: f32,
    /// Gaussian blur radius in pixels, 0.5 steps.
    pub blur: f32,
    /// Mix toward luma gray, percent.
    pub grayscale: f32,
    /// Mix toward the sepia tint of luma, percent.
    pub sepia: f32,
}

impl AdjustmentParameters {
    /// Identity values — [`adjust`](super::adjust::adjust) with these is a no-op.
    pub const NEUTRAL: Self = Self {
        brightness: 100.0,
        contrast: 100.0,
        saturation: 100.0,
        blur: 0.0,
        grayscale: 0.0,
        sepia: 0.0,
    };

    /// Snap every field into its domain. Blur additionally snaps to the
    /// 0.5-step grid the slider exposes.
    pub fn clamp(self) -> Self {
        Self {
            brightness: self.brightness.clamp(50.0, 200.0),
            contrast: self.contrast.clamp(50.0, 200.0),
            saturation: self.saturation.clamp(0.0, 200.0),
            blur: ((self.blur.clamp(0.0, 10.0)) * 2.0).round() / 2.0,
            grayscale: self.grayscale.clamp(0.0, 100.0),
            sepia: self.sepia.clamp(0.0, 100.0),
        }
    }

    /// True when [`clamp`](Self::clamp) would leave every field unchanged.
    pub fn is_in_domain(&self) -> bool {
        *self == self.clamp()
    }
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
