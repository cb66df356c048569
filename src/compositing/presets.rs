//! The named filter presets of the editor.
//!
//! A static ordered table: order is display order, nothing more. Presets
//! only pre-fill an [`AdjustmentParameters`] record for the caller; the
//! pipeline itself never consults the catalog.

use serde::Serialize;

use super::ComposeError;
use super::params::AdjustmentParameters;

/// A named parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub params: AdjustmentParameters,
}

const fn preset(
    name: &'static str,
    brightness: f32,
    contrast: f32,
    saturation: f32,
    blur: f32,
    grayscale: f32,
    sepia: f32,
) -> Preset {
    Preset {
        name,
        params: AdjustmentParameters {
            brightness,
            contrast,
            saturation,
            blur,
            grayscale,
            sepia,
        },
    }
}

/// The catalog, in display order.
const CATALOG: &[Preset] = &[
    preset("Normal", 100.0, 100.0, 100.0, 0.0, 0.0, 0.0),
    preset("Vintage", 110.0, 120.0, 80.0, 0.0, 0.0, 30.0),
    preset("B&W", 105.0, 115.0, 100.0, 0.0, 100.0, 0.0),
    preset("Bright", 130.0, 110.0, 120.0, 0.0, 0.0, 0.0),
    preset("Soft", 105.0, 95.0, 90.0, 1.0, 0.0, 0.0),
    preset("Cool", 95.0, 110.0, 80.0, 0.0, 20.0, 0.0),
    preset("Warm", 115.0, 105.0, 110.0, 0.0, 0.0, 15.0),
    preset("Drama", 85.0, 140.0, 130.0, 0.0, 0.0, 0.0),
    preset("Dream", 120.0, 90.0, 70.0, 2.0, 0.0, 10.0),
];

/// All presets in display order.
pub fn list() -> &'static [Preset] {
    CATALOG
}

/// Look up a preset by exact name.
///
/// A miss is an error, never a silent fallback to "Normal".
pub fn apply(name: &str) -> Result<AdjustmentParameters, ComposeError> {
    CATALOG
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.params)
        .ok_or_else(|| ComposeError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_has_exact_values() {
        let params = apply("B&W").unwrap();
        assert_eq!(
            params,
            AdjustmentParameters {
                brightness: 105.0,
                contrast: 115.0,
                saturation: 100.0,
                blur: 0.0,
                grayscale: 100.0,
                sepia: 0.0,
            }
        );
    }

    #[test]
    fn normal_is_the_neutral_record() {
        assert_eq!(apply("Normal").unwrap(), AdjustmentParameters::NEUTRAL);
    }

    #[test]
    fn unknown_name_errors_with_the_name() {
        let err = apply("Solarize").unwrap_err();
        assert!(matches!(err, ComposeError::UnknownPreset(ref n) if n == "Solarize"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(apply("b&w").is_err());
    }

    #[test]
    fn catalog_keeps_display_order() {
        let names: Vec<&str> = list().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Normal", "Vintage", "B&W", "Bright", "Soft", "Cool", "Warm", "Drama", "Dream"
            ]
        );
    }

    #[test]
    fn every_preset_is_in_domain() {
        for preset in list() {
            assert!(preset.params.is_in_domain(), "{} out of domain", preset.name);
        }
    }
}
