//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric: the primary line for an
//! entity is its semantic identity (preset name, frame label, result
//! dimensions), with filesystem paths and raw values shown as indented
//! context lines beneath it.
//!
//! ```text
//! Composited 1600x1200 (frame: Polaroid, preset: Vintage)
//!     Source: shots/booth-042.png
//!     Output: photobooth-1754390000000.jpg (214 KB)
//! ```

use std::path::Path;

use crate::compositing::{CompositeResult, FramePreset, presets::Preset};

/// Header + context lines for one finished composition.
pub fn compose_summary(
    result: &CompositeResult,
    frame: FramePreset,
    preset_name: Option<&str>,
    source: &Path,
    output: Option<&Path>,
) -> String {
    let mut lines = Vec::new();

    let preset_note = preset_name
        .map(|name| format!(", preset: {name}"))
        .unwrap_or_default();
    lines.push(format!(
        "Composited {}x{} (frame: {}{preset_note})",
        result.width,
        result.height,
        frame.label(),
    ));
    lines.push(format!("    Source: {}", source.display()));
    if let Some(path) = output {
        lines.push(format!(
            "    Output: {} ({})",
            path.display(),
            human_size(result.bytes.len())
        ));
    }
    if result.clamped {
        let p = &result.params;
        lines.push(format!(
            "    Note: values were clamped to their domains; applied \
             brightness={} contrast={} saturation={} blur={} grayscale={} sepia={}",
            p.brightness, p.contrast, p.saturation, p.blur, p.grayscale, p.sepia
        ));
    }
    lines.join("\n")
}

/// The preset catalog as an aligned table.
pub fn preset_table(presets: &[Preset]) -> String {
    let mut lines = vec![format!(
        "{:<10} {:>10} {:>8} {:>10} {:>5} {:>9} {:>5}",
        "Preset", "Brightness", "Contrast", "Saturation", "Blur", "Grayscale", "Sepia"
    )];
    for preset in presets {
        let p = preset.params;
        lines.push(format!(
            "{:<10} {:>10} {:>8} {:>10} {:>5} {:>9} {:>5}",
            preset.name, p.brightness, p.contrast, p.saturation, p.blur, p.grayscale, p.sepia
        ));
    }
    lines.join("\n")
}

/// One line per frame kind: CLI value, then display label as context.
pub fn frame_list() -> String {
    FramePreset::all()
        .iter()
        .map(|f| format!("{:<10} {}", cli_value(*f), f.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cli_value(frame: FramePreset) -> &'static str {
    match frame {
        FramePreset::None => "none",
        FramePreset::Polaroid => "polaroid",
        FramePreset::Vintage => "vintage",
        FramePreset::Rainbow => "rainbow",
        FramePreset::Neon => "neon",
        FramePreset::Gold => "gold",
        FramePreset::Hearts => "hearts",
    }
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{bytes} B")
    }
}
