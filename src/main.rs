use clap::{Parser, Subcommand};
use snapbooth::compositing::{self, AdjustmentParameters, ComposeError, FramePreset, presets};
use snapbooth::output;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "snapbooth")]
#[command(about = "Photobooth compositing: tonal adjustments plus a frame, one JPEG out")]
#[command(long_about = "\
Photobooth compositing: tonal adjustments plus a frame, one JPEG out

The pipeline is pure and repeatable: the same photo, the same slider values,
and the same frame always produce the same bytes.

Adjustments and their domains:

  --brightness   50-200   channel multiplier, percent
  --contrast     50-200   remap about the midpoint, percent
  --saturation   0-200    toward gray at 0, extrapolated at 200
  --blur         0-10     gaussian radius in pixels, 0.5 steps
  --grayscale    0-100    mix toward luma gray, percent
  --sepia        0-100    mix toward the sepia tint, percent

Values outside a domain are clamped, and the applied values are echoed back.
Start from a named preset ('snapbooth presets') or a JSON parameter file;
individual flags override either.

Frames ('snapbooth frames') draw over the adjusted photo: polaroid band,
vintage vignette, rainbow, neon, gold, or hearts.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// How to fill the six adjustment values for a compose run.
#[derive(clap::Args)]
struct AdjustArgs {
    /// Start from a named preset (see `snapbooth presets`)
    #[arg(long, conflicts_with = "params")]
    preset: Option<String>,

    /// Start from a JSON parameter file (missing fields stay neutral)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Brightness percent
    #[arg(long)]
    brightness: Option<f32>,

    /// Contrast percent
    #[arg(long)]
    contrast: Option<f32>,

    /// Saturation percent
    #[arg(long)]
    saturation: Option<f32>,

    /// Blur radius in pixels
    #[arg(long)]
    blur: Option<f32>,

    /// Grayscale mix percent
    #[arg(long)]
    grayscale: Option<f32>,

    /// Sepia mix percent
    #[arg(long)]
    sepia: Option<f32>,
}

impl AdjustArgs {
    /// Preset or file as the base record, then flags override per field.
    fn resolve(&self) -> Result<AdjustmentParameters, CliError> {
        let mut params = if let Some(name) = &self.preset {
            presets::apply(name)?
        } else if let Some(path) = &self.params {
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        } else {
            AdjustmentParameters::NEUTRAL
        };

        if let Some(v) = self.brightness {
            params.brightness = v;
        }
        if let Some(v) = self.contrast {
            params.contrast = v;
        }
        if let Some(v) = self.saturation {
            params.saturation = v;
        }
        if let Some(v) = self.blur {
            params.blur = v;
        }
        if let Some(v) = self.grayscale {
            params.grayscale = v;
        }
        if let Some(v) = self.sepia {
            params.sepia = v;
        }
        Ok(params)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Composite a photo and write the result as JPEG
    Compose {
        /// Source image (anything the decoder knows: JPEG, PNG)
        input: PathBuf,

        /// Output path; defaults to photobooth-<unix-millis>.jpg
        #[arg(long)]
        output: Option<PathBuf>,

        /// Frame overlay
        #[arg(long, value_enum, default_value_t = FramePreset::None)]
        frame: FramePreset,

        #[command(flatten)]
        adjust: AdjustArgs,

        /// Print the result as a data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },

    /// List the named filter presets and their parameter sets
    Presets {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the frame kinds
    Frames,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Compose(#[from] ComposeError),
    #[error("parameter file error: {0}")]
    Params(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("snapbooth: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Compose {
            input,
            output,
            frame,
            adjust,
            data_uri,
        } => {
            let params = adjust.resolve()?;
            let source = image::ImageReader::open(&input)?
                .decode()
                .map_err(|e| ComposeError::InvalidImage(format!("{}: {e}", input.display())))?
                .to_rgba8();

            let result = compositing::compose(&source, &params, frame)?;

            if data_uri {
                println!("{}", result.data_uri());
                if let Some(path) = output {
                    std::fs::write(&path, &result.bytes)?;
                }
                return Ok(());
            }

            let path = output.unwrap_or_else(|| PathBuf::from(default_file_name()));
            std::fs::write(&path, &result.bytes)?;
            println!(
                "{}",
                output::compose_summary(
                    &result,
                    frame,
                    adjust.preset.as_deref(),
                    &input,
                    Some(&path),
                )
            );
            Ok(())
        }
        Command::Presets { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(presets::list())?);
            } else {
                println!("{}", output::preset_table(presets::list()));
            }
            Ok(())
        }
        Command::Frames => {
            println!("{}", output::frame_list());
            Ok(())
        }
    }
}

/// The download-style default name: photobooth-<unix-millis>.jpg.
fn default_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("photobooth-{millis}.jpg")
}
