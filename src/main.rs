use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delite::models::{AdjustConfig, ConfigOverrides};
use delite::services::{AdjustmentRequest, AdjustmentRun, FileSystem};

#[derive(Parser)]
#[command(name = "delite")]
#[command(version, about = "Attenuate overexposed pixels in raw 16-bit sample streams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attenuate the brightest samples and write the adjusted stream plus a preview
    Adjust {
        /// Raw pixel data file (little-endian 16-bit samples)
        #[arg(short = 'f', long, value_name = "FILE")]
        input: PathBuf,

        /// Number of brightest pixels to adjust, at least 1 (default 50)
        #[arg(short = 'p', long, value_name = "COUNT",
              value_parser = clap::value_parser!(u64).range(1..))]
        pixel_count: Option<u64>,

        /// Adjustment level as a percentage, 0-100 (default 50)
        #[arg(short = 'l', long, value_name = "PERCENT",
              value_parser = clap::value_parser!(u32).range(0..=100))]
        level: Option<u32>,

        /// Output preview bitmap (default out.bmp)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output file for the adjusted raw stream (default altered.bin)
        #[arg(long, value_name = "FILE")]
        altered: Option<PathBuf>,

        /// YAML config file with run defaults (overrides $DELITE_CONFIG)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the header fields of a preview bitmap
    Inspect {
        /// Bitmap written by `delite adjust`
        #[arg(value_name = "FILE")]
        bitmap: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delite=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Adjust {
            input,
            pixel_count,
            level,
            output,
            altered,
            config,
        } => run_adjust_command(input, pixel_count, level, output, altered, config),
        Commands::Inspect { bitmap } => run_inspect_command(&bitmap),
    }
}

/// Run one adjustment pass with config-file defaults and flag overrides
fn run_adjust_command(
    input: PathBuf,
    pixel_count: Option<u64>,
    level: Option<u32>,
    output: Option<PathBuf>,
    altered: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    if !input.is_file() {
        anyhow::bail!("Invalid input file path: {}", input.display());
    }

    let pixel_count = pixel_count
        .map(usize::try_from)
        .transpose()
        .context("Pixel count does not fit this platform")?;
    let config = AdjustConfig::resolve(config_path.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(ConfigOverrides {
            pixel_count,
            adjustment_level: level,
            preview_path: output,
            altered_path: altered,
        });

    let request = AdjustmentRequest {
        input,
        altered: config.altered_path.clone(),
        preview: config.preview_path.clone(),
        adjuster: config.adjuster()?,
    };

    let report = AdjustmentRun::new(FileSystem, FileSystem)
        .run(&request)
        .context("Adjustment failed")?;

    println!(
        "Adjusted {} of {} samples -> {} ({} bytes)",
        report.adjusted,
        report.samples,
        request.altered.display(),
        report.altered_bytes
    );
    println!(
        "Preview {}x{} -> {} ({} bytes)",
        report.preview_side,
        report.preview_side,
        request.preview.display(),
        report.preview_bytes
    );

    Ok(())
}

/// Decode a preview bitmap and print its header fields
fn run_inspect_command(path: &Path) -> anyhow::Result<()> {
    let summary = delite::services::inspect(&FileSystem, path)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;
    println!("{}", path.display());
    println!("{summary}");
    Ok(())
}
