use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palswap::*;

mod error;
use error::CliError;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recolor an image against a reference palette strip.
    Remap(RemapArgs),
    /// Write a swap strip made by shifting every reference color by an offset.
    Strip(StripArgs),
}

#[derive(Args)]
struct RemapArgs {
    /// Image to recolor.
    original: PathBuf,
    /// One-row palette strip the pixels are matched against.
    reference: PathBuf,
    /// Path to output image (format is taken from the extension).
    output: PathBuf,
    /// One-row strip of replacement colors, same width as the reference.
    #[arg(short, long, conflicts_with = "offset")]
    swap: Option<PathBuf>,
    /// Shift matched reference colors by this much instead of using a swap strip.
    #[arg(short, long, num_args = 3, allow_negative_numbers = true)]
    #[arg(value_names = ["R", "G", "B"])]
    offset: Option<Vec<f32>>,
    /// Maximum squared RGBA distance for two colors to count as equal.
    #[arg(short, long)]
    tolerance: Option<f32>,
    /// Number of parallel threads.
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    /// Settings file (.json, .ron or .yaml). Command line flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RemapArgs {
    fn settings(&self) -> Result<RemapSettings, CliError> {
        let mut settings = match &self.config {
            Some(path) => RemapSettings::from_file(path)?,
            None => RemapSettings::default(),
        };

        if let Some(tolerance) = self.tolerance {
            settings.tolerance = tolerance;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if let Some(offset) = self.offset.as_deref() {
            settings.offset = to_offset(offset);
            settings.use_swapper = false;
        }
        if self.swap.is_some() {
            settings.use_swapper = true;
        }

        Ok(settings)
    }
}

#[derive(Args)]
struct StripArgs {
    /// One-row palette strip to derive from.
    reference: PathBuf,
    /// Path to output strip.
    output: PathBuf,
    /// Amount added to the red, green and blue channel of every entry.
    #[arg(short, long, num_args = 3, required = true, allow_negative_numbers = true)]
    #[arg(value_names = ["R", "G", "B"])]
    offset: Vec<f32>,
}

fn to_offset(values: &[f32]) -> Offset {
    Offset::new(values[0], values[1], values[2])
}

fn remap(args: RemapArgs) -> Result<(), CliError> {
    let settings = args.settings()?;
    let original = load_image(&args.original)?;
    let reference = load_image(&args.reference)?;
    let swap = match (&args.swap, settings.use_swapper) {
        (Some(path), true) => Some(load_image(path)?),
        _ => None,
    };

    info!("Remapping '{}'...", args.original.display());

    let before_run = Instant::now();
    let output = remap_image(&original, &reference, swap.as_ref(), &settings)?;
    let dur = before_run.elapsed();

    save_image(&output, &args.output)?;

    info!(
        "Completed! Remapped in {}.{:03} seconds. Output written to '{}'",
        dur.as_secs(),
        dur.subsec_millis(),
        args.output.display()
    );

    Ok(())
}

fn strip(args: StripArgs) -> Result<(), CliError> {
    let reference = load_image(&args.reference)?;
    let strip = generate_swap_strip(&reference, to_offset(&args.offset));
    save_image(&strip, &args.output)?;

    info!("Swap strip written to '{}'", args.output.display());

    Ok(())
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Remap(args) => remap(args),
        Command::Strip(args) => strip(args),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palswap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
