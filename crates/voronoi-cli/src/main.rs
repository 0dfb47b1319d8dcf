//! Command-line skeletonizer for occupancy images.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;
use voronoi_core::ChannelOrder;
use voronoi_diagram::{DiagramOptions, Strategy, load_options, run};
use voronoi_io::{ImageFormat, read_image, write_image};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "voronoi")]
#[command(about = "Reduce the foreground of an image to a 1-pixel-wide skeleton")]
#[command(version)]
struct Cli {
    /// Path to the input image (PNG or PNM).
    #[arg(long)]
    input: PathBuf,

    /// Path to write the skeleton (0/255, 8 bpp).
    #[arg(long)]
    output: PathBuf,

    /// Skeletonization strategy (voronoi, thinning or skeleton).
    /// Overrides the config file.
    #[arg(long, value_parser = Strategy::from_str)]
    strategy: Option<Strategy>,

    /// Gray level a pixel must exceed to be foreground.
    #[arg(long)]
    threshold: Option<u8>,

    /// Byte order of the color samples.
    #[arg(long, value_enum)]
    channel_order: Option<ChannelOrderArg>,

    /// Iteration cap applied to every strategy.
    #[arg(long)]
    max_iterations: Option<u32>,

    /// JSON file with strategy options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format; inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChannelOrderArg {
    Rgb,
    Bgr,
}

impl ChannelOrderArg {
    fn to_core(self) -> ChannelOrder {
        match self {
            Self::Rgb => ChannelOrder::Rgb,
            Self::Bgr => ChannelOrder::Bgr,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Pnm,
}

impl FormatArg {
    fn to_core(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Pnm => ImageFormat::Pnm,
        }
    }
}

/// Config file first, then flags on top.
fn build_options(cli: &Cli) -> CliResult<DiagramOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => DiagramOptions::default(),
    };
    if let Some(strategy) = cli.strategy {
        options.strategy = strategy;
    }
    if let Some(threshold) = cli.threshold {
        options.set_threshold(threshold);
    }
    if let Some(order) = cli.channel_order {
        options.set_channel_order(order.to_core());
    }
    if let Some(max_iterations) = cli.max_iterations {
        if max_iterations == 0 && options.strategy != Strategy::Thinning {
            return Err("--max-iterations must be positive".into());
        }
        options.set_max_iterations(max_iterations);
    }
    Ok(options)
}

fn run_cli(cli: &Cli) -> CliResult<()> {
    let options = build_options(cli)?;
    log::info!("Loading image: {}", cli.input.display());

    let pix = read_image(&cli.input).map_err(|e| -> CliError {
        format!("Failed to open image {}: {}", cli.input.display(), e).into()
    })?;
    // Gray and RGBA inputs are normalized to the 3-channel frames the
    // skeletonizers accept
    let frame = pix.convert_to_rgb()?;

    let skeleton = run(options.strategy, &frame, &options)?;
    let (w, h) = skeleton.dimensions();
    log::info!(
        "{} skeleton: {}x{}, {} pixels",
        options.strategy,
        w,
        h,
        skeleton.foreground_count()
    );

    let format = cli
        .format
        .map(FormatArg::to_core)
        .or_else(|| ImageFormat::from_path(&cli.output))
        .unwrap_or_default();
    write_image(&skeleton.to_pix()?, &cli.output, format).map_err(|e| -> CliError {
        format!("Failed to write {}: {}", cli.output.display(), e).into()
    })?;
    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

fn main() -> CliResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run_cli(&cli)
}
