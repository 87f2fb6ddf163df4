use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::backend::kinds::EscapeBackendKind;

/// Incremental Mandelbrot renderer: stills, height maps and zoom animations.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Escape backend for iteration rounds (rayon or serial)
    #[arg(long, global = true, default_value_t = EscapeBackendKind::default())]
    pub backend: EscapeBackendKind,

    /// Seed for the colour palette; random when omitted
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single coloured frame
    Render(StillArgs),
    /// Render the raw escape-time field as a grayscale image
    Hmap(StillArgs),
    /// Render a zoom animation, one file per frame
    Animate(AnimateArgs),
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct WindowArgs {
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub real_lower: f64,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub real_upper: f64,

    #[arg(long, default_value_t = -1.5, allow_negative_numbers = true)]
    pub imag_lower: f64,

    #[arg(long, default_value_t = 1.5, allow_negative_numbers = true)]
    pub imag_upper: f64,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct StillArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Output width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Output height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Iteration budget
    #[arg(short = 'n', long, default_value_t = 256)]
    pub iterations: u32,

    /// Output file; defaults to output/mandelbrot.ppm or output/hmap.pgm
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Grid samples along the real axis
    #[arg(long)]
    pub samples_real: Option<usize>,

    /// Grid samples along the imaginary axis
    #[arg(long)]
    pub samples_imag: Option<usize>,

    /// Grid floor as WIDTHxHEIGHT; the grid is refined when a zoom drops below it
    #[arg(long, value_parser = parse_size)]
    pub min_res: Option<(usize, usize)>,

    #[arg(long)]
    pub frames: Option<usize>,

    /// Cells cropped from each edge per frame
    #[arg(long)]
    pub border: Option<usize>,

    #[arg(long)]
    pub warmup_iterations: Option<u32>,

    #[arg(long)]
    pub iterations_per_frame: Option<u32>,

    /// Frame size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub frame_size: Option<(usize, usize)>,

    /// Stop after this many seconds, keeping the frames written so far
    #[arg(long)]
    pub time_limit_secs: Option<u64>,

    #[arg(short, long, default_value = "output/frames")]
    pub output_dir: PathBuf,
}

/// Parses `WIDTHxHEIGHT`.
pub fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {}", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid size {}: {}", s, err))
    };

    Ok((parse(width)?, parse(height)?))
}
