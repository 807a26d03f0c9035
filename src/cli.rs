//! Command-line interface components.

use crate::constants::DEFAULT_USER_COMMENT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "kcsv_processor")]
#[command(
    about = "Convert laser confocal microscope CSV scan exports to BCR or ISO 25178-71 raster data files"
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Supported values for -m, --mask:
   0: keep invalid points
   1: replace all invalid points by 0
   2: replace all invalid points by the minimum height value
   3: replace all invalid points by the maximum height value
   4: replace all invalid points by the average height value
   5: replace all invalid points by the central height value")]
pub struct Args {
    /// Input file name including path (the extension is forced to .csv)
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output file name including path (defaults to the input with .sdf)
    #[arg(value_name = "OUTPUT")]
    pub output_path: Option<PathBuf>,

    /// Bias value in µm subtracted from every height
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub bias: f64,

    /// Quiet mode, no screen output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// User supplied comment string
    #[arg(long, default_value = DEFAULT_USER_COMMENT)]
    pub comment: String,

    /// Replace (mask) missing data points with a neutral value
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub mask: u8,

    /// Write an ISO 25178-71:2012 file instead of legacy BCR
    #[arg(long)]
    pub iso: bool,

    /// Force standardized formatting
    #[arg(long)]
    pub strict: bool,

    /// Do not show a progress bar while reading the grid
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}
