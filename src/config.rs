//! Conversion settings.
//!
//! [`ConverterConfig`] carries everything the processor needs besides the
//! input text itself: paths, the repair strategy for invalid samples, the
//! bias to subtract and the output formatting switches.

use crate::cli::Args;
use crate::constants::{DEFAULT_USER_COMMENT, INPUT_EXTENSION, OUTPUT_EXTENSION};
use crate::error::{ConvertError, Result};
use crate::field::HeightField;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// How invalid samples are repaired after loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillStrategy {
    /// Leave invalid samples in place
    #[default]
    Keep,
    Zero,
    Minimum,
    Maximum,
    Average,
    Central,
}

impl FillStrategy {
    /// Map the numeric `--mask` code to a strategy
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FillStrategy::Keep),
            1 => Some(FillStrategy::Zero),
            2 => Some(FillStrategy::Minimum),
            3 => Some(FillStrategy::Maximum),
            4 => Some(FillStrategy::Average),
            5 => Some(FillStrategy::Central),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != FillStrategy::Keep
    }

    /// Fill value taken from the field statistics, `None` for [`Keep`](Self::Keep)
    pub fn fill_value(&self, field: &HeightField) -> Option<f64> {
        match self {
            FillStrategy::Keep => None,
            FillStrategy::Zero => Some(0.0),
            FillStrategy::Minimum => Some(field.min_height()),
            FillStrategy::Maximum => Some(field.max_height()),
            FillStrategy::Average => Some(field.average_height()),
            FillStrategy::Central => Some(field.central_height()),
        }
    }
}

/// Settings for one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Scan export to read
    pub input_path: PathBuf,

    /// SDF file to write
    pub output_path: PathBuf,

    /// Height offset in micrometres subtracted from every sample
    pub bias_um: f64,

    /// Free text written to the trailer
    pub user_comment: String,

    /// Repair of invalid samples
    pub fill_strategy: FillStrategy,

    /// Write the ISO 25178-71 magic instead of the legacy BCR one
    pub iso_format: bool,

    /// Enforce the format limits on ManufacID and trailer keys
    pub strict: bool,

    /// Suppress console output apart from errors
    pub quiet: bool,

    /// Show a progress bar during the data pass
    pub show_progress: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            bias_um: 0.0,
            user_comment: DEFAULT_USER_COMMENT.to_string(),
            fill_strategy: FillStrategy::Keep,
            iso_format: false,
            strict: false,
            quiet: false,
            show_progress: true,
        }
    }
}

impl ConverterConfig {
    /// Configuration for an input file with every other setting at its default
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input_path = normalize_input_path(input.into());
        let output_path = default_output_path(&input_path);
        Self {
            input_path,
            output_path,
            ..Default::default()
        }
    }

    /// Build the configuration from parsed command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let fill_strategy = FillStrategy::from_code(args.mask).ok_or_else(|| {
            ConvertError::configuration(format!("Unsupported mask code: {}", args.mask))
        })?;

        let mut config = Self::for_input(&args.input_path);
        if let Some(output) = &args.output_path {
            config.output_path = output.clone();
        }
        config.bias_um = args.bias;
        config.user_comment = args.comment.clone();
        config.fill_strategy = fill_strategy;
        config.iso_format = args.iso;
        config.strict = args.strict;
        config.quiet = args.quiet;
        config.show_progress = !args.quiet && !args.no_progress;

        config.validate()?;
        debug!("Converter configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConvertError::configuration("Input path is empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConvertError::configuration("Output path is empty"));
        }
        if !self.bias_um.is_finite() {
            return Err(ConvertError::configuration(format!(
                "Bias must be a finite number, got {}",
                self.bias_um
            )));
        }
        Ok(())
    }
}

/// The export is always read from its `.csv` sibling
pub fn normalize_input_path(path: PathBuf) -> PathBuf {
    if path.as_os_str().is_empty() {
        return path;
    }
    path.with_extension(INPUT_EXTENSION)
}

/// Output next to the input with the SDF extension
pub fn default_output_path(input: &std::path::Path) -> PathBuf {
    if input.as_os_str().is_empty() {
        return PathBuf::new();
    }
    input.with_extension(OUTPUT_EXTENSION)
}
