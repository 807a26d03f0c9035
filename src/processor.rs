//! Conversion pipeline for a single scan export.
//!
//! The input text is traversed twice: the header pass feeds lines into a
//! [`MetadataModel`] until the header/data boundary, the data pass offers
//! every line to a [`HeightField`] sized from the validated metadata. Header
//! lines offered in the data pass are rejected by width, exactly like
//! malformed grid rows.

use crate::config::ConverterConfig;
use crate::constants::METRES_PER_MICROMETRE;
use crate::error::{ConvertError, Result};
use crate::field::HeightField;
use crate::metadata::MetadataModel;
use crate::tokenizer::tokenize;
use crate::trailer::Trailer;
use crate::writer::{SdfWriter, SurfaceHeader, SurfaceWriter};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub num_points: usize,
    pub num_profiles: usize,
    pub loaded_profiles: usize,
    pub rejected_rows: usize,
    pub num_missing: usize,
    pub fill_value: Option<f64>,
    pub processing_time_ms: u128,
}

/// Drives the header pass, data pass, repair and output of one file
pub struct ScanConverter<W: SurfaceWriter = SdfWriter> {
    config: ConverterConfig,
    writer: W,
}

impl ScanConverter<SdfWriter> {
    /// Converter writing SDF as selected by the configuration
    pub fn new(config: ConverterConfig) -> Self {
        let writer = SdfWriter::new(config.iso_format, config.strict);
        Self { config, writer }
    }
}

impl<W: SurfaceWriter> ScanConverter<W> {
    pub fn with_writer(config: ConverterConfig, writer: W) -> Self {
        Self { config, writer }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the complete conversion
    pub fn convert(&self) -> Result<ConversionSummary> {
        let start_time = Instant::now();
        let input_path = &self.config.input_path;
        info!("Converting {}", input_path.display());

        let text = read_input(input_path)?;

        let metadata = read_metadata(&text, input_path)?;
        info!(
            "Metadata: {} points x {} profiles, xscale {:e} m, zscale {:e} m",
            metadata.num_points(),
            metadata.num_profiles(),
            metadata.xscale(),
            metadata.zscale()
        );

        let mut field = read_field(&text, &metadata, self.config.show_progress)?;

        let fill_value = self.config.fill_strategy.fill_value(&field);
        if let Some(fill) = fill_value {
            field.regularize(fill);
            info!(
                "{} missing data points replaced by {}",
                field.num_missing(),
                fill
            );
        }

        let heights = self.scaled_heights(&field, metadata.zscale());
        let trailer = Trailer::build(&self.config, &metadata, &field, fill_value);
        let header = SurfaceHeader {
            manufac_id: metadata.manufac_id().to_string(),
            create_date: metadata.create_date(),
            mod_date: metadata.mod_date().naive_utc(),
            num_points: field.num_points(),
            num_profiles: field.num_profiles(),
            xscale: metadata.xscale(),
            yscale: metadata.yscale(),
            zscale: metadata.zscale(),
        };

        let output_path = &self.config.output_path;
        self.writer
            .write_file(output_path, &header, &heights, &trailer)?;
        info!("Wrote {}", output_path.display());

        Ok(ConversionSummary {
            input_path: input_path.clone(),
            output_path: output_path.clone(),
            num_points: field.num_points(),
            num_profiles: field.num_profiles(),
            loaded_profiles: field.loaded_profiles(),
            rejected_rows: field.rejected_rows(),
            num_missing: field.num_missing(),
            fill_value,
            processing_time_ms: start_time.elapsed().as_millis(),
        })
    }

    /// Heights in metres with the configured bias removed
    fn scaled_heights(&self, field: &HeightField, zscale: f64) -> Vec<f64> {
        let mut heights = field.topography_data(zscale);
        if self.config.bias_um != 0.0 {
            let bias = self.config.bias_um * METRES_PER_MICROMETRE;
            debug!("Subtracting bias of {} m", bias);
            heights.iter_mut().for_each(|height| *height -= bias);
        }
        heights
    }
}

/// Read the export as text, tolerating invalid UTF-8 and a leading BOM
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

/// Header pass; fails when the metadata cannot describe a grid
pub fn read_metadata(text: &str, path: &Path) -> Result<MetadataModel> {
    let metadata = MetadataModel::from_lines(text.lines());
    if !metadata.boundary_reached() {
        warn!("No header/data boundary found in {}", path.display());
    }

    let failures = metadata.validity_failures();
    if !failures.is_empty() {
        return Err(ConvertError::MetadataInvalid {
            path: path.to_path_buf(),
            reason: failures.join(", "),
        });
    }
    Ok(metadata)
}

/// Data pass over the whole text into a field shaped by `metadata`
pub fn read_field(text: &str, metadata: &MetadataModel, show_progress: bool) -> Result<HeightField> {
    let points = usize::try_from(metadata.num_points()).unwrap_or(0);
    let profiles = usize::try_from(metadata.num_profiles()).unwrap_or(0);
    let mut field = HeightField::new(points, profiles)?;

    let progress = if show_progress {
        let pb = ProgressBar::new(profiles as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} profiles")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for line in text.lines() {
        if field.add_profile(tokenize(line).as_slice()) {
            progress.inc(1);
            if field.is_full() {
                break;
            }
        }
    }
    progress.finish_and_clear();

    if !field.is_full() {
        warn!(
            "Only {} of {} profiles found",
            field.loaded_profiles(),
            field.num_profiles()
        );
    }
    if field.num_missing() > 0 {
        warn!("{} invalid data points", field.num_missing());
    }
    debug!("{} rows rejected in data pass", field.rejected_rows());

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\"Horizontal\",\"4\"\n\"Vertical\",\"2\"\n\"XY Calibration\",\"0.5\",\"µm\"\n\"Unit\",\"µm\"\n\"Height\"\n\"1\",\"2\",\"3\",\"4\"\n\"5\",\"x\",\"7\",\"8\"\n\"9\",\"9\",\"9\",\"9\"\n";

    #[test]
    fn test_read_metadata_and_field() {
        let metadata = read_metadata(EXPORT, Path::new("scan.csv")).unwrap();
        let field = read_field(EXPORT, &metadata, false).unwrap();

        assert!(field.is_full());
        assert_eq!(field.num_missing(), 1);
        assert_eq!(field.profile_data(2, 1.0)[3], 8.0);
        // header lines are rejected by width; the pass stops once the grid is full
        assert_eq!(field.rejected_rows(), 5);
    }

    #[test]
    fn test_read_metadata_invalid() {
        let result = read_metadata("\"Horizontal\",\"3\"\n\"END\"\n", Path::new("scan.csv"));
        match result {
            Err(ConvertError::MetadataInvalid { reason, .. }) => {
                assert!(reason.contains("number of profiles"));
                assert!(reason.contains("lateral calibration"));
            }
            other => panic!("expected invalid metadata, got {:?}", other),
        }
    }

    #[test]
    fn test_read_input_strips_bom() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scan.csv");
        std::fs::write(&path, format!("\u{feff}{}", EXPORT)).unwrap();

        let text = read_input(&path).unwrap();
        assert!(text.starts_with("\"Horizontal\""));
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(ConvertError::InputNotFound { .. })));
    }
}
