//! Scan Export Converter Library
//!
//! Converts the line-oriented CSV export of laser confocal microscopes
//! (a bilingual key/value header followed by a numeric height grid) into
//! ISO 25178-71 / BCR raster surface files.
//!
//! This library provides tools for:
//! - Tokenizing export lines with a fixed numeric convention
//! - Deriving grid shape and calibration from the bilingual header
//! - Loading the height grid with running statistics and missing-sample accounting
//! - Repairing invalid samples with a statistic of the valid ones
//! - Writing SDF files with a metadata trailer

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod metadata;
pub mod processor;
pub mod stats;
pub mod tokenizer;
pub mod trailer;
pub mod writer;

// Re-export commonly used types
pub use config::{ConverterConfig, FillStrategy};
pub use error::{ConvertError, Result};
pub use field::HeightField;
pub use metadata::MetadataModel;
pub use processor::{ConversionSummary, ScanConverter};
