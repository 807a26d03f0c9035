//! Flat key/value trailer handed to the output writer.

use crate::config::ConverterConfig;
use crate::constants::METRES_PER_MICROMETRE;
use crate::field::HeightField;
use crate::metadata::{MetadataModel, RawDictionary};

/// Ordered trailer entries; re-inserting a key overwrites in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailer {
    entries: RawDictionary,
}

impl Trailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter()
    }

    /// Assemble the trailer of a conversion.
    ///
    /// `fill_value` is the value invalid samples were replaced by, if any.
    pub fn build(
        config: &ConverterConfig,
        metadata: &MetadataModel,
        field: &HeightField,
        fill_value: Option<f64>,
    ) -> Self {
        let mut trailer = Self::new();
        trailer.insert("UserComment", config.user_comment.as_str());
        trailer.insert(
            "ConvertedBy",
            format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        );
        trailer.insert("InputFile", config.input_path.display().to_string());
        trailer.insert("RawFileName", metadata.raw_file_name());
        trailer.insert("SPMtechnique", metadata.spm_technique());
        trailer.insert("MeasurementMode", metadata.measurement_mode());
        trailer.insert("ZAxisSource", metadata.z_axis_source());
        trailer.insert("Resolution", metadata.resolution());
        trailer.insert("LensMagnification", metadata.lens_magnification());
        trailer.insert("ReferenceDatum", metadata.reference_datum());

        let to_micrometres = metadata.zscale() / METRES_PER_MICROMETRE;
        trailer.insert(
            "MinimumValue",
            format!("{:.3} µm", field.min_height() * to_micrometres),
        );
        trailer.insert(
            "MaximumValue",
            format!("{:.3} µm", field.max_height() * to_micrometres),
        );

        if field.num_missing() != 0 {
            trailer.insert("InvalidPoints", field.num_missing().to_string());
            if let Some(fill) = fill_value {
                trailer.insert("InvalidPointsReplacedBy", format!("{:.3}", fill));
            }
        }

        for (key, value) in metadata.raw_dictionary().iter() {
            trailer.insert(format!("[{}]", key), format!("[{}]", value));
        }
        trailer
    }
}
