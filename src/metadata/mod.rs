//! Header metadata of a scan export.
//!
//! [`MetadataModel`] consumes tokenized lines in file order and derives the
//! grid shape, calibration and descriptive attributes from a bilingual key
//! vocabulary. Dispatch is purely on the token count of a line:
//!
//! - two tokens: `key, value`, matched against [`vocabulary::PAIR_VOCABULARY`]
//! - three tokens: `key, value-a, value-b`, matched against
//!   [`vocabulary::TRIPLE_VOCABULARY`]
//! - one token: the header/data boundary, except for the mislabeled
//!   `Data type` line of the English export
//! - anything else is ignored
//!
//! Two- and three-token lines are also kept verbatim in a [`RawDictionary`]
//! for the output trailer. Nothing here fails; unparseable values leave the
//! affected attribute at its unset sentinel.

pub mod raw_dictionary;
pub mod vocabulary;

#[cfg(test)]
mod tests;

use crate::constants::{DATE_FORMATS, DATE_TIME_FORMATS, MISLABELED_HEADER_TOKEN, UNKNOWN_MANUFACTURER};
use crate::tokenizer::{parse_float, parse_int, tokenize, unit_multiplier};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, warn};

pub use raw_dictionary::RawDictionary;
use vocabulary::{IntField, KeyAction, PAIR_VOCABULARY, TRIPLE_VOCABULARY, TextField};

/// Accumulated header state of one scan export
#[derive(Debug, Clone)]
pub struct MetadataModel {
    num_points: i32,
    num_profiles: i32,
    xscale: f64,
    zscale: f64,
    create_date: Option<NaiveDateTime>,
    mod_date: DateTime<Utc>,
    manufac_id: String,
    file_type: String,
    file_type_version: String,
    raw_file_name: String,
    lens_magnification: String,
    resolution: String,
    reference_datum: String,
    spm_technique: String,
    measurement_mode: String,
    z_axis_source: String,
    raw: RawDictionary,
    boundary_reached: bool,
}

impl MetadataModel {
    pub fn new() -> Self {
        Self {
            num_points: -1,
            num_profiles: -1,
            xscale: f64::NAN,
            zscale: f64::NAN,
            create_date: None,
            mod_date: Utc::now(),
            manufac_id: String::new(),
            file_type: String::new(),
            file_type_version: String::new(),
            raw_file_name: String::new(),
            lens_magnification: String::new(),
            resolution: String::new(),
            reference_datum: String::new(),
            spm_technique: String::new(),
            measurement_mode: String::new(),
            z_axis_source: String::new(),
            raw: RawDictionary::new(),
            boundary_reached: false,
        }
    }

    /// Run the header pass over raw text lines, stopping at the boundary
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut metadata = Self::new();
        for line in lines {
            metadata.add(tokenize(line).as_slice());
            if metadata.boundary_reached {
                break;
            }
        }
        metadata
    }

    /// Consume one tokenized line
    pub fn add<S: AsRef<str>>(&mut self, tokens: &[S]) {
        match tokens {
            [key, value] => {
                let (key, value) = (key.as_ref(), value.as_ref());
                self.raw.insert(key, value);
                if let Some(action) = vocabulary::lookup(PAIR_VOCABULARY, key) {
                    self.apply(action, value, None);
                }
            }
            [key, value_a, value_b] => {
                let (key, value_a, value_b) = (key.as_ref(), value_a.as_ref(), value_b.as_ref());
                self.raw.insert(key, format!("{} {}", value_a, value_b));
                if let Some(action) = vocabulary::lookup(TRIPLE_VOCABULARY, key) {
                    self.apply(action, value_a, Some(value_b));
                }
            }
            [token] => {
                let token = token.as_ref();
                if token == MISLABELED_HEADER_TOKEN {
                    debug!("Ignoring mislabeled single-token header line '{}'", token);
                } else {
                    debug!("Header/data boundary at single-token line '{}'", token);
                    self.boundary_reached = true;
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, action: KeyAction, value: &str, unit: Option<&str>) {
        match action {
            KeyAction::SetInt(IntField::NumPoints) => self.num_points = parse_int(value),
            KeyAction::SetInt(IntField::NumProfiles) => self.num_profiles = parse_int(value),
            KeyAction::SetLateralScale => {
                self.xscale = parse_float(value) * unit_multiplier(unit.unwrap_or_default());
            }
            KeyAction::SetHeightScale => self.zscale = unit_multiplier(value),
            KeyAction::SetCreateDate => match parse_date_time(value) {
                Some(date) => self.create_date = Some(date),
                None => warn!("Unrecognised measurement date '{}', keeping previous", value),
            },
            KeyAction::SetText(field) => *self.text_mut(field) = value.to_string(),
            KeyAction::SetTextWithOverrides(field, overrides) => {
                *self.text_mut(field) = vocabulary::apply_overrides(value, overrides);
            }
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::ManufacId => &mut self.manufac_id,
            TextField::FileType => &mut self.file_type,
            TextField::FileTypeVersion => &mut self.file_type_version,
            TextField::RawFileName => &mut self.raw_file_name,
            TextField::LensMagnification => &mut self.lens_magnification,
            TextField::Resolution => &mut self.resolution,
            TextField::ReferenceDatum => &mut self.reference_datum,
            TextField::SpmTechnique => &mut self.spm_technique,
            TextField::MeasurementMode => &mut self.measurement_mode,
            TextField::ZAxisSource => &mut self.z_axis_source,
        }
    }

    /// Reasons the metadata cannot describe a grid; empty when valid
    pub fn validity_failures(&self) -> Vec<&'static str> {
        let mut failures = Vec::new();
        if self.num_points <= 0 {
            failures.push("number of points per profile is not positive");
        }
        if self.num_profiles <= 0 {
            failures.push("number of profiles is not positive");
        }
        if self.xscale.is_nan() {
            failures.push("lateral calibration is missing or not a number");
        } else if self.xscale <= 0.0 {
            failures.push("lateral calibration is not positive");
        }
        failures
    }

    /// Recomputed on every call, attributes may change until the boundary
    pub fn is_valid(&self) -> bool {
        self.validity_failures().is_empty()
    }

    pub fn boundary_reached(&self) -> bool {
        self.boundary_reached
    }

    /// Points per profile, `-1` while unset or unparseable
    pub fn num_points(&self) -> i32 {
        self.num_points
    }

    /// Number of profiles, `-1` while unset or unparseable
    pub fn num_profiles(&self) -> i32 {
        self.num_profiles
    }

    /// Lateral sample spacing in metres, NaN while unset
    pub fn xscale(&self) -> f64 {
        self.xscale
    }

    pub fn yscale(&self) -> f64 {
        self.xscale
    }

    /// Height unit in metres; 1.0 when the header has no unit line
    pub fn zscale(&self) -> f64 {
        if self.zscale.is_nan() { 1.0 } else { self.zscale }
    }

    /// Measurement time, falling back to the modification time
    pub fn create_date(&self) -> NaiveDateTime {
        self.create_date.unwrap_or_else(|| self.mod_date.naive_utc())
    }

    pub fn mod_date(&self) -> DateTime<Utc> {
        self.mod_date
    }

    pub fn manufac_id(&self) -> &str {
        if self.manufac_id.is_empty() {
            UNKNOWN_MANUFACTURER
        } else {
            &self.manufac_id
        }
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn file_type_version(&self) -> &str {
        &self.file_type_version
    }

    pub fn raw_file_name(&self) -> &str {
        &self.raw_file_name
    }

    pub fn lens_magnification(&self) -> &str {
        &self.lens_magnification
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    pub fn reference_datum(&self) -> &str {
        &self.reference_datum
    }

    pub fn spm_technique(&self) -> &str {
        &self.spm_technique
    }

    pub fn measurement_mode(&self) -> &str {
        &self.measurement_mode
    }

    pub fn z_axis_source(&self) -> &str {
        &self.z_axis_source
    }

    /// Every two- and three-token header line, verbatim
    pub fn raw_dictionary(&self) -> &RawDictionary {
        &self.raw
    }
}

impl Default for MetadataModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the measured date in any of the layouts the export uses
fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
