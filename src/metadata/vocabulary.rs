//! Bilingual header vocabulary of the scan export.
//!
//! Each entry maps every spelling of a header key to the operation that
//! derives a metadata attribute from its value. Supporting a further export
//! language means appending its spellings to the `keys` lists.

use crate::constants::{SPM_TECHNIQUE_OVERRIDES, Z_AXIS_SOURCE_OVERRIDE, keys};

/// Integer attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntField {
    NumPoints,
    NumProfiles,
}

/// Free-text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ManufacId,
    FileType,
    FileTypeVersion,
    RawFileName,
    LensMagnification,
    Resolution,
    ReferenceDatum,
    SpmTechnique,
    MeasurementMode,
    ZAxisSource,
}

/// Operation applied to the value of a recognised key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Parse the value as an integer
    SetInt(IntField),
    /// Lateral scale from `number, unit` (three-token lines only)
    SetLateralScale,
    /// Height scale from a unit token
    SetHeightScale,
    /// Measurement timestamp
    SetCreateDate,
    /// Store the value verbatim
    SetText(TextField),
    /// Store the value, then replace it by the replacement of each
    /// `(needle, replacement)` pair whose needle occurs in the raw value
    SetTextWithOverrides(TextField, &'static [(&'static str, &'static str)]),
}

/// One key of the vocabulary in all its spellings
#[derive(Debug)]
pub struct VocabularyEntry {
    pub keys: &'static [&'static str],
    pub action: KeyAction,
}

const Z_AXIS_OVERRIDES: &[(&str, &str)] = &[Z_AXIS_SOURCE_OVERRIDE];

/// Keys recognised on `key, value` lines
pub const PAIR_VOCABULARY: &[VocabularyEntry] = &[
    VocabularyEntry {
        keys: &[keys::NUM_POINTS.0, keys::NUM_POINTS.1],
        action: KeyAction::SetInt(IntField::NumPoints),
    },
    VocabularyEntry {
        keys: &[keys::NUM_PROFILES.0, keys::NUM_PROFILES.1],
        action: KeyAction::SetInt(IntField::NumProfiles),
    },
    VocabularyEntry {
        keys: &[keys::Z_UNIT.0, keys::Z_UNIT.1],
        action: KeyAction::SetHeightScale,
    },
    VocabularyEntry {
        keys: &[keys::MEASURED_DATE.0, keys::MEASURED_DATE.1],
        action: KeyAction::SetCreateDate,
    },
    VocabularyEntry {
        keys: &[keys::MODEL.0, keys::MODEL.1],
        action: KeyAction::SetText(TextField::ManufacId),
    },
    VocabularyEntry {
        keys: &[keys::FILE_TYPE.0, keys::FILE_TYPE.1],
        action: KeyAction::SetText(TextField::FileType),
    },
    VocabularyEntry {
        keys: &[keys::FILE_VERSION.0, keys::FILE_VERSION.1],
        action: KeyAction::SetText(TextField::FileTypeVersion),
    },
    VocabularyEntry {
        keys: &[keys::RAW_FILE_NAME.0, keys::RAW_FILE_NAME.1],
        action: KeyAction::SetText(TextField::RawFileName),
    },
    VocabularyEntry {
        keys: &[keys::LENS_MAGNIFICATION.0, keys::LENS_MAGNIFICATION.1],
        action: KeyAction::SetText(TextField::LensMagnification),
    },
    VocabularyEntry {
        keys: &[keys::RESOLUTION.0, keys::RESOLUTION.1],
        action: KeyAction::SetText(TextField::Resolution),
    },
    VocabularyEntry {
        keys: &[keys::REFERENCE_DATUM.0, keys::REFERENCE_DATUM.1],
        action: KeyAction::SetText(TextField::ReferenceDatum),
    },
    VocabularyEntry {
        keys: &[keys::SCAN_MODE.0, keys::SCAN_MODE.1],
        action: KeyAction::SetTextWithOverrides(TextField::SpmTechnique, SPM_TECHNIQUE_OVERRIDES),
    },
    // TODO: translate native measurement mode values once the export's
    // value list is known
    VocabularyEntry {
        keys: &[keys::MEASUREMENT_MODE.0, keys::MEASUREMENT_MODE.1],
        action: KeyAction::SetText(TextField::MeasurementMode),
    },
    VocabularyEntry {
        keys: &[keys::OUTPUT_IMAGE_DATA.0, keys::OUTPUT_IMAGE_DATA.1],
        action: KeyAction::SetTextWithOverrides(TextField::ZAxisSource, Z_AXIS_OVERRIDES),
    },
];

/// Keys recognised on `key, value-a, value-b` lines
pub const TRIPLE_VOCABULARY: &[VocabularyEntry] = &[VocabularyEntry {
    keys: &[keys::XY_CALIBRATION.0, keys::XY_CALIBRATION.1],
    action: KeyAction::SetLateralScale,
}];

/// Find the action for `key` in a vocabulary table
pub fn lookup(vocabulary: &[VocabularyEntry], key: &str) -> Option<KeyAction> {
    vocabulary
        .iter()
        .find(|entry| entry.keys.iter().any(|spelling| *spelling == key))
        .map(|entry| entry.action)
}

/// Apply substring overrides to a raw value; later matches win
pub fn apply_overrides(value: &str, overrides: &[(&str, &str)]) -> String {
    overrides
        .iter()
        .filter(|(needle, _)| value.contains(*needle))
        .map(|(_, replacement)| replacement.to_string())
        .last()
        .unwrap_or_else(|| value.to_string())
}
