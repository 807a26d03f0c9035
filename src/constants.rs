//! Application constants for the scan converter
//!
//! Unit prefixes, the bilingual header vocabulary of the scan export and the
//! literals of the SDF output format live here.

// =============================================================================
// Unit Prefixes
// =============================================================================

/// Length units recognised in calibration and height-unit header values.
///
/// Anything not listed (including micro sign variants other than `µm`)
/// scales by 1.0.
pub const UNIT_MULTIPLIERS: &[(&str, f64)] = &[
    ("nm", 1e-9),
    ("µm", 1e-6),
    ("mm", 1e-3),
    ("cm", 1e-2),
    ("dm", 1e-1),
    ("km", 1e3),
];

/// Multiplier applied when a unit token is not recognised
pub const DEFAULT_UNIT_MULTIPLIER: f64 = 1.0;

/// Metres per micrometre, used for the bias option and trailer extremes
pub const METRES_PER_MICROMETRE: f64 = 1e-6;

// =============================================================================
// Header Vocabulary
// =============================================================================

/// Header keys of the scan export, as `(native, english)` pairs
pub mod keys {
    pub const NUM_POINTS: (&str, &str) = ("Horizont.", "Horizontal");
    pub const NUM_PROFILES: (&str, &str) = ("Vertikal", "Vertical");
    pub const XY_CALIBRATION: (&str, &str) = ("XY-Justierung", "XY Calibration");
    pub const Z_UNIT: (&str, &str) = ("Einheit", "Unit");
    pub const MEASURED_DATE: (&str, &str) = ("Gemessenes Datum", "Measured date");
    pub const MODEL: (&str, &str) = ("Modell", "Model");
    pub const FILE_TYPE: (&str, &str) = ("Dateityp", "File type");
    pub const FILE_VERSION: (&str, &str) = ("Dateiversion", "File version");
    pub const RAW_FILE_NAME: (&str, &str) = ("Messdatenname", "Measurement data name");
    pub const LENS_MAGNIFICATION: (&str, &str) = ("Objektivvergrößerung", "Objective Lens Power");
    pub const RESOLUTION: (&str, &str) = ("Auflösung", "Resolution");
    pub const REFERENCE_DATUM: (&str, &str) = ("Referenzdatenname", "Reference data name");
    pub const SCAN_MODE: (&str, &str) = ("Messmethode", "Scan Mode");
    pub const MEASUREMENT_MODE: (&str, &str) = ("Messmodus", "Measurement Mode");
    pub const OUTPUT_IMAGE_DATA: (&str, &str) = ("Bilddatenausg.", "Output image data");
}

/// Single-token line the English export emits inside the header.
///
/// It must not be taken as the header/data boundary.
pub const MISLABELED_HEADER_TOKEN: &str = "Data type";

/// Substring overrides for the scan technique, applied in this order
pub const SPM_TECHNIQUE_OVERRIDES: &[(&str, &str)] = &[
    ("Konfokaler Laser", "Laser confocal"),
    ("Weißlichtinterferometrie", "WhiteLightInterferometry"),
    ("Variation", "FocusVariation"),
];

/// Substring override for the Z axis source
pub const Z_AXIS_SOURCE_OVERRIDE: (&str, &str) = ("Höhe", "Height");

/// Manufacturer id reported when the header carries no model line
pub const UNKNOWN_MANUFACTURER: &str = "<unknown>";

/// Date-time layouts accepted for the measured date
pub const DATE_TIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only layouts accepted for the measured date (midnight assumed)
pub const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%d.%m.%Y"];

// =============================================================================
// Output Format
// =============================================================================

/// SDF format literals
pub mod sdf {
    pub const MAGIC_ISO: &str = "aISO-1.0";
    pub const MAGIC_BCR: &str = "aBCR-1.0";
    pub const SECTION_END: &str = "*";
    pub const DATE_FORMAT: &str = "%d%m%Y%H%M";
    pub const Z_RESOLUTION: i32 = -1;
    pub const COMPRESSION: i32 = 0;
    /// Double precision floating point
    pub const DATA_TYPE: i32 = 7;
    pub const CHECK_TYPE: i32 = 0;
    pub const INVALID_SAMPLE: &str = "BAD";
    /// Longest ManufacID accepted in strict mode
    pub const MAX_MANUFACTURER_ID_LEN: usize = 10;
}

/// Extension forced onto the input path
pub const INPUT_EXTENSION: &str = "csv";

/// Extension of the default output path
pub const OUTPUT_EXTENSION: &str = "sdf";

/// Default user comment written to the trailer
pub const DEFAULT_USER_COMMENT: &str = "---";
