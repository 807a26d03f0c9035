//! Tests for token-count and key dispatch of header lines

use super::super::MetadataModel;

#[test]
fn test_bilingual_last_write_wins() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Horizont.", "10"]);
    metadata.add(&["Horizontal", "20"]);
    assert_eq!(metadata.num_points(), 20);

    metadata.add(&["Horizont.", "30"]);
    assert_eq!(metadata.num_points(), 30);
}

#[test]
fn test_single_language_equals_both_with_equal_values() {
    let mut native_only = MetadataModel::new();
    native_only.add(&["Vertikal", "7"]);

    let mut both = MetadataModel::new();
    both.add(&["Vertikal", "7"]);
    both.add(&["Vertical", "7"]);

    assert_eq!(native_only.num_profiles(), both.num_profiles());
    assert_eq!(both.num_profiles(), 7);
}

#[test]
fn test_re_adding_row_is_stable() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Modell", "VK-X3000"]);
    let first = metadata.manufac_id().to_string();
    metadata.add(&["Modell", "VK-X3000"]);

    assert_eq!(metadata.manufac_id(), first);
    assert_eq!(metadata.raw_dictionary().len(), 1);
}

#[test]
fn test_unparseable_integer_is_unset_sentinel() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Horizontal", "many"]);
    assert_eq!(metadata.num_points(), -1);
}

#[test]
fn test_calibration_line_sets_both_lateral_scales() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["XY-Justierung", "0.138", "µm"]);

    assert!((metadata.xscale() - 0.138e-6).abs() < 1e-18);
    assert_eq!(metadata.xscale(), metadata.yscale());
    assert_eq!(metadata.raw_dictionary().get("XY-Justierung"), Some("0.138 µm"));
}

#[test]
fn test_calibration_with_unknown_unit() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["XY Calibration", "2.5", "px"]);
    assert_eq!(metadata.xscale(), 2.5);
}

#[test]
fn test_calibration_key_on_two_token_line_is_not_interpreted() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["XY Calibration", "0.5"]);

    assert!(metadata.xscale().is_nan());
    assert_eq!(metadata.raw_dictionary().get("XY Calibration"), Some("0.5"));
}

#[test]
fn test_height_unit() {
    let mut metadata = MetadataModel::new();
    assert_eq!(metadata.zscale(), 1.0);

    metadata.add(&["Einheit", "mm"]);
    assert_eq!(metadata.zscale(), 1e-3);

    metadata.add(&["Unit", "??"]);
    assert_eq!(metadata.zscale(), 1.0);
}

#[test]
fn test_scan_mode_overrides() {
    let mut metadata = MetadataModel::new();

    metadata.add(&["Messmethode", "Konfokaler Laser (Standard)"]);
    assert_eq!(metadata.spm_technique(), "Laser confocal");

    metadata.add(&["Scan Mode", "Weißlichtinterferometrie"]);
    assert_eq!(metadata.spm_technique(), "WhiteLightInterferometry");

    metadata.add(&["Messmethode", "Fokus-Variation"]);
    assert_eq!(metadata.spm_technique(), "FocusVariation");

    metadata.add(&["Scan Mode", "Laser confocal"]);
    assert_eq!(metadata.spm_technique(), "Laser confocal");

    metadata.add(&["Scan Mode", "Something else"]);
    assert_eq!(metadata.spm_technique(), "Something else");
}

#[test]
fn test_z_axis_source_override() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Bilddatenausg.", "Höhe + Intensität"]);
    assert_eq!(metadata.z_axis_source(), "Height");

    metadata.add(&["Output image data", "Intensity"]);
    assert_eq!(metadata.z_axis_source(), "Intensity");
}

#[test]
fn test_verbatim_text_fields() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Dateityp", "VK6"]);
    metadata.add(&["File version", "2.1"]);
    metadata.add(&["Messdatenname", "probe.vk6"]);
    metadata.add(&["Objective Lens Power", "50x"]);
    metadata.add(&["Auflösung", "1024 x 768"]);
    metadata.add(&["Reference data name", "ref.vk6"]);
    metadata.add(&["Messmodus", "Oberflächenprofil"]);

    assert_eq!(metadata.file_type(), "VK6");
    assert_eq!(metadata.file_type_version(), "2.1");
    assert_eq!(metadata.raw_file_name(), "probe.vk6");
    assert_eq!(metadata.lens_magnification(), "50x");
    assert_eq!(metadata.resolution(), "1024 x 768");
    assert_eq!(metadata.reference_datum(), "ref.vk6");
    assert_eq!(metadata.measurement_mode(), "Oberflächenprofil");
}

#[test]
fn test_manufacturer_fallback() {
    let mut metadata = MetadataModel::new();
    assert_eq!(metadata.manufac_id(), "<unknown>");

    metadata.add(&["Model", "VK-X1000"]);
    assert_eq!(metadata.manufac_id(), "VK-X1000");
}

#[test]
fn test_measured_date_parsing() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Gemessenes Datum", "2023/05/12 14:33:10"]);
    assert_eq!(
        metadata.create_date().format("%Y-%m-%d %H:%M:%S").to_string(),
        "2023-05-12 14:33:10"
    );

    // unparseable date keeps the previous value
    metadata.add(&["Measured date", "yesterday"]);
    assert_eq!(
        metadata.create_date().format("%Y-%m-%d %H:%M:%S").to_string(),
        "2023-05-12 14:33:10"
    );

    metadata.add(&["Measured date", "01.02.2024"]);
    assert_eq!(
        metadata.create_date().format("%Y-%m-%d %H:%M:%S").to_string(),
        "2024-02-01 00:00:00"
    );
}

#[test]
fn test_create_date_defaults_to_mod_date() {
    let metadata = MetadataModel::new();
    assert_eq!(metadata.create_date(), metadata.mod_date().naive_utc());
}

#[test]
fn test_unrecognised_keys_are_kept_raw() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Seriennummer", "12345"]);
    metadata.add(&["Zoom", "1.0", "x"]);

    let entries: Vec<_> = metadata.raw_dictionary().iter().collect();
    assert_eq!(entries, vec![("Seriennummer", "12345"), ("Zoom", "1.0 x")]);
    assert!(!metadata.boundary_reached());
}

#[test]
fn test_other_row_lengths_are_ignored() {
    let mut metadata = MetadataModel::new();
    metadata.add::<&str>(&[]);
    metadata.add(&["a", "b", "c", "d"]);

    assert!(metadata.raw_dictionary().is_empty());
    assert!(!metadata.boundary_reached());
}

#[test]
fn test_data_type_line_is_not_a_boundary() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Data type"]);
    assert!(!metadata.boundary_reached());
    assert!(metadata.raw_dictionary().is_empty());
}

#[test]
fn test_any_other_single_token_is_a_boundary() {
    let mut metadata = MetadataModel::new();
    metadata.add(&["END"]);
    assert!(metadata.boundary_reached());
}
