//! Tests for the header pass over complete exports

use super::{create_english_export, create_native_export, read_header};

#[test]
fn test_native_export_header() {
    let metadata = read_header(&create_native_export());

    assert!(metadata.boundary_reached());
    assert!(metadata.is_valid());
    assert_eq!(metadata.num_points(), 3);
    assert_eq!(metadata.num_profiles(), 2);
    assert!((metadata.xscale() - 0.138e-6).abs() < 1e-18);
    assert_eq!(metadata.zscale(), 1e-6);
    assert_eq!(metadata.manufac_id(), "VK-X3000");
    assert_eq!(metadata.file_type(), "VK6");
    assert_eq!(metadata.file_type_version(), "1.0.0.0");
    assert_eq!(metadata.raw_file_name(), "probe_17.vk6");
    assert_eq!(metadata.spm_technique(), "Laser confocal");
    assert_eq!(metadata.measurement_mode(), "Oberflächenprofil");
    assert_eq!(metadata.resolution(), "2048 x 1536");
    assert_eq!(metadata.z_axis_source(), "Height");
    assert_eq!(
        metadata.create_date().format("%d%m%Y%H%M").to_string(),
        "120520231433"
    );
}

#[test]
fn test_quoted_comma_splits_value() {
    let metadata = read_header(&create_native_export());

    // "50,0x" is split by the tokenizer like every other comma
    assert_eq!(metadata.lens_magnification(), "");
    assert_eq!(
        metadata.raw_dictionary().get("Objektivvergrößerung"),
        Some("50 0x")
    );
}

#[test]
fn test_header_pass_stops_at_boundary() {
    let metadata = read_header(&create_native_export());

    // the three-token data row after the boundary must not reach the model
    assert_eq!(metadata.raw_dictionary().get("1.5"), None);
    assert_eq!(metadata.raw_dictionary().len(), 14);
}

#[test]
fn test_english_export_header() {
    let metadata = read_header(&create_english_export());

    assert!(metadata.boundary_reached());
    assert!(metadata.is_valid());
    assert_eq!(metadata.num_points(), 4);
    assert_eq!(metadata.num_profiles(), 3);
    assert!((metadata.xscale() - 0.5e-9).abs() < 1e-21);
    assert_eq!(metadata.zscale(), 1e-9);
    assert_eq!(metadata.spm_technique(), "WhiteLightInterferometry");
    assert_eq!(metadata.z_axis_source(), "Height");
    assert_eq!(metadata.file_type(), "VK6");
}

#[test]
fn test_header_without_boundary() {
    let metadata = read_header("\"Horizontal\",\"4\"\n\"Vertical\",\"3\"\n");

    assert!(!metadata.boundary_reached());
    assert_eq!(metadata.num_points(), 4);
    assert!(!metadata.is_valid());
}

#[test]
fn test_blank_lines_are_skipped() {
    let metadata = read_header("\n\n\"Horizontal\",\"4\"\n,,\n\"END\"\n");

    assert!(metadata.boundary_reached());
    assert_eq!(metadata.num_points(), 4);
}
