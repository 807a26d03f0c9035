//! Tests for the metadata validity check

use super::super::MetadataModel;

fn valid_metadata() -> MetadataModel {
    let mut metadata = MetadataModel::new();
    metadata.add(&["Horizontal", "4"]);
    metadata.add(&["Vertical", "3"]);
    metadata.add(&["XY Calibration", "0.2", "µm"]);
    metadata
}

#[test]
fn test_empty_metadata_is_invalid() {
    let metadata = MetadataModel::new();
    assert!(!metadata.is_valid());
    assert_eq!(metadata.validity_failures().len(), 3);
}

#[test]
fn test_complete_metadata_is_valid() {
    assert!(valid_metadata().is_valid());
}

#[test]
fn test_zero_points_is_invalid() {
    let mut metadata = valid_metadata();
    metadata.add(&["Horizont.", "0"]);

    assert!(!metadata.is_valid());
    assert_eq!(
        metadata.validity_failures(),
        vec!["number of points per profile is not positive"]
    );
}

#[test]
fn test_negative_profiles_is_invalid() {
    let mut metadata = valid_metadata();
    metadata.add(&["Vertikal", "-3"]);
    assert!(!metadata.is_valid());
}

#[test]
fn test_nan_calibration_is_invalid() {
    let mut metadata = valid_metadata();
    metadata.add(&["XY-Justierung", "n/a", "µm"]);

    assert!(metadata.xscale().is_nan());
    assert!(!metadata.is_valid());
}

#[test]
fn test_non_positive_calibration_is_invalid() {
    let mut metadata = valid_metadata();
    metadata.add(&["XY-Justierung", "-0.1", "µm"]);
    assert_eq!(
        metadata.validity_failures(),
        vec!["lateral calibration is not positive"]
    );
}

#[test]
fn test_validity_is_recomputed() {
    let mut metadata = valid_metadata();
    assert!(metadata.is_valid());

    metadata.add(&["Horizontal", "0"]);
    assert!(!metadata.is_valid());

    metadata.add(&["Horizontal", "5"]);
    assert!(metadata.is_valid());
}
