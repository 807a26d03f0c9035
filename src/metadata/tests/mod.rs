//! Test fixtures for header metadata parsing
//!
//! Sample headers in both export languages, trimmed to the lines the
//! converter cares about plus a few it must pass through untouched.

use super::MetadataModel;

mod dispatch_tests;
mod header_pass_tests;
mod validity_tests;

/// Header of a native-language export followed by the start of the grid
pub fn create_native_export() -> String {
    r#""Modell","VK-X3000"
"Dateityp","VK6"
"Dateiversion","1.0.0.0"
"Messdatenname","probe_17.vk6"
"Gemessenes Datum","2023/05/12 14:33:10"
"Objektivvergrößerung","50,0x"
"Messmethode","Konfokaler Laser"
"Messmodus","Oberflächenprofil"
"Auflösung","2048 x 1536"
"Bilddatenausg.","Höhe"
"XY-Justierung","0.138","µm"
"Horizont.","3"
"Vertikal","2"
"Einheit","µm"
"Höhe"
"1.5","2.5","3.5"
"4.5","5.5","6.5"
"#
    .to_string()
}

/// Header of an English export, including the mislabeled single-token line
pub fn create_english_export() -> String {
    r#""Model","VK-X3000"
"File type","VK6"
"Data type"
"Measured date","2023/05/12 14:33:10"
"Scan Mode","Weißlichtinterferometrie"
"Output image data","Height"
"XY Calibration","0.5","nm"
"Horizontal","4"
"Vertical","3"
"Unit","nm"
"Height"
"1","2","3","4"
"#
    .to_string()
}

/// Feed a header through the header pass
pub fn read_header(content: &str) -> MetadataModel {
    MetadataModel::from_lines(content.lines())
}
