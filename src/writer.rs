//! ASCII SDF output (ISO 25178-71 and the legacy BCR layout).
//!
//! A file has three `*`-terminated sections: a fixed header, one height per
//! line in profile-major order, and a free `key = value` trailer.

use crate::constants::sdf;
use crate::error::{ConvertError, Result};
use crate::trailer::Trailer;
use chrono::NaiveDateTime;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static NON_KEY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("static pattern is valid"));

/// Header fields of a raster surface file
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceHeader {
    pub manufac_id: String,
    pub create_date: NaiveDateTime,
    pub mod_date: NaiveDateTime,
    pub num_points: usize,
    pub num_profiles: usize,
    /// Metres per sample along a profile
    pub xscale: f64,
    /// Metres between profiles
    pub yscale: f64,
    /// Metres per stored height unit
    pub zscale: f64,
}

/// Destination format for a converted surface
pub trait SurfaceWriter {
    /// Write `heights` (metres, profile-major) with header and trailer to `path`
    fn write_file(
        &self,
        path: &Path,
        header: &SurfaceHeader,
        heights: &[f64],
        trailer: &Trailer,
    ) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SdfWriter {
    pub iso_format: bool,
    pub strict: bool,
}

impl SdfWriter {
    pub fn new(iso_format: bool, strict: bool) -> Self {
        Self { iso_format, strict }
    }

    /// Encode a complete file into `out`
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        header: &SurfaceHeader,
        heights: &[f64],
        trailer: &Trailer,
    ) -> io::Result<()> {
        self.render_header(out, header)?;
        for height in heights {
            if height.is_nan() {
                writeln!(out, "{}", sdf::INVALID_SAMPLE)?;
            } else {
                writeln!(out, "{}", height / header.zscale)?;
            }
        }
        writeln!(out, "{}", sdf::SECTION_END)?;

        for (key, value) in trailer.iter() {
            writeln!(out, "{} = {}", self.trailer_key(key), value)?;
        }
        writeln!(out, "{}", sdf::SECTION_END)
    }

    fn render_header<W: Write>(&self, out: &mut W, header: &SurfaceHeader) -> io::Result<()> {
        let magic = if self.iso_format {
            sdf::MAGIC_ISO
        } else {
            sdf::MAGIC_BCR
        };
        writeln!(out, "{}", magic)?;
        writeln!(out, "ManufacID   = {}", self.manufacturer_id(&header.manufac_id))?;
        writeln!(out, "CreateDate  = {}", header.create_date.format(sdf::DATE_FORMAT))?;
        writeln!(out, "ModDate     = {}", header.mod_date.format(sdf::DATE_FORMAT))?;
        writeln!(out, "NumPoints   = {}", header.num_points)?;
        writeln!(out, "NumProfiles = {}", header.num_profiles)?;
        writeln!(out, "Xscale      = {:e}", header.xscale)?;
        writeln!(out, "Yscale      = {:e}", header.yscale)?;
        writeln!(out, "Zscale      = {:e}", header.zscale)?;
        writeln!(out, "Zresolution = {}", sdf::Z_RESOLUTION)?;
        writeln!(out, "Compression = {}", sdf::COMPRESSION)?;
        writeln!(out, "DataType    = {}", sdf::DATA_TYPE)?;
        writeln!(out, "CheckType   = {}", sdf::CHECK_TYPE)?;
        writeln!(out, "{}", sdf::SECTION_END)
    }

    fn manufacturer_id(&self, id: &str) -> String {
        if self.strict {
            id.chars().take(sdf::MAX_MANUFACTURER_ID_LEN).collect()
        } else {
            id.to_string()
        }
    }

    fn trailer_key(&self, key: &str) -> String {
        if self.strict {
            NON_KEY_CHARS.replace_all(key, "_").into_owned()
        } else {
            key.to_string()
        }
    }
}

impl SurfaceWriter for SdfWriter {
    fn write_file(
        &self,
        path: &Path,
        header: &SurfaceHeader,
        heights: &[f64],
        trailer: &Trailer,
    ) -> Result<()> {
        debug!(
            "Writing {} heights to {} (iso: {}, strict: {})",
            heights.len(),
            path.display(),
            self.iso_format,
            self.strict
        );
        let file = File::create(path).map_err(|e| ConvertError::output(path, e))?;
        let mut out = BufWriter::new(file);
        self.render(&mut out, header, heights, trailer)
            .and_then(|_| out.flush())
            .map_err(|e| ConvertError::output(path, e))
    }
}
