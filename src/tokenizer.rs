//! Line tokenizing and lenient numeric coercion.
//!
//! Every helper here is total: malformed input maps to a sentinel (`-1`,
//! `NaN`, or a multiplier of 1.0) instead of an error, so a single bad field
//! never aborts ingestion of a scan export.

use crate::constants::{DEFAULT_UNIT_MULTIPLIER, UNIT_MULTIPLIERS};

/// Numeric convention used to read header and grid values.
///
/// The scan export always writes a decimal point and no digit grouping,
/// independent of the locale of the machine that produced it, so parsing is
/// pinned to that convention instead of the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
}

impl NumberFormat {
    /// Decimal point, no grouping separators
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
    };

    /// Parse an integer, `-1` when the token is not one
    pub fn parse_int(&self, token: &str) -> i32 {
        token.trim().parse::<i32>().unwrap_or(-1)
    }

    /// Parse a float, `NaN` when the token is not one
    pub fn parse_float(&self, token: &str) -> f64 {
        let trimmed = token.trim();
        let parsed = if self.decimal_separator == '.' {
            trimmed.parse::<f64>()
        } else {
            // '.' is not valid under a foreign convention
            if trimmed.contains('.') {
                return f64::NAN;
            }
            trimmed
                .replace(self.decimal_separator, ".")
                .parse::<f64>()
        };
        parsed.unwrap_or(f64::NAN)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Split a line on commas into quote-stripped fields.
///
/// Empty fields produced by the split are dropped before stripping, so
/// `a,,b` yields two tokens while `a,"",b` yields three.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(',')
        .filter(|field| !field.is_empty())
        .map(|field| strip_quotes(field).to_string())
        .collect()
}

/// Remove one leading and one trailing double quote, each if present
fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Parse an integer with the invariant convention, `-1` on failure
pub fn parse_int(token: &str) -> i32 {
    NumberFormat::INVARIANT.parse_int(token)
}

/// Parse a float with the invariant convention, `NaN` on failure
pub fn parse_float(token: &str) -> f64 {
    NumberFormat::INVARIANT.parse_float(token)
}

/// Scale factor to metres for a unit token such as `µm`
pub fn unit_multiplier(token: &str) -> f64 {
    UNIT_MULTIPLIERS
        .iter()
        .find(|(unit, _)| *unit == token)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(DEFAULT_UNIT_MULTIPLIER)
}
