//! Height field: a fixed-shape grid of samples loaded profile by profile.
//!
//! Profiles are appended in file order through [`HeightField::add_profile`].
//! Rows of the wrong width and rows beyond the declared profile count are
//! dropped without error; the export is known to carry truncated or
//! inconsistent trailing rows. Dropped rows are only counted in
//! [`HeightField::rejected_rows`].

use crate::error::{ConvertError, Result};
use crate::stats::RunningStats;
use crate::tokenizer::NumberFormat;

#[derive(Debug, Clone)]
pub struct HeightField {
    num_points: usize,
    num_profiles: usize,
    /// Sample `(point, profile)` lives at `point + profile * num_points`
    values: Vec<f64>,
    loaded_profiles: usize,
    rejected_rows: usize,
    stats: RunningStats,
    number_format: NumberFormat,
}

impl HeightField {
    /// Allocate a `points x profiles` grid of NaN samples
    pub fn new(points: usize, profiles: usize) -> Result<Self> {
        Self::with_number_format(points, profiles, NumberFormat::INVARIANT)
    }

    pub fn with_number_format(
        points: usize,
        profiles: usize,
        number_format: NumberFormat,
    ) -> Result<Self> {
        let cells = points
            .checked_mul(profiles)
            .filter(|&cells| cells > 0)
            .ok_or(ConvertError::InvalidDimensions { points, profiles })?;

        Ok(Self {
            num_points: points,
            num_profiles: profiles,
            values: vec![f64::NAN; cells],
            loaded_profiles: 0,
            rejected_rows: 0,
            stats: RunningStats::new(),
            number_format,
        })
    }

    /// Append one profile; returns whether the row was accepted
    pub fn add_profile<S: AsRef<str>>(&mut self, tokens: &[S]) -> bool {
        if tokens.len() != self.num_points || self.is_full() {
            self.rejected_rows += 1;
            return false;
        }

        let offset = self.loaded_profiles * self.num_points;
        for (cell, token) in self.values[offset..offset + self.num_points]
            .iter_mut()
            .zip(tokens)
        {
            let height = self.number_format.parse_float(token.as_ref());
            *cell = height;
            self.stats.update(height);
        }
        self.loaded_profiles += 1;
        true
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn num_profiles(&self) -> usize {
        self.num_profiles
    }

    /// Profiles accepted so far
    pub fn loaded_profiles(&self) -> usize {
        self.loaded_profiles
    }

    pub fn is_full(&self) -> bool {
        self.loaded_profiles >= self.num_profiles
    }

    /// Rows offered to [`add_profile`](Self::add_profile) but not accepted
    pub fn rejected_rows(&self) -> usize {
        self.rejected_rows
    }

    /// Cells without a valid sample: unloaded profiles plus NaN samples
    pub fn num_missing(&self) -> usize {
        self.values.len() - self.stats.count()
    }

    pub fn min_height(&self) -> f64 {
        self.stats.min()
    }

    pub fn max_height(&self) -> f64 {
        self.stats.max()
    }

    pub fn average_height(&self) -> f64 {
        self.stats.mean()
    }

    pub fn central_height(&self) -> f64 {
        self.stats.central()
    }

    /// Sample at `(point, profile)`, both zero-based
    pub fn value(&self, point: usize, profile: usize) -> Option<f64> {
        if point >= self.num_points || profile >= self.num_profiles {
            return None;
        }
        self.values.get(point + profile * self.num_points).copied()
    }

    /// Replace every NaN cell by `fill`.
    ///
    /// The statistics keep describing the originally valid samples only, so
    /// [`num_missing`](Self::num_missing) is unchanged by this call.
    pub fn regularize(&mut self, fill: f64) {
        if self.num_missing() == 0 {
            return;
        }
        self.values
            .iter_mut()
            .filter(|value| value.is_nan())
            .for_each(|value| *value = fill);
    }

    /// All samples, profile after profile, multiplied by `factor`
    pub fn topography_data(&self, factor: f64) -> Vec<f64> {
        self.values.iter().map(|value| value * factor).collect()
    }

    /// One profile (1-based, clamped into range) multiplied by `factor`
    pub fn profile_data(&self, index: usize, factor: f64) -> Vec<f64> {
        let profile = index.clamp(1, self.num_profiles) - 1;
        let offset = profile * self.num_points;
        self.values[offset..offset + self.num_points]
            .iter()
            .map(|value| value * factor)
            .collect()
    }
}
