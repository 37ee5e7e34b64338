//! Opt-in range checks for biome readings.
//!
//! Nothing here runs during construction. Callers that want to reject
//! readings outside the nominal ranges call [`Biome::validate`] and decide
//! what to do with the result.

use tracing::warn;

use crate::biome::Biome;
use crate::error::{BiomeError, BiomeResult};

/// Nominal humidity range in percent.
pub const HUMIDITY_RANGE: std::ops::RangeInclusive<f32> = 0.0..=100.0;

/// Validation result for a biome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BiomeValidation {
    /// Problems that make the readings unusable.
    pub errors: Vec<BiomeError>,
    /// Readings outside their nominal ranges.
    pub warnings: Vec<BiomeError>,
}

impl BiomeValidation {
    /// Create empty validation result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error.
    pub fn add_error(&mut self, error: BiomeError) {
        self.errors.push(error);
    }

    /// Add a warning.
    pub fn add_warning(&mut self, warning: BiomeError) {
        warn!(%warning, "biome reading outside nominal range");
        self.warnings.push(warning);
    }

    /// Check if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Merge another validation result.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Fail with the first error, ignoring warnings.
    pub fn into_result(self) -> BiomeResult<()> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Fail with the first error, or the first warning if there are no errors.
    pub fn into_strict_result(self) -> BiomeResult<()> {
        match self.errors.into_iter().chain(self.warnings).next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Biome {
    /// Check the readings against their nominal ranges.
    ///
    /// Non-finite numbers are errors. Humidity outside 0 to 100 and an empty
    /// name are warnings.
    #[must_use]
    pub fn validate(&self) -> BiomeValidation {
        let mut validation = BiomeValidation::new();

        for (field, value) in [
            ("temperature", self.temperature()),
            ("humidity", self.humidity()),
        ] {
            if !value.is_finite() {
                validation.add_error(BiomeError::NonFinite { field, value });
            }
        }

        if self.humidity().is_finite() && !HUMIDITY_RANGE.contains(&self.humidity()) {
            validation.add_warning(BiomeError::HumidityOutOfRange(self.humidity()));
        }

        if self.name().trim().is_empty() {
            validation.add_warning(BiomeError::EmptyName);
        }

        validation
    }
}
