//! Error types for biome validation.

use thiserror::Error;

/// Errors reported when checking a biome's readings.
///
/// Construction never produces these; they come only from
/// [`BiomeValidation`](crate::BiomeValidation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BiomeError {
    /// A numeric field is NaN or infinite.
    #[error("{field} is not a finite number: {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// Value found
        value: f32,
    },

    /// Humidity outside 0 to 100 percent.
    #[error("Humidity {0}% is outside 0-100")]
    HumidityOutOfRange(f32),

    /// Name is empty or whitespace.
    #[error("Biome name is empty")]
    EmptyName,
}

/// Result type alias for biome validation.
pub type BiomeResult<T> = Result<T, BiomeError>;
