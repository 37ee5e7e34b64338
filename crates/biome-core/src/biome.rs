//! The biome value type.
//!
//! A [`Biome`] is a named environment with a temperature and humidity
//! reading. Every field has a default, and any trailing subset of the
//! fields may be left out at construction:
//!
//! | Field         | Default           |
//! |---------------|-------------------|
//! | `name`        | `"Default Biome"` |
//! | `temperature` | `20.0`            |
//! | `humidity`    | `50.0`            |
//!
//! Construction never validates its inputs. See [`Biome::validate`] for the
//! opt-in range check.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Name used when none is supplied.
pub const DEFAULT_BIOME_NAME: &str = "Default Biome";

/// Temperature used when none is supplied (degrees).
pub const DEFAULT_TEMPERATURE: f32 = 20.0;

/// Humidity used when none is supplied (percent).
pub const DEFAULT_HUMIDITY: f32 = 50.0;

/// A named environment with a temperature and humidity reading.
///
/// Fields are read-only once constructed. The `with_*` combinators consume
/// the value and return a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Biome {
    name: String,
    temperature: f32,
    humidity: f32,
}

impl Biome {
    /// Create a biome from all three values.
    #[must_use]
    pub fn new(name: impl Into<String>, temperature: f32, humidity: f32) -> Self {
        let biome = Self {
            name: name.into(),
            temperature,
            humidity,
        };
        trace!(
            name = %biome.name,
            temperature = biome.temperature,
            humidity = biome.humidity,
            "biome constructed"
        );
        biome
    }

    /// Create a biome with the given name and default readings.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_TEMPERATURE, DEFAULT_HUMIDITY)
    }

    /// Create a biome with the given name and temperature, default humidity.
    #[must_use]
    pub fn with_name_and_temperature(name: impl Into<String>, temperature: f32) -> Self {
        Self::new(name, temperature, DEFAULT_HUMIDITY)
    }

    /// Create a biome where each `None` falls back to its default.
    #[must_use]
    pub fn from_parts(
        name: Option<String>,
        temperature: Option<f32>,
        humidity: Option<f32>,
    ) -> Self {
        Self::new(
            name.unwrap_or_else(|| DEFAULT_BIOME_NAME.to_string()),
            temperature.unwrap_or(DEFAULT_TEMPERATURE),
            humidity.unwrap_or(DEFAULT_HUMIDITY),
        )
    }

    /// Replace the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Replace the humidity.
    pub fn with_humidity(mut self, humidity: f32) -> Self {
        self.humidity = humidity;
        self
    }

    /// Name of the biome.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Temperature in degrees.
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Humidity in percent, nominally 0 to 100.
    #[must_use]
    pub const fn humidity(&self) -> f32 {
        self.humidity
    }

    /// Move the fields out as `(name, temperature, humidity)`.
    #[must_use]
    pub fn into_parts(self) -> (String, f32, f32) {
        (self.name, self.temperature, self.humidity)
    }
}

impl Default for Biome {
    fn default() -> Self {
        Self::new(DEFAULT_BIOME_NAME, DEFAULT_TEMPERATURE, DEFAULT_HUMIDITY)
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}°, {}% humidity)",
            self.name, self.temperature, self.humidity
        )
    }
}
