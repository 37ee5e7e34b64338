//! Explicit options for building a [`Biome`].

use serde::{Deserialize, Serialize};

use crate::biome::Biome;

/// Optional overrides for each biome field.
///
/// Any field left as `None` takes the biome default when built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeConfig {
    /// Overrides the name.
    pub name: Option<String>,
    /// Overrides the default temperature of 20.
    pub temperature: Option<f32>,
    /// Overrides the default humidity of 50.
    pub humidity: Option<f32>,
}

impl BiomeConfig {
    /// Create an empty config (builds the default biome).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name override.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the temperature override.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the humidity override.
    pub fn humidity(mut self, humidity: f32) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Check whether no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.temperature.is_none() && self.humidity.is_none()
    }

    /// Build the biome.
    #[must_use]
    pub fn build(self) -> Biome {
        Biome::from_parts(self.name, self.temperature, self.humidity)
    }
}

impl From<BiomeConfig> for Biome {
    fn from(config: BiomeConfig) -> Self {
        config.build()
    }
}

impl From<&Biome> for BiomeConfig {
    fn from(biome: &Biome) -> Self {
        Self {
            name: Some(biome.name().to_string()),
            temperature: Some(biome.temperature()),
            humidity: Some(biome.humidity()),
        }
    }
}
