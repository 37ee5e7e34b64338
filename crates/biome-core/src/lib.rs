//! # Biome Core
//!
//! The biome value type and its construction options.
//!
//! This crate provides:
//! - [`Biome`], a named environment with temperature and humidity
//! - Per-field defaults for anything left out at construction
//! - [`BiomeConfig`], an explicit set of optional overrides
//! - Opt-in validation of the readings against their nominal ranges

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod biome;
pub mod config;
pub mod error;
pub mod validation;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::biome::*;
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::validation::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_biome_is_plain_data() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Biome>();
        assert_send_sync::<BiomeConfig>();
    }

    proptest! {
        #[test]
        fn prop_fields_read_back_verbatim(
            name in ".*",
            temperature in proptest::num::f32::ANY,
            humidity in proptest::num::f32::ANY,
        ) {
            let biome = Biome::new(name.clone(), temperature, humidity);
            prop_assert_eq!(biome.name(), name.as_str());
            prop_assert_eq!(biome.temperature().to_bits(), temperature.to_bits());
            prop_assert_eq!(biome.humidity().to_bits(), humidity.to_bits());
        }

        #[test]
        fn prop_omitted_fields_take_defaults(
            name in proptest::option::of("[a-zA-Z ]{1,24}"),
            temperature in proptest::option::of(-90.0f32..60.0),
            humidity in proptest::option::of(0.0f32..=100.0),
        ) {
            let biome = BiomeConfig {
                name: name.clone(),
                temperature,
                humidity,
            }
            .build();
            prop_assert_eq!(biome.name(), name.as_deref().unwrap_or(DEFAULT_BIOME_NAME));
            prop_assert_eq!(biome.temperature(), temperature.unwrap_or(DEFAULT_TEMPERATURE));
            prop_assert_eq!(biome.humidity(), humidity.unwrap_or(DEFAULT_HUMIDITY));
            prop_assert!(biome.validate().is_valid());
        }
    }
}
