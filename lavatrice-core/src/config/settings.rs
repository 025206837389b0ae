//! Wash settings and their persisted image

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::laundry::Percentage;

/// Heaviest batch the machine accepts, in kilograms
pub const MAX_WEIGHT_KG: f32 = 8.0;

/// Dirt degree above which autodetect picks the long program
pub const AVERAGE_DEGREE: Percentage = Percentage::saturating(40);

/// Magic number identifying a settings image ("LAVS")
pub const SETTINGS_MAGIC: u32 = 0x4C41_5653;

/// Current settings image version
pub const SETTINGS_VERSION: u8 = 1;

/// Buffer size that always fits an encoded settings image
pub const MAX_SETTINGS_SIZE: usize = 32;

/// Settings errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Weight limit is zero, negative, or not finite
    InvalidWeightLimit,
    /// Encoding failed (buffer too small)
    Serialize,
    /// Decoding failed
    Deserialize,
    /// Invalid magic or version
    InvalidFormat,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeightLimit => f.write_str("weight limit must be positive"),
            ConfigError::Serialize => f.write_str("failed to encode settings"),
            ConfigError::Deserialize => f.write_str("failed to decode settings"),
            ConfigError::InvalidFormat => f.write_str("settings image has wrong magic or version"),
        }
    }
}

/// Limits applied by the washing machine controller
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WashSettings {
    /// Batches heavier than this are refused (kg)
    pub max_weight_kg: f32,
    /// Autodetect threshold; strictly above selects `Long`
    pub average_degree: Percentage,
}

impl Default for WashSettings {
    fn default() -> Self {
        Self {
            max_weight_kg: MAX_WEIGHT_KG,
            average_degree: AVERAGE_DEGREE,
        }
    }
}

impl WashSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_weight_kg.is_finite() || self.max_weight_kg <= 0.0 {
            return Err(ConfigError::InvalidWeightLimit);
        }
        Ok(())
    }
}

/// Versioned envelope written by [`WashSettings::to_slice`]
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SettingsImage {
    magic: u32,
    version: u8,
    settings: WashSettings,
}

#[cfg(feature = "serde")]
impl WashSettings {
    /// Encode into `buf` as a postcard image
    ///
    /// Returns the used part of `buf`. [`MAX_SETTINGS_SIZE`] bytes are
    /// always enough.
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        self.validate()?;

        let image = SettingsImage {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            settings: *self,
        };
        postcard::to_slice(&image, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode a postcard image written by [`WashSettings::to_slice`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let image: SettingsImage =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if image.magic != SETTINGS_MAGIC || image.version != SETTINGS_VERSION {
            return Err(ConfigError::InvalidFormat);
        }

        image.settings.validate()?;
        Ok(image.settings)
    }

    /// Decode an image, falling back to defaults if it is unusable
    pub fn load_or_default(bytes: &[u8]) -> Self {
        match Self::from_bytes(bytes) {
            Ok(settings) => {
                debug!("Loaded wash settings from {} bytes", bytes.len());
                settings
            }
            Err(e) => {
                warn!("Unusable settings image: {:?}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WashSettings::default();
        assert_eq!(settings.max_weight_kg, MAX_WEIGHT_KG);
        assert_eq!(settings.average_degree, AVERAGE_DEGREE);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_weight_limit() {
        for limit in [0.0, -3.0, f32::NAN] {
            let settings = WashSettings {
                max_weight_kg: limit,
                ..Default::default()
            };
            assert_eq!(settings.validate(), Err(ConfigError::InvalidWeightLimit));
        }
    }

    #[cfg(feature = "serde")]
    mod image {
        use super::super::*;

        #[test]
        fn test_encode_decode() {
            let settings = WashSettings {
                max_weight_kg: 6.5,
                average_degree: Percentage::saturating(55),
            };
            let mut buf = [0u8; MAX_SETTINGS_SIZE];
            let bytes = settings.to_slice(&mut buf).unwrap();

            assert_eq!(WashSettings::from_bytes(bytes), Ok(settings));
        }

        #[test]
        fn test_rejects_wrong_magic() {
            let image = SettingsImage {
                magic: 0xDEAD_BEEF,
                version: SETTINGS_VERSION,
                settings: WashSettings::default(),
            };
            let mut buf = [0u8; MAX_SETTINGS_SIZE];
            let bytes = postcard::to_slice(&image, &mut buf).unwrap();

            assert_eq!(
                WashSettings::from_bytes(bytes),
                Err(ConfigError::InvalidFormat)
            );
        }

        #[test]
        fn test_rejects_newer_version() {
            let image = SettingsImage {
                magic: SETTINGS_MAGIC,
                version: SETTINGS_VERSION + 1,
                settings: WashSettings::default(),
            };
            let mut buf = [0u8; MAX_SETTINGS_SIZE];
            let bytes = postcard::to_slice(&image, &mut buf).unwrap();

            assert_eq!(
                WashSettings::from_bytes(bytes),
                Err(ConfigError::InvalidFormat)
            );
        }

        #[test]
        fn test_rejects_out_of_range_threshold() {
            let mut buf = [0u8; MAX_SETTINGS_SIZE];
            let bytes = WashSettings::default().to_slice(&mut buf).unwrap();

            // Threshold is the last byte of the image
            let last = bytes.len() - 1;
            bytes[last] = 200;

            assert_eq!(
                WashSettings::from_bytes(bytes),
                Err(ConfigError::Deserialize)
            );
        }

        #[test]
        fn test_refuses_to_encode_invalid_settings() {
            let settings = WashSettings {
                max_weight_kg: -1.0,
                ..Default::default()
            };
            let mut buf = [0u8; MAX_SETTINGS_SIZE];
            assert_eq!(
                settings.to_slice(&mut buf).map(|b| b.len()),
                Err(ConfigError::InvalidWeightLimit)
            );
        }

        #[test]
        fn test_small_buffer() {
            let mut buf = [0u8; 2];
            assert_eq!(
                WashSettings::default().to_slice(&mut buf).map(|b| b.len()),
                Err(ConfigError::Serialize)
            );
        }

        #[test]
        fn test_load_or_default_falls_back() {
            assert_eq!(WashSettings::load_or_default(&[]), WashSettings::default());
            assert_eq!(
                WashSettings::load_or_default(&[0xFF, 0x00, 0x13]),
                WashSettings::default()
            );
        }
    }
}
