use crate::error::{Error, Result};
use crate::utils::string::{DEFAULT_OMISSION, DEFAULT_PAD_CHARS, DEFAULT_TRUNCATE_LENGTH};
use serde::{Deserialize, Serialize};
use std::env;

#[cfg(feature = "config")]
use std::fs;
#[cfg(feature = "config")]
use std::path::Path;

/// Default configuration file name looked up by [`UtilsConfig::load`]
pub const CONFIG_FILE: &str = "nullsafe.toml";

/// Library-wide defaults
///
/// None of the utility functions read this implicitly; it is turned into
/// option values such as [`crate::utils::string::TruncateOptions`] or a
/// [`crate::utils::random::Randomizer`] by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UtilsConfig {
    #[serde(default)]
    pub string: StringConfig,

    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringConfig {
    #[serde(default = "default_pad_chars")]
    pub pad_chars: String,

    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,

    #[serde(default = "default_omission")]
    pub omission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible sequences; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_pad_chars() -> String {
    DEFAULT_PAD_CHARS.to_string()
}

fn default_truncate_length() -> usize {
    DEFAULT_TRUNCATE_LENGTH
}

fn default_omission() -> String {
    DEFAULT_OMISSION.to_string()
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            pad_chars: default_pad_chars(),
            truncate_length: default_truncate_length(),
            omission: default_omission(),
        }
    }
}

impl UtilsConfig {
    /// Load configuration from `NULLSAFE_CONFIG` or `./nullsafe.toml`,
    /// falling back to defaults, then apply environment overrides
    #[cfg(feature = "config")]
    pub fn load() -> Result<Self> {
        let path = env::var("NULLSAFE_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            log::debug!("No configuration file at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "config")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::from(e).with_context(format!(
                "Failed to read config file '{}'",
                path_ref.display()
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            e.with_context(format!(
                "Failed to parse config file '{}'",
                path_ref.display()
            ))
        })?;

        log::debug!(
            "Successfully loaded configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }

    /// Parse configuration from TOML text
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create configuration with environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = UtilsConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(chars) = env::var("NULLSAFE_PAD_CHARS") {
            log::debug!("Pad characters overridden from environment");
            self.string.pad_chars = chars;
        }
        if let Ok(length) = env::var("NULLSAFE_TRUNCATE_LENGTH") {
            self.string.truncate_length = length
                .parse()
                .map_err(|_| Error::config("Invalid NULLSAFE_TRUNCATE_LENGTH value"))?;
        }
        if let Ok(omission) = env::var("NULLSAFE_OMISSION") {
            self.string.omission = omission;
        }
        if let Ok(seed) = env::var("NULLSAFE_RANDOM_SEED") {
            self.random.seed = Some(
                seed.parse()
                    .map_err(|_| Error::config("Invalid NULLSAFE_RANDOM_SEED value"))?,
            );
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.string.pad_chars.is_empty() {
            return Err(Error::config("string.pad_chars cannot be empty"));
        }
        if self.string.truncate_length == 0 {
            return Err(Error::config("string.truncate_length cannot be 0"));
        }
        if self.string.omission.chars().count() >= self.string.truncate_length {
            log::warn!(
                "string.omission ({:?}) is not shorter than truncate_length ({}); truncated strings will be the omission alone",
                self.string.omission,
                self.string.truncate_length
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UtilsConfig::default();
        assert_eq!(config.string.pad_chars, " ");
        assert_eq!(config.string.truncate_length, 30);
        assert_eq!(config.string.omission, "...");
        assert_eq!(config.random.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = UtilsConfig::default();
        config.string.pad_chars.clear();
        assert!(config.validate().is_err());

        let mut config = UtilsConfig::default();
        config.string.truncate_length = 0;
        assert_eq!(config.validate().unwrap_err().error_code(), "E_CONFIG");
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_str_partial() {
        let config = UtilsConfig::from_toml_str(
            r#"
[string]
truncate_length = 12

[random]
seed = 99
"#,
        )
        .unwrap();

        assert_eq!(config.string.truncate_length, 12);
        assert_eq!(config.string.pad_chars, " ");
        assert_eq!(config.string.omission, "...");
        assert_eq!(config.random.seed, Some(99));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_str_empty_is_default() {
        assert_eq!(UtilsConfig::from_toml_str("").unwrap(), UtilsConfig::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_toml_str_syntax_error() {
        let err = UtilsConfig::from_toml_str("[string\npad_chars = 1").unwrap_err();
        assert_eq!(err.error_code(), "E_TOML");
    }
}
