// Engine settings, loaded from a JSON file or left at their defaults.
use crate::error::EngineError;
use serde::Deserialize;
use shared::models::Separators;
use std::path::Path;

/// Environment variable naming a JSON settings file.
pub const CONFIG_ENV_VAR: &str = "LOCALE_FIELD_ENGINE_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// Locale used when a request leaves `locale` empty.
    pub default_locale: String,
    /// Separator pair used when no table entry matches a locale.
    pub fallback_separators: Separators,
    /// Replaces the embedded locale table when set.
    pub locale_table_path: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50061,
            default_locale: "es-CO".to_string(),
            fallback_separators: Separators::DOT_COMMA,
            locale_table_path: None,
        }
    }
}

impl EngineSettings {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&text)
            .map_err(|e| EngineError::ConfigError(format!("Failed to parse '{}': {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads the file named by `LOCALE_FIELD_ENGINE_CONFIG`, or returns defaults.
    pub fn load() -> Result<Self, EngineError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(path = %path, "Loading engine settings from file");
                Self::from_json_file(path.trim())
            }
            _ => {
                tracing::info!("No {} set, using default engine settings", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let Separators { thousands, decimal } = self.fallback_separators;
        if thousands == decimal {
            return Err(EngineError::ConfigError(format!(
                "fallback separators must differ, both are '{}'",
                thousands
            )));
        }
        if thousands.is_ascii_digit() || decimal.is_ascii_digit() {
            return Err(EngineError::ConfigError("fallback separators cannot be digits".to_string()));
        }
        if self.default_locale.trim().is_empty() {
            return Err(EngineError::ConfigError("default_locale cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings(r#"{ "port": 6000, "fallback_separators": { "thousands": ",", "decimal": "." } }"#);
        let settings = EngineSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.port, 6000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.default_locale, "es-CO");
        assert_eq!(settings.fallback_separators, Separators::COMMA_DOT);
    }

    #[test]
    fn test_identical_fallback_separators_rejected() {
        let file = write_settings(r#"{ "fallback_separators": { "thousands": ".", "decimal": "." } }"#);
        let err = EngineSettings::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let file = write_settings("{ not json");
        let err = EngineSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineSettings::from_json_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }
}
