// GUI configuration module
pub mod theme;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use shared::models::Separators;
use shared::utils::is_canonical;

/// Mirrors assets/config/default.json.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub locales: LocaleSettings,
    pub calculator: CalculatorDefaults,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub window_title: String,
    /// File name inside the user config directory.
    pub preferences_file: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LocaleSettings {
    pub default_locale: String,
    /// Locales offered in the picker, in display order. Empty offers the whole table.
    #[serde(default)]
    pub supported: Vec<String>,
    #[serde(default)]
    pub fallback_separators: Separators,
}

/// Initial canonical values for the demo calculator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalculatorDefaults {
    pub principal: String,
    pub annual_rate: String,
    pub years: String,
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(config_str: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.locales.supported.is_empty() && !self.locales.supported.contains(&self.locales.default_locale) {
            return Err(anyhow!(
                "default locale '{}' is not in the supported list",
                self.locales.default_locale
            ));
        }
        let Separators { thousands, decimal } = self.locales.fallback_separators;
        if thousands == decimal {
            return Err(anyhow!("fallback separators must differ"));
        }
        for (name, value) in [
            ("principal", &self.calculator.principal),
            ("annual_rate", &self.calculator.annual_rate),
            ("years", &self.calculator.years),
        ] {
            if !is_canonical(value) {
                return Err(anyhow!("calculator default '{}' is not a canonical number: {:?}", name, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.locales.default_locale, "es-CO");
        assert_eq!(config.locales.fallback_separators, Separators::DOT_COMMA);
        assert!(config.locales.supported.contains(&"en-US".to_string()));
    }

    #[test]
    fn test_formatted_calculator_default_rejected() {
        let config_str = include_str!("../../assets/config/default.json").replace("\"1000000\"", "\"1.000.000\"");
        let err = AppConfig::from_json_str(&config_str).unwrap_err();
        assert!(err.to_string().contains("principal"));
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let config_str = include_str!("../../assets/config/default.json")
            .replace("\"default_locale\": \"es-CO\"", "\"default_locale\": \"ja-JP\"");
        assert!(AppConfig::from_json_str(&config_str).is_err());
    }
}
