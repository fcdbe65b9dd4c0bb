// Persisted display-locale preference.
//
// The preference lives in a small JSON file under the user config directory.
// When no file exists yet, the locale is detected from the process
// environment, then falls back to the configured default.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::LocaleOption;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "locale-field";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalePreferences {
    pub current: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl LocalePreferences {
    pub fn selected(locale: impl Into<String>) -> Self {
        Self {
            current: locale.into(),
            updated_at: Some(Utc::now()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_config_dir(file_name: &str) -> Self {
        let base = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        Self::new(base.join(APP_DIR_NAME).join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<LocalePreferences>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences from {}", self.path.display()))?;
        let prefs = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse preferences in {}", self.path.display()))?;
        Ok(Some(prefs))
    }

    pub fn save(&self, prefs: &LocalePreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), locale = %prefs.current, "Saved locale preference");
        Ok(())
    }
}

/// Maps a POSIX locale value (`es_CO.UTF-8`, `de_CH@euro`) to a tag (`es-CO`).
pub fn posix_to_tag(value: &str) -> Option<String> {
    let base = value.split(|c: char| c == '.' || c == '@').next().unwrap_or_default().trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// First of `LC_ALL`, `LC_NUMERIC`, `LANG` that names a supported locale.
pub fn detect_locale<F>(lookup_env: F, supported: &[LocaleOption]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|var| lookup_env(var))
        .filter_map(|value| posix_to_tag(&value))
        .find(|tag| supported.iter().any(|option| option.id == *tag))
}

/// Saved preference, else environment detection, else `default_locale`.
pub fn initial_locale(store: &PreferenceStore, supported: &[LocaleOption], default_locale: &str) -> String {
    match store.load() {
        Ok(Some(prefs)) if supported.iter().any(|option| option.id == prefs.current) => {
            tracing::info!(locale = %prefs.current, "Using saved locale preference");
            return prefs.current;
        }
        Ok(Some(prefs)) => {
            tracing::warn!(locale = %prefs.current, "Saved locale is no longer supported, ignoring it");
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Could not load locale preference");
        }
    }

    match detect_locale(|var| std::env::var(var).ok(), supported) {
        Some(locale) => {
            tracing::info!(locale = %locale, "Detected locale from environment");
            locale
        }
        None => default_locale.to_string(),
    }
}
