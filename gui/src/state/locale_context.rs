// Explicit locale context handed to every number field through dioxus context.
//
// Fields read `current` reactively; nothing here is global, so a test or a
// nested form can provide its own context with any locale and resolver.
use dioxus::prelude::*;
use engine::data::LocaleTable;
use engine::format::SeparatorResolver;
use shared::models::{LocaleOption, Separators};
use std::rc::Rc;
use std::sync::Arc;

use super::locale_prefs::{initial_locale, LocalePreferences, PreferenceStore};
use crate::config::AppConfig;

/// Locale used by a field rendered outside any `LocaleContext`.
pub const DEFAULT_LOCALE: &str = "es-CO";

#[derive(Clone)]
pub struct LocaleContext {
    pub current: Signal<String>,
    pub options: Rc<Vec<LocaleOption>>,
    pub resolver: Arc<SeparatorResolver>,
    store: Option<Rc<PreferenceStore>>,
}

impl LocaleContext {
    /// Builds the app-wide context from configuration and the saved preference.
    pub fn from_config(config: &AppConfig) -> Self {
        let table = LocaleTable::embedded().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Embedded locale table failed to load");
            LocaleTable::default()
        });
        let resolver = Arc::new(SeparatorResolver::new(table, config.locales.fallback_separators));
        let options = supported_options(resolver.locales(), &config.locales.supported);
        let store = PreferenceStore::in_config_dir(&config.app.preferences_file);
        let locale = initial_locale(&store, &options, &config.locales.default_locale);
        tracing::info!(locale = %locale, preferences = %store.path().display(), "Locale context ready");

        Self {
            current: Signal::new(locale),
            options: Rc::new(options),
            resolver,
            store: Some(Rc::new(store)),
        }
    }

    pub fn separators(&self, locale: &str) -> Separators {
        self.resolver.resolve(locale)
    }

    pub fn current_option(&self) -> Option<LocaleOption> {
        let current = self.current.read();
        self.options.iter().find(|option| option.id == *current).cloned()
    }

    /// Switches the active locale and persists the choice.
    pub fn select(&mut self, locale: &str) {
        if *self.current.peek() == locale {
            return;
        }
        self.current.set(locale.to_string());
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&LocalePreferences::selected(locale)) {
                tracing::warn!(error = %e, locale = %locale, "Could not persist locale preference");
            }
        }
    }
}

/// Table entries restricted to `supported`, in the order `supported` lists
/// them. An empty list keeps the whole table.
pub fn supported_options(table: &[LocaleOption], supported: &[String]) -> Vec<LocaleOption> {
    if supported.is_empty() {
        return table.to_vec();
    }
    supported
        .iter()
        .filter_map(|id| {
            let found = table.iter().find(|option| option.id == *id).cloned();
            if found.is_none() {
                tracing::warn!(locale = %id, "Supported locale missing from the locale table");
            }
            found
        })
        .collect()
}
