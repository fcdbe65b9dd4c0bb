// Separator resolution with a per-locale memo table.
use super::display::{format_display, parse_display};
use super::edit::{apply_edit, EditOutcome};
use super::paste::extract_paste;
use crate::config::EngineSettings;
use crate::data::LocaleTable;
use crate::error::EngineError;
use once_cell::sync::Lazy;
use shared::models::{LocaleOption, Separators};
use std::collections::HashMap;
use std::sync::RwLock;

static DEFAULT_RESOLVER: Lazy<SeparatorResolver> = Lazy::new(SeparatorResolver::default);

/// Separators for `locale` from the process-wide resolver (embedded table,
/// `.`/`,` fallback).
pub fn get_separators(locale: &str) -> Separators {
    DEFAULT_RESOLVER.resolve(locale)
}

/// Maps locale identifiers to separator pairs.
///
/// Lookups try the exact table entry, then the bare language subtag, then the
/// configured fallback. Results are cached under the exact string passed in,
/// so `"es-CO"` and `"es_CO"` occupy two entries. The key space is the set of
/// locales the application offers, so the cache is never evicted.
#[derive(Debug)]
pub struct SeparatorResolver {
    table: LocaleTable,
    fallback: Separators,
    cache: RwLock<HashMap<String, Separators>>,
}

impl SeparatorResolver {
    pub fn new(table: LocaleTable, fallback: Separators) -> Self {
        Self {
            table,
            fallback,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Result<Self, EngineError> {
        let table = match &settings.locale_table_path {
            Some(path) => {
                tracing::info!(path = %path, "Loading locale table from file");
                LocaleTable::load_from_path(path)?
            }
            None => LocaleTable::embedded()?,
        };
        Ok(Self::new(table, settings.fallback_separators))
    }

    pub fn resolve(&self, locale: &str) -> Separators {
        {
            let cache = self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(separators) = cache.get(locale) {
                return *separators;
            }
        }

        let separators = self.lookup(locale);
        self.cache
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(locale.to_string(), separators);
        separators
    }

    fn lookup(&self, locale: &str) -> Separators {
        if let Some(entry) = self.table.get(locale) {
            return entry.separators;
        }
        let language = locale.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
        if let Some(entry) = self.table.get(language) {
            tracing::debug!(locale = %locale, language = %language, "Resolved separators by language subtag");
            return entry.separators;
        }
        tracing::warn!(
            locale = %locale,
            thousands = %self.fallback.thousands,
            decimal = %self.fallback.decimal,
            "No locale data, using fallback separators"
        );
        self.fallback
    }

    pub fn fallback(&self) -> Separators {
        self.fallback
    }

    pub fn locales(&self) -> &[LocaleOption] {
        self.table.entries()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn format(&self, raw: &str, locale: &str) -> String {
        format_display(raw, self.resolve(locale))
    }

    pub fn parse(&self, display: &str, locale: &str) -> String {
        parse_display(display, self.resolve(locale))
    }

    pub fn edit(&self, raw: &str, cursor: usize, locale: &str) -> EditOutcome {
        apply_edit(raw, cursor, self.resolve(locale))
    }

    pub fn paste(&self, text: &str, locale: &str) -> Option<String> {
        extract_paste(text, self.resolve(locale))
    }
}

impl Default for SeparatorResolver {
    fn default() -> Self {
        let table = LocaleTable::embedded().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Embedded locale table failed to load, every locale will use the fallback");
            LocaleTable::default()
        });
        Self::new(table, Separators::DOT_COMMA)
    }
}
