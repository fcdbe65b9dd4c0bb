// Application state: UI flags, the locale context and the persisted locale preference.
pub mod app_state;
pub mod locale_context;
pub mod locale_prefs;
