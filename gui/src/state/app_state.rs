// UI state shared through a Signal<AppState> context.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub current_theme: Theme,
    pub locale_picker_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_theme: Theme::Light,
            locale_picker_visible: false,
        }
    }
}

impl AppState {
    pub fn with_theme(theme: Theme) -> Self {
        Self { current_theme: theme, ..Self::default() }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.current_theme = theme;
    }

    pub fn toggle_locale_picker(&mut self) {
        self.locale_picker_visible = !self.locale_picker_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("DARK"), Theme::Dark);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("solarized"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_toggle_locale_picker() {
        let mut state = AppState::with_theme(Theme::Dark);
        assert!(!state.locale_picker_visible);
        state.toggle_locale_picker();
        assert!(state.locale_picker_visible);
        state.set_theme(Theme::Light);
        assert_eq!(state.current_theme, Theme::Light);
    }
}
