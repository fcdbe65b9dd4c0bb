// Colors for the two themes.
use crate::state::app_state::Theme;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub field_background: &'static str,
    pub field_border: &'static str,
    pub error: &'static str,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e",
            foreground: "#d1d4dc",
            accent: "#26a69a",
            muted: "#8a8f98",
            field_background: "#2a2a2a",
            field_border: "#565656",
            error: "#ef5350",
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff",
            foreground: "#1b1b1b",
            accent: "#00796b",
            muted: "#6b6b6b",
            field_background: "#fafafa",
            field_border: "#c8c8c8",
            error: "#d32f2f",
        }
    }

    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }
}
