use serde::{Deserialize, Serialize};

/// Thousands and decimal separator characters for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Separators {
    pub thousands: char,
    pub decimal: char,
}

impl Separators {
    /// `1.234,56` style (es-CO, pt-BR, de-DE).
    pub const DOT_COMMA: Separators = Separators::new('.', ',');
    /// `1,234.56` style (en-US, es-MX).
    pub const COMMA_DOT: Separators = Separators::new(',', '.');

    pub const fn new(thousands: char, decimal: char) -> Self {
        Self { thousands, decimal }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Separators::DOT_COMMA
    }
}

/// A selectable display locale, as listed by the locale table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOption {
    pub id: String,
    pub label: String,
    pub currency: String,
    pub separators: Separators,
}
