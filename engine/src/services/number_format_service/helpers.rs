// Conversions between domain types and generated gRPC messages.
use crate::services::LocaleInfo;
use shared::models::LocaleOption;

/// An empty request locale selects the configured default.
pub fn effective_locale<'a>(requested: &'a str, default_locale: &'a str) -> &'a str {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        default_locale
    } else {
        trimmed
    }
}

pub fn to_locale_info(option: &LocaleOption) -> LocaleInfo {
    LocaleInfo {
        id: option.id.clone(),
        label: option.label.clone(),
        currency: option.currency.clone(),
        thousands: option.separators.thousands.to_string(),
        decimal: option.separators.decimal.to_string(),
    }
}

pub fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
