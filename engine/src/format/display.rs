// Canonical <-> display conversion for a fixed separator pair.
use shared::models::Separators;

/// Renders a canonical value (`"1500000.50"`) for display (`"1.500.000,50"`).
///
/// Leading zeros of the integer part are stripped, the integer part is grouped
/// in runs of three from the right, and a decimal marker present in the input
/// is kept even when nothing follows it (`"1500."` renders as `"1.500,"`).
/// The fractional digits are copied as-is.
pub fn format_display(raw: &str, separators: Separators) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw, None),
    };

    let trimmed = int_part.trim_start_matches('0');
    let int_digits = if trimmed.is_empty() { "0" } else { trimmed };

    let digit_count = int_digits.chars().count();
    let mut out = String::with_capacity(raw.len() + digit_count / 3 + 1);
    for (idx, ch) in int_digits.chars().enumerate() {
        if idx > 0 && (digit_count - idx) % 3 == 0 {
            out.push(separators.thousands);
        }
        out.push(ch);
    }

    if let Some(frac) = frac_part {
        out.push(separators.decimal);
        out.push_str(frac);
    }
    out
}

/// Strips display formatting back to canonical form. Thousands separators are
/// removed and the decimal separator becomes `.`; nothing is validated.
pub fn parse_display(display: &str, separators: Separators) -> String {
    let mut out = String::with_capacity(display.len());
    let mut decimal_replaced = false;
    for ch in display.chars() {
        if ch == separators.thousands {
            continue;
        }
        if ch == separators.decimal && !decimal_replaced {
            decimal_replaced = true;
            out.push('.');
        } else {
            out.push(ch);
        }
    }
    out
}
