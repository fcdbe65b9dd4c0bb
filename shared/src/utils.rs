// Helpers for canonical numeric strings: ASCII digits, at most one '.', no
// thousands separators and no leading zeros except a lone "0".

/// Returns true when `s` is empty or matches `^(0|[1-9]\d*)(\.\d*)?$`.
pub fn is_canonical(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    let (int_part, frac_part) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (s, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if int_part.len() > 1 && int_part.starts_with('0') {
        return false;
    }
    frac_part.map_or(true, |f| f.bytes().all(|b| b.is_ascii_digit()))
}

/// Plain numeric parse of a canonical value. Empty and incomplete values such
/// as `"."` yield `None`; a trailing marker (`"1500."`) is accepted.
pub fn parse_canonical(s: &str) -> Option<f64> {
    if s.is_empty() || s == "." {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders a non-negative number as a canonical string with at most `decimals`
/// fractional digits. Trailing fractional zeros are dropped.
pub fn to_canonical(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_string();
    }
    let mut text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical_accepts_valid_forms() {
        for value in ["", "0", "7", "1500", "1500.", "0.05", "1500000.50"] {
            assert!(is_canonical(value), "expected canonical: {:?}", value);
        }
    }

    #[test]
    fn test_is_canonical_rejects_formatting_and_leading_zeros() {
        for value in ["01500", "1.500.000", "1,5", ".5", "00", "1 500", "-3"] {
            assert!(!is_canonical(value), "expected non-canonical: {:?}", value);
        }
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(parse_canonical("1500000.50"), Some(1500000.5));
        assert_eq!(parse_canonical("1500."), Some(1500.0));
        assert_eq!(parse_canonical(""), None);
        assert_eq!(parse_canonical("."), None);
    }

    #[test]
    fn test_to_canonical_trims_fraction() {
        assert_eq!(to_canonical(1762.3416, 2), "1762.34");
        assert_eq!(to_canonical(1500.0, 2), "1500");
        assert_eq!(to_canonical(0.5, 2), "0.5");
        assert_eq!(to_canonical(f64::NAN, 2), "0");
    }
}
