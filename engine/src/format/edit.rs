// Keystroke-level edit handling.
//
// The cursor is tracked as a count of digits (plus a decimal-seen flag) rather
// than a character index: inserting or removing a grouping separator shifts
// every index to its right, but never changes how many digits precede a given
// digit.
use super::display::format_display;
use shared::models::Separators;

/// Edit-stable cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorAnchor {
    /// Digits that precede the cursor.
    pub digits_before: usize,
    /// Whether the decimal marker precedes the cursor.
    pub after_decimal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub canonical: String,
    pub anchor: CursorAnchor,
}

impl EditOutcome {
    pub fn display(&self, separators: Separators) -> String {
        format_display(&self.canonical, separators)
    }

    /// Character offset for the cursor once the new display is rendered.
    pub fn cursor(&self, separators: Separators) -> usize {
        locate_cursor(&self.display(separators), self.anchor, separators)
    }
}

/// Keeps digits and the first `decimal` character (mapped to `.`); drops
/// everything else. When `cursor` is given, the anchor counts what was kept
/// before that character offset.
pub(crate) fn scan_numeric(text: &str, decimal: char, cursor: Option<usize>) -> (String, CursorAnchor) {
    let mut cleaned = String::with_capacity(text.len());
    let mut anchor = CursorAnchor::default();
    let mut seen_decimal = false;

    for (idx, ch) in text.chars().enumerate() {
        let before_cursor = cursor.map_or(false, |c| idx < c);
        if ch.is_ascii_digit() {
            cleaned.push(ch);
            if before_cursor {
                anchor.digits_before += 1;
            }
        } else if ch == decimal && !seen_decimal {
            seen_decimal = true;
            cleaned.push('.');
            if before_cursor {
                anchor.after_decimal = true;
            }
        }
    }
    (cleaned, anchor)
}

/// Normalizes the integer part of a cleaned value to canonical form and moves
/// the anchor by the digits removed or inserted in front of it.
pub(crate) fn canonicalize(cleaned: &str, mut anchor: CursorAnchor) -> (String, CursorAnchor) {
    let (int_part, frac_part) = match cleaned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (cleaned, None),
    };

    let stripped = int_part.trim_start_matches('0');
    let leading_zeros = int_part.len() - stripped.len();
    let (int_digits, removed, inserted) = if !stripped.is_empty() {
        (stripped, leading_zeros, false)
    } else if leading_zeros > 0 {
        ("0", leading_zeros - 1, false)
    } else if frac_part.is_some() {
        ("0", 0, true)
    } else {
        return (String::new(), CursorAnchor::default());
    };

    anchor.digits_before = anchor.digits_before.saturating_sub(removed);
    // The inserted '0' always sits in front of the cursor: a cursor before the
    // marker lands between the '0' and the marker.
    if inserted {
        anchor.digits_before += 1;
    }

    let mut canonical = String::with_capacity(cleaned.len() + 1);
    canonical.push_str(int_digits);
    if let Some(frac) = frac_part {
        canonical.push('.');
        canonical.push_str(frac);
    }
    (canonical, anchor)
}

/// Turns the raw text of the input (which already carries display formatting
/// plus whatever the user just typed) into a canonical value and a cursor
/// anchor. `cursor` is a character offset into `raw`.
pub fn apply_edit(raw: &str, cursor: usize, separators: Separators) -> EditOutcome {
    let (cleaned, anchor) = scan_numeric(raw, separators.decimal, Some(cursor));
    let (canonical, anchor) = canonicalize(&cleaned, anchor);
    EditOutcome { canonical, anchor }
}

/// Finds the character offset in `display` that matches `anchor`: the first
/// position with the same number of digits and the same decimal state behind
/// it. A separator right after that position stays after the cursor.
pub fn locate_cursor(display: &str, anchor: CursorAnchor, separators: Separators) -> usize {
    let mut digits = 0;
    let mut seen_decimal = false;
    for (idx, ch) in display.chars().enumerate() {
        if digits == anchor.digits_before && seen_decimal == anchor.after_decimal {
            return idx;
        }
        if ch.is_ascii_digit() {
            digits += 1;
        } else if ch == separators.decimal {
            seen_decimal = true;
        }
    }
    display.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CO: Separators = Separators::DOT_COMMA;
    const US: Separators = Separators::COMMA_DOT;

    fn type_at(display: &str, at: usize, typed: &str, separators: Separators) -> (String, usize) {
        let mut raw: String = display.chars().take(at).collect();
        raw.push_str(typed);
        raw.extend(display.chars().skip(at));
        let cursor = at + typed.chars().count();
        let outcome = apply_edit(&raw, cursor, separators);
        (outcome.display(separators), outcome.cursor(separators))
    }

    #[test]
    fn test_new_separator_keeps_cursor_after_typed_digit_at_end() {
        let (display, cursor) = type_at("150", 3, "0", CO);
        assert_eq!(display, "1.500");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn test_new_separator_keeps_cursor_after_typed_digit_at_start() {
        let (display, cursor) = type_at("150", 0, "9", CO);
        assert_eq!(display, "9.150");
        // Right after '9', before the new '.'.
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_typing_in_middle_of_grouped_number() {
        let (display, cursor) = type_at("1.500", 1, "2", CO);
        assert_eq!(display, "12.500");
        assert_eq!(cursor, 2);

        let (display, cursor) = type_at("999,999", 3, "1", US);
        assert_eq!(display, "9,991,999");
        assert_eq!(cursor, 5);
    }

    #[test]
    fn test_deleting_digit_removes_separator() {
        // "1.500" with the '1' deleted via backspace; cursor lands at 0.
        let outcome = apply_edit(".500", 0, CO);
        assert_eq!(outcome.canonical, "500");
        assert_eq!(outcome.display(CO), "500");
        assert_eq!(outcome.cursor(CO), 0);

        // "1,234,567" with the '4' deleted.
        let outcome = apply_edit("1,23,567", 4, US);
        assert_eq!(outcome.canonical, "123567");
        assert_eq!(outcome.display(US), "123,567");
        assert_eq!(outcome.cursor(US), 3);
    }

    #[test]
    fn test_decimal_separator_typed() {
        let (display, cursor) = type_at("1.500", 5, ",", CO);
        assert_eq!(display, "1.500,");
        assert_eq!(cursor, 6);

        let (display, cursor) = type_at("1.500,", 6, "5", CO);
        assert_eq!(display, "1.500,5");
        assert_eq!(cursor, 7);
    }

    #[test]
    fn test_second_decimal_separator_dropped() {
        let outcome = apply_edit("1,5,2", 5, CO);
        assert_eq!(outcome.canonical, "1.52");
        assert!(outcome.anchor.after_decimal);
    }

    #[test]
    fn test_thousands_and_noise_dropped() {
        let outcome = apply_edit("1.2a3b", 6, CO);
        assert_eq!(outcome.canonical, "123");
        assert_eq!(outcome.anchor, CursorAnchor { digits_before: 3, after_decimal: false });
    }

    #[test]
    fn test_leading_zero_typed_is_normalized() {
        let (display, cursor) = type_at("5", 0, "0", CO);
        assert_eq!(display, "5");
        assert_eq!(cursor, 0);

        let outcome = apply_edit("00", 2, CO);
        assert_eq!(outcome.canonical, "0");
        assert_eq!(outcome.cursor(CO), 1);
    }

    #[test]
    fn test_bare_decimal_becomes_zero_point() {
        let (display, cursor) = type_at("", 0, ",", CO);
        assert_eq!(display, "0,");
        assert_eq!(cursor, 2);

        let outcome = apply_edit(",5", 0, CO);
        assert_eq!(outcome.canonical, "0.5");
        assert_eq!(outcome.display(CO), "0,5");
        assert_eq!(outcome.cursor(CO), 1);
    }

    #[test]
    fn test_marker_typed_before_digits_keeps_cursor_around_marker() {
        // ",5" with the cursor right after the typed ','.
        let (display, cursor) = type_at("5", 0, ",", CO);
        assert_eq!(display, "0,5");
        assert_eq!(cursor, 2);

        // Cursor after the fractional digit.
        let outcome = apply_edit(".25", 3, US);
        assert_eq!(outcome.display(US), "0.25");
        assert_eq!(outcome.cursor(US), 4);
    }

    #[test]
    fn test_clearing_field_yields_empty_value() {
        let outcome = apply_edit("", 0, CO);
        assert_eq!(outcome.canonical, "");
        assert_eq!(outcome.cursor(CO), 0);
    }

    #[test]
    fn test_cursor_past_end_counts_everything() {
        let outcome = apply_edit("1.234", 99, CO);
        assert_eq!(outcome.anchor.digits_before, 4);
        assert_eq!(outcome.cursor(CO), 5);
    }

    #[test]
    fn test_locate_cursor_before_decimal() {
        let anchor = CursorAnchor { digits_before: 4, after_decimal: false };
        assert_eq!(locate_cursor("1.500,5", anchor, CO), 5);
        let anchor = CursorAnchor { digits_before: 4, after_decimal: true };
        assert_eq!(locate_cursor("1.500,5", anchor, CO), 6);
    }
}
