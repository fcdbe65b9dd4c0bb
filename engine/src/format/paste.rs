use super::display::parse_display;
use super::edit::{canonicalize, scan_numeric};
use shared::models::Separators;

/// Best-effort canonical value from pasted text, which may be formatted for
/// another locale or carry currency symbols. `None` means the paste holds no
/// digits (a lone decimal marker does not count) and the field should stay
/// unchanged.
pub fn extract_paste(text: &str, separators: Separators) -> Option<String> {
    let parsed = parse_display(text, separators);
    let (cleaned, anchor) = scan_numeric(&parsed, '.', None);
    if !cleaned.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let (canonical, _) = canonicalize(&cleaned, anchor);
    Some(canonical)
}
