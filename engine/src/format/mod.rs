// Locale-aware numeric field core: separator resolution, canonical/display
// conversion, cursor-preserving edits and paste extraction.
pub mod display;
pub mod edit;
pub mod paste;
pub mod separators;

pub use display::{format_display, parse_display};
pub use edit::{apply_edit, locate_cursor, CursorAnchor, EditOutcome};
pub use paste::extract_paste;
pub use separators::{get_separators, SeparatorResolver};
