// Models and canonical-value helpers used by both the engine and the GUI.
pub mod models;
pub mod utils;

pub use models::{LocaleOption, Separators};
