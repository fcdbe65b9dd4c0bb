pub mod locale_table;

pub use locale_table::LocaleTable;
