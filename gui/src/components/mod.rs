// GUI components module
pub mod interest_form;
pub mod locale_picker;
pub mod number_field;
pub mod toolbar;

pub use interest_form::InterestForm;
pub use locale_picker::LocalePicker;
pub use number_field::LocaleNumberField;
pub use toolbar::Toolbar;
