// GUI-side services
pub mod interest;
