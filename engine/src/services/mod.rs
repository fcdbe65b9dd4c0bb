// gRPC surface of the engine. Generated server code from proto/number_format.proto
// is included here and re-exported for the service implementation.
pub mod number_format_service;

pub mod generated {
    tonic::include_proto!("numberformat");
}

pub use generated::locale_number_format_server::{LocaleNumberFormat, LocaleNumberFormatServer};
pub use generated::{
    EditRequest, EditResponse, FormatRequest, FormatResponse, ListLocalesRequest, LocaleInfo,
    ParseRequest, ParseResponse, PasteRequest, PasteResponse, SeparatorsRequest,
    SeparatorsResponse, ValidateRequest, ValidateResponse,
};
pub use number_format_service::NumberFormatEngine;
