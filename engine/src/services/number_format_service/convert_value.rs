// Handlers for the FormatValue and ParseDisplay RPCs
use tonic::{Response, Status};

use super::helpers::effective_locale;
use crate::format::SeparatorResolver;
use crate::services::{FormatRequest, FormatResponse, ParseRequest, ParseResponse};

pub fn handle_format_value(
    req_payload: FormatRequest,
    resolver: &SeparatorResolver,
    default_locale: &str,
) -> Result<Response<FormatResponse>, Status> {
    let locale = effective_locale(&req_payload.locale, default_locale);
    let display = resolver.format(&req_payload.canonical, locale);
    Ok(Response::new(FormatResponse { display }))
}

pub fn handle_parse_display(
    req_payload: ParseRequest,
    resolver: &SeparatorResolver,
    default_locale: &str,
) -> Result<Response<ParseResponse>, Status> {
    let locale = effective_locale(&req_payload.locale, default_locale);
    let canonical = resolver.parse(&req_payload.display, locale);
    Ok(Response::new(ParseResponse { canonical }))
}
