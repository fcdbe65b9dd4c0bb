// Handler for the GetSeparators RPC
use tonic::{Response, Status};

use super::helpers::effective_locale;
use crate::format::SeparatorResolver;
use crate::services::{SeparatorsRequest, SeparatorsResponse};

pub fn handle_get_separators(
    req_payload: SeparatorsRequest,
    resolver: &SeparatorResolver,
    default_locale: &str,
) -> Result<Response<SeparatorsResponse>, Status> {
    let locale = effective_locale(&req_payload.locale, default_locale);
    let separators = resolver.resolve(locale);
    tracing::debug!(locale = %locale, thousands = %separators.thousands, decimal = %separators.decimal, "Resolved separators (handler).");
    Ok(Response::new(SeparatorsResponse {
        locale: locale.to_string(),
        thousands: separators.thousands.to_string(),
        decimal: separators.decimal.to_string(),
    }))
}
