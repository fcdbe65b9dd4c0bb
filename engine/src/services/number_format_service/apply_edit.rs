// Handlers for the ApplyEdit and ExtractPaste RPCs
use tonic::{Response, Status};

use super::helpers::{effective_locale, to_u32};
use crate::error::EngineError;
use crate::format::SeparatorResolver;
use crate::services::{EditRequest, EditResponse, PasteRequest, PasteResponse};

pub fn handle_apply_edit(
    req_payload: EditRequest,
    resolver: &SeparatorResolver,
    default_locale: &str,
) -> Result<Response<EditResponse>, Status> {
    let locale = effective_locale(&req_payload.locale, default_locale);
    let cursor = req_payload.cursor as usize;
    let raw_len = req_payload.raw.chars().count();
    if cursor > raw_len {
        let err = EngineError::InvalidRequest(format!(
            "cursor {} is past the end of a {}-character input",
            cursor, raw_len
        ));
        return Err(err.into());
    }

    let separators = resolver.resolve(locale);
    let outcome = resolver.edit(&req_payload.raw, cursor, locale);
    let display = outcome.display(separators);
    let new_cursor = outcome.cursor(separators);
    tracing::debug!(
        locale = %locale,
        canonical = %outcome.canonical,
        cursor = new_cursor,
        "Applied edit (handler)."
    );

    Ok(Response::new(EditResponse {
        canonical: outcome.canonical,
        display,
        cursor: to_u32(new_cursor),
        digits_before_cursor: to_u32(outcome.anchor.digits_before),
        after_decimal: outcome.anchor.after_decimal,
    }))
}

pub fn handle_extract_paste(
    req_payload: PasteRequest,
    resolver: &SeparatorResolver,
    default_locale: &str,
) -> Result<Response<PasteResponse>, Status> {
    let locale = effective_locale(&req_payload.locale, default_locale);
    let response = match resolver.paste(&req_payload.text, locale) {
        Some(canonical) => PasteResponse { accepted: true, canonical },
        None => {
            tracing::debug!(locale = %locale, "Paste held no digits, ignoring (handler).");
            PasteResponse { accepted: false, canonical: String::new() }
        }
    };
    Ok(Response::new(response))
}
