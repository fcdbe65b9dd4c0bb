// Handler for the ValidateValue RPC
use tonic::{Response, Status};

use crate::services::{ValidateRequest, ValidateResponse};
use crate::validation::{validate, NumericConstraints};

pub fn handle_validate_value(req_payload: ValidateRequest) -> Result<Response<ValidateResponse>, Status> {
    let constraints = NumericConstraints {
        required: req_payload.required,
        min: req_payload.min,
        max: req_payload.max,
        integer_only: req_payload.integer_only,
    };

    // A failed check is a normal response, not an RPC error.
    let response = match validate(&req_payload.canonical, &constraints) {
        Ok(value) => ValidateResponse { valid: true, message: String::new(), value },
        Err(e) => ValidateResponse { valid: false, message: e.to_string(), value: None },
    };
    Ok(Response::new(response))
}
