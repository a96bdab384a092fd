//! HTTP handlers and the mapping from service failures to responses.

use actix_web::HttpResponse;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod lead;

/// Maps a service failure onto an HTTP response. Client mistakes carry their
/// message through; store failures are logged and reported without internal
/// detail.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::MissingField(_)
        | ServiceError::Validation(_)
        | ServiceError::InvalidParameter => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "Lead not found" }))
        }
        ServiceError::Repository(e) => {
            error!("Repository failure: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}
