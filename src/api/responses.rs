use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

use crate::domain::pedido::PedidoError;

// ============================================================================
// API Error Envelope
// ============================================================================
//
// Every failure leaves the API as `{"success": false, "error": <message>}`.
// NotFound maps to 404; validation and storage failures alike surface as 500
// with their message string. Nothing is recovered or retried here.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PedidoError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            PedidoError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self.0);
        }

        HttpResponse::build(status).json(json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

/// JSON extractor config that routes malformed/incomplete payloads through
/// the same envelope instead of actix's default plain-text 400.
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default()
        .error_handler(|err, _req| ApiError(PedidoError::Validation(err.to_string())).into())
}
