use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::usecases::u101_export_customers;

/// GET /api/a001_customer/export
pub async fn raw_export() -> impl IntoResponse {
    match u101_export_customers::raw_export().await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("u101 export failed: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
