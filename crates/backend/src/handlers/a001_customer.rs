use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use serde_json::json;

use crate::domain::a001_customer;

/// GET /api/a001_customer
pub async fn list_all() -> Result<Json<Vec<Customer>>, StatusCode> {
    match a001_customer::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("a001_customer list failed: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a001_customer/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Customer>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match a001_customer::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("a001_customer get {} failed: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/a001_customer
pub async fn upsert(Json(dto): Json<CustomerDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = match dto.id.clone() {
        Some(id) => a001_customer::service::update(dto).await.map(|_| id),
        None => a001_customer::service::create(dto)
            .await
            .map(|id| id.to_string()),
    };

    match result {
        Ok(id) => Ok(Json(json!({ "id": id }))),
        Err(e) => {
            tracing::error!("a001_customer upsert failed: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/a001_customer/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match a001_customer::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/a001_customer/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_customer::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("a001_customer testdata failed: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
