use contracts::domain::a001_customer::aggregate::Customer;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all customers
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let response = Request::get(&api_url("/api/a001_customer"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customers: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Сырая выгрузка клиентов для CSV (строка значений в кавычках)
pub async fn fetch_raw_export() -> Result<String, String> {
    let response = Request::get(&api_url("/api/a001_customer/export"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch export: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Seed demo customers
pub async fn insert_test_data() -> Result<(), String> {
    let response = Request::post(&api_url("/api/a001_customer/testdata"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to insert test data: {}", response.status()));
    }
    Ok(())
}
