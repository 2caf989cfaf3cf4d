//! u101: сырая выгрузка клиентов для CSV на стороне frontend.
//!
//! Формат: значения всех записей подряд в кавычках через запятую, по
//! `FIELDS_PER_RECORD` значений на клиента. Разбор и сборка CSV выполняются
//! в `contracts::usecases::u101_export_customers`.

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::usecases::u101_export_customers::{encode_raw_export, FIELDS_PER_RECORD};

use crate::domain::a001_customer;

pub async fn raw_export() -> anyhow::Result<String> {
    let customers = a001_customer::service::list_all().await?;
    tracing::info!("u101: exporting {} customers", customers.len());
    encode_customers(&customers)
}

pub fn encode_customers(customers: &[Customer]) -> anyhow::Result<String> {
    let records: Vec<Vec<String>> = customers.iter().map(Customer::export_values).collect();
    if let Some(bad) = records.iter().find(|r| r.len() != FIELDS_PER_RECORD) {
        anyhow::bail!(
            "export record has {} fields, expected {}",
            bad.len(),
            FIELDS_PER_RECORD
        );
    }
    for (customer, record) in customers.iter().zip(&records) {
        if let Some(pos) = record.iter().position(|v| v.ends_with('\\')) {
            anyhow::bail!(
                "customer {} ({}): export field {} ends with a backslash",
                customer.id.value(),
                customer.name,
                pos
            );
        }
    }
    Ok(encode_raw_export(&records))
}
