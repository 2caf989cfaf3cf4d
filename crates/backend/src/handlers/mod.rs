pub mod a001_customer;
pub mod u101_export_customers;
