pub mod u101_export_customers;
