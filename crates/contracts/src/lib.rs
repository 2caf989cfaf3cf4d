//! Общие типы и чистая логика, разделяемые frontend и backend.

pub mod domain;
pub mod usecases;
