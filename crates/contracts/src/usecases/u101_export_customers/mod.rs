//! u101: выгрузка клиентов в CSV.
//!
//! Backend отдаёт "сырую" выгрузку: поток значений в кавычках без маркеров
//! строк. Здесь он режется на записи фиксированной ширины по
//! [`CUSTOMER_EXPORT_SCHEMA`], из каждой записи берутся поля данных, и
//! собирается CSV-документ с заголовком.

pub mod csv;
pub mod error;
pub mod pipeline;
pub mod records;
pub mod schema;
pub mod tokenizer;

pub use csv::{build_csv_document, escape_csv_field, escape_csv_value};
pub use error::{ExportError, NoticeLevel};
pub use pipeline::{
    build_customer_csv, export_customer_csv, CsvFile, DownloadSink, ExportReport, ExportSource,
    EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
pub use records::{chunk_into_records, select_data_fields};
pub use schema::{
    FieldRole, RecordSchema, CUSTOMER_EXPORT_SCHEMA, END_INDEX, FIELDS_PER_RECORD, HEADER_COUNT,
    START_INDEX,
};
pub use tokenizer::{encode_raw_export, tokenize};
