use async_trait::async_trait;

use super::csv::build_csv_document;
use super::error::ExportError;
use super::records::{chunk_into_records, select_data_fields};
use super::schema::{CUSTOMER_EXPORT_SCHEMA, END_INDEX, FIELDS_PER_RECORD, START_INDEX};
use super::tokenizer::tokenize;

pub const EXPORT_FILE_NAME: &str = "customer_data.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Источник сырой выгрузки (HTTP запрос к backend)
#[async_trait(?Send)]
pub trait ExportSource {
    async fn fetch_raw_export(&self) -> Result<String, String>;
}

/// Сохранение готового файла (в браузере: Blob + ссылка для скачивания)
pub trait DownloadSink {
    fn save(&self, file: &CsvFile) -> Result<(), String>;
}

/// Готовый к скачиванию CSV файл
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub file_name: &'static str,
    pub records: usize,
}

/// Сырая выгрузка -> CSV документ с заголовком.
pub fn build_customer_csv(raw: &str) -> Result<CsvFile, ExportError> {
    let fields = tokenize(raw);
    if fields.is_empty() {
        return Err(ExportError::Empty);
    }

    let records = chunk_into_records(&fields, FIELDS_PER_RECORD)?;
    let rows = records
        .iter()
        .map(|record| select_data_fields(record, START_INDEX, END_INDEX))
        .collect::<Result<Vec<_>, _>>()?;

    let headers = CUSTOMER_EXPORT_SCHEMA.headers();
    Ok(CsvFile {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        content: build_csv_document(&headers, &rows),
        records: rows.len(),
    })
}

/// Полная выгрузка: запрос, разбор, сохранение файла.
///
/// `sink` вызывается ровно один раз и только если документ собран целиком.
pub async fn export_customer_csv<S, D>(source: &S, sink: &D) -> Result<ExportReport, ExportError>
where
    S: ExportSource + ?Sized,
    D: DownloadSink + ?Sized,
{
    let raw = source
        .fetch_raw_export()
        .await
        .map_err(ExportError::Network)?;

    let file = build_customer_csv(&raw)?;
    sink.save(&file).map_err(ExportError::Download)?;

    Ok(ExportReport {
        file_name: file.file_name,
        records: file.records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u101_export_customers::tokenizer::encode_raw_export;
    use std::cell::RefCell;

    const HEADER_LINE: &str = "name,email,phone_number,gender,address,age,customer_description,\
        bust,waist,hip,shoulder,bustpoint,shoulder_to_underbust,round_under_bust,half_length,\
        blouse_length,sleeve_length,round_sleeve,dress_length,chest,round_shoulder,skirt_length,\
        trousers_length,round_thigh,round_knee,round_feet";

    const JANE: &str = r#""1","Jane Doe","jane@x.com","+2348000000000","female","12 Main St","30","likes florals","34","28","36","15","10","6","8","25","30","22","14","32","36","15","34","20","40","28","24","2024-01-01","2024-01-02""#;

    struct FakeSource(Result<String, String>);

    #[async_trait(?Send)]
    impl ExportSource for FakeSource {
        async fn fetch_raw_export(&self) -> Result<String, String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        saved: RefCell<Vec<CsvFile>>,
        fail: bool,
    }

    impl DownloadSink for RecordingSink {
        fn save(&self, file: &CsvFile) -> Result<(), String> {
            if self.fail {
                return Err("blob rejected".into());
            }
            self.saved.borrow_mut().push(file.clone());
            Ok(())
        }
    }

    fn synthetic_records(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|r| (0..FIELDS_PER_RECORD).map(|f| format!("r{}f{}", r, f)).collect())
            .collect()
    }

    #[test]
    fn round_trip_keeps_data_fields_in_order() {
        for n in 0..5 {
            let records = synthetic_records(n);
            let raw = encode_raw_export(&records);

            let fields = tokenize(&raw);
            let chunks = chunk_into_records(&fields, FIELDS_PER_RECORD).unwrap();
            let rows: Vec<Vec<String>> = chunks
                .iter()
                .map(|c| select_data_fields(c, START_INDEX, END_INDEX).unwrap())
                .collect();
            let doc = build_csv_document(&CUSTOMER_EXPORT_SCHEMA.headers(), &rows);

            let lines: Vec<&str> = doc.split('\n').collect();
            assert_eq!(lines.len(), n + 1);
            assert_eq!(lines[0], HEADER_LINE);
            for (i, record) in records.iter().enumerate() {
                let cells: Vec<&str> = lines[i + 1].split(',').collect();
                assert_eq!(cells, record[1..27].iter().map(String::as_str).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn single_customer_scenario() {
        assert_eq!(tokenize(JANE).len(), 29);

        let file = build_customer_csv(JANE).unwrap();
        let lines: Vec<&str> = file.content.lines().collect();

        assert_eq!(file.records, 1);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER_LINE);
        assert!(lines[1].starts_with("Jane Doe,jane@x.com,+2348000000000,female,12 Main St,30,"));
        assert!(lines[1].ends_with(",24"));
        assert!(!lines[1].contains("2024-01-01"));
    }

    #[test]
    fn two_records_give_three_lines() {
        let raw = format!("{},{}", JANE, JANE);
        assert_eq!(tokenize(&raw).len(), 58);
        assert_eq!(build_customer_csv(&raw).unwrap().content.lines().count(), 3);
    }

    #[test]
    fn forty_fields_are_malformed() {
        let raw = (0..40).map(|i| format!("\"{}\"", i)).collect::<Vec<_>>().join(",");
        assert_eq!(
            build_customer_csv(&raw),
            Err(ExportError::Malformed {
                actual: 40,
                divisor: 29
            })
        );
    }

    #[test]
    fn thirty_field_record_is_malformed() {
        let raw = format!("{},\"extra\"", JANE);
        assert!(matches!(
            build_customer_csv(&raw),
            Err(ExportError::Malformed { actual: 30, .. })
        ));
    }

    #[test]
    fn fields_with_commas_and_escaped_quotes_survive() {
        let mut record = synthetic_records(1).remove(0);
        record[1] = "Doe, Jane".to_string();
        record[7] = "said \"hi\"".to_string();
        let raw = encode_raw_export(&[record]);

        let file = build_customer_csv(&raw).unwrap();
        let data_line = file.content.lines().nth(1).unwrap();
        assert!(data_line.starts_with("\"Doe, Jane\","));
        assert!(data_line.contains(r#","said \""hi\""","#));
    }

    #[tokio::test]
    async fn export_saves_one_file() {
        let source = FakeSource(Ok(JANE.to_string()));
        let sink = RecordingSink::default();

        let report = export_customer_csv(&source, &sink).await.unwrap();

        assert_eq!(
            report,
            ExportReport {
                file_name: "customer_data.csv",
                records: 1
            }
        );
        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].mime_type, "text/csv;charset=utf-8;");
    }

    #[tokio::test]
    async fn empty_export_saves_nothing() {
        let sink = RecordingSink::default();
        let result = export_customer_csv(&FakeSource(Ok(String::new())), &sink).await;

        assert_eq!(result, Err(ExportError::Empty));
        assert!(sink.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn malformed_export_saves_nothing() {
        let sink = RecordingSink::default();
        let raw = format!("{},\"orphan\"", JANE);
        let result = export_customer_csv(&FakeSource(Ok(raw)), &sink).await;

        assert!(matches!(result, Err(ExportError::Malformed { .. })));
        assert!(sink.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn network_failure_is_propagated() {
        let sink = RecordingSink::default();
        let result = export_customer_csv(&FakeSource(Err("timeout".into())), &sink).await;

        assert_eq!(result, Err(ExportError::Network("timeout".into())));
        assert!(sink.saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn sink_failure_is_reported() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let result = export_customer_csv(&FakeSource(Ok(JANE.to_string())), &sink).await;
        assert!(matches!(result, Err(ExportError::Download(_))));
    }
}
