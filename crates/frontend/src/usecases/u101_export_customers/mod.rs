//! u101: выгрузка клиентов в `customer_data.csv`.
pub mod view;

pub use view::ExportCustomersButton;

use async_trait::async_trait;
use contracts::usecases::u101_export_customers::{
    export_customer_csv, ExportError, ExportReport, ExportSource, NoticeLevel,
};

use crate::domain::a001_customer::api;
use crate::shared::export::BrowserDownload;

/// Сырая выгрузка через backend API
pub struct HttpExportSource;

#[async_trait(?Send)]
impl ExportSource for HttpExportSource {
    async fn fetch_raw_export(&self) -> Result<String, String> {
        api::fetch_raw_export().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Сообщение пользователю по итогам выгрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNotice {
    pub kind: NoticeKind,
    pub text: String,
}

pub fn notice_for(result: &Result<ExportReport, ExportError>) -> ExportNotice {
    match result {
        Ok(report) => ExportNotice {
            kind: NoticeKind::Success,
            text: format!("Exported {} customers to {}", report.records, report.file_name),
        },
        Err(e) => ExportNotice {
            kind: match e.severity() {
                NoticeLevel::Warning => NoticeKind::Warning,
                NoticeLevel::Error => NoticeKind::Error,
            },
            text: e.user_message(),
        },
    }
}

/// Подпись кнопки: пока идёт хотя бы одна выгрузка, показываем "Exporting...".
/// Кнопка при этом остаётся активной.
pub fn export_button_label(in_flight: usize) -> &'static str {
    if in_flight > 0 {
        " Exporting..."
    } else {
        " Export CSV"
    }
}

/// Запуск выгрузки из UI. Повторные нажатия дают независимые выгрузки.
pub async fn run_export() -> ExportNotice {
    let result = export_customer_csv(&HttpExportSource, &BrowserDownload).await;
    match &result {
        Ok(report) => log::info!("u101: exported {} customers", report.records),
        Err(ExportError::Empty) => log::warn!("u101: nothing to export"),
        Err(e) => log::error!("u101: export failed: {}", e),
    }
    notice_for(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_notice_names_the_file() {
        let notice = notice_for(&Ok(ExportReport {
            file_name: "customer_data.csv",
            records: 3,
        }));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Exported 3 customers to customer_data.csv");
    }

    #[test]
    fn empty_export_is_a_warning() {
        let notice = notice_for(&Err(ExportError::Empty));
        assert_eq!(notice.kind, NoticeKind::Warning);
    }

    #[test]
    fn malformed_export_is_an_error_with_counts() {
        let notice = notice_for(&Err(ExportError::Malformed {
            actual: 40,
            divisor: 29,
        }));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("40") && notice.text.contains("29"));
    }

    #[test]
    fn network_error_is_generic() {
        let notice = notice_for(&Err(ExportError::Network("HTTP 502".into())));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Export failed");
    }

    #[test]
    fn label_tracks_overlapping_exports() {
        let mut in_flight = 0;
        in_flight += 1;
        in_flight += 1;
        in_flight -= 1;
        assert_eq!(export_button_label(in_flight), " Exporting...");
        in_flight -= 1;
        assert_eq!(export_button_label(in_flight), " Export CSV");
    }
}
