use thiserror::Error;

/// Уровень уведомления, которое видит пользователь
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Ошибки выгрузки клиентов. Каждая из них прерывает выгрузку до
/// создания файла.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("No customer data to export")]
    Empty,

    #[error("Malformed export: {actual} fields is not a multiple of {divisor} fields per record")]
    Malformed { actual: usize, divisor: usize },

    #[error("Invalid field range {start}..{end} for a record of {len} fields")]
    FieldRange { start: usize, end: usize, len: usize },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Download failed: {0}")]
    Download(String),
}

impl ExportError {
    pub fn severity(&self) -> NoticeLevel {
        match self {
            ExportError::Empty => NoticeLevel::Warning,
            _ => NoticeLevel::Error,
        }
    }

    /// Текст для пользователя. Сетевые детали уходят в лог, а не в UI.
    pub fn user_message(&self) -> String {
        match self {
            ExportError::Network(_) => "Export failed".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_both_counts() {
        let err = ExportError::Malformed {
            actual: 40,
            divisor: 29,
        };
        let msg = err.user_message();
        assert!(msg.contains("40"));
        assert!(msg.contains("29"));
        assert_eq!(err.severity(), NoticeLevel::Error);
    }

    #[test]
    fn empty_is_a_warning_and_network_is_generic() {
        assert_eq!(ExportError::Empty.severity(), NoticeLevel::Warning);
        assert_eq!(
            ExportError::Network("connection refused".into()).user_message(),
            "Export failed"
        );
    }
}
