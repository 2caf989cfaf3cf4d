use super::error::ExportError;

/// Режет плоский список полей на записи по `fields_per_record` полей.
///
/// Длина должна делиться на ширину записи без остатка; неполная последняя
/// запись не отбрасывается и не дополняется, а считается ошибкой.
pub fn chunk_into_records(
    fields: &[String],
    fields_per_record: usize,
) -> Result<Vec<Vec<String>>, ExportError> {
    if fields_per_record == 0 || fields.len() % fields_per_record != 0 {
        return Err(ExportError::Malformed {
            actual: fields.len(),
            divisor: fields_per_record,
        });
    }

    Ok(fields
        .chunks_exact(fields_per_record)
        .map(<[String]>::to_vec)
        .collect())
}

/// Поля записи в диапазоне `start..end`.
pub fn select_data_fields(
    record: &[String],
    start: usize,
    end: usize,
) -> Result<Vec<String>, ExportError> {
    record
        .get(start..end)
        .map(<[String]>::to_vec)
        .ok_or(ExportError::FieldRange {
            start,
            end,
            len: record.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{}", i)).collect()
    }

    #[test]
    fn chunks_preserve_order_and_content() {
        let input = fields(58);
        let records = chunk_into_records(&input, 29).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.len() == 29));
        assert_eq!(records.concat(), input);
    }

    #[test]
    fn empty_input_gives_no_records() {
        assert!(chunk_into_records(&[], 29).unwrap().is_empty());
    }

    #[test]
    fn rejects_partial_trailing_record() {
        for n in [1, 28, 30, 40, 59] {
            assert_eq!(
                chunk_into_records(&fields(n), 29),
                Err(ExportError::Malformed {
                    actual: n,
                    divisor: 29
                })
            );
        }
    }

    #[test]
    fn rejects_zero_width() {
        assert!(matches!(
            chunk_into_records(&fields(3), 0),
            Err(ExportError::Malformed { divisor: 0, .. })
        ));
    }

    #[test]
    fn selects_half_open_range() {
        let record = fields(29);
        let selected = select_data_fields(&record, 1, 27).unwrap();
        assert_eq!(selected.len(), 26);
        assert_eq!(selected.first().map(String::as_str), Some("f1"));
        assert_eq!(selected.last().map(String::as_str), Some("f26"));

        assert!(select_data_fields(&record, 5, 5).unwrap().is_empty());
    }

    #[test]
    fn out_of_bounds_range_is_an_error() {
        let record = fields(10);
        assert_eq!(
            select_data_fields(&record, 1, 27),
            Err(ExportError::FieldRange {
                start: 1,
                end: 27,
                len: 10
            })
        );
        assert!(select_data_fields(&record, 4, 2).is_err());
    }
}
