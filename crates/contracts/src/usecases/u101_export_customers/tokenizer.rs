use once_cell::sync::Lazy;
use regex::Regex;

/// Сегмент в кавычках; `\"` внутри сегмента не закрывает его.
static QUOTED_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""((?:\\"|[^"])*)""#).expect("quoted segment pattern"));

/// Разбивает сырую выгрузку на значения полей.
///
/// Возвращает содержимое каждого сегмента `"..."` слева направо. Экранирование
/// внутри сегмента сохраняется как есть (`\"` не превращается в `"`).
/// Строка без сегментов даёт пустой список.
pub fn tokenize(raw: &str) -> Vec<String> {
    QUOTED_SEGMENT
        .captures_iter(raw)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
        .collect()
}

/// Обратная сторона формата: значения записей в кавычках через запятую,
/// кавычки внутри значения экранируются как `\"`.
pub fn encode_raw_export(records: &[Vec<String>]) -> String {
    records
        .iter()
        .flatten()
        .map(|value| format!("\"{}\"", value.replace('"', "\\\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_unquoted_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("no quotes, at all\n").is_empty());
    }

    #[test]
    fn extracts_segments_in_order() {
        let fields = tokenize("\"a\",\"b,c\",\"d\ne\",\"\"");
        assert_eq!(fields, vec!["a", "b,c", "d\ne", ""]);
    }

    #[test]
    fn escaped_quote_does_not_end_segment() {
        let fields = tokenize(r#""He said \"hi\"","next""#);
        assert_eq!(fields, vec![r#"He said \"hi\""#, "next"]);
    }

    #[test]
    fn ignores_text_between_segments() {
        let fields = tokenize(r#"[ "1" ; "two" ]"#);
        assert_eq!(fields, vec!["1", "two"]);
    }

    #[test]
    fn encoded_export_tokenizes_back() {
        let records = vec![
            vec!["1".to_string(), "Ada, Lovelace".to_string()],
            vec!["2".to_string(), "6\" hem".to_string()],
        ];
        let raw = encode_raw_export(&records);
        assert_eq!(raw, r#""1","Ada, Lovelace","2","6\" hem""#);
        assert_eq!(
            tokenize(&raw),
            vec!["1", "Ada, Lovelace", "2", r#"6\" hem"#]
        );
    }
}
