use std::fmt::Display;

/// Экранирует значение ячейки CSV.
///
/// Если значение содержит запятую, кавычку или перевод строки, кавычки
/// удваиваются и всё значение оборачивается в кавычки. Иначе возвращается
/// как есть. Применять ровно один раз к исходному значению.
pub fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Как [`escape_csv_field`], но для произвольного значения; `None` даёт пустую ячейку.
pub fn escape_csv_value<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => escape_csv_field(&v.to_string()),
        None => String::new(),
    }
}

/// Собирает CSV: строка заголовков, затем по строке на запись, через `\n`.
pub fn build_csv_document(headers: &[&str], records: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(join_row(headers.iter().copied()));
    lines.extend(records.iter().map(|r| join_row(r.iter().map(String::as_str))));
    lines.join("\n")
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(escape_csv_field).collect::<Vec<_>>().join(",")
}
