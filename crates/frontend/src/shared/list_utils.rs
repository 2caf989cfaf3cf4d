//! Утилиты для клиентских списков: поиск и постраничный вывод

/// Минимальная длина поискового запроса, короче - фильтр не применяется
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (уже в нижнем регистре)
    fn matches_filter(&self, filter_lower: &str) -> bool;
}

/// Фильтрует список по поисковому запросу (без учёта регистра)
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.chars().count() < MIN_FILTER_LEN {
        return items.to_vec();
    }

    let filter_lower = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Одна страница списка
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Номер страницы (с 0), уже ограниченный последней страницей
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Вырезает страницу `page` размером `page_size`.
///
/// Пустой список даёт одну пустую страницу; номер за пределами списка
/// сдвигается на последнюю страницу.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);

    let start = page * page_size;
    let end = (start + page_size).min(total_count);

    Page {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter_lower: &str) -> bool {
            self.0.to_lowercase().contains(filter_lower)
        }
    }

    #[test]
    fn short_filter_keeps_everything() {
        let rows = vec![Row("Jane"), Row("Tunde")];
        assert_eq!(filter_list(&rows, "ja"), rows);
        assert_eq!(filter_list(&rows, "   "), rows);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let rows = vec![Row("Jane Doe"), Row("Tunde"), Row("JANET")];
        assert_eq!(filter_list(&rows, "JAN"), vec![Row("Jane Doe"), Row("JANET")]);
        assert!(filter_list(&rows, "xyz").is_empty());
    }

    #[test]
    fn paginate_middle_and_last_page() {
        let items: Vec<u32> = (0..23).collect();

        let page = paginate(&items, 1, 10);
        assert_eq!(page.items, (10..20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 23);

        let last = paginate(&items, 2, 10);
        assert_eq!(last.items, vec![20, 21, 22]);
    }

    #[test]
    fn paginate_clamps_out_of_range_page() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, 9, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![4]);
    }

    #[test]
    fn paginate_empty_list() {
        let page = paginate::<u32>(&[], 0, 50);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 0);
        assert!(page.items.is_empty());
    }
}
