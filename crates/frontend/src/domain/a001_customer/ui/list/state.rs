use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CustomerListState {
    /// Текущая страница после фильтра
    pub items: Vec<Customer>,
    pub search_query: String,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(CustomerListState::default())
}
