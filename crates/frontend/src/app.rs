use crate::domain::a001_customer::ui::list::CustomerList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <CustomerList />
        </main>
    }
}
