use crate::shared::icons::icon;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Навигация по страницам клиентского списка + выбор размера страницы
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let at_first = Signal::derive(move || current_page.get() == 0);
    let at_last = Signal::derive(move || current_page.get() + 1 >= total_pages.get());
    let last_page = Signal::derive(move || total_pages.get().saturating_sub(1));

    view! {
        <div class="pagination-controls">
            <NavButton
                icon_name="chevrons-left"
                title="First page"
                disabled=at_first
                target=Signal::derive(|| 0)
                on_page_change=on_page_change
            />
            <NavButton
                icon_name="chevron-left"
                title="Previous page"
                disabled=at_first
                target=Signal::derive(move || current_page.get().saturating_sub(1))
                on_page_change=on_page_change
            />
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <NavButton
                icon_name="chevron-right"
                title="Next page"
                disabled=at_last
                target=Signal::derive(move || (current_page.get() + 1).min(last_page.get()))
                on_page_change=on_page_change
            />
            <NavButton
                icon_name="chevrons-right"
                title="Last page"
                disabled=at_last
                target=last_page
                on_page_change=on_page_change
            />
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse()
                        .unwrap_or(DEFAULT_PAGE_SIZES[1]);
                    on_page_size_change.run(size);
                }
                prop:value=move || page_size.get().to_string()
            >
                {DEFAULT_PAGE_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn NavButton(
    icon_name: &'static str,
    title: &'static str,
    disabled: Signal<bool>,
    target: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <button
            class="pagination-btn"
            title=title
            disabled=move || disabled.get()
            on:click=move |_| on_page_change.run(target.get_untracked())
        >
            {icon(icon_name)}
        </button>
    }
}
