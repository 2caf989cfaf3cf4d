mod state;

use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, paginate, Searchable};
use crate::usecases::u101_export_customers::ExportCustomersButton;
use state::create_state;

impl Searchable for Customer {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        [&self.name, &self.email, &self.phone_number]
            .iter()
            .any(|field| field.to_lowercase().contains(filter_lower))
    }
}

fn format_measurement(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let state = create_state();
    let all_customers: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let refresh_view = move || {
        let data = all_customers.with_untracked(|all| {
            filter_list(all, &state.with_untracked(|s| s.search_query.clone()))
        });
        state.update(|s| {
            let page = paginate(&data, s.page, s.page_size);
            s.page = page.page;
            s.total_pages = page.total_pages;
            s.total_count = page.total_count;
            s.items = page.items;
        });
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_customers().await {
                Ok(data) => {
                    log::debug!("a001_customer: loaded {} customers", data.len());
                    all_customers.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                }
                Err(e) => {
                    log::error!("a001_customer: {}", e);
                    set_error.set(Some(format!("Failed to load customers: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let seed_data = move || {
        spawn_local(async move {
            match api::insert_test_data().await {
                Ok(()) => load_data(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    let apply_search = move || {
        state.update(|s| {
            s.search_query = search_signal.get_untracked();
            s.page = 0;
        });
        refresh_view();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("customers")}
                    <h1 class="page__title">"Customers"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| seed_data()>
                        "Test data"
                    </Button>
                    <ExportCustomersButton />
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Search"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search_signal placeholder="Name, email or phone..." />
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                                "Find"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_signal.set(String::new());
                                    state.update(|s| {
                                        s.search_query = String::new();
                                        s.page = 0;
                                    });
                                    refresh_view();
                                }
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"Gender"</TableHeaderCell>
                                <TableHeaderCell>"Age"</TableHeaderCell>
                                <TableHeaderCell>"Bust"</TableHeaderCell>
                                <TableHeaderCell>"Waist"</TableHeaderCell>
                                <TableHeaderCell>"Hip"</TableHeaderCell>
                                <TableHeaderCell>"Added"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|c: &Customer| c.id.value()
                                children=move |c: Customer| {
                                    let added = c.created_at.format("%d.%m.%Y").to_string();
                                    let age = c.age.map(|a| a.to_string()).unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>{c.name}</TableCell>
                                            <TableCell>{c.email}</TableCell>
                                            <TableCell>{c.phone_number}</TableCell>
                                            <TableCell>{c.gender}</TableCell>
                                            <TableCell>{age}</TableCell>
                                            <TableCell>{format_measurement(c.measurements.bust)}</TableCell>
                                            <TableCell>{format_measurement(c.measurements.waist)}</TableCell>
                                            <TableCell>{format_measurement(c.measurements.hip)}</TableCell>
                                            <TableCell>{added}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::aggregate::CustomerDto;

    fn customer(name: &str, email: &str, phone: &str) -> Customer {
        Customer::new_for_insert(&CustomerDto {
            name: name.into(),
            email: email.into(),
            phone_number: phone.into(),
            ..Default::default()
        })
    }

    #[test]
    fn search_matches_name_email_and_phone() {
        let customers = vec![
            customer("Jane Doe", "jane@x.com", "+2348000000000"),
            customer("Tunde Bakare", "tunde@example.com", "+2348059876543"),
        ];

        assert_eq!(filter_list(&customers, "DOE").len(), 1);
        assert_eq!(filter_list(&customers, "example.com")[0].name, "Tunde Bakare");
        assert_eq!(filter_list(&customers, "+234").len(), 2);
        assert!(filter_list(&customers, "gown").is_empty());
    }

    #[test]
    fn missing_measurement_renders_dash() {
        assert_eq!(format_measurement(None), "—");
        assert_eq!(format_measurement(Some(34.5)), "34.5");
    }
}
