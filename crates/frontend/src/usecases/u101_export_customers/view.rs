use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{export_button_label, run_export, ExportNotice, NoticeKind};
use crate::shared::icons::icon;

/// Кнопка "Export CSV" и сообщение о результате последней выгрузки
#[component]
pub fn ExportCustomersButton() -> impl IntoView {
    // число незавершённых выгрузок, каждое нажатие запускает свою
    let in_flight = RwSignal::new(0usize);
    let (notice, set_notice) = signal::<Option<ExportNotice>>(None);

    let start_export = move |_: leptos::ev::MouseEvent| {
        in_flight.update(|n| *n += 1);
        set_notice.set(None);
        spawn_local(async move {
            let result = run_export().await;
            set_notice.set(Some(result));
            in_flight.update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=start_export
        >
            {icon("download")}
            {move || export_button_label(in_flight.get())}
        </Button>
        {move || {
            notice.get().map(|n| {
                let intent = match n.kind {
                    NoticeKind::Success => MessageBarIntent::Success,
                    NoticeKind::Warning => MessageBarIntent::Warning,
                    NoticeKind::Error => MessageBarIntent::Error,
                };
                view! {
                    <MessageBar intent=intent>
                        <span>{n.text}</span>
                    </MessageBar>
                }
            })
        }}
    }
}
