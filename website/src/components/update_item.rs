use leptos::prelude::*;
use transit_app::theme;
use transit_core::UpdateEntry;

#[component]
pub fn UpdateItem(entry: UpdateEntry) -> impl IntoView {
    view! {
        <div class=format!("p-4 rounded-lg {}", theme::update_severity_class(entry.severity))>
            <div class="flex justify-between items-center">
                <p class="text-sm font-medium">{entry.message}</p>
                <span class="text-xs opacity-75">{entry.time_label}</span>
            </div>
        </div>
    }
}
