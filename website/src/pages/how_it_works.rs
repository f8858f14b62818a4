use leptos::prelude::*;
use transit_app::theme::palette;
use transit_core::{catalog, Route};

use crate::components::step::Step;
use crate::components::sub_page::SubPage;

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    let call_out = catalog::get_started();

    view! {
        <SubPage route=Route::HowItWorks>
            <h1 class=palette::PAGE_TITLE>"How It Works"</h1>
            <div class="space-y-12">
                {catalog::how_it_works_steps()
                    .into_iter()
                    .map(|step| view! { <Step step /> })
                    .collect_view()}
            </div>
            <div
                class="mt-12 p-6 bg-blue-50 dark:bg-blue-900/20 rounded-lg animate-fade-in"
                style=call_out.delay.style()
            >
                <h3 class="text-xl font-semibold text-blue-900 dark:text-blue-100 mb-4">
                    {call_out.title}
                </h3>
                <p class="text-blue-800 dark:text-blue-200">{call_out.body}</p>
            </div>
        </SubPage>
    }
}
