use leptos::prelude::*;
use transit_app::theme::palette;
use transit_core::{catalog, Route};

use crate::components::feature_card::FeatureDetail;
use crate::components::sub_page::SubPage;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <SubPage route=Route::Features>
            <h1 class=palette::PAGE_TITLE>"Our Features"</h1>
            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                {catalog::features()
                    .into_iter()
                    .map(|item| view! { <FeatureDetail item /> })
                    .collect_view()}
            </div>
        </SubPage>
    }
}
