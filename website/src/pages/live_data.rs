use chrono::Local;
use leptos::prelude::*;
use transit_app::{Message, ScopedRefresh};
use transit_core::prelude::warn;
use transit_core::{catalog, AnimationDelay, Icon, Route};

use crate::components::icons::Glyph;
use crate::components::status_card::StationCard;
use crate::components::sub_page::SubPage;
use crate::components::update_item::UpdateItem;
use crate::scheduler::BrowserScheduler;
use crate::store::use_store;

#[component]
pub fn LiveDataPage() -> impl IntoView {
    let store = use_store();
    let every = store.with_untracked(|s| s.settings.live_data.refresh_interval());

    let tick = move || store.notify(Message::RefreshTick { at: Local::now() });
    match ScopedRefresh::start(BrowserScheduler, every, tick) {
        Ok(refresh) => on_cleanup(move || {
            let mut refresh = refresh;
            refresh.cancel();
        }),
        Err(e) => warn!("Live data clock will not refresh: {}", e),
    }

    let last_updated = move || {
        store.with(|s| {
            s.live_data()
                .map(|live| live.formatted_time())
                .unwrap_or_default()
        })
    };

    view! {
        <SubPage route=Route::LiveData>
            <div class="flex justify-between items-center mb-8">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white animate-slide-up">
                    "Live Accessibility Data"
                </h1>
                <div class="flex items-center text-sm text-gray-500 dark:text-gray-400 animate-fade-in">
                    <Glyph icon=Icon::RefreshCw class="h-4 w-4 mr-2 animate-spin-slow" />
                    "Last updated: "
                    {last_updated}
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 mb-8">
                {catalog::station_snapshots()
                    .into_iter()
                    .map(|snapshot| view! { <StationCard snapshot /> })
                    .collect_view()}
            </div>

            <div
                class="bg-gray-50 dark:bg-gray-700 rounded-lg p-6 animate-fade-in"
                style=AnimationDelay::millis(800).style()
            >
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                    "Recent Updates"
                </h2>
                <div class="space-y-4">
                    {catalog::recent_updates()
                        .into_iter()
                        .map(|entry| view! { <UpdateItem entry /> })
                        .collect_view()}
                </div>
            </div>
        </SubPage>
    }
}
