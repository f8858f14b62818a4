use leptos::prelude::*;
use transit_app::theme::{self, palette};
use transit_core::{HighlightStat, StatusSnapshot};

use super::icons::Glyph;

/// Headline figure tile on the landing page
#[component]
pub fn StatCard(stat: HighlightStat) -> impl IntoView {
    let trend = theme::trend_style(stat.trend);

    view! {
        <div class=palette::CARD style=stat.delay.style()>
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{stat.title}</h3>
            <p class=format!("mt-2 text-3xl font-semibold {}", trend.class)>
                {stat.value}
                <Glyph icon=trend.icon class="ml-2 h-6 w-6 inline-block" />
            </p>
        </div>
    }
}

/// Station card on the live-data dashboard
#[component]
pub fn StationCard(snapshot: StatusSnapshot) -> impl IntoView {
    let trend = theme::trend_style(snapshot.trend);

    view! {
        <div class=palette::CARD style=snapshot.delay.style()>
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                    {snapshot.station}
                </h3>
                <Glyph icon=trend.icon class=format!("h-5 w-5 {}", trend.class) />
            </div>
            <p class="text-sm text-gray-600 dark:text-gray-300 mb-4">{snapshot.summary}</p>
            <div class="space-y-2">
                {snapshot
                    .facilities
                    .into_iter()
                    .map(|facility| {
                        view! {
                            <div class="flex justify-between items-center">
                                <span class="text-sm text-gray-500 dark:text-gray-400">
                                    {facility.name}
                                </span>
                                <span class=format!(
                                    "text-sm font-medium {}",
                                    theme::facility_state_class(facility.state),
                                )>{facility.count.to_string()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
