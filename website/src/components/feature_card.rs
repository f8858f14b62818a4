use leptos::prelude::*;
use transit_app::theme::palette;
use transit_core::FeatureItem;

use super::icons::Glyph;

/// Short card for the landing page grid
#[component]
pub fn FeatureSummary(item: FeatureItem) -> impl IntoView {
    let style = item.delay.style();
    let badge_style = style.clone();

    view! {
        <div
            class="flex flex-col items-center p-6 bg-gray-50 dark:bg-gray-700 rounded-lg transform transition-all duration-300 hover:scale-105 hover:shadow-xl animate-scale"
            style=style
        >
            <div
                class="flex items-center justify-center h-12 w-12 rounded-md bg-blue-500 text-white animate-bounce-in"
                style=badge_style
            >
                <Glyph icon=item.icon class="h-6 w-6" />
            </div>
            <h3 class="mt-4 text-lg font-medium text-gray-900 dark:text-white">{item.title}</h3>
            <p class="mt-2 text-base text-gray-500 dark:text-gray-400">{item.summary}</p>
        </div>
    }
}

/// Full card for the features page
#[component]
pub fn FeatureDetail(item: FeatureItem) -> impl IntoView {
    view! {
        <div class=palette::CARD style=item.delay.style()>
            <div class="flex items-center justify-center h-16 w-16 rounded-full bg-blue-500 text-white mb-4 animate-bounce-in mx-auto">
                <Glyph icon=item.icon class="h-8 w-8" />
            </div>
            <h3 class="text-xl font-semibold text-gray-900 dark:text-white text-center mb-4">
                {item.title}
            </h3>
            <p class="text-gray-600 dark:text-gray-300 text-center">{item.details}</p>
        </div>
    }
}
