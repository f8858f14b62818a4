use leptos::prelude::*;
use leptos_meta::Title;
use transit_app::theme;
use transit_app::Message;
use transit_core::{catalog, AnimationDelay, Icon, Route};

use crate::components::feature_card::FeatureSummary;
use crate::components::icons::Glyph;
use crate::components::navbar::Navbar;
use crate::components::status_card::StatCard;
use crate::store::{use_dispatch, use_store};

fn delay(ms: u32) -> String {
    AnimationDelay::millis(ms).style()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();
    let dispatch = use_dispatch();
    let (hero_url, hero_alt) = store.with_untracked(|s| {
        (
            s.settings.site.hero_image_url.clone(),
            s.settings.site.hero_image_alt.clone(),
        )
    });

    view! {
        <Title text=Route::Home.title() />
        <div class=move || theme::page_shell(store.theme())>
            <Navbar landing=true />

            // Hero Section
            <div class="pt-24 pb-16 px-4 sm:px-6 lg:px-8">
                <div class="max-w-7xl mx-auto">
                    <div class="lg:grid lg:grid-cols-12 lg:gap-8">
                        <div class="sm:text-center md:max-w-2xl md:mx-auto lg:col-span-6 lg:text-left animate-slide-up">
                            <h1 class="text-4xl tracking-tight font-extrabold text-gray-900 dark:text-white sm:text-5xl md:text-6xl">
                                <span class="block animate-slide-up" style=delay(200)>"Real-time"</span>
                                <span class="block text-blue-600 dark:text-blue-400 animate-slide-up" style=delay(400)>
                                    "Accessibility Info"
                                </span>
                                <span class="block animate-slide-up" style=delay(600)>"for Everyone"</span>
                            </h1>
                            <p class="mt-3 text-base text-gray-500 dark:text-gray-400 sm:mt-5 sm:text-xl lg:text-lg xl:text-xl animate-fade-in" style=delay(800)>
                                "Get instant updates on elevator status, ramp availability, and accessibility features across public transportation. Make informed travel decisions with real-time data."
                            </p>
                            <div class="mt-8 sm:max-w-lg sm:mx-auto sm:text-center lg:text-left animate-fade-in" style=delay(1000)>
                                <button
                                    class="inline-flex items-center px-6 py-3 border border-transparent text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 dark:bg-blue-500 dark:hover:bg-blue-600 transition-all duration-300 hover:scale-105 hover:shadow-lg"
                                    on:click=move |_| dispatch(Message::Navigate(Route::Report))
                                >
                                    "Report Accessibility"
                                    <Glyph icon=Icon::ArrowRight class="ml-2 h-5 w-5 animate-float" />
                                </button>
                            </div>
                        </div>
                        <div class="mt-12 relative sm:max-w-lg sm:mx-auto lg:mt-0 lg:max-w-none lg:mx-0 lg:col-span-6 lg:flex lg:items-center animate-slide-in-right" style=delay(400)>
                            <div class="relative mx-auto w-full rounded-lg shadow-lg lg:max-w-md transition-transform duration-300 hover:scale-105">
                                <img class="w-full rounded-lg" src=hero_url alt=hero_alt />
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // Features Section
            <div id="features" class="py-16 bg-white dark:bg-gray-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center animate-slide-up">
                        <h2 class="text-3xl font-extrabold text-gray-900 dark:text-white sm:text-4xl">
                            "Features that make a difference"
                        </h2>
                    </div>
                    <div class="mt-12 grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-3">
                        {catalog::features()
                            .into_iter()
                            .map(|item| view! { <FeatureSummary item /> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            // Live Data Section
            <div id="data" class="py-16 bg-gray-50 dark:bg-gray-900">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center animate-slide-up">
                        <h2 class="text-3xl font-extrabold text-gray-900 dark:text-white sm:text-4xl">
                            "Live Accessibility Status"
                        </h2>
                        <p class="mt-4 text-lg text-gray-500 dark:text-gray-400">
                            "Real-time updates from our network of sensors and community reports"
                        </p>
                    </div>
                    <div class="mt-12 bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            {catalog::highlight_stats()
                                .into_iter()
                                .map(|stat| view! { <StatCard stat /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
