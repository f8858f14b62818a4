pub mod components;
pub mod pages;
pub mod scheduler;
pub mod store;

use components::back_link::BackLink;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::features::FeaturesPage;
use pages::home::HomePage;
use pages::how_it_works::HowItWorksPage;
use pages::live_data::LiveDataPage;
use pages::report::ReportPage;
use store::{use_store, Store};
use transit_app::{load_settings, theme, AppState, Message, SiteSettings};
use transit_core::prelude::debug;

/// Site configuration, embedded at build time
pub const SITE_TOML: &str = include_str!("../site.toml");

pub fn site_settings() -> SiteSettings {
    load_settings(SITE_TOML)
}

#[component]
pub fn App(settings: SiteSettings) -> impl IntoView {
    provide_meta_context();
    Store::new(AppState::with_settings(settings)).provide();

    view! {
        <Router>
            <RouteSync />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/report") view=ReportPage />
                <Route path=path!("/features") view=FeaturesPage />
                <Route path=path!("/how-it-works") view=HowItWorksPage />
                <Route path=path!("/live-data") view=LiveDataPage />
            </Routes>
        </Router>
    }
}

/// Keeps the state model on the route the browser shows (links, back/forward,
/// typed URLs) and scrolls to the top on every change.
#[component]
fn RouteSync() -> impl IntoView {
    let store = use_store();
    let location = use_location();

    Effect::new(move || {
        let pathname = location.pathname.get();
        match transit_core::Route::from_path(&pathname) {
            Ok(route) => store.notify(Message::RouteEntered(route)),
            Err(e) => debug!("{}", e),
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    ()
}

#[component]
fn NotFound() -> impl IntoView {
    let store = use_store();

    view! {
        <div class=move || theme::page_shell(store.theme())>
            <div class="pt-24 px-4 max-w-3xl mx-auto text-center">
                <h1 class="text-6xl font-bold text-gray-400 dark:text-gray-500 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 dark:text-gray-300 mb-8">"Page not found"</p>
                <BackLink />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use transit_app::parse_settings;

    use super::*;

    #[test]
    fn test_embedded_site_settings_are_valid() {
        let settings = parse_settings(SITE_TOML).unwrap();
        assert_eq!(settings, SiteSettings::default());
    }
}
