use leptos::prelude::*;
use transit_app::theme::{self, palette};
use transit_app::Message;
use transit_core::{Icon, Route};

use super::icons::Glyph;
use crate::store::{use_dispatch, use_store};

/// Fixed top bar. The landing page variant adds section links and sign-in.
#[component]
pub fn Navbar(#[prop(optional)] landing: bool) -> impl IntoView {
    let store = use_store();
    let (brand, sign_in) = store.with_untracked(|s| {
        (
            s.settings.site.brand.clone(),
            s.settings.site.sign_in_label.clone(),
        )
    });
    let toggle_icon = move || theme::theme_toggle_icon(store.theme());

    let links = landing.then(|| {
        let dispatch = use_dispatch();
        let link = move |route: Route, label: &'static str| {
            let dispatch = dispatch.clone();
            view! {
                <button class=palette::NAV_LINK on:click=move |_| dispatch(Message::Navigate(route))>
                    {label}
                </button>
            }
        };
        view! {
            <nav class="hidden md:flex space-x-8">
                {link(Route::Features, "Features")}
                {link(Route::HowItWorks, "How it Works")}
                {link(Route::LiveData, "Live Data")}
            </nav>
        }
    });

    view! {
        <nav class=palette::NAV_BAR>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center animate-slide-in-right">
                        <Glyph icon=Icon::Bus class=palette::BRAND_ICON />
                        <span class=palette::BRAND_TEXT>{brand}</span>
                    </div>
                    <div class="flex items-center space-x-4 animate-fade-in">
                        {links}
                        <button
                            class=palette::TOGGLE_BUTTON
                            aria-label="Toggle dark mode"
                            on:click=move |_| store.notify(Message::ToggleDarkMode)
                        >
                            {move || view! { <Glyph icon=toggle_icon() class="h-5 w-5 animate-spin-slow" /> }}
                        </button>
                        {landing.then(|| view! { <button class=palette::PRIMARY_BUTTON>{sign_in}</button> })}
                    </div>
                </div>
            </div>
        </nav>
    }
}
