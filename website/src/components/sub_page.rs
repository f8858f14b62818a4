use leptos::prelude::*;
use leptos_meta::Title;
use transit_app::theme::{self, palette};
use transit_core::Route;

use super::back_link::BackLink;
use super::navbar::Navbar;
use crate::store::use_store;

/// Frame shared by every sub-view: themed shell, navbar, "Back to Home"
/// and the content panel.
#[component]
pub fn SubPage(route: Route, #[prop(optional)] narrow: bool, children: Children) -> impl IntoView {
    let store = use_store();
    let width = if narrow {
        "max-w-3xl mx-auto"
    } else {
        "max-w-7xl mx-auto"
    };

    view! {
        <Title text=route.title() />
        <div class=move || theme::page_shell(store.theme())>
            <Navbar />
            <div class="pt-24 pb-16 px-4 sm:px-6 lg:px-8">
                <div class=width>
                    <BackLink />
                    <div class=palette::PANEL>{children()}</div>
                </div>
            </div>
        </div>
    }
}
