use leptos::prelude::*;
use transit_app::{theme::palette, Message};
use transit_core::{Icon, Route};

use super::icons::Glyph;
use crate::store::use_dispatch;

#[component]
pub fn BackLink() -> impl IntoView {
    let dispatch = use_dispatch();

    view! {
        <button class=palette::BACK_LINK on:click=move |_| dispatch(Message::Navigate(Route::Home))>
            <Glyph icon=Icon::ArrowLeft class="h-5 w-5 mr-2" />
            "Back to Home"
        </button>
    }
}
