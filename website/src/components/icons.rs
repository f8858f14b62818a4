use leptos::prelude::*;
use transit_core::Icon;

/// Lucide icon rendered from the icon font
#[component]
pub fn Glyph(icon: Icon, #[prop(into, optional)] class: String) -> impl IntoView {
    view! { <i class=format!("icon-{} {}", icon.name(), class) aria-hidden="true"></i> }
}
