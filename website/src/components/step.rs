use leptos::prelude::*;
use transit_core::HowItWorksStep;

use super::icons::Glyph;

#[component]
pub fn Step(step: HowItWorksStep) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-6 animate-fade-in" style=step.delay.style()>
            <div class="flex-shrink-0">
                <div class="flex items-center justify-center h-16 w-16 rounded-full bg-blue-500 text-white animate-bounce-in">
                    <Glyph icon=step.icon class="h-8 w-8" />
                </div>
            </div>
            <div>
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">{step.title}</h3>
                <p class="text-gray-600 dark:text-gray-300">{step.description}</p>
            </div>
        </div>
    }
}
