use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use transit_app::theme::palette;
use transit_app::{Message, PhotoAttachment, ReportField, ReportFormState, RequiredField};
use transit_core::{AnimationDelay, Icon, IssueType, Route, Urgency};
use web_sys::HtmlInputElement;

use crate::components::icons::Glyph;
use crate::components::sub_page::SubPage;
use crate::store::{use_dispatch, use_store, Store};

fn delay(ms: u32) -> String {
    AnimationDelay::millis(ms).style()
}

/// Tracked read of one form field; empty while the form is not mounted
fn field<T: Default>(store: Store, f: impl Fn(&ReportFormState) -> T) -> T {
    store.with(|s| s.report().map(&f).unwrap_or_default())
}

fn edit(store: Store, field: ReportField) {
    store.notify(Message::EditReport(field));
}

fn photo_from_input(input: &HtmlInputElement) -> Option<PhotoAttachment> {
    let file = input.files()?.get(0)?;
    Some(PhotoAttachment {
        file_name: file.name(),
        size_bytes: file.size() as u64,
        mime_type: file.type_(),
    })
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let store = use_store();
    let dispatch = use_dispatch();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch(Message::SubmitReport);
    };

    let urgency_options = Urgency::ALL
        .into_iter()
        .map(|level| {
            view! {
                <label class="inline-flex items-center">
                    <input
                        type="radio"
                        name="urgency"
                        value=level.value()
                        class="form-radio h-4 w-4 text-blue-600 dark:text-blue-400"
                        prop:checked=move || field(store, |f| f.urgency) == level
                        on:change=move |_| edit(store, ReportField::Urgency(level))
                    />
                    <span class="ml-2 capitalize text-gray-700 dark:text-gray-300">
                        {level.value()}
                    </span>
                </label>
            }
        })
        .collect_view();

    view! {
        <SubPage route=Route::Report narrow=true>
            <h1 class=palette::PAGE_TITLE>"Report Accessibility Issue"</h1>

            <form class="space-y-6" on:submit=on_submit>
                <div class="animate-fade-in" style=delay(200)>
                    <label for=RequiredField::Location.input_id() class=palette::FORM_LABEL>
                        {RequiredField::Location.label()}
                    </label>
                    <div class="mt-1 relative">
                        <Glyph icon=Icon::MapPin class="absolute left-3 top-3 h-5 w-5 text-gray-400" />
                        <input
                            type="text"
                            id=RequiredField::Location.input_id()
                            required
                            class=format!("pl-10 {}", palette::FORM_CONTROL)
                            placeholder="Enter station or stop name"
                            prop:value=move || field(store, |f| f.location.clone())
                            on:input=move |ev| {
                                edit(store, ReportField::Location(event_target_value(&ev)))
                            }
                        />
                    </div>
                </div>

                <div class="animate-fade-in" style=delay(300)>
                    <label for=RequiredField::IssueType.input_id() class=palette::FORM_LABEL>
                        {RequiredField::IssueType.label()}
                    </label>
                    <select
                        id=RequiredField::IssueType.input_id()
                        required
                        class=palette::FORM_CONTROL
                        prop:value=move || {
                            field(store, |f| f.issue_type.map(IssueType::value).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            edit(store, ReportField::IssueType(IssueType::from_value(&value)))
                        }
                    >
                        <option value="">"Select an issue type"</option>
                        {IssueType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.value()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="animate-fade-in" style=delay(400)>
                    <label for=RequiredField::Description.input_id() class=palette::FORM_LABEL>
                        {RequiredField::Description.label()}
                    </label>
                    <textarea
                        id=RequiredField::Description.input_id()
                        required
                        rows="4"
                        class=palette::FORM_CONTROL
                        placeholder="Describe the accessibility issue..."
                        prop:value=move || field(store, |f| f.description.clone())
                        on:input=move |ev| {
                            edit(store, ReportField::Description(event_target_value(&ev)))
                        }
                    ></textarea>
                </div>

                <div class="animate-fade-in" style=delay(500)>
                    <label class=palette::FORM_LABEL>"Urgency Level"</label>
                    <div class="mt-2 flex space-x-4">{urgency_options}</div>
                </div>

                <div class="animate-fade-in" style=delay(600)>
                    <label class=palette::FORM_LABEL>"Add Photo (optional)"</label>
                    <div class="mt-1 flex justify-center px-6 pt-5 pb-6 border-2 border-gray-300 dark:border-gray-600 border-dashed rounded-md hover:border-blue-500 dark:hover:border-blue-400 transition-colors duration-300">
                        <div class="space-y-1 text-center">
                            <Glyph icon=Icon::Camera class="mx-auto h-12 w-12 text-gray-400" />
                            <div class="flex text-sm text-gray-600 dark:text-gray-400">
                                <label
                                    for="photo"
                                    class="relative cursor-pointer rounded-md font-medium text-blue-600 dark:text-blue-400 hover:text-blue-500"
                                >
                                    <span>"Upload a file"</span>
                                    <input
                                        id="photo"
                                        name="photo"
                                        type="file"
                                        accept="image/*"
                                        class="sr-only"
                                        on:change=move |ev| {
                                            let input: HtmlInputElement = event_target(&ev);
                                            edit(store, ReportField::Photo(photo_from_input(&input)))
                                        }
                                    />
                                </label>
                                <p class="pl-1">"or drag and drop"</p>
                            </div>
                            <p class="text-xs text-gray-500 dark:text-gray-400">
                                {move || {
                                    field(store, |f| f.photo.as_ref().map(|p| p.file_name.clone()))
                                        .unwrap_or_else(|| "PNG, JPG, GIF up to 10MB".to_string())
                                }}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="flex items-center space-x-4 animate-fade-in" style=delay(700)>
                    <Glyph icon=Icon::AlertCircle class="h-5 w-5 text-gray-400" />
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Your report will be reviewed and verified by our team"
                    </p>
                </div>

                <div class="pt-4 animate-fade-in" style=delay(800)>
                    <button
                        type="submit"
                        class="w-full flex justify-center py-3 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 dark:bg-blue-500 dark:hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 transition-all duration-300 hover:scale-105"
                    >
                        "Submit Report"
                    </button>
                </div>
            </form>
        </SubPage>
    }
}
