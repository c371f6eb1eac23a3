use dioxus::prelude::*;

use crate::context::{bind, click_async, submit, use_app, SharedApp};
use crate::data_table::{run_row_action, DataTable};
use crate::flash::FlashBanner;
use crate::markup::{events_table, RowAction};
use crate::person_select::PersonSelect;
use crate::state::{ListState, MessageArea, PersonSlot};

#[component]
pub fn EventFormView() -> Element {
    let app = use_app();
    let form = app.read(|s| s.event.clone());
    let heading = if form.mode.is_edit() { "Edit Event" } else { "Add Event" };

    rsx! {
        section {
            class: "event-form",
            h2 { "{heading}" }
            FlashBanner { area: MessageArea::Events }
            form {
                onsubmit: submit(&app, |app| async move { app.submit_event().await }),
                PersonSelect { slot: PersonSlot::EventPerson, label: "Person" }
                div {
                    class: "form-group",
                    label { "Title" }
                    input {
                        r#type: "text",
                        required: true,
                        placeholder: "e.g. Baptism",
                        value: "{form.title}",
                        oninput: bind(&app, |s, v| s.event.title = v),
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { "Date" }
                        input {
                            r#type: "date",
                            value: "{form.event_date}",
                            oninput: bind(&app, |s, v| s.event.event_date = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Place" }
                        input {
                            r#type: "text",
                            value: "{form.place}",
                            oninput: bind(&app, |s, v| s.event.place = v),
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { "Description" }
                    textarea {
                        rows: "3",
                        value: "{form.description}",
                        oninput: bind(&app, |s, v| s.event.description = v),
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn",
                        disabled: form.submitting,
                        {form.submit_label()}
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: click_async(&app, |app| async move { app.show_events().await }),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
pub fn EventListView() -> Element {
    let app = use_app();
    let events = app.read(|s| s.events.clone());

    let content = match events {
        ListState::Idle => rsx! {},
        ListState::Loading => rsx! {
            p { class: "loading", "Loading..." }
        },
        ListState::Failed(message) => rsx! {
            div { class: "message error", "{message}" }
        },
        ListState::Loaded(rows) => {
            let on_action = {
                let app: SharedApp = app.clone();
                move |action: RowAction| run_row_action(&app, action)
            };
            rsx! {
                DataTable { model: events_table(&rows), on_action }
            }
        }
    };

    rsx! {
        section {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "Events" }
                button {
                    class: "btn",
                    onclick: click_async(&app, |app| async move { app.show_add_event().await }),
                    "Add Event"
                }
            }
            FlashBanner { area: MessageArea::Events }
            {content}
        }
    }
}
