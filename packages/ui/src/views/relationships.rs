use api::RelationType;
use dioxus::prelude::*;

use crate::context::{bind, click_async, submit, use_app, SharedApp};
use crate::data_table::{run_row_action, DataTable};
use crate::flash::FlashBanner;
use crate::markup::{relationships_table, RowAction};
use crate::person_select::PersonSelect;
use crate::state::{ListState, MessageArea, PersonSlot};

#[component]
pub fn RelationshipFormView() -> Element {
    let app = use_app();
    let (form, types) = app.read(|s| (s.relationship.clone(), s.relation_types.clone()));
    let heading = if form.mode.is_edit() { "Edit Relationship" } else { "Add Relationship" };

    let on_kind = {
        let app = app.clone();
        move |evt: FormEvent| {
            let kind = evt.value().parse::<RelationType>().ok();
            app.edit(|s| s.relationship.kind = kind);
        }
    };

    rsx! {
        section {
            class: "relationship-form",
            h2 { "{heading}" }
            FlashBanner { area: MessageArea::Relationships }
            form {
                onsubmit: submit(&app, |app| async move { app.submit_relationship().await }),
                PersonSelect { slot: PersonSlot::RelationshipFirst, label: "Person" }
                div {
                    class: "form-group",
                    label { "is the" }
                    select {
                        required: true,
                        onchange: on_kind,
                        option { value: "", selected: form.kind.is_none(), "Select relation" }
                        for kind in types {
                            option {
                                key: "{kind}",
                                value: kind.as_str(),
                                selected: form.kind == Some(kind),
                                {kind.label()}
                            }
                        }
                    }
                }
                PersonSelect { slot: PersonSlot::RelationshipSecond, label: "of" }
                div {
                    class: "form-group",
                    label { "Details" }
                    textarea {
                        rows: "3",
                        value: "{form.details}",
                        oninput: bind(&app, |s, v| s.relationship.details = v),
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
                        onclick: click_async(&app, |app| async move { app.show_relationships().await }),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
pub fn RelationshipListView() -> Element {
    let app = use_app();
    let relationships = app.read(|s| s.relationships.clone());

    let content = match relationships {
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
                DataTable { model: relationships_table(&rows), on_action }
            }
        }
    };

    rsx! {
        section {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "Relationships" }
                button {
                    class: "btn",
                    onclick: click_async(&app, |app| async move { app.show_add_relationship().await }),
                    "Add Relationship"
                }
            }
            FlashBanner { area: MessageArea::Relationships }
            {content}
        }
    }
}
