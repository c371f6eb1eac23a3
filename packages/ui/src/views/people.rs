use dioxus::prelude::*;

use crate::context::{click, click_async, use_app, SharedApp};
use crate::data_table::{run_row_action, DataTable};
use crate::flash::FlashBanner;
use crate::markup::{format_date, people_table, RowAction};
use crate::state::{ListState, MessageArea};

#[component]
pub fn PeopleListView() -> Element {
    let app = use_app();
    let people = app.read(|s| s.people.clone());

    let content = match people {
        ListState::Idle => rsx! {},
        ListState::Loading => rsx! {
            p { class: "loading", "Loading..." }
        },
        ListState::Failed(message) => rsx! {
            div { class: "message error", "{message}" }
        },
        ListState::Loaded(people) => {
            let on_action = {
                let app: SharedApp = app.clone();
                move |action: RowAction| run_row_action(&app, action)
            };
            rsx! {
                DataTable { model: people_table(&people), on_action }
            }
        }
    };

    rsx! {
        section {
            class: "list-view",
            div {
                class: "list-header",
                h2 { "People" }
                button {
                    class: "btn",
                    onclick: click(&app, |app| app.show_add_person()),
                    "Add Person"
                }
            }
            FlashBanner { area: MessageArea::Main }
            {content}
        }
    }
}

/// Read-only view of one person.
#[component]
pub fn PersonDetailView() -> Element {
    let app = use_app();
    let Some(person) = app.read(|s| s.viewed_person.clone()) else {
        return rsx! {
            p { class: "muted", "No person selected." }
        };
    };
    let id = person.id;
    let name = person.full_name();
    let status = person.status().label();
    let born = format_date(person.birth_date.as_deref());
    let died = format_date(person.death_date.as_deref());
    let delete_action = RowAction::DeletePerson {
        id,
        name: name.clone(),
    };

    rsx! {
        section {
            class: "person-detail",
            div {
                class: "list-header",
                h2 { "{name}" }
                span { class: "badge", "{status}" }
            }
            FlashBanner { area: MessageArea::Main }
            dl {
                class: "detail-list",
                if !person.other_names.is_empty() {
                    dt { "Other names" }
                    dd { "{person.other_names}" }
                }
                dt { "Gender" }
                dd { if person.gender.is_empty() { "N/A" } else { "{person.gender}" } }
                dt { "Born" }
                dd { "{born}" }
                if person.death_date.is_some() {
                    dt { "Died" }
                    dd { "{died}" }
                }
                dt { "Birth place" }
                dd { if person.birth_place.is_empty() { "N/A" } else { "{person.birth_place}" } }
                dt { "Relation" }
                dd { if person.relation.is_empty() { "N/A" } else { "{person.relation}" } }
            }
            if !person.bio.is_empty() {
                h3 { "Biography" }
                p { class: "bio", "{person.bio}" }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn",
                    onclick: click_async(&app, move |app| async move { app.edit_person(id).await }),
                    "Edit"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: click_async(&app, |app| async move { app.show_people().await }),
                    "Back to list"
                }
                button {
                    class: "btn btn-danger",
                    onclick: {
                        let app = app.clone();
                        move |_: MouseEvent| run_row_action(&app, delete_action.clone())
                    },
                    "Delete"
                }
            }
        }
    }
}
