//! Person selector with an "add new person" shortcut.

use api::PersonId;
use dioxus::prelude::*;

use crate::context::{click, use_app};
use crate::state::PersonSlot;

#[component]
pub fn PersonSelect(slot: PersonSlot, label: String) -> Element {
    let app = use_app();
    let (options, selected) = app.read(|s| (s.person_options.clone(), slot.selected(s)));

    let onchange = {
        let app = app.clone();
        move |evt: FormEvent| {
            let id = evt.value().parse::<PersonId>().ok();
            app.select_person(slot, id);
        }
    };

    rsx! {
        div {
            class: "form-group",
            label { "{label}" }
            div {
                class: "select-with-action",
                select {
                    required: true,
                    onchange,
                    option { value: "", selected: selected.is_none(), "Select person" }
                    for choice in options {
                        option {
                            key: "{choice.id}",
                            value: "{choice.id}",
                            selected: selected == Some(choice.id),
                            "{choice.label}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-small btn-secondary",
                    onclick: click(&app, move |app| app.add_person_for(slot)),
                    "+ New person"
                }
            }
        }
    }
}
