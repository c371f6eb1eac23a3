use api::LifeStatus;
use dioxus::prelude::*;

use crate::context::{bind, click, submit, use_app};
use crate::flash::FlashBanner;
use crate::state::MessageArea;

const GENDERS: [(&str, &str); 4] = [
    ("", "Select gender"),
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
];

/// Create/edit form for a person.
#[component]
pub fn PersonFormView() -> Element {
    let app = use_app();
    let (form, returning) = app.read(|s| (s.person.clone(), s.person_return.is_some()));
    let title = form.title();
    let submit_label = form.submit_label();
    let record_id = form.record_id.map(|id| id.to_string()).unwrap_or_default();

    let on_status = {
        let app = app.clone();
        move |evt: FormEvent| {
            let status = LifeStatus::parse(&evt.value());
            app.edit(|s| s.person.set_status(status));
        }
    };

    rsx! {
        section {
            class: "person-form",
            h2 { "{title}" }
            FlashBanner { area: MessageArea::Main }
            form {
                onsubmit: submit(&app, |app| async move { app.submit_person().await }),
                input { r#type: "hidden", value: "{record_id}" }
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { "Given name" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{form.given_name}",
                            oninput: bind(&app, |s, v| s.person.given_name = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Family name" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{form.family_name}",
                            oninput: bind(&app, |s, v| s.person.family_name = v),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { "Other names" }
                        input {
                            r#type: "text",
                            value: "{form.other_names}",
                            oninput: bind(&app, |s, v| s.person.other_names = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Gender" }
                        select {
                            onchange: bind(&app, |s, v| s.person.gender = v),
                            for (value, label) in GENDERS {
                                option { value, selected: form.gender == value, "{label}" }
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { "Birth date" }
                        input {
                            r#type: "date",
                            value: "{form.birth_date}",
                            oninput: bind(&app, |s, v| s.person.birth_date = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Birth place" }
                        input {
                            r#type: "text",
                            value: "{form.birth_place}",
                            oninput: bind(&app, |s, v| s.person.birth_place = v),
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { "Status" }
                        select {
                            onchange: on_status,
                            option { value: "alive", selected: form.status == LifeStatus::Alive, "Alive" }
                            option { value: "deceased", selected: form.status == LifeStatus::Deceased, "Deceased" }
                        }
                    }
                    if form.shows_death_date() {
                        div {
                            class: "form-group",
                            label { "Death date" }
                            input {
                                r#type: "date",
                                value: "{form.death_date}",
                                oninput: bind(&app, |s, v| s.person.death_date = v),
                            }
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { "Relation to you" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. grandmother",
                        value: "{form.relation}",
                        oninput: bind(&app, |s, v| s.person.relation = v),
                    }
                }
                div {
                    class: "form-group",
                    label { "Biography" }
                    textarea {
                        rows: "4",
                        value: "{form.bio}",
                        oninput: bind(&app, |s, v| s.person.bio = v),
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn",
                        disabled: form.submitting,
                        "{submit_label}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: click(&app, |app| app.cancel_person()),
                        if returning { "Back without adding" } else { "Cancel" }
                    }
                }
            }
        }
    }
}
