use dioxus::prelude::*;

use crate::context::{bind, click, submit, use_app};
use crate::flash::FlashBanner;
use crate::state::MessageArea;

#[component]
pub fn ProfileView() -> Element {
    let app = use_app();
    let (form, username) = app.read(|s| {
        let username = s
            .session
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default();
        (s.profile.clone(), username)
    });

    rsx! {
        section {
            class: "profile",
            h2 { "Profile" }
            FlashBanner { area: MessageArea::Profile }
            form {
                onsubmit: submit(&app, |app| async move { app.save_profile().await }),
                div {
                    class: "form-group",
                    label { "Username" }
                    input { r#type: "text", value: "{username}", disabled: true }
                }
                div {
                    class: "form-group",
                    label { "Full name" }
                    input {
                        r#type: "text",
                        value: "{form.full_name}",
                        oninput: bind(&app, |s, v| s.profile.full_name = v),
                    }
                }
                div {
                    class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: "{form.email}",
                        oninput: bind(&app, |s, v| s.profile.email = v),
                    }
                }
                div {
                    class: "form-group",
                    label { "New password" }
                    input {
                        r#type: "password",
                        autocomplete: "new-password",
                        placeholder: "Leave blank to keep the current password",
                        value: "{form.password}",
                        oninput: bind(&app, |s, v| s.profile.password = v),
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "btn",
                        disabled: form.submitting,
                        "Save Profile"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: click(&app, |app| app.toggle_profile()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
