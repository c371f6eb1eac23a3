use dioxus::prelude::*;

use crate::context::{bind, click, submit, use_app};
use crate::flash::FlashBanner;
use crate::state::{AuthTab, MessageArea};

/// Login and registration tabs.
#[component]
pub fn AuthView() -> Element {
    let app = use_app();
    let (tab, login, register) = app.read(|s| (s.auth_tab, s.login.clone(), s.register.clone()));

    let tab_class = move |t: AuthTab| if t == tab { "tab active" } else { "tab" };

    rsx! {
        div {
            class: "auth-container",
            h1 { "Family Tree" }
            div {
                class: "tabs",
                button {
                    class: tab_class(AuthTab::Login),
                    onclick: click(&app, |app| app.show_auth_tab(AuthTab::Login)),
                    "Login"
                }
                button {
                    class: tab_class(AuthTab::Register),
                    onclick: click(&app, |app| app.show_auth_tab(AuthTab::Register)),
                    "Register"
                }
            }
            FlashBanner { area: MessageArea::Auth }
            if tab == AuthTab::Login {
                form {
                    class: "auth-form",
                    onsubmit: submit(&app, |app| async move { app.login().await }),
                    div {
                        class: "form-group",
                        label { "Username" }
                        input {
                            r#type: "text",
                            required: true,
                            autocomplete: "username",
                            value: "{login.username}",
                            oninput: bind(&app, |s, v| s.login.username = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            required: true,
                            autocomplete: "current-password",
                            value: "{login.password}",
                            oninput: bind(&app, |s, v| s.login.password = v),
                        }
                    }
                    button { r#type: "submit", class: "btn", "Login" }
                }
            } else {
                form {
                    class: "auth-form",
                    onsubmit: submit(&app, |app| async move { app.register().await }),
                    div {
                        class: "form-group",
                        label { "Username" }
                        input {
                            r#type: "text",
                            required: true,
                            value: "{register.username}",
                            oninput: bind(&app, |s, v| s.register.username = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Full name" }
                        input {
                            r#type: "text",
                            value: "{register.full_name}",
                            oninput: bind(&app, |s, v| s.register.full_name = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{register.email}",
                            oninput: bind(&app, |s, v| s.register.email = v),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Password" }
                        input {
                            r#type: "password",
                            required: true,
                            autocomplete: "new-password",
                            value: "{register.password}",
                            oninput: bind(&app, |s, v| s.register.password = v),
                        }
                    }
                    button { r#type: "submit", class: "btn", "Register" }
                }
            }
        }
    }
}
