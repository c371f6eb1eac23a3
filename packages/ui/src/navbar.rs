use dioxus::prelude::*;

use crate::context::{click, click_async, use_app};
use crate::online_indicator::OnlineIndicator;
use crate::state::Screen;

#[component]
pub fn Navbar() -> Element {
    let app = use_app();
    let (screen, name) = app.read(|s| (s.screen, s.session.display_name().to_string()));

    let link_class = move |targets: &[Screen]| {
        if targets.contains(&screen) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Family Tree" }
            div {
                class: "navbar-links",
                button {
                    class: link_class(&[Screen::Home]),
                    onclick: click(&app, |app| app.show_home()),
                    "Home"
                }
                button {
                    class: link_class(&[Screen::PeopleList, Screen::PersonView]),
                    onclick: click_async(&app, |app| async move { app.show_people().await }),
                    "People"
                }
                button {
                    class: link_class(&[Screen::PersonForm]),
                    onclick: click(&app, |app| app.show_add_person()),
                    "Add Person"
                }
                button {
                    class: link_class(&[Screen::RelationshipsList, Screen::RelationshipsForm]),
                    onclick: click_async(&app, |app| async move { app.show_relationships().await }),
                    "Relationships"
                }
                button {
                    class: link_class(&[Screen::EventsList, Screen::EventsForm]),
                    onclick: click_async(&app, |app| async move { app.show_events().await }),
                    "Events"
                }
            }
            div {
                class: "navbar-user",
                OnlineIndicator {}
                button {
                    class: link_class(&[Screen::Profile]),
                    title: "Profile",
                    onclick: click(&app, |app| app.toggle_profile()),
                    "{name}"
                }
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: click_async(&app, |app| async move { app.logout().await }),
                    "Logout"
                }
            }
        }
    }
}
