use dioxus::prelude::*;

use crate::context::{click, click_async, use_app};
use crate::flash::FlashBanner;
use crate::state::MessageArea;

#[component]
pub fn HomeView() -> Element {
    let app = use_app();
    let name = app.read(|s| s.session.display_name().to_string());

    rsx! {
        section {
            class: "home",
            h2 { "Welcome, {name}" }
            FlashBanner { area: MessageArea::Main }
            p { class: "muted", "Keep track of the people in your family, how they are related, and the moments of their lives." }
            div {
                class: "cards",
                div {
                    class: "card",
                    h3 { "People" }
                    p { "Record names, dates and places." }
                    button {
                        class: "btn",
                        onclick: click_async(&app, |app| async move { app.show_people().await }),
                        "View people"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: click(&app, |app| app.show_add_person()),
                        "Add Person"
                    }
                }
                div {
                    class: "card",
                    h3 { "Relationships" }
                    p { "Connect parents, siblings and spouses." }
                    button {
                        class: "btn",
                        onclick: click_async(&app, |app| async move { app.show_relationships().await }),
                        "View relationships"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: click_async(&app, |app| async move { app.show_add_relationship().await }),
                        "Add Relationship"
                    }
                }
                div {
                    class: "card",
                    h3 { "Events" }
                    p { "Births, weddings, moves and more." }
                    button {
                        class: "btn",
                        onclick: click_async(&app, |app| async move { app.show_events().await }),
                        "View events"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: click_async(&app, |app| async move { app.show_add_event().await }),
                        "Add Event"
                    }
                }
            }
        }
    }
}
