use dioxus::prelude::*;

use crate::context::use_app;
use crate::navbar::Navbar;
use crate::state::Screen;

mod auth;
pub use auth::AuthView;

mod home;
pub use home::HomeView;

mod profile;
pub use profile::ProfileView;

mod people;
pub use people::{PeopleListView, PersonDetailView};

mod person_form;
pub use person_form::PersonFormView;

mod relationships;
pub use relationships::{RelationshipFormView, RelationshipListView};

mod events;
pub use events::{EventFormView, EventListView};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top-level view: exactly one screen at a time.
#[component]
pub fn AppShell() -> Element {
    let app = use_app();
    let (screen, restoring) = app.read(|s| (s.screen, s.restoring));

    if restoring {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div { class: "loading", "Loading..." }
        };
    }

    let body = match screen {
        Screen::Auth => return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            AuthView {}
        },
        Screen::Home => rsx! { HomeView {} },
        Screen::Profile => rsx! { ProfileView {} },
        Screen::PersonForm => rsx! { PersonFormView {} },
        Screen::PersonView => rsx! { PersonDetailView {} },
        Screen::PeopleList => rsx! { PeopleListView {} },
        Screen::RelationshipsForm => rsx! { RelationshipFormView {} },
        Screen::RelationshipsList => rsx! { RelationshipListView {} },
        Screen::EventsForm => rsx! { EventFormView {} },
        Screen::EventsList => rsx! { EventListView {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        Navbar {}
        main { class: "container", {body} }
    }
}
