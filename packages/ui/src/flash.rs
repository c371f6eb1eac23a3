//! Inline message banner with auto-dismiss.

use dioxus::prelude::*;

use crate::context::use_app;
use crate::state::{Flash, MessageArea};

/// Renders the current message of `area`, if any.
#[component]
pub fn FlashBanner(area: MessageArea) -> Element {
    let app = use_app();
    let flash = app.read(|s| s.messages.get(area).cloned());

    match flash {
        // Keyed by id so every new message mounts a fresh timer.
        Some(flash) => rsx! {
            FlashMessage { key: "{flash.id}", area, flash }
        },
        None => rsx! {},
    }
}

#[component]
fn FlashMessage(area: MessageArea, flash: Flash) -> Element {
    let app = use_app();
    let id = flash.id;
    use_hook(move || {
        spawn(async move {
            app.expire_message(area, id).await;
        })
    });

    rsx! {
        div { class: flash.kind.class(), role: "alert", "{flash.text}" }
    }
}
