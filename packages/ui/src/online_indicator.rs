//! API reachability indicator for the navbar.

use dioxus::prelude::*;

use crate::context::use_app;
use crate::icons::{FaCloud, FaCloudArrowUp};
use crate::Icon;

/// A small icon that shows the result of the last health check.
///
/// - **Reachable**: green cloud icon ("Online")
/// - **Unreachable**: orange cloud-up icon ("Offline")
/// - **Not checked yet**: nothing
#[component]
pub fn OnlineIndicator() -> Element {
    let app = use_app();
    let online = app.read(|s| s.online);

    match online {
        Some(true) => rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Online",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        },
        Some(false) => rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Offline: the API is not reachable",
                Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            }
        },
        None => rsx! {},
    }
}
