//! This crate contains the family-tree UI: state, controller and views.
//!
//! - [`state`]: plain view/session state ([`AppState`], screens, forms, lists).
//! - [`app`]: the [`App`] controller mapping user intents to API calls.
//! - [`markup`]: HTML/JS escaping, table models, date formatting.
//! - [`views`]: Dioxus components rendering the state.

pub mod app;
pub mod markup;
pub mod platform;
pub mod state;
pub mod views;

mod context;
pub use context::{
    bind, click, click_async, confirm, dispatch, submit, use_app, AppProvider, SharedApp, WebApp,
};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod data_table;
pub use data_table::{run_row_action, DataTable};

mod flash;
pub use flash::FlashBanner;

mod navbar;
pub use navbar::Navbar;

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod person_select;
pub use person_select::PersonSelect;

pub use app::App;
pub use state::{AppState, Screen, StateHandle};
pub use views::AppShell;
