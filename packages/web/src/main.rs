use dioxus::prelude::*;

use store::AppConfig;
use ui::{AppProvider, AppShell};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration, embedded at build time.
const CONFIG_TOML: &str = include_str!("../genealogy.toml");

fn main() {
    // `launch` falls back to its default logger if this one cannot be installed.
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {e}", AppConfig::filename());
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config,
            AppShell {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.messages.timeout_ms, 4000);
    }
}
