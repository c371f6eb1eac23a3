//! # Client configuration: `genealogy.toml`
//!
//! Defines the TOML configuration the web binary embeds at build time
//! (filename: [`AppConfig::filename`] = `"genealogy.toml"`). It tells the client
//! where the REST API lives and how long inline messages stay on screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_path = "/api"                  # joined onto the page origin in the browser
//! # base_url = "http://localhost:5000/api"   # absolute override
//!
//! [messages]
//! timeout_ms = 4000                   # auth / people / relationship / event messages
//! profile_timeout_ms = 3000           # profile screen messages
//! register_redirect_ms = 1000         # delay before switching to the login tab
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`ApiConfig`] | Where requests go: a path relative to the page origin, or an absolute URL. |
//! | [`MessageConfig`] | Auto-dismiss timeouts for inline messages. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `genealogy.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub messages: MessageConfig,
}

/// REST API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Path of the API relative to the page origin.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Absolute API URL. Takes precedence over `base_path` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_base_path() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            base_url: None,
        }
    }
}

impl ApiConfig {
    /// Resolve the API root against an origin such as `https://example.org`.
    pub fn resolve(&self, origin: &str) -> String {
        if let Some(url) = &self.base_url {
            return url.trim_end_matches('/').to_string();
        }
        let path = self.base_path.trim_matches('/');
        let origin = origin.trim_end_matches('/');
        if path.is_empty() {
            origin.to_string()
        } else {
            format!("{origin}/{path}")
        }
    }
}

/// Inline message timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_profile_timeout_ms")]
    pub profile_timeout_ms: u64,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u64,
}

fn default_timeout_ms() -> u64 {
    4000
}

fn default_profile_timeout_ms() -> u64 {
    3000
}

fn default_register_redirect_ms() -> u64 {
    1000
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            profile_timeout_ms: default_profile_timeout_ms(),
            register_redirect_ms: default_register_redirect_ms(),
        }
    }
}

impl MessageConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn profile_timeout(&self) -> Duration {
        Duration::from_millis(self.profile_timeout_ms)
    }

    pub fn register_redirect(&self) -> Duration {
        Duration::from_millis(self.register_redirect_ms)
    }
}

impl AppConfig {
    /// Builder method to point the client at an absolute API URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = Some(url.into());
        self
    }

    /// Builder method to skip the post-registration delay.
    pub fn without_redirect_delay(mut self) -> Self {
        self.messages.register_redirect_ms = 0;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "genealogy.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
