//! # Account models
//!
//! ## [`UserInfo`]
//!
//! The user record returned by `POST /api/auth/login`, `GET /api/auth/me` and
//! `PUT /api/auth/me`: numeric `id`, `username`, and the optional profile
//! fields `full_name` and `email`. [`UserInfo::display_name`] returns the full
//! name, falling back to the username.
//!
//! ## Request bodies
//!
//! - [`Credentials`]: login.
//! - [`Registration`]: account creation.
//! - [`ProfileUpdate`]: partial profile change. `password` is skipped
//!   entirely when `None`, so "leave the password alone" is never sent as a
//!   literal empty string.
//!
//! ## Response bodies
//!
//! - [`LoginGrant`]: the bearer token plus the user it belongs to.

use serde::{Deserialize, Serialize};

use super::null_default;

/// User information as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to username if full name is not set.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}

/// Body of `PUT /api/auth/me`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// Build an update, treating an empty password as "unchanged".
    pub fn new(full_name: String, email: String, password: &str) -> Self {
        Self {
            full_name,
            email,
            password: (!password.is_empty()).then(|| password.to_string()),
        }
    }
}

/// Successful login: the session token and its user.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub user: UserInfo,
}

/// `{ "user": ... }` envelope payload of the `/auth/me` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserBody {
    pub user: UserInfo,
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_default")]
    pub database: String,
}
