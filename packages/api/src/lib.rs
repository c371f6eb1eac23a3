//! # API crate: typed client for the family-tree REST API
//!
//! The browser UI never talks HTTP directly; it goes through this crate. The
//! server itself (routes, persistence, validation) is an external
//! collaborator and is not implemented here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: reqwest wrapper adding bearer auth and decoding the `{success, data\|error}` envelope |
//! | [`backend`] | [`Backend`] trait: one async method per endpoint, implemented by [`ApiClient`] |
//! | [`models`] | Request and response bodies (`Person`, `Relationship`, `Event`, `UserInfo`, ...) |
//! | [`error`] | [`Error`]: `Validation`, `Auth`, `Application`, `Connection` |
//!
//! ## Endpoints covered
//!
//! - **Health**: `GET /health`
//! - **Authentication**: `register`, `login`, `logout`, `GET`/`PUT /auth/me`
//! - **People**: list, get, create, update, delete
//! - **Relationships**: types, list, get, create, update, delete
//! - **Events**: list, get, create, update, delete

pub mod backend;
pub mod client;
pub mod error;
pub mod models;

pub use backend::Backend;
pub use client::ApiClient;
pub use error::{Error, Result};
pub use models::{
    Credentials, Event, EventId, EventInput, HealthStatus, LifeStatus, LoginGrant, Person,
    PersonId, PersonInput, ProfileUpdate, Registration, RelationType, Relationship,
    RelationshipId, RelationshipInput, UserInfo,
};
