//! # Life events
//!
//! An [`Event`] belongs to one person (`created_by`) and carries a title,
//! an optional date and place, and free text. List rows also carry the
//! server-joined `person_name`.

use serde::{Deserialize, Serialize};

use super::null_default;
use super::person::PersonId;

pub type EventId = i64;

/// An event row as served by `/api/events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub created_by: Option<PersonId>,
    #[serde(default, deserialize_with = "null_default")]
    pub person_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub place: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
}

/// Body of `POST /api/events` and `PUT /api/events/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventInput {
    pub created_by: PersonId,
    pub title: String,
    pub event_date: Option<String>,
    pub place: String,
    pub description: String,
}
