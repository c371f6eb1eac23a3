//! # People
//!
//! [`Person`] is the record served by `/api/people`. Text columns the server
//! may return as `null` are normalised to empty strings on the way in, so the
//! UI never has to distinguish "absent" from "blank".
//!
//! Life status is **derived**: a person with a `death_date` is
//! [`LifeStatus::Deceased`], everyone else is [`LifeStatus::Alive`]. There is
//! no stored status column.

use serde::{Deserialize, Serialize};

use super::null_default;

pub type PersonId = i64;

/// Whether a person is alive, derived from the presence of a death date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    #[default]
    Alive,
    Deceased,
}

impl LifeStatus {
    pub fn from_death_date(death_date: Option<&str>) -> Self {
        match death_date {
            Some(d) if !d.trim().is_empty() => LifeStatus::Deceased,
            _ => LifeStatus::Alive,
        }
    }

    /// Display label ("Alive" / "Deceased").
    pub fn label(self) -> &'static str {
        match self {
            LifeStatus::Alive => "Alive",
            LifeStatus::Deceased => "Deceased",
        }
    }

    /// Form value ("alive" / "deceased").
    pub fn as_str(self) -> &'static str {
        match self {
            LifeStatus::Alive => "alive",
            LifeStatus::Deceased => "deceased",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("deceased") {
            LifeStatus::Deceased
        } else {
            LifeStatus::Alive
        }
    }
}

/// A person as stored on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(default, deserialize_with = "null_default")]
    pub given_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub family_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub other_names: String,
    #[serde(default, deserialize_with = "null_default")]
    pub gender: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub death_date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub birth_place: String,
    #[serde(default, deserialize_with = "null_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_default")]
    pub relation: String,
}

impl Person {
    /// "Given Family", as the list and selector show it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    pub fn status(&self) -> LifeStatus {
        LifeStatus::from_death_date(self.death_date.as_deref())
    }
}

/// Body of `POST /api/people` and `PUT /api/people/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonInput {
    pub given_name: String,
    pub family_name: String,
    pub other_names: String,
    pub gender: String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub birth_place: String,
    pub bio: String,
    pub relation: String,
}
