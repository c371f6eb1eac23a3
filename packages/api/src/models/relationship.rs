//! # Relationships
//!
//! A [`Relationship`] is directional: `person1` stands in the
//! [`RelationType`] relation to `person2` ("Alice is *mother* of Bob"). The
//! server joins both display names onto list and detail rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::null_default;
use super::person::PersonId;

pub type RelationshipId = i64;

/// The fixed set of relation kinds the server accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Father,
    Mother,
    Brother,
    Sister,
    Husband,
    Wife,
}

impl RelationType {
    pub const ALL: [RelationType; 6] = [
        RelationType::Father,
        RelationType::Mother,
        RelationType::Brother,
        RelationType::Sister,
        RelationType::Husband,
        RelationType::Wife,
    ];

    /// Wire value ("father", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            RelationType::Father => "father",
            RelationType::Mother => "mother",
            RelationType::Brother => "brother",
            RelationType::Sister => "sister",
            RelationType::Husband => "husband",
            RelationType::Wife => "wife",
        }
    }

    /// Capitalised label ("Father", ...).
    pub fn label(self) -> &'static str {
        match self {
            RelationType::Father => "Father",
            RelationType::Mother => "Mother",
            RelationType::Brother => "Brother",
            RelationType::Sister => "Sister",
            RelationType::Husband => "Husband",
            RelationType::Wife => "Wife",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RelationType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown relation type: {wanted}"))
    }
}

/// Unknown, empty, or null types become `None` instead of failing the row.
fn lenient_relation_type<'de, D>(deserializer: D) -> Result<Option<RelationType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// A relationship row as served by `/api/relationships`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub person1_id: PersonId,
    #[serde(default, deserialize_with = "null_default")]
    pub person1_name: String,
    pub person2_id: PersonId,
    #[serde(default, deserialize_with = "null_default")]
    pub person2_name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_relation_type")]
    pub kind: Option<RelationType>,
    #[serde(default, deserialize_with = "null_default")]
    pub details: String,
}

/// Body of `POST /api/relationships` and `PUT /api/relationships/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipInput {
    pub person1_id: PersonId,
    pub person2_id: PersonId,
    #[serde(rename = "type")]
    pub kind: RelationType,
    pub details: String,
}
