//! Data models for the REST API.

mod event;
mod person;
mod relationship;
mod user;

pub use event::{Event, EventId, EventInput};
pub use person::{LifeStatus, Person, PersonId, PersonInput};
pub use relationship::{RelationType, Relationship, RelationshipId, RelationshipInput};
pub(crate) use user::UserBody;
pub use user::{Credentials, HealthStatus, LoginGrant, ProfileUpdate, Registration, UserInfo};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "data": ... }` payload of list and detail endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataBody<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// `{ "id": ... }` payload of create endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Created {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Any successful envelope whose payload is not needed.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Ack {}
