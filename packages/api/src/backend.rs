//! # [`Backend`]: the REST contract as a trait
//!
//! The UI controller is generic over this trait so it can run against the
//! real [`ApiClient`] in the browser and against an in-memory fake in tests.
//! Methods mirror the endpoint table one-to-one; protected calls take the
//! bearer token explicitly so the controller stays the single owner of
//! session state.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | `health` | `GET /health` |
//! | `register` / `login` / `logout` | `POST /auth/register`, `/auth/login`, `/auth/logout` |
//! | `current_user` / `update_profile` | `GET` / `PUT /auth/me` |
//! | `list_people` … `delete_person` | `/people`, `/people/{id}` |
//! | `relationship_types` | `GET /relationships/types` |
//! | `list_relationships` … `delete_relationship` | `/relationships`, `/relationships/{id}` |
//! | `list_events` … `delete_event` | `/events`, `/events/{id}` |

use std::future::Future;

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::models::{
    Ack, Created, Credentials, DataBody, Event, EventId, EventInput, HealthStatus, LoginGrant,
    Person, PersonId, PersonInput, ProfileUpdate, Registration, RelationType, Relationship,
    RelationshipId, RelationshipInput, UserBody, UserInfo,
};

/// Async interface to the genealogy REST API.
pub trait Backend {
    fn health(&self) -> impl Future<Output = Result<HealthStatus>>;

    fn register(&self, registration: &Registration) -> impl Future<Output = Result<()>>;
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<LoginGrant>>;
    fn logout(&self, token: Option<&str>) -> impl Future<Output = Result<()>>;
    fn current_user(&self, token: Option<&str>) -> impl Future<Output = Result<UserInfo>>;
    fn update_profile(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<UserInfo>>;

    fn list_people(&self, token: Option<&str>) -> impl Future<Output = Result<Vec<Person>>>;
    fn get_person(&self, token: Option<&str>, id: PersonId)
        -> impl Future<Output = Result<Person>>;
    /// Returns the new id when the server reports it.
    fn create_person(
        &self,
        token: Option<&str>,
        input: &PersonInput,
    ) -> impl Future<Output = Result<Option<PersonId>>>;
    fn update_person(
        &self,
        token: Option<&str>,
        id: PersonId,
        input: &PersonInput,
    ) -> impl Future<Output = Result<()>>;
    fn delete_person(&self, token: Option<&str>, id: PersonId) -> impl Future<Output = Result<()>>;

    fn relationship_types(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<RelationType>>>;
    fn list_relationships(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Relationship>>>;
    fn get_relationship(
        &self,
        token: Option<&str>,
        id: RelationshipId,
    ) -> impl Future<Output = Result<Relationship>>;
    fn create_relationship(
        &self,
        token: Option<&str>,
        input: &RelationshipInput,
    ) -> impl Future<Output = Result<Option<RelationshipId>>>;
    fn update_relationship(
        &self,
        token: Option<&str>,
        id: RelationshipId,
        input: &RelationshipInput,
    ) -> impl Future<Output = Result<()>>;
    fn delete_relationship(
        &self,
        token: Option<&str>,
        id: RelationshipId,
    ) -> impl Future<Output = Result<()>>;

    fn list_events(&self, token: Option<&str>) -> impl Future<Output = Result<Vec<Event>>>;
    fn get_event(&self, token: Option<&str>, id: EventId) -> impl Future<Output = Result<Event>>;
    fn create_event(
        &self,
        token: Option<&str>,
        input: &EventInput,
    ) -> impl Future<Output = Result<Option<EventId>>>;
    fn update_event(
        &self,
        token: Option<&str>,
        id: EventId,
        input: &EventInput,
    ) -> impl Future<Output = Result<()>>;
    fn delete_event(&self, token: Option<&str>, id: EventId) -> impl Future<Output = Result<()>>;
}

fn required<T>(body: DataBody<T>, what: &str) -> Result<T> {
    body.data
        .ok_or_else(|| Error::Application(format!("{what} not found")))
}

impl Backend for ApiClient {
    async fn health(&self) -> Result<HealthStatus> {
        self.send(Method::GET, "/health", None).await
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        let _: Ack = self
            .send_json(Method::POST, "/auth/register", None, registration)
            .await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant> {
        self.send_json(Method::POST, "/auth/login", None, credentials)
            .await
    }

    async fn logout(&self, token: Option<&str>) -> Result<()> {
        let _: Ack = self.send(Method::POST, "/auth/logout", token).await?;
        Ok(())
    }

    async fn current_user(&self, token: Option<&str>) -> Result<UserInfo> {
        let body: UserBody = self.send(Method::GET, "/auth/me", token).await?;
        Ok(body.user)
    }

    async fn update_profile(&self, token: Option<&str>, update: &ProfileUpdate) -> Result<UserInfo> {
        let body: UserBody = self
            .send_json(Method::PUT, "/auth/me", token, update)
            .await?;
        Ok(body.user)
    }

    async fn list_people(&self, token: Option<&str>) -> Result<Vec<Person>> {
        let body: DataBody<Vec<Person>> = self.send(Method::GET, "/people", token).await?;
        Ok(body.data.unwrap_or_default())
    }

    async fn get_person(&self, token: Option<&str>, id: PersonId) -> Result<Person> {
        let body = self
            .send(Method::GET, &format!("/people/{id}"), token)
            .await?;
        required(body, "Person")
    }

    async fn create_person(&self, token: Option<&str>, input: &PersonInput) -> Result<Option<PersonId>> {
        let created: Created = self
            .send_json(Method::POST, "/people", token, input)
            .await?;
        Ok(created.id)
    }

    async fn update_person(&self, token: Option<&str>, id: PersonId, input: &PersonInput) -> Result<()> {
        let _: Ack = self
            .send_json(Method::PUT, &format!("/people/{id}"), token, input)
            .await?;
        Ok(())
    }

    async fn delete_person(&self, token: Option<&str>, id: PersonId) -> Result<()> {
        let _: Ack = self
            .send(Method::DELETE, &format!("/people/{id}"), token)
            .await?;
        Ok(())
    }

    async fn relationship_types(&self, token: Option<&str>) -> Result<Vec<RelationType>> {
        let body: DataBody<Vec<String>> = self
            .send(Method::GET, "/relationships/types", token)
            .await?;
        Ok(body
            .data
            .unwrap_or_default()
            .iter()
            .filter_map(|t| t.parse().ok())
            .collect())
    }

    async fn list_relationships(&self, token: Option<&str>) -> Result<Vec<Relationship>> {
        let body: DataBody<Vec<Relationship>> =
            self.send(Method::GET, "/relationships", token).await?;
        Ok(body.data.unwrap_or_default())
    }

    async fn get_relationship(&self, token: Option<&str>, id: RelationshipId) -> Result<Relationship> {
        let body = self
            .send(Method::GET, &format!("/relationships/{id}"), token)
            .await?;
        required(body, "Relationship")
    }

    async fn create_relationship(
        &self,
        token: Option<&str>,
        input: &RelationshipInput,
    ) -> Result<Option<RelationshipId>> {
        let created: Created = self
            .send_json(Method::POST, "/relationships", token, input)
            .await?;
        Ok(created.id)
    }

    async fn update_relationship(
        &self,
        token: Option<&str>,
        id: RelationshipId,
        input: &RelationshipInput,
    ) -> Result<()> {
        let _: Ack = self
            .send_json(Method::PUT, &format!("/relationships/{id}"), token, input)
            .await?;
        Ok(())
    }

    async fn delete_relationship(&self, token: Option<&str>, id: RelationshipId) -> Result<()> {
        let _: Ack = self
            .send(Method::DELETE, &format!("/relationships/{id}"), token)
            .await?;
        Ok(())
    }

    async fn list_events(&self, token: Option<&str>) -> Result<Vec<Event>> {
        let body: DataBody<Vec<Event>> = self.send(Method::GET, "/events", token).await?;
        Ok(body.data.unwrap_or_default())
    }

    async fn get_event(&self, token: Option<&str>, id: EventId) -> Result<Event> {
        let body = self
            .send(Method::GET, &format!("/events/{id}"), token)
            .await?;
        required(body, "Event")
    }

    async fn create_event(&self, token: Option<&str>, input: &EventInput) -> Result<Option<EventId>> {
        let created: Created = self
            .send_json(Method::POST, "/events", token, input)
            .await?;
        Ok(created.id)
    }

    async fn update_event(&self, token: Option<&str>, id: EventId, input: &EventInput) -> Result<()> {
        let _: Ack = self
            .send_json(Method::PUT, &format!("/events/{id}"), token, input)
            .await?;
        Ok(())
    }

    async fn delete_event(&self, token: Option<&str>, id: EventId) -> Result<()> {
        let _: Ack = self
            .send(Method::DELETE, &format!("/events/{id}"), token)
            .await?;
        Ok(())
    }
}
