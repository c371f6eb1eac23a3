//! In-memory [`Backend`] and harness for controller tests.
//!
//! [`FakeBackend`] keeps people, relationships and events in vectors and
//! answers like the real server would. Every call is recorded, and every
//! call yields once before answering, so a test can interleave a navigation
//! with an in-flight request using `tokio::join!`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use api::{
    Backend, Credentials, Error, Event, EventId, EventInput, HealthStatus, LoginGrant, Person,
    PersonId, PersonInput, ProfileUpdate, Registration, RelationType, Relationship,
    RelationshipId, RelationshipInput, Result, UserInfo,
};
use store::{AppConfig, KeyValueStore, MemoryStore, AUTH_TOKEN_KEY};

use super::App;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Health,
    Register(String),
    Login(String),
    Logout,
    CurrentUser,
    UpdateProfile {
        full_name: String,
        password: Option<String>,
    },
    ListPeople,
    GetPerson(PersonId),
    CreatePerson(PersonInput),
    UpdatePerson(PersonId, PersonInput),
    DeletePerson(PersonId),
    RelationshipTypes,
    ListRelationships,
    GetRelationship(RelationshipId),
    CreateRelationship(RelationshipInput),
    UpdateRelationship(RelationshipId, RelationshipInput),
    DeleteRelationship(RelationshipId),
    ListEvents,
    GetEvent(EventId),
    CreateEvent(EventInput),
    UpdateEvent(EventId, EventInput),
    DeleteEvent(EventId),
}

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    tokens: Vec<Option<String>>,
    failures: HashMap<&'static str, Error>,
    user: Option<UserInfo>,
    people: Vec<Person>,
    relationships: Vec<Relationship>,
    events: Vec<Event>,
    types: Option<Vec<RelationType>>,
    next_id: i64,
}

/// Shared handle; clones see the same data and call log.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Rc<RefCell<Inner>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    /// Number of recorded calls matching `wanted`.
    pub fn count(&self, wanted: impl Fn(&Call) -> bool) -> usize {
        self.inner.borrow().calls.iter().filter(|c| wanted(c)).count()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.inner.borrow().tokens.clone()
    }

    /// Make the next call of `op` fail with `err`.
    pub fn fail(&self, op: &'static str, err: Error) {
        self.inner.borrow_mut().failures.insert(op, err);
    }

    pub fn add_person(&self, person: Person) {
        self.inner.borrow_mut().people.push(person);
    }

    pub fn add_relationship(&self, relationship: Relationship) {
        self.inner.borrow_mut().relationships.push(relationship);
    }

    pub fn add_event(&self, event: Event) {
        self.inner.borrow_mut().events.push(event);
    }

    pub fn people(&self) -> Vec<Person> {
        self.inner.borrow().people.clone()
    }

    pub fn set_types(&self, types: Vec<RelationType>) {
        self.inner.borrow_mut().types = Some(types);
    }

    pub fn script_login(&self, result: Result<UserInfo>) {
        self.script("login", result);
    }

    pub fn script_current_user(&self, result: Result<UserInfo>) {
        self.script("current_user", result);
    }

    pub fn script_update_profile(&self, result: Result<UserInfo>) {
        self.script("update_profile", result);
    }

    pub fn script_register(&self, result: Result<()>) {
        if let Err(e) = result {
            self.fail("register", e);
        }
    }

    pub fn script_logout(&self, result: Result<()>) {
        if let Err(e) = result {
            self.fail("logout", e);
        }
    }

    fn script(&self, op: &'static str, result: Result<UserInfo>) {
        match result {
            Ok(user) => self.inner.borrow_mut().user = Some(user),
            Err(e) => self.fail(op, e),
        }
    }

    async fn enter(&self, op: &'static str, token: Option<&str>, call: Call) -> Result<()> {
        {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push(call);
            inner.tokens.push(token.map(str::to_string));
        }
        tokio::task::yield_now().await;
        match self.inner.borrow_mut().failures.remove(op) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn current_user_info(&self) -> UserInfo {
        self.inner.borrow().user.clone().unwrap_or_else(user)
    }

    fn next_id(&self) -> i64 {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        100 + inner.next_id
    }
}

impl Backend for FakeBackend {
    async fn health(&self) -> Result<HealthStatus> {
        self.enter("health", None, Call::Health).await?;
        Ok(HealthStatus {
            message: "API is running".into(),
            database: "connected".into(),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        self.enter("register", None, Call::Register(registration.username.clone()))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant> {
        self.enter("login", None, Call::Login(credentials.username.clone()))
            .await?;
        Ok(LoginGrant {
            token: "tok-new".into(),
            user: self.current_user_info(),
        })
    }

    async fn logout(&self, token: Option<&str>) -> Result<()> {
        self.enter("logout", token, Call::Logout).await
    }

    async fn current_user(&self, token: Option<&str>) -> Result<UserInfo> {
        self.enter("current_user", token, Call::CurrentUser).await?;
        Ok(self.current_user_info())
    }

    async fn update_profile(&self, token: Option<&str>, update: &ProfileUpdate) -> Result<UserInfo> {
        let call = Call::UpdateProfile {
            full_name: update.full_name.clone(),
            password: update.password.clone(),
        };
        self.enter("update_profile", token, call).await?;
        Ok(self.current_user_info())
    }

    async fn list_people(&self, token: Option<&str>) -> Result<Vec<Person>> {
        self.enter("list_people", token, Call::ListPeople).await?;
        Ok(self.people())
    }

    async fn get_person(&self, token: Option<&str>, id: PersonId) -> Result<Person> {
        self.enter("get_person", token, Call::GetPerson(id)).await?;
        self.people()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::Application("Person not found".into()))
    }

    async fn create_person(&self, token: Option<&str>, input: &PersonInput) -> Result<Option<PersonId>> {
        self.enter("create_person", token, Call::CreatePerson(input.clone()))
            .await?;
        let id = self.next_id();
        self.add_person(Person {
            id,
            given_name: input.given_name.clone(),
            family_name: input.family_name.clone(),
            birth_date: input.birth_date.clone(),
            death_date: input.death_date.clone(),
            ..Default::default()
        });
        Ok(Some(id))
    }

    async fn update_person(&self, token: Option<&str>, id: PersonId, input: &PersonInput) -> Result<()> {
        self.enter("update_person", token, Call::UpdatePerson(id, input.clone()))
            .await
    }

    async fn delete_person(&self, token: Option<&str>, id: PersonId) -> Result<()> {
        self.enter("delete_person", token, Call::DeletePerson(id))
            .await?;
        self.inner.borrow_mut().people.retain(|p| p.id != id);
        Ok(())
    }

    async fn relationship_types(&self, token: Option<&str>) -> Result<Vec<RelationType>> {
        self.enter("relationship_types", token, Call::RelationshipTypes)
            .await?;
        Ok(self
            .inner
            .borrow()
            .types
            .clone()
            .unwrap_or_else(|| RelationType::ALL.to_vec()))
    }

    async fn list_relationships(&self, token: Option<&str>) -> Result<Vec<Relationship>> {
        self.enter("list_relationships", token, Call::ListRelationships)
            .await?;
        Ok(self.inner.borrow().relationships.clone())
    }

    async fn get_relationship(&self, token: Option<&str>, id: RelationshipId) -> Result<Relationship> {
        self.enter("get_relationship", token, Call::GetRelationship(id))
            .await?;
        self.inner
            .borrow()
            .relationships
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::Application("Relationship not found".into()))
    }

    async fn create_relationship(
        &self,
        token: Option<&str>,
        input: &RelationshipInput,
    ) -> Result<Option<RelationshipId>> {
        self.enter(
            "create_relationship",
            token,
            Call::CreateRelationship(input.clone()),
        )
        .await?;
        let id = self.next_id();
        self.add_relationship(Relationship {
            id,
            person1_id: input.person1_id,
            person2_id: input.person2_id,
            kind: Some(input.kind),
            details: input.details.clone(),
            ..Default::default()
        });
        Ok(Some(id))
    }

    async fn update_relationship(
        &self,
        token: Option<&str>,
        id: RelationshipId,
        input: &RelationshipInput,
    ) -> Result<()> {
        self.enter(
            "update_relationship",
            token,
            Call::UpdateRelationship(id, input.clone()),
        )
        .await
    }

    async fn delete_relationship(&self, token: Option<&str>, id: RelationshipId) -> Result<()> {
        self.enter("delete_relationship", token, Call::DeleteRelationship(id))
            .await?;
        self.inner.borrow_mut().relationships.retain(|r| r.id != id);
        Ok(())
    }

    async fn list_events(&self, token: Option<&str>) -> Result<Vec<Event>> {
        self.enter("list_events", token, Call::ListEvents).await?;
        Ok(self.inner.borrow().events.clone())
    }

    async fn get_event(&self, token: Option<&str>, id: EventId) -> Result<Event> {
        self.enter("get_event", token, Call::GetEvent(id)).await?;
        self.inner
            .borrow()
            .events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Error::Application("Event not found".into()))
    }

    async fn create_event(&self, token: Option<&str>, input: &EventInput) -> Result<Option<EventId>> {
        self.enter("create_event", token, Call::CreateEvent(input.clone()))
            .await?;
        let id = self.next_id();
        self.add_event(Event {
            id,
            created_by: Some(input.created_by),
            title: input.title.clone(),
            event_date: input.event_date.clone(),
            ..Default::default()
        });
        Ok(Some(id))
    }

    async fn update_event(&self, token: Option<&str>, id: EventId, input: &EventInput) -> Result<()> {
        self.enter("update_event", token, Call::UpdateEvent(id, input.clone()))
            .await
    }

    async fn delete_event(&self, token: Option<&str>, id: EventId) -> Result<()> {
        self.enter("delete_event", token, Call::DeleteEvent(id))
            .await?;
        self.inner.borrow_mut().events.retain(|e| e.id != id);
        Ok(())
    }
}

pub type TestApp = App<FakeBackend, MemoryStore, Rc<RefCell<AppState>>>;

pub struct Harness {
    pub app: TestApp,
    pub backend: FakeBackend,
    pub storage: MemoryStore,
}

pub fn user() -> UserInfo {
    UserInfo {
        id: 1,
        username: "ada".into(),
        full_name: Some("Ada King".into()),
        email: Some("ada@example.org".into()),
    }
}

pub fn person(id: PersonId, given: &str, family: &str) -> Person {
    Person {
        id,
        given_name: given.into(),
        family_name: family.into(),
        ..Default::default()
    }
}

pub fn harness() -> Harness {
    let backend = FakeBackend::default();
    let storage = MemoryStore::new();
    let state = Rc::new(RefCell::new(AppState::default()));
    let config = AppConfig::default().without_redirect_delay();
    let app = App::new(backend.clone(), storage.clone(), state, config);
    Harness {
        app,
        backend,
        storage,
    }
}

pub fn harness_with_token(token: &str) -> Harness {
    let h = harness();
    h.storage
        .set(AUTH_TOKEN_KEY, token)
        .expect("memory store accepts writes");
    h
}

/// A harness with a restored session for token `tok-1`.
pub async fn signed_in() -> Harness {
    let h = harness_with_token("tok-1");
    assert!(h.app.restore().await);
    h
}
