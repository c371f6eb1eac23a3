//! Typed form view-models.
//!
//! Each editor keeps an [`EditMode`] and a separate `record_id` mirror of
//! the id being edited. Submission dispatches on the mode and falls back to
//! the mirror, so a form whose mode was lost still updates instead of
//! creating a duplicate.

use api::{
    Error, Event, EventId, EventInput, LifeStatus, Person, PersonId, PersonInput, ProfileUpdate,
    RelationType, Relationship, RelationshipId, RelationshipInput, UserInfo,
};

/// Whether an editor creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Create,
    Edit(i64),
}

impl EditMode {
    pub fn target(self) -> Option<i64> {
        match self {
            EditMode::Create => None,
            EditMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, EditMode::Edit(_))
    }
}

/// Value for an `<input type="date">`: everything before the first `T`.
pub fn date_input_value(value: Option<&str>) -> String {
    value
        .map(|v| v.split('T').next().unwrap_or(v).to_string())
        .unwrap_or_default()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}

impl RegisterForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    /// Left empty to keep the current password.
    pub password: String,
    pub submitting: bool,
}

impl ProfileForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn populate(&mut self, user: Option<&UserInfo>) {
        self.reset();
        if let Some(user) = user {
            self.full_name = user.full_name.clone().unwrap_or_default();
            self.email = user.email.clone().unwrap_or_default();
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate::new(self.full_name.clone(), self.email.clone(), &self.password)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub mode: EditMode,
    pub record_id: Option<PersonId>,
    pub given_name: String,
    pub family_name: String,
    pub other_names: String,
    pub gender: String,
    pub birth_date: String,
    pub death_date: String,
    pub birth_place: String,
    pub bio: String,
    pub relation: String,
    pub status: LifeStatus,
    pub submitting: bool,
}

impl PersonForm {
    /// Back to a blank "alive" person in create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn populate(&mut self, person: &Person) {
        *self = Self {
            mode: EditMode::Edit(person.id),
            record_id: Some(person.id),
            given_name: person.given_name.clone(),
            family_name: person.family_name.clone(),
            other_names: person.other_names.clone(),
            gender: person.gender.clone(),
            birth_date: date_input_value(person.birth_date.as_deref()),
            death_date: date_input_value(person.death_date.as_deref()),
            birth_place: person.birth_place.clone(),
            bio: person.bio.clone(),
            relation: person.relation.clone(),
            status: person.status(),
            submitting: false,
        };
    }

    /// Switching to alive hides and clears the death date.
    pub fn set_status(&mut self, status: LifeStatus) {
        self.status = status;
        if status == LifeStatus::Alive {
            self.death_date.clear();
        }
    }

    pub fn shows_death_date(&self) -> bool {
        self.status == LifeStatus::Deceased
    }

    pub fn submit_target(&self) -> Option<PersonId> {
        self.mode.target().or(self.record_id)
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit Person"
        } else {
            "Add New Person"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "Update Person"
        } else {
            "Add Person"
        }
    }

    pub fn to_input(&self) -> Result<PersonInput, Error> {
        if self.given_name.trim().is_empty() || self.family_name.trim().is_empty() {
            return Err(Error::Validation(
                "Given name and family name are required".into(),
            ));
        }
        let death_date = match self.status {
            LifeStatus::Alive => None,
            LifeStatus::Deceased => optional(&self.death_date),
        };
        Ok(PersonInput {
            given_name: self.given_name.trim().to_string(),
            family_name: self.family_name.trim().to_string(),
            other_names: self.other_names.trim().to_string(),
            gender: self.gender.clone(),
            birth_date: optional(&self.birth_date),
            death_date,
            birth_place: self.birth_place.trim().to_string(),
            bio: self.bio.trim().to_string(),
            relation: self.relation.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipForm {
    pub mode: EditMode,
    pub record_id: Option<RelationshipId>,
    pub person1: Option<PersonId>,
    pub person2: Option<PersonId>,
    pub kind: Option<RelationType>,
    pub details: String,
    pub submitting: bool,
}

impl RelationshipForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn populate(&mut self, relationship: &Relationship) {
        *self = Self {
            mode: EditMode::Edit(relationship.id),
            record_id: Some(relationship.id),
            person1: Some(relationship.person1_id),
            person2: Some(relationship.person2_id),
            kind: relationship.kind,
            details: relationship.details.clone(),
            submitting: false,
        };
    }

    pub fn submit_target(&self) -> Option<RelationshipId> {
        self.mode.target().or(self.record_id)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "Update Relationship"
        } else {
            "Add Relationship"
        }
    }

    pub fn to_input(&self) -> Result<RelationshipInput, Error> {
        match (self.person1, self.person2, self.kind) {
            (Some(person1_id), Some(person2_id), Some(kind)) => Ok(RelationshipInput {
                person1_id,
                person2_id,
                kind,
                details: self.details.trim().to_string(),
            }),
            _ => Err(Error::Validation(
                "Both people and relation are required".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub mode: EditMode,
    pub record_id: Option<EventId>,
    pub person: Option<PersonId>,
    pub title: String,
    pub event_date: String,
    pub place: String,
    pub description: String,
    pub submitting: bool,
}

impl EventForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn populate(&mut self, event: &Event) {
        *self = Self {
            mode: EditMode::Edit(event.id),
            record_id: Some(event.id),
            person: event.created_by,
            title: event.title.clone(),
            event_date: date_input_value(event.event_date.as_deref()),
            place: event.place.clone(),
            description: event.description.clone(),
            submitting: false,
        };
    }

    pub fn submit_target(&self) -> Option<EventId> {
        self.mode.target().or(self.record_id)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "Update Event"
        } else {
            "Add Event"
        }
    }

    pub fn to_input(&self) -> Result<EventInput, Error> {
        let title = self.title.trim();
        match self.person {
            Some(created_by) if !title.is_empty() => Ok(EventInput {
                created_by,
                title: title.to_string(),
                event_date: optional(&self.event_date),
                place: self.place.trim().to_string(),
                description: self.description.trim().to_string(),
            }),
            _ => Err(Error::Validation("Person and title are required".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deceased() -> Person {
        Person {
            id: 4,
            given_name: "Ann".into(),
            family_name: "Roe".into(),
            birth_date: Some("1901-05-02T00:00:00".into()),
            death_date: Some("1980-01-01".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_date_input_truncates_at_t() {
        assert_eq!(date_input_value(Some("1901-05-02T00:00:00Z")), "1901-05-02");
        assert_eq!(date_input_value(Some("1901-05-02")), "1901-05-02");
        assert_eq!(date_input_value(None), "");
    }

    #[test]
    fn test_populate_person_derives_status() {
        let mut form = PersonForm::default();
        form.populate(&deceased());

        assert_eq!(form.mode, EditMode::Edit(4));
        assert_eq!(form.birth_date, "1901-05-02");
        assert_eq!(form.status, LifeStatus::Deceased);
        assert!(form.shows_death_date());
        assert_eq!(form.submit_label(), "Update Person");
    }

    #[test]
    fn test_reset_after_edit_clears_target() {
        let mut form = PersonForm::default();
        form.populate(&deceased());
        form.reset();

        assert_eq!(form.submit_target(), None);
        assert_eq!(form.status, LifeStatus::Alive);
        assert!(!form.shows_death_date());
        assert_eq!(form.title(), "Add New Person");
    }

    #[test]
    fn test_record_id_is_the_fallback_target() {
        let form = PersonForm {
            record_id: Some(12),
            ..Default::default()
        };
        assert_eq!(form.submit_target(), Some(12));
    }

    #[test]
    fn test_alive_person_never_sends_death_date() {
        let mut form = PersonForm::default();
        form.populate(&deceased());
        form.set_status(LifeStatus::Alive);

        assert!(form.death_date.is_empty());
        assert_eq!(form.to_input().unwrap().death_date, None);
    }

    #[test]
    fn test_person_requires_both_names() {
        let form = PersonForm {
            given_name: "  ".into(),
            family_name: "Roe".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_input().unwrap_err().to_string(),
            "Given name and family name are required"
        );
    }

    #[test]
    fn test_relationship_requires_people_and_kind() {
        let mut form = RelationshipForm {
            person2: Some(2),
            kind: Some(RelationType::Mother),
            ..Default::default()
        };
        assert_eq!(
            form.to_input().unwrap_err(),
            Error::Validation("Both people and relation are required".into())
        );

        form.person1 = Some(1);
        let input = form.to_input().unwrap();
        assert_eq!(input.person1_id, 1);
        assert_eq!(input.kind, RelationType::Mother);
    }

    #[test]
    fn test_event_requires_person_and_title() {
        let mut form = EventForm {
            person: Some(3),
            title: " ".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_input().unwrap_err().to_string(),
            "Person and title are required"
        );

        form.title = "Baptism".into();
        form.event_date = "1950-06-01".into();
        let input = form.to_input().unwrap();
        assert_eq!(input.created_by, 3);
        assert_eq!(input.event_date.as_deref(), Some("1950-06-01"));
    }

    #[test]
    fn test_profile_update_skips_empty_password() {
        let mut form = ProfileForm::default();
        form.populate(Some(&UserInfo {
            id: 1,
            username: "ada".into(),
            full_name: None,
            email: Some("ada@example.org".into()),
        }));
        assert_eq!(form.email, "ada@example.org");
        assert_eq!(form.to_update().password, None);

        form.password = "s3cret".into();
        assert_eq!(form.to_update().password.as_deref(), Some("s3cret"));
    }
}
