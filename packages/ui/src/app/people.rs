//! People: list, detail, editor.

use std::future::Future;

use api::{Backend, PersonId};
use store::KeyValueStore;

use super::App;
use crate::state::{ListState, MessageArea, MessageKind, PersonOption, PersonSlot, Screen, StateHandle};

impl<B, S, H> App<B, S, H>
where
    B: Backend,
    S: KeyValueStore,
    H: StateHandle,
{
    pub fn show_home(&self) {
        self.edit(|s| s.navigate(Screen::Home));
    }

    /// Open a blank person editor.
    pub fn show_add_person(&self) {
        self.edit(|s| {
            s.person.reset();
            s.navigate(Screen::PersonForm);
        });
    }

    /// Leave a relationship or event editor to create a person for `slot`.
    pub fn add_person_for(&self, slot: PersonSlot) {
        self.edit(|s| {
            s.person.reset();
            s.navigate(Screen::PersonForm);
            s.person_return = Some(slot);
        });
    }

    pub async fn show_people(&self) {
        self.edit(|s| s.navigate(Screen::PeopleList));
        self.load_people().await;
    }

    pub async fn load_people(&self) {
        let ticket = self.edit(|s| {
            s.people = ListState::Loading;
            s.ticket()
        });
        let result = self.backend.list_people(self.token().as_deref()).await;
        match result {
            Ok(people) => self.edit(|s| {
                if s.is_current(ticket) {
                    s.people = ListState::Loaded(people);
                }
            }),
            Err(e) if e.is_auth() => self.expire_session(e.message()),
            Err(e) => {
                tracing::warn!("failed to load people: {e}");
                self.edit(|s| {
                    if s.is_current(ticket) {
                        s.people = ListState::Failed(e.to_string());
                    }
                });
            }
        }
    }

    pub async fn view_person(&self, id: PersonId) {
        let ticket = self.ticket();
        match self.backend.get_person(self.token().as_deref(), id).await {
            Ok(person) => self.edit(|s| {
                if s.is_current(ticket) {
                    s.viewed_person = Some(person);
                    s.navigate(Screen::PersonView);
                }
            }),
            Err(e) => self.report(MessageArea::Main, true, &e),
        }
    }

    /// Fetch the person, then open the editor in edit mode.
    pub async fn edit_person(&self, id: PersonId) {
        let ticket = self.ticket();
        match self.backend.get_person(self.token().as_deref(), id).await {
            Ok(person) => self.edit(|s| {
                if s.is_current(ticket) {
                    s.person.populate(&person);
                    s.navigate(Screen::PersonForm);
                }
            }),
            Err(e) => self.report(MessageArea::Main, true, &e),
        }
    }

    pub async fn submit_person(&self) {
        let prepared = self.edit(|s| {
            if s.person.submitting {
                return None;
            }
            let prepared = s.person.to_input().map(|input| (s.person.submit_target(), input));
            if prepared.is_ok() {
                s.person.submitting = true;
            }
            Some(prepared)
        });
        let (target, input) = match prepared {
            None => return,
            Some(Err(e)) => {
                self.flash(MessageArea::Main, MessageKind::Error, e.to_string());
                return;
            }
            Some(Ok(prepared)) => prepared,
        };

        let ticket = self.ticket();
        let token = self.token();
        let result = match target {
            Some(id) => self
                .backend
                .update_person(token.as_deref(), id, &input)
                .await
                .map(|()| Some(id)),
            None => self.backend.create_person(token.as_deref(), &input).await,
        };
        self.edit(|s| s.person.submitting = false);

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                self.report(MessageArea::Main, true, &e);
                return;
            }
        };
        let text = if target.is_some() {
            "Person updated successfully"
        } else {
            "Person added successfully"
        };
        tracing::info!(id = ?saved, "person saved");

        if !self.is_current(ticket) {
            self.success(MessageArea::Main, text);
            return;
        }

        let slot = self.edit(|s| {
            s.person.reset();
            s.person_return.take()
        });
        match slot {
            Some(slot) => {
                self.return_to_origin(slot, saved).await;
                self.success(slot.origin().message_area(), text);
            }
            None => {
                self.edit(|s| s.navigate(Screen::PeopleList));
                self.success(MessageArea::Main, text);
                self.load_people().await;
            }
        }
    }

    /// Leave the editor without saving.
    pub fn cancel_person(&self) {
        let slot = self.edit(|s| {
            s.person.reset();
            s.person_return.take()
        });
        match slot {
            Some(slot) => self.edit(|s| {
                s.navigate(slot.origin());
            }),
            None => self.show_home(),
        }
    }

    pub async fn delete_person(&self, id: PersonId, confirmation: impl Future<Output = bool>) {
        if !self.confirmed(confirmation).await {
            return;
        }
        match self.backend.delete_person(self.token().as_deref(), id).await {
            Ok(()) => {
                tracing::info!(id, "person deleted");
                self.edit(|s| {
                    if s.viewed_person.as_ref().is_some_and(|p| p.id == id) {
                        s.viewed_person = None;
                    }
                    if s.screen == Screen::PersonView {
                        s.navigate(Screen::PeopleList);
                    }
                });
                self.success(MessageArea::Main, "Person deleted successfully");
                self.load_people().await;
            }
            Err(e) => self.report(MessageArea::Main, true, &e),
        }
    }

    /// Refresh the person selectors of the relationship and event editors.
    pub async fn load_person_options(&self, area: MessageArea) {
        let ticket = self.ticket();
        match self.backend.list_people(self.token().as_deref()).await {
            Ok(people) => self.edit(|s| {
                if s.is_current(ticket) {
                    s.person_options = PersonOption::from_people(&people);
                }
            }),
            Err(e) => self.report(area, false, &e),
        }
    }

    pub fn select_person(&self, slot: PersonSlot, id: Option<PersonId>) {
        self.edit(|s| slot.select(s, id));
    }

    /// Back to the editor that asked for a new person, with it selected.
    async fn return_to_origin(&self, slot: PersonSlot, saved: Option<PersonId>) {
        self.edit(|s| {
            s.navigate(slot.origin());
        });
        self.load_person_options(slot.origin().message_area()).await;
        if let Some(id) = saved {
            self.select_person(slot, Some(id));
        }
    }
}
