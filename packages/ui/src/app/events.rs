//! Life events: list and editor.

use std::future::Future;

use api::{Backend, EventId};
use store::KeyValueStore;

use super::App;
use crate::state::{ListState, MessageArea, MessageKind, Screen, StateHandle};

impl<B, S, H> App<B, S, H>
where
    B: Backend,
    S: KeyValueStore,
    H: StateHandle,
{
    pub async fn show_add_event(&self) {
        self.edit(|s| {
            s.event.reset();
            s.navigate(Screen::EventsForm);
        });
        self.load_person_options(MessageArea::Events).await;
    }

    pub async fn show_events(&self) {
        self.edit(|s| s.navigate(Screen::EventsList));
        self.load_events().await;
    }

    pub async fn load_events(&self) {
        let ticket = self.edit(|s| {
            s.events = ListState::Loading;
            s.ticket()
        });
        match self.backend.list_events(self.token().as_deref()).await {
            Ok(events) => self.edit(|s| {
                if s.is_current(ticket) {
                    s.events = ListState::Loaded(events);
                }
            }),
            Err(e) if e.is_auth() => self.expire_session(e.message()),
            Err(e) => {
                tracing::warn!("failed to load events: {e}");
                self.edit(|s| {
                    if s.is_current(ticket) {
                        s.events = ListState::Failed(e.to_string());
                    }
                });
            }
        }
    }

    pub async fn edit_event(&self, id: EventId) {
        let ticket = self.ticket();
        match self.backend.get_event(self.token().as_deref(), id).await {
            Ok(event) => {
                let opened = self.edit(|s| {
                    if !s.is_current(ticket) {
                        return false;
                    }
                    s.event.populate(&event);
                    s.navigate(Screen::EventsForm);
                    true
                });
                if opened {
                    self.load_person_options(MessageArea::Events).await;
                }
            }
            Err(e) => self.report(MessageArea::Events, false, &e),
        }
    }

    pub async fn submit_event(&self) {
        let prepared = self.edit(|s| {
            if s.event.submitting {
                return None;
            }
            let prepared = s.event.to_input().map(|input| (s.event.submit_target(), input));
            if prepared.is_ok() {
                s.event.submitting = true;
            }
            Some(prepared)
        });
        let (target, input) = match prepared {
            None => return,
            Some(Err(e)) => {
                self.flash(MessageArea::Events, MessageKind::Error, e.to_string());
                return;
            }
            Some(Ok(prepared)) => prepared,
        };

        let ticket = self.ticket();
        let token = self.token();
        let result = match target {
            Some(id) => self.backend.update_event(token.as_deref(), id, &input).await,
            None => self
                .backend
                .create_event(token.as_deref(), &input)
                .await
                .map(|_| ()),
        };
        self.edit(|s| s.event.submitting = false);

        if let Err(e) = result {
            self.report(MessageArea::Events, false, &e);
            return;
        }
        let text = if target.is_some() {
            "Event updated successfully"
        } else {
            "Event added successfully"
        };
        tracing::info!(?target, "event saved");
        self.success(MessageArea::Events, text);

        let proceed = self.edit(|s| {
            if !s.is_current(ticket) {
                return false;
            }
            s.event.reset();
            s.navigate(Screen::EventsList);
            true
        });
        if proceed {
            self.load_events().await;
        }
    }

    pub async fn delete_event(&self, id: EventId, confirmation: impl Future<Output = bool>) {
        if !self.confirmed(confirmation).await {
            return;
        }
        match self.backend.delete_event(self.token().as_deref(), id).await {
            Ok(()) => {
                tracing::info!(id, "event deleted");
                self.success(MessageArea::Events, "Event deleted successfully");
                self.load_events().await;
            }
            Err(e) => self.report(MessageArea::Events, false, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use api::{Error, Event};

    use crate::app::testing::{person, signed_in, Call};
    use crate::state::{EditMode, MessageArea, Screen};

    fn wedding(id: i64) -> Event {
        Event {
            id,
            created_by: Some(1),
            person_name: "Ann Roe".into(),
            title: "Wedding".into(),
            event_date: Some("1925-06-01T00:00:00".into()),
            place: "Leeds".into(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_event_requires_person_and_title() {
        let h = signed_in().await;
        h.app.show_add_event().await;
        h.app.edit(|s| s.event.title = "Baptism".into());
        let before = h.backend.calls().len();

        h.app.submit_event().await;

        assert_eq!(h.backend.calls().len(), before);
        h.app.read(|s| {
            assert_eq!(
                s.messages.get(MessageArea::Events).unwrap().text,
                "Person and title are required"
            );
        });
    }

    #[tokio::test]
    async fn test_create_event_goes_to_list() {
        let h = signed_in().await;
        h.backend.add_person(person(1, "Ann", "Roe"));
        h.app.show_add_event().await;
        h.app.edit(|s| {
            s.event.person = Some(1);
            s.event.title = "Baptism".into();
        });

        h.app.submit_event().await;

        h.app.read(|s| {
            assert_eq!(s.screen, Screen::EventsList);
            assert_eq!(s.events.items().len(), 1);
            assert_eq!(
                s.messages.get(MessageArea::Events).unwrap().text,
                "Event added successfully"
            );
        });
    }

    #[tokio::test]
    async fn test_edit_event_truncates_date_and_updates() {
        let h = signed_in().await;
        h.backend.add_event(wedding(5));

        h.app.edit_event(5).await;
        h.app.read(|s| {
            assert_eq!(s.event.mode, EditMode::Edit(5));
            assert_eq!(s.event.event_date, "1925-06-01");
        });
        h.app.submit_event().await;

        assert_eq!(
            h.backend.count(|c| matches!(c, Call::UpdateEvent(5, _))),
            1
        );
        h.app.read(|s| assert_eq!(s.event.mode, EditMode::Create));
    }

    #[tokio::test]
    async fn test_add_after_edit_creates_new_event() {
        let h = signed_in().await;
        h.backend.add_event(wedding(5));

        h.app.edit_event(5).await;
        h.app.read(|s| assert_eq!(s.event.mode, EditMode::Edit(5)));

        h.app.show_add_event().await;
        h.app.read(|s| {
            assert_eq!(s.event.mode, EditMode::Create);
            assert!(s.event.title.is_empty());
        });
        h.app.edit(|s| {
            s.event.person = Some(1);
            s.event.title = "Baptism".into();
        });
        h.app.submit_event().await;

        let creates = h.backend.count(|c| matches!(c, Call::CreateEvent(_)));
        let updates = h.backend.count(|c| matches!(c, Call::UpdateEvent(..)));
        assert_eq!((creates, updates), (1, 0));
    }

    #[tokio::test]
    async fn test_edit_missing_event_reports_error() {
        let h = signed_in().await;
        h.app.show_events().await;

        h.app.edit_event(42).await;

        h.app.read(|s| {
            assert_eq!(s.screen, Screen::EventsList);
            assert_eq!(
                s.messages.get(MessageArea::Events).unwrap().text,
                "Event not found"
            );
        });
    }

    #[tokio::test]
    async fn test_delete_event_failure_keeps_list() {
        let h = signed_in().await;
        h.backend.add_event(wedding(5));
        h.app.show_events().await;
        h.backend
            .fail("delete_event", Error::Connection("offline".into()));

        h.app.delete_event(5, ready(true)).await;

        h.app.read(|s| {
            assert_eq!(s.events.items().len(), 1);
            assert_eq!(
                s.messages.get(MessageArea::Events).unwrap().text,
                "Connection error: offline"
            );
        });
    }

    #[tokio::test]
    async fn test_delete_event_reloads() {
        let h = signed_in().await;
        h.backend.add_event(wedding(5));
        h.app.show_events().await;

        h.app.delete_event(5, ready(true)).await;

        assert_eq!(h.backend.count(|c| *c == Call::ListEvents), 2);
        h.app.read(|s| assert!(s.events.items().is_empty()));
    }
}
