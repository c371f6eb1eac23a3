//! Relationships: list and editor.

use std::future::Future;

use api::{Backend, RelationType, RelationshipId};
use store::KeyValueStore;

use super::App;
use crate::state::{ListState, MessageArea, MessageKind, Screen, StateHandle};

impl<B, S, H> App<B, S, H>
where
    B: Backend,
    S: KeyValueStore,
    H: StateHandle,
{
    pub async fn show_add_relationship(&self) {
        self.edit(|s| {
            s.relationship.reset();
            s.navigate(Screen::RelationshipsForm);
        });
        self.load_relationship_choices().await;
    }

    pub async fn show_relationships(&self) {
        self.edit(|s| s.navigate(Screen::RelationshipsList));
        self.load_relationships().await;
    }

    /// Person options and relation types for the editor.
    async fn load_relationship_choices(&self) {
        self.load_person_options(MessageArea::Relationships).await;
        self.load_relation_types().await;
    }

    /// Relation types from the server, or the fixed list if that fails.
    pub async fn load_relation_types(&self) {
        let ticket = self.ticket();
        let types = match self
            .backend
            .relationship_types(self.token().as_deref())
            .await
        {
            Ok(types) if !types.is_empty() => types,
            Ok(_) => RelationType::ALL.to_vec(),
            Err(e) => {
                tracing::debug!("using built-in relation types: {e}");
                RelationType::ALL.to_vec()
            }
        };
        self.edit(|s| {
            if s.is_current(ticket) {
                s.relation_types = types;
            }
        });
    }

    pub async fn load_relationships(&self) {
        let ticket = self.edit(|s| {
            s.relationships = ListState::Loading;
            s.ticket()
        });
        match self
            .backend
            .list_relationships(self.token().as_deref())
            .await
        {
            Ok(rows) => self.edit(|s| {
                if s.is_current(ticket) {
                    s.relationships = ListState::Loaded(rows);
                }
            }),
            Err(e) if e.is_auth() => self.expire_session(e.message()),
            Err(e) => {
                tracing::warn!("failed to load relationships: {e}");
                self.edit(|s| {
                    if s.is_current(ticket) {
                        s.relationships = ListState::Failed(e.to_string());
                    }
                });
            }
        }
    }

    pub async fn edit_relationship(&self, id: RelationshipId) {
        let ticket = self.ticket();
        let result = self
            .backend
            .get_relationship(self.token().as_deref(), id)
            .await;
        match result {
            Ok(relationship) => {
                let opened = self.edit(|s| {
                    if !s.is_current(ticket) {
                        return false;
                    }
                    s.relationship.populate(&relationship);
                    s.navigate(Screen::RelationshipsForm);
                    true
                });
                if opened {
                    self.load_relationship_choices().await;
                }
            }
            Err(e) => self.report(MessageArea::Relationships, false, &e),
        }
    }

    pub async fn submit_relationship(&self) {
        let prepared = self.edit(|s| {
            if s.relationship.submitting {
                return None;
            }
            let prepared = s
                .relationship
                .to_input()
                .map(|input| (s.relationship.submit_target(), input));
            if prepared.is_ok() {
                s.relationship.submitting = true;
            }
            Some(prepared)
        });
        let (target, input) = match prepared {
            None => return,
            Some(Err(e)) => {
                self.flash(MessageArea::Relationships, MessageKind::Error, e.to_string());
                return;
            }
            Some(Ok(prepared)) => prepared,
        };

        let ticket = self.ticket();
        let token = self.token();
        let result = match target {
            Some(id) => {
                self.backend
                    .update_relationship(token.as_deref(), id, &input)
                    .await
            }
            None => self
                .backend
                .create_relationship(token.as_deref(), &input)
                .await
                .map(|_| ()),
        };
        self.edit(|s| s.relationship.submitting = false);

        if let Err(e) = result {
            self.report(MessageArea::Relationships, false, &e);
            return;
        }
        let text = if target.is_some() {
            "Relationship updated successfully"
        } else {
            "Relationship added successfully"
        };
        tracing::info!(?target, "relationship saved");
        self.success(MessageArea::Relationships, text);

        let proceed = self.edit(|s| {
            if !s.is_current(ticket) {
                return false;
            }
            s.relationship.reset();
            s.navigate(Screen::RelationshipsList);
            true
        });
        if proceed {
            self.load_relationships().await;
        }
    }

    pub async fn delete_relationship(
        &self,
        id: RelationshipId,
        confirmation: impl Future<Output = bool>,
    ) {
        if !self.confirmed(confirmation).await {
            return;
        }
        match self
            .backend
            .delete_relationship(self.token().as_deref(), id)
            .await
        {
            Ok(()) => {
                tracing::info!(id, "relationship deleted");
                self.success(MessageArea::Relationships, "Relationship deleted successfully");
                self.load_relationships().await;
            }
            Err(e) => self.report(MessageArea::Relationships, false, &e),
        }
    }
}
