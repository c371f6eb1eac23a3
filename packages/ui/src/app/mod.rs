//! # Application controller
//!
//! [`App`] turns user intents into API calls and API answers into state
//! changes. It is generic over the three seams the browser provides:
//!
//! | Parameter | Browser | Tests |
//! |-----------|---------|-------|
//! | `B: Backend` | [`api::ApiClient`] | a scripted fake |
//! | `S: KeyValueStore` | `sessionStorage` | [`store::MemoryStore`] |
//! | `H: StateHandle` | `Signal<AppState>` | `Rc<RefCell<AppState>>` |
//!
//! Operations are grouped by area: [`auth`] (session and profile),
//! [`people`], [`relationships`] and [`events`]. They all follow the same
//! shape: snapshot what is needed from the state, await the backend without
//! holding a borrow, then apply the result if the [`Ticket`] taken before the
//! await is still current.
//!
//! Any authentication rejection on a protected call ends the session and
//! returns to the auth screen.

mod auth;
mod events;
mod people;
mod relationships;

use std::future::Future;

use api::{Backend, Error};
use store::{AppConfig, KeyValueStore, SessionStore};

use crate::platform;
use crate::state::{AppState, MessageArea, MessageKind, StateHandle, Ticket};

pub struct App<B, S, H>
where
    B: Backend,
    S: KeyValueStore,
    H: StateHandle,
{
    backend: B,
    session: SessionStore<S>,
    state: H,
    config: AppConfig,
}

impl<B, S, H> App<B, S, H>
where
    B: Backend,
    S: KeyValueStore,
    H: StateHandle,
{
    pub fn new(backend: B, storage: S, state: H, config: AppConfig) -> Self {
        Self {
            backend,
            session: SessionStore::new(storage),
            state,
            config,
        }
    }

    pub fn session_store(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Apply a synchronous edit, e.g. a keystroke in a form field.
    pub fn edit<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        self.state.update_state(f)
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.read_state(f)
    }

    fn token(&self) -> Option<String> {
        self.read(|s| s.session.token.clone())
    }

    fn ticket(&self) -> Ticket {
        self.read(AppState::ticket)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.read(|s| s.is_current(ticket))
    }

    /// Show a message in `area`. The banner removes it via [`App::expire_message`].
    fn flash(&self, area: MessageArea, kind: MessageKind, text: impl Into<String>) -> u64 {
        let ttl = match area {
            MessageArea::Profile => self.config.messages.profile_timeout(),
            _ => self.config.messages.timeout(),
        };
        self.edit(|s| s.messages.show(area, kind, text, ttl))
    }

    fn success(&self, area: MessageArea, text: impl Into<String>) {
        self.flash(area, MessageKind::Success, text);
    }

    /// Remove message `id` from `area` once its time is up.
    pub async fn expire_message(&self, area: MessageArea, id: u64) {
        let ttl = self.read(|s| s.messages.get(area).filter(|f| f.id == id).map(|f| f.ttl));
        if let Some(ttl) = ttl {
            platform::sleep(ttl).await;
            self.edit(|s| s.messages.dismiss(area, id));
        }
    }

    /// Report a failed call in `area`.
    ///
    /// `prefixed` areas show server errors as "Error: <message>"; the others
    /// show the message as is. Connection errors always read
    /// "Connection error: <message>".
    fn report(&self, area: MessageArea, prefixed: bool, err: &Error) {
        if err.is_auth() {
            self.expire_session(err.message());
            return;
        }
        tracing::warn!(?area, "request failed: {err}");
        let text = match err {
            Error::Application(message) if prefixed => format!("Error: {message}"),
            other => other.to_string(),
        };
        self.flash(area, MessageKind::Error, text);
    }

    /// The server rejected our token: drop the session and ask for a login.
    fn expire_session(&self, message: &str) {
        tracing::info!("session rejected by server, logging out");
        self.session.clear();
        self.edit(AppState::end_session);
        let message = if message.is_empty() {
            "Session expired. Please login again."
        } else {
            message
        };
        self.flash(MessageArea::Auth, MessageKind::Error, message);
    }

    /// Await an interactive confirmation.
    async fn confirmed(&self, confirmation: impl Future<Output = bool>) -> bool {
        let answer = confirmation.await;
        if !answer {
            tracing::debug!("action cancelled by user");
        }
        answer
    }
}

#[cfg(test)]
pub(crate) mod testing;
