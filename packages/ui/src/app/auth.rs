//! Session lifecycle and profile.

use api::{Backend, Credentials, Error, Registration};
use store::KeyValueStore;

use super::App;
use crate::platform;
use crate::state::{AppState, AuthTab, MessageArea, MessageKind, Screen, StateHandle};

impl<B, S, H> App<B, S, H>
where
    B: Backend,
    S: KeyValueStore,
    H: StateHandle,
{
    /// Startup sequence: health check, then session restore.
    pub async fn start(&self) {
        self.check_health().await;
        self.restore().await;
    }

    pub async fn check_health(&self) {
        let online = match self.backend.health().await {
            Ok(status) => {
                tracing::debug!(database = %status.database, "API healthy");
                true
            }
            Err(e) => {
                tracing::warn!("API health check failed: {e}");
                false
            }
        };
        self.edit(|s| s.online = Some(online));
    }

    /// Validate the persisted token and enter the home screen if it holds.
    ///
    /// A rejected token is cleared. A connection failure leaves it in place
    /// so a reload can try again.
    pub async fn restore(&self) -> bool {
        let Some(token) = self.session.token() else {
            self.edit(|s| {
                s.restoring = false;
                s.navigate(Screen::Auth);
            });
            return false;
        };

        match self.backend.current_user(Some(&token)).await {
            Ok(user) => {
                tracing::info!(user = %user.username, "session restored");
                self.edit(|s| {
                    s.begin_session(token, user);
                    s.navigate(Screen::Home);
                });
                true
            }
            Err(Error::Connection(e)) => {
                tracing::warn!("could not validate stored session: {e}");
                self.edit(|s| {
                    s.restoring = false;
                    s.navigate(Screen::Auth);
                });
                false
            }
            Err(e) => {
                tracing::info!("stored session rejected: {e}");
                self.session.clear();
                self.edit(|s| {
                    s.restoring = false;
                    s.navigate(Screen::Auth);
                });
                false
            }
        }
    }

    pub fn show_auth_tab(&self, tab: AuthTab) {
        self.edit(|s| s.show_auth_tab(tab));
    }

    pub async fn login(&self) {
        let credentials = self.read(|s| Credentials {
            username: s.login.username.trim().to_string(),
            password: s.login.password.clone(),
        });

        match self.backend.login(&credentials).await {
            Ok(grant) => {
                tracing::info!(user = %grant.user.username, "logged in");
                self.session.save_token(&grant.token);
                self.edit(|s| {
                    s.begin_session(grant.token, grant.user);
                    s.messages.clear(MessageArea::Auth);
                    s.navigate(Screen::Home);
                });
            }
            Err(e) => {
                tracing::warn!("login failed: {e}");
                self.flash(MessageArea::Auth, MessageKind::Error, e.to_string());
            }
        }
    }

    /// Create an account, then switch to the login tab with the username filled in.
    pub async fn register(&self) {
        let registration = self.read(|s| Registration {
            username: s.register.username.trim().to_string(),
            password: s.register.password.clone(),
            email: s.register.email.trim().to_string(),
            full_name: s.register.full_name.trim().to_string(),
        });

        if let Err(e) = self.backend.register(&registration).await {
            tracing::warn!("registration failed: {e}");
            self.flash(MessageArea::Auth, MessageKind::Error, e.to_string());
            return;
        }

        tracing::info!(user = %registration.username, "registered");
        self.success(MessageArea::Auth, "Registration successful. Please login.");
        let ticket = self.ticket();
        platform::sleep(self.config.messages.register_redirect()).await;

        self.edit(|s| {
            if s.is_current(ticket) && s.auth_tab == AuthTab::Register {
                s.auth_tab = AuthTab::Login;
                s.register.reset();
                s.login.username = registration.username;
                s.login.password.clear();
            }
        });
    }

    /// Log out locally whatever the server says.
    pub async fn logout(&self) {
        let token = self.token();
        if let Err(e) = self.backend.logout(token.as_deref()).await {
            tracing::warn!("logout request failed: {e}");
        }
        self.session.clear();
        self.edit(AppState::end_session);
        tracing::info!("logged out");
    }

    pub fn toggle_profile(&self) {
        self.edit(AppState::toggle_profile);
    }

    pub async fn save_profile(&self) {
        let update = self.edit(|s| {
            if s.profile.submitting {
                return None;
            }
            s.profile.submitting = true;
            Some(s.profile.to_update())
        });
        let Some(update) = update else {
            return;
        };

        let result = self
            .backend
            .update_profile(self.token().as_deref(), &update)
            .await;
        self.edit(|s| s.profile.submitting = false);

        match result {
            Ok(user) => {
                tracing::info!("profile updated");
                let ticket = self.edit(|s| {
                    s.session.user = Some(user);
                    s.profile.password.clear();
                    if s.screen == Screen::Profile {
                        s.toggle_profile();
                    }
                    s.ticket()
                });
                if ticket.screen() == Screen::Home {
                    let ttl = self.config.messages.profile_timeout();
                    self.edit(|s| {
                        s.messages.show(
                            MessageArea::Main,
                            MessageKind::Success,
                            "Profile updated successfully",
                            ttl,
                        )
                    });
                }
            }
            Err(e) => self.report(MessageArea::Profile, false, &e),
        }
    }
}
