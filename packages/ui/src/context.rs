//! Application context and event-handler helpers for the views.

use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use api::ApiClient;
use dioxus::prelude::*;
use store::AppConfig;

use crate::app::App;
use crate::platform::{self, PlatformStore};
use crate::state::AppState;

/// The controller as the browser runs it.
pub type WebApp = App<ApiClient, PlatformStore, Signal<AppState>>;
pub type SharedApp = Rc<WebApp>;

const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Get the application controller.
pub fn use_app() -> SharedApp {
    use_context::<SharedApp>()
}

/// Provider component that owns the state and the controller.
///
/// Wrap your app with this component. On mount it checks the API health,
/// restores the persisted session and keeps polling the health endpoint.
#[component]
pub fn AppProvider(config: AppConfig, children: Element) -> Element {
    let state = use_signal(AppState::default);

    let app = use_hook(move || {
        let root = platform::api_root(&config);
        tracing::info!(api = %root, "starting");
        let client = match ApiClient::new(root) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("cannot create API client: {e}");
                return Err(e.to_string());
            }
        };
        let app: SharedApp = Rc::new(App::new(client, platform::make_storage(), state, config));
        provide_context(app.clone());

        let startup = app.clone();
        spawn(async move {
            startup.start().await;
            loop {
                platform::sleep(HEALTH_CHECK_INTERVAL).await;
                startup.check_health().await;
            }
        });
        Ok(app)
    });

    match app {
        Ok(_) => rsx! {
            {children}
        },
        Err(message) => rsx! {
            div { class: "message error", "Cannot reach the API: {message}" }
        },
    }
}

/// Spawn an async controller action.
pub fn dispatch<F, Fut>(app: &SharedApp, action: F)
where
    F: FnOnce(SharedApp) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    spawn(action(app.clone()));
}

/// Click handler running a synchronous controller action.
pub fn click(app: &SharedApp, action: impl Fn(&WebApp) + 'static) -> impl FnMut(MouseEvent) + 'static {
    let app = app.clone();
    move |_| action(&app)
}

/// Click handler spawning an async controller action.
pub fn click_async<Fut>(
    app: &SharedApp,
    action: impl Fn(SharedApp) -> Fut + 'static,
) -> impl FnMut(MouseEvent) + 'static
where
    Fut: Future<Output = ()> + 'static,
{
    let app = app.clone();
    move |_| {
        spawn(action(app.clone()));
    }
}

/// Submit handler spawning an async controller action.
pub fn submit<Fut>(
    app: &SharedApp,
    action: impl Fn(SharedApp) -> Fut + 'static,
) -> impl FnMut(FormEvent) + 'static
where
    Fut: Future<Output = ()> + 'static,
{
    let app = app.clone();
    move |evt: FormEvent| {
        evt.prevent_default();
        spawn(action(app.clone()));
    }
}

/// Input handler writing the field value into the state.
pub fn bind(
    app: &SharedApp,
    set: impl Fn(&mut AppState, String) + 'static,
) -> impl FnMut(FormEvent) + 'static {
    let app = app.clone();
    move |evt: FormEvent| {
        let value = evt.value();
        app.edit(|s| set(s, value));
    }
}

/// Ask the user to confirm through the browser dialog.
pub async fn confirm(message: String) -> bool {
    let script = crate::markup::confirm_script(&message);
    match document::eval(&script).join::<bool>().await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("confirmation dialog failed: {e:?}");
            false
        }
    }
}
