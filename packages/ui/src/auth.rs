//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use crate::app::{use_app, AppContext};
use crate::session::{self, Session};

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that manages the session.
/// Wrap your app with this component (inside the app context) to enable
/// authentication. The session is restored from storage on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let app = use_app();
    let auth_state = use_signal(|| Session::restore(app.client.store()));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Log in through the API and publish the new session.
pub async fn sign_in(
    app: &AppContext,
    mut auth: Signal<Session>,
    email: &str,
    password: &str,
) -> Result<(), String> {
    let session = session::login(&app.client, app.client.store(), email, password).await?;
    auth.set(session);
    Ok(())
}

/// Drop the session. Storage is cleared before this returns.
pub fn sign_out(app: &AppContext, mut auth: Signal<Session>) {
    auth.set(session::logout(app.client.store()));
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logged_out: EventHandler<()>,
    #[props(default)] children: Element,
) -> Element {
    let app = use_app();
    let auth_state = use_auth();

    let onclick = move |_| {
        sign_out(&app, auth_state);
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            {children}
            "{label}"
        }
    }
}
