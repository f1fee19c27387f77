//! Route guard for pages that need a session.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

pub fn guard_decision(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Render `children` only while logged in; otherwise replace the current
/// route with `login_path`.
#[component]
pub fn RequireSession(
    children: Element,
    #[props(default = "/login".to_string())] login_path: String,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match guard_decision(&auth()) {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::RedirectToLogin => {
            nav.replace(login_path);
            rsx! {}
        }
    }
}
