//! # Session state and the operations that change it
//!
//! [`Session`] is the value held in the auth context. The functions here are
//! free of any rendering so they can be exercised against fake APIs:
//!
//! - [`login`] exchanges credentials for a token, persists it, and returns the
//!   new session. Failures surface the server's reason or `"Login failed"`.
//! - [`logout`] clears the persisted token synchronously. No server call.
//! - [`register`] creates an account and reports the outcome. It never logs in.

use api::{AuthApi, Credentials, UserCreate, UserInfo};
use store::{session as persisted, KeyValueStore};

/// Current authentication state of this tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token. Present means authenticated.
    pub token: Option<String>,
    /// Email used to log in, known only for logins made in this tab.
    pub user: Option<String>,
}

impl Session {
    /// Rebuild the session from storage after a reload.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self {
            token: persisted::load_token(store),
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub async fn login<A: AuthApi>(
    api: &A,
    store: &impl KeyValueStore,
    email: &str,
    password: &str,
) -> Result<Session, String> {
    let email = email.trim();
    let credentials = Credentials::new(email, password);
    match api.login(&credentials).await {
        Ok(token) => {
            persisted::save_token(store, &token.access_token);
            tracing::info!("Logged in as {email}");
            Ok(Session {
                token: Some(token.access_token),
                user: Some(email.to_string()),
            })
        }
        Err(e) => Err(e.message_or("Login failed")),
    }
}

pub fn logout(store: &impl KeyValueStore) -> Session {
    persisted::clear_token(store);
    tracing::info!("Logged out");
    Session::default()
}

pub async fn register<A: AuthApi>(api: &A, user: &UserCreate) -> Result<UserInfo, String> {
    api.register(user)
        .await
        .map_err(|e| e.message_or("Registration failed"))
}

/// Check the registration form before any request is made.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<UserCreate, String> {
    let username = username.trim();
    let email = email.trim();

    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }

    Ok(UserCreate {
        email: email.to_string(),
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;
    use api::CarApi;
    use store::MemoryStore;

    #[tokio::test]
    async fn test_invalid_login_keeps_session_empty() {
        let api = FakeApi::with_account("ann@example.com", "hunter22");
        let store = MemoryStore::new();

        let err = login(&api, &store, "ann@example.com", "wrong").await.unwrap_err();
        assert_eq!(err, "Incorrect username or password");
        assert!(Session::restore(&store).token.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_without_detail_uses_fallback() {
        let api = FakeApi::default().offline();
        let store = MemoryStore::new();

        let err = login(&api, &store, "ann@example.com", "x").await.unwrap_err();
        assert_eq!(err, "Login failed");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_persists_token_for_later_requests() {
        let api = FakeApi::with_account("ann@example.com", "hunter22");
        let store = MemoryStore::new();

        let session = login(&api, &store, "  ann@example.com ", "hunter22")
            .await
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user.as_deref(), Some("ann@example.com"));
        assert_eq!(Session::restore(&store).token, session.token);

        // The fake API sees the bearer token the next call would carry.
        api.set_token_source(store.clone());
        api.list_cars("").await.unwrap();
        assert_eq!(api.last_bearer(), session.token);
    }

    #[tokio::test]
    async fn test_logout_clears_token_and_theme_survives() {
        let store = MemoryStore::new();
        store::session::save_token(&store, "t");
        store::session::save_dark_mode(&store, false);

        let session = logout(&store);
        assert_eq!(session, Session::default());
        assert!(Session::restore(&store).token.is_none());
        assert!(!store::session::load_dark_mode(&store));
    }

    #[tokio::test]
    async fn test_register_does_not_log_in() {
        let api = FakeApi::default();
        let store = MemoryStore::new();
        let user = validate_registration("ann", "ann@example.com", "pw", "pw").unwrap();

        let created = register(&api, &user).await.unwrap();
        assert_eq!(created.username, "ann");
        assert!(store.is_empty());

        let err = register(&api, &user).await.unwrap_err();
        assert_eq!(err, "Email already registered");
    }

    #[test]
    fn test_registration_validation() {
        assert_eq!(
            validate_registration(" ", "a@b.c", "pw", "pw").unwrap_err(),
            "Username is required"
        );
        assert_eq!(
            validate_registration("ann", "not-an-email", "pw", "pw").unwrap_err(),
            "Please enter a valid email"
        );
        assert_eq!(
            validate_registration("ann", "a@b.c", "", "").unwrap_err(),
            "Password is required"
        );
        assert_eq!(
            validate_registration("ann", "a@b.c", "pw", "pw2").unwrap_err(),
            "Passwords do not match"
        );
        let user = validate_registration(" ann ", " a@b.c ", "pw", "pw").unwrap();
        assert_eq!(user.username, "ann");
        assert_eq!(user.email, "a@b.c");
    }
}
