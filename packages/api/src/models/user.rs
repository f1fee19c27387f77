//! # User and token models
//!
//! - [`Credentials`]: the `username`/`password` pair posted form-encoded to
//!   `/token`. The API treats the email address as the username.
//! - [`Token`]: the bearer token returned on a successful login.
//! - [`UserCreate`]: registration payload for `POST /users/`.
//! - [`UserInfo`]: the created user as echoed back by the server. The
//!   password hash the server may include is never deserialized.

use serde::{Deserialize, Serialize};

/// Login form fields, serialized as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: email.into(),
            password: password.into(),
        }
    }
}

/// OAuth2 password-flow token response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// User information returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
