//! # API crate: HTTP wrapper around the CarFleet REST API
//!
//! Everything the views need to talk to the remote API, and nothing else. The
//! API itself (its routes, auth semantics and persistence) is an external
//! collaborator.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: configured `reqwest` client, bearer token attached from storage at call time |
//! | [`service`] | [`AuthApi`] and [`CarApi`] traits, their `ApiClient` impls, [`CarLookup`] |
//! | [`models`] | Wire types: [`Car`], [`CarInput`], [`Credentials`], [`Token`], [`UserCreate`], [`UserInfo`], [`ContactMessage`] |
//! | [`error`] | [`ApiError`] and FastAPI `detail` extraction |
//!
//! ## Routes
//!
//! All paths are relative to `api.base_url` + `api.path_prefix` from
//! `carfleet.toml`.
//!
//! - **Auth**: `POST /token` (form-encoded), `POST /users/`
//! - **Cars**: `GET /cars/?search=`, `GET /cars/{id}`, `POST /cars/`,
//!   `PUT /cars/{id}`, `DELETE /cars/{id}`

pub mod client;
pub mod error;
pub mod models;
pub mod service;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{Car, CarInput, ContactMessage, Credentials, Token, UserCreate, UserInfo};
pub use service::{AuthApi, CarApi, CarLookup};

/// URL parser used to validate user-entered image links.
pub use reqwest::Url;
