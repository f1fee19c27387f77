//! # HTTP client wrapper
//!
//! [`ApiClient`] owns a configured [`reqwest::Client`], the API location and a
//! handle to durable storage. Every request goes through [`ApiClient::request`],
//! which reads the persisted token *at call time* and attaches it as
//! `Authorization: Bearer <token>`. Logging out therefore only has to clear
//! storage; nothing cached here needs invalidating.
//!
//! The typed call sites live in [`crate::service`]; this module only builds and
//! sends requests and maps responses into [`ApiError`].

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::config::ApiConfig;
use store::{session, KeyValueStore};

use crate::error::ApiError;
use crate::models::{CarInput, ContactMessage, Credentials, UserCreate};

#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    store: S,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            store,
        }
    }

    /// Storage the bearer token is read from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a request to an API route, with the current token attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.config.endpoint(path));
        match session::load_token(&self.store) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) fn login_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.request(Method::POST, "/token").form(credentials)
    }

    pub(crate) fn register_request(&self, user: &UserCreate) -> RequestBuilder {
        self.request(Method::POST, "/users/").json(user)
    }

    pub(crate) fn list_cars_request(&self, search: &str) -> RequestBuilder {
        let builder = self.request(Method::GET, "/cars/");
        let search = search.trim();
        if search.is_empty() {
            builder
        } else {
            builder.query(&[("search", search)])
        }
    }

    pub(crate) fn get_car_request(&self, id: &str) -> RequestBuilder {
        self.request(Method::GET, &format!("/cars/{id}"))
    }

    pub(crate) fn create_car_request(&self, car: &CarInput) -> RequestBuilder {
        self.request(Method::POST, "/cars/").json(car)
    }

    pub(crate) fn update_car_request(&self, id: &str, car: &CarInput) -> RequestBuilder {
        self.request(Method::PUT, &format!("/cars/{id}")).json(car)
    }

    pub(crate) fn delete_car_request(&self, id: &str) -> RequestBuilder {
        self.request(Method::DELETE, &format!("/cars/{id}"))
    }

    /// Post a landing page message to the external form relay.
    ///
    /// The relay is not part of the API, so no token is attached.
    pub async fn send_contact(
        &self,
        endpoint: &str,
        message: &ContactMessage,
    ) -> Result<(), ApiError> {
        let builder = self
            .http
            .post(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&message.payload());
        send_empty(builder).await.inspect_err(|e| {
            tracing::error!("Error sending contact message: {e}");
        })
    }
}

/// Send a request and decode a JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = check(builder.send().await?).await?;
    Ok(response.json::<T>().await?)
}

/// Send a request whose success body is ignored.
pub(crate) async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    check(builder.send().await?).await?;
    Ok(())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}
