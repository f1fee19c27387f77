//! # Typed call sites
//!
//! The two traits below are the seams between views and the network:
//!
//! | Trait | Routes |
//! |-------|--------|
//! | [`AuthApi`] | `POST /token`, `POST /users/` |
//! | [`CarApi`] | `GET/POST /cars/`, `GET/PUT/DELETE /cars/{id}` |
//!
//! [`ApiClient`] implements both. View controllers are generic over the
//! traits so they can be driven by in-memory fakes in tests.
//!
//! Fetching a single car returns a [`CarLookup`] instead of a `Result`, so
//! callers branch on "not found" explicitly.

use std::future::Future;

use store::KeyValueStore;

use crate::client::{send_empty, send_json, ApiClient};
use crate::error::ApiError;
use crate::models::{Car, CarInput, Credentials, Token, UserCreate, UserInfo};

/// Outcome of fetching one car.
#[derive(Debug, Clone, PartialEq)]
pub enum CarLookup {
    Found(Car),
    NotFound,
    TransportError(ApiError),
}

impl From<Result<Car, ApiError>> for CarLookup {
    fn from(result: Result<Car, ApiError>) -> Self {
        match result {
            Ok(car) => CarLookup::Found(car),
            Err(e) if e.is_not_found() => CarLookup::NotFound,
            Err(e) => CarLookup::TransportError(e),
        }
    }
}

pub trait AuthApi {
    fn login(&self, credentials: &Credentials)
        -> impl Future<Output = Result<Token, ApiError>>;
    fn register(&self, user: &UserCreate) -> impl Future<Output = Result<UserInfo, ApiError>>;
}

pub trait CarApi {
    fn list_cars(&self, search: &str) -> impl Future<Output = Result<Vec<Car>, ApiError>>;
    fn get_car(&self, id: &str) -> impl Future<Output = CarLookup>;
    fn create_car(&self, car: &CarInput) -> impl Future<Output = Result<Car, ApiError>>;
    fn update_car(&self, id: &str, car: &CarInput)
        -> impl Future<Output = Result<Car, ApiError>>;
    fn delete_car(&self, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

impl<S: KeyValueStore> AuthApi for ApiClient<S> {
    async fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        tracing::debug!("POST /token for {}", credentials.username);
        send_json(self.login_request(credentials))
            .await
            .inspect_err(|e| tracing::error!("Login failed: {e}"))
    }

    async fn register(&self, user: &UserCreate) -> Result<UserInfo, ApiError> {
        send_json(self.register_request(user))
            .await
            .inspect_err(|e| tracing::error!("Registration failed: {e}"))
    }
}

impl<S: KeyValueStore> CarApi for ApiClient<S> {
    async fn list_cars(&self, search: &str) -> Result<Vec<Car>, ApiError> {
        tracing::debug!("GET /cars/ search={search:?}");
        send_json(self.list_cars_request(search))
            .await
            .inspect_err(|e| tracing::error!("Error fetching cars: {e}"))
    }

    async fn get_car(&self, id: &str) -> CarLookup {
        let lookup = CarLookup::from(send_json::<Car>(self.get_car_request(id)).await);
        if let CarLookup::TransportError(e) = &lookup {
            tracing::error!("Error fetching car {id}: {e}");
        }
        lookup
    }

    async fn create_car(&self, car: &CarInput) -> Result<Car, ApiError> {
        send_json(self.create_car_request(car))
            .await
            .inspect_err(|e| tracing::error!("Error creating car: {e}"))
    }

    async fn update_car(&self, id: &str, car: &CarInput) -> Result<Car, ApiError> {
        send_json(self.update_car_request(id, car))
            .await
            .inspect_err(|e| tracing::error!("Error updating car {id}: {e}"))
    }

    async fn delete_car(&self, id: &str) -> Result<(), ApiError> {
        send_empty(self.delete_car_request(id))
            .await
            .inspect_err(|e| tracing::error!("Error deleting car {id}: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str) -> Car {
        Car {
            id: id.to_string(),
            title: "T".to_string(),
            description: String::new(),
            car_type: String::new(),
            company: String::new(),
            dealer: String::new(),
            tags: vec![],
            images: vec![],
            owner_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_lookup_from_result() {
        assert_eq!(CarLookup::from(Ok(car("c1"))), CarLookup::Found(car("c1")));

        let missing = ApiError::from_status(404, r#"{"detail":"Car not found"}"#);
        assert_eq!(CarLookup::from(Err(missing)), CarLookup::NotFound);

        let down = ApiError::Network("connection refused".into());
        assert_eq!(
            CarLookup::from(Err(down.clone())),
            CarLookup::TransportError(down)
        );
    }
}
