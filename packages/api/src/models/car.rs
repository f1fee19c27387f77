//! # Car records
//!
//! [`Car`] is a listing as returned by the API. The server owns the canonical
//! copy; views hold a transient clone. [`CarInput`] is the writable subset sent
//! on create and update.
//!
//! Timestamps and owner are optional on the wire and are kept as strings
//! since the client only displays them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub car_type: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub dealer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /cars/` and `PUT /cars/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CarInput {
    pub title: String,
    pub description: String,
    pub car_type: String,
    pub company: String,
    pub dealer: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}
