//! # Car form logic
//!
//! The create and edit screens share one form. This module holds everything
//! about it that does not render:
//!
//! - [`CarDraft`]: raw field values as typed, including the comma-separated
//!   tag and image strings.
//! - [`CarDraft::validate`]: trims and filters the lists, checks required
//!   fields and image URLs, and yields the [`CarInput`] to send.
//! - [`submit`]: validate, then create or update. A draft that fails
//!   validation never reaches the API.
//! - [`load_draft`]: seed the edit form from the server.

use api::{Car, CarApi, CarInput, CarLookup, Url};

/// Which record the form writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Car",
            FormMode::Edit(_) => "Edit Car",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Car",
            FormMode::Edit(_) => "Save Changes",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Car created successfully",
            FormMode::Edit(_) => "Car updated successfully",
        }
    }

    /// Shown when the server rejects a submission without a `detail`.
    pub fn failure_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Failed to create car",
            FormMode::Edit(_) => "Failed to update car",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Invalid image URLs detected")]
    InvalidImageUrls(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] DraftError),
    #[error("{0}")]
    Remote(String),
}

/// Form state exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarDraft {
    pub title: String,
    pub description: String,
    pub car_type: String,
    pub company: String,
    pub dealer: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Comma-separated image URLs.
    pub images: String,
}

impl CarDraft {
    pub fn from_car(car: &Car) -> Self {
        Self {
            title: car.title.clone(),
            description: car.description.clone(),
            car_type: car.car_type.clone(),
            company: car.company.clone(),
            dealer: car.dealer.clone(),
            tags: car.tags.join(", "),
            images: car.images.join(", "),
        }
    }

    pub fn validate(&self) -> Result<CarInput, DraftError> {
        let required = [
            ("Title", &self.title),
            ("Description", &self.description),
            ("Car type", &self.car_type),
            ("Company", &self.company),
            ("Dealer", &self.dealer),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::Missing(label));
            }
        }

        let images = split_list(&self.images);
        let invalid: Vec<String> = images
            .iter()
            .filter(|url| !is_valid_url(url))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(DraftError::InvalidImageUrls(invalid));
        }

        Ok(CarInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            car_type: self.car_type.trim().to_string(),
            company: self.company.trim().to_string(),
            dealer: self.dealer.trim().to_string(),
            tags: split_list(&self.tags),
            images,
        })
    }
}

/// Split a comma-separated field into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Absolute URL check, same acceptance as the browser's `new URL(s)`.
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

pub async fn submit<A: CarApi>(api: &A, mode: &FormMode, draft: &CarDraft) -> Result<Car, SubmitError> {
    let input = draft.validate()?;
    let result = match mode {
        FormMode::Create => api.create_car(&input).await,
        FormMode::Edit(id) => api.update_car(id, &input).await,
    };
    result.map_err(|e| SubmitError::Remote(e.message_or(mode.failure_message())))
}

/// Fetch a car and turn it into a draft for the edit form.
///
/// The error is the message to show before leaving the form.
pub async fn load_draft<A: CarApi>(api: &A, id: &str) -> Result<CarDraft, &'static str> {
    match api.get_car(id).await {
        CarLookup::Found(car) => Ok(CarDraft::from_car(&car)),
        CarLookup::NotFound => Err("Car not found"),
        CarLookup::TransportError(_) => Err("Failed to fetch car details"),
    }
}
