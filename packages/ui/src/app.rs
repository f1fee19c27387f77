//! Application-wide services provided as a Dioxus context.

use api::ApiClient;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::platform::{make_store, PlatformStore};

/// Configuration plus the API client built from it.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: ClientConfig,
    pub client: ApiClient<PlatformStore>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let client = ApiClient::new(config.api.clone(), make_store());
        Self { config, client }
    }
}

/// Get the application context installed by the root component.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
