//! BDD test world for the listing service

use std::sync::Arc;

use cucumber::World;
use listing::{Config, ListingService};
use listing_core::{NavigationParams, Screen};

use crate::steps::backend::{FakeBackend, BASE_URL};

#[derive(Debug, Default, World)]
pub struct ListingWorld {
    pub backend: Arc<FakeBackend>,

    // Listing and delete output
    pub output: Option<listing::Result<String>>,

    // Open testing
    pub navigation: Option<listing::Result<(Screen, NavigationParams)>>,
}

impl ListingWorld {
    pub fn service(&self) -> ListingService {
        let mut config = Config::default();
        config.backend.base_url = BASE_URL.to_string();
        ListingService::new(&config, self.backend.clone())
    }

    /// The error of whichever command ran last, if it failed
    pub fn last_error(&self) -> Option<String> {
        let output_err = self
            .output
            .as_ref()
            .and_then(|r| r.as_ref().err())
            .map(|e| e.to_string());
        let navigation_err = self
            .navigation
            .as_ref()
            .and_then(|r| r.as_ref().err())
            .map(|e| e.to_string());
        output_err.or(navigation_err)
    }
}
