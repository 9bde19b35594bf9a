//! Listing - inventory and transfer listing client
//!
//! Fetches the listing collection from the backend, renders each entry as a
//! card, and performs a card's delete and open interactions.

pub mod backend;
pub mod config;
pub mod error;
pub mod io;
pub mod navigator;
pub mod render;

pub use config::{load_config, Config};
pub use error::{Result, ServiceError};

use std::sync::Arc;

use listing_core::tables::is_deletable;
use listing_core::{CardActions, EntryType, ListingEntry, NavigationParams, Screen};

use crate::backend::BackendClient;
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::navigator::ConsoleNavigator;

/// A listing view over one backend, acting as a card's parent list
#[derive(Debug)]
pub struct ListingService {
    backend: BackendClient,
    navigator: ConsoleNavigator,
}

impl ListingService {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            backend: BackendClient::new(config, http),
            navigator: ConsoleNavigator::default(),
        }
    }

    /// Build a service backed by a real HTTP client
    pub fn connect(config: &Config) -> Result<Self> {
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(config.backend.timeout())?);
        Ok(Self::new(config, http))
    }

    fn actions(&self) -> CardActions<'_> {
        CardActions::new(
            &self.backend,
            &self.backend,
            &self.navigator,
            self.backend.base_url(),
            self.backend.endpoints(),
        )
    }

    /// Fetch the listing and render every card
    pub async fn list(&self) -> Result<String> {
        let entries = self.backend.fetch_listing().await?;
        Ok(render::render_listing(&entries)?)
    }

    /// Open the detail screen of one entry, returning where it navigated
    pub async fn open(&self, entry_type: EntryType, id: &str) -> Result<(Screen, NavigationParams)> {
        let entry = self.find_entry(entry_type, id).await?;
        let screen = self.actions().open(&entry).await?;
        let navigation = self.navigator.take_last();
        tracing::debug!("Open of {} '{}' resolved to '{}'", entry_type, id, screen);
        navigation.ok_or_else(|| {
            ServiceError::Listing(listing_core::ListingError::NoDestination {
                entry_type,
                status: entry.status.clone(),
            })
        })
    }

    /// Delete one entry and return the refreshed listing
    pub async fn delete(&self, entry_type: EntryType, id: &str) -> Result<String> {
        let entry = self.find_entry(entry_type, id).await?;
        if !is_deletable(entry.entry_type, &entry.status) {
            return Err(ServiceError::NotDeletable {
                entry_type,
                id: id.to_string(),
                status: entry.status,
            });
        }

        let mut refresh_requested = false;
        self.actions()
            .delete(&entry, || refresh_requested = true)
            .await?;
        tracing::info!("Deleted {} '{}'", entry_type, id);

        if refresh_requested {
            self.list().await
        } else {
            Ok(String::new())
        }
    }

    async fn find_entry(&self, entry_type: EntryType, id: &str) -> Result<ListingEntry> {
        self.backend
            .fetch_listing()
            .await?
            .into_iter()
            .find(|e| e.entry_type == entry_type && e.id.to_string() == id)
            .ok_or_else(|| ServiceError::EntryNotFound {
                entry_type,
                id: id.to_string(),
            })
    }
}
