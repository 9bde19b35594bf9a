//! Listing backend client: collection fetch plus the card's delete and read collaborators

use std::sync::Arc;

use async_trait::async_trait;
use listing_core::{
    DataFetcher, Endpoints, EntryDeleter, EntryId, EntryType, ListingEntry, ListingError,
};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::io::HttpClient;

/// Talks to the listing backend over HTTP
pub struct BackendClient {
    base_url: String,
    endpoints: Endpoints,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BackendClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created BackendClient for {}", config.backend.base_url);

        Self {
            base_url: config.backend.base_url.clone(),
            endpoints: config.endpoints.clone(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the listing collection
    pub async fn fetch_listing(&self) -> crate::Result<Vec<ListingEntry>> {
        let url = self.endpoints.listing_url(&self.base_url);
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(crate::ServiceError::Http(format!(
                "GET {} returned status {}: {}",
                url, response.status, response.body
            )));
        }

        let entries: Vec<ListingEntry> = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} listing entries", entries.len());
        Ok(entries)
    }
}

#[async_trait(?Send)]
impl EntryDeleter for BackendClient {
    async fn delete_entry(&self, id: &EntryId, entry_type: EntryType) -> listing_core::Result<()> {
        let url = self.endpoints.delete_url(&self.base_url, id, entry_type);
        let response = self
            .http
            .delete(&url)
            .await
            .map_err(|e| ListingError::Delete(e.to_string()))?;

        if !response.is_success() {
            return Err(ListingError::Delete(format!(
                "DELETE {} returned status {}: {}",
                url, response.status, response.body
            )));
        }

        tracing::debug!("Deleted {} '{}'", entry_type, id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl DataFetcher for BackendClient {
    async fn get_data(&self, url: &str) -> listing_core::Result<Map<String, Value>> {
        let response = self
            .http
            .get(url)
            .await
            .map_err(|e| ListingError::Fetch(e.to_string()))?;

        if !response.is_success() {
            return Err(ListingError::Fetch(format!(
                "GET {} returned status {}: {}",
                url, response.status, response.body
            )));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}
