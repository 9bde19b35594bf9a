//! Browser-side backend access
//!
//! Fetches go to the page's own origin. Outside the `csr` build the
//! collaborators fail, since no browser is available to send requests.

use async_trait::async_trait;
use listing_core::{DataFetcher, Endpoints, EntryDeleter, EntryId, EntryType, ListingEntry, ListingError};
use serde_json::{Map, Value};

/// Card collaborators talking to the listing backend via `fetch`
#[derive(Debug, Clone, Default)]
pub struct BrowserBackend {
    base_url: String,
    endpoints: Endpoints,
}

impl BrowserBackend {
    /// Backend rooted at the current page's origin
    pub fn from_window() -> Self {
        Self {
            base_url: origin().unwrap_or_default(),
            endpoints: Endpoints::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

fn origin() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or("no window")?;
        window.location().origin().map_err(|e| format!("{:?}", e))
    }

    #[cfg(not(feature = "csr"))]
    {
        Err("no window".to_string())
    }
}

/// Fetch the listing collection for the parent list
pub async fn fetch_listing() -> Result<Vec<ListingEntry>, String> {
    #[cfg(feature = "csr")]
    {
        let backend = BrowserBackend::from_window();
        let url = backend.endpoints.listing_url(&backend.base_url);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        if !resp.ok() {
            return Err(format!("GET {} returned status {}", url, resp.status()));
        }

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(feature = "csr"))]
    {
        Ok(vec![])
    }
}

#[async_trait(?Send)]
impl EntryDeleter for BrowserBackend {
    async fn delete_entry(&self, id: &EntryId, entry_type: EntryType) -> listing_core::Result<()> {
        let url = self.endpoints.delete_url(&self.base_url, id, entry_type);

        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(|e| ListingError::Delete(format!("DELETE {} failed: {}", url, e)))?;

            if !resp.ok() {
                return Err(ListingError::Delete(format!(
                    "DELETE {} returned status {}",
                    url,
                    resp.status()
                )));
            }
            Ok(())
        }

        #[cfg(not(feature = "csr"))]
        {
            Err(ListingError::Delete(format!("DELETE {} needs a browser", url)))
        }
    }
}

#[async_trait(?Send)]
impl DataFetcher for BrowserBackend {
    async fn get_data(&self, url: &str) -> listing_core::Result<Map<String, Value>> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| ListingError::Fetch(format!("GET {} failed: {}", url, e)))?;

            if !resp.ok() {
                return Err(ListingError::Fetch(format!(
                    "GET {} returned status {}",
                    url,
                    resp.status()
                )));
            }

            resp.json()
                .await
                .map_err(|e| ListingError::Fetch(format!("GET {} returned invalid JSON: {}", url, e)))
        }

        #[cfg(not(feature = "csr"))]
        {
            Err(ListingError::Fetch(format!("GET {} needs a browser", url)))
        }
    }
}
