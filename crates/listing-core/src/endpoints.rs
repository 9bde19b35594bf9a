//! Backend endpoint paths used by the card and its parent list

use serde::{Deserialize, Serialize};

use crate::entry::{EntryId, EntryType};

/// Endpoint paths relative to the backend base URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Listing collection
    #[serde(default = "default_listing")]
    pub listing: String,
    /// Stock count detail; the entry id is appended verbatim
    #[serde(default = "default_fetch_sc_items")]
    pub fetch_sc_items: String,
    /// Entry deletion; `{type}` and `{id}` are substituted
    #[serde(default = "default_delete_entry")]
    pub delete_entry: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            listing: default_listing(),
            fetch_sc_items: default_fetch_sc_items(),
            delete_entry: default_delete_entry(),
        }
    }
}

impl Endpoints {
    pub fn listing_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.listing)
    }

    pub fn sc_items_url(&self, base_url: &str, id: &EntryId) -> String {
        format!(
            "{}{}{}",
            base_url.trim_end_matches('/'),
            self.fetch_sc_items,
            id
        )
    }

    pub fn delete_url(&self, base_url: &str, id: &EntryId, entry_type: EntryType) -> String {
        let path = self
            .delete_entry
            .replace("{type}", entry_type.as_str())
            .replace("{id}", &id.to_string());
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

fn default_listing() -> String {
    "/api/listing".to_string()
}

fn default_fetch_sc_items() -> String {
    "/api/sc/items/".to_string()
}

fn default_delete_entry() -> String {
    "/api/{type}/{id}".to_string()
}
