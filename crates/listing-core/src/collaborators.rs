//! Collaborators a card acts through: deletion, data fetch and navigation
//!
//! Card interactions run on a single-threaded event loop (a browser, or a
//! current-thread runtime in the CLI), so the async traits do not require
//! `Send` futures.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entry::{EntryId, EntryType, ListingEntry};
use crate::tables::Screen;

/// Removes an entry from the backend
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait EntryDeleter {
    async fn delete_entry(&self, id: &EntryId, entry_type: EntryType) -> crate::Result<()>;
}

/// Reads a JSON object from the backend
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait DataFetcher {
    async fn get_data(&self, url: &str) -> crate::Result<Map<String, Value>>;
}

/// Moves the user to a registered screen
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate_to(&self, screen: Screen, params: NavigationParams);
}

/// Stock count detail as fetched, stamped with its entry type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockCountDetail {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StockCountDetail {
    /// Build a new record from a fetched response with `type` set to `SC`
    pub fn stamped(mut fetched: Map<String, Value>) -> Self {
        fetched.remove("type");
        Self {
            entry_type: EntryType::Sc,
            fields: fetched,
        }
    }
}

/// The record handed to a detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryItem {
    Listing(ListingEntry),
    StockCount(StockCountDetail),
}

/// Parameters passed along with a navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationParams {
    pub entry_item: EntryItem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stamping_overrides_fetched_type() {
        let fetched = json!({"id": 9, "type": "stockcount", "items": [1, 2]});
        let Value::Object(map) = fetched else {
            unreachable!()
        };

        let detail = StockCountDetail::stamped(map);
        assert_eq!(detail.entry_type, EntryType::Sc);
        assert!(!detail.fields.contains_key("type"));

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value, json!({"id": 9, "type": "SC", "items": [1, 2]}));
    }

    #[test]
    fn navigation_params_serialize_as_entry_item() {
        let entry = ListingEntry::new("IA-1", EntryType::Ia, "Saved");
        let params = NavigationParams {
            entry_item: EntryItem::Listing(entry),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["entryItem"]["id"], "IA-1");
        assert_eq!(value["entryItem"]["type"], "IA");
    }
}
