//! Card interactions: delete-then-refresh and open-detail

use crate::collaborators::{
    DataFetcher, EntryDeleter, EntryItem, NavigationParams, Navigator, StockCountDetail,
};
use crate::endpoints::Endpoints;
use crate::entry::{EntryType, ListingEntry};
use crate::tables::{resolve_destination, Screen};

/// The two interactions a listing card offers
pub struct CardActions<'a> {
    deleter: &'a dyn EntryDeleter,
    fetcher: &'a dyn DataFetcher,
    navigator: &'a dyn Navigator,
    base_url: &'a str,
    endpoints: &'a Endpoints,
}

impl<'a> CardActions<'a> {
    pub fn new(
        deleter: &'a dyn EntryDeleter,
        fetcher: &'a dyn DataFetcher,
        navigator: &'a dyn Navigator,
        base_url: &'a str,
        endpoints: &'a Endpoints,
    ) -> Self {
        Self {
            deleter,
            fetcher,
            navigator,
            base_url,
            endpoints,
        }
    }

    /// Delete the entry, then ask the parent list to refresh.
    ///
    /// `refresh_listing_data` runs once, only after the delete succeeded.
    pub async fn delete(
        &self,
        entry: &ListingEntry,
        refresh_listing_data: impl FnOnce(),
    ) -> crate::Result<()> {
        tracing::debug!("Deleting {} '{}'", entry.entry_type, entry.id);

        if let Err(e) = self.deleter.delete_entry(&entry.id, entry.entry_type).await {
            tracing::warn!("Delete of {} '{}' failed: {}", entry.entry_type, entry.id, e);
            return Err(e);
        }

        refresh_listing_data();
        Ok(())
    }

    /// Navigate to the detail screen for the entry, returning the screen opened.
    ///
    /// Stock counts are re-fetched first: the listing row lacks the detail the
    /// screen needs.
    pub async fn open(&self, entry: &ListingEntry) -> crate::Result<Screen> {
        let (screen, entry_item) = match entry.entry_type {
            EntryType::Sc => {
                let url = self.endpoints.sc_items_url(self.base_url, &entry.id);
                tracing::debug!("Fetching stock count detail from {}", url);
                let fetched = self.fetcher.get_data(&url).await?;
                (
                    Screen::ScItems,
                    EntryItem::StockCount(StockCountDetail::stamped(fetched)),
                )
            }
            _ => (resolve_destination(entry)?, EntryItem::Listing(entry.clone())),
        };

        tracing::debug!("Navigating to '{}' for {} '{}'", screen, entry.entry_type, entry.id);
        self.navigator
            .navigate_to(screen, NavigationParams { entry_item });
        Ok(screen)
    }
}
