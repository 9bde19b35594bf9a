//! Error types for listing card rendering and actions

use crate::entry::EntryType;

/// Errors that can occur while rendering a card or acting on it
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Unknown status '{0}'")]
    UnknownStatus(String),

    #[error("Unknown entry type '{0}'")]
    UnknownEntryType(String),

    #[error("No destination screen for {entry_type} entries in status '{status}'")]
    NoDestination {
        entry_type: EntryType,
        status: String,
    },

    #[error("Delete failed: {0}")]
    Delete(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListingError {
    /// True for table lookups that found no entry for a status or type
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            ListingError::UnknownStatus(_)
                | ListingError::UnknownEntryType(_)
                | ListingError::NoDestination { .. }
        )
    }
}

/// Result type alias for listing operations
pub type Result<T> = std::result::Result<T, ListingError>;
