//! Error types for the listing service

use listing_core::{EntryType, ListingError};

/// Errors that can occur in the listing service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("No {entry_type} entry with id '{id}' in the listing")]
    EntryNotFound { entry_type: EntryType, id: String },

    #[error("{entry_type} entry '{id}' in status '{status}' cannot be deleted")]
    NotDeletable {
        entry_type: EntryType,
        id: String,
        status: String,
    },
}

/// Result type alias for listing service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
