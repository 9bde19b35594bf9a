//! Listing card domain
//!
//! Entry model, the static routing/field/chip tables, the card view-model,
//! and the delete and open interactions a card performs through its
//! collaborators.

pub mod actions;
pub mod card;
pub mod chip;
pub mod collaborators;
pub mod endpoints;
pub mod entry;
pub mod error;
pub mod tables;

pub use actions::CardActions;
pub use card::CardView;
pub use collaborators::{DataFetcher, EntryDeleter, EntryItem, NavigationParams, Navigator};
pub use endpoints::Endpoints;
pub use entry::{EntryId, EntryType, ListingEntry, Scalar, Status};
pub use error::{ListingError, Result};
pub use tables::Screen;
