//! Static lookup tables: destination screens, module fields and deletability
//!
//! Each table is an exhaustive `match` over [`EntryType`] (and [`Status`]
//! where relevant), so adding a module code fails to compile until every
//! table covers it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::{EntryType, ListingEntry, Scalar, Status};
use crate::error::ListingError;

/// A registered detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[serde(rename = "IA Items")]
    IaItems,
    #[serde(rename = "IA Summary")]
    IaSummary,
    #[serde(rename = "DSD Items")]
    DsdItems,
    #[serde(rename = "DSD Summary")]
    DsdSummary,
    #[serde(rename = "ASN List")]
    AsnList,
    #[serde(rename = "Transfer Items")]
    TransferItems,
    #[serde(rename = "Transfer Summary")]
    TransferSummary,
    #[serde(rename = "SC Items")]
    ScItems,
    #[serde(rename = "RTV Items")]
    RtvItems,
    #[serde(rename = "RTV Summary")]
    RtvSummary,
}

impl Screen {
    pub const ALL: [Screen; 10] = [
        Screen::IaItems,
        Screen::IaSummary,
        Screen::DsdItems,
        Screen::DsdSummary,
        Screen::AsnList,
        Screen::TransferItems,
        Screen::TransferSummary,
        Screen::ScItems,
        Screen::RtvItems,
        Screen::RtvSummary,
    ];

    /// Screen name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Screen::IaItems => "IA Items",
            Screen::IaSummary => "IA Summary",
            Screen::DsdItems => "DSD Items",
            Screen::DsdSummary => "DSD Summary",
            Screen::AsnList => "ASN List",
            Screen::TransferItems => "Transfer Items",
            Screen::TransferSummary => "Transfer Summary",
            Screen::ScItems => "SC Items",
            Screen::RtvItems => "RTV Items",
            Screen::RtvSummary => "RTV Summary",
        }
    }

    /// URL path used by routers that address screens by path
    pub fn path(&self) -> &'static str {
        match self {
            Screen::IaItems => "/ia/items",
            Screen::IaSummary => "/ia/summary",
            Screen::DsdItems => "/dsd/items",
            Screen::DsdSummary => "/dsd/summary",
            Screen::AsnList => "/po/asn",
            Screen::TransferItems => "/transfer/items",
            Screen::TransferSummary => "/transfer/summary",
            Screen::ScItems => "/sc/items",
            Screen::RtvItems => "/rtv/items",
            Screen::RtvSummary => "/rtv/summary",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Screen an entry of `entry_type` in `status` opens
pub fn destination(entry_type: EntryType, status: Status) -> Option<Screen> {
    use Status::*;

    match (entry_type, status) {
        (EntryType::Ia, InProgress | Saved) => Some(Screen::IaItems),
        (EntryType::Ia, Complete) => Some(Screen::IaSummary),

        (EntryType::Dsd, InProgress | Saved) => Some(Screen::DsdItems),
        (EntryType::Dsd, Complete) => Some(Screen::DsdSummary),

        (EntryType::Po, InProgress | Pending | Complete) => Some(Screen::AsnList),

        (
            EntryType::Tsfin | EntryType::Tsfout,
            NewRequest | InProgress | Accepted | PartiallyAccepted | Rejected | Shipped
            | Delivered | Saved,
        ) => Some(Screen::TransferItems),
        (EntryType::Tsfin | EntryType::Tsfout, Pending | Complete) => {
            Some(Screen::TransferSummary)
        }

        (EntryType::Sc, New | PendingLower | InProgress | CompleteLower) => Some(Screen::ScItems),

        (EntryType::Rtv, InProgress | Saved) => Some(Screen::RtvItems),
        (EntryType::Rtv, Dispatched) => Some(Screen::RtvSummary),

        _ => None,
    }
}

/// Resolve the destination for an entry's raw status string
pub fn resolve_destination(entry: &ListingEntry) -> crate::Result<Screen> {
    let no_destination = || ListingError::NoDestination {
        entry_type: entry.entry_type,
        status: entry.status.clone(),
    };
    let status: Status = entry.status.parse().map_err(|_| no_destination())?;
    let screen = destination(entry.entry_type, status).ok_or_else(no_destination)?;
    tracing::debug!(
        "Destination for {} '{}' in status '{}': {}",
        entry.entry_type,
        entry.id,
        entry.status,
        screen
    );
    Ok(screen)
}

/// The module-specific field shown on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleField {
    Reason,
    SupplierId,
    StoreId,
}

impl ModuleField {
    /// Wire name of the field on the entry
    pub fn key(&self) -> &'static str {
        match self {
            ModuleField::Reason => "reason",
            ModuleField::SupplierId => "supplierId",
            ModuleField::StoreId => "storeId",
        }
    }

    pub fn value<'a>(&self, entry: &'a ListingEntry) -> Option<&'a Scalar> {
        match self {
            ModuleField::Reason => entry.reason.as_ref(),
            ModuleField::SupplierId => entry.supplier_id.as_ref(),
            ModuleField::StoreId => entry.store_id.as_ref(),
        }
    }
}

/// Field and label shown for a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    pub field: ModuleField,
    pub title: &'static str,
}

pub fn field_label(entry_type: EntryType) -> FieldLabel {
    match entry_type {
        EntryType::Ia | EntryType::Sc => FieldLabel {
            field: ModuleField::Reason,
            title: "Reason",
        },
        EntryType::Dsd | EntryType::Po | EntryType::Rtv => FieldLabel {
            field: ModuleField::SupplierId,
            title: "Supplier",
        },
        EntryType::Tsfin | EntryType::Tsfout => FieldLabel {
            field: ModuleField::StoreId,
            title: "Store ID",
        },
    }
}

const DELETABLE_STATUSES: [Status; 6] = [
    Status::InProgress,
    Status::Saved,
    Status::Pending,
    Status::NewRequest,
    Status::New,
    Status::PendingLower,
];

/// Whether an entry may still be deleted from the listing
pub fn is_deletable(entry_type: EntryType, status: &str) -> bool {
    let deletable_type = matches!(entry_type, EntryType::Ia | EntryType::Dsd);
    deletable_type
        && status
            .parse::<Status>()
            .is_ok_and(|s| DELETABLE_STATUSES.contains(&s))
}
