//! Card view-model: everything a listing card displays, derived from one entry

use std::fmt;

use crate::chip::{chip_style, ChipStyle};
use crate::entry::{EntryType, ListingEntry, Scalar, Status};
use crate::tables::{field_label, is_deletable};

/// Shown when the module-specific field is absent or empty
pub const MISSING_VALUE: &str = "N/A";

/// A label/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub title: String,
    pub value: String,
}

impl InfoRow {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountLabel {
    Asn,
    Units,
}

impl CountLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountLabel::Asn => "ASN",
            CountLabel::Units => "Units",
        }
    }
}

impl fmt::Display for CountLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tappable count panel on the right of the card
#[derive(Debug, Clone, PartialEq)]
pub struct CountPanel {
    /// `None` only for purchase orders without an ASN count
    pub value: Option<Scalar>,
    pub label: CountLabel,
}

impl CountPanel {
    pub fn for_entry(entry: &ListingEntry) -> Self {
        match entry.entry_type {
            EntryType::Po => Self {
                value: entry.asn_count.clone(),
                label: CountLabel::Asn,
            },
            _ => {
                let value = [&entry.total_sku, &entry.units]
                    .into_iter()
                    .flatten()
                    .find(|count| count.is_truthy())
                    .cloned()
                    .unwrap_or_else(|| Scalar::from(0u64));
                Self {
                    value: Some(value),
                    label: CountLabel::Units,
                }
            }
        }
    }

    pub fn display_value(&self) -> String {
        self.value.as_ref().map(|v| v.to_string()).unwrap_or_default()
    }
}

/// Rendered state of one listing card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: InfoRow,
    pub status: Status,
    pub chip: ChipStyle,
    pub module_field: InfoRow,
    pub date: InfoRow,
    pub count: CountPanel,
    pub show_delete: bool,
}

impl CardView {
    /// Derive the card for an entry.
    ///
    /// Fails with a lookup failure when the status has no chip colors.
    pub fn build(entry: &ListingEntry) -> crate::Result<Self> {
        let status = entry.parsed_status()?;
        let label = field_label(entry.entry_type);

        Ok(Self {
            id: InfoRow::new("ID: ", entry.id.to_string()),
            status,
            chip: chip_style(status),
            module_field: InfoRow::new(format!("{}: ", label.title), module_field_value(entry)),
            date: InfoRow::new("Date: ", display_date(entry)),
            count: CountPanel::for_entry(entry),
            show_delete: is_deletable(entry.entry_type, &entry.status),
        })
    }
}

/// The module-specific field, or `N/A` when it is missing or falsy
pub fn module_field_value(entry: &ListingEntry) -> String {
    field_label(entry.entry_type)
        .field
        .value(entry)
        .filter(|v| v.is_truthy())
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// `date`, falling back to `creationDate` (stock counts only carry the latter)
pub fn display_date(entry: &ListingEntry) -> String {
    entry
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .or(entry.creation_date.as_deref())
        .unwrap_or_default()
        .to_string()
}
