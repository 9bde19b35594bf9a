//! Listing entry model as delivered by the backend

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ListingError;

/// Module code of a listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    /// Inventory adjustment
    Ia,
    /// Direct store delivery
    Dsd,
    /// Purchase order
    Po,
    /// Transfer in
    Tsfin,
    /// Transfer out
    Tsfout,
    /// Stock count
    Sc,
    /// Return to vendor
    Rtv,
}

impl EntryType {
    pub const ALL: [EntryType; 7] = [
        EntryType::Ia,
        EntryType::Dsd,
        EntryType::Po,
        EntryType::Tsfin,
        EntryType::Tsfout,
        EntryType::Sc,
        EntryType::Rtv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Ia => "IA",
            EntryType::Dsd => "DSD",
            EntryType::Po => "PO",
            EntryType::Tsfin => "TSFIN",
            EntryType::Tsfout => "TSFOUT",
            EntryType::Sc => "SC",
            EntryType::Rtv => "RTV",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ListingError::UnknownEntryType(s.to_string()))
    }
}

/// Every status label the backend is known to produce.
///
/// Labels are case-sensitive: `Complete`, `Completed` and `complete` are
/// three distinct statuses, as are `Pending` and `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Complete,
    Completed,
    CompleteLower,
    InProgress,
    Saved,
    Pending,
    PendingLower,
    Shipped,
    Delivered,
    NewRequest,
    Accepted,
    PartiallyAccepted,
    Rejected,
    New,
    Dispatched,
}

impl Status {
    pub const ALL: [Status; 15] = [
        Status::Complete,
        Status::Completed,
        Status::CompleteLower,
        Status::InProgress,
        Status::Saved,
        Status::Pending,
        Status::PendingLower,
        Status::Shipped,
        Status::Delivered,
        Status::NewRequest,
        Status::Accepted,
        Status::PartiallyAccepted,
        Status::Rejected,
        Status::New,
        Status::Dispatched,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Complete => "Complete",
            Status::Completed => "Completed",
            Status::CompleteLower => "complete",
            Status::InProgress => "In Progress",
            Status::Saved => "Saved",
            Status::Pending => "Pending",
            Status::PendingLower => "pending",
            Status::Shipped => "Shipped",
            Status::Delivered => "Delivered",
            Status::NewRequest => "New Request",
            Status::Accepted => "Accepted",
            Status::PartiallyAccepted => "Partially Accepted",
            Status::Rejected => "Rejected",
            Status::New => "New",
            Status::Dispatched => "Dispatched",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ListingError::UnknownStatus(s.to_string()))
    }
}

/// A displayable JSON scalar (backends send ids and codes as text or numbers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    /// JavaScript truthiness: empty text, zero and `false` are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Scalar::Bool(b) => *b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => match n.as_f64() {
                // 12.0 renders as 12
                Some(v) if n.is_f64() => write!(f, "{}", v),
                _ => write!(f, "{}", n),
            },
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

/// Opaque entry identifier, unique within its entry type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Scalar);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Into<Scalar>> From<T> for EntryId {
    fn from(value: T) -> Self {
        EntryId(value.into())
    }
}

/// One row of the listing collection.
///
/// Fields the card does not read are kept in `extra` so the entry reaches
/// the detail screen exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    pub id: EntryId,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sku: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asn_count: Option<Scalar>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListingEntry {
    /// An entry with only the required fields set
    pub fn new(id: impl Into<EntryId>, entry_type: EntryType, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entry_type,
            status: status.into(),
            date: None,
            creation_date: None,
            reason: None,
            supplier_id: None,
            store_id: None,
            total_sku: None,
            units: None,
            asn_count: None,
            extra: Map::new(),
        }
    }

    /// The status as a known label, or a lookup failure
    pub fn parsed_status(&self) -> crate::Result<Status> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_with_camel_case_fields() {
        let json = r#"{
            "id": "IA-1001",
            "type": "IA",
            "status": "In Progress",
            "date": "2024-03-01",
            "reason": "Damaged",
            "totalSku": 12
        }"#;

        let entry: ListingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id.to_string(), "IA-1001");
        assert_eq!(entry.entry_type, EntryType::Ia);
        assert_eq!(entry.status, "In Progress");
        assert_eq!(entry.date.as_deref(), Some("2024-03-01"));
        assert_eq!(entry.reason, Some(Scalar::from("Damaged")));
        assert_eq!(entry.total_sku, Some(Scalar::from(12u64)));
        assert!(entry.extra.is_empty());
    }

    #[test]
    fn parse_numeric_id_and_supplier() {
        let json = r#"{"id": 42, "type": "PO", "status": "Pending", "supplierId": 7001, "asnCount": 3}"#;

        let entry: ListingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id.to_string(), "42");
        assert_eq!(entry.supplier_id.map(|s| s.to_string()), Some("7001".to_string()));
        assert_eq!(entry.asn_count, Some(Scalar::from(3u64)));
    }

    #[test]
    fn counts_accept_floats_and_text() {
        let json = r#"[
            {"id": "IA-1", "type": "IA", "status": "Saved", "totalSku": 12.0},
            {"id": "IA-2", "type": "IA", "status": "Saved", "units": "12"},
            {"id": "PO-1", "type": "PO", "status": "Pending", "asnCount": 2.5}
        ]"#;

        let entries: Vec<ListingEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].total_sku.as_ref().map(|c| c.to_string()), Some("12".to_string()));
        assert_eq!(entries[1].units, Some(Scalar::from("12")));
        assert_eq!(entries[2].asn_count.as_ref().map(|c| c.to_string()), Some("2.5".to_string()));
    }

    #[test]
    fn unknown_fields_are_kept_and_written_back() {
        let json = r#"{"id": "T1", "type": "TSFOUT", "status": "Shipped", "storeId": "S9", "carrier": "DHL"}"#;

        let entry: ListingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.extra.get("carrier"), Some(&Value::from("DHL")));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["carrier"], "DHL");
        assert_eq!(value["storeId"], "S9");
        assert_eq!(value["type"], "TSFOUT");
        assert!(value.get("date").is_none());
    }

    #[test]
    fn unknown_entry_type_is_rejected() {
        let json = r#"{"id": "X", "type": "GRN", "status": "New"}"#;
        assert!(serde_json::from_str::<ListingEntry>(json).is_err());
        let err = "GRN".parse::<EntryType>().unwrap_err();
        assert!(matches!(err, ListingError::UnknownEntryType(ref t) if t == "GRN"));
    }

    #[test]
    fn entry_type_codes() {
        for entry_type in EntryType::ALL {
            assert_eq!(entry_type.as_str().parse::<EntryType>().unwrap(), entry_type);
        }
        assert_eq!(serde_json::to_value(EntryType::Tsfin).unwrap(), "TSFIN");
    }

    #[test]
    fn status_labels_are_case_sensitive() {
        assert_eq!("Complete".parse::<Status>().unwrap(), Status::Complete);
        assert_eq!("complete".parse::<Status>().unwrap(), Status::CompleteLower);
        assert_eq!("Completed".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!("pending".parse::<Status>().unwrap(), Status::PendingLower);
        assert!("COMPLETE".parse::<Status>().is_err());
        assert!("in progress".parse::<Status>().is_err());
    }

    #[test]
    fn every_status_label_parses_back() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn scalar_truthiness() {
        assert!(Scalar::from("x").is_truthy());
        assert!(!Scalar::from("").is_truthy());
        assert!(Scalar::from(3).is_truthy());
        assert!(!Scalar::from(0).is_truthy());
        assert!(!Scalar::Bool(false).is_truthy());
    }
}
