//! # Client Domain Model
//!
//! The client record plus the typed patch and filter shapes shared by the
//! service and store layers.

use serde::{Deserialize, Serialize};

/// A client record as stored and served.
///
/// The id is externally supplied and never generated by this service. The
/// name rule (non-blank on every create or update that touches it) is
/// enforced by the service layer, not here; a deserialized record may carry
/// a blank name and will be rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Primary key
    pub id: String,

    /// Display name; must be non-blank to persist
    #[serde(default)]
    pub name: String,

    /// Contact address; optional, no format validation
    #[serde(default)]
    pub email: Option<String>,
}

/// Returns true if the value is empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Partial-update input for a client.
///
/// Absent and blank fields are both treated as "not supplied" and leave the
/// stored field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl ClientPatch {
    /// True when neither field carries a usable (non-blank) value
    pub fn is_empty(&self) -> bool {
        blank_or_absent(&self.name) && blank_or_absent(&self.email)
    }
}

fn blank_or_absent(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(is_blank)
}

/// Query-by-example filter over client records.
///
/// Matching is equality over populated fields only; an empty filter matches
/// every record.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ClientFilter {
    /// Filter matching clients with exactly the given name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Check whether a client matches every populated field
    pub fn matches(&self, client: &Client) -> bool {
        if let Some(id) = &self.id {
            if &client.id != id {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if &client.name != name {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if client.email.as_ref() != Some(email) {
                return false;
            }
        }
        true
    }
}
