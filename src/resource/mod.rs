//! Resource kinds and the traits that generalize the panel machinery
//! over them.
//!
//! Each kind is a record type mirroring the remote JSON plus an id-less
//! field-set type used as the structured create-form draft. The panel
//! store, sync controller, and HTTP collection client are all generic
//! over these two traits; the kinds differ only in field shape.

pub mod contractor;
pub mod issue;
pub mod property;
pub mod tenant;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use contractor::{Contractor, ContractorFields};
pub use issue::{Issue, IssueFields};
pub use property::{Property, PropertyFields};
pub use tenant::{Tenant, TenantFields};

/// Server-assigned record identifier. Records fetched from the remote
/// always carry one; field sets never do.
pub type RecordId = u64;

/// A record of one resource kind, as the remote collection returns it.
pub trait Resource:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection path segment on the remote API, e.g. `tenants`.
    const BASE: &'static str;

    /// Singular display name for messages.
    const SINGULAR: &'static str;

    /// Plural display name for messages.
    const PLURAL: &'static str;

    /// The id-less field set for this kind (create form / update payload).
    type Fields: RecordFields;

    fn id(&self) -> RecordId;

    /// The record's field values, without the id. Updates send this.
    fn fields(&self) -> Self::Fields;
}

/// The structured form-state value for one kind: every mutable field,
/// no id. Serializes to the query-parameter payload of create/update.
pub trait RecordFields:
    Clone + fmt::Debug + Default + Serialize + Send + Sync + 'static
{
    /// Name/value pairs of the fields that must be non-empty on create.
    fn required(&self) -> Vec<(&'static str, &str)>;

    /// Copy with surrounding whitespace removed from every text field.
    fn trimmed(&self) -> Self;
}

/// Trim an optional reference field, dropping it entirely when it
/// trims to nothing.
pub(crate) fn trim_opt(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_opt() {
        assert_eq!(trim_opt(&Some("  L1 ".to_string())), Some("L1".to_string()));
        assert_eq!(trim_opt(&Some("   ".to_string())), None);
        assert_eq!(trim_opt(&None), None);
    }
}
