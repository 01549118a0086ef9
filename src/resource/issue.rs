//! Maintenance issue records.

use serde::{Deserialize, Serialize};

use super::{RecordFields, RecordId, Resource, trim_opt};

/// A maintenance issue as the remote collection returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: RecordId,
    pub description: String,
    pub location: String,
    /// Action to take to fix the issue.
    pub action: String,
    #[serde(default)]
    pub resolved: bool,
    /// Opaque reference to the affected property, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

/// Issue create-form fields. New issues start unresolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueFields {
    pub description: String,
    pub location: String,
    pub action: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

impl Resource for Issue {
    const BASE: &'static str = "issues";
    const SINGULAR: &'static str = "issue";
    const PLURAL: &'static str = "issues";

    type Fields = IssueFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> IssueFields {
        IssueFields {
            description: self.description.clone(),
            location: self.location.clone(),
            action: self.action.clone(),
            resolved: self.resolved,
            property_id: self.property_id.clone(),
        }
    }
}

impl RecordFields for IssueFields {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("description", &self.description),
            ("location", &self.location),
            ("action", &self.action),
        ]
    }

    fn trimmed(&self) -> Self {
        Self {
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            action: self.action.trim().to_string(),
            resolved: self.resolved,
            property_id: trim_opt(&self.property_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_defaults_false_when_absent() {
        let json = r#"{"id": 3, "description": "Leaky faucet",
                       "location": "Kitchen", "action": "Call plumber"}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(!issue.resolved);
        assert_eq!(issue.property_id, None);
    }

    #[test]
    fn test_resolved_survives_field_copy() {
        let issue = Issue {
            id: 3,
            description: "Leaky faucet".to_string(),
            location: "Kitchen".to_string(),
            action: "Call plumber".to_string(),
            resolved: true,
            property_id: Some("P9".to_string()),
        };
        let fields = issue.fields();
        assert!(fields.resolved);
        assert_eq!(fields.property_id.as_deref(), Some("P9"));
    }

    #[test]
    fn test_query_encoding_includes_resolved_flag() {
        let fields = IssueFields {
            description: "Broken window".to_string(),
            location: "2F".to_string(),
            action: "Replace glass".to_string(),
            resolved: false,
            property_id: None,
        };
        let encoded = serde_urlencoded::to_string(&fields).unwrap();
        assert_eq!(
            encoded,
            "description=Broken+window&location=2F&action=Replace+glass&resolved=false"
        );
    }
}
