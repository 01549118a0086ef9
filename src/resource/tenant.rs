//! Tenant records.

use serde::{Deserialize, Serialize};

use super::{RecordFields, RecordId, Resource, trim_opt};

/// A tenant as the remote collection returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: RecordId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Opaque reference to a landlord, resolved remotely.
    pub landlord_id: String,
    /// Opaque reference to the occupied property, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

/// Tenant create-form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TenantFields {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub landlord_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

impl Resource for Tenant {
    const BASE: &'static str = "tenants";
    const SINGULAR: &'static str = "tenant";
    const PLURAL: &'static str = "tenants";

    type Fields = TenantFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> TenantFields {
        TenantFields {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            landlord_id: self.landlord_id.clone(),
            property_id: self.property_id.clone(),
        }
    }
}

impl RecordFields for TenantFields {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("phone_number", &self.phone_number),
            ("email", &self.email),
            ("landlord_id", &self.landlord_id),
        ]
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            landlord_id: self.landlord_id.trim().to_string(),
            property_id: trim_opt(&self.property_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_server_json() {
        let json = r#"{"id": 42, "name": "Jane", "phone_number": "555-1234",
                       "email": "jane@x.com", "landlord_id": "L1"}"#;
        let tenant: Tenant = serde_json::from_str(json).unwrap();
        assert_eq!(tenant.id, 42);
        assert_eq!(tenant.name, "Jane");
        assert_eq!(tenant.property_id, None);
    }

    #[test]
    fn test_required_covers_all_but_property() {
        let fields = TenantFields::default();
        let names: Vec<&str> = fields.required().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["name", "phone_number", "email", "landlord_id"]);
    }

    #[test]
    fn test_trimmed() {
        let fields = TenantFields {
            name: " Jane ".to_string(),
            phone_number: "555-1234".to_string(),
            email: " jane@x.com".to_string(),
            landlord_id: "L1 ".to_string(),
            property_id: Some("  ".to_string()),
        };
        let trimmed = fields.trimmed();
        assert_eq!(trimmed.name, "Jane");
        assert_eq!(trimmed.email, "jane@x.com");
        assert_eq!(trimmed.landlord_id, "L1");
        assert_eq!(trimmed.property_id, None);
    }

    #[test]
    fn test_query_encoding_omits_absent_property() {
        let fields = TenantFields {
            name: "Jane".to_string(),
            phone_number: "555-1234".to_string(),
            email: "jane@x.com".to_string(),
            landlord_id: "L1".to_string(),
            property_id: None,
        };
        let encoded = serde_urlencoded::to_string(&fields).unwrap();
        assert_eq!(
            encoded,
            "name=Jane&phone_number=555-1234&email=jane%40x.com&landlord_id=L1"
        );
    }
}
