//! Property records.

use serde::{Deserialize, Serialize};

use super::{RecordFields, RecordId, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: RecordId,
    pub address: String,
    pub landlord_id: String,
}

/// Property create-form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyFields {
    pub address: String,
    pub landlord_id: String,
}

impl Resource for Property {
    const BASE: &'static str = "properties";
    const SINGULAR: &'static str = "property";
    const PLURAL: &'static str = "properties";

    type Fields = PropertyFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> PropertyFields {
        PropertyFields {
            address: self.address.clone(),
            landlord_id: self.landlord_id.clone(),
        }
    }
}

impl RecordFields for PropertyFields {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("address", &self.address),
            ("landlord_id", &self.landlord_id),
        ]
    }

    fn trimmed(&self) -> Self {
        Self {
            address: self.address.trim().to_string(),
            landlord_id: self.landlord_id.trim().to_string(),
        }
    }
}
