//! Contractor records.

use serde::{Deserialize, Serialize};

use super::{RecordFields, RecordId, Resource};

/// A contractor as the remote collection returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: RecordId,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Free-text description of the work the contractor does.
    pub work: String,
    pub landlord_id: String,
}

/// Contractor create-form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractorFields {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub work: String,
    pub landlord_id: String,
}

impl Resource for Contractor {
    const BASE: &'static str = "contractors";
    const SINGULAR: &'static str = "contractor";
    const PLURAL: &'static str = "contractors";

    type Fields = ContractorFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> ContractorFields {
        ContractorFields {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            work: self.work.clone(),
            landlord_id: self.landlord_id.clone(),
        }
    }
}

impl RecordFields for ContractorFields {
    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("phone_number", &self.phone_number),
            ("email", &self.email),
            ("work", &self.work),
            ("landlord_id", &self.landlord_id),
        ]
    }

    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            work: self.work.trim().to_string(),
            landlord_id: self.landlord_id.trim().to_string(),
        }
    }
}
