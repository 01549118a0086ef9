//! Create-form validation shared by every resource kind.
//!
//! The rule is deliberately minimal: a create is attempted only when
//! every required field is non-empty after trimming. A blank field is a
//! silent skip, not an error. Referential integrity of the opaque
//! `landlord_id`/`property_id` strings is the server's problem.

use crate::resource::RecordFields;

/// Names of the required fields that are empty after trimming.
pub fn missing_required<F: RecordFields>(fields: &F) -> Vec<&'static str> {
    fields
        .required()
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// True when every required field has content.
pub fn required_present<F: RecordFields>(fields: &F) -> bool {
    missing_required(fields).is_empty()
}
