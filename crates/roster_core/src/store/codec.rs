//! JSON codec for the persisted roster blob.
//!
//! Wire shape: an array of `{id, name, age, hours, type, payRate, salary}`.

use crate::model::employee::Employee;
use crate::normalize::RawEmployee;
use crate::store::StoreResult;

/// Serializes the whole collection in display order.
pub fn encode_employees(employees: &[Employee]) -> StoreResult<String> {
    Ok(serde_json::to_string(employees)?)
}

/// Parses a stored blob into raw records for normalization.
///
/// # Errors
/// - `StoreError::Codec` when the blob is not a JSON array of objects.
pub fn decode_employees(blob: &str) -> StoreResult<Vec<RawEmployee>> {
    Ok(serde_json::from_str(blob)?)
}
