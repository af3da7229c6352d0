//! JSON report output.

use crate::error::Result;
use serde::Serialize;

/// Pretty-printed JSON for any serializable result.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
