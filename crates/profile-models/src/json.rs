//! Shared JSON parsing for the records.

use serde::de::DeserializeOwned;

use crate::error::ModelError;

pub(crate) fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ModelError> {
    serde_json::from_str(json).map_err(|e| ModelError::ParseError {
        message: e.to_string(),
    })
}
