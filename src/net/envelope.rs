//! Decoding of the backend's response wrappers.
//!
//! Every JSON response except the allergy list wraps its payload in
//! `{ "data": ... }`; paged lists put rows under `data.content`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// The raw `data` field, or `Value::Null` when absent.
#[must_use]
pub fn data_value(response: &Value) -> Value {
    response.get("data").cloned().unwrap_or(Value::Null)
}

/// Decode the required `data` field.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `data` is missing or has the wrong shape.
pub fn data<T: DeserializeOwned>(response: &Value) -> Result<T, ApiError> {
    match response.get("data") {
        None | Some(Value::Null) => Err(ApiError::Decode("response has no data".to_owned())),
        Some(data) => Ok(T::deserialize(data)?),
    }
}

/// Decode `data.content`, treating a missing page or content as empty.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if `content` is present but malformed.
pub fn page_content<T: DeserializeOwned>(response: &Value) -> Result<Vec<T>, ApiError> {
    match response.get("data").and_then(|data| data.get("content")) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(content) => Ok(Vec::<T>::deserialize(content)?),
    }
}

/// Decode a required field nested in `data`, e.g. `data.stores`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the field is missing or malformed.
pub fn data_field<T: DeserializeOwned>(response: &Value, field: &str) -> Result<T, ApiError> {
    match response.get("data").and_then(|data| data.get(field)) {
        None | Some(Value::Null) => Err(ApiError::Decode(format!("response has no data.{field}"))),
        Some(value) => Ok(T::deserialize(value)?),
    }
}

/// Decode a list that may arrive bare or wrapped in `data`; null is empty.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the list is malformed.
pub fn bare_list<T: DeserializeOwned>(response: &Value) -> Result<Vec<T>, ApiError> {
    match response {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(Vec::<T>::deserialize(response)?),
        Value::Object(map) => match map.get("data") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(data) => Ok(Vec::<T>::deserialize(data)?),
        },
        other => Err(ApiError::Decode(format!("expected a list, got {other}"))),
    }
}
