//! Request body extraction that never rejects

use std::convert::Infallible;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON body that falls back to `T::default()` instead of rejecting
///
/// Missing, malformed, non-object and wrongly-typed bodies all produce the
/// default. Unknown fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "unreadable request body, treating as empty");
                return Ok(Self(T::default()));
            }
        };

        Ok(Self(parse_lenient(&bytes)))
    }
}

/// Parse a JSON object body, defaulting on anything else
pub fn parse_lenient<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    if bytes.is_empty() {
        return T::default();
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "request body has unexpected shape, treating as empty");
            T::default()
        }),
        Ok(_) => T::default(),
        Err(e) => {
            tracing::debug!(error = %e, "malformed request body, treating as empty");
            T::default()
        }
    }
}

/// JavaScript-style truthiness of an optional JSON value
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Coerce a truthy scalar to a string
#[must_use]
pub fn truthy_string(value: Option<&Value>) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Coerce a JSON number or numeric string to a count
///
/// Negative values clamp to zero, fractions truncate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_count(value: Option<&Value>) -> Option<usize> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if n.is_nan() {
        return None;
    }
    Some(n.max(0.0).trunc() as usize)
}
