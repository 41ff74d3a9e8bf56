//! Response envelope normalisation
//!
//! The backend wraps payloads in several shapes depending on the route:
//!
//! - `{ "data": [...], "totalPages": 3, "total": 27 }` (paginated lists)
//! - `{ "success": true, "data": ..., "message": "..." }`
//! - `{ "status": "success", "data": ... }` or `{ "status": "error", "error": "..." }`
//! - a bare JSON array
//!
//! Everything funnels through [`decode_list`], [`decode_one`] and [`check_ack`]
//! so callers only ever see `ListPage<T>`, `T` or an [`Error`].

use backoffice_core::ListPage;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

/// Extract an application-level failure, if the envelope reports one
fn application_error(body: &Value) -> Option<Error> {
    let obj = body.as_object()?;

    let failed = obj.get("success").and_then(Value::as_bool) == Some(false)
        || obj.get("status").and_then(Value::as_str) == Some("error")
        || obj.get("error").is_some_and(|e| !e.is_null() && e != &Value::Bool(false));

    if !failed {
        return None;
    }

    Some(Error::Api {
        message: error_message(body).unwrap_or_else(|| "request failed".to_string()),
    })
}

/// Best-effort human message from an error body
pub(crate) fn error_message(body: &Value) -> Option<String> {
    let obj = body.as_object()?;
    ["error", "message"].iter().find_map(|key| match obj.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Object(inner)) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

fn as_u64(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Normalise a list response into a [`ListPage`]
pub fn decode_list<T: DeserializeOwned>(body: Value) -> Result<ListPage<T>, Error> {
    if let Some(err) = application_error(&body) {
        return Err(err);
    }

    let (rows, total, total_pages) = match body {
        Value::Array(rows) => (rows, None, None),
        Value::Object(mut obj) => {
            let total = as_u64(obj.get("total"));
            let total_pages = as_u64(obj.get("totalPages").or_else(|| obj.get("total_pages")))
                .and_then(|n| u32::try_from(n).ok());
            let rows = match obj.remove("data") {
                Some(Value::Array(rows)) => rows,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    return Err(Error::Deserialization(format!(
                        "expected an array in `data`, got {}",
                        kind(&other)
                    )))
                }
            };
            (rows, total, total_pages)
        }
        Value::Null => (Vec::new(), None, None),
        other => {
            return Err(Error::Deserialization(format!(
                "expected a list envelope, got {}",
                kind(&other)
            )))
        }
    };

    let items = rows
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| Error::Deserialization(e.to_string()))?;

    Ok(ListPage::new(items).with_totals(total, total_pages))
}

/// Normalise a single-record response. `data` is unwrapped when present.
pub fn decode_one<T: DeserializeOwned>(body: Value) -> Result<T, Error> {
    if let Some(err) = application_error(&body) {
        return Err(err);
    }

    let payload = match body {
        Value::Object(mut obj) if obj.contains_key("data") => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| Error::Deserialization(e.to_string()))
}

/// Accept any mutation response that does not report a failure
pub fn check_ack(body: &Value) -> Result<(), Error> {
    match application_error(body) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
