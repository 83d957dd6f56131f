use crate::Error;
use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::HashMap;

/// The response envelope handed back to the invocation harness.
///
/// Every recognised request produces one of these, failures included; only
/// malformed bodies and backend errors escape as `Err` instead.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    /// Build a response with the fixed header set and a JSON-serialised body.
    pub fn json(status_code: u16, body: Value) -> Result<ApiResponse, Error> {
        let body: String = serde_json::to_string(&bridge_numbers(body))?;

        Ok(ApiResponse {
            status_code,
            headers: default_headers(),
            body,
        })
    }
}

fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token".to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            "OPTIONS,GET,POST,PUT,DELETE".to_string(),
        ),
    ])
}

/// The table stores numbers with arbitrary precision, so values read back
/// can surface as floats even when they were written as integers. Re-emit
/// whole-valued floats as integers before encoding.
fn bridge_numbers(value: Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(bridge_number(number)),
        Value::Array(values) => Value::Array(values.into_iter().map(bridge_numbers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| (name, bridge_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

fn bridge_number(number: Number) -> Number {
    if !number.is_f64() {
        return number;
    }

    match number.as_f64() {
        Some(float)
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 =>
        {
            Number::from(float as i64)
        }
        _ => number,
    }
}
