//! Parsing of rate feed documents.
//!
//! Rate documents look like:
//!
//! ```json
//! { "date": "2024-01-01", "usd": { "eur": 0.91, "uah": 41.71, ... } }
//! ```

use std::collections::BTreeMap;

use ccnv_common::currency::{CurrencyCatalog, ExchangeRate};
use serde_json::Value;

use super::RateError;

const DATE_FIELD: &str = "date";

pub(super) fn parse_catalog(body: &[u8]) -> Result<CurrencyCatalog, serde_json::Error> {
    let entries: BTreeMap<String, String> = serde_json::from_slice(body)?;
    Ok(CurrencyCatalog::from(entries))
}

pub(super) fn parse_rate(body: &[u8], from: &str, to: &str) -> Result<ExchangeRate, RateError> {
    let document: Value = serde_json::from_slice(body).map_err(|e| malformed(e.to_string()))?;

    let fields = match document {
        Value::Object(fields) => fields,
        other => {
            return Err(malformed(format!(
                "expected an object at the top level, got {}",
                kind(&other)
            )));
        }
    };

    let as_of: String = match fields.get(DATE_FIELD) {
        None => String::new(),
        Some(Value::String(date)) => date.clone(),
        Some(other) => {
            return Err(malformed(format!(
                "\"{DATE_FIELD}\" should be a string, got {}",
                kind(other)
            )));
        }
    };

    let quotes = match fields.get(from) {
        Some(Value::Object(quotes)) => quotes,
        Some(other) => {
            return Err(malformed(format!(
                "\"{from}\" should hold an object of rates, got {}",
                kind(other)
            )));
        }
        None => return Err(RateError::CurrencyNotFound(from.to_string())),
    };

    let value = quotes
        .get(to)
        .ok_or_else(|| RateError::CurrencyNotFound(to.to_string()))?;

    let rate: f64 = value
        .as_f64()
        .ok_or_else(|| malformed(format!("rate {from}/{to} should be a number, got {}", kind(value))))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(malformed(format!("rate {from}/{to} must be positive, got {rate}")));
    }

    Ok(ExchangeRate::new(from, to, rate, as_of))
}

fn malformed(reason: String) -> RateError {
    RateError::MalformedResponse(reason)
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
