//! Validation primitives: check a raw JSON value against a required shape.
//!
//! Each primitive takes the raw value and the owning option's name (for the
//! error message) and returns the typed value or an [`OptionError`] stating
//! the option and the expected shape. Null is rejected everywhere with the
//! shape-specific message.

use serde_json::Value;

use crate::charset::Charset;
use crate::duration::IsoDuration;
use crate::error::OptionError;
use crate::proxy::{ProxyKind, ProxySpec};

/// Accept only the two JSON boolean literals.
pub fn require_boolean(value: &Value, name: &str) -> Result<bool, OptionError> {
    match value {
        Value::Bool(b) => Ok(*b),
        _ => Err(mismatch(name, "boolean")),
    }
}

/// Accept only a JSON string. Empty strings are valid.
pub fn require_string(value: &Value, name: &str) -> Result<String, OptionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(mismatch(name, "string")),
    }
}

/// Accept a JSON string parseable as an ISO-8601 duration.
pub fn require_duration(value: &Value, name: &str) -> Result<IsoDuration, OptionError> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| mismatch(name, "duration"))
}

/// Accept a JSON string naming a charset known to the registry.
pub fn require_charset(value: &Value, name: &str) -> Result<Charset, OptionError> {
    value
        .as_str()
        .and_then(Charset::for_name)
        .ok_or_else(|| mismatch(name, "charset name"))
}

/// Accept a JSON string that case-sensitively matches one of `allowed`.
/// Returns the matched label; anything else, string or not, reports the
/// allowed set in declaration order.
pub fn require_label(
    value: &Value,
    name: &str,
    allowed: &'static [&'static str],
) -> Result<&'static str, OptionError> {
    value
        .as_str()
        .and_then(|s| allowed.iter().find(|l| **l == s).copied())
        .ok_or_else(|| OptionError::UnknownEnumMember {
            name: name.to_owned(),
            allowed: allowed.to_vec(),
        })
}

/// Accept a JSON array whose every element is a string.
pub fn require_string_list(value: &Value, name: &str) -> Result<Vec<String>, OptionError> {
    let items = value.as_array().ok_or_else(|| mismatch(name, "list of string"))?;
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(mismatch(name, "list of string")),
        })
        .collect()
}

/// Accept a JSON array whose every element is an integer fitting `i32`.
/// An element that is numeric but overflows fails the whole list.
pub fn require_int_list(value: &Value, name: &str) -> Result<Vec<i32>, OptionError> {
    let items = value.as_array().ok_or_else(|| mismatch(name, "list of int"))?;
    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => match n.as_i64() {
                Some(i) => i32::try_from(i).map_err(|_| OptionError::OutOfRange {
                    name: name.to_owned(),
                    expected: "list of int",
                }),
                // u64-only numbers overflow i32 as well; floats are not ints.
                None if n.is_u64() => Err(OptionError::OutOfRange {
                    name: name.to_owned(),
                    expected: "list of int",
                }),
                None => Err(mismatch(name, "list of int")),
            },
            _ => Err(mismatch(name, "list of int")),
        })
        .collect()
}

/// Accept a JSON object with exactly the fields `type` (a proxy-kind label),
/// `host` (string), and `port` (integer in 0..=65535).
pub fn require_proxy(value: &Value, name: &str) -> Result<ProxySpec, OptionError> {
    let malformed = || OptionError::MalformedComposite {
        name: name.to_owned(),
        expected: "proxy",
    };

    let obj = value.as_object().ok_or_else(malformed)?;
    if obj.len() != 3 {
        return Err(malformed());
    }

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .and_then(ProxyKind::from_label)
        .ok_or_else(malformed)?;
    let host = obj.get("host").and_then(Value::as_str).ok_or_else(malformed)?;
    let port = obj
        .get("port")
        .and_then(Value::as_i64)
        .and_then(|p| u16::try_from(p).ok())
        .ok_or_else(malformed)?;

    Ok(ProxySpec::new(kind, host, port))
}

/// The JSON kind of a value, for document-level error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn mismatch(name: &str, expected: &'static str) -> OptionError {
    OptionError::TypeMismatch {
        name: name.to_owned(),
        expected,
    }
}
