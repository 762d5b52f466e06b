//! The typed payload carried by every file option.
//!
//! One sum type replaces the source-of-truth-per-option pattern: an option's
//! kind says which variant is legal, and the variant holds the already
//! validated native value. Canonical JSON rendering lives here so equality,
//! hashing, and text form all agree.

use serde_json::Value;

use crate::charset::Charset;
use crate::duration::IsoDuration;
use crate::proxy::ProxySpec;

/// A validated option payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    Duration(IsoDuration),
    Charset(Charset),
    /// A member of a kind's closed label set, stored as the matched label.
    Label(&'static str),
    TextList(Vec<String>),
    IntList(Vec<i32>),
    Proxy(ProxySpec),
}

impl OptionValue {
    /// Canonical JSON form: durations render normalized, charsets render
    /// their canonical name, everything else renders structurally.
    pub fn to_json(&self) -> Value {
        match self {
            OptionValue::Bool(b) => Value::Bool(*b),
            OptionValue::Text(s) => Value::String(s.clone()),
            OptionValue::Duration(d) => Value::String(d.to_string()),
            OptionValue::Charset(c) => Value::String(c.name().to_owned()),
            OptionValue::Label(l) => Value::String((*l).to_owned()),
            OptionValue::TextList(items) => {
                Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
            }
            OptionValue::IntList(items) => {
                Value::Array(items.iter().map(|n| Value::from(*n)).collect())
            }
            OptionValue::Proxy(spec) => spec.to_json(),
        }
    }
}
