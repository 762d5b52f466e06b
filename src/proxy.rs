//! Proxy descriptor: the one composite option value.
//!
//! A proxy is described by exactly three fields — `type`, `host`, `port` —
//! and round-trips between the typed form and the canonical JSON object
//! `{"type":"SOCKS","host":"localhost","port":33333}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The closed set of proxy kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProxyKind {
    Direct,
    Http,
    Socks,
}

impl ProxyKind {
    /// Labels in declaration order, as they appear in the JSON `type` field.
    pub const LABELS: &'static [&'static str] = &["DIRECT", "HTTP", "SOCKS"];

    pub fn from_label(label: &str) -> Option<ProxyKind> {
        match label {
            "DIRECT" => Some(ProxyKind::Direct),
            "HTTP" => Some(ProxyKind::Http),
            "SOCKS" => Some(ProxyKind::Socks),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProxyKind::Direct => "DIRECT",
            ProxyKind::Http => "HTTP",
            ProxyKind::Socks => "SOCKS",
        }
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated proxy descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProxySpec {
    #[serde(rename = "type")]
    pub kind: ProxyKind,
    pub host: String,
    pub port: u16,
}

impl ProxySpec {
    pub fn new(kind: ProxyKind, host: impl Into<String>, port: u16) -> Self {
        Self {
            kind,
            host: host.into(),
            port,
        }
    }

    /// Canonical JSON object form, fields in `type`, `host`, `port` order.
    pub fn to_json(&self) -> Value {
        json!({
            "type": self.kind.label(),
            "host": &self.host,
            "port": self.port,
        })
    }
}

impl fmt::Display for ProxySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
