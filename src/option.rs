//! The file option: an immutable, validated (name, value) unit.
//!
//! Construction always validates, so holding a `FileOption` is proof its
//! value is well-formed for its name. Two construction paths exist and agree:
//! from a raw JSON value ([`FileOption::from_json`]) and from an
//! already-typed payload ([`FileOption::new`]); both yield equal options for
//! the same logical value.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::OptionError;
use crate::kind::OptionKind;
use crate::sink::{ConfigSink, ParamValue};
use crate::value::OptionValue;

/// An immutable, validated option. Equality and hashing are over
/// (name, value) only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileOption {
    kind: OptionKind,
    value: OptionValue,
}

impl FileOption {
    /// Decode from a raw JSON value, validating against the kind's shape.
    pub fn from_json(kind: OptionKind, raw: &Value) -> Result<FileOption, OptionError> {
        kind.validate(raw).map(|value| FileOption { kind, value })
    }

    /// Construct from an already-typed payload. Equivalent to decoding the
    /// payload's JSON form: the shape (and, for labels, set membership) is
    /// still checked.
    pub fn new(kind: OptionKind, value: OptionValue) -> Result<FileOption, OptionError> {
        kind.check_payload(&value)?;
        Ok(FileOption { kind, value })
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// The option name, e.g. `"ftp:proxy"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// The canonical JSON form of the value alone.
    pub fn value_json(&self) -> Value {
        self.value.to_json()
    }

    /// Write this option's effect into the sink. Validation already happened
    /// at construction; this is a pure keyed write.
    pub fn apply(&self, sink: &mut dyn ConfigSink) {
        sink.set_param(self.kind.param_key(), self.param_value());
    }

    fn param_value(&self) -> ParamValue {
        match &self.value {
            OptionValue::Bool(b) => ParamValue::Bool(*b),
            OptionValue::Text(s) => ParamValue::Text(s.clone()),
            OptionValue::Duration(d) => ParamValue::Duration(*d),
            OptionValue::Charset(c) => ParamValue::Text(c.name().to_owned()),
            OptionValue::Label(l) => ParamValue::Text((*l).to_owned()),
            OptionValue::TextList(items) => ParamValue::TextList(items.clone()),
            OptionValue::IntList(items) => ParamValue::IntList(items.clone()),
            OptionValue::Proxy(spec) => ParamValue::Proxy(spec.clone()),
        }
    }
}

impl fmt::Display for FileOption {
    /// Canonical text: `{"<name>":<value>}` with no extra whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = Map::with_capacity(1);
        map.insert(self.name().to_owned(), self.value.to_json());
        write!(f, "{}", Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::duration::IsoDuration;
    use crate::fixtures::test::RecordingSink;
    use crate::proxy::{ProxyKind, ProxySpec};
    use serde_json::json;

    #[test]
    fn construction_paths_agree() {
        let decoded = FileOption::from_json(OptionKind::PassiveMode, &json!(true)).unwrap();
        let typed = FileOption::new(OptionKind::PassiveMode, OptionValue::Bool(true)).unwrap();
        assert_eq!(decoded, typed);

        let decoded =
            FileOption::from_json(OptionKind::ControlKeepAliveTimeout, &json!("PT0.003S"))
                .unwrap();
        let typed = FileOption::new(
            OptionKind::ControlKeepAliveTimeout,
            OptionValue::Duration(IsoDuration::from_millis(3)),
        )
        .unwrap();
        assert_eq!(decoded, typed);

        let decoded = FileOption::from_json(
            OptionKind::Proxy,
            &json!({"type": "SOCKS", "host": "localhost", "port": 33333}),
        )
        .unwrap();
        let typed = FileOption::new(
            OptionKind::Proxy,
            OptionValue::Proxy(ProxySpec::new(ProxyKind::Socks, "localhost", 33333)),
        )
        .unwrap();
        assert_eq!(decoded, typed);
    }

    #[test]
    fn typed_path_normalizes_like_decoded_path() {
        // An aliased charset and a denormalized duration land on the same
        // canonical values either way.
        let decoded = FileOption::from_json(OptionKind::ControlEncoding, &json!("utf8")).unwrap();
        let typed = FileOption::new(
            OptionKind::ControlEncoding,
            OptionValue::Charset(Charset::UTF_8),
        )
        .unwrap();
        assert_eq!(decoded, typed);
        assert_eq!(decoded.value_json(), json!("UTF-8"));
    }

    #[test]
    fn equal_options_hash_equal() {
        use std::collections::HashSet;
        let base = FileOption::from_json(OptionKind::FileType, &json!("BINARY")).unwrap();
        let same = FileOption::new(OptionKind::FileType, OptionValue::Label("BINARY")).unwrap();
        let other = FileOption::from_json(OptionKind::FileType, &json!("EBCDIC")).unwrap();

        assert_eq!(base, same);
        assert_ne!(base, other);

        let mut set = HashSet::new();
        set.insert(base);
        assert!(set.contains(&same));
        assert!(!set.contains(&other));
    }

    #[test]
    fn display_is_single_key_json() {
        let opt = FileOption::new(
            OptionKind::ControlKeepAliveTimeout,
            OptionValue::Duration(IsoDuration::ZERO),
        )
        .unwrap();
        assert_eq!(opt.to_string(), r#"{"ftp:controlKeepAliveTimeout":"PT0S"}"#);

        let opt = FileOption::new(
            OptionKind::Proxy,
            OptionValue::Proxy(ProxySpec::new(ProxyKind::Socks, "localhost", 33333)),
        )
        .unwrap();
        assert_eq!(
            opt.to_string(),
            r#"{"ftp:proxy":{"type":"SOCKS","host":"localhost","port":33333}}"#
        );

        let opt = FileOption::new(
            OptionKind::ControlEncoding,
            OptionValue::Charset(Charset::UTF_16BE),
        )
        .unwrap();
        assert_eq!(opt.to_string(), r#"{"ftp:controlEncoding":"UTF-16BE"}"#);
    }

    #[test]
    fn apply_writes_the_kinds_param_key() {
        let mut sink = RecordingSink::new();

        FileOption::from_json(OptionKind::ControlEncoding, &json!("UTF-8"))
            .unwrap()
            .apply(&mut sink);
        assert_eq!(sink.get("ftp.encoding"), Some(&ParamValue::Text("UTF-8".into())));

        FileOption::from_json(OptionKind::TransferAbortedOkReplyCodes, &json!([4, 9]))
            .unwrap()
            .apply(&mut sink);
        assert_eq!(
            sink.get("ftp.transfer_aborted_ok_reply_codes"),
            Some(&ParamValue::IntList(vec![4, 9]))
        );
    }

    #[test]
    fn apply_maps_proxy_to_typed_param() {
        let mut sink = RecordingSink::new();
        FileOption::from_json(
            OptionKind::Proxy,
            &json!({"type": "HTTP", "host": "127.0.0.1", "port": 23456}),
        )
        .unwrap()
        .apply(&mut sink);
        assert_eq!(
            sink.get("ftp.proxy"),
            Some(&ParamValue::Proxy(ProxySpec::new(
                ProxyKind::Http,
                "127.0.0.1",
                23456
            )))
        );
    }

    #[test]
    fn reapplying_overwrites_previous_value() {
        let mut sink = RecordingSink::new();
        FileOption::from_json(OptionKind::FileType, &json!("ASCII"))
            .unwrap()
            .apply(&mut sink);
        FileOption::from_json(OptionKind::FileType, &json!("BINARY"))
            .unwrap()
            .apply(&mut sink);
        assert_eq!(sink.get("ftp.file_type"), Some(&ParamValue::Text("BINARY".into())));
        assert_eq!(sink.writes.len(), 2);
    }

    #[test]
    fn typed_path_rejects_mismatched_payload() {
        let err = FileOption::new(OptionKind::ShortMonthNames, OptionValue::Bool(true));
        assert!(matches!(err, Err(OptionError::TypeMismatch { .. })));
    }
}
