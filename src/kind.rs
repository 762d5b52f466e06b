//! The built-in option kinds: fixed names, shapes, and sink parameter keys.
//!
//! One tag per option replaces a class per option. A kind is the compile-time
//! identity of a setting: it owns the option name, the validation shape, and
//! the parameter key its value is written under. The [`ALL`](OptionKind::ALL)
//! table is the registration list the built-in registry is built from.

use serde_json::Value;

use crate::error::OptionError;
use crate::validate;
use crate::value::OptionValue;

/// Validation shape of an option kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Bool,
    Text,
    Duration,
    Charset,
    /// A finite enum over a closed, ordered label set.
    Labels(&'static [&'static str]),
    TextList,
    IntList,
    Proxy,
}

/// A built-in option kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    AutodetectUtf8,
    ConnectTimeout,
    ControlEncoding,
    ControlKeepAliveReplyTimeout,
    ControlKeepAliveTimeout,
    DataTimeout,
    DefaultDateFormat,
    EntryParser,
    FileType,
    MdtmLastModifiedTime,
    PassiveMode,
    Proxy,
    RecentDateFormat,
    RemoteVerification,
    ServerLanguageCode,
    ServerTimeZoneId,
    ShortMonthNames,
    SoTimeout,
    TransferAbortedOkReplyCodes,
    UserDirAsRoot,
}

/// Transfer-mode labels for `ftp:fileType`, in declaration order.
pub const FILE_TYPE_LABELS: &[&str] = &["ASCII", "BINARY", "LOCAL", "EBCDIC"];

impl OptionKind {
    /// Every built-in kind; drives the built-in registry.
    pub const ALL: [OptionKind; 20] = [
        OptionKind::AutodetectUtf8,
        OptionKind::ConnectTimeout,
        OptionKind::ControlEncoding,
        OptionKind::ControlKeepAliveReplyTimeout,
        OptionKind::ControlKeepAliveTimeout,
        OptionKind::DataTimeout,
        OptionKind::DefaultDateFormat,
        OptionKind::EntryParser,
        OptionKind::FileType,
        OptionKind::MdtmLastModifiedTime,
        OptionKind::PassiveMode,
        OptionKind::Proxy,
        OptionKind::RecentDateFormat,
        OptionKind::RemoteVerification,
        OptionKind::ServerLanguageCode,
        OptionKind::ServerTimeZoneId,
        OptionKind::ShortMonthNames,
        OptionKind::SoTimeout,
        OptionKind::TransferAbortedOkReplyCodes,
        OptionKind::UserDirAsRoot,
    ];

    /// The namespaced option name, fixed at definition.
    pub fn name(self) -> &'static str {
        match self {
            OptionKind::AutodetectUtf8 => "ftp:useAutodetectUtf8",
            OptionKind::ConnectTimeout => "ftp:connectTimeout",
            OptionKind::ControlEncoding => "ftp:controlEncoding",
            OptionKind::ControlKeepAliveReplyTimeout => "ftp:controlKeepAliveReplyTimeout",
            OptionKind::ControlKeepAliveTimeout => "ftp:controlKeepAliveTimeout",
            OptionKind::DataTimeout => "ftp:dataTimeout",
            OptionKind::DefaultDateFormat => "ftp:defaultDateFormat",
            OptionKind::EntryParser => "ftp:entryParser",
            OptionKind::FileType => "ftp:fileType",
            OptionKind::MdtmLastModifiedTime => "ftp:useMdtm",
            OptionKind::PassiveMode => "ftp:passiveMode",
            OptionKind::Proxy => "ftp:proxy",
            OptionKind::RecentDateFormat => "ftp:recentDateFormat",
            OptionKind::RemoteVerification => "ftp:remoteVerification",
            OptionKind::ServerLanguageCode => "ftp:serverLanguageCode",
            OptionKind::ServerTimeZoneId => "ftp:serverTimeZoneId",
            OptionKind::ShortMonthNames => "ftp:shortMonthNames",
            OptionKind::SoTimeout => "ftp:soTimeout",
            OptionKind::TransferAbortedOkReplyCodes => "ftp:transferAbortedOkReplyCodes",
            OptionKind::UserDirAsRoot => "ftp:useUserDirAsRoot",
        }
    }

    /// The shape a raw value must satisfy.
    pub fn shape(self) -> ValueShape {
        match self {
            OptionKind::AutodetectUtf8
            | OptionKind::MdtmLastModifiedTime
            | OptionKind::PassiveMode
            | OptionKind::RemoteVerification
            | OptionKind::UserDirAsRoot => ValueShape::Bool,
            OptionKind::DefaultDateFormat
            | OptionKind::EntryParser
            | OptionKind::RecentDateFormat
            | OptionKind::ServerLanguageCode
            | OptionKind::ServerTimeZoneId => ValueShape::Text,
            OptionKind::ConnectTimeout
            | OptionKind::ControlKeepAliveReplyTimeout
            | OptionKind::ControlKeepAliveTimeout
            | OptionKind::DataTimeout
            | OptionKind::SoTimeout => ValueShape::Duration,
            OptionKind::ControlEncoding => ValueShape::Charset,
            OptionKind::FileType => ValueShape::Labels(FILE_TYPE_LABELS),
            OptionKind::ShortMonthNames => ValueShape::TextList,
            OptionKind::TransferAbortedOkReplyCodes => ValueShape::IntList,
            OptionKind::Proxy => ValueShape::Proxy,
        }
    }

    /// The sink parameter key this kind writes to. Distinct per kind.
    pub fn param_key(self) -> &'static str {
        match self {
            OptionKind::AutodetectUtf8 => "ftp.autodetect_utf8",
            OptionKind::ConnectTimeout => "ftp.connect_timeout",
            OptionKind::ControlEncoding => "ftp.encoding",
            OptionKind::ControlKeepAliveReplyTimeout => "ftp.control_keep_alive_reply_timeout",
            OptionKind::ControlKeepAliveTimeout => "ftp.control_keep_alive_timeout",
            OptionKind::DataTimeout => "ftp.data_timeout",
            OptionKind::DefaultDateFormat => "ftp.default_date_format",
            OptionKind::EntryParser => "ftp.entry_parser",
            OptionKind::FileType => "ftp.file_type",
            OptionKind::MdtmLastModifiedTime => "ftp.mdtm_last_modified_time",
            OptionKind::PassiveMode => "ftp.passive_mode",
            OptionKind::Proxy => "ftp.proxy",
            OptionKind::RecentDateFormat => "ftp.recent_date_format",
            OptionKind::RemoteVerification => "ftp.remote_verification",
            OptionKind::ServerLanguageCode => "ftp.server_language_code",
            OptionKind::ServerTimeZoneId => "ftp.server_time_zone_id",
            OptionKind::ShortMonthNames => "ftp.short_month_names",
            OptionKind::SoTimeout => "ftp.so_timeout",
            OptionKind::TransferAbortedOkReplyCodes => "ftp.transfer_aborted_ok_reply_codes",
            OptionKind::UserDirAsRoot => "ftp.user_dir_as_root",
        }
    }

    /// Look up a kind by its option name.
    pub fn from_name(name: &str) -> Option<OptionKind> {
        OptionKind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Validate a raw JSON value against this kind's shape.
    pub fn validate(self, raw: &Value) -> Result<OptionValue, OptionError> {
        let name = self.name();
        match self.shape() {
            ValueShape::Bool => validate::require_boolean(raw, name).map(OptionValue::Bool),
            ValueShape::Text => validate::require_string(raw, name).map(OptionValue::Text),
            ValueShape::Duration => {
                validate::require_duration(raw, name).map(OptionValue::Duration)
            }
            ValueShape::Charset => validate::require_charset(raw, name).map(OptionValue::Charset),
            ValueShape::Labels(allowed) => {
                validate::require_label(raw, name, allowed).map(OptionValue::Label)
            }
            ValueShape::TextList => {
                validate::require_string_list(raw, name).map(OptionValue::TextList)
            }
            ValueShape::IntList => validate::require_int_list(raw, name).map(OptionValue::IntList),
            ValueShape::Proxy => validate::require_proxy(raw, name).map(OptionValue::Proxy),
        }
    }

    /// Check that an already-typed payload is legal for this kind. Labels are
    /// re-checked for membership; everything else is a shape comparison.
    pub(crate) fn check_payload(self, value: &OptionValue) -> Result<(), OptionError> {
        match (self.shape(), value) {
            (ValueShape::Bool, OptionValue::Bool(_))
            | (ValueShape::Text, OptionValue::Text(_))
            | (ValueShape::Duration, OptionValue::Duration(_))
            | (ValueShape::Charset, OptionValue::Charset(_))
            | (ValueShape::TextList, OptionValue::TextList(_))
            | (ValueShape::IntList, OptionValue::IntList(_))
            | (ValueShape::Proxy, OptionValue::Proxy(_)) => Ok(()),
            (ValueShape::Labels(allowed), OptionValue::Label(label)) => {
                if allowed.contains(label) {
                    Ok(())
                } else {
                    Err(OptionError::UnknownEnumMember {
                        name: self.name().to_owned(),
                        allowed: allowed.to_vec(),
                    })
                }
            }
            (shape, _) => Err(OptionError::TypeMismatch {
                name: self.name().to_owned(),
                expected: shape_text(shape),
            }),
        }
    }
}

fn shape_text(shape: ValueShape) -> &'static str {
    match shape {
        ValueShape::Bool => "boolean",
        ValueShape::Text => "string",
        ValueShape::Duration => "duration",
        ValueShape::Charset => "charset name",
        ValueShape::Labels(_) => "enum member",
        ValueShape::TextList => "list of string",
        ValueShape::IntList => "list of int",
        ValueShape::Proxy => "proxy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn names_are_distinct() {
        let names: HashSet<&str> = OptionKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), OptionKind::ALL.len());
    }

    #[test]
    fn param_keys_are_distinct() {
        let keys: HashSet<&str> = OptionKind::ALL.iter().map(|k| k.param_key()).collect();
        assert_eq!(keys.len(), OptionKind::ALL.len());
    }

    #[test]
    fn from_name_round_trips() {
        for kind in OptionKind::ALL {
            assert_eq!(OptionKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(OptionKind::from_name("ftp:nope"), None);
    }

    #[test]
    fn validate_dispatches_by_shape() {
        assert_eq!(
            OptionKind::PassiveMode.validate(&json!(true)).unwrap(),
            OptionValue::Bool(true)
        );
        assert_eq!(
            OptionKind::FileType.validate(&json!("BINARY")).unwrap(),
            OptionValue::Label("BINARY")
        );
        assert_eq!(
            OptionKind::ConnectTimeout.validate(&json!("PT30S")).unwrap(),
            OptionValue::Duration("PT30S".parse().unwrap())
        );
    }

    #[test]
    fn validate_reports_the_owning_name() {
        let err = OptionKind::SoTimeout.validate(&json!(null)).unwrap_err();
        assert_eq!(err.to_string(), "value of [ftp:soTimeout] must be duration");
    }

    #[test]
    fn check_payload_accepts_matching_shape() {
        assert!(OptionKind::PassiveMode
            .check_payload(&OptionValue::Bool(true))
            .is_ok());
        assert!(OptionKind::FileType
            .check_payload(&OptionValue::Label("ASCII"))
            .is_ok());
    }

    #[test]
    fn check_payload_rejects_wrong_shape() {
        let err = OptionKind::PassiveMode
            .check_payload(&OptionValue::Text("true".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "value of [ftp:passiveMode] must be boolean");
    }

    #[test]
    fn check_payload_rejects_foreign_label() {
        let err = OptionKind::FileType
            .check_payload(&OptionValue::Label("TENEX"))
            .unwrap_err();
        assert!(matches!(err, OptionError::UnknownEnumMember { .. }));
    }
}
