use thiserror::Error;

/// Errors raised while validating, resolving, or registering options.
///
/// Validation variants carry the option name and the expected shape as
/// structured fields; the `Display` text is the user-facing message and is
/// meant to be surfaced verbatim.
#[derive(Debug, Error)]
pub enum OptionError {
    /// The raw JSON value is not the kind's expected JSON kind (including null).
    #[error("value of [{name}] must be {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    /// A numeric value parses but falls outside the admissible range.
    #[error("value of [{name}] must be {expected}")]
    OutOfRange { name: String, expected: &'static str },

    /// A string value that is not a member of the kind's closed label set.
    #[error("value of [{name}] must be either [{}]", allowed.join(", "))]
    UnknownEnumMember {
        name: String,
        allowed: Vec<&'static str>,
    },

    /// A structured value missing a required field or carrying a field of the
    /// wrong shape.
    #[error("value of [{name}] must be convertible to {expected}")]
    MalformedComposite { name: String, expected: &'static str },

    /// The document references a name with no registered resolver.
    #[error("no resolver is registered for option [{name}]")]
    UnresolvedName { name: String },

    /// Two resolvers claimed the same name during registry construction.
    #[error("resolver for option [{name}] is registered more than once")]
    DuplicateResolver { name: String },

    /// The option document text is not valid JSON.
    #[error("failed to parse option document: {source}")]
    Parse { source: serde_json::Error },

    /// The option document parsed, but its root is not a JSON object.
    #[error("option document must be a JSON object, found {found}")]
    InvalidDocument { found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_formats_name_and_shape() {
        let err = OptionError::TypeMismatch {
            name: "ftp:passiveMode".into(),
            expected: "boolean",
        };
        assert_eq!(err.to_string(), "value of [ftp:passiveMode] must be boolean");
    }

    #[test]
    fn enum_member_lists_allowed_set_in_declaration_order() {
        let err = OptionError::UnknownEnumMember {
            name: "ftp:fileType".into(),
            allowed: vec!["ASCII", "BINARY", "LOCAL", "EBCDIC"],
        };
        assert_eq!(
            err.to_string(),
            "value of [ftp:fileType] must be either [ASCII, BINARY, LOCAL, EBCDIC]"
        );
    }

    #[test]
    fn composite_formats() {
        let err = OptionError::MalformedComposite {
            name: "ftp:proxy".into(),
            expected: "proxy",
        };
        assert_eq!(
            err.to_string(),
            "value of [ftp:proxy] must be convertible to proxy"
        );
    }

    #[test]
    fn unresolved_name_formats() {
        let err = OptionError::UnresolvedName {
            name: "ftp:nope".into(),
        };
        assert!(err.to_string().contains("ftp:nope"));
    }

    #[test]
    fn duplicate_resolver_formats() {
        let err = OptionError::DuplicateResolver {
            name: "ftp:proxy".into(),
        };
        assert!(err.to_string().contains("more than once"));
    }
}
