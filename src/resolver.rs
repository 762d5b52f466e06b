//! The resolver seam: one stateless decoder per option name.
//!
//! A resolver is bound to exactly one name and turns a raw JSON value into a
//! validated [`FileOption`]. The built-in kinds are all served by the generic
//! [`KindResolver`]; a custom implementation can narrow or re-route a name,
//! but the registry decides which resolvers are live.

use serde_json::Value;

use crate::error::OptionError;
use crate::kind::OptionKind;
use crate::option::FileOption;

/// A stateless factory for one option name.
pub trait Resolver: Send + Sync {
    /// The option name this resolver serves, fixed at definition.
    fn option_name(&self) -> &'static str;

    /// Decode a raw value into a validated option, or fail with the
    /// validation error.
    fn resolve(&self, raw: &Value) -> Result<FileOption, OptionError>;
}

/// The generic resolver backing every built-in kind.
#[derive(Debug, Clone, Copy)]
pub struct KindResolver {
    kind: OptionKind,
}

impl KindResolver {
    pub const fn new(kind: OptionKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }
}

impl Resolver for KindResolver {
    fn option_name(&self) -> &'static str {
        self.kind.name()
    }

    fn resolve(&self, raw: &Value) -> Result<FileOption, OptionError> {
        FileOption::from_json(self.kind, raw)
    }
}
