//! The resolver registry: an immutable name → resolver index, built once.
//!
//! Construction enumerates the supplied resolvers and fails fast when two
//! claim the same name — that is a wiring defect, not a data error. After
//! construction the registry is read-only and safe to share across threads;
//! [`Registry::shared`] exposes one process-wide built-in instance.
//!
//! Document decoding operates on pre-parsed data with no I/O: each entry is
//! looked up and resolved independently, in document order, failing fast on
//! the first unknown name or invalid value unless the caller asks for
//! per-entry error collection.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::OptionError;
use crate::kind::OptionKind;
use crate::option::FileOption;
use crate::resolver::{KindResolver, Resolver};
use crate::sink::ConfigSink;
use crate::validate::json_kind;

/// Immutable index of resolvers by option name.
pub struct Registry {
    resolvers: BTreeMap<&'static str, Box<dyn Resolver>>,
}

impl Registry {
    /// Build a registry from a set of resolvers, indexing each by the name it
    /// declares. Fails with [`OptionError::DuplicateResolver`] when two
    /// resolvers claim the same name.
    pub fn from_resolvers(
        resolvers: impl IntoIterator<Item = Box<dyn Resolver>>,
    ) -> Result<Registry, OptionError> {
        let mut map = BTreeMap::new();
        for resolver in resolvers {
            let name = resolver.option_name();
            if map.insert(name, resolver).is_some() {
                return Err(OptionError::DuplicateResolver {
                    name: name.to_owned(),
                });
            }
        }
        debug!(resolvers = map.len(), "option registry built");
        Ok(Registry { resolvers: map })
    }

    /// A registry over every built-in kind.
    pub fn builtin() -> Registry {
        Registry::from_resolvers(
            OptionKind::ALL
                .iter()
                .map(|kind| Box::new(KindResolver::new(*kind)) as Box<dyn Resolver>),
        )
        .expect("built-in option names are distinct")
    }

    /// The process-wide built-in registry, built on first use. Concurrent
    /// reads need no synchronization.
    pub fn shared() -> &'static Registry {
        static SHARED: LazyLock<Registry> = LazyLock::new(Registry::builtin);
        &SHARED
    }

    /// Look up the resolver for a name. Never a silent no-op: an unknown
    /// name is an error.
    pub fn find(&self, name: &str) -> Result<&dyn Resolver, OptionError> {
        self.resolvers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| OptionError::UnresolvedName {
                name: name.to_owned(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resolvers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Decode a whole document in document order, failing fast on the first
    /// unknown name or invalid value.
    pub fn decode(&self, doc: &Map<String, Value>) -> Result<Vec<FileOption>, OptionError> {
        let mut options = Vec::with_capacity(doc.len());
        for (name, raw) in doc {
            let option = self.find(name)?.resolve(raw)?;
            trace!(name = %name, "resolved option");
            options.push(option);
        }
        debug!(options = options.len(), "decoded option document");
        Ok(options)
    }

    /// Decode a whole document, collecting every failure instead of stopping
    /// at the first. Options are only returned when the document is fully
    /// valid.
    pub fn decode_collecting(
        &self,
        doc: &Map<String, Value>,
    ) -> Result<Vec<FileOption>, Vec<OptionError>> {
        let mut options = Vec::with_capacity(doc.len());
        let mut errors = Vec::new();
        for (name, raw) in doc {
            match self.find(name).and_then(|r| r.resolve(raw)) {
                Ok(option) => options.push(option),
                Err(err) => errors.push(err),
            }
        }
        if errors.is_empty() { Ok(options) } else { Err(errors) }
    }

    /// Decode a JSON text body. The text must parse and its root must be an
    /// object.
    pub fn decode_text(&self, text: &str) -> Result<Vec<FileOption>, OptionError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| OptionError::Parse { source })?;
        match value {
            Value::Object(map) => self.decode(&map),
            other => Err(OptionError::InvalidDocument {
                found: json_kind(&other),
            }),
        }
    }

    /// Decode a document and apply every option to the sink, in document
    /// order. The decode completes before the first write, so a failed
    /// decode leaves the sink untouched.
    pub fn apply_document(
        &self,
        doc: &Map<String, Value>,
        sink: &mut dyn ConfigSink,
    ) -> Result<(), OptionError> {
        let options = self.decode(doc)?;
        for option in &options {
            option.apply(sink);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}
