//! Typed, validated file-system options decoded from JSON documents.
//!
//! Vfsopts turns a loosely-typed option document — a JSON object mapping
//! option names to values — into strongly-typed, immutable [`FileOption`]
//! values, and applies their effects onto a caller-owned configuration
//! context through a narrow sink interface.
//!
//! ```
//! use serde_json::json;
//! use vfsopts::Registry;
//!
//! let doc = json!({
//!     "ftp:passiveMode": true,
//!     "ftp:connectTimeout": "PT30S",
//!     "ftp:proxy": {"type": "SOCKS", "host": "localhost", "port": 33333},
//! });
//!
//! let options = Registry::shared().decode(doc.as_object().unwrap())?;
//! assert_eq!(options[0].to_string(), r#"{"ftp:passiveMode":true}"#);
//! # Ok::<(), vfsopts::OptionError>(())
//! ```
//!
//! # Design: validate at the boundary, trust everywhere after
//!
//! A [`FileOption`] can only be built through validation. Holding one is
//! proof its value is well-formed for its name, so the apply step never
//! validates — it is a pure keyed write. The pieces:
//!
//! - **[`OptionKind`]** — the compile-time identity of a setting: its
//!   namespaced name (`"ftp:proxy"`), its validation shape, and the
//!   parameter key it writes. One tag per setting replaces a type per
//!   setting; equality, hashing, and rendering are defined once.
//! - **[`OptionValue`]** — the validated payload: booleans, strings,
//!   ISO-8601 durations, charset names, closed-enum labels, string/int
//!   lists, and the structured proxy descriptor.
//! - **[`Resolver`] / [`Registry`]** — the decode seam. A resolver is a
//!   stateless factory bound to one name; the registry indexes resolvers,
//!   is built once, and is immutable after construction. Unknown names are
//!   errors, never silent no-ops; duplicate registrations fail the build.
//! - **[`ConfigSink`]** — the external configuration context, reduced to a
//!   single keyed-setter capability. The framework writes parameters and
//!   never reads them back; adapting the sink onto a concrete transport
//!   settings object is the caller's few lines of glue.
//!
//! # Decode, then apply
//!
//! [`Registry::decode`] walks the document in order and fails fast on the
//! first unknown name or invalid value; [`Registry::decode_collecting`]
//! gathers every failure instead when a complete error report is worth more
//! than early exit. [`Registry::apply_document`] decodes the whole document
//! before the first write, so a bad document leaves the context untouched.
//!
//! Apply order is document order, and the framework neither reorders nor
//! deduplicates: when two entries write the same parameter key, the last
//! one wins — the context ends up exactly as if only the later entry ran.
//!
//! # Canonical text
//!
//! Every option renders as a single-key JSON object with no extra
//! whitespace: `{"ftp:controlKeepAliveTimeout":"PT8H"}`. Values render
//! canonically, not as written — a duration entered as `"P1D"` renders as
//! `"PT24H"`, a charset entered as `"utf8"` renders as `"UTF-8"` — and
//! decoding the canonical text yields an equal option.
//!
//! # Errors
//!
//! All failures are [`OptionError`] values raised at construction or
//! resolution time, with messages meant to be shown verbatim:
//!
//! ```text
//! value of [ftp:fileType] must be either [ASCII, BINARY, LOCAL, EBCDIC]
//! ```
//!
//! # Concurrency
//!
//! Everything here is synchronous, CPU-only logic. The registry is
//! immutable after construction and [`Registry::shared`] can be read from
//! any thread; options are immutable values. The sink is single-writer:
//! `set_param` takes `&mut self`, so the borrow checker enforces the
//! discipline.

pub mod error;
pub mod validate;

mod charset;
mod duration;
mod kind;
mod option;
mod proxy;
mod registry;
mod resolver;
mod sink;
mod value;

#[cfg(test)]
mod fixtures;

pub use charset::Charset;
pub use duration::{IsoDuration, ParseDurationError};
pub use error::OptionError;
pub use kind::{FILE_TYPE_LABELS, OptionKind, ValueShape};
pub use option::FileOption;
pub use proxy::{ProxyKind, ProxySpec};
pub use registry::Registry;
pub use resolver::{KindResolver, Resolver};
pub use sink::{ConfigSink, ParamValue};
pub use value::OptionValue;
