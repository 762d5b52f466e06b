//! The configuration context boundary: a keyed parameter sink.
//!
//! The framework never depends on a concrete transport configuration type.
//! It writes through this narrow trait, and the caller adapts it onto
//! whatever settings object their transport library uses. The sink is
//! caller-owned and single-writer; `&mut self` makes concurrent applies to
//! one sink unrepresentable without external synchronization.

use crate::duration::IsoDuration;
use crate::proxy::ProxySpec;

/// A typed parameter written into a [`ConfigSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Bool(bool),
    Text(String),
    Duration(IsoDuration),
    TextList(Vec<String>),
    IntList(Vec<i32>),
    Proxy(ProxySpec),
}

/// Keyed mutation capability of an external configuration context.
///
/// Writing the same key twice must leave the last value observable
/// (keyed overwrite); that is all the framework assumes.
pub trait ConfigSink {
    fn set_param(&mut self, key: &'static str, value: ParamValue);
}
