#[cfg(test)]
pub mod test {
    use crate::sink::{ConfigSink, ParamValue};

    /// A sink that records every write in call order. Lookups observe the
    /// last write per key, which is exactly the keyed-overwrite behavior the
    /// apply protocol assumes of real configuration contexts.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub writes: Vec<(&'static str, ParamValue)>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// The last value written under `key`, if any.
        pub fn get(&self, key: &str) -> Option<&ParamValue> {
            self.writes
                .iter()
                .rev()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v)
        }
    }

    impl ConfigSink for RecordingSink {
        fn set_param(&mut self, key: &'static str, value: ParamValue) {
            self.writes.push((key, value));
        }
    }

    #[test]
    fn last_write_wins_in_lookup() {
        let mut sink = RecordingSink::new();
        sink.set_param("k", ParamValue::Bool(false));
        sink.set_param("k", ParamValue::Bool(true));
        assert_eq!(sink.get("k"), Some(&ParamValue::Bool(true)));
        assert_eq!(sink.writes.len(), 2);
        assert_eq!(sink.get("other"), None);
    }
}
