//! Charset registry: canonical names, aliases, case-insensitive lookup.
//!
//! A fixed table of the charsets a file-transfer control connection can
//! plausibly be configured with. Lookup accepts the canonical name or any
//! alias, ignoring ASCII case; rendering always uses the canonical name, so
//! `"utf8"` decodes to the same value as `"UTF-8"` and both render as
//! `"UTF-8"`.

use std::fmt;
use std::hash::{Hash, Hasher};

struct CharsetDef {
    name: &'static str,
    aliases: &'static [&'static str],
}

const US_ASCII: CharsetDef = CharsetDef {
    name: "US-ASCII",
    aliases: &["ascii", "us", "iso646-us", "ansi_x3.4-1968", "646"],
};
const ISO_8859_1: CharsetDef = CharsetDef {
    name: "ISO-8859-1",
    aliases: &["latin1", "iso_8859-1", "iso_8859_1", "l1", "8859_1"],
};
const UTF_8: CharsetDef = CharsetDef {
    name: "UTF-8",
    aliases: &["utf8", "unicode-1-1-utf-8"],
};
const UTF_16: CharsetDef = CharsetDef {
    name: "UTF-16",
    aliases: &["utf16", "unicode"],
};
const UTF_16BE: CharsetDef = CharsetDef {
    name: "UTF-16BE",
    aliases: &["utf_16be", "x-utf-16be"],
};
const UTF_16LE: CharsetDef = CharsetDef {
    name: "UTF-16LE",
    aliases: &["utf_16le", "x-utf-16le"],
};
const SHIFT_JIS: CharsetDef = CharsetDef {
    name: "Shift_JIS",
    aliases: &["sjis", "shift-jis", "ms_kanji"],
};
const EUC_JP: CharsetDef = CharsetDef {
    name: "EUC-JP",
    aliases: &["eucjp", "euc_jp", "eucjis"],
};
const ISO_2022_JP: CharsetDef = CharsetDef {
    name: "ISO-2022-JP",
    aliases: &["iso2022jp", "jis"],
};
const WINDOWS_1252: CharsetDef = CharsetDef {
    name: "windows-1252",
    aliases: &["cp1252"],
};

static REGISTRY: &[&CharsetDef] = &[
    &US_ASCII,
    &ISO_8859_1,
    &UTF_8,
    &UTF_16,
    &UTF_16BE,
    &UTF_16LE,
    &SHIFT_JIS,
    &EUC_JP,
    &ISO_2022_JP,
    &WINDOWS_1252,
];

/// A charset known to the registry. Cheap to copy; compares by canonical name.
#[derive(Clone, Copy)]
pub struct Charset(&'static CharsetDef);

impl Charset {
    pub const US_ASCII: Charset = Charset(&US_ASCII);
    pub const ISO_8859_1: Charset = Charset(&ISO_8859_1);
    pub const UTF_8: Charset = Charset(&UTF_8);
    pub const UTF_16: Charset = Charset(&UTF_16);
    pub const UTF_16BE: Charset = Charset(&UTF_16BE);
    pub const UTF_16LE: Charset = Charset(&UTF_16LE);
    pub const SHIFT_JIS: Charset = Charset(&SHIFT_JIS);
    pub const EUC_JP: Charset = Charset(&EUC_JP);
    pub const ISO_2022_JP: Charset = Charset(&ISO_2022_JP);
    pub const WINDOWS_1252: Charset = Charset(&WINDOWS_1252);

    /// Look up a charset by canonical name or alias, ignoring ASCII case.
    pub fn for_name(name: &str) -> Option<Charset> {
        REGISTRY
            .iter()
            .copied()
            .find(|def| {
                def.name.eq_ignore_ascii_case(name)
                    || def.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .map(Charset)
    }

    /// The canonical name, e.g. `"UTF-8"`.
    pub fn name(&self) -> &'static str {
        self.0.name
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Charset {}

impl Hash for Charset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.0.name).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}
