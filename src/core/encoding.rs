//! Text encoding resolution for locale directories.
//!
//! Translation files are stored in legacy code pages that depend on the
//! locale. The encoding for a locale is resolved in this order:
//! 1. user override (`--encodings FR:cp1252,...` or the config file)
//! 2. built-in default table
//! 3. UTF-8

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use encoding_rs::{
    Encoding, ISO_8859_15, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1250, WINDOWS_1251,
    WINDOWS_1252, WINDOWS_1254,
};

/// Built-in encoding for `locale`, if any.
pub fn default_encoding(locale: &str) -> Option<&'static Encoding> {
    let encoding = match locale {
        "EN" | "CH" | "CN" | "ID" | "JP" | "PH" | "RO" | "TH" | "UA" => UTF_8,
        "AR" | "DA" | "DE" | "EE" | "ES" | "FI" | "FR" | "IT" | "NL" | "NO" | "PT" | "PTBR" => {
            WINDOWS_1252
        }
        "CS" | "HU" | "PL" => WINDOWS_1250,
        "CA" => ISO_8859_15,
        "KO" => UTF_16LE,
        "RU" => WINDOWS_1251,
        "TR" => WINDOWS_1254,
        _ => return None,
    };
    Some(encoding)
}

/// Look up an encoding by label.
///
/// WHATWG labels are tried as given, then with `_` replaced by `-`, then
/// with every separator removed. Codec names such as `utf_8`, `iso8859_15`,
/// `latin_1`, `utf_16_le` and `cp1252` all resolve.
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    let dashed = label.replace('_', "-");
    let compact: String = label.chars().filter(|c| !matches!(c, '-' | '_')).collect();

    [label, dashed.as_str(), compact.as_str()]
        .into_iter()
        .find_map(|candidate| Encoding::for_label(candidate.as_bytes()))
        .or_else(|| match compact.to_ascii_lowercase().as_str() {
            // No WHATWG label spells these without a separator
            "utf16le" => Some(UTF_16LE),
            "utf16be" => Some(UTF_16BE),
            _ => None,
        })
}

/// Parse a `CODE:encoding,CODE:encoding` override list.
///
/// Parts that do not split into exactly two pieces on `:` are skipped.
pub fn parse_encoding_overrides(overrides: &str) -> BTreeMap<String, String> {
    overrides
        .split(',')
        .filter_map(|part| {
            let pieces: Vec<&str> = part.split(':').collect();
            match pieces.as_slice() {
                [locale, label] => Some((locale.trim().to_string(), label.trim().to_string())),
                _ => None,
            }
        })
        .collect()
}

/// Resolved per-locale encodings.
#[derive(Debug, Clone, Default)]
pub struct EncodingTable {
    overrides: BTreeMap<String, &'static Encoding>,
}

impl EncodingTable {
    /// Build a table from locale → label overrides.
    ///
    /// Returns an error naming the first label `encoding_rs` does not know.
    pub fn new(overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut resolved = BTreeMap::new();
        for (locale, label) in overrides {
            let Some(encoding) = encoding_for_label(label) else {
                bail!("Unknown encoding '{}' for locale '{}'", label, locale);
            };
            resolved.insert(locale.clone(), encoding);
        }
        Ok(Self {
            overrides: resolved,
        })
    }

    /// Encoding for `locale`: override, then default table, then UTF-8.
    pub fn resolve(&self, locale: &str) -> &'static Encoding {
        self.overrides
            .get(locale)
            .copied()
            .or_else(|| default_encoding(locale))
            .unwrap_or(UTF_8)
    }
}

/// Decode file bytes with `encoding`.
///
/// A byte order mark overrides `encoding`. Malformed sequences are replaced
/// with U+FFFD; the flag reports whether that happened.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> (String, bool) {
    let (text, _, had_errors) = encoding.decode(bytes);
    (text.into_owned(), had_errors)
}
