//! Suppression sets for warning codes.
//!
//! Two sets are consulted for every warning:
//! - a process-wide set built once from configuration, never reset
//! - a per-record set read from a trailing `---@ignore CODE[,CODE...]`
//!   directive on the line that finalizes a record

use std::collections::HashSet;

use crate::issues::WarningCode;

/// Marker that introduces an inline ignore directive.
pub const IGNORE_MARKER: &str = "---@ignore ";

/// A set of suppressed warning codes.
///
/// Codes are kept as raw strings so unknown codes in a directive are
/// tolerated and simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    codes: HashSet<String>,
}

impl IgnoreSet {
    /// Read the ignore directive from a raw line.
    ///
    /// The marker is only searched for after the last `"` on the line so
    /// that quoted string content cannot trigger it.
    pub fn from_line(line: &str) -> Self {
        if line.is_empty() {
            return Self::default();
        }

        let search_from = line.rfind('"').map_or(0, |i| i + 1);
        let Some(pos) = line[search_from..].find(IGNORE_MARKER) else {
            return Self::default();
        };

        let rest = &line[search_from + pos + IGNORE_MARKER.len()..];
        Self::from_codes(rest.split(','))
    }

    /// Build a set from a list of codes; entries are trimmed and blanks dropped.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Self { codes }
    }

    pub fn contains(&self, code: WarningCode) -> bool {
        self.codes.contains(code.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }

    /// Codes in this set that do not name a known warning.
    pub fn unknown_codes(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .codes
            .iter()
            .map(String::as_str)
            .filter(|c| WarningCode::parse(c).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
