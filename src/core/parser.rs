//! Line reconstructor for translation string tables.
//!
//! String tables are Lua-like files where every line after the header looks
//! like `KEY = "value",`. A value may be split over several physical lines by
//! ending a line with the `..` concatenation operator:
//!
//! ```text
//! Tooltip_Example = "first part "..
//!     "second part",
//! ```
//!
//! The game reads these files line by line rather than with a real Lua
//! parser, so the reconstruction here follows the game's quirks:
//! - the first line is a header and is skipped
//! - comment lines (`--`) and blank lines end a pending continuation
//! - keys with a reserved prefix never continue, even with a trailing `..`
//! - a record start line replaces a pending continuation
//!
//! Parsing is an explicit two-state machine (`Idle`, `Continuing`) driven by
//! the classification of each trimmed line.

use super::ignore::IgnoreSet;

/// Key prefixes for which the game never honors `..` continuation.
pub const NO_CONTINUATION_PREFIXES: &[&str] =
    &["Recipe_", "EvolvedRecipeName_", "ItemName_", "DisplayName"];

/// String concatenation operator.
const CONCAT: &str = "..";

/// Comment marker.
const COMMENT: &str = "--";

/// A finalized key/value record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
    /// 1-based line of the last physical line of the record.
    pub line: usize,
    /// Codes suppressed by a directive on the finalizing line.
    pub ignore: IgnoreSet,
}

/// Result of parsing one string table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Records in file order. Records with empty keys are dropped.
    pub records: Vec<Record>,
    /// Number of physical lines consumed, including the header line.
    pub line_count: usize,
}

/// Whether a record with this key may continue onto the next line.
pub fn allows_continuation(key: &str) -> bool {
    !NO_CONTINUATION_PREFIXES
        .iter()
        .any(|prefix| key.starts_with(prefix))
}

/// Parse the decoded contents of a string table.
pub fn parse_table(content: &str) -> ParsedTable {
    let mut parser = TableParser::default();
    let lines = split_lines(content);

    // The header line still counts
    parser.line = 1;
    for raw in lines.iter().skip(1) {
        parser.line += 1;
        parser.feed(raw.trim());
    }

    ParsedTable {
        records: parser.records,
        line_count: parser.line,
    }
}

// ============================================================
// State Machine
// ============================================================

/// A record whose value is still being accumulated.
#[derive(Debug, Default)]
struct Pending {
    key: String,
    value: String,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Continuing(Pending),
}

/// Classification of a trimmed physical line.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// Line containing both a quote and `=`.
    RecordStart { key: &'a str, value: &'a str },
    /// Blank line or a line containing a comment.
    Terminator,
    /// Any other line: a fragment of a continued value.
    Continuation { fragment: &'a str },
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        if line.contains('"')
            && let Some(eq_pos) = line.find('=')
        {
            return LineKind::RecordStart {
                key: line[..eq_pos].trim(),
                value: quoted_span(&line[eq_pos + 1..]),
            };
        }

        if line.is_empty() || line.contains(COMMENT) {
            return LineKind::Terminator;
        }

        LineKind::Continuation {
            fragment: quoted_span(line),
        }
    }
}

#[derive(Debug, Default)]
struct TableParser {
    state: State,
    line: usize,
    records: Vec<Record>,
}

impl TableParser {
    fn feed(&mut self, line: &str) {
        let continues = line.ends_with(CONCAT);
        let state = std::mem::take(&mut self.state);

        match LineKind::classify(line) {
            LineKind::RecordStart { key, value } => {
                // Any pending continuation is replaced, not finalized
                let pending = Pending {
                    key: key.to_string(),
                    value: value.to_string(),
                };
                if continues && allows_continuation(&pending.key) {
                    self.state = State::Continuing(pending);
                } else {
                    self.finalize(pending, line);
                }
            }
            LineKind::Terminator => {
                if let State::Continuing(pending) = state {
                    self.finalize(pending, line);
                }
            }
            LineKind::Continuation { fragment } => {
                let mut pending = match state {
                    State::Idle => Pending::default(),
                    State::Continuing(pending) => pending,
                };

                if allows_continuation(&pending.key) {
                    pending.value.push_str(fragment);
                    if continues {
                        self.state = State::Continuing(pending);
                        return;
                    }
                }
                self.finalize(pending, line);
            }
        }
    }

    fn finalize(&mut self, pending: Pending, line: &str) {
        if pending.key.is_empty() {
            return;
        }

        self.records.push(Record {
            key: pending.key,
            value: pending.value,
            line: self.line,
            ignore: IgnoreSet::from_line(line),
        });
    }
}

// ============================================================
// Helpers
// ============================================================

/// Text between the first and the last `"` of `s`.
///
/// Without a first quote the span starts at the beginning; without a last
/// quote it stops before the final character.
fn quoted_span(s: &str) -> &str {
    let start = s.find('"').map_or(0, |i| i + 1);
    let end = match s.rfind('"') {
        Some(i) => i,
        None => s.char_indices().next_back().map_or(0, |(i, _)| i),
    };
    s.get(start..end).unwrap_or("")
}

/// Split on `\n`, `\r\n` and lone `\r`, dropping the terminators.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}
