//! Warning types for translation table checks.
//!
//! A [`Warning`] is recorded for every consistency problem found while
//! comparing a locale against the base locale. Warnings are kept in emission
//! order and rendered later according to the active [`Verbosity`].

use std::fmt;

// ============================================================
// Warning Codes
// ============================================================

/// The kinds of problems the checker can report.
///
/// The string form of each code is what users write in `--ignore` and in
/// `---@ignore` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningCode {
    Identical,
    Duplicate,
    Extra,
    ExtraFile,
    Missing,
    MissingFile,
    SubstitutionCount,
}

impl WarningCode {
    pub fn all() -> [WarningCode; 7] {
        [
            WarningCode::Identical,
            WarningCode::Duplicate,
            WarningCode::Extra,
            WarningCode::ExtraFile,
            WarningCode::Missing,
            WarningCode::MissingFile,
            WarningCode::SubstitutionCount,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::Identical => "identical",
            WarningCode::Duplicate => "duplicate",
            WarningCode::Extra => "extra",
            WarningCode::ExtraFile => "extra_file",
            WarningCode::Missing => "missing",
            WarningCode::MissingFile => "missing_file",
            WarningCode::SubstitutionCount => "substitution_count",
        }
    }

    /// Parse a code from its string form (exact match).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|code| code.as_str() == s)
    }

    /// Whether this code refers to a whole file rather than a single string.
    pub fn is_file_level(&self) -> bool {
        matches!(self, WarningCode::ExtraFile | WarningCode::MissingFile)
    }

    /// Human-readable message for this code with `subject` substituted.
    pub fn describe(&self, subject: &str) -> String {
        match self {
            WarningCode::Identical => format!("{} is identical to base locale", subject),
            WarningCode::Duplicate => format!("duplicate string {}", subject),
            WarningCode::Extra => format!("string {} is not present in the base locale", subject),
            WarningCode::ExtraFile => format!("{} file is missing in the base locale", subject),
            WarningCode::Missing => format!("string {} is missing", subject),
            WarningCode::MissingFile => format!("{} file is missing", subject),
            WarningCode::SubstitutionCount => {
                format!("wrong number of substitutions in {}", subject)
            }
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Verbosity
// ============================================================

/// Output level of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Nothing is printed.
    Silent,
    /// One `[locale,group,line,code] subject` line per warning.
    #[default]
    MachineReadable,
    /// Warnings grouped by locale with natural-language messages.
    HumanReadable,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Verbosity::Silent),
            1 => Some(Verbosity::MachineReadable),
            2 => Some(Verbosity::HumanReadable),
            _ => None,
        }
    }
}

// ============================================================
// Warning
// ============================================================

/// A single recorded warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub code: WarningCode,
    /// Locale being checked when the warning was raised.
    pub locale: String,
    /// Group the offending string or file belongs to.
    pub group: String,
    /// 1-based line of the record, if the warning refers to a line.
    pub line: Option<usize>,
    /// Offending key, or `<group>_<locale>` for file-level codes.
    pub subject: String,
}

impl Warning {
    /// Render this warning as a single output line.
    pub fn render(&self, verbosity: Verbosity) -> String {
        if verbosity > Verbosity::MachineReadable {
            return self.code.describe(&self.subject);
        }

        let line = self.line.map(|l| l.to_string()).unwrap_or_default();
        format!(
            "[{},{},{},{}] {}",
            self.locale, self.group, line, self.code, self.subject
        )
    }
}
