//! Validation context shared across a whole check run.
//!
//! The context is driven locale by locale:
//!
//! ```text
//! start_subdir(locale)
//!     start_file(group) -> check_record(..)* -> finish_file(line_count)
//!     ...
//! finish_subdir()
//! ```
//!
//! While the base locale is processed every record is ingested into the
//! [`BaseTable`]. For every other locale records are compared against that
//! table, and missing strings and files are reported when a file or a locale
//! directory is finished.

use std::collections::{HashMap, HashSet};

use encoding_rs::{Encoding, UTF_8};

use super::{
    encoding::EncodingTable, ignore::IgnoreSet, parser::Record,
    substitution::count_substitutions,
};
use crate::issues::{Warning, WarningCode};

// ============================================================
// Base Table
// ============================================================

/// A base locale string and its substitution count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEntry {
    pub value: String,
    pub substitutions: usize,
}

/// Strings of one base locale group, in file order.
#[derive(Debug, Clone, Default)]
pub struct BaseGroup {
    entries: HashMap<String, BaseEntry>,
    order: Vec<String>,
}

impl BaseGroup {
    pub fn get(&self, key: &str) -> Option<&BaseEntry> {
        self.entries.get(key)
    }

    /// Keys in the order they were first ingested.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    fn insert(&mut self, key: &str, entry: BaseEntry) {
        if self.entries.insert(key.to_string(), entry).is_none() {
            self.order.push(key.to_string());
        }
    }
}

/// All strings of the base locale, by group.
#[derive(Debug, Clone, Default)]
pub struct BaseTable {
    groups: HashMap<String, BaseGroup>,
    order: Vec<String>,
}

impl BaseTable {
    pub fn group(&self, group: &str) -> Option<&BaseGroup> {
        self.groups.get(group)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Groups in the order they were first seen.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn get(&self, group: &str, key: &str) -> Option<&BaseEntry> {
        self.groups.get(group)?.get(key)
    }

    fn add_group(&mut self, group: &str) {
        if !self.groups.contains_key(group) {
            self.groups.insert(group.to_string(), BaseGroup::default());
            self.order.push(group.to_string());
        }
    }

    fn insert(&mut self, group: &str, key: &str, entry: BaseEntry) {
        self.add_group(group);
        if let Some(base_group) = self.groups.get_mut(group) {
            base_group.insert(key, entry);
        }
    }

    fn clear(&mut self) {
        self.groups.clear();
        self.order.clear();
    }
}

// ============================================================
// Check Context
// ============================================================

/// Accumulated state of a check run.
#[derive(Debug)]
pub struct CheckContext {
    base_locale: String,
    global_ignore: IgnoreSet,
    encodings: EncodingTable,

    locale: String,
    encoding: &'static Encoding,
    group: String,
    line: usize,
    line_ignore: IgnoreSet,
    seen_keys: HashSet<String>,
    seen_groups: HashSet<String>,

    base: BaseTable,
    warnings: Vec<Warning>,
}

impl CheckContext {
    pub fn new(base_locale: &str, global_ignore: IgnoreSet, encodings: EncodingTable) -> Self {
        Self {
            base_locale: base_locale.to_string(),
            global_ignore,
            encodings,
            locale: base_locale.to_string(),
            encoding: UTF_8,
            group: String::new(),
            line: 0,
            line_ignore: IgnoreSet::default(),
            seen_keys: HashSet::new(),
            seen_groups: HashSet::new(),
            base: BaseTable::default(),
            warnings: Vec::new(),
        }
    }

    pub fn base_locale(&self) -> &str {
        &self.base_locale
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Encoding resolved for the current locale.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn is_base(&self) -> bool {
        self.locale == self.base_locale
    }

    pub fn base(&self) -> &BaseTable {
        &self.base
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    /// Forget everything accumulated by a previous run.
    pub fn reset(&mut self) {
        self.locale = self.base_locale.clone();
        self.encoding = UTF_8;
        self.group.clear();
        self.line = 0;
        self.line_ignore.clear();
        self.seen_keys.clear();
        self.seen_groups.clear();
        self.base.clear();
        self.warnings.clear();
    }

    /// Begin checking the directory of `locale`.
    pub fn start_subdir(&mut self, locale: &str) {
        self.locale = locale.to_string();
        self.seen_groups.clear();
        self.encoding = self.encodings.resolve(locale);
    }

    /// Begin checking a file of `group`.
    ///
    /// Returns `false` when the current locale is not the base and the base
    /// has no such group: there is nothing to compare the file against. The
    /// caller reports `extra_file` and skips the file.
    pub fn start_file(&mut self, group: &str) -> bool {
        self.line = 0;
        self.group = group.to_string();
        self.seen_keys.clear();
        self.seen_groups.insert(group.to_string());

        if self.base.has_group(group) {
            return true;
        }
        if self.is_base() {
            self.base.add_group(group);
            return true;
        }
        false
    }

    /// Validate one finalized record under its own ignore directive.
    pub fn check_record(&mut self, record: Record) {
        self.line = record.line;
        self.line_ignore = record.ignore;
        self.check_string(&record.key, &record.value);
        self.line_ignore.clear();
    }

    /// Validate one key/value pair of the current file.
    pub fn check_string(&mut self, key: &str, value: &str) {
        if self.seen_keys.contains(key) {
            self.add_warning(WarningCode::Duplicate, key, None);
            return;
        }
        if key.is_empty() {
            return;
        }

        self.seen_keys.insert(key.to_string());
        let substitutions = count_substitutions(value);

        if self.is_base() {
            let group = self.group.clone();
            self.base.insert(
                &group,
                key,
                BaseEntry {
                    value: value.to_string(),
                    substitutions,
                },
            );
            return;
        }

        let base_entry = self.base.get(&self.group, key).cloned();
        match &base_entry {
            None => self.add_warning(WarningCode::Extra, key, None),
            Some(entry) if entry.value == value => {
                self.add_warning(WarningCode::Identical, key, None)
            }
            Some(_) => {}
        }

        // Only compare against a count the base actually has
        if let Some(entry) = base_entry
            && entry.substitutions != substitutions
        {
            self.add_warning(WarningCode::SubstitutionCount, key, None);
        }
    }

    /// Finish the current file; reports base strings it did not define.
    pub fn finish_file(&mut self, line_count: usize) {
        self.line = line_count;
        if self.is_base() {
            return;
        }

        let missing: Vec<String> = match self.base.group(&self.group) {
            Some(base_group) => base_group
                .keys()
                .filter(|key| !self.seen_keys.contains(*key))
                .map(str::to_string)
                .collect(),
            None => return,
        };

        for key in missing {
            self.add_warning(WarningCode::Missing, &key, None);
        }
    }

    /// Finish the current locale; reports base groups without a file.
    pub fn finish_subdir(&mut self) {
        if self.is_base() {
            return;
        }

        let missing: Vec<String> = self
            .base
            .groups()
            .filter(|group| !self.seen_groups.contains(*group))
            .map(str::to_string)
            .collect();

        for group in missing {
            let stem = format!("{}_{}", group, self.locale);
            self.add_warning(WarningCode::MissingFile, &stem, Some(&group));
        }
    }

    pub fn should_ignore(&self, code: WarningCode) -> bool {
        self.global_ignore.contains(code) || self.line_ignore.contains(code)
    }

    /// Record a warning unless its code is suppressed.
    ///
    /// `group` defaults to the group of the current file.
    pub fn add_warning(&mut self, code: WarningCode, subject: &str, group: Option<&str>) {
        if self.should_ignore(code) {
            return;
        }

        let line = if self.line == 0 || code.is_file_level() {
            None
        } else {
            Some(self.line)
        };

        self.warnings.push(Warning {
            code,
            locale: self.locale.clone(),
            group: group.unwrap_or(self.group.as_str()).to_string(),
            line,
            subject: subject.to_string(),
        });
    }
}
