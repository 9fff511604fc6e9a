//! Directory walker that drives a [`CheckContext`] over a string-table tree.
//!
//! Expected layout:
//!
//! ```text
//! <root>/<LOCALE>/<Group>_<LOCALE>.txt
//! ```
//!
//! The base locale directory is always processed first so that every other
//! locale can be compared against the complete base table.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use walkdir::WalkDir;

use super::{context::CheckContext, encoding::decode, parser::parse_table};
use crate::issues::WarningCode;

/// Extension of string-table files (compared case-insensitively).
pub const STRING_TABLE_EXTENSION: &str = "txt";

/// How a check run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every locale was checked; warnings are in the context.
    Completed,
    /// The run was aborted before anything was checked.
    Fatal(String),
}

/// Walks a string-table root and feeds every matching file to a context.
#[derive(Debug, Clone)]
pub struct Checker {
    string_root: PathBuf,
    diagnostics: bool,
}

impl Checker {
    pub fn new(string_root: impl Into<PathBuf>) -> Self {
        Self {
            string_root: string_root.into(),
            diagnostics: true,
        }
    }

    /// Enable or disable `warning:` diagnostics on stderr.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn string_root(&self) -> &Path {
        &self.string_root
    }

    /// Check the whole tree.
    ///
    /// The context is reset first, so running twice on an unchanged tree
    /// yields the same warnings in the same order.
    pub fn run(&self, ctx: &mut CheckContext) -> CheckOutcome {
        ctx.reset();

        let base_dir = self.string_root.join(ctx.base_locale());
        if !base_dir.exists() {
            return CheckOutcome::Fatal(format!(
                "base locale directory {} does not exist",
                base_dir.display()
            ));
        }

        self.check_subdir(ctx, &base_dir);

        for dir in self.list_dir(&self.string_root) {
            if dir.file_name() == Some(OsStr::new(ctx.base_locale())) {
                continue;
            }
            self.check_subdir(ctx, &dir);
        }

        CheckOutcome::Completed
    }

    fn check_subdir(&self, ctx: &mut CheckContext, dir: &Path) {
        if !dir.is_dir() {
            return;
        }
        let Some(locale) = dir.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            return;
        };

        ctx.start_subdir(&locale);
        for file in self.list_dir(dir) {
            self.check_file(ctx, &file);
        }
        ctx.finish_subdir();
    }

    fn check_file(&self, ctx: &mut CheckContext, path: &Path) {
        let Some(group) = string_table_group(path, ctx.locale()) else {
            return;
        };

        if !ctx.start_file(&group) {
            let stem = format!("{}_{}", group, ctx.locale());
            ctx.add_warning(WarningCode::ExtraFile, &stem, Some(&group));
            return;
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.diagnostic(&format!("Cannot read {}: {}", path.display(), e));
                return;
            }
        };

        let encoding = ctx.encoding();
        let (content, had_errors) = decode(&bytes, encoding);
        if had_errors {
            self.diagnostic(&format!(
                "{} is not valid {}; malformed bytes were replaced",
                path.display(),
                encoding.name()
            ));
        }

        let table = parse_table(&content);
        for record in table.records {
            ctx.check_record(record);
        }
        ctx.finish_file(table.line_count);
    }

    /// Entries of `dir`, sorted by file name.
    fn list_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => paths.push(entry.into_path()),
                Err(e) => self.diagnostic(&format!("Cannot access path: {}", e)),
            }
        }
        paths
    }

    fn diagnostic(&self, message: &str) {
        if self.diagnostics {
            eprintln!("{} {}", "warning:".bold().yellow(), message);
        }
    }
}

/// Group of a string-table file belonging to `locale`.
///
/// The file must be a `.txt` file whose stem splits on `_` into at least two
/// parts, the last of which is exactly `locale`. The group is the first part.
pub fn string_table_group(path: &Path, locale: &str) -> Option<String> {
    if !path.is_file() {
        return None;
    }

    let extension = path.extension()?.to_string_lossy().to_lowercase();
    if extension != STRING_TABLE_EXTENSION {
        return None;
    }

    let stem = path.file_stem()?.to_string_lossy();
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() < 2 || parts.last() != Some(&locale) {
        return None;
    }

    Some(parts[0].to_string())
}
