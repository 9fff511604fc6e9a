//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow transcheck to be used as a library.
//!
//! Output tiers:
//! - silent: nothing
//! - machine-readable: one `[locale,group,line,code] subject` line per warning
//! - human-readable: warnings grouped under a `[locale]` header

use std::{
    collections::HashSet,
    io::{self, Write},
};

use colored::Colorize;

use super::commands::{CheckResult, CommandResult, InitSummary};
use crate::{
    core::CheckOutcome,
    issues::{Verbosity, Warning},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Printed when no warnings were recorded.
pub const OK_MESSAGE: &str = "OK";

/// Printed before the warning list.
pub const WARNINGS_HEADER: &str = "Finished with warnings";

/// Print the result of a command to stdout.
pub fn print(result: &CommandResult) {
    match result {
        CommandResult::Check(result) => print_check_to(result, &mut io::stdout().lock()),
        CommandResult::Init(summary) => print_init(summary),
    }
}

/// Print the result of a check to a custom writer.
pub fn print_check_to<W: Write>(result: &CheckResult, writer: &mut W) {
    match &result.outcome {
        CheckOutcome::Fatal(message) => print_fatal_to(message, result.verbosity, writer),
        CheckOutcome::Completed => report_to(&result.warnings, result.verbosity, writer),
    }
}

/// Print warnings to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(warnings: &[Warning], verbosity: Verbosity, writer: &mut W) {
    if verbosity == Verbosity::Silent {
        return;
    }

    let human = verbosity >= Verbosity::HumanReadable;

    if warnings.is_empty() {
        let ok = if human {
            OK_MESSAGE.green().to_string()
        } else {
            OK_MESSAGE.to_string()
        };
        let _ = writeln!(writer, "{}", ok);
        return;
    }

    let _ = writeln!(writer, "{}", WARNINGS_HEADER);

    let mut seen_locales: HashSet<&str> = HashSet::new();
    for warning in warnings {
        if seen_locales.insert(warning.locale.as_str()) && human {
            let _ = writeln!(writer);
            let _ = writeln!(writer, "{}", format!("[{}]", warning.locale).bold());
        }
        let _ = writeln!(writer, "{}", warning.render(verbosity));
    }
}

/// Print a fatal error that stopped the run.
pub fn print_fatal_to<W: Write>(message: &str, verbosity: Verbosity, writer: &mut W) {
    if verbosity == Verbosity::Silent {
        return;
    }

    let tag = if verbosity >= Verbosity::HumanReadable {
        "[FATAL]".bold().red().to_string()
    } else {
        "[FATAL]".to_string()
    };
    let _ = writeln!(writer, "{} {}", tag, message);
}

/// Print a `warning:` diagnostic to stderr.
pub fn print_diagnostic(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        eprintln!("Error: {} already exists", summary.path.display());
    }
}
