use anyhow::Result;

use super::super::{args::CheckCommand, report::print_diagnostic};
use super::CheckResult;
use crate::{
    core::{CheckContext, Checker, encoding::EncodingTable},
    issues::Verbosity,
};

pub fn check(cmd: CheckCommand) -> Result<CheckResult> {
    let config = cmd.resolve_config()?;
    let verbosity = cmd.verbosity();

    let ignore = config.ignore_set();
    if verbosity > Verbosity::Silent {
        for code in ignore.unknown_codes() {
            print_diagnostic(&format!("Unknown warning code '{}' in ignore list", code));
        }
    }

    let encodings = EncodingTable::new(&config.encodings)?;
    let mut ctx = CheckContext::new(&config.base_locale, ignore, encodings);

    let checker = Checker::new(config.string_root(&cmd.mod_path))
        .with_diagnostics(verbosity > Verbosity::Silent);
    let outcome = checker.run(&mut ctx);

    Ok(CheckResult {
        outcome,
        warnings: ctx.into_warnings(),
        strict: config.strict,
        verbosity,
    })
}
