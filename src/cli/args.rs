//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check the string tables of a mod against the base locale
//! - `init`: Initialize a transcheck configuration file

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::{
    config::{Config, load_config},
    core::encoding::parse_encoding_overrides,
    issues::Verbosity,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Root directory of the mod
    pub mod_path: PathBuf,

    /// Base locale every other locale is compared against (overrides config file)
    #[arg(short = 'b', long = "base")]
    pub base_locale: Option<String>,

    /// Output level: 0 = silent, 1 = machine-readable, 2 = human-readable
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub verbosity: u8,

    /// Encoding overrides, e.g. `FR:cp1252,RU:utf-8`.
    ///
    /// Accepts WHATWG labels and codec names such as `utf_8`, `latin_1` or `utf_16_le`
    #[arg(short, long)]
    pub encodings: Option<String>,

    /// Fail when any warning is reported
    #[arg(long)]
    pub strict: bool,

    /// Comma-separated warning codes to suppress
    #[arg(long)]
    pub ignore: Option<String>,

    /// String table directory relative to the mod root (overrides config file)
    #[arg(long)]
    pub string_subdir: Option<String>,
}

impl CheckCommand {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_level(self.verbosity).unwrap_or_default()
    }

    /// Load the config file for the mod and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = load_config(&self.mod_path)?.config;
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_to(&self, config: &mut Config) {
        if let Some(base_locale) = &self.base_locale {
            config.base_locale = base_locale.clone();
        }
        if let Some(string_subdir) = &self.string_subdir {
            config.string_subdir = string_subdir.clone();
        }
        if let Some(encodings) = &self.encodings {
            config.encodings.extend(parse_encoding_overrides(encodings));
        }
        if let Some(ignore) = &self.ignore {
            config.ignore.extend(
                ignore
                    .split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(String::from),
            );
        }
        config.strict |= self.strict;
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation files for missing, extra, duplicate and untranslated strings
    Check(CheckCommand),
    /// Initialize a new .transcheckrc.json configuration file
    Init,
}
