use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, Locale, OutputFormat};
pub use root_commands::{AccessCodeFormatArg, AuditArgs, Commands};

/// Top-level CLI parser for the `svy` binary.
#[derive(Debug, Parser)]
#[command(name = "svy", version, about = "Survey interview audits")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Translate finding messages
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    /// Survey configuration file (defaults to .survey/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            locale: self.locale,
            config: self.config.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
