use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use svy_config::AccessCodeFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit interview files and print their findings.
    Audit(AuditArgs),
    /// List every error code of the baseline catalog.
    Codes,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Interview JSON files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Access code format, overriding the configured one
    #[arg(long, value_enum)]
    pub access_code_format: Option<AccessCodeFormatArg>,
}

/// Command-line spelling of [`AccessCodeFormat`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AccessCodeFormatArg {
    None,
    #[value(name = "eight_digits")]
    EightDigits,
}

impl From<AccessCodeFormatArg> for AccessCodeFormat {
    fn from(format: AccessCodeFormatArg) -> Self {
        match format {
            AccessCodeFormatArg::None => Self::None,
            AccessCodeFormatArg::EightDigits => Self::EightDigits,
        }
    }
}
