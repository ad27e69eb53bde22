pub mod audit;
pub mod codes;

use svy_audits::translations::Translations;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Audit(args) => audit::handle(args, flags).await,
        Commands::Codes => codes::handle(flags),
    }
}

/// Built-in message catalog.
fn translations() -> anyhow::Result<Translations> {
    Ok(Translations::builtin()?)
}
