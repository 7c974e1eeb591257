use satcat_config::SatcatConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SatcatConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ingest(args) => commands::ingest::handle(&args, config, flags).await,
        Commands::Size(args) => commands::size::handle(&args, config, flags),
        Commands::Export(args) => commands::export::handle(&args, config, flags),
    }
}
