// Entry point shared by the `build-css` and `build-js` binaries.

use crate::adapters::LocalStorage;
use crate::config::cli::CliArgs;
use crate::config::profile::ProfileConfig;
use crate::config::AssetKind;
use crate::core::engine::AssetEngine;
use crate::core::pipeline::ModulePipeline;
use crate::utils::console::{print_error, print_info};
use crate::utils::{logger, validation::Validate};

/// Parses the process arguments and runs one command for `kind`.
///
/// Command failures are reported on the console only; the process exit
/// status is left untouched.
pub async fn run(kind: AssetKind) -> anyhow::Result<()> {
    let invocation = CliArgs::invocation(std::env::args_os(), kind);

    logger::init_cli_logger(invocation.verbose);
    tracing::debug!("Invocation: {:?}", invocation);

    let profile = match ProfileConfig::builtin(kind).and_then(|p| p.validate().map(|_| p)) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("❌ Profile validation failed: {}", e);
            print_error(&e.user_friendly_message());
            print_info(&e.recovery_suggestion());
            return Ok(());
        }
    };

    let config = profile.asset_config();
    let pipeline = ModulePipeline::new(LocalStorage::new("."), config.clone())?;
    let engine = AssetEngine::new(pipeline, config);

    engine.dispatch(&invocation.command).await;
    Ok(())
}
