//! Flamescore Player - composition root binary.

use anyhow::Context;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flamescore_player::runner::{self, config::RunnerConfig, RunnerDeps};
use flamescore_player::EditorSession;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flamescore_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Flamescore Player");

    let config = RunnerConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("Invalid player configuration")?;

    let storage = flamescore_player::infrastructure::create_storage(&config).inspect_err(|e| {
        tracing::error!("Cannot open editor storage: {:#}", e);
    })?;

    // A stored state we cannot read is fatal; overwriting it would lose data.
    let session = EditorSession::load(storage).inspect_err(|e| {
        tracing::error!("Cannot start with the stored editor state: {}", e);
    })?;

    runner::run(RunnerDeps { session });
    Ok(())
}
