use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use wordup_config::Config;
use wordup_lookup::DictionaryClient;

pub mod command;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;
pub mod state;
pub mod ui;
pub mod view;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "wordup", about = "Look up definitions, examples and synonyms")]
struct Args {
    /// JSON config profile; environment is used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dictionary endpoint override
    #[arg(long)]
    api_url: Option<String>,

    /// Viewport width at startup
    #[arg(long)]
    width: Option<u32>,

    /// `text` or `json`
    #[arg(long)]
    log_format: Option<String>,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    if let Some(api_url) = &args.api_url {
        config.lookup.api_url = api_url.clone();
    }
    if let Some(width) = args.width {
        config.ui.viewport_width = width;
    }
    if let Some(format) = &args.log_format {
        config.log_format = format.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = load_config(&args)?;
    logging::init_logging(&config.log_format);

    tracing::info!("Starting wordup against {}", config.lookup.api_url);

    let lookup = Arc::new(DictionaryClient::new(&config.lookup));
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, lookup);

    let mut tasks = controller.spawn_tasks(atty::is(atty::Stream::Stdin));
    io::spawn_stdin_reader(controller.input_sender())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();

    // Give the UI a moment to print its last frame
    let drain = async {
        while let Some(result) = tasks.join_next().await {
            if let Ok(Err(e)) = result {
                tracing::error!("task failed during shutdown: {e:#}");
            }
        }
    };
    if tokio::time::timeout(Duration::from_secs(2), drain).await.is_err() {
        tracing::warn!("Tasks did not stop in time");
        tasks.abort_all();
    }

    Ok(())
}
