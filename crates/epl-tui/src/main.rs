// EPL dashboard entry point.
//
// Startup sequence:
// 1. Load config (copying defaults on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Build the roster source
// 4. Spawn the roster loader task
// 5. Run the TUI until the user quits
// 6. Cleanup on exit

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use epl_app::{spawn_loader, DashboardState};
use epl_core::config;
use epl_data::source_from_config;
use epl_tui::tui::{self, ViewState};
use tokio::sync::mpsc;
use tracing::{error, info};

const LOG_FILE: &str = "epl-dashboard.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config. Errors here go to stderr; the terminal is still ours.
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(Path::new(&config.dashboard.log_dir))?;
    info!(
        "EPL dashboard starting: source={:?}, {} statistics, tick={}ms",
        config.source.kind,
        config.profile.statistics.len(),
        config.dashboard.tick_ms
    );

    // 3. Roster source
    let source = source_from_config(&config.source).context("failed to build roster source")?;
    let origin = source.describe();

    // 4. Loader task. It sends a single action, then drops its sender.
    let (action_tx, action_rx) = mpsc::channel(16);
    let loader = spawn_loader(source, action_tx);

    // 5. TUI
    let state = ViewState::new(DashboardState::new(config.profile.statistics.clone()), origin);
    let tick = Duration::from_millis(config.dashboard.tick_ms);
    if let Err(e) = tui::run(action_rx, state, tick).await {
        error!("TUI error: {}", e);
    }

    // 6. Cleanup: a slow fetch may still be in flight.
    loader.abort();

    info!("EPL dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join(LOG_FILE))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("epl_tui=info,epl_app=info,epl_data=info,warn")
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
