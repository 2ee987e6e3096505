// Background roster fetch, delivered to the UI loop as an `Action`.

use epl_data::RosterSource;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::state::Action;

/// Load once from `source` and send `RosterLoaded` or `RosterFailed`.
pub async fn load_roster(source: &dyn RosterSource, tx: &mpsc::Sender<Action>) {
    let origin = source.describe();
    info!("loading roster from {}", origin);

    let action = match source.load().await {
        Ok(snapshot) => Action::RosterLoaded(snapshot),
        Err(e) => {
            error!("failed to load roster from {}: {}", origin, e);
            Action::RosterFailed(e.to_string())
        }
    };

    if tx.send(action).await.is_err() {
        warn!("dashboard closed before the roster arrived");
    }
}

/// Run `load_roster` on its own task.
pub fn spawn_loader(source: Box<dyn RosterSource>, tx: mpsc::Sender<Action>) -> JoinHandle<()> {
    tokio::spawn(async move {
        load_roster(source.as_ref(), &tx).await;
    })
}
