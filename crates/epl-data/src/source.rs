// Roster sources: REST endpoint, local file, or the built-in sample.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use epl_core::config::{SourceConfig, SourceKind};
use epl_core::Roster;
use tracing::info;

use crate::client::ApiClient;
use crate::error::DataError;
use crate::file::load_roster_file;
use crate::sample::sample_roster;

/// A loaded roster together with the filter options offered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSnapshot {
    pub roster: Roster,
    pub teams: Vec<String>,
    pub positions: Vec<String>,
}

impl RosterSnapshot {
    /// Derive the team and position options from the roster itself.
    pub fn from_roster(roster: Roster) -> Self {
        let teams = roster.teams();
        let positions = roster.positions();
        RosterSnapshot {
            roster,
            teams,
            positions,
        }
    }
}

/// Anything that can produce a roster snapshot once at startup.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load(&self) -> Result<RosterSnapshot, DataError>;

    /// Short human-readable origin, for logs and the status bar.
    fn describe(&self) -> String;
}

#[async_trait]
impl RosterSource for ApiClient {
    /// Fetch players, teams and positions concurrently.
    async fn load(&self) -> Result<RosterSnapshot, DataError> {
        let (players, teams, positions) = tokio::try_join!(
            self.fetch_players(),
            self.fetch_teams(),
            self.fetch_positions()
        )?;
        let roster = Roster::new(players)?;
        info!(
            "fetched {} players, {} teams, {} positions from {}",
            roster.len(),
            teams.len(),
            positions.len(),
            self.base_url()
        );
        Ok(RosterSnapshot {
            roster,
            teams,
            positions,
        })
    }

    fn describe(&self) -> String {
        self.base_url().to_string()
    }
}

/// Roster read from a `.json` or `.csv` file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for FileSource {
    async fn load(&self) -> Result<RosterSnapshot, DataError> {
        let path = self.path.clone();
        let roster = tokio::task::spawn_blocking(move || load_roster_file(&path))
            .await
            .map_err(|e| DataError::Io {
                path: self.path.display().to_string(),
                source: std::io::Error::other(e),
            })??;
        info!("loaded {} players from {}", roster.len(), self.path.display());
        Ok(RosterSnapshot::from_roster(roster))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The built-in sample roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

#[async_trait]
impl RosterSource for SampleSource {
    async fn load(&self) -> Result<RosterSnapshot, DataError> {
        Ok(RosterSnapshot::from_roster(sample_roster()))
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}

/// Build the roster source named by the `[source]` config section.
pub fn source_from_config(config: &SourceConfig) -> Result<Box<dyn RosterSource>, DataError> {
    match config.kind {
        SourceKind::Api => Ok(Box::new(ApiClient::new(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?)),
        SourceKind::File => {
            let path = config.path.clone().unwrap_or_default();
            Ok(Box::new(FileSource::new(path)))
        }
        SourceKind::Sample => Ok(Box::new(SampleSource)),
    }
}
