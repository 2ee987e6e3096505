// REST client for the player statistics endpoint.
//
// Endpoints:
//   GET /players    -> [Player, ...]
//   GET /teams      -> {"teams": [String, ...]}
//   GET /positions  -> {"positions": [String, ...]}

use std::time::Duration;

use epl_core::Player;
use serde::Deserialize;
use tracing::debug;

use crate::error::DataError;

/// Thin async client over the statistics endpoint. No retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DataError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Http {
                url: base_url.to_string(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn fetch_players(&self) -> Result<Vec<Player>, DataError> {
        let body = self.get_text("players").await?;
        parse_players_json(&body)
    }

    pub async fn fetch_teams(&self) -> Result<Vec<String>, DataError> {
        let body = self.get_text("teams").await?;
        parse_teams_json(&body)
    }

    pub async fn fetch_positions(&self) -> Result<Vec<String>, DataError> {
        let body = self.get_text("positions").await?;
        parse_positions_json(&body)
    }

    async fn get_text(&self, path: &str) -> Result<String, DataError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status { url, status });
        }

        response
            .text()
            .await
            .map_err(|e| DataError::Http { url, source: e })
    }
}

// ---------------------------------------------------------------------------
// Payload parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TeamsPayload {
    teams: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PositionsPayload {
    positions: Vec<String>,
}

pub fn parse_players_json(raw: &str) -> Result<Vec<Player>, DataError> {
    serde_json::from_str(raw).map_err(|e| DataError::Decode {
        what: "players payload".into(),
        source: e,
    })
}

/// Team names, sorted and de-duplicated (the endpoint returns set order).
pub fn parse_teams_json(raw: &str) -> Result<Vec<String>, DataError> {
    let payload: TeamsPayload = serde_json::from_str(raw).map_err(|e| DataError::Decode {
        what: "teams payload".into(),
        source: e,
    })?;
    Ok(sorted_distinct(payload.teams))
}

pub fn parse_positions_json(raw: &str) -> Result<Vec<String>, DataError> {
    let payload: PositionsPayload = serde_json::from_str(raw).map_err(|e| DataError::Decode {
        what: "positions payload".into(),
        source: e,
    })?;
    Ok(sorted_distinct(payload.positions))
}

fn sorted_distinct(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values.dedup();
    values
}
