// Roster loading from local files.
//
// JSON files carry the same array the REST endpoint returns. CSV files have a
// header row with `name`, `team`, `position` and any statistic columns.
// Statistic cells that do not parse as numbers are kept verbatim so the
// profile step can report them against the right player.

use std::io::Read;
use std::path::Path;

use epl_core::{Player, Roster};
use serde_json::Value;
use tracing::warn;

use crate::client::parse_players_json;
use crate::error::DataError;

const IDENTITY_COLUMNS: [&str; 3] = ["name", "team", "position"];

fn players_from_csv_reader<R: Read>(rdr: R, origin: &str) -> Result<Vec<Player>, DataError> {
    let csv_err = |e| DataError::Csv {
        path: origin.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut identity = [0usize; 3];
    for (slot, column) in identity.iter_mut().zip(IDENTITY_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DataError::MissingColumn {
                path: origin.to_string(),
                column: column.to_string(),
            })?;
    }
    let [name_idx, team_idx, position_idx] = identity;

    let mut players = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed row {} in {}: {}", row + 1, origin, e);
                continue;
            }
        };

        let name = record.get(name_idx).unwrap_or_default();
        if name.is_empty() {
            warn!("skipping row {} in {}: empty player name", row + 1, origin);
            continue;
        }

        let stats = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !identity.contains(idx))
            .filter_map(|(idx, header)| {
                let cell = record.get(idx)?;
                if cell.is_empty() {
                    return None;
                }
                let value = match cell.parse::<f64>() {
                    Ok(v) if v.is_finite() => Value::from(v),
                    _ => Value::String(cell.to_string()),
                };
                Some((header.clone(), value))
            })
            .collect();

        players.push(Player {
            name: name.to_string(),
            team: record.get(team_idx).unwrap_or_default().to_string(),
            position: record.get(position_idx).unwrap_or_default().to_string(),
            stats,
        });
    }
    Ok(players)
}

/// Parse a CSV roster from any reader.
pub fn parse_roster_csv<R: Read>(rdr: R) -> Result<Roster, DataError> {
    Ok(Roster::new(players_from_csv_reader(rdr, "<csv>")?)?)
}

/// Parse a JSON roster (array of player objects).
pub fn parse_roster_json(raw: &str) -> Result<Roster, DataError> {
    Ok(Roster::new(parse_players_json(raw)?)?)
}

/// Load a roster from a `.json` or `.csv` file.
pub fn load_roster_file(path: &Path) -> Result<Roster, DataError> {
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let raw = std::fs::read_to_string(path).map_err(|e| DataError::Io {
                path: display,
                source: e,
            })?;
            parse_roster_json(&raw)
        }
        Some("csv") => {
            let file = std::fs::File::open(path).map_err(|e| DataError::Io {
                path: display.clone(),
                source: e,
            })?;
            Ok(Roster::new(players_from_csv_reader(file, &display)?)?)
        }
        _ => Err(DataError::UnsupportedFormat { path: display }),
    }
}
