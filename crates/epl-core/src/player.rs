// Player records and the roster snapshot they are ranked against.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StatsError;
use crate::stats::Statistic;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A single player as delivered by the stats endpoint.
///
/// Statistic fields are kept as raw JSON values. They are only interpreted
/// when a profile extracts them, so a missing or non-numeric field is
/// reported against the player it came from instead of being coerced at
/// load time. Unknown extra fields are kept as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(flatten)]
    pub stats: BTreeMap<String, Value>,
}

/// Fully numeric statistics for one player, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatLine {
    pub goals: f64,
    pub assists: f64,
    pub passing_accuracy: f64,
    pub tackles: f64,
    pub interceptions: f64,
    pub dribbles: f64,
    pub shots_on_target: f64,
}

impl StatLine {
    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Goals => self.goals,
            Statistic::Assists => self.assists,
            Statistic::PassingAccuracy => self.passing_accuracy,
            Statistic::Tackles => self.tackles,
            Statistic::Interceptions => self.interceptions,
            Statistic::Dribbles => self.dribbles,
            Statistic::ShotsOnTarget => self.shots_on_target,
        }
    }
}

impl Player {
    /// Build a player from typed statistics.
    pub fn new(name: &str, team: &str, position: &str, line: StatLine) -> Self {
        let stats = Statistic::ALL
            .into_iter()
            .map(|stat| (stat.key().to_string(), Value::from(line.get(stat))))
            .collect();
        Player {
            name: name.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            stats,
        }
    }

    /// The stored value of `stat`, validated against its domain.
    ///
    /// Counts must be non-negative; passing accuracy must lie in [0, 1].
    pub fn stat(&self, stat: Statistic) -> Result<f64, StatsError> {
        let field = stat.key();
        let value = self
            .stats
            .get(field)
            .ok_or_else(|| StatsError::malformed(&self.name, field, "is missing"))?;

        let raw = match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| StatsError::malformed(&self.name, field, "is not representable as f64"))?,
            Value::Null => return Err(StatsError::malformed(&self.name, field, "is null")),
            other => {
                return Err(StatsError::malformed(
                    &self.name,
                    field,
                    format!("is not numeric (got {other})"),
                ))
            }
        };

        if !raw.is_finite() {
            return Err(StatsError::malformed(&self.name, field, "is not finite"));
        }
        if raw < 0.0 {
            return Err(StatsError::malformed(
                &self.name,
                field,
                format!("must be non-negative, got {raw}"),
            ));
        }
        if stat.is_fraction() && raw > 1.0 {
            return Err(StatsError::malformed(
                &self.name,
                field,
                format!("must be a fraction in [0, 1], got {raw}"),
            ));
        }
        Ok(raw)
    }

    /// The value of `stat` on its display scale (passing accuracy as a percentage).
    pub fn scaled_stat(&self, stat: Statistic) -> Result<f64, StatsError> {
        Ok(self.stat(stat)? * stat.scale())
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Team or position filter: everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    /// Step to the next option: All -> options[0] -> ... -> options[n-1] -> All.
    ///
    /// A filter whose value is no longer among `options` resets to All.
    pub fn cycle(&self, options: &[String]) -> Filter {
        let next_idx = match self {
            Filter::All => 0,
            Filter::Only(current) => match options.iter().position(|o| o == current) {
                Some(idx) => idx + 1,
                None => return Filter::All,
            },
        };
        options
            .get(next_idx)
            .map(|o| Filter::Only(o.clone()))
            .unwrap_or(Filter::All)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("All"),
            Filter::Only(value) => f.write_str(value),
        }
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// An immutable roster snapshot.
///
/// Cloning shares the underlying players, so every clone ranks against the
/// same population.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Arc<[Player]>,
}

impl Roster {
    /// Build a roster, rejecting duplicate player names.
    pub fn new(players: Vec<Player>) -> Result<Self, StatsError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.name.as_str()) {
                return Err(StatsError::DuplicatePlayer {
                    name: player.name.clone(),
                });
            }
        }
        Ok(Roster {
            players: players.into(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Look up a player by name: exact match first, then case-insensitive.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.name == name)
            .or_else(|| {
                let lowered = name.to_lowercase();
                self.players.iter().find(|p| p.name.to_lowercase() == lowered)
            })
    }

    /// Distinct team names, sorted.
    pub fn teams(&self) -> Vec<String> {
        distinct(self.players.iter().map(|p| p.team.as_str()))
    }

    /// Distinct positions, sorted.
    pub fn positions(&self) -> Vec<String> {
        distinct(self.players.iter().map(|p| p.position.as_str()))
    }

    /// Players matching both filters, in roster order.
    pub fn filter(&self, team: &Filter, position: &Filter) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| team.matches(&p.team) && position.matches(&p.position))
            .collect()
    }

    /// Every player's scaled value for `stat`, in roster order.
    ///
    /// Fails on the first player whose record cannot supply the statistic.
    pub fn population(&self, stat: Statistic) -> Result<Vec<f64>, StatsError> {
        self.players.iter().map(|p| p.scaled_stat(stat)).collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
