// The tracked statistic set and its display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven tracked per-player statistics.
///
/// The declaration order is the chart-axis order; [`Statistic::ALL`] lists
/// them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Goals,
    Assists,
    PassingAccuracy,
    Tackles,
    Interceptions,
    Dribbles,
    ShotsOnTarget,
}

impl Statistic {
    pub const ALL: [Statistic; 7] = [
        Statistic::Goals,
        Statistic::Assists,
        Statistic::PassingAccuracy,
        Statistic::Tackles,
        Statistic::Interceptions,
        Statistic::Dribbles,
        Statistic::ShotsOnTarget,
    ];

    /// Field name used in player records (JSON keys, CSV headers).
    pub fn key(self) -> &'static str {
        match self {
            Statistic::Goals => "goals",
            Statistic::Assists => "assists",
            Statistic::PassingAccuracy => "passing_accuracy",
            Statistic::Tackles => "tackles",
            Statistic::Interceptions => "interceptions",
            Statistic::Dribbles => "dribbles",
            Statistic::ShotsOnTarget => "shots_on_target",
        }
    }

    /// Axis label shown on charts and tables.
    pub fn label(self) -> &'static str {
        match self {
            Statistic::Goals => "Goals",
            Statistic::Assists => "Assists",
            Statistic::PassingAccuracy => "Passing",
            Statistic::Tackles => "Tackles",
            Statistic::Interceptions => "Interceptions",
            Statistic::Dribbles => "Dribbles",
            Statistic::ShotsOnTarget => "Shots on Target",
        }
    }

    /// Multiplier applied to the stored value before display and ranking.
    ///
    /// Passing accuracy is stored as a fraction and shown as a percentage.
    pub fn scale(self) -> f64 {
        match self {
            Statistic::PassingAccuracy => 100.0,
            _ => 1.0,
        }
    }

    /// Whether the stored value is a fraction in [0, 1] rather than a count.
    pub fn is_fraction(self) -> bool {
        matches!(self, Statistic::PassingAccuracy)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Statistic::ALL
            .into_iter()
            .find(|stat| stat.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown statistic `{wanted}`"))
    }
}
