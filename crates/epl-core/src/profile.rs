// Comparison profiles: per-statistic raw values and percentile ranks.

use tracing::debug;

use crate::error::StatsError;
use crate::percentile::Population;
use crate::player::{Player, Roster};
use crate::stats::Statistic;

/// One (label, raw value, percentile) entry of a comparison profile.
///
/// `raw_value` is on the display scale, so passing accuracy is a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticSample {
    pub statistic: Statistic,
    pub label: &'static str,
    pub raw_value: f64,
    pub percentile: f64,
}

/// One chart axis of a two-player comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadToHeadRow {
    pub statistic: Statistic,
    pub label: &'static str,
    pub first: StatisticSample,
    pub second: StatisticSample,
}

/// Sorted populations for an ordered statistic set, extracted from one
/// roster snapshot.
///
/// Building the table once and profiling several players from it keeps every
/// profile on the same frame of reference.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    populations: Vec<(Statistic, Population)>,
}

impl ProfileTable {
    /// Extract and sort the population of each statistic in `statistics`.
    ///
    /// Fails with `MalformedRecord` if any roster member cannot supply one of
    /// the statistics, and with `InvalidInput` if the roster is empty.
    pub fn from_roster(roster: &Roster, statistics: &[Statistic]) -> Result<Self, StatsError> {
        let populations = statistics
            .iter()
            .map(|&stat| {
                let values = roster.population(stat)?;
                Ok((stat, Population::new(&values)?))
            })
            .collect::<Result<Vec<_>, StatsError>>()?;
        debug!(
            players = roster.len(),
            statistics = populations.len(),
            "built profile table"
        );
        Ok(ProfileTable { populations })
    }

    pub fn statistics(&self) -> impl Iterator<Item = Statistic> + '_ {
        self.populations.iter().map(|(stat, _)| *stat)
    }

    /// Profile `player` against the table, in the table's statistic order.
    pub fn profile(&self, player: &Player) -> Result<Vec<StatisticSample>, StatsError> {
        self.populations
            .iter()
            .map(|(stat, population)| {
                let raw_value = player.scaled_stat(*stat)?;
                Ok(StatisticSample {
                    statistic: *stat,
                    label: stat.label(),
                    raw_value,
                    percentile: population.rank(raw_value)?,
                })
            })
            .collect()
    }

    /// Profile two players and pair their samples axis by axis.
    pub fn head_to_head(
        &self,
        first: &Player,
        second: &Player,
    ) -> Result<Vec<HeadToHeadRow>, StatsError> {
        let a = self.profile(first)?;
        let b = self.profile(second)?;
        Ok(a.into_iter()
            .zip(b)
            .map(|(first, second)| HeadToHeadRow {
                statistic: first.statistic,
                label: first.label,
                first,
                second,
            })
            .collect())
    }
}

/// Build the comparison profile of `player` against `roster`.
///
/// One sample per entry of `statistics`, in that order, whatever the key
/// order of the player's record.
pub fn build_comparison_profile(
    player: &Player,
    roster: &Roster,
    statistics: &[Statistic],
) -> Result<Vec<StatisticSample>, StatsError> {
    ProfileTable::from_roster(roster, statistics)?.profile(player)
}

/// Profile two players against the same roster snapshot, paired per axis.
pub fn compare_players(
    first: &Player,
    second: &Player,
    roster: &Roster,
    statistics: &[Statistic],
) -> Result<Vec<HeadToHeadRow>, StatsError> {
    ProfileTable::from_roster(roster, statistics)?.head_to_head(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::StatLine;
    use serde_json::Value;

    fn player(name: &str, goals: f64, passing: f64, tackles: f64) -> Player {
        Player::new(
            name,
            "Team",
            "Midfielder",
            StatLine {
                goals,
                assists: goals / 2.0,
                passing_accuracy: passing,
                tackles,
                interceptions: tackles,
                dribbles: 0.5,
                shots_on_target: goals,
            },
        )
    }

    fn roster() -> Roster {
        Roster::new(vec![
            player("Low", 0.1, 0.70, 0.9),
            player("Mid", 0.5, 0.80, 0.5),
            player("High", 0.9, 0.90, 0.1),
        ])
        .unwrap()
    }

    #[test]
    fn profile_has_one_sample_per_statistic_in_order() {
        let r = roster();
        let profile = build_comparison_profile(r.get(1).unwrap(), &r, &Statistic::ALL).unwrap();
        let labels: Vec<&str> = profile.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Goals",
                "Assists",
                "Passing",
                "Tackles",
                "Interceptions",
                "Dribbles",
                "Shots on Target"
            ]
        );
    }

    #[test]
    fn profile_follows_requested_order() {
        let r = roster();
        let order = [Statistic::Tackles, Statistic::Goals];
        let profile = build_comparison_profile(r.get(0).unwrap(), &r, &order).unwrap();
        assert_eq!(profile.len(), 2);
        assert_eq!(profile[0].statistic, Statistic::Tackles);
        assert_eq!(profile[1].statistic, Statistic::Goals);
    }

    #[test]
    fn record_key_order_does_not_affect_profile() {
        let r = roster();
        let json = r#"{"tackles": 0.5, "shots_on_target": 0.5, "name": "Mid",
            "dribbles": 0.5, "interceptions": 0.5, "passing_accuracy": 0.8,
            "assists": 0.25, "team": "Team", "position": "Midfielder", "goals": 0.5}"#;
        let reordered: Player = serde_json::from_str(json).unwrap();
        let a = build_comparison_profile(r.get(1).unwrap(), &r, &Statistic::ALL).unwrap();
        let b = build_comparison_profile(&reordered, &r, &Statistic::ALL).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn raw_values_and_percentiles() {
        let r = roster();
        let profile = build_comparison_profile(r.get(2).unwrap(), &r, &Statistic::ALL).unwrap();

        let goals = profile[0];
        assert!((goals.raw_value - 0.9).abs() < 1e-9);
        // Unique maximum of three ranks at 2/3.
        assert!((goals.percentile - 200.0 / 3.0).abs() < 1e-9);

        let passing = profile[2];
        assert!((passing.raw_value - 90.0).abs() < 1e-9);

        let tackles = profile[3];
        assert!((tackles.percentile - 0.0).abs() < 1e-9);

        // Everyone has 0.5 dribbles: ties at the minimum all map to 0.
        let dribbles = profile[5];
        assert!((dribbles.percentile - 0.0).abs() < 1e-9);
    }

    #[test]
    fn profile_is_idempotent() {
        let r = roster();
        let p = r.get(0).unwrap();
        let first = build_comparison_profile(p, &r, &Statistic::ALL).unwrap();
        let second = build_comparison_profile(p, &r, &Statistic::ALL).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_roster_member_is_surfaced() {
        let mut broken = player("Broken", 0.3, 0.75, 0.3);
        broken.stats.insert("goals".into(), Value::String("n/a".into()));
        let r = Roster::new(vec![player("Fine", 0.2, 0.8, 0.4), broken]).unwrap();
        let err = build_comparison_profile(r.get(0).unwrap(), &r, &Statistic::ALL).unwrap_err();
        match err {
            StatsError::MalformedRecord { player, field, .. } => {
                assert_eq!(player, "Broken");
                assert_eq!(field, "goals");
            }
            other => panic!("expected MalformedRecord, got: {other}"),
        }
    }

    #[test]
    fn malformed_profiled_player_is_surfaced() {
        let r = roster();
        let mut outsider = player("Outsider", 0.3, 0.75, 0.3);
        outsider.stats.remove("assists");
        let err = build_comparison_profile(&outsider, &r, &Statistic::ALL).unwrap_err();
        assert!(matches!(err, StatsError::MalformedRecord { ref field, .. } if field == "assists"));
    }

    #[test]
    fn empty_roster_is_invalid_input() {
        let empty = Roster::new(vec![]).unwrap();
        let p = player("Alone", 0.1, 0.5, 0.1);
        assert!(matches!(
            build_comparison_profile(&p, &empty, &Statistic::ALL),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_statistic_set_gives_empty_profile() {
        let r = roster();
        let profile = build_comparison_profile(r.get(0).unwrap(), &r, &[]).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn compare_players_pairs_axes() {
        let r = roster();
        let rows = compare_players(r.get(0).unwrap(), r.get(2).unwrap(), &r, &Statistic::ALL).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].label, "Goals");
        assert!(rows[0].first.percentile < rows[0].second.percentile);
        assert!(rows[3].first.percentile > rows[3].second.percentile);
        for row in &rows {
            assert_eq!(row.first.statistic, row.statistic);
            assert_eq!(row.second.statistic, row.statistic);
        }
    }

    #[test]
    fn table_profiles_match_one_shot_profiles() {
        let r = roster();
        let table = ProfileTable::from_roster(&r, &Statistic::ALL).unwrap();
        assert_eq!(table.statistics().count(), 7);
        for p in &r {
            assert_eq!(
                table.profile(p).unwrap(),
                build_comparison_profile(p, &r, &Statistic::ALL).unwrap()
            );
        }
    }
}
