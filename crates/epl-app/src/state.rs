// Dashboard state.
//
// `DashboardState` is a plain value. Every change goes through `reduce`,
// which consumes the old state and returns the next one, so the UI loop can
// never observe a half-applied update. `view` derives everything the screen
// shows from the current state and the roster snapshot.

use chrono::{DateTime, Utc};
use epl_core::{Filter, HeadToHeadRow, Player, ProfileTable, Statistic, StatisticSample, StatsError};
use epl_data::RosterSnapshot;
use tracing::{info, warn};

use crate::favorites::{FavoritesLog, SavedComparison};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Every transition the dashboard supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RosterLoaded(RosterSnapshot),
    RosterFailed(String),
    SelectFirst(String),
    SelectSecond(String),
    /// Move player 1 through the visible players; negative steps go back.
    CycleFirst(isize),
    CycleSecond(isize),
    CycleTeamFilter,
    CyclePositionFilter,
    SetTeamFilter(Filter),
    SetPositionFilter(Filter),
    ToggleComparison,
    SaveFavorite { saved_at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    status: LoadStatus,
    snapshot: Option<RosterSnapshot>,
    team_filter: Filter,
    position_filter: Filter,
    first: Option<String>,
    second: Option<String>,
    comparison: bool,
    favorites: FavoritesLog,
    statistics: Vec<Statistic>,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState::new(Statistic::ALL.to_vec())
    }
}

impl DashboardState {
    /// A dashboard waiting for its roster, charting `statistics` in order.
    pub fn new(statistics: Vec<Statistic>) -> Self {
        DashboardState {
            status: LoadStatus::Loading,
            snapshot: None,
            team_filter: Filter::All,
            position_filter: Filter::All,
            first: None,
            second: None,
            comparison: false,
            favorites: FavoritesLog::new(),
            statistics,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn snapshot(&self) -> Option<&RosterSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn team_filter(&self) -> &Filter {
        &self.team_filter
    }

    pub fn position_filter(&self) -> &Filter {
        &self.position_filter
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn second(&self) -> Option<&str> {
        self.second.as_deref()
    }

    pub fn comparison(&self) -> bool {
        self.comparison
    }

    pub fn favorites(&self) -> &FavoritesLog {
        &self.favorites
    }

    pub fn statistics(&self) -> &[Statistic] {
        &self.statistics
    }

    /// Apply one action and return the resulting state.
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::RosterLoaded(snapshot) => self.with_snapshot(snapshot),
            Action::RosterFailed(message) => DashboardState {
                status: LoadStatus::Failed(message),
                ..self
            },
            Action::SelectFirst(name) => self.select(Slot::First, &name),
            Action::SelectSecond(name) => self.select(Slot::Second, &name),
            Action::CycleFirst(step) => self.cycle(Slot::First, step),
            Action::CycleSecond(step) => self.cycle(Slot::Second, step),
            Action::CycleTeamFilter => match &self.snapshot {
                Some(snapshot) => {
                    let team = self.team_filter.cycle(&snapshot.teams);
                    let position = self.position_filter.clone();
                    self.with_filters(team, position)
                }
                None => self,
            },
            Action::CyclePositionFilter => match &self.snapshot {
                Some(snapshot) => {
                    let position = self.position_filter.cycle(&snapshot.positions);
                    let team = self.team_filter.clone();
                    self.with_filters(team, position)
                }
                None => self,
            },
            Action::SetTeamFilter(team) => {
                let position = self.position_filter.clone();
                self.with_filters(team, position)
            }
            Action::SetPositionFilter(position) => {
                let team = self.team_filter.clone();
                self.with_filters(team, position)
            }
            Action::ToggleComparison => DashboardState {
                comparison: !self.comparison,
                ..self
            },
            Action::SaveFavorite { saved_at } => self.save_favorite(saved_at),
        }
    }

    /// Players passing both filters, in roster order.
    pub fn visible_players(&self) -> Vec<&Player> {
        match &self.snapshot {
            Some(snapshot) => snapshot
                .roster
                .filter(&self.team_filter, &self.position_filter),
            None => Vec::new(),
        }
    }

    /// Derive what the screen shows.
    ///
    /// Profiles are computed against the whole roster, not the filtered
    /// subset. Malformed records surface here as errors.
    pub fn view(&self) -> Result<DashboardView, StatsError> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(DashboardView::default());
        };
        let roster = &snapshot.roster;
        let visible = self
            .visible_players()
            .into_iter()
            .map(PlayerCard::from)
            .collect();

        let Some(first) = self.first.as_deref().and_then(|name| roster.find(name)) else {
            return Ok(DashboardView {
                visible,
                chart: Chart::Empty,
            });
        };

        let table = ProfileTable::from_roster(roster, &self.statistics)?;
        let second = self
            .second
            .as_deref()
            .filter(|_| self.comparison)
            .and_then(|name| roster.find(name));

        let chart = match second {
            Some(second) => Chart::Comparison {
                first: first.into(),
                second: second.into(),
                rows: table.head_to_head(first, second)?,
            },
            None => Chart::Single {
                player: first.into(),
                samples: table.profile(first)?,
            },
        };
        Ok(DashboardView { visible, chart })
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    fn with_snapshot(self, snapshot: RosterSnapshot) -> Self {
        let players = snapshot.roster.players();
        let first = players.first().map(|p| p.name.clone());
        let second = players.get(1).map(|p| p.name.clone());
        info!(
            "roster ready: {} players, {} teams, {} positions",
            players.len(),
            snapshot.teams.len(),
            snapshot.positions.len()
        );
        DashboardState {
            status: LoadStatus::Ready,
            snapshot: Some(snapshot),
            team_filter: Filter::All,
            position_filter: Filter::All,
            first,
            second,
            ..self
        }
    }

    fn select(mut self, slot: Slot, name: &str) -> Self {
        let resolved = self
            .snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.roster.find(name))
            .map(|player| player.name.clone());
        match resolved {
            Some(name) => *self.slot_mut(slot) = Some(name),
            None => warn!("ignoring selection of unknown player {:?}", name),
        }
        self
    }

    fn cycle(mut self, slot: Slot, step: isize) -> Self {
        if let Some(name) = self.cycled_name(slot, step) {
            *self.slot_mut(slot) = Some(name);
        }
        self
    }

    fn cycled_name(&self, slot: Slot, step: isize) -> Option<String> {
        let visible = self.visible_players();
        if visible.is_empty() {
            return None;
        }
        let len = visible.len() as isize;
        let current = self
            .slot(slot)
            .and_then(|name| visible.iter().position(|p| p.name == name));
        let idx = match current {
            Some(idx) => (idx as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        Some(visible[idx as usize].name.clone())
    }

    /// Change filters, then move any selection the filters hide onto a
    /// visible player. With nothing visible the selections stay as they are.
    fn with_filters(self, team_filter: Filter, position_filter: Filter) -> Self {
        let mut next = DashboardState {
            team_filter,
            position_filter,
            ..self
        };
        let first = next.reconciled(Slot::First, None);
        let second = next.reconciled(Slot::Second, first.as_deref());
        next.first = first;
        next.second = second;
        next
    }

    fn reconciled(&self, slot: Slot, avoid: Option<&str>) -> Option<String> {
        let current = self.slot(slot);
        let visible = self.visible_players();
        if let Some(name) = current {
            if visible.iter().any(|p| p.name == name) {
                return Some(name.to_string());
            }
        }
        visible
            .iter()
            .find(|p| Some(p.name.as_str()) != avoid)
            .or_else(|| visible.first())
            .map(|p| p.name.clone())
            .or_else(|| current.map(str::to_string))
    }

    fn save_favorite(mut self, saved_at: DateTime<Utc>) -> Self {
        let Some(first) = self.first.clone() else {
            warn!("no player selected, favorite not saved");
            return self;
        };
        let second = if self.comparison {
            self.second.clone()
        } else {
            None
        };
        let entry = SavedComparison {
            first,
            second,
            team_filter: self.team_filter.clone(),
            position_filter: self.position_filter.clone(),
            saved_at,
        };
        let title = entry.title();
        let seq = self.favorites.append(entry);
        info!("saved favorite #{}: {}", seq + 1, title);
        self
    }

    fn slot(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::First => self.first.as_deref(),
            Slot::Second => self.second.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::First => &mut self.first,
            Slot::Second => &mut self.second,
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Identity of a player as shown in selectors and chart headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub name: String,
    pub team: String,
    pub position: String,
}

impl From<&Player> for PlayerCard {
    fn from(player: &Player) -> Self {
        PlayerCard {
            name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Chart {
    #[default]
    Empty,
    Single {
        player: PlayerCard,
        samples: Vec<StatisticSample>,
    },
    Comparison {
        first: PlayerCard,
        second: PlayerCard,
        rows: Vec<HeadToHeadRow>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub visible: Vec<PlayerCard>,
    pub chart: Chart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use epl_core::{Roster, StatLine};
    use epl_data::sample::sample_roster;

    fn loaded() -> DashboardState {
        DashboardState::default().reduce(Action::RosterLoaded(RosterSnapshot::from_roster(
            sample_roster(),
        )))
    }

    fn only(value: &str) -> Filter {
        Filter::Only(value.to_string())
    }

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 17, 15, 0, 0).unwrap()
    }

    #[test]
    fn starts_loading_with_nothing_selected() {
        let state = DashboardState::default();
        assert_eq!(state.status(), &LoadStatus::Loading);
        assert!(state.first().is_none());
        assert!(state.second().is_none());
        assert_eq!(state.statistics(), &Statistic::ALL);
        assert_eq!(state.view().unwrap(), DashboardView::default());
    }

    #[test]
    fn load_selects_first_two_players() {
        let state = loaded();
        assert_eq!(state.status(), &LoadStatus::Ready);
        assert_eq!(state.first(), Some("Erling Haaland"));
        assert_eq!(state.second(), Some("Kevin De Bruyne"));
        assert_eq!(state.visible_players().len(), 8);
    }

    #[test]
    fn single_player_roster_leaves_second_unset() {
        let roster = Roster::new(vec![Player::new(
            "Solo",
            "T",
            "Forward",
            StatLine {
                goals: 0.5,
                assists: 0.5,
                passing_accuracy: 0.8,
                tackles: 0.5,
                interceptions: 0.5,
                dribbles: 0.5,
                shots_on_target: 0.5,
            },
        )])
        .unwrap();
        let state = DashboardState::default()
            .reduce(Action::RosterLoaded(RosterSnapshot::from_roster(roster)))
            .reduce(Action::ToggleComparison);
        assert_eq!(state.first(), Some("Solo"));
        assert!(state.second().is_none());
        assert!(matches!(state.view().unwrap().chart, Chart::Single { .. }));
    }

    #[test]
    fn empty_roster_renders_empty_chart() {
        let roster = Roster::new(Vec::new()).unwrap();
        let state =
            DashboardState::default().reduce(Action::RosterLoaded(RosterSnapshot::from_roster(roster)));
        assert_eq!(state.status(), &LoadStatus::Ready);
        assert_eq!(state.view().unwrap().chart, Chart::Empty);
    }

    #[test]
    fn failure_is_recorded() {
        let state = DashboardState::default().reduce(Action::RosterFailed("connection refused".into()));
        assert_eq!(
            state.status(),
            &LoadStatus::Failed("connection refused".into())
        );
    }

    #[test]
    fn select_by_name_is_case_insensitive() {
        let state = loaded().reduce(Action::SelectFirst("declan rice".into()));
        assert_eq!(state.first(), Some("Declan Rice"));
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let before = loaded();
        let after = before.clone().reduce(Action::SelectSecond("Nobody".into()));
        assert_eq!(before, after);
    }

    #[test]
    fn selection_before_load_is_ignored() {
        let state = DashboardState::default().reduce(Action::SelectFirst("Declan Rice".into()));
        assert!(state.first().is_none());
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let state = loaded().reduce(Action::CycleFirst(-1));
        assert_eq!(state.first(), Some("Son Heung-min"));
        let state = state.reduce(Action::CycleFirst(1));
        assert_eq!(state.first(), Some("Erling Haaland"));
        let state = state.reduce(Action::CycleSecond(2));
        assert_eq!(state.second(), Some("Bukayo Saka"));
    }

    #[test]
    fn cycling_stays_within_filter() {
        let state = loaded().reduce(Action::SetTeamFilter(only("Arsenal")));
        // Haaland is hidden, so both selections moved onto Arsenal players.
        assert_eq!(state.first(), Some("Bukayo Saka"));
        assert_eq!(state.second(), Some("Declan Rice"));
        let state = state.reduce(Action::CycleFirst(1));
        assert_eq!(state.first(), Some("Declan Rice"));
        let state = state.reduce(Action::CycleFirst(1));
        assert_eq!(state.first(), Some("Bukayo Saka"));
    }

    #[test]
    fn filter_keeps_visible_selection() {
        let state = loaded().reduce(Action::SetPositionFilter(only("Forward")));
        assert_eq!(state.first(), Some("Erling Haaland"));
        assert_eq!(state.second(), Some("Mohamed Salah"));
    }

    #[test]
    fn filter_with_no_matches_keeps_selection() {
        let state = loaded()
            .reduce(Action::SetTeamFilter(only("Tottenham")))
            .reduce(Action::SetPositionFilter(only("Defender")));
        assert!(state.visible_players().is_empty());
        assert_eq!(state.first(), Some("Son Heung-min"));
        let state = state.reduce(Action::CycleFirst(1));
        assert_eq!(state.first(), Some("Son Heung-min"));
    }

    #[test]
    fn team_filter_cycles_through_options_and_back() {
        let mut state = loaded();
        let mut seen = Vec::new();
        for _ in 0..6 {
            state = state.reduce(Action::CycleTeamFilter);
            seen.push(state.team_filter().to_string());
        }
        assert_eq!(
            seen,
            vec![
                "Arsenal",
                "Liverpool",
                "Manchester City",
                "Manchester United",
                "Tottenham",
                "All"
            ]
        );
    }

    #[test]
    fn position_filter_cycle_before_load_is_noop() {
        let state = DashboardState::default().reduce(Action::CyclePositionFilter);
        assert_eq!(state.position_filter(), &Filter::All);
    }

    #[test]
    fn view_single_profile_follows_statistic_order() {
        let state = DashboardState::new(vec![Statistic::Tackles, Statistic::Goals])
            .reduce(Action::RosterLoaded(RosterSnapshot::from_roster(sample_roster())));
        match state.view().unwrap().chart {
            Chart::Single { player, samples } => {
                assert_eq!(player.name, "Erling Haaland");
                assert_eq!(samples.len(), 2);
                assert_eq!(samples[0].statistic, Statistic::Tackles);
                assert!((samples[0].percentile - 0.0).abs() < 1e-9);
                assert!((samples[1].percentile - 87.5).abs() < 1e-9);
            }
            other => panic!("expected single chart, got: {other:?}"),
        }
    }

    #[test]
    fn view_comparison_pairs_rows() {
        let state = loaded().reduce(Action::ToggleComparison);
        assert!(state.comparison());
        match state.view().unwrap().chart {
            Chart::Comparison { first, second, rows } => {
                assert_eq!(first.name, "Erling Haaland");
                assert_eq!(second.name, "Kevin De Bruyne");
                assert_eq!(rows.len(), 7);
                assert_eq!(rows[1].statistic, Statistic::Assists);
                assert!(rows[1].second.percentile > rows[1].first.percentile);
            }
            other => panic!("expected comparison chart, got: {other:?}"),
        }
    }

    #[test]
    fn view_ranks_against_whole_roster_under_filter() {
        let unfiltered = loaded();
        let filtered = unfiltered
            .clone()
            .reduce(Action::SetTeamFilter(only("Manchester City")));
        assert_eq!(filtered.view().unwrap().visible.len(), 2);
        assert_eq!(
            filtered.view().unwrap().chart,
            unfiltered.view().unwrap().chart
        );
    }

    #[test]
    fn view_surfaces_malformed_records() {
        let mut bad = Player::new(
            "Broken",
            "T",
            "Forward",
            StatLine {
                goals: 0.1,
                assists: 0.1,
                passing_accuracy: 0.5,
                tackles: 0.1,
                interceptions: 0.1,
                dribbles: 0.1,
                shots_on_target: 0.1,
            },
        );
        bad.stats.remove("goals");
        let mut players = sample_roster().players().to_vec();
        players.push(bad);
        let roster = Roster::new(players).unwrap();
        let state =
            DashboardState::default().reduce(Action::RosterLoaded(RosterSnapshot::from_roster(roster)));
        assert!(matches!(
            state.view(),
            Err(StatsError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn favorites_capture_current_selection() {
        let state = loaded()
            .reduce(Action::SetTeamFilter(only("Liverpool")))
            .reduce(Action::SaveFavorite { saved_at: saved_at() })
            .reduce(Action::ToggleComparison)
            .reduce(Action::SaveFavorite { saved_at: saved_at() });

        let entries = state.favorites().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].first, "Mohamed Salah");
        assert!(entries[0].second.is_none());
        assert_eq!(entries[0].team_filter, only("Liverpool"));
        assert_eq!(entries[1].second.as_deref(), Some("Virgil van Dijk"));
        assert_eq!(entries[1].saved_at, saved_at());
    }

    #[test]
    fn favorite_without_selection_is_skipped() {
        let state = DashboardState::default().reduce(Action::SaveFavorite { saved_at: saved_at() });
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn reload_resets_filters_but_keeps_favorites() {
        let state = loaded()
            .reduce(Action::SetTeamFilter(only("Arsenal")))
            .reduce(Action::SaveFavorite { saved_at: saved_at() })
            .reduce(Action::RosterLoaded(RosterSnapshot::from_roster(sample_roster())));
        assert_eq!(state.team_filter(), &Filter::All);
        assert_eq!(state.first(), Some("Erling Haaland"));
        assert_eq!(state.favorites().len(), 1);
    }
}
