// Normalization core: player model, percentile ranks, comparison profiles,
// and configuration.

pub mod config;
pub mod error;
pub mod percentile;
pub mod player;
pub mod profile;
pub mod stats;

pub use error::StatsError;
pub use percentile::{percentile_rank, Population};
pub use player::{Filter, Player, Roster, StatLine};
pub use profile::{build_comparison_profile, compare_players, HeadToHeadRow, ProfileTable, StatisticSample};
pub use stats::Statistic;
