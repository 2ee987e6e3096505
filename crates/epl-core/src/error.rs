// Error types shared by the normalization core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The caller handed the normalizer something it cannot rank: an empty
    /// population, or a value that has no place in an ordering (NaN, ±inf).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A player record is missing a statistic, or carries one that is not a
    /// usable number.
    #[error("malformed record for player `{player}`: field `{field}` {reason}")]
    MalformedRecord {
        player: String,
        field: String,
        reason: String,
    },

    #[error("duplicate player name in roster: `{name}`")]
    DuplicatePlayer { name: String },
}

impl StatsError {
    pub(crate) fn malformed(player: &str, field: &str, reason: impl Into<String>) -> Self {
        StatsError::MalformedRecord {
            player: player.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
