use epl_core::StatsError;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: String,
        source: serde_json::Error,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column `{column}`")]
    MissingColumn { path: String, column: String },

    #[error("unsupported roster file {path}: expected a .json or .csv extension")]
    UnsupportedFormat { path: String },

    #[error("invalid roster: {0}")]
    Roster(#[from] StatsError),
}
