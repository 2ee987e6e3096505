// Roster sources for the dashboard: REST endpoint, local files, and the
// built-in sample roster.

pub mod client;
pub mod error;
pub mod file;
pub mod sample;
pub mod source;

pub use client::ApiClient;
pub use error::DataError;
pub use source::{source_from_config, FileSource, RosterSnapshot, RosterSource, SampleSource};
