// Saved comparisons: an append-only, in-memory log.

use chrono::{DateTime, Utc};
use epl_core::Filter;

/// A comparison the user chose to keep for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedComparison {
    pub first: String,
    /// Set only when the comparison view was active.
    pub second: Option<String>,
    pub team_filter: Filter,
    pub position_filter: Filter,
    pub saved_at: DateTime<Utc>,
}

impl SavedComparison {
    pub fn title(&self) -> String {
        match &self.second {
            Some(second) => format!("{} vs {}", self.first, second),
            None => self.first.clone(),
        }
    }
}

/// Entries are only ever appended; nothing is edited or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesLog {
    entries: Vec<SavedComparison>,
}

impl FavoritesLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its sequence number (0-based).
    pub fn append(&mut self, entry: SavedComparison) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn entries(&self) -> &[SavedComparison] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&SavedComparison> {
        self.entries.last()
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = &SavedComparison> {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(first: &str, second: Option<&str>, minute: u32) -> SavedComparison {
        SavedComparison {
            first: first.into(),
            second: second.map(str::to_string),
            team_filter: Filter::All,
            position_filter: Filter::All,
            saved_at: Utc.with_ymd_and_hms(2024, 8, 17, 15, minute, 0).unwrap(),
        }
    }

    #[test]
    fn append_returns_sequence_numbers() {
        let mut log = FavoritesLog::new();
        assert!(log.is_empty());
        assert_eq!(log.append(entry("A", None, 0)), 0);
        assert_eq!(log.append(entry("B", Some("C"), 1)), 1);
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().first, "B");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut log = FavoritesLog::new();
        log.append(entry("A", Some("B"), 0));
        log.append(entry("A", Some("B"), 0));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = FavoritesLog::new();
        log.append(entry("A", None, 0));
        log.append(entry("B", None, 1));
        log.append(entry("C", None, 2));
        let names: Vec<&str> = log.recent().map(|e| e.first.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn title_formats_single_and_pair() {
        assert_eq!(entry("A", None, 0).title(), "A");
        assert_eq!(entry("A", Some("B"), 0).title(), "A vs B");
    }
}
