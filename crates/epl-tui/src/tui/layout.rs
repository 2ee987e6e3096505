// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Selectors: filters and players (4 rows)           |
// +-------------------------------+------------------+
// | Profile (70%)                  | Favorites (30%)  |
// +-------------------------------+------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: load status, source, mode.
    pub status_bar: Rect,
    /// Active filters and the selected players.
    pub selectors: Rect,
    /// Profile table with percentile bars.
    pub profile: Rect,
    /// Saved comparisons, newest first.
    pub favorites: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(4), // selectors
            Constraint::Min(6),    // profile + favorites
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(vertical[2]);

    AppLayout {
        status_bar: vertical[0],
        selectors: vertical[1],
        profile: horizontal[0],
        favorites: horizontal[1],
        help_bar: vertical[3],
    }
}
