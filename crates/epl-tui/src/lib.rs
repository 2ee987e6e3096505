// Terminal dashboard for comparing Premier League player profiles.

pub mod tui;
