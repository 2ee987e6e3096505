// TUI widget modules for each dashboard panel.

pub mod favorites;
pub mod profile;
pub mod selectors;
pub mod status_bar;
