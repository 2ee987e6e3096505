// Dashboard application state: reducer, favorites log, and roster loading.

pub mod favorites;
pub mod loader;
pub mod state;

pub use favorites::{FavoritesLog, SavedComparison};
pub use loader::{load_roster, spawn_loader};
pub use state::{Action, Chart, DashboardState, DashboardView, LoadStatus, PlayerCard};
