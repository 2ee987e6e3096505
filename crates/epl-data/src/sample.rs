// Built-in sample roster, for offline use and demos.

use epl_core::{Player, Roster, StatLine};

#[allow(clippy::too_many_arguments)]
fn player(
    name: &str,
    team: &str,
    position: &str,
    goals: f64,
    assists: f64,
    passing_accuracy: f64,
    tackles: f64,
    interceptions: f64,
    dribbles: f64,
    shots_on_target: f64,
) -> Player {
    Player::new(
        name,
        team,
        position,
        StatLine {
            goals,
            assists,
            passing_accuracy,
            tackles,
            interceptions,
            dribbles,
            shots_on_target,
        },
    )
}

/// Eight Premier League regulars with per-match style rates.
pub fn sample_players() -> Vec<Player> {
    vec![
        player("Erling Haaland", "Manchester City", "Forward", 0.9, 0.2, 0.75, 0.1, 0.1, 0.8, 0.7),
        player("Kevin De Bruyne", "Manchester City", "Midfielder", 0.3, 0.8, 0.85, 0.3, 0.4, 0.7, 0.5),
        player("Mohamed Salah", "Liverpool", "Forward", 0.7, 0.4, 0.78, 0.2, 0.2, 0.9, 0.6),
        player("Bukayo Saka", "Arsenal", "Forward", 0.5, 0.6, 0.82, 0.4, 0.3, 0.8, 0.6),
        player("Declan Rice", "Arsenal", "Midfielder", 0.2, 0.3, 0.88, 0.9, 0.8, 0.5, 0.3),
        player("Virgil van Dijk", "Liverpool", "Defender", 0.1, 0.2, 0.89, 0.7, 0.8, 0.3, 0.2),
        player("Bruno Fernandes", "Manchester United", "Midfielder", 0.4, 0.7, 0.83, 0.5, 0.6, 0.6, 0.5),
        player("Son Heung-min", "Tottenham", "Forward", 0.6, 0.5, 0.81, 0.3, 0.3, 0.8, 0.7),
    ]
}

pub fn sample_roster() -> Roster {
    // Names above are distinct, so construction cannot fail.
    Roster::new(sample_players()).unwrap_or_else(|e| unreachable!("sample roster is invalid: {e}"))
}
