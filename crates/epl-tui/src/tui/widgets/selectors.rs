// Selectors widget: active filters and the two selected players.
//
// Line 1: "Team: [Arsenal]  Position: [All]  (2 shown)"
// Line 2: "P1: Bukayo Saka (Arsenal, Forward)  P2: Declan Rice (Arsenal, Midfielder)"
// Player 2 is dimmed unless the comparison view is active.

use epl_core::{Filter, Roster};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let dashboard = &state.dashboard;
    let roster = dashboard.snapshot().map(|s| &s.roster);
    let shown = state
        .view
        .as_ref()
        .map(|view| view.visible.len())
        .unwrap_or(0);

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let filters = Line::from(vec![
        Span::styled(" Team: ", label_style),
        Span::styled(filter_label(dashboard.team_filter()), value_style),
        Span::styled("  Position: ", label_style),
        Span::styled(filter_label(dashboard.position_filter()), value_style),
        Span::styled(format!("  ({} shown)", shown), label_style),
    ]);

    let second_style = if dashboard.comparison() {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    let players = Line::from(vec![
        Span::styled(" P1: ", label_style),
        Span::styled(
            player_label(roster, dashboard.first()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  P2: ", label_style),
        Span::styled(player_label(roster, dashboard.second()), second_style),
    ]);

    let paragraph = Paragraph::new(vec![filters, players]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Selection"),
    );
    frame.render_widget(paragraph, area);
}

/// "[All]" or "[Arsenal]".
pub fn filter_label(filter: &Filter) -> String {
    format!("[{}]", filter)
}

/// "Name (Team, Position)", or "--" when nothing is selected.
pub fn player_label(roster: Option<&Roster>, name: Option<&str>) -> String {
    let Some(name) = name else {
        return "--".to_string();
    };
    match roster.and_then(|r| r.find(name)) {
        Some(player) => format!("{} ({}, {})", player.name, player.team, player.position),
        None => name.to_string(),
    }
}
