// Status bar widget: load status, roster source, chart mode.

use epl_app::LoadStatus;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Layout: [status dot] [status] | [source] | [mode] | [favorites]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let dashboard = &state.dashboard;
    let (dot_color, label) = status_indicator(dashboard.status());

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(dot_color)),
        Span::styled(label, Style::default().fg(Color::White)),
    ];

    if let Some(snapshot) = dashboard.snapshot() {
        spans.push(separator());
        spans.push(Span::styled(
            format!("{} players", snapshot.roster.len()),
            Style::default().fg(Color::White),
        ));
    }

    if !state.source.is_empty() {
        spans.push(separator());
        spans.push(Span::styled(
            state.source.clone(),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(separator());
    spans.push(Span::styled(
        mode_label(dashboard.comparison()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(separator());
    spans.push(Span::styled(
        format!("Favorites: {}", dashboard.favorites().len()),
        Style::default().fg(Color::White),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" | ", Style::default().fg(Color::Gray))
}

/// Dot color and text for the roster load status.
pub fn status_indicator(status: &LoadStatus) -> (Color, String) {
    match status {
        LoadStatus::Loading => (Color::Yellow, "Loading roster...".to_string()),
        LoadStatus::Ready => (Color::Green, "Ready".to_string()),
        LoadStatus::Failed(message) => (Color::Red, format!("Load failed: {message}")),
    }
}

pub fn mode_label(comparison: bool) -> &'static str {
    if comparison {
        "Compare"
    } else {
        "Profile"
    }
}
