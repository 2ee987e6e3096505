// Favorites widget: saved comparisons, newest first.

use epl_app::SavedComparison;
use epl_core::Filter;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let favorites = state.dashboard.favorites();
    let title = format!("Favorites ({})", favorites.len());

    if favorites.is_empty() {
        let paragraph = Paragraph::new("  Press f to save.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_rows = (area.height as usize).saturating_sub(2).max(1);
    let items: Vec<ListItem> = favorites
        .recent()
        .take(visible_rows)
        .map(format_entry)
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn format_entry<'a>(entry: &SavedComparison) -> ListItem<'a> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", entry.saved_at.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(entry.title(), Style::default().fg(Color::White)),
    ];
    if let Some(scope) = scope_label(&entry.team_filter, &entry.position_filter) {
        spans.push(Span::styled(
            format!(" [{}]", scope),
            Style::default().fg(Color::Gray),
        ));
    }
    ListItem::new(Line::from(spans))
}

/// Filters active when the entry was saved, or `None` if both were All.
pub fn scope_label(team: &Filter, position: &Filter) -> Option<String> {
    match (team, position) {
        (Filter::All, Filter::All) => None,
        (Filter::Only(team), Filter::All) => Some(team.clone()),
        (Filter::All, Filter::Only(position)) => Some(position.clone()),
        (Filter::Only(team), Filter::Only(position)) => Some(format!("{team}/{position}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{buffer_text, loaded_state};
    use chrono::{TimeZone, Utc};
    use epl_app::Action;

    #[test]
    fn scope_label_values() {
        let arsenal = Filter::Only("Arsenal".into());
        let forward = Filter::Only("Forward".into());
        assert_eq!(scope_label(&Filter::All, &Filter::All), None);
        assert_eq!(scope_label(&arsenal, &Filter::All).as_deref(), Some("Arsenal"));
        assert_eq!(scope_label(&Filter::All, &forward).as_deref(), Some("Forward"));
        assert_eq!(
            scope_label(&arsenal, &forward).as_deref(),
            Some("Arsenal/Forward")
        );
    }

    #[test]
    fn render_empty_hint() {
        let backend = ratatui::backend::TestBackend::new(40, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Favorites (0)"));
        assert!(text.contains("Press f to save."));
    }

    #[test]
    fn render_lists_newest_first() {
        let saved_at = Utc.with_ymd_and_hms(2024, 8, 17, 15, 30, 0).unwrap();
        let mut state = loaded_state();
        state.dispatch(Action::SaveFavorite { saved_at });
        state.dispatch(Action::CycleTeamFilter);
        state.dispatch(Action::SaveFavorite { saved_at });

        let backend = ratatui::backend::TestBackend::new(50, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Favorites (2)"));
        assert!(text.contains("15:30 Bukayo Saka [Arsenal]"));
        let newest = text.find("Bukayo Saka").unwrap();
        let oldest = text.find("Erling Haaland").unwrap();
        assert!(newest < oldest);
    }
}
