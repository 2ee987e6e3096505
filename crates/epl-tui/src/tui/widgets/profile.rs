// Profile widget: per-statistic values and percentile ranks.
//
// Single mode: Statistic, Value, Pctl, bar.
// Compare mode: the same three columns for each player; the better
// percentile on each row is bold.
// Bar color: Green >= 75, Cyan >= 50, Yellow >= 25, Red below.

use epl_app::{Chart, LoadStatus};
use epl_core::{HeadToHeadRow, StatisticSample};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::tui::ViewState;

const BAR_WIDTH: usize = 10;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let view = match &state.view {
        Ok(view) => view,
        Err(e) => {
            render_message(
                frame,
                area,
                format!("  Profile unavailable: {e}"),
                Color::Red,
            );
            return;
        }
    };

    match &view.chart {
        Chart::Empty => {
            let text = match state.dashboard.status() {
                LoadStatus::Loading => "  Loading roster...".to_string(),
                LoadStatus::Failed(message) => format!("  No roster loaded: {message}"),
                LoadStatus::Ready => "  No player selected.".to_string(),
            };
            render_message(frame, area, text, Color::DarkGray);
        }
        Chart::Single { player, samples } => {
            let title = format!(
                "Profile: {} ({}, {})",
                player.name, player.team, player.position
            );
            render_single(frame, area, title, samples);
        }
        Chart::Comparison {
            first,
            second,
            rows,
        } => {
            let title = format!("{} vs {}", first.name, second.name);
            render_comparison(frame, area, title, rows);
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: String, color: Color) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title("Profile"));
    frame.render_widget(paragraph, area);
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn render_single(frame: &mut Frame, area: Rect, title: String, samples: &[StatisticSample]) {
    let header = Row::new(vec!["Statistic", "Value", "Pctl", ""]).style(header_style());

    let rows: Vec<Row> = samples
        .iter()
        .map(|sample| {
            let mut cells = vec![Cell::from(sample.label)];
            cells.extend(sample_cells(sample, false));
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(BAR_WIDTH as u16 + 2),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn render_comparison(frame: &mut Frame, area: Rect, title: String, rows: &[HeadToHeadRow]) {
    let header = Row::new(vec!["Statistic", "P1", "Pctl", "", "P2", "Pctl", ""])
        .style(header_style());

    let rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let first_leads = row.first.percentile > row.second.percentile;
            let second_leads = row.second.percentile > row.first.percentile;
            let mut cells = vec![Cell::from(row.label)];
            cells.extend(sample_cells(&row.first, first_leads));
            cells.extend(sample_cells(&row.second, second_leads));
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(BAR_WIDTH as u16 + 2),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Length(BAR_WIDTH as u16 + 2),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

/// Value, percentile and bar cells for one sample.
fn sample_cells(sample: &StatisticSample, bold: bool) -> [Cell<'static>; 3] {
    let color = percentile_color(sample.percentile);
    let mut style = Style::default().fg(color);
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    [
        Cell::from(format_value(sample)),
        Cell::from(format!("{:>4.0}", sample.percentile)).style(style),
        Cell::from(percentile_bar(sample.percentile)).style(style),
    ]
}

/// "[#####-----]" with one cell per ten percentile points.
pub fn percentile_bar(percentile: f64) -> String {
    let filled = ((percentile / 100.0) * BAR_WIDTH as f64)
        .round()
        .clamp(0.0, BAR_WIDTH as f64) as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

pub fn percentile_color(percentile: f64) -> Color {
    if percentile >= 75.0 {
        Color::Green
    } else if percentile >= 50.0 {
        Color::Cyan
    } else if percentile >= 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Passing accuracy as a percentage, everything else as a per-match rate.
pub fn format_value(sample: &StatisticSample) -> String {
    if sample.statistic.is_fraction() {
        format!("{:.1}%", sample.raw_value)
    } else {
        format!("{:.2}", sample.raw_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{buffer_text, loaded_state};
    use epl_app::Action;
    use epl_core::{Player, Roster, StatLine, Statistic};
    use epl_data::RosterSnapshot;

    fn sample(statistic: Statistic, raw_value: f64) -> StatisticSample {
        StatisticSample {
            statistic,
            label: statistic.label(),
            raw_value,
            percentile: 50.0,
        }
    }

    #[test]
    fn percentile_bar_bounds() {
        assert_eq!(percentile_bar(0.0), "[----------]");
        assert_eq!(percentile_bar(100.0), "[##########]");
    }

    #[test]
    fn percentile_bar_rounds_to_nearest_cell() {
        assert_eq!(percentile_bar(87.5), "[#########-]");
        assert_eq!(percentile_bar(33.0), "[###-------]");
    }

    #[test]
    fn percentile_color_tiers() {
        assert_eq!(percentile_color(90.0), Color::Green);
        assert_eq!(percentile_color(75.0), Color::Green);
        assert_eq!(percentile_color(60.0), Color::Cyan);
        assert_eq!(percentile_color(25.0), Color::Yellow);
        assert_eq!(percentile_color(0.0), Color::Red);
    }

    #[test]
    fn format_value_by_statistic() {
        assert_eq!(format_value(&sample(Statistic::PassingAccuracy, 88.0)), "88.0%");
        assert_eq!(format_value(&sample(Statistic::Goals, 0.9)), "0.90");
    }

    #[test]
    fn render_loading_message() {
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Loading roster..."));
    }

    #[test]
    fn render_single_profile() {
        let backend = ratatui::backend::TestBackend::new(80, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = loaded_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Profile: Erling Haaland"));
        assert!(text.contains("Shots on Target"));
        assert!(text.contains("75.0%"));
    }

    #[test]
    fn render_comparison_title() {
        let backend = ratatui::backend::TestBackend::new(100, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = loaded_state();
        state.dispatch(Action::ToggleComparison);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Erling Haaland vs Kevin De Bruyne"));
    }

    #[test]
    fn render_malformed_roster_shows_error() {
        let mut broken = Player::new("Broken", "T", "Forward", StatLine::default());
        broken.stats.remove("tackles");
        let roster = Roster::new(vec![broken]).unwrap();
        let mut state = ViewState::default();
        state.dispatch(Action::RosterLoaded(RosterSnapshot::from_roster(roster)));

        let backend = ratatui::backend::TestBackend::new(100, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Profile unavailable"));
        assert!(text.contains("tackles"));
    }
}
