// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` wrapping the dashboard state. Roster loading
// pushes `Action`s over an mpsc channel, key presses are translated into
// `Action`s locally, and every action goes through the reducer. The screen
// re-renders at the configured tick (~30 fps by default).

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use epl_app::{Action, DashboardState, DashboardView};
use epl_core::StatsError;
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use input::{handle_key, Command};
use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Dashboard state plus the view derived from it.
///
/// The view is recomputed once per action rather than once per frame.
pub struct ViewState {
    pub dashboard: DashboardState,
    pub view: Result<DashboardView, StatsError>,
    /// Where the roster comes from, for the status bar.
    pub source: String,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(DashboardState::default(), String::new())
    }
}

impl ViewState {
    pub fn new(dashboard: DashboardState, source: impl Into<String>) -> Self {
        let view = dashboard.view();
        ViewState {
            dashboard,
            view,
            source: source.into(),
        }
    }

    /// Run `action` through the reducer and refresh the derived view.
    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.dashboard);
        self.dashboard = current.reduce(action);
        self.view = self.dashboard.view();
        if let Err(e) = &self.view {
            warn!("profile unavailable: {}", e);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::selectors::render(frame, layout.selectors, state);
    widgets::profile::render(frame, layout.profile, state);
    widgets::favorites::render(frame, layout.favorites, state);
    render_help_bar(frame, &layout);
}

const HELP_TEXT: &str =
    " j/k:Player 1 | J/K:Player 2 | t:Team | p:Position | c:Compare | f:Favorite | q:Quit";

fn render_help_bar(frame: &mut Frame, layout: &AppLayout) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        HELP_TEXT,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// Initializes the terminal, installs a panic hook that restores it, runs
/// the select loop over actions, keyboard input and render ticks, and
/// restores the terminal on exit, error included.
pub async fn run(
    action_rx: mpsc::Receiver<Action>,
    state: ViewState,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = event_loop(&mut terminal, action_rx, state, tick).await;

    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    mut action_rx: mpsc::Receiver<Action>,
    mut state: ViewState,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(tick);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // The loader sends once and drops its sender; stop polling after that.
    let mut actions_open = true;

    loop {
        tokio::select! {
            action = action_rx.recv(), if actions_open => {
                match action {
                    Some(action) => state.dispatch(action),
                    None => {
                        debug!("action channel closed");
                        actions_open = false;
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => match handle_key(key_event) {
                        Some(Command::Quit) => {
                            info!("quit requested");
                            break;
                        }
                        Some(Command::Dispatch(action)) => state.dispatch(action),
                        None => {}
                    },
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &state))?;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
