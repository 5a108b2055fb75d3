mod export;
mod help;
mod screens;
mod state;

use crate::model::{AppConfig, AppEvent, View};
use crate::orchestrator::{self, UiCommand};
use crate::recipes::CookedResponse;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use state::{key_hint, UiState};
use std::{io, time::Duration, time::Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

pub async fn run(cfg: AppConfig) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();

    // TUI runs in a dedicated thread to keep all blocking I/O out of the Tokio runtime.
    let ui_cfg = cfg.clone();
    let ui_handle = std::thread::spawn(move || run_threaded(ui_cfg, event_rx, cmd_tx));

    let res = orchestrator::run_controller(&cfg, event_tx, cmd_rx).await;

    let join_res = tokio::task::spawn_blocking(move || ui_handle.join()).await;
    if let Ok(joined) = join_res {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(anyhow::anyhow!("TUI thread panicked")),
        }
    }

    res
}

/// Run the TUI loop on a dedicated thread.
pub fn run_threaded(
    cfg: AppConfig,
    mut event_rx: UnboundedReceiver<AppEvent>,
    cmd_tx: UnboundedSender<UiCommand>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    // UiState is owned by the UI thread only; no cross-thread mutation.
    let mut state = UiState::new(&cfg);

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        while let Ok(ev) = event_rx.try_recv() {
            apply_event(&mut state, ev);
        }

        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &state)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(&mut state, k, &cmd_tx) == KeyOutcome::Quit {
                    break Ok(());
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Quit,
}

fn go_to(state: &mut UiState, target: View, cmd_tx: &UnboundedSender<UiCommand>) {
    let from = state.view();
    if from == View::Camera && target != View::Camera && state.scanning {
        let _ = cmd_tx.send(UiCommand::CancelScan);
    }
    if target == View::Camera && from != View::Camera {
        state.reset_camera();
    }
    state.show_help = false;
    state.show_notifications = false;
    state.session.navigate(target);
}

fn handle_key(
    state: &mut UiState,
    k: KeyEvent,
    cmd_tx: &UnboundedSender<UiCommand>,
) -> KeyOutcome {
    // Global keys first
    match (k.modifiers, k.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            let _ = cmd_tx.send(UiCommand::Quit);
            return KeyOutcome::Quit;
        }
        (_, KeyCode::Tab) => {
            let next = state.view().next();
            go_to(state, next, cmd_tx);
            return KeyOutcome::Continue;
        }
        (_, KeyCode::Esc) => {
            go_to(state, View::Landing, cmd_tx);
            return KeyOutcome::Continue;
        }
        (_, KeyCode::Char('?')) => {
            state.show_help = !state.show_help;
            return KeyOutcome::Continue;
        }
        (_, KeyCode::Char('N')) => {
            state.show_notifications = !state.show_notifications;
            return KeyOutcome::Continue;
        }
        (_, KeyCode::Char(c @ ('h' | 'c' | 'p' | 'r' | 'd'))) => {
            let target = match c {
                'h' => View::Landing,
                'c' => View::Camera,
                'p' => View::Preferences,
                'r' => View::Results,
                _ => View::Dashboard,
            };
            go_to(state, target, cmd_tx);
            return KeyOutcome::Continue;
        }
        _ => {}
    }

    match state.view() {
        View::Landing | View::Dashboard => {
            if k.code == KeyCode::Enter {
                go_to(state, View::Camera, cmd_tx);
            }
        }
        View::Camera => handle_camera_key(state, k.code, cmd_tx),
        View::Preferences => handle_preferences_key(state, k.code, cmd_tx),
        View::Results => handle_results_key(state, k.code, cmd_tx),
    }
    KeyOutcome::Continue
}

fn handle_camera_key(state: &mut UiState, code: KeyCode, cmd_tx: &UnboundedSender<UiCommand>) {
    match code {
        KeyCode::Char(' ') => {
            if !state.scanning && state.detected.is_empty() {
                let _ = cmd_tx.send(UiCommand::StartScan);
            }
        }
        KeyCode::Char('x') => {
            let _ = cmd_tx.send(UiCommand::CancelScan);
        }
        KeyCode::Enter => {
            if state.detected.is_empty() {
                return;
            }
            if state.recipes.is_generating() {
                let _ = cmd_tx.send(UiCommand::CancelRegenerate);
            }
            let ingredients = state.detected.clone();
            state.recipes.reset();
            let record = orchestrator::stamp_scan(&ingredients, orchestrator::now_local());
            info!(ingredients = ?record.ingredients, at = %record.time, "scan confirmed");
            state.last_scan = Some(record);
            state.session.complete_scan(ingredients);
            state.reset_camera();
            state.info = format!(
                "Recipe ready for {} ingredients",
                state.session.scanned_ingredients().len()
            );
        }
        _ => {}
    }
}

fn handle_preferences_key(
    state: &mut UiState,
    code: KeyCode,
    cmd_tx: &UnboundedSender<UiCommand>,
) {
    match code {
        KeyCode::Up => state.move_pref_category(-1),
        KeyCode::Down => state.move_pref_category(1),
        KeyCode::Left => state.move_pref_option(-1),
        KeyCode::Right => state.move_pref_option(1),
        KeyCode::Char(' ') => state.toggle_pref_under_cursor(),
        KeyCode::Char('x') => {
            state.preferences.clear();
            state.info = "Preferences cleared".into();
        }
        KeyCode::Char('s') => {
            debug!(preferences = ?state.preferences, "preferences saved");
            go_to(state, View::Landing, cmd_tx);
            state.info = "Preferences saved".into();
        }
        _ => {}
    }
}

fn handle_results_key(state: &mut UiState, code: KeyCode, cmd_tx: &UnboundedSender<UiCommand>) {
    match code {
        KeyCode::Char('g') => {
            let _ = cmd_tx.send(UiCommand::Regenerate);
        }
        KeyCode::Left | KeyCode::Right => {
            if state.recipes.is_generating() {
                return;
            }
            let pick = if code == KeyCode::Left { 0 } else { 1 };
            let target = state.recipes.alternatives().nth(pick).map(|(idx, _)| idx);
            if let Some(idx) = target {
                if let Err(e) = state.recipes.select(idx) {
                    state.info = e.to_string();
                } else {
                    state.info = format!("Showing {}", state.recipes.current().title);
                }
            }
        }
        KeyCode::Char(c @ '1'..='5') => {
            let stars = c as u8 - b'0';
            match state.recipes.rate(stars) {
                Ok(()) => state.info = format!("Rated {stars}/5"),
                Err(e) => state.info = e.to_string(),
            }
        }
        KeyCode::Char(c @ ('y' | 'm' | 'n')) => {
            let response = match c {
                'y' => CookedResponse::MadeIt,
                'm' => CookedResponse::MaybeLater,
                _ => CookedResponse::NoThanks,
            };
            state.recipes.respond_cooked(response);
            state.info = response.label().to_string();
        }
        KeyCode::Char(c @ ('e' | 'w')) => {
            let at = orchestrator::now_local();
            let res = if c == 'e' {
                export::export_recipe_json(state, at)
            } else {
                export::export_recipe_markdown(state, at)
            };
            match res {
                Ok(path) => {
                    let shown = path.display().to_string();
                    state.info = format!("Exported to {shown}");
                    state.last_exported_path = Some(shown);
                }
                Err(e) => {
                    warn!(error = %format!("{e:#}"), "recipe export failed");
                    state.info = format!("Export failed: {e:#}");
                }
            }
        }
        KeyCode::Char('Y') => match &state.last_exported_path {
            Some(path) => match export::copy_to_clipboard(path) {
                Ok(()) => state.info = "Copied export path to clipboard".into(),
                Err(e) => state.info = format!("Clipboard error: {e:#}"),
            },
            None => state.info = "Nothing exported yet (press e or w)".into(),
        },
        _ => {}
    }
}

fn apply_event(state: &mut UiState, ev: AppEvent) {
    match ev {
        AppEvent::ScanStarted => {
            state.scanning = true;
            state.scan_progress = 0;
            state.detected.clear();
            state.info = "Scanning ingredients...".into();
        }
        AppEvent::ScanProgress { percent } => {
            state.scan_progress = percent;
        }
        AppEvent::ScanCompleted { ingredients } => {
            state.scanning = false;
            state.scan_progress = 100;
            state.info = format!("Detected {} ingredients", ingredients.len());
            state.detected = ingredients;
        }
        AppEvent::ScanFailed { reason } => {
            state.scanning = false;
            state.scan_progress = 0;
            state.info = reason;
        }
        AppEvent::Generating => {
            state.recipes.begin_regenerate();
            state.info = "Generating a different recipe...".into();
        }
        AppEvent::RecipeReady => {
            // A new scan resets the cycle; a timer from before it no longer applies.
            if !state.recipes.is_generating() {
                debug!("ignoring stale recipe-ready event");
                return;
            }
            state.recipes.finish_regenerate();
            state.info = format!("New recipe: {}", state.recipes.current().title);
        }
        AppEvent::Info(info) => {
            state.info = info.to_message();
        }
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    let title = format!(
        "PantryPal · {} · 🔥 {} day streak · 🔔 {} new",
        state.profile.name,
        state.profile.streak,
        state.unread_notifications()
    );
    let tabs = Tabs::new(View::ALL.iter().map(|v| Line::from(v.title())).collect::<Vec<_>>())
        .select(state.view().index())
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    if state.show_help {
        help::draw_help(chunks[1], f);
    } else if state.show_notifications {
        screens::draw_notifications(chunks[1], f, state);
    } else {
        match state.view() {
            View::Landing => screens::draw_landing(chunks[1], f, state),
            View::Camera => screens::draw_camera(chunks[1], f, state),
            View::Preferences => screens::draw_preferences(chunks[1], f, state),
            View::Results => screens::draw_results(chunks[1], f, state),
            View::Dashboard => screens::draw_dashboard(chunks[1], f, state),
        }
    }

    let mut spans = Vec::new();
    spans.extend(key_hint("tab", "next"));
    spans.extend(key_hint("?", "help"));
    spans.extend(key_hint("q", "quit"));
    if !state.info.is_empty() {
        spans.push(ratatui::text::Span::styled(
            format!("| {}", state.info),
            Style::default().fg(Color::Gray),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}
