//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifetime
//!
//! Each fetch runs on its own tokio task and reports back with a single
//! `Action::FetchCompleted` over an mpsc channel. The adapter keeps the
//! task's `AbortHandle`: a reload aborts the previous fetch, and leaving the
//! event loop aborts whatever is still in flight. Results that still slip
//! through carry an old generation and are dropped by `update()`.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::sections::country_at;
use crate::core::selection::View;
use crate::core::state::{App, LoadState};
use crate::fetch::{CountrySource, RestCountriesSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CountryDetailState, CountryListState, DetailEvent, ListEvent, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub country_list: CountryListState,
    pub detail: CountryDetailState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            country_list: CountryListState::new(),
            detail: CountryDetailState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Handle to the fetch task currently in flight, if any.
struct FetchTask(Option<tokio::task::AbortHandle>);

impl FetchTask {
    /// Abort whatever is running and start a fetch for the app's current generation.
    fn restart(&mut self, app: &App, tx: mpsc::Sender<Action>) {
        self.abort();
        self.0 = Some(spawn_fetch(app, tx));
    }

    fn abort(&mut self) {
        if let Some(handle) = self.0.take()
            && !handle.is_finished()
        {
            debug!("Aborting in-flight fetch");
            handle.abort();
        }
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.abort();
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CountrySource> =
        Arc::new(RestCountriesSource::new(config.endpoint, config.timeout));
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut fetch = FetchTask(None);
    fetch.restart(app, tx.clone());

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            tui.country_list.set_total(app.visible_count());
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.country_list.set_total(app.visible_count());
            if let Some(action) = dispatch_event(&event, app, tui) {
                let effect = update(app, action);
                should_quit |= apply_effect(effect, app, &mut fetch, &tx);
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", DebugAction(&action));
            let effect = update(app, action);
            if apply_effect(effect, app, &mut fetch, &tx) {
                return Ok(());
            }
        }
    }

    info!("Leaving event loop");
    Ok(())
}

/// Routes one terminal event to the component that owns it. Returns the
/// core action it produced, if any.
fn dispatch_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Reload => return Some(Action::Reload),
        _ => {}
    }

    if app.view() == View::Detail {
        return match tui.detail.handle_event(event) {
            Some(DetailEvent::Back) => {
                tui.detail = CountryDetailState::new();
                Some(Action::Back)
            }
            None => None,
        };
    }

    // The error panel hides the search box and the list
    if matches!(app.load, LoadState::Failed(_)) {
        return matches!(event, TuiEvent::Escape).then_some(Action::Quit);
    }

    // Esc clears the query first, then quits
    if matches!(event, TuiEvent::Escape) {
        if tui.search_box.buffer.is_empty() {
            return Some(Action::Quit);
        }
        tui.search_box.clear();
        tui.country_list.reset();
        return Some(Action::SearchChanged(String::new()));
    }

    if let Some(ListEvent::Open(index)) = tui.country_list.handle_event(event) {
        return country_at(app.sections(), index)
            .cloned()
            .map(Action::SelectCountry);
    }

    if let Some(SearchEvent::Changed(text)) = tui.search_box.handle_event(event) {
        tui.country_list.reset();
        return Some(Action::SearchChanged(text));
    }

    None
}

/// Performs an effect. Returns true when the loop should exit.
fn apply_effect(
    effect: Effect,
    app: &App,
    fetch: &mut FetchTask,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::SpawnFetch => {
            fetch.restart(app, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    let source = app.source.clone();
    let generation = app.fetch_generation;
    info!("Spawning fetch from {} (generation {})", source.name(), generation);

    tokio::spawn(async move {
        let result = source.fetch_all().await;
        if tx
            .send(Action::FetchCompleted { generation, result })
            .is_err()
        {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    })
    .abort_handle()
}

/// Logs an action without dumping the whole country list.
struct DebugAction<'a>(&'a Action);

impl std::fmt::Debug for DebugAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::FetchCompleted {
                generation,
                result: Ok(raw),
            } => write!(f, "FetchCompleted(generation={generation}, {} countries)", raw.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
