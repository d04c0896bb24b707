//! Terminal UI for prompt-studio.
//!
//! The interactive screen launched by `studio` (or `studio tui`). The event
//! loop runs on the single-threaded runtime using [`tokio::select!`] over a
//! redraw tick, crossterm's async [`EventStream`], and a channel carrying the
//! outcome of the one in-flight generation request.

mod app;
mod ui;

pub use app::{Action, App};
pub use ui::draw;

use std::io;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::catalog::Catalog;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::constants::TICK_DURATION;
use crate::proxy::{self, GenerationError, ProxyClient};
use crate::store::{FileStore, PromptStore};
use crate::studio::{Studio, StudioDefaults};

type Outcome = Result<String, GenerationError>;

/// Launches the TUI event loop.
///
/// Enters raw mode and the alternate screen, runs until Ctrl+C, and
/// restores the terminal even when the loop fails.
pub async fn run_tui(config: Config) -> Result<()> {
    let catalog = Catalog::builtin();
    let defaults = StudioDefaults::from_config(&config, &catalog)?;
    let store = FileStore::open_default()?;
    let client = ProxyClient::from_config(&config);
    tracing::info!(endpoint = client.endpoint(), "starting studio");

    let mut app = App::new(Studio::new(&catalog, store, &defaults));

    // --- Terminal setup ---
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &client).await;

    // --- Terminal teardown ---
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

async fn event_loop<S: PromptStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_, S>,
    client: &ProxyClient,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = interval(TICK_DURATION);
    let mut clipboard = SystemClipboard::new();

    // At most one request is in flight, so one slot is enough.
    let (tx, mut rx) = mpsc::channel::<Outcome>(1);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                app.tick_spinner();
                terminal.draw(|f| draw(f, &*app))?;
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match app.handle_key(key) {
                            Action::Quit => break,
                            Action::Generate(request) => {
                                let client = client.clone();
                                let tx = tx.clone();
                                tokio::spawn(async move {
                                    let outcome = proxy::generate(&client, &request).await;
                                    let _ = tx.send(outcome).await;
                                });
                            }
                            Action::Copy(index) => app.copy(index, &mut clipboard),
                            Action::Continue => {}
                        }
                    }
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        break;
                    }
                    None => break,
                    _ => {} // ignore mouse / resize / key release
                }
            }
            Some(outcome) = rx.recv() => {
                app.studio.finish_submit(outcome);
            }
        }
    }

    Ok(())
}
