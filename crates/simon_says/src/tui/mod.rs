//! Terminal UI for Simon Says.

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use input::{Action, action_for};
pub use view::TerminalView;

use crate::GameConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, instrument, warn};

/// Redraw and clock cadence.
const TICK: Duration = Duration::from_millis(16);

/// How long the key reader waits before checking for shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Runs the game in the terminal until the user quits.
pub async fn run_tui(config: GameConfig, level: Option<i64>, seed: Option<u64>) -> Result<()> {
    // Logs go to a file so they do not tear the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?level, ?seed, "Starting Simon Says TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let reader = spawn_key_reader(key_tx);

    let mut app = App::new(&config, level, seed);
    let res = run_app(&mut terminal, &mut app, &mut key_rx).await;

    drop(key_rx);
    if let Err(e) = reader.await {
        warn!(error = %e, "Key reader did not shut down cleanly");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Simon Says TUI exited");
    Ok(())
}

/// Reads keys on a blocking thread and forwards them to the game loop.
///
/// Stops once the receiver is dropped or the terminal stops yielding events.
fn spawn_key_reader(tx: mpsc::UnboundedSender<KeyEvent>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
    })
}

/// Draws, waits for a key or the next tick, then moves the game clock.
#[instrument(skip_all)]
async fn run_app<W: Write>(
    terminal: &mut Terminal<CrosstermBackend<W>>,
    app: &mut App,
    key_rx: &mut mpsc::UnboundedReceiver<KeyEvent>,
) -> Result<()> {
    let clock = Instant::now();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            key = key_rx.recv() => match key {
                Some(key) => app.handle_key(key),
                None => {
                    warn!("Key reader stopped");
                    return Ok(());
                }
            },
            _ = ticker.tick() => {}
        }

        app.tick(clock.elapsed())?;

        let chimes = app.take_chimes();
        if chimes > 0 {
            let backend = terminal.backend_mut();
            backend.write_all(&b"\x07".repeat(chimes))?;
            backend.flush()?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
