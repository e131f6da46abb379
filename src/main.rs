//! TGREET - Terminal Greeting Client
//!
//! A terminal client for a small greeting HTTP API. Fetches the greeting
//! of the day once at startup, then fetches personalized greetings for a
//! user-entered name, all rendered in a terminal interface.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use domain::RemoteEvent;
use infrastructure::{ApiClient, RequestDispatcher};
use presentation::{InputHandler, render_ui};

/// Terminal client for the greeting API.
#[derive(Parser, Debug)]
#[command(name = "tgreet", version)]
struct Args {
    /// Base URL of the greeting API server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,
}

/// Entry point for the tgreet terminal client.
///
/// Parses the command line, sets up the terminal interface and the
/// request dispatcher, issues the one-time greeting-of-the-day fetch,
/// and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the server URL is invalid, if terminal setup
/// fails, or if there are issues with the terminal interface during
/// runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let client = ApiClient::new(&args.server_url)?;
    let (tx, rx) = mpsc::channel();
    let dispatcher = RequestDispatcher::new(client, tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    dispatcher.spawn_hello_fetch();
    let res = run_app(&mut terminal, &mut app, &dispatcher, &rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Applies settled API requests to the application state, renders the
/// UI, and processes keyboard input. Continues running until the user
/// presses 'q' in normal mode.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
/// * `api` - Dispatcher used to issue greeting requests
/// * `events` - Channel of request settlements from worker threads
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: &RequestDispatcher,
    events: &Receiver<RemoteEvent>,
) -> io::Result<()> {
    loop {
        while let Ok(settled) = events.try_recv() {
            app.apply_remote_event(settled);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, application::AppMode::Normal) => {
                            return Ok(());
                        }
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers, api),
                    }
                }
            }
        }
    }
}
