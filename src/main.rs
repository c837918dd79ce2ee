//! Voice Demo TUI - Terminal front end for requesting outbound AI phone calls
//!
//! A Ratatui-based TUI that collects a name and phone number, then asks the
//! Bland voice API to place a demo call.

mod app;
mod config;
mod state;
mod ui;
mod vendor;

use anyhow::Result;
use app::App;
use config::{CallerSettings, TuiConfig, API_KEY_ENV};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voice_demo_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config file: {err}");
        TuiConfig::default()
    });
    let settings = CallerSettings::from_env(config);
    if !settings.has_api_key() {
        tracing::warn!("{API_KEY_ENV} is not set; call requests will be rejected");
    }

    // Create app before touching the terminal so setup errors print cleanly
    let mut app = App::new(settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();
        app.poll_submission().await;

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a call is in flight keeps the spinner moving
        let poll_duration = if app.state.submission.is_submitting() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key).await?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
