// ABOUTME: Main entry point for the signup wizard with TUI and CLI support
//
// Binary: signup
// Usage: signup [COMMAND]
// - No command: launches the interactive wizard
// - summary: print the order summary for a selection
// - steps: print per-step wizard state
// - config: print or write the effective configuration

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::Duration,
};

use signup_wizard::app::{App, EventHandler};
use signup_wizard::cli::{self, Commands};
use signup_wizard::components::LayoutComponent;
use signup_wizard::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();
    let config = cli::load_config(args.config.as_deref())?;

    let result = match args.command {
        Some(Commands::Summary(summary_args)) => {
            cli::summary::execute(&summary_args, &config, args.format)
        }
        Some(Commands::Steps) => cli::steps::execute(&config, args.format),
        Some(Commands::Config(config_args)) => cli::config::execute(&config_args, &config),

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => run_tui(config),
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(config: AppConfig) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. The wizard requires a terminal.\n\
             Use `signup summary` or `signup steps` for non-interactive output."
        ));
    }

    let mut app = App::new(config);
    let mut layout = LayoutComponent::new();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(&mut app, &mut layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop<B: Backend>(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<B>,
) -> Result<()> {
    let poll_interval = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        if event::poll(poll_interval)? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports both press and release
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        if app.state.should_quit {
            tracing::info!(confirmed = app.state.wizard.is_confirmed(), "Exiting signup wizard");
            break;
        }
    }

    Ok(())
}

/// Library and binary targets both log at info unless `RUST_LOG` says otherwise
const DEFAULT_LOG_FILTER: &str = "signup_wizard=info,signup=info";

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::get_user_config_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| PathBuf::from(".signup-wizard/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "signup-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; without a writable file the wizard runs silently
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
