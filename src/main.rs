// Composition root: CLI -> config -> TUI model -> terminal loop

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{debug, error, info};

use gpagrip::cli::CliArgs;
use gpagrip::config::Config;
use gpagrip::tui::{TuiModel, TuiSettings, TuiUpdate, TuiView};

fn main() -> Result<()> {
    // Logs go to stderr so they never draw over the TUI; redirect with 2>file
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting GpaGrip");

    let cli_args = CliArgs::parse();
    let config = Config::from_cli_and_file(cli_args, None)?;
    info!(
        allow_custom_credits = config.credits.allow_custom,
        ungraded = ?config.aggregation.ungraded,
        "Loaded config"
    );

    let mut model = TuiModel::with_settings(TuiSettings::from(&config));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut model, &mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Application error: {:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    let aggregates = model.aggregates();
    info!(
        courses = model.roster.len(),
        total_credits = aggregates.total_credits,
        gpa = aggregates.gpa,
        "GpaGrip shut down cleanly"
    );
    Ok(())
}

/// Main loop: draw, wait for a key, update
fn run<B: Backend>(model: &mut TuiModel, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        terminal.draw(|frame| TuiView::render(model, frame))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            model.clear_errors();

            match TuiUpdate::handle_key(model, key.code, key.modifiers) {
                Ok(message) => {
                    debug!(?message, "Handled key {:?}", key.code);
                    TuiUpdate::dispatch(model, message);
                }
                Err(err) => {
                    error!("Failed to handle key {:?}: {:#}", key.code, err);
                    model.add_error(format!("{:#}", err));
                }
            }
        }

        if model.should_quit {
            info!("Quit requested, exiting main loop");
            break;
        }
    }
    Ok(())
}
