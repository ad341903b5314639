use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, sync::atomic::Ordering, time::Duration};

mod app;
mod handlers;
mod services;
mod ui;

use app::App;
use filetui::config::Config;
use filetui::prefs::PrefStore;
use filetui::utils::{log_debug, DEBUG_MODE};

/// TUI console for a self-hosted file server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server base URL, overriding the config file
    #[arg(short, long)]
    server: Option<String>,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config = Config::load(args.config.as_deref(), args.server)?;
    let prefs = PrefStore::load(&config.prefs_namespace);

    let mut app = App::new(config, prefs)?;
    app.start_bootstrap();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.should_quit {
            break;
        }

        // Process gateway responses (non-blocking)
        app.drain_gateway_responses();
        app.tick();

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release events on terminals that report them
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}
