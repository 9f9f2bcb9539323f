use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use tuneflow::catalog::LocalCatalog;
use tuneflow::cli::Args;
use tuneflow::config::{find_config_file, load_config, Config};
use tuneflow::controller::{AppController, ControllerSettings};
use tuneflow::logging;
use tuneflow::lyrics::{StaticLyrics, DEFAULT_LYRICS};
use tuneflow::model::AppModel;
use tuneflow::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match find_config_file(args.config.as_deref()) {
        Some(path) => Some(
            load_config(&path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };
    let config = Config::resolve(file_config, &args);

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== TuneFlow Starting ===");
    tracing::debug!(?config, "Configuration resolved");

    let catalog = match &config.catalog {
        Some(path) => LocalCatalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => LocalCatalog::builtin(),
    }
    .with_latency(config.search_latency);
    let lyrics = StaticLyrics::new(DEFAULT_LYRICS, config.lyrics_delay);

    let model = Arc::new(Mutex::new(AppModel::new(Arc::new(catalog), config.preferences())));
    let controller = AppController::new(
        model.clone(),
        Arc::new(lyrics),
        ControllerSettings::from(&config),
    );

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
        return Err(err);
    }

    tracing::info!("TuneFlow shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> Result<()> {
    loop {
        let (snapshot, should_quit) = {
            let model_guard = model.lock().await;

            model_guard.auto_clear_old_banners().await;

            (model_guard.snapshot().await, model_guard.should_quit().await)
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &snapshot);
        })?;

        // Short poll so background results show up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
