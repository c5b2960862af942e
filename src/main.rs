mod app;
mod behavior;
mod cli;
mod clock;
mod constants;
mod dom;
mod error;
mod persistence;
mod types;
mod ui;

use app::AppState;
use clap::Parser;
use cli::Cli;
use clock::{Clock, MonotonicClock};
use constants::{FRAME_DURATION_MS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use error::{AppError, Result};
use persistence::ConfigStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use types::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate().map_err(AppError::Other)?;

    // Initialize logging if requested; the guard flushes on drop
    let _log_guard = match &cli.log_file {
        Some(log_file) => {
            let guard = init_logging(log_file)?;
            info!("=== shoal starting ===");
            info!("Log file: {}", log_file);
            Some(guard)
        }
        None => None,
    };

    // Check terminal size
    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        error!(
            "Terminal too small: {}x{} (minimum: {}x{})",
            width, height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
        );
        return Err(AppError::TerminalTooSmall);
    }
    debug!("Terminal size: {}x{}", width, height);

    // Setup terminal
    setup_terminal()?;
    debug!("Terminal setup completed");

    // Setup Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    // Run the application
    let result = run_app(cli, running).await;

    // Cleanup terminal
    cleanup_terminal()?;
    debug!("Terminal cleanup completed");

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(io::stdout(), DisableMouseCapture, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

fn init_logging(log_file: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::File::create(log_file)
        .map_err(|e| AppError::Other(format!("Failed to open log file: {}", e)))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shoal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

async fn run_app(cli: Cli, running: Arc<AtomicBool>) -> Result<()> {
    // Create backend and terminal
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Initialize app state and wire the controllers up
    let mut app = initialize_app_state(&cli)?;
    app.attach();

    let clock = MonotonicClock::new();

    // Run main event loop
    run_event_loop(&mut terminal, &mut app, running, &clock).await?;

    app.detach();
    info!("shoal shutting down");
    Ok(())
}

fn initialize_app_state(cli: &Cli) -> Result<AppState> {
    debug!("Initializing application state");

    // Initialize config store
    let store = ConfigStore::new().map_err(|e| {
        error!("Failed to initialize config store: {}", e);
        AppError::ConfigDirError(e.to_string())
    })?;

    // Load config
    let mut config = store.load_config().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });
    debug!(
        "Config loaded: policy={:?}, hide_delay_ms={}, scroll_gutter={}",
        config.navbar_policy, config.hide_delay_ms, config.scroll_gutter
    );

    // Apply CLI overrides (not persisted)
    if let Some(policy) = cli.navbar_policy() {
        config.navbar_policy = policy;
        debug!("CLI policy override applied: {:?}", policy);
    }
    if let Some(delay) = cli.hide_delay {
        config.hide_delay_ms = delay;
        debug!("CLI hide delay override applied: {}", delay);
    }

    let mut app = AppState::new(config);

    // Get terminal size and update viewport
    let (width, height) = crossterm::terminal::size()?;
    app.update_viewport_size(width, height);
    debug!(
        "Viewport initialized: {}x{}",
        app.viewport.width, app.viewport.height
    );

    Ok(app)
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    running: Arc<AtomicBool>,
    clock: &MonotonicClock,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);

    while running.load(Ordering::SeqCst) && !app.should_quit {
        let frame_start = Instant::now();

        // Drain pending input events (non-blocking); pointer movement can
        // arrive in bursts well above the frame rate
        while event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            handle_event(app, ev, clock.now_ms())?;
        }

        // Reflow, apply deferred scrolls, drive the hide timer
        app.tick(clock.now_ms());

        // Render UI
        terminal.draw(|f| {
            ui::layout::render(f, app);
        })?;

        // Sleep to maintain frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            tokio::time::sleep(frame_duration - elapsed).await;
        }
    }

    Ok(())
}

fn handle_event(app: &mut AppState, ev: Event, now_ms: u64) -> Result<()> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            ui::handle_key_event(app, key)?;
        }
        Event::Mouse(mouse) => {
            ui::handle_mouse_event(app, mouse, now_ms)?;
        }
        Event::Resize(width, height) => {
            debug!("Resize event: {}x{}", width, height);
            app.update_viewport_size(width, height);
        }
        _ => {}
    }
    Ok(())
}
