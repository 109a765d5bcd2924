//! City weather TUI
//!
//! # Usage
//!
//! ```sh
//! # Start empty and type a city
//! WEATHER_API_KEY=... weather
//!
//! # Pre-fill the input and fetch right away, logging to a file
//! weather --api-key ... --city London --log-file weather.log
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use weather_core::{
    Action, AppState, HttpWeatherClient, LoggingMiddleware, WeatherConfig, WeatherFetcher,
    WeatherStore, DEFAULT_BASE_URL,
};
use weather_tui::components::WeatherScreen;
use weather_tui::{logging, WeatherRuntime};

/// Look up current weather by city name
#[derive(Parser, Debug)]
#[command(name = "weather")]
#[command(about = "Look up current weather by city name")]
struct Args {
    /// WeatherAPI.com API key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the weather API
    #[arg(long, env = "WEATHER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// City to fetch on start
    #[arg(long, short)]
    city: Option<String>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Validate before entering TUI mode so errors land on a normal terminal
    let config = match WeatherConfig::new(args.api_key, &args.base_url) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let _log_guard = match logging::init(args.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: could not set up logging: {}", e);
            std::process::exit(1);
        }
    };
    info!(endpoint = %config.endpoint(), "Starting weather TUI");

    let state = match &args.city {
        Some(city) => AppState::with_query(city.clone()),
        None => AppState::default(),
    };
    let store = WeatherStore::with_middleware(state, LoggingMiddleware::new());
    let fetcher = WeatherFetcher::new(
        Arc::new(HttpWeatherClient::new(&config)),
        config.api_key(),
    );
    let mut runtime = WeatherRuntime::new(store, fetcher);
    if let Some(city) = args.city {
        runtime.enqueue(Action::WeatherFetch(city));
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut screen = WeatherScreen::new();
    let result = runtime.run(&mut terminal, &mut screen).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exited");
    result
}
