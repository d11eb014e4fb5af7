mod constants;
mod handlers;
mod models;
mod schedule;
mod services;
mod utils;

use chrono_tz::Tz;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use crate::{
    constants::{DEFAULT_TICK_CRON, DEFAULT_TIMEZONE, LOG_DIRECTIVE},
    handlers::run_display,
    models::CalendarConfig,
    schedule::{TickSchedule, start_refresh_driver},
    services::SchoolCalendar,
    utils::timezone::parse_timezone,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build the school calendar from the constant table
    let calendar = match CalendarConfig::from_constants(config.timezone) {
        Ok(calendar) => Arc::new(SchoolCalendar::new(calendar)),
        Err(e) => {
            error!("Failed to build school calendar: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_countdown(calendar, config.tick).await {
        error!("Countdown error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    timezone: Tz,
    tick: TickSchedule,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    // Optional: calendar timezone, defaults to the school's own zone
    let timezone_name =
        std::env::var("COUNTDOWN_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
    let timezone = parse_timezone(&timezone_name)?;

    // Optional: refresh cadence, defaults to every second
    let tick_cron =
        std::env::var("COUNTDOWN_TICK_CRON").unwrap_or_else(|_| DEFAULT_TICK_CRON.to_string());
    let tick = TickSchedule::parse(&tick_cron)
        .map_err(|e| format!("COUNTDOWN_TICK_CRON '{}' is not a valid cron expression: {}", tick_cron, e))?;

    info!("Using timezone {} with tick cron '{}'", timezone, tick.cron_expression);

    Ok(Config { timezone, tick })
}

/// Run the refresh driver and the display until Ctrl-C
async fn run_countdown(
    calendar: Arc<SchoolCalendar>,
    tick: TickSchedule,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Counting down to {}", calendar.config().end);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let (snapshot_rx, driver) = start_refresh_driver(calendar, tick, shutdown_rx.clone());
    let display = tokio::spawn(run_display(snapshot_rx, shutdown_rx));

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received, stopping countdown...");

    // Receivers may already be gone if a task exited early
    let _ = shutdown_tx.send(true);

    driver.await?;
    display.await?;

    info!("Countdown stopped");
    Ok(())
}
