/// Refresh scheduling modules
mod manager;
mod types;
mod utils;

// Re-export public types and functions
pub use manager::start_refresh_driver;
pub use types::TickSchedule;
