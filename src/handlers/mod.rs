/// Handler modules for presenting the countdown
mod display;

// Re-export main handler functions
pub use display::run_display;
