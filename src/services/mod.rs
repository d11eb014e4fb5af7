/// Business logic services
pub mod calendar_service;

pub use calendar_service::SchoolCalendar;
