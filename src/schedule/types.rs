use std::str::FromStr;

/// Cron-driven refresh cadence of the countdown
#[derive(Debug, Clone)]
pub struct TickSchedule {
    pub cron_expression: String, // Cron expression (e.g., "* * * * * *" for every second)
    schedule: cron::Schedule,
}

impl TickSchedule {
    /// Parse a six-field (or seven with year) cron expression
    pub fn parse(cron_expression: &str) -> Result<Self, cron::error::Error> {
        Ok(Self {
            cron_expression: cron_expression.to_string(),
            schedule: cron::Schedule::from_str(cron_expression)?,
        })
    }

    pub fn schedule(&self) -> &cron::Schedule {
        &self.schedule
    }
}
