use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, warn};

use super::TickSchedule;
use super::utils::next_tick_delay;
use crate::models::CountdownSnapshot;
use crate::services::SchoolCalendar;

/// Wait used when the tick schedule has no upcoming fire time
const FALLBACK_TICK: Duration = Duration::from_secs(1);

/// Start the refresh driver that recomputes the countdown on every tick
///
/// The first snapshot is computed before this returns, so receivers always
/// hold a value. The task stops when `shutdown_rx` changes or closes, or when
/// every snapshot receiver is dropped.
pub fn start_refresh_driver(
    calendar: Arc<SchoolCalendar>,
    tick: TickSchedule,
    mut shutdown_rx: watch::Receiver<bool>,
) -> (watch::Receiver<CountdownSnapshot>, JoinHandle<()>) {
    let (snapshot_tx, snapshot_rx) = watch::channel(calendar.snapshot(calendar.now()));

    let handle = tokio::spawn(async move {
        info!("Refresh driver started (cron: '{}')", tick.cron_expression);

        loop {
            let wait_duration = next_tick_delay(tick.schedule(), &calendar.now()).unwrap_or_else(|| {
                warn!(
                    "No upcoming tick for cron '{}', retrying in {:?}",
                    tick.cron_expression, FALLBACK_TICK
                );
                FALLBACK_TICK
            });

            // Wait for the next tick OR a shutdown signal
            tokio::select! {
                _ = sleep(wait_duration) => {
                    let snapshot = calendar.snapshot(calendar.now());
                    debug!(
                        "Tick at {}: {} ms, {} day(s), in session: {}",
                        snapshot.at, snapshot.remaining_ms, snapshot.remaining_days, snapshot.in_session
                    );

                    if snapshot_tx.send(snapshot).is_err() {
                        info!("No display is listening anymore");
                        break;
                    }
                }
                _ = shutdown_rx.changed() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        info!("Refresh driver stopped");
    });

    (snapshot_rx, handle)
}
