use std::io::Write;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::models::CountdownSnapshot;
use crate::utils::message_formatter::{build_display, render_display};

/// ANSI: clear the screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render every published snapshot to stdout until shutdown
pub async fn run_display(
    mut snapshot_rx: watch::Receiver<CountdownSnapshot>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut finished = false;

    loop {
        let snapshot = snapshot_rx.borrow_and_update().clone();

        if announce_finish(finished, &snapshot) {
            info!("Countdown reached zero at {}", snapshot.at);
        }
        finished = snapshot.is_finished();

        if let Err(e) = draw(&snapshot) {
            warn!("Failed to draw countdown: {}", e);
        }

        tokio::select! {
            changed = snapshot_rx.changed() => {
                if changed.is_err() {
                    info!("Refresh driver closed, display stopping");
                    break;
                }
            }
            _ = shutdown_rx.changed() => break,
        }
    }
}

/// True on the first snapshot that is finished
fn announce_finish(previously_finished: bool, snapshot: &CountdownSnapshot) -> bool {
    !previously_finished && snapshot.is_finished()
}

fn draw(snapshot: &CountdownSnapshot) -> std::io::Result<()> {
    let frame = render_display(&build_display(snapshot));
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}{}", CLEAR_SCREEN, frame)?;
    stdout.flush()
}
