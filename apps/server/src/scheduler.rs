//! Background scheduler for periodic price refreshes.
//!
//! Regenerates the simulated prices for the configured symbols on a fixed
//! hourly interval.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{interval, Duration};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Refresh interval: 1 hour (not user-configurable)
const REFRESH_INTERVAL_SECS: u64 = 60 * 60;

/// Starts the background price refresh scheduler.
///
/// The first tick fires immediately, so prices are populated as soon as the
/// server is up. The task exits when the shutdown channel flips.
pub fn start_price_refresh_scheduler(state: Arc<AppState>, mut shutdown: watch::Receiver<bool>) {
    tokio::spawn(async move {
        info!("Price refresh scheduler started (hourly interval)");

        let mut refresh_interval = interval(Duration::from_secs(REFRESH_INTERVAL_SECS));

        loop {
            tokio::select! {
                _ = refresh_interval.tick() => {
                    run_scheduled_refresh(&state);
                }
                _ = shutdown.changed() => {
                    info!("Price refresh scheduler stopping");
                    break;
                }
            }
        }
    });
}

/// Runs a single scheduled refresh.
fn run_scheduled_refresh(state: &Arc<AppState>) {
    match state.price_oracle.refresh_all() {
        Ok(()) => info!("Scheduled price refresh completed"),
        Err(e) => warn!("Scheduled price refresh failed: {}", e),
    }
}
