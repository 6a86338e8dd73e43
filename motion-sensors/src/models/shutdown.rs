use log::{error, info};
use std::sync::Weak;
use tokio::signal;

use motion_common::traits::MotionSource;

use crate::ports::MotionPort;
use crate::services::MotionService;

/// Stops the service on Ctrl+C, or after the optional time-to-live. Holds
/// only a weak handle so a dropped service is not kept alive.
pub(crate) fn listen_for_shutdown<C: MotionPort>(
    service: Weak<MotionService<C>>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Some(time_to_live_millis) = run_for_millis {
            tokio::time::sleep(std::time::Duration::from_millis(time_to_live_millis)).await;
        } else {
            if let Err(e) = signal::ctrl_c().await {
                error!("Error while waiting for Ctrl+C: {}", e);
                return;
            }
            info!("Ctrl+C received. Sending stop signal...");
        }
        if let Some(service) = service.upgrade() {
            service.stop();
        }
    })
}
