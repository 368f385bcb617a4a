//! Lesson Cleanup Task
//!
//! Background task that periodically drops lesson results whose TTL has
//! elapsed, so expired entries stop occupying cache capacity.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::service::LessonService;

/// Spawns a background task that purges expired lesson results every
/// `cleanup_interval_secs` seconds.
///
/// Returns the task handle so it can be aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(state.lessons.clone(), 30);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task(
    service: Arc<LessonService>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting lesson cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = service.purge_expired();
            if removed > 0 {
                info!("Lesson cleanup: removed {} expired results", removed);
            } else {
                debug!("Lesson cleanup: no expired results found");
            }
        }
    })
}
