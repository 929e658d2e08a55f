mod heartbeat_task;

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::store::ResultStore;

pub struct SchedulerContext {
    pub config: AppConfig,
    pub store: Arc<ResultStore>,
}

pub fn spawn_scheduler(config: AppConfig, store: Arc<ResultStore>) {
    if !config.scheduler.enabled {
        info!("Scheduler is disabled in configuration");
        return;
    }

    info!("Spawning scheduler tasks");
    let ctx = Arc::new(SchedulerContext { config, store });

    spawn_heartbeat_task(ctx);
}

fn spawn_heartbeat_task(ctx: Arc<SchedulerContext>) {
    let interval_mins = ctx.config.scheduler.heartbeat_interval_minutes;
    info!(interval_mins, "Starting heartbeat task");

    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(interval_mins * 60));
        loop {
            interval.tick().await;
            if let Err(e) = heartbeat_task::heartbeat(&ctx.store).await {
                error!(error = ?e, "Heartbeat task failed");
            }
        }
    });
}
