//! Scheduling for the competition engine.
//!
//! - `config` - cron expressions for the periodic jobs
//! - `jobs` - periodic leaderboard, announcement and reconciliation jobs
//! - `rotation` - the rotation orchestrator
//! - `timer` - one-shot wake-up used by the orchestrator

pub mod config;
pub mod jobs;
pub mod rotation;
pub mod timer;


use std::sync::Arc;

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::{model::app::AppState, scheduler::rotation::RotationScheduler};

use self::config::announcement as announcement_config;
use self::config::leaderboard as leaderboard_config;
use self::config::reconcile as reconcile_config;
use self::config::rotation as rotation_config;

macro_rules! add_cron_job {
    ($sched:expr, $cron:expr, $state:expr, $fn:expr, $name:expr) => {{
        let state_clone = $state.clone();

        $sched
            .add(Job::new_async($cron, move |_, _| {
                let state = state_clone.clone();

                Box::pin(async move {
                    match $fn(&state).await {
                        Ok(count) => tracing::info!("Completed {}: {} change(s)", $name, count),
                        Err(e) => tracing::error!("Error running {}: {:?}", $name, e),
                    }
                })
            })?)
            .await?;
    }};
}

/// Register the periodic jobs on `sched` and start it.
///
/// The scheduler is shared with the rotation wake-up timer, so one-shot rotation jobs armed
/// before this call start running once it returns.
pub async fn start_scheduler(
    sched: &JobScheduler,
    state: &AppState,
    rotation: &Arc<RotationScheduler>,
) -> Result<(), JobSchedulerError> {
    add_cron_job!(
        sched,
        leaderboard_config::CRON_EXPRESSION,
        state,
        jobs::refresh_leaderboards,
        "leaderboard refresh"
    );

    add_cron_job!(
        sched,
        announcement_config::CRON_EXPRESSION,
        state,
        jobs::refresh_announcements,
        "announcement reconciliation"
    );

    add_cron_job!(
        sched,
        reconcile_config::CRON_EXPRESSION,
        state,
        jobs::reconcile_competitions,
        "competition reconciliation"
    );

    let rotation_clone = rotation.clone();

    sched
        .add(Job::new_async(
            rotation_config::CRON_EXPRESSION,
            move |_, _| {
                let rotation = rotation_clone.clone();

                Box::pin(async move {
                    if rotation.run().await.is_some() {
                        tracing::debug!("Completed rotation safety pass");
                    }
                })
            },
        )?)
        .await?;

    sched.start().await?;
    Ok(())
}
