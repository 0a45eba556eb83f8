//! Cancellable one-shot wake-up for the rotation engine.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use futures::future::BoxFuture;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::error::Error;

/// Work run when the timer elapses.
pub type WakeCallback = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// One pending wake-up at a time; arming again replaces the previous one.
#[async_trait]
pub trait RotationTimer: Send + Sync {
    /// Schedules `on_wake` to run at `at`, replacing any armed wake-up.
    async fn arm(&self, at: DateTime<Utc>, on_wake: WakeCallback) -> Result<(), Error>;

    /// Cancels the armed wake-up, if any.
    async fn cancel(&self) -> Result<(), Error>;
}

/// [`RotationTimer`] backed by a one-shot job on the shared cron scheduler.
pub struct CronRotationTimer {
    sched: JobScheduler,
    armed: Mutex<Option<Uuid>>,
}

impl CronRotationTimer {
    pub fn new(sched: JobScheduler) -> Self {
        Self {
            sched,
            armed: Mutex::new(None),
        }
    }

    async fn remove(&self, armed: &mut Option<Uuid>) {
        if let Some(id) = armed.take() {
            // A job that already fired has removed itself
            if let Err(e) = self.sched.remove(&id).await {
                tracing::debug!("Failed to remove rotation wake-up job {}: {:?}", id, e);
            }
        }
    }
}

#[async_trait]
impl RotationTimer for CronRotationTimer {
    async fn arm(&self, at: DateTime<Utc>, on_wake: WakeCallback) -> Result<(), Error> {
        let mut armed = self.armed.lock().await;
        self.remove(&mut armed).await;

        let delay = (at - Utc::now()).to_std().unwrap_or_default();
        let job = Job::new_one_shot_async(delay, move |_, _| on_wake())?;
        let id = self.sched.add(job).await?;
        *armed = Some(id);

        tracing::info!("Next rotation wake-up armed for {}", at);

        Ok(())
    }

    async fn cancel(&self) -> Result<(), Error> {
        let mut armed = self.armed.lock().await;
        self.remove(&mut armed).await;

        Ok(())
    }
}
