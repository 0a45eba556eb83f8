//! Competition rotation orchestrator.
//!
//! One pass walks both tracks independently: ended competitions get their final results
//! posted, and a track without a scheduled or active competition gets a new one on the next
//! metric (queue first, then the vote of the last competition, then a random pick). After both
//! tracks, a single wake-up is armed at the earliest end of any current competition.

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::{
    data::{competition::CompetitionRepository, queue::QueueRepository},
    error::{competition::CompetitionErrorKind, Error},
    model::app::AppState,
    scheduler::{
        config::rotation::WAKE_GRACE,
        timer::{RotationTimer, WakeCallback},
    },
    service::{
        factory::CompetitionFactory, leaderboard::LeaderboardSync,
        rotation::MetricRotationSelector, vote::VoteTally,
    },
    util::time::default_window,
};

/// Where the metric of a new competition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSource {
    Queue,
    Vote,
    Random,
}

/// Decision taken for one track during a rotation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// A scheduled or active competition exists; nothing was created
    Waiting {
        competition_id: i64,
        ends_at: DateTime<Utc>,
    },
    /// A new competition was created
    Created {
        competition_id: i64,
        metric: String,
        source: MetricSource,
    },
}

/// Result of a completed rotation pass.
#[derive(Debug)]
pub struct RotationReport {
    pub outcomes: Vec<(Track, Result<TrackOutcome, Error>)>,
    /// Instant the timer was armed for, `None` when no competition is current
    pub next_wake: Option<DateTime<Utc>>,
}

impl RotationReport {
    pub fn outcome(&self, track: Track) -> Option<&Result<TrackOutcome, Error>> {
        self.outcomes
            .iter()
            .find(|(t, _)| *t == track)
            .map(|(_, outcome)| outcome)
    }
}

pub struct RotationScheduler {
    state: AppState,
    timer: Arc<dyn RotationTimer>,
    /// Doubles as the single-flight guard: a pass holds it for its whole duration
    rng: Mutex<StdRng>,
}

impl RotationScheduler {
    pub fn new(state: AppState, timer: Arc<dyn RotationTimer>) -> Self {
        Self::with_rng(state, timer, StdRng::from_os_rng())
    }

    /// Scheduler drawing every random choice from `rng`.
    pub fn with_rng(state: AppState, timer: Arc<dyn RotationTimer>, rng: StdRng) -> Self {
        Self {
            state,
            timer,
            rng: Mutex::new(rng),
        }
    }

    /// Runs a rotation pass at the current time.
    ///
    /// Returns `None` without doing anything when another pass is already in flight.
    pub async fn run(self: &Arc<Self>) -> Option<RotationReport> {
        self.run_at(Utc::now()).await
    }

    /// Runs a rotation pass as of `now`.
    ///
    /// Failures are isolated per track: a track that fails is logged and retried by the next
    /// externally triggered pass, while the other track proceeds.
    pub async fn run_at(self: &Arc<Self>, now: DateTime<Utc>) -> Option<RotationReport> {
        let Ok(mut rng) = self.rng.try_lock() else {
            tracing::info!("Rotation pass already in progress, skipping");
            return None;
        };

        let mut outcomes = Vec::with_capacity(Track::ALL.len());
        for track in Track::ALL {
            let result = self.process_track(track, now, &mut *rng).await;

            match &result {
                Ok(TrackOutcome::Waiting {
                    competition_id,
                    ends_at,
                }) => tracing::debug!(
                    "{} competition {} is current until {}",
                    track.label(),
                    competition_id,
                    ends_at
                ),
                Ok(TrackOutcome::Created {
                    competition_id,
                    metric,
                    source,
                }) => tracing::info!(
                    "Rotated {} to competition {} on {} ({:?})",
                    track.label(),
                    competition_id,
                    metric,
                    source
                ),
                Err(e) => tracing::error!("Failed to rotate {}: {:?}", track.label(), e),
            }

            outcomes.push((track, result));
        }

        let next_wake = match self.reschedule(now).await {
            Ok(next_wake) => next_wake,
            Err(e) => {
                tracing::error!("Failed to arm rotation wake-up: {:?}", e);
                None
            }
        };

        Some(RotationReport {
            outcomes,
            next_wake,
        })
    }

    async fn process_track<R: Rng + ?Sized>(
        &self,
        track: Track,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<TrackOutcome, Error> {
        let competition_repo = CompetitionRepository::new(&self.state.db);

        self.close_out(track, now).await?;

        let current = competition_repo.find_current(track, now).await?;
        if let Some(competition) = current.first() {
            return Ok(TrackOutcome::Waiting {
                competition_id: competition.id,
                ends_at: competition.ends_at.and_utc(),
            });
        }

        let (metric, source) = self.choose_metric(track, now, rng).await?;
        let window = default_window(now)?;

        let queue_repo = QueueRepository::new(&self.state.db);
        match CompetitionFactory::new(&self.state)
            .create(track, &metric, window)
            .await
        {
            Ok(competition) => {
                if source == MetricSource::Queue {
                    queue_repo.remove(&metric).await?;
                }

                Ok(TrackOutcome::Created {
                    competition_id: competition.id,
                    metric,
                    source,
                })
            }
            Err(Error::CompetitionError(e))
                if source == MetricSource::Queue && e.kind() == CompetitionErrorKind::Validation =>
            {
                // Left in place it would block the queue forever
                tracing::warn!(
                    "Dropping queued {} metric {}: {}",
                    track.label(),
                    metric,
                    e
                );
                queue_repo.remove(&metric).await?;
                Err(e.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Posts final results for every ended competition of the track not yet closed out.
    ///
    /// A failed post is logged and retried on the next pass without blocking rotation.
    async fn close_out(&self, track: Track, now: DateTime<Utc>) -> Result<(), Error> {
        let pending = CompetitionRepository::new(&self.state.db)
            .find_ended_pending_results(track, now)
            .await?;

        let leaderboard = LeaderboardSync::new(&self.state);
        for competition in pending {
            if let Err(e) = leaderboard.post_final_results(&competition).await {
                tracing::error!(
                    "Failed to post final results for competition {}: {:?}",
                    competition.id,
                    e
                );
            }
        }

        Ok(())
    }

    async fn choose_metric<R: Rng + ?Sized>(
        &self,
        track: Track,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(String, MetricSource), Error> {
        if let Some(entry) = QueueRepository::new(&self.state.db).peek(track).await? {
            return Ok((entry.metric, MetricSource::Queue));
        }

        let latest = CompetitionRepository::new(&self.state.db)
            .find_latest_ended(track, now)
            .await?;
        if let Some(latest) = latest {
            if let Some(winner) = VoteTally::new(&self.state.db).tally(latest.id, rng).await? {
                return Ok((winner, MetricSource::Vote));
            }
        }

        let metric = MetricRotationSelector::new(&self.state.db)
            .pick_random(track.metric_kind(), now, rng)
            .await?;

        Ok((metric, MetricSource::Random))
    }

    /// Replaces the armed wake-up with one at the earliest end of any current competition.
    async fn reschedule(self: &Arc<Self>, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>, Error> {
        self.timer.cancel().await?;

        let next_end = CompetitionRepository::new(&self.state.db)
            .earliest_current_end(now)
            .await?;

        let Some(ends_at) = next_end else {
            tracing::info!("No current competitions, rotation wake-up not armed");
            return Ok(None);
        };

        let at = ends_at + WAKE_GRACE;
        self.timer
            .arm(at, wake_callback(Arc::downgrade(self)))
            .await?;

        Ok(Some(at))
    }
}

/// Callback running a rotation pass, as long as the scheduler is still alive.
fn wake_callback(scheduler: Weak<RotationScheduler>) -> WakeCallback {
    Arc::new(move || {
        let scheduler = scheduler.clone();
        Box::pin(async move {
            if let Some(scheduler) = scheduler.upgrade() {
                scheduler.run().await;
            }
        })
    })
}
