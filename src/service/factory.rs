use chrono::Utc;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;
use sea_orm::TransactionTrait;

use crate::{
    data::{
        competition::{CompetitionRepository, NewCompetition},
        metric::MetricRepository,
    },
    error::Error,
    model::{app::AppState, wom::CreateCompetitionRequest},
    service::{
        announcement::EmbedReconciler, catalog::MetricCatalog, render,
        rotation::{advance_boss_rotation, BossChunk, MetricRotationSelector},
    },
    util::time::CompetitionWindow,
};

pub struct CompetitionFactory<'a> {
    state: &'a AppState,
}

impl<'a> CompetitionFactory<'a> {
    /// Creates a new instance of [`CompetitionFactory`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Registers a competition on `metric` with Wise Old Man, stores it locally and posts its
    /// announcement.
    ///
    /// # Logic
    /// 1. Validate the metric against the catalog for the track's kind
    /// 2. For BOTW, read the boss chunk for the vote menu; SOTW records rotation index 0
    /// 3. Create the competition on Wise Old Man, which assigns its id and verification secret
    /// 4. In one transaction, persist the competition, advance the boss rotation and update the
    ///    metric's last selection time
    /// 5. Post the initial announcement; a failure here is logged and picked up by the next
    ///    announcement reconciliation
    ///
    /// Everything that can fail locally is checked before step 3, so a rejected request never
    /// leaves a competition on Wise Old Man without a local row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored competition
    /// - `Err(CompetitionError::UnknownMetric)` - Metric not valid for the track
    /// - `Err(Error::ParseError)` - Stored boss rotation index is not a number
    /// - `Err(Error::WomError)` - Wise Old Man rejected or failed the request
    pub async fn create(
        &self,
        track: Track,
        metric: &str,
        window: CompetitionWindow,
    ) -> Result<entity::competition::Model, Error> {
        MetricCatalog::new(&self.state.db)
            .require(track, metric)
            .await?;

        let boss_chunk = match track {
            Track::Sotw => None,
            Track::Botw => Some(
                MetricRotationSelector::new(&self.state.db)
                    .next_boss_chunk()
                    .await?,
            ),
        };

        let title = render::competition_title(track, metric);
        let request = CreateCompetitionRequest {
            title: title.clone(),
            metric: metric.to_string(),
            starts_at: window.starts_at,
            ends_at: window.ends_at,
            group_id: self.state.wom_group.id,
            group_verification_code: self.state.wom_group.verification_code.clone(),
        };
        let created = self.state.tracker.create_competition(&request).await?;
        let competition_id = created.competition.id;

        let new_competition = NewCompetition {
            id: competition_id,
            title,
            metric: metric.to_string(),
            track,
            starts_at: window.starts_at,
            ends_at: window.ends_at,
            verification_secret: created.verification_code,
            rotation_index: boss_chunk.as_ref().map_or(0, |chunk| chunk.index),
        };
        let competition = match self.store(new_competition, boss_chunk.as_ref()).await {
            Ok(competition) => competition,
            Err(e) => {
                tracing::error!(
                    "Competition {} exists on Wise Old Man but could not be stored: {:?}",
                    competition_id,
                    e
                );
                return Err(e);
            }
        };

        tracing::info!(
            "Created {} competition {} on {} ({} to {})",
            track.label(),
            competition.id,
            metric,
            window.starts_at,
            window.ends_at
        );

        if let Err(e) = EmbedReconciler::new(self.state)
            .ensure_competition(&competition, true)
            .await
        {
            tracing::error!(
                "Failed to post announcement for competition {}: {:?}",
                competition.id,
                e
            );
        }

        let stored = CompetitionRepository::new(&self.state.db)
            .find_by_id(competition.id)
            .await?;

        Ok(stored.unwrap_or(competition))
    }

    async fn store(
        &self,
        competition: NewCompetition,
        boss_chunk: Option<&BossChunk>,
    ) -> Result<entity::competition::Model, Error> {
        let txn = self.state.db.begin().await?;

        let metric = competition.metric.clone();
        let stored = CompetitionRepository::new(&txn).create(competition).await?;
        if let Some(chunk) = boss_chunk {
            advance_boss_rotation(&txn, chunk).await?;
        }
        MetricRepository::new(&txn)
            .update_last_selected(&metric, Utc::now())
            .await?;

        txn.commit().await?;

        Ok(stored)
    }
}
