use dioxus_logger::tracing;
use sea_orm::TransactionTrait;

use crate::{
    data::{
        competition::{CompetitionDetailsUpdate, CompetitionRepository},
        vote::VoteRepository,
        winner::WinnerRepository,
    },
    error::{wom::WomError, Error},
    model::{app::AppState, wom::CompetitionDetails},
};

/// Counts from one reconciliation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub checked: usize,
    pub updated: usize,
    pub deleted: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReconcileAction {
    Unchanged,
    Updated,
    Deleted,
}

/// Aligns locally cached competitions with Wise Old Man, which is authoritative.
pub struct CompetitionReconciler<'a> {
    state: &'a AppState,
}

impl<'a> CompetitionReconciler<'a> {
    /// Creates a new instance of [`CompetitionReconciler`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Checks every local competition against Wise Old Man.
    ///
    /// # Logic
    /// - Not found upstream: the competition, its votes and its winner are deleted locally
    /// - Title, metric or window differ: local copy is overwritten
    /// - Any other error: logged and counted as failed, the pass continues
    pub async fn reconcile_all(&self) -> Result<ReconcileSummary, Error> {
        let competitions = CompetitionRepository::new(&self.state.db).get_all().await?;

        let mut summary = ReconcileSummary::default();
        for competition in competitions {
            summary.checked += 1;

            match self.reconcile(&competition).await {
                Ok(ReconcileAction::Unchanged) => {}
                Ok(ReconcileAction::Updated) => summary.updated += 1,
                Ok(ReconcileAction::Deleted) => summary.deleted += 1,
                Err(e) => {
                    summary.failed += 1;
                    tracing::error!("Failed to reconcile competition {}: {:?}", competition.id, e);
                }
            }
        }

        Ok(summary)
    }

    async fn reconcile(
        &self,
        competition: &entity::competition::Model,
    ) -> Result<ReconcileAction, Error> {
        let details = match self
            .state
            .tracker
            .get_competition_details(competition.id)
            .await
        {
            Ok(details) => details,
            Err(WomError::NotFound(_)) => {
                self.delete_local(competition).await?;
                return Ok(ReconcileAction::Deleted);
            }
            Err(e) => return Err(e.into()),
        };

        if !differs(competition, &details) {
            return Ok(ReconcileAction::Unchanged);
        }

        CompetitionRepository::new(&self.state.db)
            .update_details(
                competition.id,
                CompetitionDetailsUpdate {
                    title: details.title.clone(),
                    metric: details.metric.clone(),
                    starts_at: details.starts_at,
                    ends_at: details.ends_at,
                },
            )
            .await?;

        tracing::info!(
            "Updated competition {} from Wise Old Man: {:?} on {} ({} to {})",
            competition.id,
            details.title,
            details.metric,
            details.starts_at,
            details.ends_at
        );

        Ok(ReconcileAction::Updated)
    }

    async fn delete_local(&self, competition: &entity::competition::Model) -> Result<(), Error> {
        let txn = self.state.db.begin().await?;

        let votes = VoteRepository::new(&txn)
            .delete_by_competition(competition.id)
            .await?;
        WinnerRepository::new(&txn)
            .delete_by_competition(competition.id)
            .await?;
        CompetitionRepository::new(&txn)
            .delete(competition.id)
            .await?;

        txn.commit().await?;

        if let Some(message_id) = &competition.announcement_message_id {
            self.state.signatures.forget(message_id).await;
        }

        tracing::info!(
            "Deleted competition {} and {} vote(s), no longer on Wise Old Man",
            competition.id,
            votes
        );

        Ok(())
    }
}

fn differs(competition: &entity::competition::Model, details: &CompetitionDetails) -> bool {
    competition.title != details.title
        || competition.metric != details.metric
        || competition.starts_at != details.starts_at.naive_utc()
        || competition.ends_at != details.ends_at.naive_utc()
}
