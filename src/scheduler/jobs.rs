//! Periodic jobs run by the cron scheduler.
//!
//! Each job returns the number of records it changed so the scheduler can log it.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;

use crate::{
    error::Error,
    model::app::AppState,
    service::{
        announcement::{EmbedReconciler, EnsureOutcome},
        leaderboard::{LeaderboardOutcome, LeaderboardSync},
        reconcile::CompetitionReconciler,
    },
};

/// Refreshes the leaderboard of both tracks, returning how many messages were edited or posted.
pub async fn refresh_leaderboards(state: &AppState) -> Result<usize, Error> {
    let leaderboard = LeaderboardSync::new(state);

    let mut refreshed = 0;
    for track in Track::ALL {
        match leaderboard.update(track).await {
            Some(LeaderboardOutcome::Edited { .. }) | Some(LeaderboardOutcome::Posted { .. }) => {
                refreshed += 1
            }
            Some(LeaderboardOutcome::NoCompetition) | None => {}
        }
    }

    Ok(refreshed)
}

/// Reconciles the announcement of both tracks, returning how many messages were edited or
/// posted.
///
/// One track failing doesn't stop the other.
pub async fn refresh_announcements(state: &AppState) -> Result<usize, Error> {
    let reconciler = EmbedReconciler::new(state);

    let mut refreshed = 0;
    for track in Track::ALL {
        match reconciler.ensure(track, false).await {
            Ok(EnsureOutcome::Edited { .. }) | Ok(EnsureOutcome::Posted { .. }) => refreshed += 1,
            Ok(EnsureOutcome::NoCompetition) | Ok(EnsureOutcome::Unchanged) => {}
            Err(e) => {
                tracing::error!("Failed to reconcile {} announcement: {:?}", track.label(), e)
            }
        }
    }

    Ok(refreshed)
}

/// Reconciles every competition with Wise Old Man, returning how many were updated or deleted.
pub async fn reconcile_competitions(state: &AppState) -> Result<usize, Error> {
    let summary = CompetitionReconciler::new(state).reconcile_all().await?;

    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} competition(s) could not be reconciled",
            summary.failed,
            summary.checked
        );
    }

    Ok(summary.updated + summary.deleted)
}
