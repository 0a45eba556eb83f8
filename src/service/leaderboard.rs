use chrono::Utc;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;
use sea_orm::TransactionTrait;

use crate::{
    data::{competition::CompetitionRepository, winner::WinnerRepository},
    error::{discord::DiscordError, Error},
    model::{app::AppState, wom::Standing},
    service::{hall_of_fame::AllTimeLeaderboard, render},
};

/// Result of refreshing a track's leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardOutcome {
    NoCompetition,
    Edited { message_id: String },
    Posted { message_id: String },
}

/// Mirrors Wise Old Man standings into Discord.
pub struct LeaderboardSync<'a> {
    state: &'a AppState,
}

impl<'a> LeaderboardSync<'a> {
    /// Creates a new instance of [`LeaderboardSync`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Refreshes the leaderboard of the track's active competition.
    ///
    /// Failures are logged and reported as `None`; they never propagate to the caller.
    pub async fn update(&self, track: Track) -> Option<LeaderboardOutcome> {
        match self.try_update(track).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!("Failed to update {} leaderboard: {:?}", track.label(), e);
                None
            }
        }
    }

    /// Refreshes the leaderboard, editing the existing message or posting a new one when it is
    /// missing or was deleted.
    pub async fn try_update(&self, track: Track) -> Result<LeaderboardOutcome, Error> {
        let competition_repo = CompetitionRepository::new(&self.state.db);

        let Some(competition) = competition_repo.find_active(track, Utc::now()).await? else {
            tracing::debug!("No active {} competition, skipping leaderboard", track.label());
            return Ok(LeaderboardOutcome::NoCompetition);
        };

        let details = self
            .state
            .tracker
            .get_competition_details(competition.id)
            .await?;
        let content = render::leaderboard(&competition, &details.standings());
        let channel_id = self.state.channels.for_track(track);

        if let Some(message_id) = &competition.leaderboard_message_id {
            match self
                .state
                .messenger
                .edit_message(channel_id, message_id, &content)
                .await
            {
                Ok(_) => {
                    tracing::debug!(
                        "Edited leaderboard {} for competition {}",
                        message_id,
                        competition.id
                    );
                    return Ok(LeaderboardOutcome::Edited {
                        message_id: message_id.clone(),
                    });
                }
                Err(DiscordError::NotFound { .. }) => {
                    tracing::info!(
                        "Leaderboard {} for competition {} no longer exists, posting a new one",
                        message_id,
                        competition.id
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        let message = self
            .state
            .messenger
            .post_message(channel_id, &content)
            .await?;
        competition_repo
            .set_leaderboard_message(competition.id, Some(message.id.clone()))
            .await?;

        tracing::info!(
            "Posted leaderboard {} for competition {}",
            message.id,
            competition.id
        );

        Ok(LeaderboardOutcome::Posted {
            message_id: message.id,
        })
    }

    /// Posts the final results of an ended competition to the hall of fame, records its
    /// winner and refreshes the all-time leaderboard.
    ///
    /// The `final_leaderboard_sent` latch is set only after the post succeeded, so a failed
    /// attempt is repeated on the next rotation pass. Once the post went out, the latch is set
    /// even if the winner can't be recorded, so the results are never posted twice.
    ///
    /// # Returns
    /// - `Ok(true)` - Results posted
    /// - `Ok(false)` - Results were already posted earlier
    pub async fn post_final_results(
        &self,
        competition: &entity::competition::Model,
    ) -> Result<bool, Error> {
        if competition.final_leaderboard_sent {
            return Ok(false);
        }

        let details = self
            .state
            .tracker
            .get_competition_details(competition.id)
            .await?;
        let standings = details.standings();

        let content = render::final_results(competition, &standings);
        self.state
            .messenger
            .post_message(&self.state.channels.hall_of_fame, &content)
            .await?;

        let winner = standings.iter().find(|s| s.gained > 0.0);
        match self.record_results(competition.id, winner).await {
            Ok(()) => {
                if let Some(winner) = winner {
                    tracing::info!(
                        "{} won competition {} with {}",
                        winner.player_name,
                        competition.id,
                        render::format_amount(winner.gained)
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to record winner of competition {}: {:?}",
                    competition.id,
                    e
                );
                CompetitionRepository::new(&self.state.db)
                    .mark_final_leaderboard_sent(competition.id)
                    .await?;
            }
        }

        tracing::info!("Posted final results for competition {}", competition.id);

        if let Err(e) = AllTimeLeaderboard::new(self.state).refresh().await {
            tracing::error!("Failed to refresh all-time leaderboard: {:?}", e);
        }

        Ok(true)
    }

    /// Stores the winner, if any, and sets the latch in one transaction.
    async fn record_results(
        &self,
        competition_id: i64,
        winner: Option<&Standing>,
    ) -> Result<(), Error> {
        let txn = self.state.db.begin().await?;

        if let Some(winner) = winner {
            WinnerRepository::new(&txn)
                .upsert(
                    competition_id,
                    winner.player_name.clone(),
                    winner.gained.round() as i64,
                    Utc::now(),
                )
                .await?;
        }
        CompetitionRepository::new(&txn)
            .mark_final_leaderboard_sent(competition_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}
