//! All-time leaderboard kept in the hall of fame channel.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;

use crate::{
    data::{
        config_value::{ConfigValueRepository, ALL_TIME_LEADERBOARD_MESSAGE},
        winner::WinnerRepository,
    },
    error::{discord::DiscordError, Error},
    model::{
        app::AppState,
        hall_of_fame::{highest_single_gain, winner_totals, AllTimeStandings},
    },
    service::{leaderboard::LeaderboardOutcome, render},
};

pub struct AllTimeLeaderboard<'a> {
    state: &'a AppState,
}

impl<'a> AllTimeLeaderboard<'a> {
    /// Creates a new instance of [`AllTimeLeaderboard`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Aggregates every recorded winner into per track totals, the best combined total and the
    /// largest single gain.
    pub async fn standings(&self) -> Result<AllTimeStandings, Error> {
        let winner_repo = WinnerRepository::new(&self.state.db);

        let sotw = winner_totals(&winner_repo.get_by_track(Track::Sotw).await?);
        let botw = winner_totals(&winner_repo.get_by_track(Track::Botw).await?);
        let all = winner_repo.get_all().await?;

        Ok(AllTimeStandings {
            sotw,
            botw,
            overall: winner_totals(&all).into_iter().next(),
            highest_single: highest_single_gain(&all),
        })
    }

    /// Edits the all-time leaderboard message in place, posting a new one when none is
    /// recorded or the recorded one was deleted.
    pub async fn refresh(&self) -> Result<LeaderboardOutcome, Error> {
        let content = render::all_time_leaderboard(&self.standings().await?);
        let channel_id = &self.state.channels.hall_of_fame;
        let config_repo = ConfigValueRepository::new(&self.state.db);

        if let Some(message_id) = config_repo.get(ALL_TIME_LEADERBOARD_MESSAGE).await? {
            match self
                .state
                .messenger
                .edit_message(channel_id, &message_id, &content)
                .await
            {
                Ok(_) => {
                    tracing::debug!("Edited all-time leaderboard {}", message_id);
                    return Ok(LeaderboardOutcome::Edited { message_id });
                }
                Err(DiscordError::NotFound { .. }) => {
                    tracing::info!("All-time leaderboard {} was deleted, reposting", message_id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let message = self.state.messenger.post_message(channel_id, &content).await?;
        config_repo
            .set(ALL_TIME_LEADERBOARD_MESSAGE, message.id.clone())
            .await?;

        tracing::info!("Posted all-time leaderboard {}", message.id);

        Ok(LeaderboardOutcome::Posted {
            message_id: message.id,
        })
    }
}
