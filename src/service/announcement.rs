use chrono::Utc;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;

use crate::{
    data::competition::CompetitionRepository,
    error::{discord::DiscordError, Error},
    model::app::AppState,
    service::{render, rotation::MetricRotationSelector, vote::VoteTally},
};

/// Result of reconciling a competition announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Track has no active or scheduled competition
    NoCompetition,
    /// Announcement already shows the current content
    Unchanged,
    /// Existing announcement was edited in place
    Edited { message_id: String },
    /// New announcement was posted and its id stored
    Posted { message_id: String },
}

/// Keeps exactly one up to date announcement message per competition.
pub struct EmbedReconciler<'a> {
    state: &'a AppState,
}

impl<'a> EmbedReconciler<'a> {
    /// Creates a new instance of [`EmbedReconciler`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Reconciles the announcement of the track's active competition, falling back to the
    /// scheduled one.
    pub async fn ensure(&self, track: Track, force_refresh: bool) -> Result<EnsureOutcome, Error> {
        let now = Utc::now();
        let competition_repo = CompetitionRepository::new(&self.state.db);

        let competition = match competition_repo.find_active(track, now).await? {
            Some(competition) => Some(competition),
            None => competition_repo.find_scheduled(track, now).await?,
        };

        let Some(competition) = competition else {
            tracing::debug!("No {} competition to announce", track.label());
            return Ok(EnsureOutcome::NoCompetition);
        };

        self.ensure_competition(&competition, force_refresh).await
    }

    /// Creates or edits the announcement of `competition`.
    ///
    /// # Logic
    /// - Existing message that resolves with an unchanged signature: nothing to do unless
    ///   `force_refresh` is set
    /// - Existing message that resolves: edited in place
    /// - No message, or the message was deleted: a new one is posted and its id persisted
    pub async fn ensure_competition(
        &self,
        competition: &entity::competition::Model,
        force_refresh: bool,
    ) -> Result<EnsureOutcome, Error> {
        let options = MetricRotationSelector::new(&self.state.db)
            .vote_options(competition.track, competition.rotation_index)
            .await?;
        let counts = VoteTally::new(&self.state.db)
            .vote_counts(competition.id)
            .await?;

        let content = render::announcement(competition, &options, &counts);
        let signature = render::signature(&content)?;
        let channel_id = self.state.channels.for_track(competition.track);
        let messenger = &self.state.messenger;

        if let Some(message_id) = &competition.announcement_message_id {
            let existing = messenger.fetch_message(channel_id, message_id).await?;

            if existing.is_some() {
                if !force_refresh && self.state.signatures.matches(message_id, &signature).await {
                    tracing::debug!(
                        "Announcement for competition {} is up to date",
                        competition.id
                    );
                    return Ok(EnsureOutcome::Unchanged);
                }

                match messenger
                    .edit_message(channel_id, message_id, &content)
                    .await
                {
                    Ok(_) => {
                        self.state.signatures.store(message_id, signature).await;
                        tracing::info!(
                            "Edited announcement {} for competition {}",
                            message_id,
                            competition.id
                        );
                        return Ok(EnsureOutcome::Edited {
                            message_id: message_id.clone(),
                        });
                    }
                    // Deleted between fetch and edit
                    Err(DiscordError::NotFound { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }

            self.state.signatures.forget(message_id).await;
            tracing::info!(
                "Announcement {} for competition {} no longer exists, posting a new one",
                message_id,
                competition.id
            );
        }

        let message = messenger.post_message(channel_id, &content).await?;
        CompetitionRepository::new(&self.state.db)
            .set_announcement_message(competition.id, Some(message.id.clone()))
            .await?;
        self.state.signatures.store(&message.id, signature).await;

        tracing::info!(
            "Posted announcement {} for competition {}",
            message.id,
            competition.id
        );

        Ok(EnsureOutcome::Posted {
            message_id: message.id,
        })
    }
}
