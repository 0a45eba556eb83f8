use chrono::Utc;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::Track;
use rand::{seq::IndexedRandom, Rng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{competition::CompetitionRepository, is_unique_violation, vote::VoteRepository},
    error::{competition::CompetitionError, Error},
    model::app::AppState,
    service::{announcement::EmbedReconciler, catalog::MetricCatalog},
};

pub struct VoteTally<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteTally<'a> {
    /// Creates a new instance of [`VoteTally`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a member's vote for the next metric.
    ///
    /// Uniqueness per member and competition is enforced by the insert itself, so concurrent
    /// votes from one member leave exactly one row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored vote
    /// - `Err(CompetitionError::CompetitionNotFound)` - Competition doesn't exist
    /// - `Err(CompetitionError::UnknownMetric)` - Choice isn't a metric of the competition's track
    /// - `Err(CompetitionError::DuplicateVote)` - Member already voted in this competition
    pub async fn record_vote(
        &self,
        member_id: i64,
        competition_id: i64,
        choice: &str,
    ) -> Result<entity::competition_vote::Model, Error> {
        let competition = CompetitionRepository::new(self.db)
            .find_by_id(competition_id)
            .await?
            .ok_or(CompetitionError::CompetitionNotFound(competition_id))?;

        MetricCatalog::new(self.db)
            .require(competition.track, choice)
            .await?;

        let result = VoteRepository::new(self.db)
            .create(member_id, competition_id, choice.to_string(), Utc::now())
            .await;

        match result {
            Ok(vote) => Ok(vote),
            Err(e) if is_unique_violation(&e) => Err(CompetitionError::DuplicateVote {
                member_id,
                competition_id,
            }
            .into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Votes per choice, highest count first and ties in name order.
    pub async fn vote_counts(&self, competition_id: i64) -> Result<Vec<(String, i64)>, Error> {
        let mut counts = VoteRepository::new(self.db)
            .count_by_choice(competition_id)
            .await?;
        counts.sort_by(|(a_choice, a_count), (b_choice, b_count)| {
            b_count.cmp(a_count).then_with(|| a_choice.cmp(b_choice))
        });

        Ok(counts)
    }

    /// Winning choice of a competition's vote, `None` when nobody voted.
    pub async fn tally<R: Rng + ?Sized>(
        &self,
        competition_id: i64,
        rng: &mut R,
    ) -> Result<Option<String>, Error> {
        let counts = self.vote_counts(competition_id).await?;

        Ok(resolve_winner(&counts, rng))
    }
}

/// Choice with the strictly highest count; ties are broken uniformly at random.
pub fn resolve_winner<R: Rng + ?Sized>(counts: &[(String, i64)], rng: &mut R) -> Option<String> {
    let max = counts.iter().map(|(_, count)| *count).max()?;
    if max <= 0 {
        return None;
    }

    let tied: Vec<&String> = counts
        .iter()
        .filter(|(_, count)| *count == max)
        .map(|(choice, _)| choice)
        .collect();

    tied.choose(rng).map(|choice| choice.to_string())
}

/// Entry point for member votes cast through the vote menu.
pub struct VoteService<'a> {
    state: &'a AppState,
}

impl<'a> VoteService<'a> {
    /// Creates a new instance of [`VoteService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Records a vote in the active competition of `track` and refreshes its announcement so
    /// the menu shows the new counts.
    ///
    /// A failed announcement refresh is logged; the vote is kept.
    pub async fn cast_vote(
        &self,
        track: Track,
        member_id: i64,
        choice: &str,
    ) -> Result<entity::competition_vote::Model, Error> {
        let competition = CompetitionRepository::new(&self.state.db)
            .find_active(track, Utc::now())
            .await?
            .ok_or(CompetitionError::NoActiveCompetition(track))?;

        let vote = VoteTally::new(&self.state.db)
            .record_vote(member_id, competition.id, choice)
            .await?;

        tracing::info!(
            "Member {} voted {} in {} competition {}",
            member_id,
            choice,
            track.label(),
            competition.id
        );

        if let Err(e) = EmbedReconciler::new(self.state).ensure(track, false).await {
            tracing::error!(
                "Failed to refresh {} announcement after vote: {:?}",
                track.label(),
                e
            );
        }

        Ok(vote)
    }
}
