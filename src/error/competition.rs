use entity::sea_orm_active_enums::{MetricKind, Track};
use thiserror::Error;

/// How a [`CompetitionError`] should be surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionErrorKind {
    /// The request itself is invalid and will never succeed as given.
    Validation,
    /// The request collides with existing state.
    Conflict,
    /// The referenced record does not exist.
    NotFound,
}

#[derive(Error, Debug)]
pub enum CompetitionError {
    /// Metric is not in the catalog for the kind competed on by the track.
    #[error("{metric:?} is not a {} metric and cannot be used for {}", .track.metric_kind().label(), .track.label())]
    UnknownMetric { track: Track, metric: String },
    /// Catalog holds no entries of the requested kind.
    #[error("The metric catalog has no {} entries", .0.label())]
    EmptyCatalog(MetricKind),
    /// Rotation period must be at least one week.
    #[error("Rotation period must be at least 1 week, got {0}")]
    InvalidRotationPeriod(i64),
    /// Member already voted in this competition.
    #[error("Member {member_id} has already voted in competition {competition_id}")]
    DuplicateVote { member_id: i64, competition_id: i64 },
    /// Metric is already waiting in the queue.
    #[error("{metric:?} is already queued for {}", .track.label())]
    DuplicateQueueEntry { track: Track, metric: String },
    /// Competition does not exist locally.
    #[error("Competition {0} not found")]
    CompetitionNotFound(i64),
    /// Track has no active competition to vote in.
    #[error("There is no active {} competition", .0.label())]
    NoActiveCompetition(Track),
}

impl CompetitionError {
    pub fn kind(&self) -> CompetitionErrorKind {
        match self {
            Self::UnknownMetric { .. } | Self::EmptyCatalog(_) | Self::InvalidRotationPeriod(_) => {
                CompetitionErrorKind::Validation
            }
            Self::DuplicateVote { .. } | Self::DuplicateQueueEntry { .. } => {
                CompetitionErrorKind::Conflict
            }
            Self::CompetitionNotFound(_) | Self::NoActiveCompetition(_) => {
                CompetitionErrorKind::NotFound
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == CompetitionErrorKind::NotFound
    }
}
