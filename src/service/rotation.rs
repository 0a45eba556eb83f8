//! Metric selection for new competitions.
//!
//! Skills are picked at random while avoiding an immediate repeat. Bosses are too many for one
//! vote menu, so the catalog is split into fixed-size chunks and each new boss competition shows
//! the next chunk, with the position persisted in the `boss_rotation_index` config value.

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{MetricKind, Track};
use rand::{seq::IndexedRandom, Rng};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        competition::CompetitionRepository,
        config_value::{ConfigValueRepository, BOSS_ROTATION_INDEX},
        metric::MetricRepository,
    },
    error::{competition::CompetitionError, Error},
    model::discord::MAX_SELECT_OPTIONS,
};

/// Number of bosses offered in one vote menu.
pub const BOSS_CHUNK_SIZE: usize = MAX_SELECT_OPTIONS;

/// One vote menu worth of bosses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossChunk {
    /// Rotation index the chunk was computed from
    pub index: i32,
    pub metrics: Vec<String>,
}

pub struct MetricRotationSelector<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetricRotationSelector<'a> {
    /// Creates a new instance of [`MetricRotationSelector`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Picks a random metric of `kind`, excluding the metric of the track's most recently
    /// ended competition.
    ///
    /// A catalog with a single entry returns that entry even if it was just competed on.
    ///
    /// # Returns
    /// - `Ok(String)` - Selected metric name
    /// - `Err(CompetitionError::EmptyCatalog)` - No catalog entries of `kind`
    pub async fn pick_random<R: Rng + ?Sized>(
        &self,
        kind: MetricKind,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<String, Error> {
        let names: Vec<String> = MetricRepository::new(self.db)
            .get_by_kind(kind)
            .await?
            .into_iter()
            .map(|m| m.name)
            .collect();

        let last = CompetitionRepository::new(self.db)
            .find_latest_ended(kind.track(), now)
            .await?
            .map(|c| c.metric);

        choose_excluding(&names, last.as_deref(), rng)
            .ok_or_else(|| CompetitionError::EmptyCatalog(kind).into())
    }

    /// Returns the boss chunk at the persisted rotation index and advances the index by one.
    ///
    /// The read and the increment run in one transaction.
    pub async fn pick_boss_chunk(&self) -> Result<BossChunk, Error> {
        let txn = self.db.begin().await?;

        let index = stored_rotation_index(&txn).await?;
        let chunk = boss_chunk_from(&txn, index).await?;
        advance_boss_rotation(&txn, &chunk).await?;
        txn.commit().await?;

        tracing::debug!("Selected boss chunk at rotation index {}", index);

        Ok(chunk)
    }

    /// Returns the boss chunk at the persisted rotation index without advancing it.
    ///
    /// Pair with [`advance_boss_rotation`] once the competition using the chunk is stored.
    pub async fn next_boss_chunk(&self) -> Result<BossChunk, Error> {
        let index = stored_rotation_index(self.db).await?;

        boss_chunk_from(self.db, index).await
    }

    /// Recomputes the boss chunk for a stored rotation index without advancing it.
    pub async fn boss_chunk_at(&self, index: i32) -> Result<BossChunk, Error> {
        boss_chunk_from(self.db, index).await
    }

    /// Metrics offered in the vote menu of a competition on `track`.
    ///
    /// An empty catalog yields no options rather than an error so the announcement can still
    /// be rendered.
    pub async fn vote_options(&self, track: Track, rotation_index: i32) -> Result<Vec<String>, Error> {
        match track {
            Track::Sotw => {
                let mut skills: Vec<String> = MetricRepository::new(self.db)
                    .get_by_kind(MetricKind::Skill)
                    .await?
                    .into_iter()
                    .map(|m| m.name)
                    .collect();
                skills.truncate(MAX_SELECT_OPTIONS);
                Ok(skills)
            }
            Track::Botw => match self.boss_chunk_at(rotation_index).await {
                Ok(chunk) => Ok(chunk.metrics),
                Err(Error::CompetitionError(CompetitionError::EmptyCatalog(_))) => Ok(Vec::new()),
                Err(e) => Err(e),
            },
        }
    }
}

/// Stores the index following `chunk` so the next boss competition shows the next chunk.
pub async fn advance_boss_rotation<C: ConnectionTrait>(
    db: &C,
    chunk: &BossChunk,
) -> Result<(), Error> {
    ConfigValueRepository::new(db)
        .set(BOSS_ROTATION_INDEX, chunk.index.wrapping_add(1).to_string())
        .await?;

    Ok(())
}

/// Persisted boss rotation index, 0 when never set.
async fn stored_rotation_index<C: ConnectionTrait>(db: &C) -> Result<i32, Error> {
    match ConfigValueRepository::new(db).get(BOSS_ROTATION_INDEX).await? {
        Some(value) => value.parse::<i32>().map_err(|e| {
            Error::ParseError(format!("{} value {:?}: {}", BOSS_ROTATION_INDEX, value, e))
        }),
        None => Ok(0),
    }
}

async fn boss_chunk_from<C: ConnectionTrait>(db: &C, index: i32) -> Result<BossChunk, Error> {
    let bosses: Vec<String> = MetricRepository::new(db)
        .get_by_kind(MetricKind::Boss)
        .await?
        .into_iter()
        .map(|m| m.name)
        .collect();
    let metrics =
        chunk_at(&bosses, index).ok_or(CompetitionError::EmptyCatalog(MetricKind::Boss))?;

    Ok(BossChunk { index, metrics })
}

/// Uniform choice among `names` other than `exclude`, falling back to the sole entry when the
/// exclusion would leave nothing.
fn choose_excluding<R: Rng + ?Sized>(
    names: &[String],
    exclude: Option<&str>,
    rng: &mut R,
) -> Option<String> {
    if names.len() == 1 {
        return names.first().cloned();
    }

    let candidates: Vec<&String> = names
        .iter()
        .filter(|name| Some(name.as_str()) != exclude)
        .collect();

    candidates.choose(rng).map(|name| name.to_string())
}

/// Chunk `index` of `names` split into [`BOSS_CHUNK_SIZE`] entries, wrapping around the chunk
/// count. `None` for an empty list.
fn chunk_at(names: &[String], index: i32) -> Option<Vec<String>> {
    let chunks: Vec<&[String]> = names.chunks(BOSS_CHUNK_SIZE).collect();
    if chunks.is_empty() {
        return None;
    }

    let position = i64::from(index).rem_euclid(chunks.len() as i64) as usize;
    chunks.get(position).map(|chunk| chunk.to_vec())
}
