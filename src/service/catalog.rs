use entity::sea_orm_active_enums::{MetricKind, Track};
use sea_orm::DatabaseConnection;

use crate::{
    data::metric::MetricRepository,
    error::{competition::CompetitionError, Error},
    model::catalog::{BOSSES, SKILLS},
};

pub struct MetricCatalog<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetricCatalog<'a> {
    /// Creates a new instance of [`MetricCatalog`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the built-in skills and bosses missing from the catalog.
    ///
    /// Returns the number of entries added.
    pub async fn seed(&self) -> Result<usize, Error> {
        let builtin = SKILLS
            .iter()
            .map(|name| (name.to_string(), MetricKind::Skill))
            .chain(BOSSES.iter().map(|name| (name.to_string(), MetricKind::Boss)))
            .collect();

        let inserted = MetricRepository::new(self.db).insert_missing(builtin).await?;

        Ok(inserted)
    }

    pub async fn list(&self, kind: MetricKind) -> Result<Vec<entity::metric::Model>, Error> {
        Ok(MetricRepository::new(self.db).get_by_kind(kind).await?)
    }

    /// Metric names of a kind in name order.
    pub async fn names(&self, kind: MetricKind) -> Result<Vec<String>, Error> {
        Ok(self.list(kind).await?.into_iter().map(|m| m.name).collect())
    }

    /// Looks up `metric` and checks it is competed on by `track`.
    ///
    /// # Returns
    /// - `Ok(Model)` - Catalog entry of the track's kind
    /// - `Err(CompetitionError::UnknownMetric)` - Metric missing or belonging to the other track
    pub async fn require(&self, track: Track, metric: &str) -> Result<entity::metric::Model, Error> {
        let entry = MetricRepository::new(self.db).find_by_name(metric).await?;

        match entry {
            Some(entry) if entry.kind == track.metric_kind() => Ok(entry),
            _ => Err(CompetitionError::UnknownMetric {
                track,
                metric: metric.to_string(),
            }
            .into()),
        }
    }
}
