use std::collections::HashSet;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::MetricKind;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct MetricRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MetricRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts catalog entries that don't exist yet, leaving existing rows untouched.
    ///
    /// Returns the number of entries inserted.
    pub async fn insert_missing(&self, metrics: Vec<(String, MetricKind)>) -> Result<usize, DbErr> {
        let existing: HashSet<String> = entity::prelude::Metric::find()
            .select_only()
            .column(entity::metric::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let missing: Vec<entity::metric::ActiveModel> = metrics
            .into_iter()
            .filter(|(name, _)| !existing.contains(name))
            .map(|(name, kind)| entity::metric::ActiveModel {
                name: ActiveValue::Set(name),
                kind: ActiveValue::Set(kind),
                last_selected_at: ActiveValue::Set(None),
            })
            .collect();

        let inserted = missing.len();
        if inserted == 0 {
            return Ok(0);
        }

        entity::prelude::Metric::insert_many(missing)
            .exec(self.db)
            .await?;

        Ok(inserted)
    }

    /// Catalog entries of a kind ordered by name.
    pub async fn get_by_kind(
        &self,
        kind: MetricKind,
    ) -> Result<Vec<entity::metric::Model>, DbErr> {
        entity::prelude::Metric::find()
            .filter(entity::metric::Column::Kind.eq(kind))
            .order_by_asc(entity::metric::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::metric::Model>, DbErr> {
        entity::prelude::Metric::find_by_id(name.to_string())
            .one(self.db)
            .await
    }

    pub async fn update_last_selected(&self, name: &str, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::Metric::update_many()
            .col_expr(
                entity::metric::Column::LastSelectedAt,
                Expr::value(Some(at.naive_utc())),
            )
            .filter(entity::metric::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
