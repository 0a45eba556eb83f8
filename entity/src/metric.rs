use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MetricKind;

/// Catalog entry for a competable skill or boss, keyed by its Wise Old Man metric name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "metric")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(indexed)]
    pub kind: MetricKind,
    pub last_selected_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
